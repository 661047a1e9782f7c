use std::sync::atomic::AtomicBool;

use serenity::{
    all::{CommandInteraction, PartialGuild},
    prelude::Context as IncomingContext,
};
use tracing::{debug, error};

use crate::{
    commands::get_command_list,
    common::colors,
    models::{
        command::{CommandContext, CommandContextReply, FailedCommandContext},
        handler::Handler,
        member::MemberProfile,
        response::{Embed, Response, ResponseError},
    },
};

fn execution_error(title: &str, description: Option<String>) -> Response {
    Response::new()
        .embed(Embed {
            title: Some(title.to_string()),
            description,
            thumbnail: None,
            footer: None,
            fields: vec![],
            color: colors::ERROR,
        })
        .ephemeral(true)
}

impl Handler {
    pub async fn on_command(&self, ctx: IncomingContext, command: CommandInteraction) {
        let start = std::time::Instant::now();

        let (Some(guild_id), Some(member)) = (command.guild_id, command.member.clone()) else {
            let fail_context = FailedCommandContext {
                ctx,
                interaction: command,
            };
            if let Err(err) = fail_context
                .reply(Response::new().content("Commands cannot be used outside of guilds".to_string()))
                .await
            {
                error!("Failed to reply to command: {:?}", err);
            }
            return;
        };

        let cached_guild = guild_id
            .to_guild_cached(&ctx.cache)
            .map(|guild| PartialGuild::from(guild.clone()));
        let guild = match cached_guild {
            Some(guild) => guild,
            None => match guild_id.to_partial_guild(&ctx.http).await {
                Ok(guild) => guild,
                Err(err) => {
                    error!("Could not obtain guild {}: {}", guild_id, err);
                    let fail_context = FailedCommandContext {
                        ctx,
                        interaction: command,
                    };
                    if let Err(err) = fail_context
                        .reply(Response::new().content("Could not obtain the guild".to_string()))
                        .await
                    {
                        error!("Failed to reply to command: {:?}", err);
                    }
                    return;
                }
            },
        };

        debug!("Took {:?} to get guild ID and guild", start.elapsed());

        let command_context = CommandContext {
            invoker: MemberProfile::from_member(&member, &guild),
            ctx,
            has_responsed: AtomicBool::new(false),
            guild,
            interaction: command,
        };

        debug!("Context generated in {:?}", start.elapsed());

        let name = command_context.interaction.data.name.as_str();
        for existing_command in get_command_list() {
            if existing_command.name() != name {
                continue;
            }

            match existing_command.router(&command_context).await {
                Ok(()) => {}
                Err(ResponseError::Execution(title, description)) => {
                    if let Err(err) = command_context
                        .reply(execution_error(title, description))
                        .await
                    {
                        error!("Failed to reply to command: {:?}", err);
                    }
                }
                Err(err) => error!("Failed to handle command {}: {:?}", name, err),
            }
        }

        debug!("Took {:?} to handle a command", start.elapsed());
    }
}
