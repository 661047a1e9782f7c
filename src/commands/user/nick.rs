use serenity::{
    all::CommandOptionType,
    builder::{CreateCommand, CreateCommandOption},
};

use crate::{
    common::{
        mutation::MemberAction,
        options::Options,
        profile::{nickname_field, profile},
    },
    models::{
        command::{Command, CommandContext, CommandContextReply},
        invocation::Invocation,
        membership::MembershipApi,
        response::{Response, ResponseResult},
    },
};

pub async fn nick(
    api: &dyn MembershipApi,
    reply: &dyn CommandContextReply,
    invocation: &Invocation,
    nickname: Option<String>,
) -> ResponseResult {
    let target = invocation.resolve_target();

    match nickname {
        None => {
            reply
                .reply(Response::new().embed(profile(target, Some(nickname_field(target)))))
                .await
        }
        Some(nickname) => {
            let action = MemberAction::SetNickname(nickname);
            super::dispatch(api, reply, &invocation.invoker, target, action).await
        }
    }
}

pub struct NickCommand;

#[async_trait::async_trait]
impl Command for NickCommand {
    fn name(&self) -> &'static str {
        "nick"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new("nick")
            .dm_permission(false)
            .description("Display or set the user's nickname")
            .add_option(
                CreateCommandOption::new(CommandOptionType::User, "user", "The user to view")
                    .required(false),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "nickname",
                    "The nickname to set",
                )
                .required(false)
                .max_length(32),
            )
    }

    async fn router(&self, ctx: &CommandContext) -> ResponseResult {
        let options = Options {
            options: ctx.interaction.data.options(),
        };
        let invocation = super::invocation(ctx, &options).await?;

        nick(
            &*ctx.ctx.http,
            ctx,
            &invocation,
            options.get_string("nickname"),
        )
        .await
    }
}
