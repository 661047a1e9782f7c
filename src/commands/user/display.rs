use serenity::{
    all::CommandOptionType,
    builder::{CreateCommand, CreateCommandOption},
};

use crate::{
    common::{options::Options, profile::DisplayMode},
    models::{
        command::{Command, CommandContext, CommandContextReply},
        invocation::Invocation,
        response::{Response, ResponseResult},
    },
};

pub async fn display(
    reply: &dyn CommandContextReply,
    invocation: &Invocation,
    mode: DisplayMode,
) -> ResponseResult {
    reply
        .reply(Response::new().embed(mode.render(invocation.resolve_target())))
        .await
}

pub struct DisplayCommand;

#[async_trait::async_trait]
impl Command for DisplayCommand {
    fn name(&self) -> &'static str {
        "display"
    }

    fn register(&self) -> CreateCommand {
        let option = DisplayMode::choices().into_iter().fold(
            CreateCommandOption::new(
                CommandOptionType::Integer,
                "option",
                "Which part of the profile to show",
            )
            .required(false),
            |option, (name, value)| option.add_int_choice(name, value),
        );

        CreateCommand::new("display")
            .dm_permission(false)
            .description("Displays the user's information")
            .add_option(
                CreateCommandOption::new(CommandOptionType::User, "user", "The user to display")
                    .required(false),
            )
            .add_option(option)
    }

    async fn router(&self, ctx: &CommandContext) -> ResponseResult {
        let options = Options {
            options: ctx.interaction.data.options(),
        };
        let invocation = super::invocation(ctx, &options).await?;
        let mode = DisplayMode::from_choice(options.get_integer("option"));

        display(ctx, &invocation, mode).await
    }
}
