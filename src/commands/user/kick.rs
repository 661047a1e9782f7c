use serenity::{
    all::{CommandOptionType, Permissions},
    builder::{CreateCommand, CreateCommandOption},
};

use crate::{
    common::{mutation::MemberAction, options::Options},
    models::{
        command::{Command, CommandContext, CommandContextReply},
        invocation::Invocation,
        membership::MembershipApi,
        response::ResponseResult,
    },
};

pub async fn kick(
    api: &dyn MembershipApi,
    reply: &dyn CommandContextReply,
    invocation: &Invocation,
    reason: Option<String>,
) -> ResponseResult {
    let target = invocation.resolve_target();

    super::dispatch(
        api,
        reply,
        &invocation.invoker,
        target,
        MemberAction::kick(reason),
    )
    .await
}

pub struct KickCommand;

#[async_trait::async_trait]
impl Command for KickCommand {
    fn name(&self) -> &'static str {
        "kick"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new("kick")
            .dm_permission(false)
            .default_member_permissions(Permissions::KICK_MEMBERS)
            .description("Kicks the user")
            .add_option(
                CreateCommandOption::new(CommandOptionType::User, "user", "The user to kick")
                    .required(true),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "reason",
                    "The reason for the kick",
                )
                .required(false),
            )
    }

    async fn router(&self, ctx: &CommandContext) -> ResponseResult {
        let options = Options {
            options: ctx.interaction.data.options(),
        };
        let invocation = super::invocation(ctx, &options).await?;

        kick(
            &*ctx.ctx.http,
            ctx,
            &invocation,
            options.get_string("reason"),
        )
        .await
    }
}
