use serenity::{
    all::CommandOptionType,
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

pub async fn mute(
    api: &dyn MembershipApi,
    reply: &dyn CommandContextReply,
    invocation: &Invocation,
) -> ResponseResult {
    let target = invocation.resolve_target();
    let action = MemberAction::toggle_mute(target);

    super::dispatch(api, reply, &invocation.invoker, target, action).await
}

pub struct MuteCommand;

#[async_trait::async_trait]
impl Command for MuteCommand {
    fn name(&self) -> &'static str {
        "mute"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new("mute")
            .dm_permission(false)
            .description("If the user is muted, un-mute. Otherwise, mute")
            .add_option(
                CreateCommandOption::new(CommandOptionType::User, "user", "The user to mute")
                    .required(false),
            )
    }

    async fn router(&self, ctx: &CommandContext) -> ResponseResult {
        let options = Options {
            options: ctx.interaction.data.options(),
        };
        let invocation = super::invocation(ctx, &options).await?;

        mute(&*ctx.ctx.http, ctx, &invocation).await
    }
}
