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

pub async fn deafen(
    api: &dyn MembershipApi,
    reply: &dyn CommandContextReply,
    invocation: &Invocation,
) -> ResponseResult {
    let target = invocation.resolve_target();
    let action = MemberAction::toggle_deafen(target);

    super::dispatch(api, reply, &invocation.invoker, target, action).await
}

pub struct DeafenCommand;

#[async_trait::async_trait]
impl Command for DeafenCommand {
    fn name(&self) -> &'static str {
        "deafen"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new("deafen")
            .dm_permission(false)
            .description("If the user is deafened, un-deafen. Otherwise, deafen")
            .add_option(
                CreateCommandOption::new(CommandOptionType::User, "user", "The user to deafen")
                    .required(false),
            )
    }

    async fn router(&self, ctx: &CommandContext) -> ResponseResult {
        let options = Options {
            options: ctx.interaction.data.options(),
        };
        let invocation = super::invocation(ctx, &options).await?;

        deafen(&*ctx.ctx.http, ctx, &invocation).await
    }
}
