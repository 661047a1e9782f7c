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

pub const MAX_DELETE_DAYS: u8 = 7;

pub async fn ban(
    api: &dyn MembershipApi,
    reply: &dyn CommandContextReply,
    invocation: &Invocation,
    days: u8,
    reason: Option<String>,
) -> ResponseResult {
    let target = invocation.resolve_target();

    super::dispatch(
        api,
        reply,
        &invocation.invoker,
        target,
        MemberAction::ban(days, reason),
    )
    .await
}

/// Message history window in days, kept within what the ban endpoint accepts.
pub fn delete_days(days: Option<i64>) -> u8 {
    days.map_or(0, |days| {
        u8::try_from(days.clamp(0, i64::from(MAX_DELETE_DAYS))).unwrap_or(0)
    })
}

pub struct BanCommand;

#[async_trait::async_trait]
impl Command for BanCommand {
    fn name(&self) -> &'static str {
        "ban"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new("ban")
            .dm_permission(false)
            .default_member_permissions(Permissions::BAN_MEMBERS)
            .description("Bans the user")
            .add_option(
                CreateCommandOption::new(CommandOptionType::User, "user", "The user to ban")
                    .required(true),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Integer,
                    "days",
                    "Days of message history to delete",
                )
                .min_int_value(0)
                .max_int_value(MAX_DELETE_DAYS.into())
                .required(false),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::String,
                    "reason",
                    "The reason for the ban",
                )
                .required(false),
            )
    }

    async fn router(&self, ctx: &CommandContext) -> ResponseResult {
        let options = Options {
            options: ctx.interaction.data.options(),
        };
        let invocation = super::invocation(ctx, &options).await?;

        ban(
            &*ctx.ctx.http,
            ctx,
            &invocation,
            delete_days(options.get_integer("days")),
            options.get_string("reason"),
        )
        .await
    }
}
