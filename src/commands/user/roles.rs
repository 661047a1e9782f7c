use serenity::{
    all::CommandOptionType,
    builder::{CreateCommand, CreateCommandOption},
};

use crate::{
    common::{
        mutation::MemberAction,
        options::Options,
        profile::{profile, roles_field},
    },
    models::{
        command::{Command, CommandContext, CommandContextReply},
        invocation::Invocation,
        member::RoleRef,
        membership::MembershipApi,
        response::{Response, ResponseResult},
    },
};

/// Lists the target's roles, or toggles `role` on the target when given.
pub async fn roles(
    api: &dyn MembershipApi,
    reply: &dyn CommandContextReply,
    invocation: &Invocation,
    role: Option<RoleRef>,
) -> ResponseResult {
    let target = invocation.resolve_target();

    match role {
        None => {
            reply
                .reply(Response::new().embed(profile(target, Some(roles_field(target)))))
                .await
        }
        Some(role) => {
            let action = MemberAction::toggle_role(target, role);
            super::dispatch(api, reply, &invocation.invoker, target, action).await
        }
    }
}

pub struct RolesCommand;

#[async_trait::async_trait]
impl Command for RolesCommand {
    fn name(&self) -> &'static str {
        "roles"
    }

    fn register(&self) -> CreateCommand {
        CreateCommand::new("roles")
            .dm_permission(false)
            .description("Display or modify the user's roles")
            .add_option(
                CreateCommandOption::new(CommandOptionType::User, "user", "The user to view")
                    .required(false),
            )
            .add_option(
                CreateCommandOption::new(
                    CommandOptionType::Role,
                    "role",
                    "The role to add or remove",
                )
                .required(false),
            )
    }

    async fn router(&self, ctx: &CommandContext) -> ResponseResult {
        let options = Options {
            options: ctx.interaction.data.options(),
        };
        let invocation = super::invocation(ctx, &options).await?;
        let role = options.get_role("role").as_ref().map(RoleRef::from);

        roles(&*ctx.ctx.http, ctx, &invocation, role).await
    }
}
