use tracing::debug;

use crate::{
    common::{
        mutation::{execute, MemberAction},
        options::Options,
        permissions::authorize,
        profile::{failure, profile},
    },
    models::{
        command::{Command, CommandContext, CommandContextReply},
        invocation::Invocation,
        member::MemberProfile,
        membership::MembershipApi,
        response::{Response, ResponseError, ResponseResult},
    },
};

pub mod ban;
pub mod deafen;
pub mod display;
pub mod kick;
pub mod mute;
pub mod nick;
pub mod roles;

pub fn get_user_commands() -> Vec<Box<dyn Command>> {
    vec![
        Box::new(display::DisplayCommand),
        Box::new(roles::RolesCommand),
        Box::new(nick::NickCommand),
        Box::new(mute::MuteCommand),
        Box::new(deafen::DeafenCommand),
        Box::new(kick::KickCommand),
        Box::new(ban::BanCommand),
    ]
}

fn missing_member(err: serenity::Error) -> ResponseError {
    debug!("Could not fetch the target member: {}", err);
    ResponseError::Execution(
        "Could not find that member",
        Some("They may have left the server.".to_string()),
    )
}

/// Collects the invoker and, when the `user` option is present, the fetched target member.
pub async fn invocation(
    ctx: &CommandContext,
    options: &Options<'_>,
) -> Result<Invocation, ResponseError> {
    let target = match options.get_user("user") {
        Some(user) => {
            let member = ctx
                .guild
                .id
                .member(&ctx.ctx, user.id)
                .await
                .map_err(missing_member)?;
            Some(MemberProfile::from_member(&member, &ctx.guild))
        }
        None => None,
    };

    Ok(Invocation {
        invoker: ctx.invoker.clone(),
        target,
    })
}

/// Gates, performs and reports a single action on `target`.
///
/// A rejected action sends nothing. A failed action sends an ephemeral
/// failure naming the action; a successful one sends the target's profile
/// with the change as its only field.
pub async fn dispatch(
    api: &dyn MembershipApi,
    reply: &dyn CommandContextReply,
    invoker: &MemberProfile,
    target: &MemberProfile,
    action: MemberAction,
) -> ResponseResult {
    if let Some(capability) = action.capability() {
        if !authorize(invoker, capability) {
            debug!(
                "User {} was not permitted to perform {}",
                invoker.user_id,
                action.kind()
            );
            return Ok(());
        }
    }

    let response = match execute(api, target, action).await {
        Ok(delta) => Response::new().embed(profile(target, Some(delta.into()))),
        Err(err) => Response::new().embed(failure(&err)).ephemeral(true),
    };

    reply.reply(response).await
}
