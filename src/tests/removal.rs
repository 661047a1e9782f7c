//! Kick and ban: no in-handler gate, reasons quoted in the outcome.

use serenity::all::Permissions;

use super::harness::{invocation, member, MockMembership, RecordingReply};
use crate::{
    commands::user::{ban::ban, kick::kick},
    common::mutation::{MemberAction, DEFAULT_REASON},
    models::response::EmbedField,
};

#[tokio::test]
async fn ban_without_reason_uses_default() {
    let target = member(2);
    let api = MockMembership::new(target.clone());
    let reply = RecordingReply::default();

    ban(&api, &reply, &invocation(member(1), Some(target)), 0, None)
        .await
        .unwrap();

    assert_eq!(
        api.calls(),
        vec![MemberAction::Ban {
            days: 0,
            reason: DEFAULT_REASON.to_string()
        }]
    );
    let (embed, ephemeral) = reply.only_embed();
    assert!(!ephemeral);
    assert_eq!(embed.description.as_deref(), Some("<@2>"));
    assert_eq!(
        embed.fields,
        vec![EmbedField::new("Banned", "```There is no reason.```", true)]
    );
}

#[tokio::test]
async fn ban_passes_days_and_reason() {
    let target = member(2);
    let api = MockMembership::new(target.clone());
    let reply = RecordingReply::default();

    ban(
        &api,
        &reply,
        &invocation(member(1), Some(target)),
        7,
        Some("raiding".to_string()),
    )
    .await
    .unwrap();

    assert_eq!(
        api.calls(),
        vec![MemberAction::Ban {
            days: 7,
            reason: "raiding".to_string()
        }]
    );
}

#[tokio::test]
async fn kick_is_not_gated_in_the_handler() {
    let mut invoker = member(1);
    invoker.permissions = Permissions::KICK_MEMBERS | Permissions::BAN_MEMBERS;
    let target = member(2);
    let api = MockMembership::new(target.clone());
    let reply = RecordingReply::default();

    kick(
        &api,
        &reply,
        &invocation(invoker, Some(target)),
        Some("spam".to_string()),
    )
    .await
    .unwrap();

    assert_eq!(
        api.calls(),
        vec![MemberAction::Kick {
            reason: "spam".to_string()
        }]
    );
    let (embed, _) = reply.only_embed();
    assert_eq!(
        embed.fields,
        vec![EmbedField::new("Kicked", "```spam```", true)]
    );
}
