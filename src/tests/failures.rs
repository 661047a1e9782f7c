//! Membership API failures become a private failure message naming the action.

use super::harness::{invocation, member, role, MockMembership, RecordingReply};
use crate::{
    commands::user::{ban::ban, deafen::deafen, kick::kick, mute::mute, nick::nick, roles::roles},
    common::colors,
    models::{invocation::Invocation, member::MemberProfile},
};

fn target() -> MemberProfile {
    let mut target = member(2);
    target.muted = true;
    target.roles.push(role(8, "Verified", 2));
    target
}

fn assert_failure(reply: &RecordingReply, title: &str) {
    let (embed, ephemeral) = reply.only_embed();

    assert!(ephemeral);
    assert_eq!(embed.title.as_deref(), Some(title));
    assert_eq!(embed.color, colors::OFFLINE);
    assert!(embed.fields.is_empty());
    assert!(embed.description.is_none());
    assert!(embed.thumbnail.is_none());
    assert!(embed.footer.is_none());
}

fn setup() -> (MockMembership, RecordingReply, Invocation) {
    (
        MockMembership::failing(target()),
        RecordingReply::default(),
        invocation(member(1), Some(target())),
    )
}

#[tokio::test]
async fn failed_ban_names_banning() {
    let (api, reply, invocation) = setup();
    ban(&api, &reply, &invocation, 0, None).await.unwrap();

    assert_eq!(api.calls().len(), 1);
    assert_failure(&reply, "There was an error banning the user.");
}

#[tokio::test]
async fn failed_kick_names_kicking() {
    let (api, reply, invocation) = setup();
    kick(&api, &reply, &invocation, None).await.unwrap();

    assert_failure(&reply, "There was an error kicking the user.");
}

#[tokio::test]
async fn failed_role_changes_name_the_direction() {
    let (api, reply, invocation) = setup();
    roles(&api, &reply, &invocation, Some(role(7, "Mods", 3)))
        .await
        .unwrap();
    assert_failure(&reply, "There was an error adding the role to the user.");

    let (api, reply, invocation) = setup();
    roles(&api, &reply, &invocation, Some(role(8, "Verified", 2)))
        .await
        .unwrap();
    assert_failure(&reply, "There was an error removing the role from the user.");
}

#[tokio::test]
async fn failed_nickname_names_setting() {
    let (api, reply, invocation) = setup();
    nick(&api, &reply, &invocation, Some("Newbie".to_string()))
        .await
        .unwrap();

    assert_failure(&reply, "There was an error setting the user's nickname.");
}

#[tokio::test]
async fn failed_voice_changes_name_the_direction() {
    let (api, reply, invocation) = setup();
    mute(&api, &reply, &invocation).await.unwrap();
    assert_failure(&reply, "There was an error un-muting the user.");

    let (api, reply, invocation) = setup();
    deafen(&api, &reply, &invocation).await.unwrap();
    assert_failure(&reply, "There was an error deafening the user.");

    assert!(!api.snapshot().deafened);
}
