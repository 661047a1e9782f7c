//! Shared fixtures for command tests.
//!
//! - `MockMembership` applies actions to an in-memory member, or fails every call
//! - `RecordingReply` keeps every response a command sends

use std::sync::Mutex;

use serenity::all::{GuildId, Permissions, RoleId, UserId};

use crate::{
    common::mutation::MemberAction,
    models::{
        command::CommandContextReply,
        invocation::Invocation,
        member::{MemberProfile, RoleRef},
        membership::{MembershipApi, MembershipResult},
        response::{Embed, Response, ResponseResult},
    },
};

pub const GUILD_ID: u64 = 1041788629250482208;

pub fn member(id: u64) -> MemberProfile {
    MemberProfile {
        guild_id: GuildId::new(GUILD_ID),
        user_id: UserId::new(id),
        username: format!("user{id}"),
        global_name: None,
        nickname: None,
        avatar_url: "https://cdn.discordapp.com/embed/avatars/0.png".to_string(),
        bot: false,
        created_at: 1_600_000_000,
        joined_at: Some(1_650_000_000),
        roles: vec![],
        muted: false,
        deafened: false,
        permissions: Permissions::empty(),
    }
}

pub fn role(id: u64, name: &str, position: u16) -> RoleRef {
    RoleRef {
        id: RoleId::new(id),
        name: name.to_string(),
        position,
        colour: 0,
    }
}

pub fn invocation(invoker: MemberProfile, target: Option<MemberProfile>) -> Invocation {
    Invocation { invoker, target }
}

pub struct MockMembership {
    member: Mutex<MemberProfile>,
    calls: Mutex<Vec<MemberAction>>,
    fail: bool,
}

impl MockMembership {
    pub fn new(member: MemberProfile) -> Self {
        MockMembership {
            member: Mutex::new(member),
            calls: Mutex::new(vec![]),
            fail: false,
        }
    }

    pub fn failing(member: MemberProfile) -> Self {
        MockMembership {
            fail: true,
            ..MockMembership::new(member)
        }
    }

    pub fn calls(&self) -> Vec<MemberAction> {
        self.calls.lock().unwrap().clone()
    }

    /// Current state of the member after every applied action.
    pub fn snapshot(&self) -> MemberProfile {
        self.member.lock().unwrap().clone()
    }

    fn apply(&self, action: MemberAction) -> MembershipResult {
        self.calls.lock().unwrap().push(action.clone());
        if self.fail {
            return Err(serenity::Error::Other("membership api unavailable"));
        }

        let mut member = self.member.lock().unwrap();
        match action {
            MemberAction::AddRole(role) => member.roles.push(role),
            MemberAction::RemoveRole(role) => member.roles.retain(|held| held.id != role.id),
            MemberAction::SetNickname(nickname) => member.nickname = Some(nickname),
            MemberAction::Mute => member.muted = true,
            MemberAction::Unmute => member.muted = false,
            MemberAction::Deafen => member.deafened = true,
            MemberAction::Undeafen => member.deafened = false,
            MemberAction::Kick { .. } | MemberAction::Ban { .. } => {}
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl MembershipApi for MockMembership {
    async fn add_role(&self, _member: &MemberProfile, role: &RoleRef) -> MembershipResult {
        self.apply(MemberAction::AddRole(role.clone()))
    }

    async fn remove_role(&self, _member: &MemberProfile, role: &RoleRef) -> MembershipResult {
        self.apply(MemberAction::RemoveRole(role.clone()))
    }

    async fn set_nickname(&self, _member: &MemberProfile, nickname: &str) -> MembershipResult {
        self.apply(MemberAction::SetNickname(nickname.to_string()))
    }

    async fn set_muted(&self, _member: &MemberProfile, muted: bool) -> MembershipResult {
        self.apply(if muted {
            MemberAction::Mute
        } else {
            MemberAction::Unmute
        })
    }

    async fn set_deafened(&self, _member: &MemberProfile, deafened: bool) -> MembershipResult {
        self.apply(if deafened {
            MemberAction::Deafen
        } else {
            MemberAction::Undeafen
        })
    }

    async fn kick(&self, _member: &MemberProfile, reason: &str) -> MembershipResult {
        self.apply(MemberAction::Kick {
            reason: reason.to_string(),
        })
    }

    async fn ban(&self, _member: &MemberProfile, days: u8, reason: &str) -> MembershipResult {
        self.apply(MemberAction::Ban {
            days,
            reason: reason.to_string(),
        })
    }
}

#[derive(Default)]
pub struct RecordingReply {
    responses: Mutex<Vec<Response>>,
}

impl RecordingReply {
    pub fn responses(&self) -> Vec<Response> {
        self.responses.lock().unwrap().clone()
    }

    /// The embed of the only response sent, together with its ephemeral flag.
    pub fn only_embed(&self) -> (Embed, bool) {
        let responses = self.responses();
        assert_eq!(responses.len(), 1, "expected exactly one response");

        let response = &responses[0];
        let embeds = response.embeds.clone().expect("response has no embeds");
        assert_eq!(embeds.len(), 1, "expected exactly one embed");
        (embeds[0].clone(), response.ephemeral)
    }
}

#[async_trait::async_trait]
impl CommandContextReply for RecordingReply {
    async fn reply(&self, response: Response) -> ResponseResult {
        self.responses.lock().unwrap().push(response);
        Ok(())
    }
}
