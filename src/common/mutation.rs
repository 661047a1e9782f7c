use serenity::all::Permissions;
use strum::IntoStaticStr;

use crate::models::{
    member::{MemberProfile, RoleRef},
    membership::MembershipApi,
    response::EmbedField,
};

pub const DEFAULT_REASON: &str = "There is no reason.";

#[derive(Debug, Clone, PartialEq, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum MemberAction {
    AddRole(RoleRef),
    RemoveRole(RoleRef),
    SetNickname(String),
    Mute,
    Unmute,
    Deafen,
    Undeafen,
    Kick { reason: String },
    Ban { days: u8, reason: String },
}

/// The single field describing what a successful action changed.
#[derive(Debug, Clone, PartialEq)]
pub struct StateDelta {
    pub name: &'static str,
    pub value: String,
    pub inline: bool,
}

impl From<StateDelta> for EmbedField {
    fn from(delta: StateDelta) -> Self {
        EmbedField::new(delta.name, delta.value, delta.inline)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExternalFailure {
    pub action: MemberAction,
}

impl ExternalFailure {
    pub fn title(&self) -> &'static str {
        match self.action {
            MemberAction::AddRole(_) => "There was an error adding the role to the user.",
            MemberAction::RemoveRole(_) => "There was an error removing the role from the user.",
            MemberAction::SetNickname(_) => "There was an error setting the user's nickname.",
            MemberAction::Mute => "There was an error muting the user.",
            MemberAction::Unmute => "There was an error un-muting the user.",
            MemberAction::Deafen => "There was an error deafening the user.",
            MemberAction::Undeafen => "There was an error un-deafening the user.",
            MemberAction::Kick { .. } => "There was an error kicking the user.",
            MemberAction::Ban { .. } => "There was an error banning the user.",
        }
    }
}

impl MemberAction {
    pub fn toggle_role(member: &MemberProfile, role: RoleRef) -> Self {
        if member.has_role(&role) {
            MemberAction::RemoveRole(role)
        } else {
            MemberAction::AddRole(role)
        }
    }

    pub fn toggle_mute(member: &MemberProfile) -> Self {
        if member.muted {
            MemberAction::Unmute
        } else {
            MemberAction::Mute
        }
    }

    pub fn toggle_deafen(member: &MemberProfile) -> Self {
        if member.deafened {
            MemberAction::Undeafen
        } else {
            MemberAction::Deafen
        }
    }

    pub fn kick(reason: Option<String>) -> Self {
        MemberAction::Kick {
            reason: reason.unwrap_or_else(|| DEFAULT_REASON.to_string()),
        }
    }

    pub fn ban(days: u8, reason: Option<String>) -> Self {
        MemberAction::Ban {
            days,
            reason: reason.unwrap_or_else(|| DEFAULT_REASON.to_string()),
        }
    }

    /// Variant name without its payload, safe to log.
    pub fn kind(&self) -> &'static str {
        self.into()
    }

    /// Capability checked by the permission gate before the action runs.
    /// Kicks and bans are restricted when the command is registered instead.
    pub fn capability(&self) -> Option<Permissions> {
        match self {
            MemberAction::AddRole(_) | MemberAction::RemoveRole(_) => {
                Some(Permissions::MANAGE_ROLES)
            }
            MemberAction::SetNickname(_) => Some(Permissions::MANAGE_NICKNAMES),
            MemberAction::Mute => Some(Permissions::MUTE_MEMBERS),
            MemberAction::Deafen => Some(Permissions::DEAFEN_MEMBERS),
            MemberAction::Unmute
            | MemberAction::Undeafen
            | MemberAction::Kick { .. }
            | MemberAction::Ban { .. } => None,
        }
    }

    fn delta(&self, member: &MemberProfile) -> StateDelta {
        let (name, value, inline) = match self {
            MemberAction::AddRole(role) => ("Role Added", role.mention(), false),
            MemberAction::RemoveRole(role) => ("Role Removed", role.mention(), false),
            MemberAction::SetNickname(_) => ("Nickname Set", member.mention(), false),
            MemberAction::Mute => ("Muted", member.mention(), false),
            MemberAction::Unmute => ("Un-muted", member.mention(), false),
            MemberAction::Deafen => ("Deafened", member.mention(), false),
            MemberAction::Undeafen => ("Un-deafened", member.mention(), false),
            MemberAction::Kick { reason } => ("Kicked", format!("```{reason}```"), true),
            MemberAction::Ban { reason, .. } => ("Banned", format!("```{reason}```"), true),
        };

        StateDelta {
            name,
            value,
            inline,
        }
    }
}

/// Performs `action` on `member` through the membership API.
///
/// Any error from the API is reported as an `ExternalFailure` for the action;
/// nothing is retried or rolled back.
pub async fn execute(
    api: &dyn MembershipApi,
    member: &MemberProfile,
    action: MemberAction,
) -> Result<StateDelta, ExternalFailure> {
    let result = match &action {
        MemberAction::AddRole(role) => api.add_role(member, role).await,
        MemberAction::RemoveRole(role) => api.remove_role(member, role).await,
        MemberAction::SetNickname(nickname) => api.set_nickname(member, nickname).await,
        MemberAction::Mute => api.set_muted(member, true).await,
        MemberAction::Unmute => api.set_muted(member, false).await,
        MemberAction::Deafen => api.set_deafened(member, true).await,
        MemberAction::Undeafen => api.set_deafened(member, false).await,
        MemberAction::Kick { reason } => api.kick(member, reason).await,
        MemberAction::Ban { days, reason } => api.ban(member, *days, reason).await,
    };

    match result {
        Ok(()) => Ok(action.delta(member)),
        Err(_) => Err(ExternalFailure { action }),
    }
}
