use serenity::{all::EditMember, http::Http, Error as SerenityError};
use tracing::error;

use super::member::{MemberProfile, RoleRef};

pub type MembershipResult = Result<(), SerenityError>;

/// Guild membership operations a moderation command may perform.
#[async_trait::async_trait]
pub trait MembershipApi: Send + Sync {
    async fn add_role(&self, member: &MemberProfile, role: &RoleRef) -> MembershipResult;
    async fn remove_role(&self, member: &MemberProfile, role: &RoleRef) -> MembershipResult;
    async fn set_nickname(&self, member: &MemberProfile, nickname: &str) -> MembershipResult;
    async fn set_muted(&self, member: &MemberProfile, muted: bool) -> MembershipResult;
    async fn set_deafened(&self, member: &MemberProfile, deafened: bool) -> MembershipResult;
    async fn kick(&self, member: &MemberProfile, reason: &str) -> MembershipResult;
    async fn ban(&self, member: &MemberProfile, days: u8, reason: &str) -> MembershipResult;
}

async fn modify_member(http: &Http, member: &MemberProfile, edit: EditMember<'_>) -> MembershipResult {
    member.guild_id.edit_member(http, member.user_id, edit).await?;
    Ok(())
}

#[async_trait::async_trait]
impl MembershipApi for Http {
    async fn add_role(&self, member: &MemberProfile, role: &RoleRef) -> MembershipResult {
        self.add_member_role(member.guild_id, member.user_id, role.id, None)
            .await
            .inspect_err(|err| error!("Failed to add role {} to user: {}", role.name, err))
    }

    async fn remove_role(&self, member: &MemberProfile, role: &RoleRef) -> MembershipResult {
        self.remove_member_role(member.guild_id, member.user_id, role.id, None)
            .await
            .inspect_err(|err| error!("Failed to remove role {} from user: {}", role.name, err))
    }

    async fn set_nickname(&self, member: &MemberProfile, nickname: &str) -> MembershipResult {
        modify_member(self, member, EditMember::new().nickname(nickname))
            .await
            .inspect_err(|err| error!("Failed to set nickname: {}", err))
    }

    async fn set_muted(&self, member: &MemberProfile, muted: bool) -> MembershipResult {
        modify_member(self, member, EditMember::new().mute(muted))
            .await
            .inspect_err(|err| error!("Failed to set mute to {}: {}", muted, err))
    }

    async fn set_deafened(&self, member: &MemberProfile, deafened: bool) -> MembershipResult {
        modify_member(self, member, EditMember::new().deafen(deafened))
            .await
            .inspect_err(|err| error!("Failed to set deafen to {}: {}", deafened, err))
    }

    async fn kick(&self, member: &MemberProfile, reason: &str) -> MembershipResult {
        self.kick_member(member.guild_id, member.user_id, Some(reason))
            .await
            .inspect_err(|err| error!("Failed to kick user: {}", err))
    }

    async fn ban(&self, member: &MemberProfile, days: u8, reason: &str) -> MembershipResult {
        self.ban_user(member.guild_id, member.user_id, days, Some(reason))
            .await
            .inspect_err(|err| error!("Failed to ban user: {}", err))
    }
}
