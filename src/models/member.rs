use std::collections::HashMap;

use serenity::all::{GuildId, Member, PartialGuild, Permissions, Role, RoleId, UserId};

#[derive(Debug, Clone, PartialEq)]
pub struct RoleRef {
    pub id: RoleId,
    pub name: String,
    pub position: u16,
    pub colour: u32,
}

impl RoleRef {
    pub fn mention(&self) -> String {
        format!("<@&{}>", self.id.get())
    }
}

impl From<&Role> for RoleRef {
    fn from(role: &Role) -> Self {
        RoleRef {
            id: role.id,
            name: role.name.clone(),
            position: role.position,
            colour: role.colour.0,
        }
    }
}

/// Snapshot of a guild member taken for the duration of one command.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberProfile {
    pub guild_id: GuildId,
    pub user_id: UserId,
    pub username: String,
    pub global_name: Option<String>,
    pub nickname: Option<String>,
    pub avatar_url: String,
    pub bot: bool,
    pub created_at: i64,
    pub joined_at: Option<i64>,
    pub roles: Vec<RoleRef>,
    pub muted: bool,
    pub deafened: bool,
    pub permissions: Permissions,
}

impl MemberProfile {
    pub fn from_member(member: &Member, guild: &PartialGuild) -> Self {
        let roles = member
            .roles
            .iter()
            .filter_map(|role| guild.roles.get(role))
            .map(RoleRef::from)
            .collect::<Vec<_>>();

        MemberProfile {
            guild_id: guild.id,
            user_id: member.user.id,
            username: member.user.name.clone(),
            global_name: member.user.global_name.clone(),
            nickname: member.nick.clone(),
            avatar_url: member.user.face(),
            bot: member.user.bot,
            created_at: member.user.created_at().unix_timestamp(),
            joined_at: member.joined_at.map(|joined| joined.unix_timestamp()),
            roles,
            muted: member.mute,
            deafened: member.deaf,
            permissions: guild_permissions(guild.id, guild.owner_id, &guild.roles, member),
        }
    }

    pub fn mention(&self) -> String {
        format!("<@{}>", self.user_id.get())
    }

    pub fn display_name(&self) -> &str {
        self.nickname
            .as_deref()
            .or(self.global_name.as_deref())
            .unwrap_or(&self.username)
    }

    pub fn has_role(&self, role: &RoleRef) -> bool {
        self.roles.iter().any(|held| held.id == role.id)
    }
}

/// Guild-level permissions: the owner and administrators hold everything,
/// everyone else gets `@everyone` plus their roles.
fn guild_permissions(
    guild_id: GuildId,
    owner_id: UserId,
    roles: &HashMap<RoleId, Role>,
    member: &Member,
) -> Permissions {
    if owner_id == member.user.id {
        return Permissions::all();
    }

    let everyone = RoleId::new(guild_id.get());
    let mut permissions = roles
        .get(&everyone)
        .map_or(Permissions::empty(), |role| role.permissions);
    for role in &member.roles {
        if let Some(role) = roles.get(role) {
            permissions |= role.permissions;
        }
    }

    if permissions.contains(Permissions::ADMINISTRATOR) {
        return Permissions::all();
    }

    permissions
}
