use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use crate::{
    common::{colors, mutation::ExternalFailure},
    models::{
        member::MemberProfile,
        response::{Embed, EmbedField},
    },
};

/// What the `display` command shows about a member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum DisplayMode {
    Summary,
    User,
    Guild,
    All,
}

impl DisplayMode {
    pub fn choice(self) -> Option<i32> {
        match self {
            DisplayMode::Summary => None,
            DisplayMode::User => Some(0),
            DisplayMode::Guild => Some(1),
            DisplayMode::All => Some(2),
        }
    }

    pub fn choices() -> Vec<(&'static str, i32)> {
        DisplayMode::iter()
            .filter_map(|mode| mode.choice().map(|value| (<&'static str>::from(mode), value)))
            .collect()
    }

    /// Unknown or absent selectors fall back to the summary.
    pub fn from_choice(choice: Option<i64>) -> Self {
        DisplayMode::iter()
            .find(|mode| choice.is_some() && mode.choice().map(i64::from) == choice)
            .unwrap_or(DisplayMode::Summary)
    }

    pub fn render(self, member: &MemberProfile) -> Embed {
        match self {
            DisplayMode::Summary => profile(member, None),
            DisplayMode::User => user_profile(member),
            DisplayMode::Guild => guild_profile(member),
            DisplayMode::All => all_profile(member),
        }
    }
}

/// Colour of the highest coloured role, if any.
fn colour(member: &MemberProfile) -> u32 {
    member
        .roles
        .iter()
        .filter(|role| role.colour != 0)
        .max_by_key(|role| role.position)
        .map_or(colors::PROFILE, |role| role.colour)
}

fn summary(member: &MemberProfile, fields: Vec<EmbedField>) -> Embed {
    Embed {
        title: Some(member.display_name().to_string()),
        description: Some(member.mention()),
        thumbnail: Some(member.avatar_url.clone()),
        footer: Some(format!("ID: {}", member.user_id.get())),
        fields,
        color: colour(member),
    }
}

/// Profile summary with at most one extra field.
pub fn profile(member: &MemberProfile, field: Option<EmbedField>) -> Embed {
    summary(member, field.into_iter().collect())
}

fn user_fields(member: &MemberProfile) -> Vec<EmbedField> {
    vec![
        EmbedField::new("Username", member.username.clone(), true),
        EmbedField::new("Created", format!("<t:{}:R>", member.created_at), true),
        EmbedField::new("Bot", if member.bot { "Yes" } else { "No" }, true),
    ]
}

fn guild_fields(member: &MemberProfile) -> Vec<EmbedField> {
    vec![
        nickname_field(member),
        EmbedField::new(
            "Joined",
            match member.joined_at {
                Some(joined) => format!("<t:{joined}:R>"),
                None => "`Unknown`".to_string(),
            },
            true,
        ),
        EmbedField::new(
            "Voice",
            format!(
                "Muted: {}\nDeafened: {}",
                if member.muted { "Yes" } else { "No" },
                if member.deafened { "Yes" } else { "No" }
            ),
            true,
        ),
        roles_field(member),
    ]
}

pub fn user_profile(member: &MemberProfile) -> Embed {
    summary(member, user_fields(member))
}

pub fn guild_profile(member: &MemberProfile) -> Embed {
    summary(member, guild_fields(member))
}

pub fn all_profile(member: &MemberProfile) -> Embed {
    summary(
        member,
        user_fields(member)
            .into_iter()
            .chain(guild_fields(member))
            .collect(),
    )
}

pub fn roles_field(member: &MemberProfile) -> EmbedField {
    let mut roles = member.roles.iter().collect::<Vec<_>>();
    roles.sort_by(|a, b| b.position.cmp(&a.position));

    let value = if roles.is_empty() {
        "`None`".to_string()
    } else {
        roles
            .iter()
            .map(|role| role.mention())
            .collect::<Vec<_>>()
            .join(" ")
    };

    EmbedField::new(format!("Roles [{}]", roles.len()), value, false)
}

pub fn nickname_field(member: &MemberProfile) -> EmbedField {
    let value = match member.nickname.as_deref() {
        Some(nickname) if !nickname.trim().is_empty() => member.mention(),
        _ => "`Undefined`".to_string(),
    };

    EmbedField::new("Nickname", value, false)
}

pub fn failure(failure: &ExternalFailure) -> Embed {
    Embed {
        title: Some(failure.title().to_string()),
        description: None,
        thumbnail: None,
        footer: None,
        fields: vec![],
        color: colors::OFFLINE,
    }
}
