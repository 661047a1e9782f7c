use std::{env, fmt};

use serenity::all::GuildId;

pub struct BotConfig {
    pub discord_token: String,
    pub debug: bool,
    pub command_guild: Option<GuildId>,
}

#[derive(Debug, PartialEq)]
pub enum ConfigError {
    Missing(&'static str),
    Invalid(&'static str, String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Missing(key) => write!(f, "environment variable {key} is not set"),
            ConfigError::Invalid(key, value) => {
                write!(f, "environment variable {key} has invalid value {value:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl BotConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let discord_token = lookup("DISCORD_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .ok_or(ConfigError::Missing("DISCORD_TOKEN"))?;
        let debug = lookup("DEBUG").is_some_and(|debug| debug == "true");
        let command_guild = match lookup("COMMAND_GUILD") {
            Some(guild) => match guild.parse::<u64>() {
                Ok(id) if id != 0 => Some(GuildId::new(id)),
                _ => return Err(ConfigError::Invalid("COMMAND_GUILD", guild)),
            },
            None => None,
        };

        Ok(BotConfig {
            discord_token,
            debug,
            command_guild,
        })
    }
}
