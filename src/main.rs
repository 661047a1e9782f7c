#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::unreadable_literal)]

use serenity::{prelude::GatewayIntents, Client};
use tracing::{error, info};

mod commands;
mod common;
mod events;
mod models;
#[cfg(test)]
mod tests;

#[tokio::main]
async fn main() {
    let config = match models::config::BotConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Could not load configuration: {err}");
            return;
        }
    };

    let log_level = if config.debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt().with_max_level(log_level).init();

    match config.command_guild {
        Some(guild_id) => info!("Commands will be registered to guild {}", guild_id),
        None => info!("Commands will be registered globally"),
    }

    // Discord client connection
    let handler = models::handler::Handler {
        command_guild: config.command_guild,
    };
    let intents = GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MEMBERS
        | GatewayIntents::GUILD_VOICE_STATES;
    let mut client = match Client::builder(&config.discord_token, intents)
        .event_handler(handler)
        .await
    {
        Ok(client) => client,
        Err(err) => {
            error!("Attempted to build Discord client, but failed with error: {}", err);
            return;
        }
    };

    if let Err(err) = client.start_autosharded().await {
        error!(
            "Attempted to start Discord client, but failed with error: {}",
            err
        );
    }
}
