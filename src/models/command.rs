use std::sync::atomic::AtomicBool;

use serenity::{
    all::{CommandInteraction, PartialGuild},
    builder::CreateCommand,
    prelude::Context as IncomingContext,
};

use super::{
    member::MemberProfile,
    response::{Response, ResponseResult},
};

#[async_trait::async_trait]
pub trait CommandContextReply: Send + Sync {
    async fn reply(&self, response: Response) -> ResponseResult;
}

pub struct CommandContext {
    pub ctx: IncomingContext,
    pub has_responsed: AtomicBool,
    pub guild: PartialGuild,
    pub invoker: MemberProfile,
    pub interaction: CommandInteraction,
}

pub struct FailedCommandContext {
    pub ctx: IncomingContext,
    pub interaction: CommandInteraction,
}

#[async_trait::async_trait]
pub trait Command: Send + Sync {
    fn name(&self) -> &'static str;
    fn register(&self) -> CreateCommand;
    async fn router(&self, ctx: &CommandContext) -> ResponseResult;
}
