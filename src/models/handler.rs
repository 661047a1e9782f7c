use serenity::all::GuildId;

#[derive(Clone)]
pub struct Handler {
    pub command_guild: Option<GuildId>,
}
