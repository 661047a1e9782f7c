use std::sync::atomic::Ordering;

use serenity::{
    all::CommandInteraction,
    builder::{
        CreateEmbed, CreateEmbedFooter, CreateInteractionResponse,
        CreateInteractionResponseMessage, EditInteractionResponse,
    },
    http::Http,
};
use tracing::{debug, error};

use crate::models::{
    command::{CommandContext, CommandContextReply, FailedCommandContext},
    response::{Embed, Response, ResponseError, ResponseResult},
};

impl From<Embed> for CreateEmbed {
    fn from(embed: Embed) -> Self {
        let mut create = CreateEmbed::new().color(embed.color);
        if let Some(title) = embed.title {
            create = create.title(title);
        }
        if let Some(description) = embed.description {
            create = create.description(description);
        }
        if let Some(thumbnail) = embed.thumbnail {
            create = create.thumbnail(thumbnail);
        }
        if let Some(footer) = embed.footer {
            create = create.footer(CreateEmbedFooter::new(footer));
        }
        create.fields(
            embed
                .fields
                .into_iter()
                .map(|field| (field.name, field.value, field.inline)),
        )
    }
}

async fn create_response(
    http: &Http,
    cmd: &CommandInteraction,
    response: Response,
) -> ResponseResult {
    let mut reply = CreateInteractionResponseMessage::new();
    if let Some(content) = response.content {
        reply = reply.content(content);
    }
    if let Some(embeds) = response.embeds {
        reply = reply.embeds(embeds.into_iter().map(CreateEmbed::from).collect());
    }
    if response.ephemeral {
        reply = reply.ephemeral(true);
    }

    if let Err(err) = cmd
        .create_response(http, CreateInteractionResponse::Message(reply))
        .await
    {
        error!("Attempted to create a response to a command, failed with error: {err}");
        return Err(ResponseError::Serenity(err));
    }

    Ok(())
}

#[async_trait::async_trait]
impl CommandContextReply for CommandContext {
    async fn reply(&self, response: Response) -> ResponseResult {
        let start = std::time::Instant::now();
        if self.has_responsed.load(Ordering::Relaxed) {
            let mut edit = EditInteractionResponse::new();
            if let Some(content) = response.content {
                edit = edit.content(content);
            }
            if let Some(embeds) = response.embeds {
                edit = edit.embeds(embeds.into_iter().map(CreateEmbed::from).collect());
            }

            if let Err(err) = self.interaction.edit_response(&self.ctx.http, edit).await {
                error!("Attempted to edit a response to a command, failed with error: {err}");
                return Err(ResponseError::Serenity(err));
            }
        } else {
            create_response(&self.ctx.http, &self.interaction, response).await?;
            self.has_responsed.store(true, Ordering::Relaxed);
        }

        debug!("Took {:?} to reply to a command", start.elapsed());
        Ok(())
    }
}

#[async_trait::async_trait]
impl CommandContextReply for FailedCommandContext {
    async fn reply(&self, response: Response) -> ResponseResult {
        let start = std::time::Instant::now();
        create_response(&self.ctx.http, &self.interaction, response).await?;

        debug!("Took {:?} to reply to a command", start.elapsed());
        Ok(())
    }
}
