mod channel_id;
mod create_embed;
mod create_message;
mod message_id;

use crate::discord::channel_id::domain_to_serenity_channel_id;
use crate::discord::create_message::domain_to_serenity_create_message;
use crate::discord::message_id::{domain_to_serenity_message_id, serenity_to_domain_message_id};
use async_trait::async_trait;
use domain::ports::discord::{ChannelId, CreateMessage, DiscordError, DiscordPort, MessageId};
use poise::serenity_prelude as serenity;
use serenity::all::Http;
use std::sync::Arc;
use tracing::{instrument, warn};

pub struct DiscordAdapter {
    client: Arc<Http>,
}

impl DiscordAdapter {
    #[instrument(level = "trace", skip_all)]
    pub fn new(client: Arc<Http>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl DiscordPort for DiscordAdapter {
    #[instrument(level = "debug", err, skip(self, channel_id, message))]
    async fn send_message(
        &self,
        channel_id: ChannelId,
        message: CreateMessage,
    ) -> Result<MessageId, DiscordError> {
        let message = domain_to_serenity_create_message(message);
        let channel_id = domain_to_serenity_channel_id(channel_id);

        let sent = channel_id
            .send_message(self.client.as_ref(), message)
            .await
            .map_err(|err| {
                warn!(error = ?err, "Failed to send message");
                DiscordError::DiscordUnavailable
            })?;

        Ok(serenity_to_domain_message_id(sent.id))
    }

    #[instrument(level = "debug", err, skip(self, channel_id, message_id))]
    async fn delete_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<(), DiscordError> {
        let channel_id = domain_to_serenity_channel_id(channel_id);
        let message_id = domain_to_serenity_message_id(message_id);

        self.client
            .delete_message(channel_id, message_id, None)
            .await
            .map_err(|err| {
                warn!(error = ?err, "Failed to delete message");
                DiscordError::DiscordUnavailable
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::create_message::domain_to_serenity_create_message;
    use domain::ports::discord::{CreateEmbed, CreateMessage};

    #[test]
    fn converts_content_and_embeds() {
        let message = CreateMessage::default()
            .content("<@42>, Hang tight, mischievous human!")
            .embed(CreateEmbed::from_lines("Results", &["a", "b"]));

        let json = serde_json::to_value(domain_to_serenity_create_message(message)).unwrap();

        assert_eq!(json["content"], "<@42>, Hang tight, mischievous human!");
        assert_eq!(json["embeds"][0]["title"], "Results");
        assert_eq!(json["embeds"][0]["description"], "a\nb");
    }
}
