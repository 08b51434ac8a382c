mod create_embed;
mod create_message;

use async_trait::async_trait;
pub use create_embed::CreateEmbed;
pub use create_message::CreateMessage;
pub use domain_shared::discord::{ChannelId, MessageId};
use thiserror::Error;

#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait DiscordPort {
    async fn send_message(
        &self,
        channel_id: ChannelId,
        message: CreateMessage,
    ) -> Result<MessageId, DiscordError>;

    async fn delete_message(
        &self,
        channel_id: ChannelId,
        message_id: MessageId,
    ) -> Result<(), DiscordError>;
}

#[derive(Debug, Error)]
pub enum DiscordError {
    #[error("Discord is unavailable")]
    DiscordUnavailable,
}
