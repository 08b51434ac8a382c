use async_trait::async_trait;
use domain_shared::discord::{ChannelId, UserId};
use domain_shared::steam::SteamId;
use thiserror::Error;

#[async_trait]
pub trait FriendsSearchPort {
    /// Finds the friends shared by all `steam_ids` and posts the criteria
    /// echo and the paged results into `channel_id`.
    ///
    /// Steam failures never surface here, they shrink the result instead.
    async fn search_mutual_friends(
        &self,
        channel_id: ChannelId,
        requested_by: UserId,
        steam_ids: Vec<SteamId>,
    ) -> Result<SearchSummary, FriendsSearchError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSummary {
    pub mutual_friends: usize,
    pub messages_sent: usize,
}

#[derive(Debug, Error)]
pub enum FriendsSearchError {
    #[error("No valid Steam IDs were provided")]
    NoSteamIds,
    #[error("Too many Steam IDs were provided")]
    TooManySteamIds,
    #[error("Discord is unavailable")]
    DiscordUnavailable,
}
