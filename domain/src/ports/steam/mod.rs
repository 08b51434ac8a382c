use async_trait::async_trait;
use domain_shared::steam::{AppId, SteamId};
use thiserror::Error;

/// Read-only view of the Steam Web API used by the mutual friends search.
///
/// Absent nested data is not an error: a player record that does not exist is
/// `Ok(None)` from [`SteamPort::get_player_summary`], and a game the account
/// does not own is `Ok(None)` from [`SteamPort::get_owned_game`].
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait SteamPort {
    async fn get_player_summary(
        &self,
        steam_id: SteamId,
    ) -> Result<Option<PlayerSummary>, SteamError>;

    async fn get_owned_game(
        &self,
        steam_id: SteamId,
        app_id: AppId,
    ) -> Result<Option<OwnedGame>, SteamError>;

    /// Accounts with the `friend` relationship, in the order Steam returned them.
    async fn get_friend_list(&self, steam_id: SteamId) -> Result<Vec<SteamId>, SteamError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerSummary {
    pub steam_id: SteamId,
    pub persona_name: String,
    pub profile_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedGame {
    pub app_id: AppId,
    pub playtime_forever_minutes: u64,
}

#[derive(Debug, Error)]
pub enum SteamError {
    #[error("Steam is unavailable")]
    SteamUnavailable,
    #[error("Steam returned an unexpected response")]
    UnexpectedResponse,
}
