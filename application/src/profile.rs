use domain::ports::steam::{SteamError, SteamPort};
use domain::profile::{Playtime, Profile, TrackedGame};
use domain_shared::steam::SteamId;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, instrument, warn};

pub struct ProfileService {
    steam_port: Arc<dyn SteamPort + Send + Sync>,
    tracked_game: TrackedGame,
}

impl ProfileService {
    #[instrument(level = "trace", skip_all)]
    pub fn new(steam_port: Arc<dyn SteamPort + Send + Sync>, tracked_game: TrackedGame) -> Self {
        Self {
            steam_port,
            tracked_game,
        }
    }

    pub fn tracked_game(&self) -> &TrackedGame {
        &self.tracked_game
    }

    /// Looks up the player summary and the playtime of the tracked game.
    ///
    /// Not owning the game is a valid profile without playtime. A failed
    /// owned-games lookup is treated the same way.
    #[instrument(level = "debug", skip(self))]
    pub async fn resolve_profile(&self, steam_id: SteamId) -> Result<Profile, ProfileError> {
        let summary = self
            .steam_port
            .get_player_summary(steam_id)
            .await
            .map_err(map_steam_err)?
            .ok_or_else(|| {
                debug!(steam_id = %steam_id, "Steam returned no player record");
                ProfileError::ProfileNotFound
            })?;

        let playtime = match self
            .steam_port
            .get_owned_game(steam_id, self.tracked_game.app_id)
            .await
        {
            Ok(game) => game.map(|game| Playtime::from_minutes(game.playtime_forever_minutes)),
            Err(err) => {
                warn!(
                    steam_id = %steam_id,
                    error = ?err,
                    "Failed to fetch owned games, showing the game as not owned",
                );
                None
            }
        };

        debug!(
            steam_id = %steam_id,
            playtime = ?playtime.map(|playtime| playtime.long()),
            "Resolved profile",
        );

        Ok(Profile {
            steam_id,
            display_name: summary.persona_name,
            profile_url: summary.profile_url,
            playtime,
        })
    }
}

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Profile not found")]
    ProfileNotFound,
    #[error("Service is temporarily unavailable")]
    TemporaryUnavailable,
}

#[instrument(level = "trace", skip_all)]
fn map_steam_err(err: SteamError) -> ProfileError {
    match err {
        SteamError::SteamUnavailable => {
            warn!("SteamError::SteamUnavailable");
            ProfileError::TemporaryUnavailable
        }
        SteamError::UnexpectedResponse => {
            warn!("SteamError::UnexpectedResponse");
            ProfileError::TemporaryUnavailable
        }
    }
}
