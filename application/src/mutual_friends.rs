use crate::friend_list::FriendListService;
use crate::profile::{ProfileError, ProfileService};
use domain::friend_set::{intersect, FriendSet};
use domain::profile::format_unresolved_line;
use domain_shared::steam::SteamId;
use futures::stream::{self, StreamExt};
use tracing::{debug, info, instrument, warn};

/// Steam requests kept in flight at once per search.
pub const MAX_CONCURRENT_REQUESTS: usize = 4;

pub struct MutualFriendsService {
    profile_service: ProfileService,
    friend_list_service: FriendListService,
}

impl MutualFriendsService {
    #[instrument(level = "trace", skip_all)]
    pub fn new(profile_service: ProfileService, friend_list_service: FriendListService) -> Self {
        Self {
            profile_service,
            friend_list_service,
        }
    }

    /// Formatted profile lines of the friends shared by every account in
    /// `steam_ids`, in the order of the first account's friend list.
    ///
    /// Mutual friends whose profile cannot be resolved are left out.
    #[instrument(level = "info", skip(self))]
    pub async fn resolve_mutual(&self, steam_ids: &[SteamId]) -> Vec<String> {
        let friend_sets: Vec<FriendSet> = stream::iter(steam_ids.iter().copied())
            .map(|steam_id| self.friend_list_service.resolve_friends(steam_id))
            .buffered(MAX_CONCURRENT_REQUESTS)
            .collect()
            .await;

        let mutuals = intersect(&friend_sets);
        info!(
            accounts = steam_ids.len(),
            mutuals = mutuals.len(),
            "Computed mutual friends",
        );

        let profiles: Vec<_> = stream::iter(mutuals)
            .map(|steam_id| async move {
                (steam_id, self.profile_service.resolve_profile(steam_id).await)
            })
            .buffered(MAX_CONCURRENT_REQUESTS)
            .collect()
            .await;

        let game = self.profile_service.tracked_game();
        profiles
            .into_iter()
            .filter_map(|(steam_id, profile)| match profile {
                Ok(profile) => Some(profile.format_line(game)),
                Err(ProfileError::ProfileNotFound) => {
                    debug!(steam_id = %steam_id, "Dropping mutual friend without profile");
                    None
                }
                Err(ProfileError::TemporaryUnavailable) => {
                    warn!(
                        steam_id = %steam_id,
                        "Dropping mutual friend, profile lookup failed",
                    );
                    None
                }
            })
            .collect()
    }

    /// Profile lines echoing the requested accounts. Every requested account
    /// gets a line, unresolvable ones a "Profile not found" placeholder.
    #[instrument(level = "info", skip(self))]
    pub async fn resolve_criteria(&self, steam_ids: &[SteamId]) -> Vec<String> {
        let game = self.profile_service.tracked_game();

        stream::iter(steam_ids.iter().copied())
            .map(|steam_id| async move {
                match self.profile_service.resolve_profile(steam_id).await {
                    Ok(profile) => profile.format_line(game),
                    Err(err) => {
                        warn!(
                            steam_id = %steam_id,
                            error = %err,
                            "Requested account has no resolvable profile",
                        );
                        format_unresolved_line(steam_id)
                    }
                }
            })
            .buffered(MAX_CONCURRENT_REQUESTS)
            .collect()
            .await
    }
}
