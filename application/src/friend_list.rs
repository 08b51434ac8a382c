use domain::friend_set::FriendSet;
use domain::ports::steam::SteamPort;
use domain_shared::steam::SteamId;
use std::sync::Arc;
use tracing::{instrument, warn};

pub struct FriendListService {
    steam_port: Arc<dyn SteamPort + Send + Sync>,
}

impl FriendListService {
    #[instrument(level = "trace", skip_all)]
    pub fn new(steam_port: Arc<dyn SteamPort + Send + Sync>) -> Self {
        Self { steam_port }
    }

    /// Friends of one account. Any failure yields an empty set so that a
    /// single broken account cannot abort the whole search.
    #[instrument(level = "debug", skip(self))]
    pub async fn resolve_friends(&self, steam_id: SteamId) -> FriendSet {
        match self.steam_port.get_friend_list(steam_id).await {
            Ok(friends) => FriendSet::new(friends),
            Err(err) => {
                warn!(
                    steam_id = %steam_id,
                    error = ?err,
                    "Failed to fetch friend list, the account contributes no friends",
                );
                FriendSet::default()
            }
        }
    }
}
