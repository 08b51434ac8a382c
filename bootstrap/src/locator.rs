use application::friends_search::FriendsSearchService;
use application_ports::friends_search::FriendsSearchPort;
use domain_shared::discord::ChannelId;
use presentation::application_ports::Locator;
use std::sync::Arc;
use tracing::instrument;

#[derive(Clone)]
pub struct ApplicationPortLocator {
    pub(crate) command_channel: ChannelId,

    pub(crate) friends_search_adapter: Arc<FriendsSearchService>,
}

impl ApplicationPortLocator {
    #[instrument(level = "trace", skip_all)]
    pub fn new(
        command_channel: ChannelId,
        friends_search_adapter: Arc<FriendsSearchService>,
    ) -> Self {
        Self {
            command_channel,
            friends_search_adapter,
        }
    }
}

impl Locator for ApplicationPortLocator {
    #[instrument(level = "trace", skip(self))]
    fn get_friends_search_port(&self) -> Arc<dyn FriendsSearchPort + Send + Sync> {
        self.friends_search_adapter.clone()
    }

    #[instrument(level = "trace", skip(self))]
    fn get_command_channel(&self) -> ChannelId {
        self.command_channel
    }
}
