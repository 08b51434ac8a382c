use application_ports::friends_search::FriendsSearchPort;
use domain_shared::discord::ChannelId;
use std::sync::Arc;

pub trait Locator {
    fn get_friends_search_port(&self) -> Arc<dyn FriendsSearchPort + Send + Sync>;
    /// The only channel the bot answers commands in.
    fn get_command_channel(&self) -> ChannelId;
}
