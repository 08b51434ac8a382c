pub mod search;
pub mod serve;

use crate::args::CommonArgs;
use crate::command::search::SearchArgs;
use crate::command::serve::ServeArgs;
use application::friend_list::FriendListService;
use application::friends_search::FriendsSearchService;
use application::mutual_friends::MutualFriendsService;
use application::profile::ProfileService;
use clap::Subcommand;
use domain::ports::discord::DiscordPort;
use domain::ports::steam::SteamPort;
use domain::profile::TrackedGame;
use domain_shared::steam::AppId;
use infrastructure::steam::{SteamAdapter, SteamAdapterConfig, SteamApiKey};
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

#[derive(Subcommand)]
pub enum Command {
    /// Run the Discord bot
    #[command(name = "serve")]
    Serve(ServeArgs),
    /// Run one mutual friends search and print the results
    #[command(name = "search")]
    Search(SearchArgs),
}

impl Command {
    #[instrument(level = "trace", skip(self, common_args))]
    pub async fn run(self, common_args: CommonArgs) -> anyhow::Result<()> {
        match self {
            Command::Serve(args) => serve::run(common_args, args).await,
            Command::Search(args) => search::run(common_args, args).await,
        }
    }
}

#[instrument(level = "trace", skip_all)]
pub(crate) fn create_steam_adapter(common_args: &CommonArgs) -> anyhow::Result<SteamAdapter> {
    let config = SteamAdapterConfig {
        api_key: SteamApiKey(common_args.steam_api_key.clone()),
        api_url: common_args.steam_api_url.clone(),
        timeout: Duration::from_secs(common_args.steam_timeout_secs),
    };

    Ok(SteamAdapter::new(config)?)
}

#[instrument(level = "trace", skip_all)]
pub(crate) fn create_friends_search_service(
    common_args: &CommonArgs,
    discord_port: Arc<dyn DiscordPort + Send + Sync>,
    steam_port: Arc<dyn SteamPort + Send + Sync>,
) -> FriendsSearchService {
    let tracked_game = TrackedGame {
        app_id: AppId(common_args.steam_app_id),
        name: common_args.steam_game_name.clone(),
    };

    let profile_service = ProfileService::new(steam_port.clone(), tracked_game);
    let friend_list_service = FriendListService::new(steam_port);

    FriendsSearchService::new(
        discord_port,
        MutualFriendsService::new(profile_service, friend_list_service),
    )
}
