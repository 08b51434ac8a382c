use crate::args::CommonArgs;
use crate::command::{create_friends_search_service, create_steam_adapter};
use application_ports::friends_search::FriendsSearchPort;
use clap::Args;
use domain_shared::discord::{ChannelId, UserId};
use domain_shared::steam::SteamId;
use infrastructure::console::ConsoleAdapter;
use std::sync::Arc;
use tracing::{info, instrument};

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// 17-digit Steam IDs whose mutual friends to find
    #[arg(required = true)]
    pub steam_ids: Vec<String>,
}

#[instrument(level = "info", skip(common_args))]
pub async fn run(common_args: CommonArgs, args: SearchArgs) -> anyhow::Result<()> {
    let SearchArgs { steam_ids } = args;
    let steam_ids = steam_ids
        .iter()
        .map(|raw| SteamId::parse(raw))
        .collect::<Result<Vec<_>, _>>()?;

    let steam_adapter = Arc::new(create_steam_adapter(&common_args)?);
    let console_adapter = Arc::new(ConsoleAdapter::new(std::io::stdout()));

    let friends_search = create_friends_search_service(&common_args, console_adapter, steam_adapter);

    let summary = friends_search
        .search_mutual_friends(ChannelId(0), UserId(0), steam_ids)
        .await?;

    info!(
        mutual_friends = summary.mutual_friends,
        "Search finished",
    );

    Ok(())
}
