use crate::args::CommonArgs;
use crate::command::{create_friends_search_service, create_steam_adapter};
use crate::locator;
use anyhow::anyhow;
use clap::Args;
use domain_shared::discord::ChannelId;
use infrastructure::discord::DiscordAdapter;
use poise::serenity_prelude as serenity;
use presentation::discord::run_bot;
use std::sync::Arc;
use tracing::{info, instrument};

#[derive(Args)]
pub struct ServeArgs {
    /// The token for the Discord bot
    #[arg(long, env = "DISCORD_BOT_TOKEN")]
    pub discord_bot_token: String,
    /// The ID of the channel the bot accepts commands in
    #[arg(long, env = "DISCORD_CHANNEL_ID")]
    pub channel: u64,
    /// Prefix of chat commands, e.g. `!friends`
    #[arg(long, env = "COMMAND_PREFIX", default_value = "!")]
    pub prefix: String,
}

#[instrument(level = "trace", skip(common_args, args))]
pub async fn run(common_args: CommonArgs, args: ServeArgs) -> anyhow::Result<()> {
    let ServeArgs {
        discord_bot_token,
        channel,
        prefix,
    } = args;
    let channel = ChannelId(channel);

    // Prefix commands need the privileged message content intent.
    let intents =
        serenity::GatewayIntents::non_privileged() | serenity::GatewayIntents::MESSAGE_CONTENT;

    let serenity_client = Arc::new(serenity::Http::new(&discord_bot_token));

    let steam_adapter = Arc::new(create_steam_adapter(&common_args)?);
    let discord_adapter = Arc::new(DiscordAdapter::new(serenity_client));

    let friends_search_adapter = Arc::new(create_friends_search_service(
        &common_args,
        discord_adapter,
        steam_adapter,
    ));

    let locator = locator::ApplicationPortLocator::new(channel, friends_search_adapter);

    info!(channel_id = channel.0, prefix = %prefix, "Starting bot");

    let bot = tokio::spawn(run_bot(locator, discord_bot_token, intents, prefix));

    bot.await?.map_err(|e| anyhow!(e))?;

    Ok(())
}
