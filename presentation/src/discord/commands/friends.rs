use crate::application_ports::Locator;
use crate::discord::{response, Context, Error};
use application_ports::friends_search::FriendsSearchError;
use domain::search_results::MAX_STEAM_IDS;
use domain_shared::discord::{ChannelId, UserId};
use domain_shared::steam::SteamId;
use tracing::{debug, info, instrument, warn};

#[poise::command(prefix_command, rename = "friends")]
#[instrument(level = "info", skip(ctx))]
pub async fn command<D: Locator + Send + Sync + 'static>(
    ctx: Context<'_, D>,
    #[description = "Steam IDs separated by a space"] steam_ids: Vec<String>,
) -> Result<(), Error> {
    info!(
        guild_id = ctx.guild_id().map(|id| id.get()),
        channel_id = ctx.channel_id().get(),
        user_id = ctx.author().id.get(),
        "Searching mutual friends",
    );

    let result = match parse_steam_ids(&steam_ids) {
        Ok(steam_ids) => {
            ctx.data()
                .get_friends_search_port()
                .search_mutual_friends(
                    ChannelId(ctx.channel_id().get()),
                    UserId(ctx.author().id.get()),
                    steam_ids,
                )
                .await
        }
        Err(err) => Err(err),
    };

    match result {
        Ok(summary) => {
            debug!(
                mutual_friends = summary.mutual_friends,
                messages_sent = summary.messages_sent,
                "Mutual friends search replied",
            );
        }
        Err(FriendsSearchError::NoSteamIds) => {
            ctx.send(response::invalid_steam_ids::invalid_steam_ids())
                .await?;
        }
        Err(FriendsSearchError::TooManySteamIds) => {
            ctx.send(response::too_many_steam_ids::too_many_steam_ids())
                .await?;
        }
        Err(FriendsSearchError::DiscordUnavailable) => {
            warn!("Failed to post mutual friends results: Discord is unavailable");
            ctx.send(response::unavailable::temporary_unavailable())
                .await?;
        }
    }

    Ok(())
}

/// Keeps the tokens that are 17-digit Steam IDs, in the order given.
fn parse_steam_ids(tokens: &[String]) -> Result<Vec<SteamId>, FriendsSearchError> {
    let steam_ids: Vec<SteamId> = tokens
        .iter()
        .filter_map(|token| SteamId::parse(token).ok())
        .collect();

    if steam_ids.is_empty() {
        return Err(FriendsSearchError::NoSteamIds);
    }
    if steam_ids.len() > MAX_STEAM_IDS {
        return Err(FriendsSearchError::TooManySteamIds);
    }

    Ok(steam_ids)
}
