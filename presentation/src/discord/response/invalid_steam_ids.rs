use domain::search_results::INVALID_STEAM_IDS_REPLY;
use poise::CreateReply;
use tracing::instrument;

#[instrument(level = "debug", skip_all)]
pub fn invalid_steam_ids() -> CreateReply {
    CreateReply::default().content(INVALID_STEAM_IDS_REPLY)
}
