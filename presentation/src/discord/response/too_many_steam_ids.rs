use domain::search_results::too_many_steam_ids_reply;
use poise::CreateReply;
use tracing::instrument;

#[instrument(level = "debug", skip_all)]
pub fn too_many_steam_ids() -> CreateReply {
    CreateReply::default().content(too_many_steam_ids_reply())
}
