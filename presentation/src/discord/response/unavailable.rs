use poise::CreateReply;
use tracing::instrument;

#[instrument(level = "debug", skip_all)]
pub fn temporary_unavailable() -> CreateReply {
    let response = "Sorry, the service is currently unavailable. Please try again later.";

    CreateReply::default().content(response).reply(true)
}
