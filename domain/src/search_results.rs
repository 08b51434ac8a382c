use crate::ports::discord::{CreateEmbed, CreateMessage};
use crate::resources;
use domain_shared::discord::UserId;
use rand::seq::IteratorRandom;
use rand::Rng;
use tracing::instrument;

/// Mutual friends per results embed. Discord caps embed size, ten lines of
/// profile links stays well below it.
pub const RESULTS_PAGE_SIZE: usize = 10;

/// Requested accounts per search. All of them are echoed in one criteria
/// embed, which has to fit [`EMBED_DESCRIPTION_LIMIT`] even for long,
/// fully escaped names.
pub const MAX_STEAM_IDS: usize = 25;

/// Discord rejects embeds with a longer description.
pub const EMBED_DESCRIPTION_LIMIT: usize = 4096;

pub const CRITERIA_TITLE: &str = "Search Criteria";
pub const RESULTS_TITLE: &str = "Results";
pub const NO_MATCH_DESCRIPTION: &str = "No match found.";
pub const INVALID_STEAM_IDS_REPLY: &str = "Please provide valid Steam IDs separated by a space.";

pub fn too_many_steam_ids_reply() -> String {
    format!("Please provide at most {MAX_STEAM_IDS} Steam IDs at once.")
}

/// Builds the criteria echo followed by the paged results, or a single
/// "no match" embed when there are no mutual friends.
#[instrument(level = "debug", skip_all, fields(criteria = criteria.len(), mutuals = mutuals.len()))]
pub fn create_messages(criteria: &[String], mutuals: &[String]) -> Vec<CreateMessage> {
    let mut messages = vec![CreateMessage::default().embed(CreateEmbed::from_lines(
        CRITERIA_TITLE,
        criteria,
    ))];

    if mutuals.is_empty() {
        messages.push(CreateMessage::default().embed(CreateEmbed {
            title: RESULTS_TITLE.to_string(),
            description: NO_MATCH_DESCRIPTION.to_string(),
        }));
        return messages;
    }

    messages.extend(
        mutuals
            .chunks(RESULTS_PAGE_SIZE)
            .map(|page| CreateMessage::default().embed(CreateEmbed::from_lines(RESULTS_TITLE, page))),
    );

    messages
}

/// Interim notice shown while the search runs, addressed to the requester.
#[instrument(level = "trace", skip(rng))]
pub fn processing_notice<R: Rng + ?Sized>(requested_by: UserId, rng: &mut R) -> CreateMessage {
    let notice = resources::PROCESSING_NOTICES_TXT
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .choose(rng)
        .unwrap_or("Processing...");

    CreateMessage::default().content(format!("<@{}>, {}", requested_by.0, notice))
}
