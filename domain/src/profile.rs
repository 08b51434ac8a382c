use domain_shared::steam::{AppId, SteamId};
use std::fmt;
use tracing::instrument;

/// Characters Discord markdown treats as formatting tokens inside a link label.
/// Includes the backslash, a trailing one would otherwise escape the closing `]`.
const MARKDOWN_SPECIAL_CHARACTERS: [char; 13] = [
    '\\', '[', ']', '(', ')', '*', '_', '~', '>', '#', '&', '`', '|',
];

pub const DAYZ_APP_ID: AppId = AppId(221100);
pub const DAYZ_NAME: &str = "DayZ";

/// The game whose playtime is shown next to every profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedGame {
    pub app_id: AppId,
    pub name: String,
}

impl Default for TrackedGame {
    fn default() -> Self {
        Self {
            app_id: DAYZ_APP_ID,
            name: DAYZ_NAME.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Playtime {
    minutes: u64,
}

impl Playtime {
    pub fn from_minutes(minutes: u64) -> Self {
        Self { minutes }
    }

    pub fn hours(&self) -> u64 {
        self.minutes / 60
    }

    pub fn remaining_minutes(&self) -> u64 {
        self.minutes % 60
    }

    pub fn long(&self) -> String {
        format!(
            "{} hours {} minutes",
            self.hours(),
            self.remaining_minutes()
        )
    }
}

impl fmt::Display for Playtime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m", self.hours(), self.remaining_minutes())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub steam_id: SteamId,
    pub display_name: String,
    pub profile_url: String,
    /// `None` when the account does not own the tracked game.
    pub playtime: Option<Playtime>,
}

impl Profile {
    #[instrument(level = "trace", skip(self, game))]
    pub fn format_line(&self, game: &TrackedGame) -> String {
        let playtime = match self.playtime {
            Some(playtime) => playtime.to_string(),
            None => "Not Owned".to_string(),
        };

        format!(
            "[{}]({}) - {}: {}",
            escape_markdown(&self.display_name),
            self.profile_url,
            game.name,
            playtime,
        )
    }
}

/// Line shown for a requested account whose profile could not be resolved.
#[instrument(level = "trace")]
pub fn format_unresolved_line(steam_id: SteamId) -> String {
    format!("{} - Profile not found", steam_id)
}

#[instrument(level = "trace", skip(text))]
pub fn escape_markdown(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        if MARKDOWN_SPECIAL_CHARACTERS.contains(&c) {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
