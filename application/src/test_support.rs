use domain::ports::steam::{OwnedGame, PlayerSummary};
use domain::profile::DAYZ_APP_ID;
use domain_shared::steam::SteamId;

pub const STEAM_ID: SteamId = SteamId(76561197960287930);

pub fn summary(steam_id: SteamId, persona_name: &str) -> PlayerSummary {
    PlayerSummary {
        steam_id,
        persona_name: persona_name.to_string(),
        profile_url: format!("https://steamcommunity.com/profiles/{steam_id}/"),
    }
}

pub fn owned_game(minutes: u64) -> OwnedGame {
    OwnedGame {
        app_id: DAYZ_APP_ID,
        playtime_forever_minutes: minutes,
    }
}
