use domain::ports::steam::{OwnedGame, PlayerSummary, SteamError};
use domain_shared::steam::{AppId, SteamId};
use serde::Deserialize;
use tracing::{instrument, warn};

#[derive(Deserialize, Debug)]
struct PlayerSummariesEnvelope {
    response: PlayerSummariesResponse,
}

#[derive(Deserialize, Debug)]
struct PlayerSummariesResponse {
    #[serde(default)]
    players: Vec<PlayerResponse>,
}

#[derive(Deserialize, Debug)]
struct PlayerResponse {
    steamid: SteamId,
    personaname: String,
    profileurl: String,
}

#[derive(Deserialize, Debug)]
struct OwnedGamesEnvelope {
    #[serde(default)]
    response: OwnedGamesResponse,
}

#[derive(Deserialize, Debug, Default)]
struct OwnedGamesResponse {
    games: Option<Vec<OwnedGameResponse>>,
}

#[derive(Deserialize, Debug)]
struct OwnedGameResponse {
    appid: u32,
    #[serde(default)]
    playtime_forever: u64,
}

#[derive(Deserialize, Debug)]
struct FriendListEnvelope {
    friendslist: Option<FriendListResponse>,
}

#[derive(Deserialize, Debug)]
struct FriendListResponse {
    friends: Option<Vec<FriendResponse>>,
}

#[derive(Deserialize, Debug)]
struct FriendResponse {
    steamid: SteamId,
    relationship: Option<String>,
}

#[instrument(level = "trace", skip(body))]
pub(crate) fn parse_player_summary(
    body: &str,
    steam_id: SteamId,
) -> Result<Option<PlayerSummary>, SteamError> {
    let envelope: PlayerSummariesEnvelope = serde_json::from_str(body).map_err(|err| {
        warn!("Failed to parse player summaries: {:?}", err);
        SteamError::UnexpectedResponse
    })?;

    Ok(envelope
        .response
        .players
        .into_iter()
        .find(|player| player.steamid == steam_id)
        .map(|player| PlayerSummary {
            steam_id: player.steamid,
            persona_name: player.personaname,
            profile_url: player.profileurl,
        }))
}

/// A response without a `games` array means the account does not own the game.
#[instrument(level = "trace", skip(body))]
pub(crate) fn parse_owned_game(body: &str, app_id: AppId) -> Result<Option<OwnedGame>, SteamError> {
    let envelope: OwnedGamesEnvelope = serde_json::from_str(body).map_err(|err| {
        warn!("Failed to parse owned games: {:?}", err);
        SteamError::UnexpectedResponse
    })?;

    Ok(envelope
        .response
        .games
        .unwrap_or_default()
        .into_iter()
        .find(|game| game.appid == app_id.0)
        .map(|game| OwnedGame {
            app_id: AppId(game.appid),
            playtime_forever_minutes: game.playtime_forever,
        }))
}

#[instrument(level = "trace", skip(body))]
pub(crate) fn parse_friend_list(body: &str) -> Result<Vec<SteamId>, SteamError> {
    let envelope: FriendListEnvelope = serde_json::from_str(body).map_err(|err| {
        warn!("Failed to parse friend list: {:?}", err);
        SteamError::UnexpectedResponse
    })?;

    let Some(friends) = envelope.friendslist.and_then(|list| list.friends) else {
        warn!("No friends found or unexpected API response");
        return Err(SteamError::UnexpectedResponse);
    };

    Ok(friends
        .into_iter()
        .filter(|friend| friend.relationship.as_deref().map_or(true, |r| r == "friend"))
        .map(|friend| friend.steamid)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const GABEN: SteamId = SteamId(76561197960287930);

    #[test]
    fn parses_player_summary() {
        let body = r#"{
            "response": {
                "players": [{
                    "steamid": "76561197960287930",
                    "communityvisibilitystate": 3,
                    "personaname": "Rabscuttle",
                    "profileurl": "https://steamcommunity.com/id/gabelogannewell/",
                    "avatar": "https://avatars.steamstatic.com/c5d56249ee5d28a07db4ac9f7f60af961fab5426.jpg"
                }]
            }
        }"#;

        let summary = parse_player_summary(body, GABEN).unwrap().unwrap();

        assert_eq!(
            summary,
            PlayerSummary {
                steam_id: GABEN,
                persona_name: "Rabscuttle".to_string(),
                profile_url: "https://steamcommunity.com/id/gabelogannewell/".to_string(),
            }
        );
    }

    #[test]
    fn no_players_means_no_profile() {
        let body = r#"{"response":{"players":[]}}"#;
        assert_eq!(parse_player_summary(body, GABEN).unwrap(), None);
    }

    #[test]
    fn garbage_summary_is_unexpected() {
        let result = parse_player_summary("<html>Internal Server Error</html>", GABEN);
        assert!(matches!(result, Err(SteamError::UnexpectedResponse)));
    }

    #[test]
    fn parses_owned_game_playtime() {
        let body = r#"{"response":{"game_count":1,"games":[{"appid":221100,"playtime_forever":125,"playtime_2weeks":4}]}}"#;

        let game = parse_owned_game(body, AppId(221100)).unwrap().unwrap();

        assert_eq!(game.playtime_forever_minutes, 125);
    }

    #[test]
    fn owned_game_without_playtime_counts_as_zero() {
        let body = r#"{"response":{"game_count":1,"games":[{"appid":221100}]}}"#;

        let game = parse_owned_game(body, AppId(221100)).unwrap().unwrap();

        assert_eq!(game.playtime_forever_minutes, 0);
    }

    #[test]
    fn missing_games_means_not_owned() {
        for body in [r#"{"response":{}}"#, r#"{"response":{"game_count":0}}"#, r#"{}"#] {
            assert_eq!(parse_owned_game(body, AppId(221100)).unwrap(), None, "{body}");
        }
    }

    #[test]
    fn parses_friend_list_in_order() {
        let body = r#"{
            "friendslist": {
                "friends": [
                    {"steamid": "76561197960265731", "relationship": "friend", "friend_since": 0},
                    {"steamid": "76561197960265740", "relationship": "friend", "friend_since": 1277407522},
                    {"steamid": "76561197960265738", "relationship": "requestrecipient", "friend_since": 0}
                ]
            }
        }"#;

        let friends = parse_friend_list(body).unwrap();

        assert_eq!(
            friends,
            vec![SteamId(76561197960265731), SteamId(76561197960265740)]
        );
    }

    #[test]
    fn missing_friends_list_is_unexpected() {
        for body in [r#"{}"#, r#"{"friendslist":{}}"#] {
            assert!(matches!(
                parse_friend_list(body),
                Err(SteamError::UnexpectedResponse)
            ));
        }
    }
}
