mod response;

use crate::steam::response::{parse_friend_list, parse_owned_game, parse_player_summary};
use async_trait::async_trait;
use domain::ports::steam::{OwnedGame, PlayerSummary, SteamError, SteamPort};
use domain_shared::steam::{AppId, SteamId};
use reqwest::Client as HttpClient;
use std::fmt;
use std::time::Duration;
use tracing::{instrument, warn};
use url::Url;

pub const DEFAULT_STEAM_API_URL: &str = "https://api.steampowered.com";

const PLAYER_SUMMARIES_PATH: &str = "ISteamUser/GetPlayerSummaries/v0002/";
const OWNED_GAMES_PATH: &str = "IPlayerService/GetOwnedGames/v0001/";
const FRIEND_LIST_PATH: &str = "ISteamUser/GetFriendList/v0001/";

#[derive(Clone)]
pub struct SteamApiKey(pub String);

impl fmt::Debug for SteamApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SteamApiKey(***)")
    }
}

#[derive(Clone, Debug)]
pub struct SteamAdapterConfig {
    pub api_key: SteamApiKey,
    pub api_url: Url,
    /// Upper bound for a single request, connection included.
    pub timeout: Duration,
}

pub struct SteamAdapter {
    http_client: HttpClient,
    api_key: SteamApiKey,
    api_url: Url,
}

impl SteamAdapter {
    #[instrument(level = "trace", skip_all)]
    pub fn new(config: SteamAdapterConfig) -> Result<Self, reqwest::Error> {
        let SteamAdapterConfig {
            api_key,
            mut api_url,
            timeout,
        } = config;

        // Url::join drops the last path segment unless it ends with a slash.
        if !api_url.path().ends_with('/') {
            let path = format!("{}/", api_url.path());
            api_url.set_path(&path);
        }

        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url,
        })
    }

    #[instrument(level = "trace", skip(self, query))]
    async fn get(&self, path: &str, query: &[(&str, String)]) -> Result<String, SteamError> {
        let url = self.api_url.join(path).map_err(|err| {
            warn!("Failed to build Steam API url for {}: {:?}", path, err);
            SteamError::SteamUnavailable
        })?;

        self.http_client
            .get(url)
            .query(&[("key", self.api_key.0.as_str())])
            .query(query)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|err| {
                // The url carries the API key.
                let err = err.without_url();
                if err.is_timeout() {
                    warn!("Steam API request to {} timed out", path);
                } else {
                    warn!(
                        status = err.status().map(|s| s.as_u16()),
                        "Steam API request to {} failed: {:?}",
                        path,
                        err,
                    );
                }
                SteamError::SteamUnavailable
            })?
            .text()
            .await
            .map_err(|err| {
                warn!("Failed to read Steam API response body: {:?}", err.without_url());
                SteamError::SteamUnavailable
            })
    }
}

#[async_trait]
impl SteamPort for SteamAdapter {
    #[instrument(level = "debug", err, skip(self))]
    async fn get_player_summary(
        &self,
        steam_id: SteamId,
    ) -> Result<Option<PlayerSummary>, SteamError> {
        let body = self
            .get(
                PLAYER_SUMMARIES_PATH,
                &[("steamids", steam_id.to_string())],
            )
            .await?;

        parse_player_summary(&body, steam_id)
    }

    #[instrument(level = "debug", err, skip(self))]
    async fn get_owned_game(
        &self,
        steam_id: SteamId,
        app_id: AppId,
    ) -> Result<Option<OwnedGame>, SteamError> {
        let body = self
            .get(
                OWNED_GAMES_PATH,
                &[
                    ("steamid", steam_id.to_string()),
                    ("appids_filter[0]", app_id.0.to_string()),
                ],
            )
            .await?;

        parse_owned_game(&body, app_id)
    }

    #[instrument(level = "debug", err, skip(self))]
    async fn get_friend_list(&self, steam_id: SteamId) -> Result<Vec<SteamId>, SteamError> {
        let body = self
            .get(
                FRIEND_LIST_PATH,
                &[
                    ("steamid", steam_id.to_string()),
                    ("relationship", "friend".to_string()),
                ],
            )
            .await?;

        parse_friend_list(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_url: &str) -> SteamAdapterConfig {
        SteamAdapterConfig {
            api_key: SteamApiKey("secret".to_string()),
            api_url: Url::parse(api_url).unwrap(),
            timeout: Duration::from_secs(5),
        }
    }

    #[test]
    fn endpoint_paths_resolve_under_the_base_url() {
        for base in ["https://api.steampowered.com", "http://localhost:8080/steam"] {
            let adapter = SteamAdapter::new(config(base)).unwrap();
            let url = adapter.api_url.join(FRIEND_LIST_PATH).unwrap();
            assert_eq!(
                url.as_str(),
                format!("{}/ISteamUser/GetFriendList/v0001/", base.trim_end_matches('/'))
            );
        }
    }

    #[test]
    fn api_key_is_not_printed() {
        let printed = format!("{:?}", config(DEFAULT_STEAM_API_URL));
        assert!(!printed.contains("secret"));
    }

    #[tokio::test]
    async fn unreachable_steam_is_unavailable() {
        let mut config = config("http://127.0.0.1:9");
        config.timeout = Duration::from_millis(500);
        let adapter = SteamAdapter::new(config).unwrap();

        let result = adapter.get_friend_list(SteamId(76561197960287930)).await;

        assert!(matches!(result, Err(SteamError::SteamUnavailable)));
    }
}
