use clap::Args;
use domain::profile::{DAYZ_APP_ID, DAYZ_NAME};
use infrastructure::steam::DEFAULT_STEAM_API_URL;
use url::Url;

#[derive(Args)]
pub struct CommonArgs {
    /// Steam Web API key
    #[arg(long, env = "STEAM_API_KEY")]
    pub steam_api_key: String,
    #[arg(long, env = "STEAM_API_URL", default_value = DEFAULT_STEAM_API_URL)]
    pub steam_api_url: Url,
    /// App ID of the game whose playtime is shown
    #[arg(long, env = "STEAM_APP_ID", default_value_t = DAYZ_APP_ID.0)]
    pub steam_app_id: u32,
    #[arg(long, env = "STEAM_GAME_NAME", default_value = DAYZ_NAME)]
    pub steam_game_name: String,
    /// Timeout of a single Steam API request, in seconds
    #[arg(long, env = "STEAM_TIMEOUT_SECS", default_value_t = 5)]
    pub steam_timeout_secs: u64,
    #[arg(long, env = "SENTRY_DSN")]
    pub sentry_dsn: Option<String>,
    #[arg(long, env = "SENTRY_ENVIRONMENT")]
    pub sentry_environment: Option<String>,
    #[arg(long, env = "SENTRY_SAMPLE_RATE")]
    pub sentry_sample_rate: Option<f32>,
    #[arg(long, env = "SENTRY_TRACES_SAMPLE_RATE")]
    pub sentry_traces_sample_rate: Option<f32>,
}
