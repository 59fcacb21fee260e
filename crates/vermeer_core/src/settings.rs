//! Environment-style settings read once at process start.

use chrono_tz::Tz;
use std::path::PathBuf;
use vermeer_error::{ConfigError, VermeerResult};

fn required(key: &str) -> VermeerResult<String> {
    std::env::var(key).map_err(|_| ConfigError::new(format!("{} not set", key)).into())
}

/// Credentials, target communities, and paths from the environment.
///
/// Read once at startup; nothing here changes during a run.
///
/// # Environment
///
/// - `REDDIT_CLIENT_ID`, `REDDIT_CLIENT_SECRET`, `REDDIT_USERNAME`,
///   `REDDIT_PASSWORD` - script-app credentials (required)
/// - `REDDIT_USER_AGENT` - client user agent (optional)
/// - `REDDIT_SUBREDDITS` - comma-separated target communities
/// - `ASSETS_DIR` - image pool directory (default `.`)
/// - `VERMEER_LINKS` - comma-separated link-post URLs (optional)
/// - `VERMEER_TIMEZONE` - IANA zone name (default `Europe/Brussels`)
/// - `VERMEER_STATE_FILE` - state file path (default `vermeer_state.json`)
#[derive(Debug, Clone)]
pub struct Settings {
    /// OAuth client id
    pub client_id: String,
    /// OAuth client secret
    pub client_secret: String,
    /// Account username
    pub username: String,
    /// Account password
    pub password: String,
    /// HTTP user agent
    pub user_agent: String,
    /// Target community names
    pub subreddits: Vec<String>,
    /// Directory holding candidate images
    pub assets_dir: PathBuf,
    /// Candidate URLs for link posts
    pub links: Vec<String>,
    /// Fixed IANA zone for all time classification
    pub timezone: Tz,
    /// Path of the persisted state file
    pub state_file: PathBuf,
}

fn split_csv(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

impl Settings {
    /// Read settings from the environment.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`](vermeer_error::ConfigError) if a required
    /// credential is missing or the timezone name is unknown.
    pub fn from_env() -> VermeerResult<Self> {
        let timezone_name = std::env::var("VERMEER_TIMEZONE")
            .unwrap_or_else(|_| "Europe/Brussels".to_string());
        let timezone: Tz = timezone_name
            .parse()
            .map_err(|_| ConfigError::new(format!("Unknown timezone: {}", timezone_name)))?;

        Ok(Self {
            client_id: required("REDDIT_CLIENT_ID")?,
            client_secret: required("REDDIT_CLIENT_SECRET")?,
            username: required("REDDIT_USERNAME")?,
            password: required("REDDIT_PASSWORD")?,
            user_agent: std::env::var("REDDIT_USER_AGENT")
                .unwrap_or_else(|_| "vermeer/0.1 by u/unknown".to_string()),
            subreddits: split_csv(&std::env::var("REDDIT_SUBREDDITS").unwrap_or_default()),
            assets_dir: std::env::var("ASSETS_DIR")
                .unwrap_or_else(|_| ".".to_string())
                .into(),
            links: split_csv(&std::env::var("VERMEER_LINKS").unwrap_or_default()),
            timezone,
            state_file: std::env::var("VERMEER_STATE_FILE")
                .unwrap_or_else(|_| "vermeer_state.json".to_string())
                .into(),
        })
    }
}
