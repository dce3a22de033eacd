//! Configuration management for the Spotify enrichment layer.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. It provides a centralized way to manage the endpoints
//! the client talks to, the optional artist album filters and the transport
//! timeouts.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use std::{env, path::PathBuf, time::Duration};

use crate::Res;

pub const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_TOKEN_SEED_URL: &str = "https://open.spotify.com/browse/featured";
pub const DEFAULT_CHARTS_URL: &str = "https://spotifycharts.com";
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_14_4) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/73.0.3683.103 Safari/537.36";

const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_PAGE_DELAY_MS: u64 = 1000;

/// Loads environment variables from a `.env` file in the local data directory.
///
/// Creates the necessary directory structure if it doesn't exist and loads
/// environment variables from a `.env` file located in the platform-specific
/// local data directory under `spotrip/.env`. Every setting has a default, so
/// a missing file is not an error.
///
/// # Directory Structure
///
/// The function looks for the `.env` file in:
/// - Linux: `~/.local/share/spotrip/.env`
/// - macOS: `~/Library/Application Support/spotrip/.env`
/// - Windows: `%LOCALAPPDATA%/spotrip/.env`
///
/// # Errors
///
/// This function will return an error if:
/// - The parent directory cannot be created
/// - The `.env` file exists but cannot be read or parsed
pub async fn load_env() -> Res<()> {
    let path = env_path();
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent).await?;
    }

    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path)?;
    Ok(())
}

fn env_path() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotrip/.env");
    path
}

/// Runtime settings for [`crate::spotify::WebApi`].
///
/// Build it with [`Settings::from_env`] in the binary, or construct it
/// directly (usually starting from [`Settings::default`]) when the endpoints
/// must point somewhere else, e.g. a mock server.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Base REST endpoint, without trailing slash.
    pub api_url: String,
    /// Public page scraped for an embedded access token.
    pub token_seed_url: String,
    /// Base of the chart download endpoint, without trailing slash.
    pub charts_url: String,
    /// `album_type` filter applied to artist album listings.
    pub artist_album_type: Option<String>,
    /// `market` filter applied to artist album listings.
    pub artist_album_market: Option<String>,
    pub user_agent: String,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    /// Pause inserted before every album page request after the first.
    pub page_delay: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token_seed_url: DEFAULT_TOKEN_SEED_URL.to_string(),
            charts_url: DEFAULT_CHARTS_URL.to_string(),
            artist_album_type: None,
            artist_album_market: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            page_delay: Duration::from_millis(DEFAULT_PAGE_DELAY_MS),
        }
    }
}

impl Settings {
    /// Reads every setting from the environment, falling back to defaults.
    ///
    /// Call [`load_env`] first so values from the `.env` file are visible.
    /// Numeric values that fail to parse fall back to their defaults.
    ///
    /// # Example
    ///
    /// ```
    /// config::load_env().await?;
    /// let settings = Settings::from_env();
    /// ```
    pub fn from_env() -> Self {
        Self {
            api_url: spotify_apiurl(),
            token_seed_url: spotify_token_seed_url(),
            charts_url: spotify_charts_url(),
            artist_album_type: artist_album_type(),
            artist_album_market: artist_album_market(),
            user_agent: user_agent(),
            request_timeout: Duration::from_secs(env_u64(
                "SPOTRIP_REQUEST_TIMEOUT_SECS",
                DEFAULT_REQUEST_TIMEOUT_SECS,
            )),
            connect_timeout: Duration::from_secs(env_u64(
                "SPOTRIP_CONNECT_TIMEOUT_SECS",
                DEFAULT_CONNECT_TIMEOUT_SECS,
            )),
            page_delay: Duration::from_millis(env_u64(
                "SPOTRIP_PAGE_DELAY_MS",
                DEFAULT_PAGE_DELAY_MS,
            )),
        }
    }

    /// Returns the settings with the album filters replaced where given.
    pub fn with_album_filters(mut self, album_type: Option<String>, market: Option<String>) -> Self {
        if album_type.is_some() {
            self.artist_album_type = album_type;
        }
        if market.is_some() {
            self.artist_album_market = market;
        }
        self
    }
}

/// Returns the Spotify Web API base URL.
///
/// Reads `SPOTRIP_API_URL`, defaulting to `https://api.spotify.com/v1`.
/// A trailing slash is stripped so paths can be appended with `/`.
pub fn spotify_apiurl() -> String {
    env_url("SPOTRIP_API_URL", DEFAULT_API_URL)
}

/// Returns the page scraped for an anonymous access token.
///
/// Reads `SPOTRIP_TOKEN_SEED_URL`, defaulting to
/// `https://open.spotify.com/browse/featured`.
pub fn spotify_token_seed_url() -> String {
    env_url("SPOTRIP_TOKEN_SEED_URL", DEFAULT_TOKEN_SEED_URL)
}

/// Returns the base URL of the chart CSV downloads.
///
/// Reads `SPOTRIP_CHARTS_URL`, defaulting to `https://spotifycharts.com`.
pub fn spotify_charts_url() -> String {
    env_url("SPOTRIP_CHARTS_URL", DEFAULT_CHARTS_URL)
}

/// Returns the optional `album_type` filter (e.g. `album,single`).
pub fn artist_album_type() -> Option<String> {
    env_opt("SPOTRIP_ARTIST_ALBUM_TYPE")
}

/// Returns the optional `market` filter (an ISO 3166-1 alpha-2 code).
pub fn artist_album_market() -> Option<String> {
    env_opt("SPOTRIP_ARTIST_ALBUM_MARKET")
}

pub fn user_agent() -> String {
    env_opt("SPOTRIP_USER_AGENT").unwrap_or_else(|| DEFAULT_USER_AGENT.to_string())
}

fn env_opt(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn env_url(key: &str, default: &str) -> String {
    env_opt(key)
        .unwrap_or_else(|| default.to_string())
        .trim_end_matches('/')
        .to_string()
}

fn env_u64(key: &str, default: u64) -> u64 {
    env_opt(key)
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(default)
}
