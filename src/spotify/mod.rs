//! # Spotify Integration Module
//!
//! This module mediates between the ripper and Spotify's remote HTTP surfaces.
//! Every public operation is composed of the same three steps:
//!
//! ```text
//! Caller (ripper, CLI)
//!          ↓
//! Result cache (per resource kind, keyed by URI)
//!          ↓  miss
//! Request executor (bearer credential, one re-authentication on 401)
//!          ↓
//! Web API / chart downloads
//! ```
//!
//! ## Core Modules
//!
//! - [`auth`] - Scrapes an anonymous access token from the public web player
//! - [`albums`] - Paginated album listing of an artist, with optional filters
//! - [`artists`] - Artist credits of an album
//! - [`genres`] - Genres of a track's first artist or of its album
//! - [`charts`] - Regional and viral chart downloads
//! - [`chart_csv`] - Parser for the chart CSV format
//! - [`coverart`] - High-resolution cover art of a track
//! - [`tracks`] - Plain track lookups feeding the genre operation
//!
//! ## Authentication Strategy
//!
//! The credential is acquired lazily, right before the first request that
//! needs it. A 401 discards it and the request is attempted once more with a
//! freshly acquired credential (or anonymously when none can be obtained).
//! At most [`MAX_ATTEMPTS`] requests are made per logical call.
//!
//! ## Error Handling Philosophy
//!
//! No operation fails loudly. Malformed input, transport errors, non-200
//! responses and payloads missing expected fields are logged and turned into
//! a failure marker (`None` or an empty list) so a batch caller can skip the
//! enrichment and carry on. Partial results (truncated pagination, an empty
//! chart download) are not failures; they are cached and returned.
//!
//! ## Thread Safety
//!
//! All operations take `&mut self` and await their requests one after the
//! other. A [`WebApi`] is meant to be driven from one task at a time.
//!
//! ## Security Considerations
//!
//! - TLS certificates are always verified
//! - Every request has explicit connect and total timeouts
//! - Tokens are never logged in full

use reqwest::{Client, Response, StatusCode, header};
use serde::de::DeserializeOwned;

use crate::{
    config::Settings,
    info,
    management::{ResultCache, Session},
    utils, warning,
};

pub mod albums;
pub mod artists;
pub mod auth;
pub mod chart_csv;
pub mod charts;
pub mod coverart;
pub mod genres;
pub mod tracks;

/// Upper bound of HTTP attempts for one logical request.
pub const MAX_ATTEMPTS: usize = 2;

/// Client and cache for Spotify's Web API.
pub struct WebApi {
    client: Client,
    settings: Settings,
    session: Session,
    cache: ResultCache,
}

impl WebApi {
    /// Builds the HTTP client described by `settings`.
    ///
    /// The client carries the configured user agent and both timeouts. No
    /// request is made here; the credential is acquired on first use.
    ///
    /// # Arguments
    ///
    /// * `settings` - Endpoints, album filters, timeouts and page delay
    ///
    /// # Errors
    ///
    /// Fails when the TLS backend cannot be initialised.
    ///
    /// # Example
    ///
    /// ```
    /// config::load_env().await?;
    /// let mut api = WebApi::new(Settings::from_env())?;
    /// ```
    pub fn new(settings: Settings) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(settings.user_agent.clone())
            .timeout(settings.request_timeout)
            .connect_timeout(settings.connect_timeout)
            .build()?;

        Ok(Self {
            client,
            session: Session::new(settings.token_seed_url.clone()),
            settings,
            cache: ResultCache::new(),
        })
    }

    /// Settings the client was built with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Credential state shared by every request of this client.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Mutable credential state, e.g. to hand over a token obtained elsewhere.
    ///
    /// # Example
    ///
    /// ```
    /// api.session_mut().store(Credential::new(token));
    /// ```
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Read access to the per-kind result tables.
    pub fn cache(&self) -> &ResultCache {
        &self.cache
    }

    pub(crate) fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.settings.api_url, path)
    }

    /// Issues a GET request, handling the credential on the way.
    ///
    /// 1. Without a credential, one is acquired; if that fails the request
    ///    goes out anonymously.
    /// 2. A 200 response is returned.
    /// 3. A 401 on an authenticated attempt invalidates the credential and
    ///    starts the next attempt; a 401 on an anonymous attempt is final.
    /// 4. Any other status, or a transport error, is logged and final.
    ///
    /// # Arguments
    ///
    /// * `url` - Absolute URL to fetch
    /// * `description` - What is being fetched, used in log lines only
    ///
    /// # Returns
    ///
    /// - `Some(Response)` - The first 200 response, body not yet read
    /// - `None` - A final failure, or [`MAX_ATTEMPTS`] attempts used up
    ///
    /// # Example
    ///
    /// ```
    /// let url = format!("{}/albums/{}", api.settings().api_url, id);
    /// if let Some(response) = api.request(&url, "album").await {
    ///     let album: AlbumResponse = response.json().await?;
    /// }
    /// ```
    pub async fn request(&mut self, url: &str, description: &str) -> Option<Response> {
        for _ in 0..MAX_ATTEMPTS {
            if self.session.token().is_none() {
                self.session.acquire(&self.client).await;
            }

            info!(
                "Attempting to retrieve {} from {}",
                description,
                utils::url_host(url)
            );
            info!("{}", url);

            let mut request = self.client.get(url);
            let authenticated = match self.session.token() {
                Some(credential) => {
                    request = request.bearer_auth(credential.as_str());
                    true
                }
                None => false,
            };

            let response = match request.send().await {
                Ok(response) => response,
                Err(e) => {
                    warning!("Request for {} failed: {}", description, e);
                    return None;
                }
            };

            match response.status() {
                StatusCode::OK => return Some(response),
                StatusCode::UNAUTHORIZED if authenticated => {
                    warning!("Token was rejected, requesting a new one");
                    self.session.invalidate();
                }
                status => {
                    warning!("URL returned non-200 HTTP code: {}", status.as_u16());
                    return None;
                }
            }
        }

        warning!(
            "Giving up on {} after {} attempts",
            description,
            MAX_ATTEMPTS
        );
        None
    }

    /// [`WebApi::request`] followed by JSON decoding into `T`.
    ///
    /// Invalid JSON and payloads missing required fields both yield `None`.
    ///
    /// # Arguments
    ///
    /// * `url` - Absolute URL to fetch
    /// * `description` - What is being fetched, used in log lines only
    ///
    /// # Returns
    ///
    /// - `Some(T)` - The decoded body of a 200 response
    /// - `None` - The request failed or the body did not decode as `T`
    ///
    /// # Example
    ///
    /// ```
    /// let genres = api
    ///     .request_json::<GenresResponse>(&url, "artist genres")
    ///     .await
    ///     .map(|response| response.genres);
    /// ```
    pub async fn request_json<T: DeserializeOwned>(
        &mut self,
        url: &str,
        description: &str,
    ) -> Option<T> {
        let response = self.request(url, description).await?;
        match response.json::<T>().await {
            Ok(json) => Some(json),
            Err(e) => {
                warning!("Cannot decode {} response: {}", description, e);
                None
            }
        }
    }

    /// [`WebApi::request`] followed by reading the body as text.
    ///
    /// Used for downloads that are not JSON, such as chart CSV files.
    ///
    /// # Arguments
    ///
    /// * `url` - Absolute URL to fetch
    /// * `description` - What is being fetched, used in log lines only
    ///
    /// # Returns
    ///
    /// - `Some(String)` - The body of a 200 response
    /// - `None` - The request failed or the body could not be read
    ///
    /// # Example
    ///
    /// ```
    /// let body = api.request_text(&download_url, "chart").await;
    /// ```
    pub async fn request_text(&mut self, url: &str, description: &str) -> Option<String> {
        let response = self.request(url, description).await?;
        match response.text().await {
            Ok(text) => Some(text),
            Err(e) => {
                warning!("Cannot read {} response: {}", description, e);
                None
            }
        }
    }

    /// [`WebApi::request`] followed by reading the raw body.
    ///
    /// # Arguments
    ///
    /// * `url` - Absolute URL to fetch
    /// * `description` - What is being fetched, used in log lines only
    ///
    /// # Returns
    ///
    /// - `Some(Vec<u8>)` - The body of a 200 response
    /// - `None` - The request failed or the body could not be read
    ///
    /// # Example
    ///
    /// ```
    /// let jpeg = api.request_bytes(&image.url, "cover art").await;
    /// ```
    pub async fn request_bytes(&mut self, url: &str, description: &str) -> Option<Vec<u8>> {
        let response = self.request(url, description).await?;
        match response.bytes().await {
            Ok(bytes) => Some(bytes.to_vec()),
            Err(e) => {
                warning!("Cannot read {} response: {}", description, e);
                None
            }
        }
    }
}

/// Headers a desktop browser sends when opening the web player.
pub(crate) fn browser_headers() -> header::HeaderMap {
    let mut headers = header::HeaderMap::new();
    headers.insert(header::PRAGMA, header::HeaderValue::from_static("no-cache"));
    headers.insert(
        header::CACHE_CONTROL,
        header::HeaderValue::from_static("no-cache"),
    );
    headers.insert(
        header::UPGRADE_INSECURE_REQUESTS,
        header::HeaderValue::from_static("1"),
    );
    headers.insert(
        header::ACCEPT,
        header::HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,image/apng,*/*;q=0.8",
        ),
    );
    headers
}
