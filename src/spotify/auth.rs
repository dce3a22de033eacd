use reqwest::Client;

use crate::{info, spotify::browser_headers, utils, warning};

/// Fetches the public web player page and extracts its embedded token.
///
/// The request is always anonymous. The body is scanned whatever the status
/// code; a transport error or a body without the `"accessToken":"` marker
/// yields `None`. There is no retry at this level.
///
/// # Arguments
///
/// * `client` - Shared HTTP client; browser-like headers are added per request
/// * `seed_url` - Public page embedding the token
///
/// # Returns
///
/// - `Some(String)` - The raw access token
/// - `None` - The page could not be fetched or carried no token
///
/// # Example
///
/// ```
/// let client = Client::new();
/// if let Some(token) = fetch_page_token(&client, "https://open.spotify.com/browse/featured").await {
///     session.store(Credential::new(token));
/// }
/// ```
pub async fn fetch_page_token(client: &Client, seed_url: &str) -> Option<String> {
    info!("Attempting to retrieve new token from Spotify Web");

    let response = match client.get(seed_url).headers(browser_headers()).send().await {
        Ok(response) => response,
        Err(e) => {
            warning!("Cannot reach {}: {}", utils::url_host(seed_url), e);
            return None;
        }
    };

    let body = match response.text().await {
        Ok(body) => body,
        Err(e) => {
            warning!("Cannot read token page: {}", e);
            return None;
        }
    };

    utils::extract_access_token(&body)
}
