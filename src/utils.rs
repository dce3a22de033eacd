use reqwest::Url;

use crate::types::Image;

pub const ACCESS_TOKEN_MARKER: &str = "\"accessToken\":\"";
const ACCESS_TOKEN_TERMINATOR: &str = "\",\"";

pub const LARGE_COVERART_MIN_WIDTH: u32 = 600;

/// Pulls the embedded access token out of a web player page.
///
/// The token starts right after the first `"accessToken":"` and runs up to
/// the next `","`. Returns `None` when either marker is missing or the token
/// would be empty.
pub fn extract_access_token(body: &str) -> Option<String> {
    let start = body.find(ACCESS_TOKEN_MARKER)? + ACCESS_TOKEN_MARKER.len();
    let len = body[start..].find(ACCESS_TOKEN_TERMINATOR)?;
    let token = &body[start..start + len];

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// First image at least `min_width` pixels wide, in listing order.
pub fn select_large_image(images: &[Image], min_width: u32) -> Option<&Image> {
    images
        .iter()
        .find(|image| image.width.is_some_and(|w| w >= min_width))
}

/// Turns `https://open.spotify.com/track/<id>` into `spotify:track:<id>`.
pub fn track_uri_from_url(url: &str) -> Option<String> {
    let id = url.trim().trim_end_matches('/').rsplit('/').next()?;
    if id.is_empty() {
        return None;
    }
    Some(format!("spotify:track:{}", id))
}

/// Shortens a bearer token for log output.
pub fn redact_token(token: &str) -> String {
    let visible: String = token.chars().take(6).collect();
    format!("{}…", visible)
}

/// Host (and explicit port) of a URL, used in request log lines.
///
/// Anything that does not parse as an absolute URL is returned unchanged.
pub fn url_host(url: &str) -> String {
    let Ok(parsed) = Url::parse(url) else {
        return url.to_string();
    };

    match (parsed.host_str(), parsed.port()) {
        (Some(host), Some(port)) => format!("{}:{}", host, port),
        (Some(host), None) => host.to_string(),
        (None, _) => url.to_string(),
    }
}
