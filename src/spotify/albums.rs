use tokio::time::sleep;

use crate::{
    info,
    spotify::WebApi,
    types::AlbumsPage,
    uri::SpotifyUri,
    warning,
};

/// Page size of artist album listings.
pub const ALBUM_PAGE_SIZE: u64 = 50;

impl WebApi {
    /// Retrieves the URIs of all albums of an artist.
    ///
    /// Uses the `album_type` and `market` filters from the settings when
    /// present. Pages of [`ALBUM_PAGE_SIZE`] are requested until the offset
    /// reaches the `total` reported by the first page, with the configured
    /// page delay before every page after the first.
    ///
    /// # Partial Results
    ///
    /// A failed page, a page missing `items`, a first page missing `total`,
    /// or an empty page ends the listing early. Whatever was gathered so far is cached and
    /// returned; the API delivering fewer albums than promised is accepted.
    ///
    /// A malformed artist URI yields an empty list and nothing is cached.
    ///
    /// # Arguments
    ///
    /// * `uri` - Artist URI, e.g. `spotify:artist:<id>`; also the cache key
    ///
    /// # Returns
    ///
    /// Album URIs in listing order. Empty on a malformed URI or when the
    /// first page already fails.
    ///
    /// # Example
    ///
    /// ```
    /// let albums = api.get_albums_with_filter("spotify:artist:4NHQUGzhtTLFvgF5SZesLK").await;
    /// ```
    pub async fn get_albums_with_filter(&mut self, uri: &str) -> Vec<String> {
        if let Some(cached) = self.cache.albums_with_filter.get(uri) {
            return cached.clone();
        }

        let artist = match SpotifyUri::parse(uri) {
            Ok(artist) => artist,
            Err(e) => {
                warning!("{}", e);
                return Vec::new();
            }
        };

        let mut album_uris: Vec<String> = Vec::new();
        let mut total: Option<u64> = None;
        let mut offset: u64 = 0;

        while total.is_none_or(|total| offset < total) {
            if total.is_some() {
                sleep(self.settings.page_delay).await;
            }

            let url = self.albums_url(&artist.id, offset);
            let Some(page) = self.request_json::<AlbumsPage>(&url, "albums").await else {
                break;
            };
            if page.items.is_empty() {
                break;
            }

            album_uris.extend(page.items.into_iter().map(|album| album.uri));
            offset = album_uris.len() as u64;

            if total.is_none() {
                match page.total {
                    Some(reported) => total = Some(reported),
                    None => {
                        warning!("First albums page has no total, stopping after it");
                        break;
                    }
                }
            }
        }

        info!("{} albums found", album_uris.len());
        self.cache
            .albums_with_filter
            .insert(uri, album_uris)
            .clone()
    }

    fn albums_url(&self, artist_id: &str, offset: u64) -> String {
        let mut query = String::new();
        if let Some(album_type) = &self.settings.artist_album_type {
            query.push_str(&format!("album_type={}&", album_type));
        }
        if let Some(market) = &self.settings.artist_album_market {
            query.push_str(&format!("market={}&", market));
        }

        self.api_url(&format!(
            "artists/{id}/albums?{query}limit={limit}&offset={offset}",
            id = artist_id,
            query = query,
            limit = ALBUM_PAGE_SIZE,
            offset = offset
        ))
    }
}
