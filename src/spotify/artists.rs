use crate::{spotify::WebApi, types::AlbumResponse, uri::SpotifyUri, warning};

impl WebApi {
    /// Retrieves the names of the artists credited on an album, in order.
    ///
    /// Returns `None` without caching anything when the URI is malformed,
    /// the album cannot be fetched, or its payload has no `artists` list.
    ///
    /// # Arguments
    ///
    /// * `uri` - Album URI, e.g. `spotify:album:<id>`; also the cache key
    ///
    /// # Returns
    ///
    /// - `Some(Vec<String>)` - Artist names as credited, possibly cached
    /// - `None` - The album could not be resolved
    ///
    /// # Example
    ///
    /// ```
    /// let names = api.get_artists_on_album("spotify:album:6akEvsycLGftJxYudPjmqK").await;
    /// ```
    pub async fn get_artists_on_album(&mut self, uri: &str) -> Option<Vec<String>> {
        if let Some(cached) = self.cache.artists_on_album.get(uri) {
            return Some(cached.clone());
        }

        let album = match SpotifyUri::parse(uri) {
            Ok(album) => album,
            Err(e) => {
                warning!("{}", e);
                return None;
            }
        };

        let url = self.api_url(&format!("albums/{}", album.id));
        let response = self.request_json::<AlbumResponse>(&url, "album").await?;

        let names = response
            .artists
            .into_iter()
            .map(|artist| artist.name)
            .collect::<Vec<String>>();

        Some(self.cache.artists_on_album.insert(uri, names).clone())
    }
}
