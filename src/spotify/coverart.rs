use crate::{
    spotify::WebApi,
    types::TrackResponse,
    uri::SpotifyUri,
    utils::{self, LARGE_COVERART_MIN_WIDTH},
    warning,
};

impl WebApi {
    /// Downloads the first cover image of a track's album that is at least
    /// 600 pixels wide.
    ///
    /// Only the resolved image URL is cached. The image bytes are downloaded
    /// on every call, so a cached track costs one request and an uncached one
    /// costs two (track lookup, then image).
    ///
    /// Returns `None` without caching when the URI is malformed, the track
    /// lookup fails, the payload has no album images, or no image is wide
    /// enough.
    ///
    /// # Arguments
    ///
    /// * `uri` - Track URI, e.g. `spotify:track:<id>`; also the cache key
    ///
    /// # Returns
    ///
    /// - `Some(Vec<u8>)` - The encoded image as served, usually JPEG
    /// - `None` - No suitable image, or a request failed
    ///
    /// # Example
    ///
    /// ```
    /// if let Some(jpeg) = api.get_large_coverart("spotify:track:6rqhFgbbKwnb9MLmUQDhG6").await {
    ///     async_fs::write("cover.jpg", jpeg).await?;
    /// }
    /// ```
    pub async fn get_large_coverart(&mut self, uri: &str) -> Option<Vec<u8>> {
        if let Some(image_url) = self.cache.large_coverart.get(uri).cloned() {
            return self.request_bytes(&image_url, "cover art").await;
        }

        let track = match SpotifyUri::parse(uri) {
            Ok(track) => track,
            Err(e) => {
                warning!("{}", e);
                return None;
            }
        };

        let url = self.api_url(&format!("tracks/{}", track.id));
        let response = self.request_json::<TrackResponse>(&url, "track").await?;

        let Some(images) = response.album.and_then(|album| album.images) else {
            warning!("Track {} has no album images", uri);
            return None;
        };

        let Some(image) = utils::select_large_image(&images, LARGE_COVERART_MIN_WIDTH) else {
            warning!(
                "No cover art of at least {}px found for {}",
                LARGE_COVERART_MIN_WIDTH,
                uri
            );
            return None;
        };

        let image_url = self
            .cache
            .large_coverart
            .insert(uri, image.url.clone())
            .clone();
        self.request_bytes(&image_url, "cover art").await
    }
}
