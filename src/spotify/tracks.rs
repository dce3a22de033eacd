use crate::{
    spotify::WebApi,
    types::{TrackMeta, TrackResponse},
    uri::SpotifyUri,
    warning,
};

impl WebApi {
    /// Looks up a track and returns the links genre lookups need.
    ///
    /// Not cached; the ripper normally already holds its track objects and
    /// only the CLI starts from a bare track URI.
    ///
    /// # Arguments
    ///
    /// * `uri` - Track URI, e.g. `spotify:track:<id>`
    ///
    /// # Returns
    ///
    /// - `Some(TrackMeta)` - Name, URI, artist URIs and album URI
    /// - `None` - Malformed URI or failed lookup
    ///
    /// # Example
    ///
    /// ```
    /// let track = api.get_track("spotify:track:6rqhFgbbKwnb9MLmUQDhG6").await;
    /// ```
    pub async fn get_track(&mut self, uri: &str) -> Option<TrackMeta> {
        let track = match SpotifyUri::parse(uri) {
            Ok(track) => track,
            Err(e) => {
                warning!("{}", e);
                return None;
            }
        };

        let url = self.api_url(&format!("tracks/{}", track.id));
        self.request_json::<TrackResponse>(&url, "track")
            .await
            .map(TrackMeta::from)
    }
}
