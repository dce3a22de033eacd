use crate::{
    spotify::WebApi,
    types::{GenreKind, GenresResponse, TrackLinks},
    uri::SpotifyUri,
    warning,
};

impl WebApi {
    /// Retrieves the genres of a track's first artist or of its album.
    ///
    /// `kind` selects the entity; its URI is the cache key, so tracks sharing
    /// an artist (or an album) share one lookup.
    ///
    /// Returns `None` when the track lacks the entity, its URI is malformed,
    /// or the entity lookup fails. Nothing is cached in those cases.
    ///
    /// # Arguments
    ///
    /// * `kind` - Whether to ask the first artist or the album
    /// * `track` - Anything exposing the track's artist and album URIs
    ///
    /// # Returns
    ///
    /// - `Some(Vec<String>)` - The entity's genres, possibly empty
    /// - `None` - The entity is unknown or could not be fetched
    ///
    /// # Example
    ///
    /// ```
    /// if let Some(track) = api.get_track("spotify:track:6rqhFgbbKwnb9MLmUQDhG6").await {
    ///     let genres = api.get_genres(GenreKind::Artist, &track).await;
    /// }
    /// ```
    pub async fn get_genres<T: TrackLinks + ?Sized>(
        &mut self,
        kind: GenreKind,
        track: &T,
    ) -> Option<Vec<String>> {
        let uri = match kind {
            GenreKind::Artist => track.first_artist_uri(),
            GenreKind::Album => track.album_uri(),
        };
        let Some(uri) = uri.map(str::to_string) else {
            warning!("Track has no {} to look up genres for", kind);
            return None;
        };

        if let Some(cached) = self.cache.genres.get(&uri) {
            return Some(cached.clone());
        }

        let entity = match SpotifyUri::parse(&uri) {
            Ok(entity) => entity,
            Err(e) => {
                warning!("{}", e);
                return None;
            }
        };

        let url = self.api_url(&format!("{}/{}", kind.collection(), entity.id));
        let response = self.request_json::<GenresResponse>(&url, "genres").await?;

        Some(self.cache.genres.insert(&uri, response.genres).clone())
    }
}
