use std::path::PathBuf;

use crate::{spotify::WebApi, success, uri::SpotifyUri, warning};

/// Writes the large cover art of `uri` to `output`, or to `<track-id>.jpg`.
///
/// Returns `false` when no image could be fetched or written.
pub async fn cover(api: &mut WebApi, uri: &str, output: Option<PathBuf>) -> bool {
    let Some(bytes) = api.get_large_coverart(uri).await else {
        warning!("No large cover art found for {}", uri);
        return false;
    };

    let path = output.unwrap_or_else(|| {
        let name = SpotifyUri::parse(uri)
            .map(|track| track.id)
            .unwrap_or_else(|_| "cover".to_string());
        PathBuf::from(format!("{}.jpg", name))
    });

    match async_fs::write(&path, &bytes).await {
        Ok(()) => {
            success!("Wrote {} bytes of cover art to {}", bytes.len(), path.display());
            true
        }
        Err(e) => {
            warning!("Cannot write cover art to {}: {}", path.display(), e);
            false
        }
    }
}
