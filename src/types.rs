use std::fmt;

use serde::{Deserialize, Serialize};
use tabled::Tabled;

use crate::uri::{ChartDate, Metric, Region, Window};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UriItem {
    pub uri: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumsPage {
    pub items: Vec<UriItem>,
    /// Only read from the first page of a listing.
    #[serde(default)]
    pub total: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumArtist {
    #[serde(default)]
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlbumResponse {
    pub artists: Vec<AlbumArtist>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenresResponse {
    pub genres: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkedEntity {
    pub uri: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackAlbum {
    pub uri: Option<String>,
    #[serde(default)]
    pub name: String,
    pub images: Option<Vec<Image>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackResponse {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub artists: Vec<LinkedEntity>,
    pub album: Option<TrackAlbum>,
}

/// Access to the two entities of a track that carry genres.
///
/// The ripper hands over its own track objects; anything that can name the
/// URI of its first artist and of its album can be used for genre lookups.
pub trait TrackLinks {
    fn first_artist_uri(&self) -> Option<&str>;
    fn album_uri(&self) -> Option<&str>;
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TrackMeta {
    pub name: String,
    pub uri: String,
    pub artist_uris: Vec<String>,
    pub album_uri: Option<String>,
}

impl TrackLinks for TrackMeta {
    fn first_artist_uri(&self) -> Option<&str> {
        self.artist_uris.first().map(String::as_str)
    }

    fn album_uri(&self) -> Option<&str> {
        self.album_uri.as_deref()
    }
}

impl From<TrackResponse> for TrackMeta {
    fn from(track: TrackResponse) -> Self {
        TrackMeta {
            name: track.name,
            uri: track.uri,
            artist_uris: track.artists.into_iter().map(|a| a.uri).collect(),
            album_uri: track.album.and_then(|a| a.uri),
        }
    }
}

/// Which entity of a track a genre lookup is made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum GenreKind {
    Artist,
    Album,
}

impl GenreKind {
    /// Collection path of the entity on the REST API.
    pub fn collection(&self) -> &'static str {
        match self {
            GenreKind::Artist => "artists",
            GenreKind::Album => "albums",
        }
    }
}

impl fmt::Display for GenreKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenreKind::Artist => write!(f, "artist"),
            GenreKind::Album => write!(f, "album"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Charts {
    pub metric: Metric,
    pub region: Region,
    pub window: Window,
    pub date: ChartDate,
    pub tracks: Vec<String>,
}

#[derive(Tabled)]
pub struct UriTableRow {
    #[tabled(rename = "#")]
    pub position: usize,
    pub uri: String,
}

#[derive(Tabled)]
pub struct NameTableRow {
    pub uri: String,
    pub names: String,
}

#[derive(Tabled)]
pub struct CacheTableRow {
    pub kind: String,
    pub entries: usize,
}
