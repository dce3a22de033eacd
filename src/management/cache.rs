use std::collections::HashMap;

use crate::types::Charts;

/// Results of one resource kind, keyed by the full URI they were asked for.
///
/// Entries are written once and live as long as the process; there is no
/// eviction and no expiry.
#[derive(Debug, Clone)]
pub struct CacheTable<V> {
    name: &'static str,
    entries: HashMap<String, V>,
}

impl<V> CacheTable<V> {
    /// Creates an empty table; `name` labels it in cache statistics.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            entries: HashMap::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Cached result for `uri`, matched on the exact URI string.
    pub fn get(&self, uri: &str) -> Option<&V> {
        self.entries.get(uri)
    }

    /// Stores `value` for `uri` unless a result is already present.
    ///
    /// Returns the entry held afterwards, which is the earlier value when
    /// one existed.
    ///
    /// # Example
    ///
    /// ```
    /// let mut table = CacheTable::new("genres");
    /// table.insert("spotify:artist:a", vec!["rock".to_string()]);
    /// let kept = table.insert("spotify:artist:a", vec!["jazz".to_string()]);
    /// assert_eq!(kept, &vec!["rock".to_string()]);
    /// ```
    pub fn insert(&mut self, uri: &str, value: V) -> &V {
        self.entries.entry(uri.to_string()).or_insert(value)
    }

    pub fn contains(&self, uri: &str) -> bool {
        self.entries.contains_key(uri)
    }

    /// Number of cached URIs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The five per-kind result tables consulted before any network I/O.
#[derive(Debug, Clone)]
pub struct ResultCache {
    pub albums_with_filter: CacheTable<Vec<String>>,
    pub artists_on_album: CacheTable<Vec<String>>,
    pub genres: CacheTable<Vec<String>>,
    pub charts: CacheTable<Charts>,
    /// Resolved image URL only; the bytes are fetched on every access.
    pub large_coverart: CacheTable<String>,
}

impl ResultCache {
    pub fn new() -> Self {
        Self {
            albums_with_filter: CacheTable::new("albums_with_filter"),
            artists_on_album: CacheTable::new("artists_on_album"),
            genres: CacheTable::new("genres"),
            charts: CacheTable::new("charts"),
            large_coverart: CacheTable::new("large_coverart"),
        }
    }

    /// Entry count per table, in a fixed order.
    pub fn counts(&self) -> [(&'static str, usize); 5] {
        [
            (self.albums_with_filter.name(), self.albums_with_filter.len()),
            (self.artists_on_album.name(), self.artists_on_album.len()),
            (self.genres.name(), self.genres.len()),
            (self.charts.name(), self.charts.len()),
            (self.large_coverart.name(), self.large_coverart.len()),
        ]
    }
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new()
    }
}
