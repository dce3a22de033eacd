//! Parser for the chart CSV downloads.
//!
//! The download format is undocumented and has changed before, so everything
//! that knows about it lives here behind [`parse_track_uris`].
//!
//! Regional files start with a disclaimer line ahead of the header, so the
//! header is the first record that has a `URL` column. Each data row yields
//! one track URI built from the last path segment of its `URL` cell. Rows
//! without a usable `URL` cell are skipped.

use std::fmt;

use csv::ReaderBuilder;

use crate::utils;

pub const URL_COLUMN: &str = "URL";

#[derive(Debug)]
pub enum ChartParseError {
    MissingUrlColumn,
    Csv(csv::Error),
}

impl fmt::Display for ChartParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartParseError::MissingUrlColumn => {
                write!(f, "chart download has no {} column", URL_COLUMN)
            }
            ChartParseError::Csv(e) => write!(f, "chart download is not valid CSV: {}", e),
        }
    }
}

impl std::error::Error for ChartParseError {}

impl From<csv::Error> for ChartParseError {
    fn from(err: csv::Error) -> Self {
        ChartParseError::Csv(err)
    }
}

/// Extracts the ordered track URIs of a chart download.
///
/// # Errors
///
/// - [`ChartParseError::MissingUrlColumn`] when no record names a `URL` column
/// - [`ChartParseError::Csv`] when the body cannot be read as CSV
pub fn parse_track_uris(body: &str) -> Result<Vec<String>, ChartParseError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(body.as_bytes());

    let mut url_index: Option<usize> = None;
    let mut tracks = Vec::new();

    for record in reader.records() {
        let record = record?;

        let Some(index) = url_index else {
            url_index = record
                .iter()
                .position(|field| field.trim_start_matches('\u{feff}').trim() == URL_COLUMN);
            continue;
        };

        if let Some(uri) = record
            .get(index)
            .map(str::trim)
            .filter(|cell| !cell.is_empty())
            .and_then(utils::track_uri_from_url)
        {
            tracks.push(uri);
        }
    }

    match url_index {
        Some(_) => Ok(tracks),
        None => Err(ChartParseError::MissingUrlColumn),
    }
}
