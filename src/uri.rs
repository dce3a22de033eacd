//! Colon-delimited Spotify URIs.
//!
//! Entity URIs have three tokens (`spotify:album:<id>`), chart URIs six
//! (`spotify:charts:<metric>:<region>:<window>:<date>`). Parsing never touches
//! the network; a malformed URI is rejected before any request is made.

use std::fmt;

use chrono::NaiveDate;

pub const CHART_URI_PATTERN: &str = "spotify:charts:metric:region:time_window:date";

pub const VALID_REGIONS: [&str; 58] = [
    "us", "gb", "ad", "ar", "at", "au", "be", "bg", "bo", "br", "ca", "ch", "cl", "co", "cr", "cy",
    "cz", "de", "dk", "do", "ec", "ee", "es", "fi", "fr", "gr", "gt", "hk", "hn", "hu", "id", "ie",
    "is", "it", "lt", "lu", "lv", "mt", "mx", "my", "ni", "nl", "no", "nz", "pa", "pe", "ph", "pl",
    "pt", "py", "se", "sg", "sk", "sv", "tr", "tw", "uy", "global",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UriError {
    TokenCount {
        uri: String,
        expected: usize,
        found: usize,
    },
    ChartParameter {
        value: String,
        valid: String,
    },
}

impl fmt::Display for UriError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UriError::TokenCount {
                uri,
                expected,
                found,
            } => write!(
                f,
                "Malformed URI {}: expected {} colon-separated tokens, found {}",
                uri, expected, found
            ),
            UriError::ChartParameter { value, valid } => write!(
                f,
                "Not a valid Spotify charts URI parameter: {}\nValid parameter options are: [{}]",
                value, valid
            ),
        }
    }
}

impl std::error::Error for UriError {}

fn split_exact<'a>(uri: &'a str, expected: usize) -> Result<Vec<&'a str>, UriError> {
    let tokens: Vec<&str> = uri.split(':').collect();
    if tokens.len() != expected {
        return Err(UriError::TokenCount {
            uri: uri.to_string(),
            expected,
            found: tokens.len(),
        });
    }
    Ok(tokens)
}

/// A three-token entity URI such as `spotify:track:6rqhFgbbKwnb9MLmUQDhG6`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpotifyUri {
    pub scheme: String,
    pub kind: String,
    pub id: String,
}

impl SpotifyUri {
    pub fn parse(uri: &str) -> Result<Self, UriError> {
        let tokens = split_exact(uri, 3)?;
        Ok(SpotifyUri {
            scheme: tokens[0].to_string(),
            kind: tokens[1].to_string(),
            id: tokens[2].to_string(),
        })
    }
}

impl fmt::Display for SpotifyUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.scheme, self.kind, self.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    Regional,
    Viral,
}

impl Metric {
    pub const VALID: [&'static str; 2] = ["regional", "viral"];

    pub fn parse(value: &str) -> Result<Self, UriError> {
        match value {
            "regional" => Ok(Metric::Regional),
            "viral" => Ok(Metric::Viral),
            _ => Err(invalid(value, Self::VALID.join(", "))),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Metric::Regional => write!(f, "regional"),
            Metric::Viral => write!(f, "viral"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region(&'static str);

impl Region {
    pub fn parse(value: &str) -> Result<Self, UriError> {
        VALID_REGIONS
            .iter()
            .find(|r| **r == value)
            .map(|r| Region(*r))
            .ok_or_else(|| invalid(value, VALID_REGIONS.join(", ")))
    }

    pub fn code(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    Daily,
    Weekly,
}

impl Window {
    pub const VALID: [&'static str; 2] = ["daily", "weekly"];

    pub fn parse(value: &str) -> Result<Self, UriError> {
        match value {
            "daily" => Ok(Window::Daily),
            "weekly" => Ok(Window::Weekly),
            _ => Err(invalid(value, Self::VALID.join(", "))),
        }
    }
}

impl fmt::Display for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Window::Daily => write!(f, "daily"),
            Window::Weekly => write!(f, "weekly"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartDate {
    Latest,
    Day(NaiveDate),
}

impl ChartDate {
    /// Accepts `latest` or a real calendar date written as `YYYY-MM-DD`.
    pub fn parse(value: &str) -> Result<Self, UriError> {
        if value == "latest" {
            return Ok(ChartDate::Latest);
        }

        let shaped = value.len() == 10
            && value.char_indices().all(|(i, c)| match i {
                4 | 7 => c == '-',
                _ => c.is_ascii_digit(),
            });
        if !shaped {
            return Err(invalid_date(value));
        }

        NaiveDate::parse_from_str(value, "%Y-%m-%d")
            .map(ChartDate::Day)
            .map_err(|_| invalid_date(value))
    }
}

impl fmt::Display for ChartDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartDate::Latest => write!(f, "latest"),
            ChartDate::Day(date) => write!(f, "{}", date.format("%Y-%m-%d")),
        }
    }
}

fn invalid(value: &str, valid: String) -> UriError {
    UriError::ChartParameter {
        value: value.to_string(),
        valid,
    }
}

fn invalid_date(value: &str) -> UriError {
    invalid(value, "'latest', a date (e.g. 2016-01-21)".to_string())
}

/// A validated six-token chart URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartQuery {
    pub metric: Metric,
    pub region: Region,
    pub window: Window,
    pub date: ChartDate,
}

impl ChartQuery {
    /// Parses `spotify:charts:metric:region:window:date`.
    ///
    /// Parameters are checked in URI order and the first invalid one is
    /// reported together with its valid options.
    pub fn parse(uri: &str) -> Result<Self, UriError> {
        let tokens = split_exact(uri, 6)?;
        Ok(ChartQuery {
            metric: Metric::parse(tokens[2])?,
            region: Region::parse(tokens[3])?,
            window: Window::parse(tokens[4])?,
            date: ChartDate::parse(tokens[5])?,
        })
    }

    /// Path of the CSV download relative to the charts endpoint.
    pub fn download_path(&self) -> String {
        format!(
            "{metric}/{region}/{window}/{date}/download",
            metric = self.metric,
            region = self.region,
            window = self.window,
            date = self.date
        )
    }
}
