//! Spotify Web API enrichment layer for a track ripping pipeline.
//!
//! This library resolves album lists, artist credits, genres, regional charts
//! and high-resolution cover art for tracks being ripped. Every lookup goes
//! through a URI-addressed result cache and a request executor that obtains
//! (and repairs) its bearer credential lazily.
//!
//! # Modules
//!
//! - `cli` - Command-line presentation of the retrieval operations
//! - `config` - Settings loaded from environment variables and `.env` files
//! - `management` - Credential session and per-resource result cache
//! - `spotify` - Request executor and the resource retrieval operations
//! - `types` - Payload structures and result records
//! - `uri` - Parsing and validation of colon-delimited Spotify URIs
//! - `utils` - Small parsing helpers shared by the retrieval operations
//!
//! # Example
//!
//! ```
//! use spotrip::{config::Settings, spotify::WebApi};
//!
//! #[tokio::main]
//! async fn main() -> spotrip::Res<()> {
//!     let mut api = WebApi::new(Settings::from_env())?;
//!     let albums = api.get_albums_with_filter("spotify:artist:4NHQUGzhtTLFvgF5SZesLK").await;
//!     println!("{} albums", albums.len());
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod management;
pub mod spotify;
pub mod types;
pub mod uri;
pub mod utils;

/// Result alias for the configuration and CLI plumbing.
///
/// The retrieval operations never return errors (they degrade to `None` or
/// an empty list); this alias covers the fallible setup around them.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Status line with a blue `o`, for progress such as outgoing requests.
///
/// All status macros write to stderr so stdout only carries results and can
/// be piped.
///
/// ```
/// info!("Attempting to retrieve {} from {}", "albums", "api.spotify.com");
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Status line with a green `✓`.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Status line with a yellow `!` for anything that degrades a result:
/// rejected input, non-200 responses, undecodable payloads.
///
/// ```
/// warning!("URL returned non-200 HTTP code: {}", 503);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}

/// Status line with a red `!`, then exits with code 1.
///
/// Only the binary uses this; library code never terminates the process.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}
