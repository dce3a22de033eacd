//! # CLI Module
//!
//! Command-line presentation of the retrieval operations. Every command takes
//! one or more URIs and runs them through one shared [`crate::spotify::WebApi`],
//! so a URI repeated on the command line is answered from the result cache.
//!
//! ## Commands
//!
//! - [`albums`] - Album URIs of artists, honouring the album filters
//! - [`artists`] - Artist credits of albums
//! - [`genres`] - Genres of the first artist or the album of tracks
//! - [`charts`] - Track URIs of regional and viral charts
//! - [`cover`] - Writes the large cover art of a track to disk
//! - [`cache_stats`] - Entry counts of the result cache
//!
//! Failures never abort a command: a URI that cannot be resolved is reported
//! and the next one is processed.

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

mod albums;
mod artists;
mod charts;
mod cover;
mod genres;
mod stats;

pub use albums::albums;
pub use artists::artists;
pub use charts::charts;
pub use cover::cover;
pub use genres::genres;
pub use stats::cache_stats;

fn spinner(message: String) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    if let Ok(style) = ProgressStyle::with_template("{spinner:.blue} {msg}") {
        pb.set_style(style.tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"));
    }
    pb
}
