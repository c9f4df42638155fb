//! Spotify Playlist Export Library
//!
//! This library exports the track listing of a Spotify playlist. It obtains an
//! app token through the client-credentials grant, resolves the playlist id from
//! a URL, URI or bare id, pages through the playlist tracks and writes the
//! normalized records as CSV and/or plain text.
//!
//! # Modules
//!
//! - `cli` - Command implementations driving the export
//! - `config` - Configuration loading from `.env` files and environment variables
//! - `errors` - Typed errors for configuration, authentication, fetching and export
//! - `export` - CSV and text writers
//! - `spotify` - Spotify Web API client (token exchange and playlist paging)
//! - `types` - Data structures and type definitions
//! - `utils` - Identifier resolution, track normalization and formatting helpers
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//!
//! use spotlist::{cli, config};
//!
//! #[tokio::main]
//! async fn main() -> spotlist::Res<()> {
//!     config::load_env().await?;
//!     let config = config::Config::resolve(&HashMap::new())?;
//!     cli::extract(&config).await;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod export;
pub mod spotify;
pub mod types;
pub mod utils;

/// A convenient Result type alias for glue code that may fail.
///
/// Uses a boxed dynamic error trait object so the binary can bubble up any of
/// the typed errors in [`errors`] without naming them. Keeps the `Send + Sync`
/// bounds needed across `.await` points.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
///
/// # Example
///
/// ```
/// info!("Extracting tracks from playlist ID: {}", playlist_id);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Successfully saved {} tracks to {}", count, path.display());
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark.
///
/// The program keeps running; callers decide whether to return early. Every
/// failure of an export run is reported this way and the process still exits
/// normally.
///
/// # Example
///
/// ```
/// error!("SPOTIFY_CLIENT_ID not found in environment variables");
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Used for recoverable issues such as an early end of pagination or an
/// unknown output format.
///
/// # Example
///
/// ```
/// warning!("Invalid OUTPUT_FORMAT: {}. Using 'both' as default.", value);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
