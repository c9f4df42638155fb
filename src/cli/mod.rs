//! # CLI Module
//!
//! Command implementations behind the `spotlist` binary. The binary parses
//! arguments and builds a [`crate::config::Config`]; the functions here drive
//! the export and turn every failure into console output.
//!
//! ## Commands
//!
//! - [`extract`] - Exports a playlist to CSV and/or text files
//!
//! ## Data Flow
//!
//! ```text
//! playlist reference ──► utils::extract_playlist_id ──► playlist id
//! client credentials ──► spotify::auth ──► token
//! (id, token) ──► spotify::playlist ──► playlist items
//! playlist items ──► utils::normalize_items ──► track records
//! track records ──► export::{write_csv, write_text} ──► files
//! ```
//!
//! ## Error Handling
//!
//! Missing configuration and a rejected token request end the run before any
//! playlist request. A failed page keeps the tracks fetched so far and the
//! export continues with them. An empty result writes no files. In every case
//! the command returns normally after reporting what happened.

mod extract;

pub use extract::extract;
pub use extract::run;
