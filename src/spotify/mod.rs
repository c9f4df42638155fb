//! # Spotify Integration Module
//!
//! HTTP layer between the exporter and the Spotify Web API. It covers the two
//! endpoints an export needs:
//!
//! - `POST /api/token` - client-credentials token exchange ([`auth`])
//! - `GET /playlists/{id}/tracks` - cursor-paged track listing ([`playlist`])
//!
//! ## Architecture
//!
//! ```text
//! CLI Layer (extract command)
//!          ↓
//! SpotifyClient (token held for the whole run)
//!     ├── Authentication (client credentials)
//!     └── Playlist paging (fields projection, `next` cursor)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## Authentication
//!
//! The client-credentials grant gives an app token without any user login.
//! The token is requested once per run, kept in memory only and sent as a
//! bearer token on every page request.
//!
//! ## Pagination
//!
//! The first request asks for at most 50 items and projects the response
//! down to the fields the export uses. Every page carries a `next` URL that
//! already holds the follow-up query; it is requested verbatim until the
//! server answers with `next = null`.
//!
//! ## Error Handling
//!
//! Nothing is retried. A rejected token request is an [`crate::errors::AuthError`]
//! and ends the run. A failed page ends the paging loop; the items gathered so
//! far are returned together with the [`crate::errors::FetchError`] in a
//! [`crate::types::FetchOutcome`].
//!
//! ## Usage
//!
//! ```rust
//! let mut client = SpotifyClient::new(&config);
//! client.authenticate().await?;
//! let outcome = client.playlist_tracks(&playlist_id).await?;
//! ```

pub mod auth;
mod client;
pub mod playlist;

pub use client::SpotifyClient;
