use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::errors::FetchError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: u64,
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaylistTracksPage {
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
    pub next: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlaylistItem {
    pub added_at: Option<String>,
    pub track: Option<Track>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Track {
    pub id: Option<String>,
    pub name: Option<String>,
    pub artists: Option<Vec<TrackArtist>>,
    pub album: Option<TrackAlbum>,
    pub duration_ms: Option<u64>,
    pub popularity: Option<u32>,
    pub external_urls: Option<ExternalUrls>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackArtist {
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackAlbum {
    pub name: Option<String>,
    pub release_date: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExternalUrls {
    pub spotify: Option<String>,
}

/// One exported row. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackRecord {
    pub track_name: String,
    pub artist_name: String,
    pub album_name: String,
    pub release_date: String,
    pub duration_ms: u64,
    pub duration_display: String,
    pub popularity: u32,
    pub spotify_url: String,
    pub track_id: String,
    pub added_at: String,
}

/// Items gathered by a paging run and the error that stopped it early, if any.
#[derive(Debug, Default)]
pub struct FetchOutcome {
    pub items: Vec<PlaylistItem>,
    pub error: Option<FetchError>,
}

impl FetchOutcome {
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }
}

#[derive(Debug, Clone)]
pub struct ExtractSummary {
    pub playlist_id: String,
    pub tracks: usize,
    pub files: Vec<PathBuf>,
    pub partial: bool,
}
