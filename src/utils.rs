use base64::{Engine, engine::general_purpose::STANDARD};
use url::Url;

use crate::types::{PlaylistItem, TrackRecord};

const WEB_DOMAIN_MARKER: &str = "spotify.com";
const URI_MARKER: &str = "spotify:playlist:";
const MISSING: &str = "N/A";

pub fn basic_auth_header(client_id: &str, client_secret: &str) -> String {
    let credentials = format!("{}:{}", client_id, client_secret);
    format!("Basic {}", STANDARD.encode(credentials))
}

/// Resolves a playlist URL, `spotify:playlist:` URI or bare id into the id.
pub fn extract_playlist_id(reference: &str) -> String {
    if reference.contains(WEB_DOMAIN_MARKER) {
        return last_path_segment(reference);
    }

    if reference.contains(URI_MARKER) {
        return reference.rsplit(':').next().unwrap_or(reference).to_string();
    }

    reference.to_string()
}

fn last_path_segment(reference: &str) -> String {
    if let Ok(url) = Url::parse(reference) {
        if let Some(segment) = url
            .path_segments()
            .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        {
            return segment.to_string();
        }
    }

    // no scheme, e.g. "open.spotify.com/playlist/<id>?si=..."
    let path = reference
        .split(['?', '#'])
        .next()
        .unwrap_or(reference)
        .trim_end_matches('/');
    path.rsplit('/').next().unwrap_or(path).to_string()
}

pub fn format_duration(milliseconds: u64) -> String {
    let seconds = milliseconds / 1000;
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Maps a playlist item onto the export schema. Items whose track is gone
/// from the catalog yield `None`.
pub fn normalize_item(item: &PlaylistItem) -> Option<TrackRecord> {
    let track = item.track.as_ref()?;
    let album = track.album.as_ref();
    let duration_ms = track.duration_ms.unwrap_or(0);

    Some(TrackRecord {
        track_name: or_missing(track.name.as_deref()),
        artist_name: track
            .artists
            .iter()
            .flatten()
            .filter_map(|a| a.name.as_deref())
            .collect::<Vec<_>>()
            .join(", "),
        album_name: or_missing(album.and_then(|a| a.name.as_deref())),
        release_date: or_missing(album.and_then(|a| a.release_date.as_deref())),
        duration_ms,
        duration_display: format_duration(duration_ms),
        popularity: track.popularity.unwrap_or(0),
        spotify_url: or_missing(
            track
                .external_urls
                .as_ref()
                .and_then(|u| u.spotify.as_deref()),
        ),
        track_id: or_missing(track.id.as_deref()),
        added_at: or_missing(item.added_at.as_deref()),
    })
}

pub fn normalize_items(items: &[PlaylistItem]) -> Vec<TrackRecord> {
    items.iter().filter_map(normalize_item).collect()
}

fn or_missing(value: Option<&str>) -> String {
    value.unwrap_or(MISSING).to_string()
}
