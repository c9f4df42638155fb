use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use reqwest::{Client, RequestBuilder, StatusCode};

use crate::{
    errors::FetchError,
    types::{FetchOutcome, PlaylistTracksPage},
    warning,
};

/// Maximum page size the tracks endpoint accepts.
pub const PAGE_LIMIT: u32 = 50;

/// Response projection: exactly the fields the export reads plus the cursor.
pub const TRACK_FIELDS: &str = "items(added_at,track(id,name,artists(name),album(name,release_date),duration_ms,popularity,external_urls)),next";

/// Collects every item of a playlist by following the `next` cursor.
///
/// The first request targets `{api_url}/playlists/{playlist_id}/tracks` with
/// `limit` and `fields` set. Follow-up requests use the server-supplied `next`
/// URL as is, since it already carries offset, limit and projection. Paging
/// stops when `next` is null or missing.
///
/// Nothing is retried. The first failed page (non-200 status, transport error
/// or undecodable body) is logged and ends the loop; the items collected up to
/// that point are kept and the error is returned alongside them.
///
/// # Arguments
///
/// * `client` - HTTP client shared for the whole run
/// * `api_url` - Web API base URL without trailing slash
/// * `playlist_id` - Canonical playlist id
/// * `token` - Bearer access token
///
/// # Progress Indication
///
/// Displays a spinner with the number of items fetched so far. The spinner is
/// cleared on every exit path.
pub async fn get_playlist_tracks(
    client: &Client,
    api_url: &str,
    playlist_id: &str,
    token: &str,
) -> FetchOutcome {
    let mut outcome = FetchOutcome::default();

    let pb = ProgressBar::new_spinner();
    pb.set_message("Fetching playlist tracks...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let first_page = client
        .get(format!("{}/playlists/{}/tracks", api_url, playlist_id))
        .query(&[
            ("limit", PAGE_LIMIT.to_string()),
            ("fields", TRACK_FIELDS.to_string()),
        ]);
    let mut request = Some(first_page);

    while let Some(req) = request.take() {
        match get_page(req.bearer_auth(token)).await {
            Ok(page) => {
                outcome.items.extend(page.items);
                pb.set_message(format!("Fetched {} tracks...", outcome.items.len()));

                request = page
                    .next
                    .filter(|next| !next.is_empty())
                    .map(|next| client.get(next));
            }
            Err(e) => {
                pb.finish_and_clear();
                warning!("Error fetching tracks: {}", e);
                outcome.error = Some(e);
                return outcome;
            }
        }
    }

    pb.finish_and_clear();
    outcome
}

async fn get_page(request: RequestBuilder) -> Result<PlaylistTracksPage, FetchError> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;

    if status != StatusCode::OK {
        return Err(FetchError::Status { status, body });
    }

    Ok(serde_json::from_str(&body)?)
}
