use std::path::Path;

use crate::{errors::ExportError, success, types::TrackRecord, warning};

pub const TEXT_BANNER: &str = "SPOTIFY PLAYLIST TRACKS";

/// Writes `records` as a numbered, human-readable listing.
///
/// Returns the number of records written; an empty slice writes nothing and
/// returns `0`.
pub async fn write_text(records: &[TrackRecord], path: &Path) -> Result<usize, ExportError> {
    if records.is_empty() {
        warning!("No tracks to save");
        return Ok(0);
    }

    async_fs::write(path, render_text(records)).await?;

    success!(
        "Successfully saved {} tracks to {}",
        records.len(),
        path.display()
    );
    Ok(records.len())
}

fn render_text(records: &[TrackRecord]) -> String {
    let mut out = format!("{}\n{}\n\n", TEXT_BANNER, "=".repeat(50));

    for (i, record) in records.iter().enumerate() {
        out.push_str(&format!("{:3}. {}\n", i + 1, record.track_name));
        out.push_str(&format!("     Artist: {}\n", record.artist_name));
        out.push_str(&format!("     Album: {}\n", record.album_name));
        out.push_str(&format!("     Duration: {}\n", record.duration_display));
        out.push_str(&format!("     Release Date: {}\n", record.release_date));
        out.push_str(&format!("     Spotify URL: {}\n", record.spotify_url));
        out.push('\n');
    }
    out
}
