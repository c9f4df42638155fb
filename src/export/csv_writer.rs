use std::path::Path;

use crate::{errors::ExportError, success, types::TrackRecord, warning};

/// Header row written ahead of the records. Each entry names the
/// [`TrackRecord`] field serialized in that column.
pub const CSV_HEADER: [&str; 10] = [
    "track_name",
    "artist_name",
    "album_name",
    "release_date",
    "duration_ms",
    "duration_display",
    "popularity",
    "spotify_url",
    "track_id",
    "added_at",
];

/// Writes `records` as UTF-8 CSV with a [`CSV_HEADER`] row.
///
/// Fields containing the delimiter, quotes or newlines are quoted. Returns the
/// number of rows written; an empty slice writes nothing and returns `0`.
pub async fn write_csv(records: &[TrackRecord], path: &Path) -> Result<usize, ExportError> {
    if records.is_empty() {
        warning!("No tracks to save");
        return Ok(0);
    }

    let bytes = render_csv(records)?;
    async_fs::write(path, bytes).await?;

    success!(
        "Successfully saved {} tracks to {}",
        records.len(),
        path.display()
    );
    Ok(records.len())
}

fn render_csv(records: &[TrackRecord]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(CSV_HEADER)?;
    for record in records {
        writer.serialize(record)?;
    }

    writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))
}
