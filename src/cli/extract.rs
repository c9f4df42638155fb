use std::path::{Path, PathBuf};

use crate::{
    config::Config,
    errors::ExtractError,
    error, export, info,
    spotify::SpotifyClient,
    success,
    types::{ExtractSummary, TrackRecord},
    utils, warning,
};

/// Runs an export and reports the result on the console.
///
/// Never fails: errors are printed and the function returns.
pub async fn extract(config: &Config) {
    match run(config).await {
        Ok(summary) if summary.tracks == 0 => warning!("No tracks found or error occurred"),
        Ok(summary) => success!(
            "Exported {} tracks from playlist {} to {} file(s)",
            summary.tracks,
            summary.playlist_id,
            summary.files.len()
        ),
        Err(e) => error!("{}", e),
    }
}

/// Exports the configured playlist.
///
/// Steps, in order: ensure the output directory exists, resolve the playlist
/// id, acquire a token, page through the tracks, normalize them and write the
/// selected formats to `{output_directory}/{filename_prefix}_{playlist_id}`.
///
/// # Returns
///
/// - `Ok(ExtractSummary)` - Also when the fetch stopped early (`partial` is set)
///   or when no tracks were found (`tracks` is `0`, no files written)
/// - `Err(ExtractError::Auth)` - The token request failed; nothing was fetched
/// - `Err(ExtractError::OutputDirectory | ExtractError::Export)` - File system failures
pub async fn run(config: &Config) -> Result<ExtractSummary, ExtractError> {
    ensure_output_directory(&config.output_directory).await?;

    let playlist_id = utils::extract_playlist_id(&config.playlist_reference);
    info!("Extracting tracks from playlist ID: {}", playlist_id);

    let mut client = SpotifyClient::new(config);
    client.authenticate().await?;

    let outcome = client.playlist_tracks(&playlist_id).await?;
    let partial = !outcome.is_complete();
    if partial {
        warning!(
            "Stopped after {} items, continuing with the tracks fetched so far",
            outcome.items.len()
        );
    }

    let records = utils::normalize_items(&outcome.items);
    let mut summary = ExtractSummary {
        playlist_id,
        tracks: records.len(),
        files: Vec::new(),
        partial,
    };

    if records.is_empty() {
        return Ok(summary);
    }

    info!("Found {} tracks", records.len());
    summary.files = write_outputs(config, &summary.playlist_id, &records).await?;
    Ok(summary)
}

async fn ensure_output_directory(dir: &Path) -> Result<(), ExtractError> {
    if dir.is_dir() {
        return Ok(());
    }

    async_fs::create_dir_all(dir)
        .await
        .map_err(ExtractError::OutputDirectory)?;
    info!("Created output directory: {}", dir.display());
    Ok(())
}

async fn write_outputs(
    config: &Config,
    playlist_id: &str,
    records: &[TrackRecord],
) -> Result<Vec<PathBuf>, ExtractError> {
    let base = format!("{}_{}", config.filename_prefix, playlist_id);
    let mut files = Vec::new();

    if config.output_format.includes_csv() {
        let path = config.output_directory.join(format!("{}.csv", base));
        export::write_csv(records, &path).await?;
        files.push(path);
    }

    if config.output_format.includes_txt() {
        let path = config.output_directory.join(format!("{}.txt", base));
        export::write_text(records, &path).await?;
        files.push(path);
    }

    Ok(files)
}
