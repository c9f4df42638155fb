use std::fs;

use spotlist::export::{CSV_HEADER, TEXT_BANNER, write_csv, write_text};
use spotlist::types::TrackRecord;
use tempfile::tempdir;

// Helper function to create a test record
fn create_test_record(id: &str, name: &str, artist: &str) -> TrackRecord {
    TrackRecord {
        track_name: name.to_string(),
        artist_name: artist.to_string(),
        album_name: "Album".to_string(),
        release_date: "2020-01-01".to_string(),
        duration_ms: 61_000,
        duration_display: "1:01".to_string(),
        popularity: 55,
        spotify_url: format!("https://open.spotify.com/track/{}", id),
        track_id: id.to_string(),
        added_at: "2024-01-01T00:00:00Z".to_string(),
    }
}

#[tokio::test]
async fn test_write_csv_empty_creates_no_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.csv");

    let written = write_csv(&[], &path).await.unwrap();

    assert_eq!(written, 0);
    assert!(!path.exists());
}

#[tokio::test]
async fn test_write_text_empty_creates_no_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.txt");

    let written = write_text(&[], &path).await.unwrap();

    assert_eq!(written, 0);
    assert!(!path.exists());
}

#[tokio::test]
async fn test_write_csv_header() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tracks.csv");

    write_csv(&[create_test_record("t1", "Song", "Artist")], &path).await.unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let header = contents.lines().next().unwrap();
    assert_eq!(header, CSV_HEADER.join(","));
}

#[tokio::test]
async fn test_write_csv_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tracks.csv");

    let records = vec![
        create_test_record("t1", "Plain", "Alice"),
        create_test_record("t2", "Comma, In Title", "Alice, Bob"),
        create_test_record("t3", "Quote \"Inside\"", "Carol"),
        create_test_record("t4", "Line\nBreak", "Dave"),
        create_test_record("t5", "Ünïcødé ♫", "Zoë"),
    ];

    let written = write_csv(&records, &path).await.unwrap();
    assert_eq!(written, records.len());

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), CSV_HEADER.to_vec());

    let parsed: Vec<TrackRecord> = reader
        .deserialize()
        .collect::<Result<_, csv::Error>>()
        .unwrap();
    assert_eq!(parsed, records);
}

#[tokio::test]
async fn test_write_csv_quotes_special_fields() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tracks.csv");

    write_csv(&[create_test_record("t1", "Hello, World", "A")], &path).await.unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("\"Hello, World\""));
}

#[tokio::test]
async fn test_write_text_layout() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tracks.txt");

    let records = vec![
        create_test_record("t1", "First Song", "Alice"),
        create_test_record("t2", "Second Song", "Bob"),
    ];
    let written = write_text(&records, &path).await.unwrap();
    assert_eq!(written, 2);

    let contents = fs::read_to_string(&path).unwrap();
    let expected = format!(
        "{banner}\n{rule}\n\n\
         \x20 1. First Song\n\
         \x20    Artist: Alice\n\
         \x20    Album: Album\n\
         \x20    Duration: 1:01\n\
         \x20    Release Date: 2020-01-01\n\
         \x20    Spotify URL: https://open.spotify.com/track/t1\n\
         \n\
         \x20 2. Second Song\n\
         \x20    Artist: Bob\n\
         \x20    Album: Album\n\
         \x20    Duration: 1:01\n\
         \x20    Release Date: 2020-01-01\n\
         \x20    Spotify URL: https://open.spotify.com/track/t2\n\
         \n",
        banner = TEXT_BANNER,
        rule = "=".repeat(50),
    );
    assert_eq!(contents, expected);
}
