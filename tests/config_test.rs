use std::{collections::HashMap, path::PathBuf};

use spotlist::config::{Config, OutputFormat};
use spotlist::errors::ConfigError;

// Helper function to build a config from a fixed set of values
fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
    let values: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    Config::from_lookup(|key| values.get(key).cloned())
}

const REQUIRED: [(&str, &str); 3] = [
    ("SPOTIFY_CLIENT_ID", "id"),
    ("SPOTIFY_CLIENT_SECRET", "secret"),
    ("SPOTIFY_PLAYLIST_URL", "spotify:playlist:abc"),
];

#[test]
fn test_defaults_applied() {
    let config = config_from(&REQUIRED).unwrap();

    assert_eq!(config.client_id, "id");
    assert_eq!(config.client_secret, "secret");
    assert_eq!(config.playlist_reference, "spotify:playlist:abc");
    assert_eq!(config.output_format, OutputFormat::Both);
    assert_eq!(config.output_directory, PathBuf::from("./output"));
    assert_eq!(config.filename_prefix, "playlist");
    assert_eq!(config.api_url, "https://api.spotify.com/v1");
    assert_eq!(config.token_url, "https://accounts.spotify.com/api/token");
}

#[test]
fn test_missing_required_values() {
    for missing in ["SPOTIFY_CLIENT_ID", "SPOTIFY_CLIENT_SECRET", "SPOTIFY_PLAYLIST_URL"] {
        let pairs: Vec<(&str, &str)> = REQUIRED
            .iter()
            .copied()
            .filter(|(k, _)| *k != missing)
            .collect();

        match config_from(&pairs) {
            Err(ConfigError::Missing(key)) => assert_eq!(key, missing),
            other => panic!("Expected Missing({}), got {:?}", missing, other),
        }
    }
}

#[test]
fn test_empty_value_counts_as_missing() {
    let mut pairs = REQUIRED.to_vec();
    pairs[0] = ("SPOTIFY_CLIENT_ID", "   ");

    assert!(matches!(
        config_from(&pairs),
        Err(ConfigError::Missing("SPOTIFY_CLIENT_ID"))
    ));
}

#[test]
fn test_optional_values_override_defaults() {
    let mut pairs = REQUIRED.to_vec();
    pairs.extend([
        ("OUTPUT_FORMAT", "txt"),
        ("OUTPUT_DIRECTORY", "/tmp/exports"),
        ("FILENAME_PREFIX", "weekly"),
        ("SPOTIFY_API_URL", "http://localhost:9000/v1/"),
    ]);

    let config = config_from(&pairs).unwrap();

    assert_eq!(config.output_format, OutputFormat::Txt);
    assert_eq!(config.output_directory, PathBuf::from("/tmp/exports"));
    assert_eq!(config.filename_prefix, "weekly");
    assert_eq!(config.api_url, "http://localhost:9000/v1");
}

#[test]
fn test_output_format_parsing() {
    assert_eq!("csv".parse::<OutputFormat>(), Ok(OutputFormat::Csv));
    assert_eq!("TXT".parse::<OutputFormat>(), Ok(OutputFormat::Txt));
    assert_eq!(" Both ".parse::<OutputFormat>(), Ok(OutputFormat::Both));
    assert!("json".parse::<OutputFormat>().is_err());

    assert_eq!(OutputFormat::parse_or_default("json"), OutputFormat::Both);
    assert_eq!(OutputFormat::parse_or_default("csv"), OutputFormat::Csv);
}

#[test]
fn test_output_format_selection() {
    assert!(OutputFormat::Csv.includes_csv());
    assert!(!OutputFormat::Csv.includes_txt());
    assert!(OutputFormat::Txt.includes_txt());
    assert!(!OutputFormat::Txt.includes_csv());
    assert!(OutputFormat::Both.includes_csv() && OutputFormat::Both.includes_txt());
}

#[test]
fn test_resolve_prefers_overrides() {
    let overrides: HashMap<&str, String> = HashMap::from([
        ("SPOTIFY_CLIENT_ID", "override-id".to_string()),
        ("SPOTIFY_CLIENT_SECRET", "override-secret".to_string()),
        ("SPOTIFY_PLAYLIST_URL", "override-playlist".to_string()),
        ("FILENAME_PREFIX", "cli".to_string()),
    ]);

    let config = Config::resolve(&overrides).unwrap();

    assert_eq!(config.client_id, "override-id");
    assert_eq!(config.playlist_reference, "override-playlist");
    assert_eq!(config.filename_prefix, "cli");
}
