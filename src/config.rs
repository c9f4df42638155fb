//! Configuration management for the playlist exporter.
//!
//! Values come from three places, highest priority first:
//! 1. Command-line overrides passed to [`Config::resolve`]
//! 2. Environment variables
//! 3. `.env` files (working directory, then the local data directory)
//!
//! Everything is read once into a [`Config`] that the export run receives
//! explicitly; nothing reads the environment after that.

use std::{collections::HashMap, env, fmt, path::PathBuf, str::FromStr};

use crate::{errors::ConfigError, warning};

pub const SPOTIFY_CLIENT_ID: &str = "SPOTIFY_CLIENT_ID";
pub const SPOTIFY_CLIENT_SECRET: &str = "SPOTIFY_CLIENT_SECRET";
pub const SPOTIFY_PLAYLIST_URL: &str = "SPOTIFY_PLAYLIST_URL";
pub const OUTPUT_FORMAT: &str = "OUTPUT_FORMAT";
pub const OUTPUT_DIRECTORY: &str = "OUTPUT_DIRECTORY";
pub const FILENAME_PREFIX: &str = "FILENAME_PREFIX";
pub const SPOTIFY_API_URL: &str = "SPOTIFY_API_URL";
pub const SPOTIFY_API_TOKEN_URL: &str = "SPOTIFY_API_TOKEN_URL";

const DEFAULT_OUTPUT_DIRECTORY: &str = "./output";
const DEFAULT_FILENAME_PREFIX: &str = "playlist";
const DEFAULT_API_URL: &str = "https://api.spotify.com/v1";
const DEFAULT_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";

/// Loads environment variables from `.env` files.
///
/// The working directory is checked first, then `spotlist/.env` in the
/// platform-specific local data directory:
/// - Linux: `~/.local/share/spotlist/.env`
/// - macOS: `~/Library/Application Support/spotlist/.env`
/// - Windows: `%LOCALAPPDATA%/spotlist/.env`
///
/// Variables already present in the environment are never overridden, and a
/// missing file is not an error.
///
/// # Errors
///
/// Returns an error if the local data directory cannot be created or an
/// existing `.env` file cannot be parsed.
pub async fn load_env() -> Result<(), String> {
    match dotenv::dotenv() {
        Ok(_) => {}
        Err(e) if e.not_found() => {}
        Err(e) => return Err(e.to_string()),
    }

    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("spotlist/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    Csv,
    Txt,
    #[default]
    Both,
}

impl OutputFormat {
    pub fn includes_csv(self) -> bool {
        matches!(self, OutputFormat::Csv | OutputFormat::Both)
    }

    pub fn includes_txt(self) -> bool {
        matches!(self, OutputFormat::Txt | OutputFormat::Both)
    }

    /// Parses a format selector, falling back to [`OutputFormat::Both`] with a
    /// warning for anything unknown.
    pub fn parse_or_default(value: &str) -> Self {
        value.parse().unwrap_or_else(|_| {
            warning!("Invalid OUTPUT_FORMAT: {}. Using 'both' as default.", value);
            OutputFormat::Both
        })
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "txt" => Ok(OutputFormat::Txt),
            "both" => Ok(OutputFormat::Both),
            other => Err(format!("unknown output format '{}'", other)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            OutputFormat::Csv => "csv",
            OutputFormat::Txt => "txt",
            OutputFormat::Both => "both",
        };
        write!(f, "{}", s)
    }
}

/// Everything an export run needs.
#[derive(Debug, Clone)]
pub struct Config {
    pub client_id: String,
    pub client_secret: String,
    pub playlist_reference: String,
    pub output_format: OutputFormat,
    pub output_directory: PathBuf,
    pub filename_prefix: String,
    pub api_url: String,
    pub token_url: String,
}

impl Config {
    /// Builds the configuration from the environment, letting `overrides`
    /// (keyed by environment variable name) take precedence.
    pub fn resolve(overrides: &HashMap<&str, String>) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| {
            overrides
                .get(key)
                .cloned()
                .or_else(|| env::var(key).ok())
        })
    }

    /// Builds the configuration from an arbitrary key lookup. Empty values
    /// count as missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));

        let client_id = required(SPOTIFY_CLIENT_ID)?;
        let client_secret = required(SPOTIFY_CLIENT_SECRET)?;
        let playlist_reference = required(SPOTIFY_PLAYLIST_URL)?;

        let output_format = get(OUTPUT_FORMAT)
            .map(|v| OutputFormat::parse_or_default(&v))
            .unwrap_or_default();

        Ok(Config {
            client_id,
            client_secret,
            playlist_reference,
            output_format,
            output_directory: PathBuf::from(
                get(OUTPUT_DIRECTORY).unwrap_or_else(|| DEFAULT_OUTPUT_DIRECTORY.to_string()),
            ),
            filename_prefix: get(FILENAME_PREFIX)
                .unwrap_or_else(|| DEFAULT_FILENAME_PREFIX.to_string()),
            api_url: get(SPOTIFY_API_URL)
                .unwrap_or_else(|| DEFAULT_API_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            token_url: get(SPOTIFY_API_TOKEN_URL).unwrap_or_else(|| DEFAULT_TOKEN_URL.to_string()),
        })
    }
}
