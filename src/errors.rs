//! Error types for each stage of a playlist export.
//!
//! Configuration and authentication errors abort a run. Fetch errors never do:
//! they travel inside [`crate::types::FetchOutcome`] next to the items gathered
//! before the failure.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0} not found in environment variables")]
    Missing(&'static str),
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("token request rejected with status {status}: {body}")]
    Rejected { status: StatusCode, body: String },
    #[error("token request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed token response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("tracks request rejected with status {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("tracks request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed tracks page: {0}")]
    Decode(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error("error getting token: {0}")]
    Auth(#[from] AuthError),
    #[error("cannot create output directory: {0}")]
    OutputDirectory(std::io::Error),
    #[error("cannot save tracks: {0}")]
    Export(#[from] ExportError),
}
