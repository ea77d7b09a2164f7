//! Error types for Hente.

use thiserror::Error;

/// Library-level error type for Hente operations.
#[derive(Error, Debug)]
pub enum HenteError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Playlist listing failed: {0}")]
    Playlist(String),

    #[error("Transcript retrieval failed: {0}")]
    Transcript(String),

    #[error("Transcripts are disabled or unavailable for video {0}")]
    TranscriptsDisabled(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type alias for Hente operations.
pub type Result<T> = std::result::Result<T, HenteError>;
