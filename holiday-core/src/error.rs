//! Error types for holiday-sync.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while syncing holidays.
#[derive(Error, Debug)]
pub enum HolidayError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid timestamp '{0}', expected YYYY-MM-DDTHH:MM:SS.ffffffZ")]
    Timestamp(String),

    #[error("Calendar API returned {status}: {body}")]
    Fetch { status: u16, body: String },

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Invalid locale code '{0}'")]
    InvalidCode(String),

    #[error("Invalid file name '{0}'")]
    InvalidFileName(String),

    #[error("Locale '{0}' already has a meta.json")]
    AlreadyInitialized(String),
}

/// Result type alias for holiday-sync operations.
pub type HolidayResult<T> = Result<T, HolidayError>;
