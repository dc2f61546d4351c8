//! Error types for the companies directory.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Result alias for coordinator operations.
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Coordinator errors - surfaced to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryError {
    /// The record collection has not finished loading.
    #[error("Records are still loading")]
    Loading,

    /// A transition was given an argument outside its domain.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The record source failed. Terminal for the session.
    #[error("Failed to load data: {0}")]
    LoadFailure(String),
}

impl From<SourceError> for DirectoryError {
    fn from(err: SourceError) -> Self {
        DirectoryError::LoadFailure(err.to_string())
    }
}

/// Record source errors.
#[derive(Debug, Error)]
pub enum SourceError {
    /// Reading the payload failed.
    #[error("IO error reading {path:?}: {message}")]
    Io { path: PathBuf, message: String },

    /// The payload was not a valid record collection.
    #[error("Malformed payload: {0}")]
    Parse(String),

    /// The source did not answer in time.
    #[error("Record source timeout after {duration:?}")]
    Timeout { duration: Duration },

    /// The source cannot serve records at all.
    #[error("Record source unavailable: {0}")]
    Unavailable(String),
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Parse(err.to_string())
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config directory found.
    #[error("Config directory not found")]
    NoConfigDir,

    /// IO error.
    #[error("IO error: {0}")]
    Io(String),

    /// Parse or validation error.
    #[error("Parse error: {0}")]
    Parse(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_error_becomes_load_failure() {
        let err: DirectoryError = SourceError::Unavailable("offline".to_string()).into();
        assert_eq!(
            err,
            DirectoryError::LoadFailure("Record source unavailable: offline".to_string())
        );
    }

    #[test]
    fn test_parse_error_from_json() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err = SourceError::from(json_err);
        assert!(err.to_string().starts_with("Malformed payload"));
    }
}
