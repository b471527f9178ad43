//! Dataset error types
//!
//! Errors that can occur while loading the launch table.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a launch dataset
#[derive(Error, Debug)]
pub enum DatasetError {
    /// Local dataset file could not be read
    #[error("Failed to read dataset file {path:?}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV content could not be parsed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// HTTP request failed (connect, timeout, body)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Remote source answered with a non-success status
    #[error("HTTP status {status} from {url}")]
    HttpStatus { url: String, status: u16 },

    /// Neither the local file nor the remote source could be used
    #[error("No dataset available: local file {local:?} does not exist and remote {remote} is unreachable: {reason}")]
    Unavailable {
        local: PathBuf,
        remote: String,
        reason: String,
    },
}

impl DatasetError {
    /// True for errors caused by the network rather than the data itself
    pub fn is_transport(&self) -> bool {
        matches!(self, DatasetError::Http(_) | DatasetError::HttpStatus { .. })
    }
}

/// Result type alias for dataset operations
pub type DatasetResult<T> = Result<T, DatasetError>;
