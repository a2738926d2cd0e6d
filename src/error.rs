//! Error types for the multicat text aggregation tool.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while discovering, reading, or delivering text files
#[derive(Debug, Error)]
pub enum MulticatError {
    /// Walk root is missing or not a directory. Fatal for the run.
    #[error("Specified path is invalid or not a directory: {}", .0.display())]
    InvalidRoot(PathBuf),

    /// A single file could not be read or decoded. Recovered by the caller.
    #[error("Error reading file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<config::ConfigError> for MulticatError {
    fn from(err: config::ConfigError) -> Self {
        MulticatError::ConfigError(err.to_string())
    }
}
