//! Storage-specific error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing a collection file.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading, writing or renaming the collection file failed.
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The collection file does not hold a valid JSON array of records.
    #[error("Corrupt collection file '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Serializing the collection before writing it back failed.
    #[error("Failed to serialize collection: {0}")]
    Serialize(#[source] serde_json::Error),
}

impl StorageError {
    /// Create an I/O error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a parse error for the given path.
    pub fn parse(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Parse {
            path: path.into(),
            source,
        }
    }
}
