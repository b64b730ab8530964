//! Error types for the backup run.

use std::path::PathBuf;
use thiserror::Error;

/// Backup errors.
#[derive(Debug, Error)]
pub enum BackupError {
    #[error("fetch failed: {0}")]
    Store(#[from] recovery_store_client::StoreError),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl BackupError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        BackupError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for backup operations.
pub type BackupResult<T> = Result<T, BackupError>;
