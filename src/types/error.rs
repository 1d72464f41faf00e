//! Error types for sync-instructions

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error types for synchronization runs
#[derive(Debug, Error)]
pub enum SyncError {
    /// Bad `--files` list or other unusable settings
    #[error("Configuration error: {0}")]
    InvalidConfiguration(String),

    /// Working directory does not exist or is not a directory
    #[error("Directory not found: {}", path.display())]
    DirectoryNotFound { path: PathBuf },

    /// Read or write failure on a specific path
    #[error("IO error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SyncError {
    /// Wrap an IO error with the path it happened on
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        SyncError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Process exit code reported for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            SyncError::InvalidConfiguration(_) => 3,
            SyncError::DirectoryNotFound { .. } => 4,
            SyncError::Io { .. } => 5,
        }
    }
}
