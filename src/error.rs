use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("Archive not found: {0:?}")]
    NotFound(PathBuf),

    #[error("Corrupt archive {path:?}: {reason}")]
    CorruptArchive { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ScanError>;
