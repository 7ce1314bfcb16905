//! Storage Error Types

use thiserror::Error;

/// Storage result type alias
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage error variants
#[derive(Debug, Error)]
pub enum StorageError {
    /// Backing store cannot be reached
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Underlying filesystem error
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Store file exists but cannot be decoded
    #[error("storage file is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}
