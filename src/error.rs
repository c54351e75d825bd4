//! Storage Errors
//!
//! Failures from the durable storage boundary. None of these are fatal:
//! callers log them and keep the in-memory list.

use std::fmt;

/// Common result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage-level errors
#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    /// No `localStorage` on this window (disabled, sandboxed iframe, non-browser)
    Unavailable(String),
    /// The browser refused the write for lack of space
    QuotaExceeded(String),
    /// Any other rejected read or write
    Write(String),
    Serialize(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
            StorageError::QuotaExceeded(msg) => write!(f, "Storage quota exceeded: {}", msg),
            StorageError::Write(msg) => write!(f, "Storage write failed: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialization failed: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::Serialize(err.to_string())
    }
}
