//! Storage Errors

use std::fmt;

/// Why a storage read or write did not go through
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    /// The browser exposes no `localStorage` (disabled, sandboxed, not a browser)
    Unavailable,
    /// Value could not be encoded as JSON
    Serialize(String),
    /// Stored text is not valid JSON for the requested type
    Deserialize(String),
    /// The storage API threw (quota exceeded, security error)
    Js(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable => write!(f, "localStorage is unavailable"),
            StorageError::Serialize(msg) => write!(f, "serialize failed: {}", msg),
            StorageError::Deserialize(msg) => write!(f, "deserialize failed: {}", msg),
            StorageError::Js(msg) => write!(f, "storage call failed: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}
