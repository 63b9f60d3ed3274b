//! Key-value persistence contract for the state blob.

use std::fmt;

/// Well-known key the feedback state blob is persisted under.
pub const STORAGE_KEY: &str = "newcool-feedback-storage";

/// Error type for persistence operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    LockPoisoned(&'static str),
    /// The underlying storage failed (unavailable, quota, I/O).
    Storage(String),
    /// The blob could not be encoded or decoded.
    Codec(String),
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::LockPoisoned(operation) => {
                write!(f, "state store lock poisoned during {}", operation)
            }
            StateError::Storage(msg) => write!(f, "state storage error: {}", msg),
            StateError::Codec(msg) => write!(f, "state codec error: {}", msg),
        }
    }
}

impl std::error::Error for StateError {}

/// String-valued key-value storage, the shape of a browser's local storage.
///
/// Values are opaque here; [`super::StoreSnapshot`] decides the encoding.
pub trait StateStore: Send + Sync {
    /// Read the value under `key`. Returns None if absent.
    fn get_item(&self, key: &str) -> Result<Option<String>, StateError>;

    /// Write (or overwrite) the value under `key`.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StateError>;

    /// Remove the value under `key`. Returns true if one existed.
    fn remove_item(&self, key: &str) -> Result<bool, StateError>;
}
