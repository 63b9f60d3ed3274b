//! File-backed state store: one file per key in a directory.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use super::store::{StateError, StateStore};

/// Durable key-value store writing each key to `<dir>/<key>.blob`.
///
/// Keys are limited to `[A-Za-z0-9._-]` so the mapping to file names stays
/// trivial; anything else is a storage error.
pub struct FileStateStore {
    dir: PathBuf,
}

impl FileStateStore {
    /// Open a store rooted at `dir`, creating the directory if needed.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StateError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StateError::Storage(e.to_string()))?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StateError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'));
        if !valid {
            return Err(StateError::Storage(format!("invalid storage key: {:?}", key)));
        }
        Ok(self.dir.join(format!("{}.blob", key)))
    }
}

impl StateStore for FileStateStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StateError> {
        match fs::read_to_string(self.path_for(key)?) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StateError::Storage(e.to_string())),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StateError> {
        fs::write(self.path_for(key)?, value).map_err(|e| StateError::Storage(e.to_string()))
    }

    fn remove_item(&self, key: &str) -> Result<bool, StateError> {
        match fs::remove_file(self.path_for(key)?) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StateError::Storage(e.to_string())),
        }
    }
}
