use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::store::{StateError, StateStore};

/// In-memory state store backed by `Arc<RwLock<HashMap>>`.
///
/// Clone-friendly (cloning shares the same underlying storage). The default
/// choice for tests and for sessions that do not need durability.
#[derive(Clone)]
pub struct InMemoryStateStore {
    storage: Arc<RwLock<HashMap<String, String>>>,
}

impl Default for InMemoryStateStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStateStore {
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl StateStore for InMemoryStateStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StateError> {
        let storage = self
            .storage
            .read()
            .map_err(|_| StateError::LockPoisoned("state read"))?;
        Ok(storage.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StateError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StateError::LockPoisoned("state write"))?;
        storage.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<bool, StateError> {
        let mut storage = self
            .storage
            .write()
            .map_err(|_| StateError::LockPoisoned("state write"))?;
        Ok(storage.remove(key).is_some())
    }
}
