//! In-memory notification bus for tests and single-process embeddings.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use super::bus::{Notification, NotificationBus, PublishError};

/// Bus that records every published notification.
///
/// Clone-friendly (cloning shares the same underlying log and readiness
/// flag). Readiness starts `true` and can be toggled to exercise the store's
/// skip-when-not-ready behavior.
#[derive(Clone)]
pub struct InMemoryBus {
    ready: Arc<AtomicBool>,
    published: Arc<RwLock<Vec<Notification>>>,
}

impl Default for InMemoryBus {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryBus {
    pub fn new() -> Self {
        Self {
            ready: Arc::new(AtomicBool::new(true)),
            published: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Toggle the readiness the store checks before publishing.
    pub fn set_ready(&self, ready: bool) {
        self.ready.store(ready, Ordering::SeqCst);
    }

    /// All notifications published so far, in order.
    pub fn published(&self) -> Vec<Notification> {
        self.published
            .read()
            .map(|log| log.clone())
            .unwrap_or_default()
    }
}

impl NotificationBus for InMemoryBus {
    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    fn publish(&self, notification: Notification) -> Result<(), PublishError> {
        let mut log = self
            .published
            .write()
            .map_err(|_| PublishError::ConnectionFailed("notification log lock poisoned".into()))?;
        log.push(notification);
        Ok(())
    }
}
