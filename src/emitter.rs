//! Local callback bus backed by `event_emitter_rs`.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use event_emitter_rs::EventEmitter;

use crate::notify::{Notification, NotificationBus, PublishError};

/// In-process notification bus that fires [`EventEmitter`] callbacks.
///
/// Listeners receive the notification payload as a JSON string under the
/// event-type name (`NPS_SUBMITTED` / `FEEDBACK_SUBMITTED`), the same shape
/// the external bus contract uses. Readiness starts `true`; hosts that bring
/// their bus up late can construct the store first and flip readiness once
/// listeners are attached.
pub struct LocalEmitterBus {
    emitter: Mutex<EventEmitter>,
    ready: AtomicBool,
}

impl Default for LocalEmitterBus {
    fn default() -> Self {
        Self::new()
    }
}

impl LocalEmitterBus {
    pub fn new() -> Self {
        Self {
            emitter: Mutex::new(EventEmitter::new()),
            ready: AtomicBool::new(true),
        }
    }

    /// Toggle the readiness the store checks before publishing.
    pub fn set_ready(&self, ready: bool) {
        self.ready.store(ready, Ordering::SeqCst);
    }

    /// Register a listener for an event type (`"NPS_SUBMITTED"` etc.).
    /// The listener receives the JSON payload text.
    pub fn on<F>(&self, event: &str, listener: F)
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        if let Ok(mut emitter) = self.emitter.lock() {
            emitter.on(event, listener);
        }
    }
}

impl NotificationBus for LocalEmitterBus {
    fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    fn publish(&self, notification: Notification) -> Result<(), PublishError> {
        let payload = serde_json::to_string(&notification)
            .map_err(|e| PublishError::SerializationFailed(e.to_string()))?;
        let mut emitter = self
            .emitter
            .lock()
            .map_err(|_| PublishError::ConnectionFailed("emitter lock poisoned".into()))?;
        emitter.emit(notification.event_type(), payload);
        Ok(())
    }
}
