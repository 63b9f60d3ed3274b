//! Notification boundary - how the store announces domain events.
//!
//! The store publishes two event kinds to an externally owned bus:
//! `NPS_SUBMITTED` and `FEEDBACK_SUBMITTED`. The bus may not be ready when
//! the store comes up; the store checks [`NotificationBus::is_ready`] before
//! each publish and silently skips (no buffering, no error) while it is not.

mod bus;
mod in_memory;

pub use bus::{Notification, NotificationBus, PublishError};
pub use in_memory::InMemoryBus;
