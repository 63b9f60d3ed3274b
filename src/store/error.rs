use std::fmt;

use crate::domain::UnknownFeedbackKind;
use crate::notify::PublishError;
use crate::persist::StateError;

/// Error type for store mutations.
#[derive(Debug)]
pub enum StoreError {
    /// NPS score outside the 0-10 range.
    InvalidScore(u8),
    /// Feedback submission missing a required field or of unrecognized kind.
    InvalidFeedback(String),
    /// The state snapshot could not be persisted. The in-memory mutation has
    /// already succeeded; this is a degraded-durability warning, not a
    /// rollback.
    Persistence(StateError),
    /// The notification bus rejected the publication. The in-memory mutation
    /// has already succeeded.
    Publish(PublishError),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::InvalidScore(score) => {
                write!(f, "invalid NPS score {} (expected 0-10)", score)
            }
            StoreError::InvalidFeedback(reason) => {
                write!(f, "invalid feedback submission: {}", reason)
            }
            StoreError::Persistence(e) => write!(f, "state persistence failed: {}", e),
            StoreError::Publish(e) => write!(f, "notification publish failed: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Persistence(e) => Some(e),
            StoreError::Publish(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StateError> for StoreError {
    fn from(err: StateError) -> Self {
        StoreError::Persistence(err)
    }
}

impl From<PublishError> for StoreError {
    fn from(err: PublishError) -> Self {
        StoreError::Publish(err)
    }
}

impl From<UnknownFeedbackKind> for StoreError {
    fn from(err: UnknownFeedbackKind) -> Self {
        StoreError::InvalidFeedback(err.to_string())
    }
}
