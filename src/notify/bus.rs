//! Core notification trait and event payloads.

use std::error::Error;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::FeedbackKind;

/// A domain event published by the store.
///
/// Serialized with the external bus's symbolic event names as the tag, so a
/// JSON rendering carries `"event": "NPS_SUBMITTED"` etc.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event")]
pub enum Notification {
    /// An NPS score was recorded. Carries the raw submission and the
    /// post-update aggregate counts.
    #[serde(rename = "NPS_SUBMITTED")]
    NpsSubmitted {
        score: u8,
        context: String,
        feedback: Option<String>,
        promoters: u32,
        passives: u32,
        detractors: u32,
        nps_score: i32,
    },
    /// A feedback item was recorded.
    #[serde(rename = "FEEDBACK_SUBMITTED")]
    FeedbackSubmitted {
        id: String,
        kind: FeedbackKind,
        title: String,
    },
}

impl Notification {
    /// Symbolic event name on the external bus.
    pub fn event_type(&self) -> &'static str {
        match self {
            Notification::NpsSubmitted { .. } => "NPS_SUBMITTED",
            Notification::FeedbackSubmitted { .. } => "FEEDBACK_SUBMITTED",
        }
    }
}

/// Error type for publish operations.
#[derive(Debug)]
pub enum PublishError {
    /// Connection to the bus failed
    ConnectionFailed(String),
    /// Serialization of the event failed
    SerializationFailed(String),
    /// The bus rejected the event
    Rejected(String),
    /// Other error
    Other(Box<dyn Error + Send + Sync>),
}

impl fmt::Display for PublishError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublishError::ConnectionFailed(msg) => write!(f, "Connection failed: {}", msg),
            PublishError::SerializationFailed(msg) => write!(f, "Serialization failed: {}", msg),
            PublishError::Rejected(msg) => write!(f, "Event rejected: {}", msg),
            PublishError::Other(e) => write!(f, "Publish error: {}", e),
        }
    }
}

impl Error for PublishError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            PublishError::Other(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

/// Outbound channel the store announces domain events on.
///
/// Owned and implemented outside the core; the store depends only on this
/// publish/is-ready contract. Implementations might include:
/// - `InMemoryBus` - For testing and single-process scenarios
/// - `LocalEmitterBus` - Callback fan-out within the same process
/// - A bridge to whatever cross-module bus the host application runs
pub trait NotificationBus: Send + Sync {
    /// Whether the channel is accepting publications yet.
    fn is_ready(&self) -> bool;

    /// Publish a single notification to the bus.
    fn publish(&self, notification: Notification) -> Result<(), PublishError>;
}
