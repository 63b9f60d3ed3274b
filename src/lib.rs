mod domain;
#[cfg(feature = "emitter")]
mod emitter;
mod metrics;
mod notify;
mod persist;
mod store;

pub use domain::{
    categorize, AnswerError, AnswerValue, FeedbackItem, FeedbackKind, FeedbackStatus, NpsCategory,
    NpsScore, QuestionType, ResponseMetadata, Survey, SurveyQuestion, SurveyResponse,
    UnknownFeedbackKind,
};
#[cfg(feature = "emitter")]
pub use emitter::LocalEmitterBus;
pub use metrics::{aggregate, NpsMetrics, Trend};
pub use notify::{InMemoryBus, Notification, NotificationBus, PublishError};
pub use persist::{
    FileStateStore, InMemoryStateStore, StateError, StateStore, StoreSnapshot, SCHEMA_VERSION,
    STORAGE_KEY,
};
pub use store::{FeedbackStore, IdGenerator, NewFeedback, StoreError};

// Re-export the EventEmitter from the event_emitter_rs crate
#[cfg(feature = "emitter")]
pub use event_emitter_rs::EventEmitter;
