//! FeedbackStore - the stateful container behind the feedback widgets.
//!
//! Single authoritative holder of all submitted domain data. Every mutation
//! constructs an entity, appends it, recomputes derived metrics where NPS
//! data changed, persists the full snapshot, and announces the change on the
//! injected notification bus.

mod error;
mod ids;
mod store;

pub use error::StoreError;
pub use ids::IdGenerator;
pub use store::{FeedbackStore, NewFeedback};
