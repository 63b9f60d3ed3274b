use feedback_core::{FeedbackKind, FeedbackStore, InMemoryBus, InMemoryStateStore, NewFeedback};

/// A fresh store plus handles to its injected bus and storage.
pub fn store() -> (FeedbackStore, InMemoryBus, InMemoryStateStore) {
    let storage = InMemoryStateStore::new();
    let bus = InMemoryBus::new();
    let store = FeedbackStore::new(Box::new(storage.clone()), Box::new(bus.clone()));
    (store, bus, storage)
}

pub fn bug_report(title: &str, content: &str) -> NewFeedback {
    NewFeedback {
        kind: FeedbackKind::Bug,
        title: title.to_string(),
        content: content.to_string(),
        tags: None,
        user_id: None,
    }
}
