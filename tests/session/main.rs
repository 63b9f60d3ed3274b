//! Session lifecycle: rehydration, durability, and degraded persistence.

use std::collections::HashMap;

use feedback_core::{
    AnswerValue, FeedbackKind, FeedbackStore, InMemoryBus, InMemoryStateStore, NewFeedback,
    Notification, StateError, StateStore, StoreError, StoreSnapshot, SCHEMA_VERSION, STORAGE_KEY,
};

fn suggestion(title: &str) -> NewFeedback {
    NewFeedback {
        kind: FeedbackKind::Suggestion,
        title: title.to_string(),
        content: "more of this please".to_string(),
        tags: Some(vec!["ux".to_string()]),
        user_id: None,
    }
}

#[test]
fn reload_reproduces_collections_and_metrics() {
    let storage = InMemoryStateStore::new();

    let (metrics, scores, items, responses) = {
        let mut store = FeedbackStore::new(
            Box::new(storage.clone()),
            Box::new(InMemoryBus::new()),
        );
        for score in [9, 10, 5, 7] {
            store.submit_nps(score, None, Some("dashboard".into())).unwrap();
        }
        store.submit_feedback(suggestion("first")).unwrap();
        store.submit_feedback(suggestion("second")).unwrap();
        store.vote_feedback("fb-1").unwrap();

        let mut answers = HashMap::new();
        answers.insert("q1".to_string(), AnswerValue::Number(4));
        store.submit_survey_response("demo-survey", answers).unwrap();

        (
            store.metrics(),
            store.nps_scores().to_vec(),
            store.feedback_items().to_vec(),
            store.survey_responses().to_vec(),
        )
    };

    let reloaded =
        FeedbackStore::open(Box::new(storage), Box::new(InMemoryBus::new())).unwrap();

    assert_eq!(reloaded.metrics(), metrics);
    assert_eq!(reloaded.nps_scores(), scores.as_slice());
    assert_eq!(reloaded.feedback_items(), items.as_slice());
    assert_eq!(reloaded.survey_responses(), responses.as_slice());
}

#[test]
fn missing_snapshot_opens_an_empty_store() {
    let store = FeedbackStore::open(
        Box::new(InMemoryStateStore::new()),
        Box::new(InMemoryBus::new()),
    )
    .unwrap();

    assert_eq!(store.metrics().total_responses, 0);
    assert!(store.nps_scores().is_empty());
    assert!(store.feedback_items().is_empty());
    assert!(store.survey_responses().is_empty());
}

#[test]
fn ids_resume_past_reloaded_entries() {
    let storage = InMemoryStateStore::new();
    {
        let mut store = FeedbackStore::new(
            Box::new(storage.clone()),
            Box::new(InMemoryBus::new()),
        );
        store.submit_nps(9, None, None).unwrap();
        store.submit_nps(8, None, None).unwrap();
        store.submit_feedback(suggestion("first")).unwrap();
    }

    let mut store =
        FeedbackStore::open(Box::new(storage), Box::new(InMemoryBus::new())).unwrap();
    store.submit_nps(2, None, None).unwrap();
    store.submit_feedback(suggestion("second")).unwrap();

    assert_eq!(store.nps_scores().last().unwrap().id, "nps-3");
    assert_eq!(store.feedback_items()[0].id, "fb-2");
}

#[test]
fn flush_writes_the_snapshot_without_a_mutation() {
    let storage = InMemoryStateStore::new();
    let store = FeedbackStore::new(
        Box::new(storage.clone()),
        Box::new(InMemoryBus::new()),
    );

    assert!(storage.get_item(STORAGE_KEY).unwrap().is_none());
    store.flush().unwrap();
    assert!(storage.get_item(STORAGE_KEY).unwrap().is_some());
}

#[test]
fn corrupt_blob_fails_to_open() {
    let storage = InMemoryStateStore::new();
    storage.set_item(STORAGE_KEY, "definitely not a snapshot").unwrap();

    let err = FeedbackStore::open(Box::new(storage), Box::new(InMemoryBus::new())).unwrap_err();
    assert!(matches!(err, StateError::Codec(_)));
}

#[test]
fn foreign_schema_version_fails_to_open() {
    let storage = InMemoryStateStore::new();
    let snapshot = StoreSnapshot {
        schema_version: SCHEMA_VERSION + 1,
        nps_scores: Vec::new(),
        nps_metrics: Default::default(),
        feedback_items: Vec::new(),
        survey_responses: Vec::new(),
    };
    storage
        .set_item(STORAGE_KEY, &snapshot.encode().unwrap())
        .unwrap();

    let err = FeedbackStore::open(Box::new(storage), Box::new(InMemoryBus::new())).unwrap_err();
    assert!(matches!(err, StateError::Codec(_)));
}

/// Storage that always fails, standing in for an unavailable or full
/// key-value layer.
struct BrokenStorage;

impl StateStore for BrokenStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StateError> {
        Ok(None)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StateError> {
        Err(StateError::Storage("quota exceeded".into()))
    }

    fn remove_item(&self, _key: &str) -> Result<bool, StateError> {
        Err(StateError::Storage("quota exceeded".into()))
    }
}

#[test]
fn persistence_failure_keeps_memory_state_and_still_notifies() {
    let bus = InMemoryBus::new();
    let mut store = FeedbackStore::new(Box::new(BrokenStorage), Box::new(bus.clone()));

    let err = store.submit_nps(9, None, None).unwrap_err();
    assert!(matches!(err, StoreError::Persistence(_)));

    // the append and recompute already happened
    assert_eq!(store.nps_scores().len(), 1);
    assert_eq!(store.metrics().promoters, 1);
    // and the submission was still announced
    assert!(matches!(
        bus.published().as_slice(),
        [Notification::NpsSubmitted { score: 9, .. }]
    ));

    // the store stays usable for the rest of the session
    let err = store.submit_nps(2, None, None).unwrap_err();
    assert!(matches!(err, StoreError::Persistence(_)));
    assert_eq!(store.metrics().total_responses, 2);
}
