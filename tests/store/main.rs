mod support;

use feedback_core::{
    FeedbackKind, FeedbackStatus, Notification, NpsCategory, StateStore, StoreError, STORAGE_KEY,
};

use support::{bug_report, store};

// --- NPS submission ---

#[test]
fn mixed_scores_aggregate_correctly() {
    let (mut store, _bus, _storage) = store();
    for score in [9, 10, 5, 7] {
        store.submit_nps(score, None, None).unwrap();
    }

    let metrics = store.metrics();
    assert_eq!(metrics.total_responses, 4);
    assert_eq!(metrics.promoters, 2);
    assert_eq!(metrics.passives, 1);
    assert_eq!(metrics.detractors, 1);
    assert_eq!(metrics.nps_score, 25);
}

#[test]
fn all_detractors_score_minus_100() {
    let (mut store, _bus, _storage) = store();
    for score in [0, 1, 2, 3, 4] {
        store.submit_nps(score, None, None).unwrap();
    }
    assert_eq!(store.metrics().nps_score, -100);
    assert_eq!(store.metrics().detractors, 5);
}

#[test]
fn score_entry_carries_its_category() {
    let (mut store, _bus, _storage) = store();
    store.submit_nps(9, Some("great".into()), None).unwrap();

    let scores = store.nps_scores();
    assert_eq!(scores.len(), 1);
    assert_eq!(scores[0].id, "nps-1");
    assert_eq!(scores[0].score, 9);
    assert_eq!(scores[0].category, NpsCategory::Promoter);
    assert_eq!(scores[0].feedback.as_deref(), Some("great"));
}

#[test]
fn out_of_range_score_is_rejected_before_any_change() {
    let (mut store, bus, _storage) = store();
    let err = store.submit_nps(11, None, None).unwrap_err();
    assert!(matches!(err, StoreError::InvalidScore(11)));

    assert!(store.nps_scores().is_empty());
    assert_eq!(store.metrics().total_responses, 0);
    assert!(bus.published().is_empty());
}

#[test]
fn nps_notification_carries_updated_counts() {
    let (mut store, bus, _storage) = store();
    store
        .submit_nps(9, Some("love it".into()), Some("dashboard".into()))
        .unwrap();
    store.submit_nps(3, None, None).unwrap();

    let published = bus.published();
    assert_eq!(published.len(), 2);
    assert_eq!(
        published[0],
        Notification::NpsSubmitted {
            score: 9,
            context: "dashboard".into(),
            feedback: Some("love it".into()),
            promoters: 1,
            passives: 0,
            detractors: 0,
            nps_score: 100,
        }
    );
    // missing context falls back to the generic label
    assert_eq!(
        published[1],
        Notification::NpsSubmitted {
            score: 3,
            context: "general".into(),
            feedback: None,
            promoters: 1,
            passives: 0,
            detractors: 1,
            nps_score: 0,
        }
    );
}

#[test]
fn not_ready_bus_is_skipped_silently() {
    let (mut store, bus, _storage) = store();
    bus.set_ready(false);

    store.submit_nps(10, None, None).unwrap();
    store.submit_feedback(bug_report("X", "Y")).unwrap();

    assert!(bus.published().is_empty());
    // state still moved
    assert_eq!(store.metrics().total_responses, 1);
    assert_eq!(store.feedback_items().len(), 1);

    // nothing is replayed once the bus comes up
    bus.set_ready(true);
    assert!(bus.published().is_empty());
}

#[test]
fn reads_are_idempotent_between_mutations() {
    let (mut store, _bus, _storage) = store();
    store.submit_nps(8, None, None).unwrap();

    assert_eq!(store.metrics(), store.metrics());
    assert_eq!(store.feedback_items(), store.feedback_items());
}

// --- Feedback submission ---

#[test]
fn feedback_is_prepended_most_recent_first() {
    let (mut store, bus, _storage) = store();
    store.submit_feedback(bug_report("first", "a")).unwrap();
    store.submit_feedback(bug_report("second", "b")).unwrap();

    let items = store.feedback_items();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "second");
    assert_eq!(items[1].title, "first");
    assert_eq!(items[0].status, FeedbackStatus::New);
    assert_eq!(items[0].votes, 0);

    let published = bus.published();
    assert_eq!(
        published[0],
        Notification::FeedbackSubmitted {
            id: "fb-1".into(),
            kind: FeedbackKind::Bug,
            title: "first".into(),
        }
    );
}

#[test]
fn empty_title_is_rejected_and_nothing_is_published() {
    let (mut store, bus, _storage) = store();
    let err = store.submit_feedback(bug_report("", "content")).unwrap_err();
    assert!(matches!(err, StoreError::InvalidFeedback(_)));

    assert!(store.feedback_items().is_empty());
    assert!(bus.published().is_empty());
}

#[test]
fn whitespace_only_content_is_rejected() {
    let (mut store, _bus, _storage) = store();
    let err = store.submit_feedback(bug_report("title", "   ")).unwrap_err();
    assert!(matches!(err, StoreError::InvalidFeedback(_)));
    assert!(store.feedback_items().is_empty());
}

#[test]
fn unrecognized_kind_string_maps_to_invalid_feedback() {
    let err: StoreError = "complaint".parse::<FeedbackKind>().unwrap_err().into();
    assert!(matches!(err, StoreError::InvalidFeedback(_)));
}

// --- Voting ---

#[test]
fn vote_twice_increments_votes_only() {
    let (mut store, _bus, _storage) = store();
    store.submit_feedback(bug_report("X", "Y")).unwrap();
    let id = store.feedback_items()[0].id.clone();

    store.vote_feedback(&id).unwrap();
    store.vote_feedback(&id).unwrap();

    let item = &store.feedback_items()[0];
    assert_eq!(item.votes, 2);
    assert_eq!(item.status, FeedbackStatus::New);
    assert_eq!(item.title, "X");
}

#[test]
fn vote_on_unknown_id_is_a_silent_noop() {
    let (mut store, bus, _storage) = store();
    store.submit_feedback(bug_report("X", "Y")).unwrap();
    let before = store.feedback_items().to_vec();

    store.vote_feedback("nonexistent-id").unwrap();

    assert_eq!(store.feedback_items(), before.as_slice());
    assert_eq!(bus.published().len(), 1);
}

#[test]
fn vote_preserves_collection_order() {
    let (mut store, _bus, _storage) = store();
    store.submit_feedback(bug_report("first", "a")).unwrap();
    store.submit_feedback(bug_report("second", "b")).unwrap();
    let id = store.feedback_items()[1].id.clone();

    store.vote_feedback(&id).unwrap();

    let items = store.feedback_items();
    assert_eq!(items[0].title, "second");
    assert_eq!(items[1].title, "first");
    assert_eq!(items[1].votes, 1);
}

// --- Survey responses ---

#[test]
fn survey_response_is_recorded_without_notification() {
    use feedback_core::AnswerValue;
    use std::collections::HashMap;

    let (mut store, bus, _storage) = store();
    let mut answers = HashMap::new();
    answers.insert("q1".to_string(), AnswerValue::Number(5));
    answers.insert("q2".to_string(), AnswerValue::Text("Karaoke".to_string()));

    store.submit_survey_response("demo-survey", answers).unwrap();

    let responses = store.survey_responses();
    assert_eq!(responses.len(), 1);
    assert_eq!(responses[0].id, "sr-1");
    assert_eq!(responses[0].survey_id, "demo-survey");
    assert!(bus.published().is_empty());
}

// --- Persistence side effects ---

#[test]
fn every_mutation_persists_a_snapshot() {
    let (mut store, _bus, storage) = store();
    assert!(storage.get_item(STORAGE_KEY).unwrap().is_none());

    store.submit_nps(9, None, None).unwrap();
    let first = storage.get_item(STORAGE_KEY).unwrap().unwrap();

    store.submit_feedback(bug_report("X", "Y")).unwrap();
    let second = storage.get_item(STORAGE_KEY).unwrap().unwrap();
    assert_ne!(first, second);
}
