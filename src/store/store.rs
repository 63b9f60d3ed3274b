//! The feedback store: single owner of all submitted domain data.

use std::collections::HashMap;
use std::time::SystemTime;

use crate::domain::{
    categorize, AnswerValue, FeedbackItem, FeedbackKind, FeedbackStatus, NpsScore, SurveyResponse,
};
use crate::metrics::{aggregate, NpsMetrics};
use crate::notify::{Notification, NotificationBus};
use crate::persist::{StateError, StateStore, StoreSnapshot, SCHEMA_VERSION, STORAGE_KEY};

use super::error::StoreError;
use super::ids::IdGenerator;

/// Context label attached to NPS notifications when the caller supplies none.
const DEFAULT_NPS_CONTEXT: &str = "general";

/// A feedback submission as it arrives from the presentation layer.
#[derive(Debug, Clone)]
pub struct NewFeedback {
    pub kind: FeedbackKind,
    pub title: String,
    pub content: String,
    pub tags: Option<Vec<String>>,
    pub user_id: Option<String>,
}

/// Authoritative in-process holder of all submitted feedback data.
///
/// Constructed explicitly and injected into whatever owns the UI session;
/// there is no global instance. Every mutation runs to completion
/// synchronously: construct entity, append, recompute metrics where NPS data
/// changed, persist the snapshot, announce on the bus. Reads return the state
/// as of the last completed mutation.
///
/// The store is single-owner (methods take `&mut self`), so no internal
/// locking is needed in a single-threaded session. A threaded embedding must
/// put one lock around all five operations to keep `metrics()` equal to
/// `aggregate(nps_scores())` at every observable point.
impl std::fmt::Debug for FeedbackStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FeedbackStore")
            .field("nps_scores", &self.nps_scores)
            .field("nps_metrics", &self.nps_metrics)
            .field("feedback_items", &self.feedback_items)
            .field("survey_responses", &self.survey_responses)
            .field("storage_key", &self.storage_key)
            .finish_non_exhaustive()
    }
}

pub struct FeedbackStore {
    nps_scores: Vec<NpsScore>,
    nps_metrics: NpsMetrics,
    feedback_items: Vec<FeedbackItem>,
    survey_responses: Vec<SurveyResponse>,
    nps_ids: IdGenerator,
    feedback_ids: IdGenerator,
    response_ids: IdGenerator,
    storage: Box<dyn StateStore>,
    storage_key: String,
    bus: Box<dyn NotificationBus>,
}

impl FeedbackStore {
    /// Construct an empty store persisting under [`STORAGE_KEY`].
    pub fn new(storage: Box<dyn StateStore>, bus: Box<dyn NotificationBus>) -> Self {
        Self::with_storage_key(storage, bus, STORAGE_KEY)
    }

    /// Construct an empty store persisting under `storage_key`.
    pub fn with_storage_key(
        storage: Box<dyn StateStore>,
        bus: Box<dyn NotificationBus>,
        storage_key: impl Into<String>,
    ) -> Self {
        Self {
            nps_scores: Vec::new(),
            nps_metrics: NpsMetrics::zero(),
            feedback_items: Vec::new(),
            survey_responses: Vec::new(),
            nps_ids: IdGenerator::new("nps"),
            feedback_ids: IdGenerator::new("fb"),
            response_ids: IdGenerator::new("sr"),
            storage,
            storage_key: storage_key.into(),
            bus,
        }
    }

    /// Construct a store rehydrated from the snapshot under [`STORAGE_KEY`],
    /// or empty when no snapshot exists yet.
    pub fn open(
        storage: Box<dyn StateStore>,
        bus: Box<dyn NotificationBus>,
    ) -> Result<Self, StateError> {
        Self::open_with_key(storage, bus, STORAGE_KEY)
    }

    /// Construct a store rehydrated from the snapshot under `storage_key`.
    ///
    /// Id generators resume past the highest numeric suffix found in the
    /// reloaded collections, so fresh ids never collide with persisted ones.
    pub fn open_with_key(
        storage: Box<dyn StateStore>,
        bus: Box<dyn NotificationBus>,
        storage_key: impl Into<String>,
    ) -> Result<Self, StateError> {
        let mut store = Self::with_storage_key(storage, bus, storage_key);
        if let Some(blob) = store.storage.get_item(&store.storage_key)? {
            let snapshot = StoreSnapshot::decode(&blob)?;
            store.nps_scores = snapshot.nps_scores;
            store.nps_metrics = snapshot.nps_metrics;
            store.feedback_items = snapshot.feedback_items;
            store.survey_responses = snapshot.survey_responses;
            store
                .nps_ids
                .resume_past(store.nps_scores.iter().map(|s| s.id.as_str()));
            store
                .feedback_ids
                .resume_past(store.feedback_items.iter().map(|i| i.id.as_str()));
            store
                .response_ids
                .resume_past(store.survey_responses.iter().map(|r| r.id.as_str()));
        }
        Ok(store)
    }

    /// Record an NPS score, recompute the aggregate metrics, and announce the
    /// submission.
    ///
    /// Fails with [`StoreError::InvalidScore`] when `score` exceeds 10,
    /// before any state changes. A persistence failure is returned after the
    /// in-memory append succeeded and does not suppress the notification.
    pub fn submit_nps(
        &mut self,
        score: u8,
        feedback: Option<String>,
        context: Option<String>,
    ) -> Result<(), StoreError> {
        if score > 10 {
            return Err(StoreError::InvalidScore(score));
        }

        let entry = NpsScore {
            id: self.nps_ids.next_id(),
            user_id: None,
            score,
            feedback: feedback.clone(),
            category: categorize(score),
            created_at: SystemTime::now(),
            context: context.clone(),
        };
        self.nps_scores.push(entry);
        self.nps_metrics = aggregate(&self.nps_scores);

        let persisted = self.persist();
        if self.bus.is_ready() {
            self.bus.publish(Notification::NpsSubmitted {
                score,
                context: context.unwrap_or_else(|| DEFAULT_NPS_CONTEXT.to_string()),
                feedback,
                promoters: self.nps_metrics.promoters,
                passives: self.nps_metrics.passives,
                detractors: self.nps_metrics.detractors,
                nps_score: self.nps_metrics.nps_score,
            })?;
        }
        persisted.map_err(StoreError::Persistence)
    }

    /// Record a feedback item (most recent first) and announce it.
    ///
    /// Fails with [`StoreError::InvalidFeedback`] when title or content is
    /// empty or whitespace-only, before any state changes.
    pub fn submit_feedback(&mut self, item: NewFeedback) -> Result<(), StoreError> {
        if item.title.trim().is_empty() {
            return Err(StoreError::InvalidFeedback("title must not be empty".into()));
        }
        if item.content.trim().is_empty() {
            return Err(StoreError::InvalidFeedback(
                "content must not be empty".into(),
            ));
        }

        let entry = FeedbackItem {
            id: self.feedback_ids.next_id(),
            user_id: item.user_id,
            kind: item.kind,
            title: item.title,
            content: item.content,
            status: FeedbackStatus::New,
            votes: 0,
            created_at: SystemTime::now(),
            tags: item.tags,
        };
        let notification = Notification::FeedbackSubmitted {
            id: entry.id.clone(),
            kind: entry.kind,
            title: entry.title.clone(),
        };
        self.feedback_items.insert(0, entry);

        let persisted = self.persist();
        if self.bus.is_ready() {
            self.bus.publish(notification)?;
        }
        persisted.map_err(StoreError::Persistence)
    }

    /// Record a completed survey response.
    ///
    /// Publishes nothing; survey completions have no bus event.
    pub fn submit_survey_response(
        &mut self,
        survey_id: impl Into<String>,
        answers: HashMap<String, AnswerValue>,
    ) -> Result<(), StoreError> {
        let response = SurveyResponse {
            id: self.response_ids.next_id(),
            survey_id: survey_id.into(),
            user_id: None,
            answers,
            submitted_at: SystemTime::now(),
            metadata: None,
        };
        self.survey_responses.push(response);
        self.persist().map_err(StoreError::Persistence)
    }

    /// Add one vote to the matching feedback item, leaving every other field
    /// and the collection order unchanged.
    ///
    /// Unknown ids are a silent no-op: a stale reference from the UI is
    /// benign.
    pub fn vote_feedback(&mut self, feedback_id: &str) -> Result<(), StoreError> {
        match self
            .feedback_items
            .iter_mut()
            .find(|item| item.id == feedback_id)
        {
            Some(item) => {
                item.votes += 1;
                self.persist().map_err(StoreError::Persistence)
            }
            None => Ok(()),
        }
    }

    /// Current derived metrics, as of the last completed mutation.
    pub fn metrics(&self) -> NpsMetrics {
        self.nps_metrics
    }

    /// Every submitted NPS score, oldest first.
    pub fn nps_scores(&self) -> &[NpsScore] {
        &self.nps_scores
    }

    /// Submitted feedback, most recent first.
    pub fn feedback_items(&self) -> &[FeedbackItem] {
        &self.feedback_items
    }

    /// Every submitted survey response, oldest first.
    pub fn survey_responses(&self) -> &[SurveyResponse] {
        &self.survey_responses
    }

    /// Persist the current snapshot immediately. Intended for session end.
    pub fn flush(&self) -> Result<(), StateError> {
        self.persist()
    }

    fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            schema_version: SCHEMA_VERSION,
            nps_scores: self.nps_scores.clone(),
            nps_metrics: self.nps_metrics,
            feedback_items: self.feedback_items.clone(),
            survey_responses: self.survey_responses.clone(),
        }
    }

    fn persist(&self) -> Result<(), StateError> {
        let blob = self.snapshot().encode()?;
        self.storage.set_item(&self.storage_key, &blob)
    }
}
