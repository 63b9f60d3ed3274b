//! Versioned snapshot blob for the full store state.

use base64::{engine::general_purpose::STANDARD, Engine};
use serde::{Deserialize, Serialize};

use crate::domain::{FeedbackItem, NpsScore, SurveyResponse};
use crate::metrics::NpsMetrics;

use super::store::StateError;

/// Current snapshot schema version. Bump when the layout changes.
pub const SCHEMA_VERSION: u32 = 1;

/// Complete persisted state: every collection plus the derived metrics.
///
/// Written as one blob under the storage key; there is no partial or
/// incremental persistence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreSnapshot {
    pub schema_version: u32,
    pub nps_scores: Vec<NpsScore>,
    pub nps_metrics: NpsMetrics,
    pub feedback_items: Vec<FeedbackItem>,
    pub survey_responses: Vec<SurveyResponse>,
}

impl StoreSnapshot {
    /// Encode as base64 text over the bitcode serialization, suitable for
    /// string-valued key-value storage.
    pub fn encode(&self) -> Result<String, StateError> {
        let bytes = bitcode::serialize(self).map_err(|e| StateError::Codec(e.to_string()))?;
        Ok(STANDARD.encode(bytes))
    }

    /// Decode a blob produced by [`StoreSnapshot::encode`]. Rejects blobs
    /// whose schema version differs from [`SCHEMA_VERSION`] instead of
    /// misreading them.
    pub fn decode(blob: &str) -> Result<Self, StateError> {
        let bytes = STANDARD
            .decode(blob)
            .map_err(|e| StateError::Codec(e.to_string()))?;
        let snapshot: StoreSnapshot =
            bitcode::deserialize(&bytes).map_err(|e| StateError::Codec(e.to_string()))?;
        if snapshot.schema_version != SCHEMA_VERSION {
            return Err(StateError::Codec(format!(
                "unsupported snapshot schema version {} (expected {})",
                snapshot.schema_version, SCHEMA_VERSION
            )));
        }
        Ok(snapshot)
    }
}
