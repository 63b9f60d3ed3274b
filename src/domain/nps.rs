//! NPS scores and the detractor/passive/promoter categorization rule.

use std::time::SystemTime;

use serde::{Deserialize, Serialize};

/// Category a raw 0-10 score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NpsCategory {
    Detractor,
    Passive,
    Promoter,
}

/// Map a raw score to its category: 0-6 detractor, 7-8 passive, 9-10 promoter.
///
/// Total over the valid range; callers are responsible for range-checking
/// (the store rejects scores above 10 before calling this).
pub fn categorize(score: u8) -> NpsCategory {
    match score {
        0..=6 => NpsCategory::Detractor,
        7 | 8 => NpsCategory::Passive,
        _ => NpsCategory::Promoter,
    }
}

/// A single submitted NPS score.
///
/// `category` is fixed at creation time from [`categorize`] and never
/// recomputed, even if the entry is reloaded from a persisted snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NpsScore {
    pub id: String,
    pub user_id: Option<String>,
    pub score: u8,
    pub feedback: Option<String>,
    pub category: NpsCategory,
    pub created_at: SystemTime,
    pub context: Option<String>,
}
