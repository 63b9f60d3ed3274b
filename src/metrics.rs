//! Aggregate NPS metrics, recomputed in full from the score history.

use serde::{Deserialize, Serialize};

use crate::domain::{NpsCategory, NpsScore};

/// Direction of the metric over time. Static placeholder: no temporal
/// comparison is performed, so this is always `Stable`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

/// Summary metrics over the full NPS score history.
///
/// `total_responses` always equals `promoters + passives + detractors`, and
/// `nps_score` is in [-100, 100].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NpsMetrics {
    pub total_responses: u32,
    pub promoters: u32,
    pub passives: u32,
    pub detractors: u32,
    pub nps_score: i32,
    pub trend: Trend,
}

impl NpsMetrics {
    /// The all-zero metrics reported before any score has been submitted.
    pub fn zero() -> Self {
        NpsMetrics {
            total_responses: 0,
            promoters: 0,
            passives: 0,
            detractors: 0,
            nps_score: 0,
            trend: Trend::Stable,
        }
    }
}

impl Default for NpsMetrics {
    fn default() -> Self {
        Self::zero()
    }
}

/// Recompute summary metrics from the full score history.
///
/// Counts categories with a full scan (never patched incrementally) and sets
/// `nps_score = round(((promoters - detractors) / total) * 100)`, with
/// half-way values rounded away from zero (`f64::round`). Empty input yields
/// [`NpsMetrics::zero`]. Pure; no side effects.
pub fn aggregate(scores: &[NpsScore]) -> NpsMetrics {
    if scores.is_empty() {
        return NpsMetrics::zero();
    }

    let mut promoters = 0u32;
    let mut passives = 0u32;
    let mut detractors = 0u32;
    for score in scores {
        match score.category {
            NpsCategory::Promoter => promoters += 1,
            NpsCategory::Passive => passives += 1,
            NpsCategory::Detractor => detractors += 1,
        }
    }

    let total = scores.len() as u32;
    let net = (f64::from(promoters) - f64::from(detractors)) / f64::from(total) * 100.0;

    NpsMetrics {
        total_responses: total,
        promoters,
        passives,
        detractors,
        nps_score: net.round() as i32,
        trend: Trend::Stable,
    }
}
