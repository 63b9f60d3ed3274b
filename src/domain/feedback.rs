//! Free-form feedback items.

use std::fmt;
use std::str::FromStr;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

/// The four recognized kinds of feedback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKind {
    Suggestion,
    Bug,
    Praise,
    Question,
}

impl FeedbackKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedbackKind::Suggestion => "suggestion",
            FeedbackKind::Bug => "bug",
            FeedbackKind::Praise => "praise",
            FeedbackKind::Question => "question",
        }
    }
}

/// Parse error for [`FeedbackKind`]; carries the unrecognized input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFeedbackKind(pub String);

impl fmt::Display for UnknownFeedbackKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unrecognized feedback kind: {:?}", self.0)
    }
}

impl std::error::Error for UnknownFeedbackKind {}

impl FromStr for FeedbackKind {
    type Err = UnknownFeedbackKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "suggestion" => Ok(FeedbackKind::Suggestion),
            "bug" => Ok(FeedbackKind::Bug),
            "praise" => Ok(FeedbackKind::Praise),
            "question" => Ok(FeedbackKind::Question),
            other => Err(UnknownFeedbackKind(other.to_string())),
        }
    }
}

/// Review status of a feedback item. New submissions start at `New`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackStatus {
    New,
    Reviewed,
    InProgress,
    Resolved,
    Closed,
}

/// A submitted feedback item.
///
/// Only the vote operation mutates an item after creation, and it touches
/// `votes` alone. There is no delete operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackItem {
    pub id: String,
    pub user_id: Option<String>,
    pub kind: FeedbackKind,
    pub title: String,
    pub content: String,
    pub status: FeedbackStatus,
    pub votes: u32,
    pub created_at: SystemTime,
    pub tags: Option<Vec<String>>,
}
