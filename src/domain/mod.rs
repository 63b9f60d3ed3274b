//! Domain model for the feedback suite: surveys and responses, NPS scores,
//! and free-form feedback items.

mod feedback;
mod nps;
mod survey;

pub use feedback::{FeedbackItem, FeedbackKind, FeedbackStatus, UnknownFeedbackKind};
pub use nps::{categorize, NpsCategory, NpsScore};
pub use survey::{
    AnswerError, AnswerValue, QuestionType, ResponseMetadata, Survey, SurveyQuestion,
    SurveyResponse,
};
