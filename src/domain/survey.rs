//! Surveys, survey questions, and submitted responses.

use std::collections::HashMap;
use std::fmt;
use std::time::SystemTime;

use serde::{Deserialize, Serialize};

/// Kind of input a survey question collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    Rating,
    Text,
    MultipleChoice,
    Nps,
    Emoji,
}

impl QuestionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionType::Rating => "rating",
            QuestionType::Text => "text",
            QuestionType::MultipleChoice => "multiple_choice",
            QuestionType::Nps => "nps",
            QuestionType::Emoji => "emoji",
        }
    }
}

/// A single question within a survey.
///
/// `options` carries the choices for `multiple_choice` questions and is
/// unused otherwise. Question ids are unique within their survey.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyQuestion {
    pub id: String,
    pub kind: QuestionType,
    pub question: String,
    pub required: bool,
    pub options: Option<Vec<String>>,
    pub min_label: Option<String>,
    pub max_label: Option<String>,
}

/// A survey definition. Immutable once created; there is no edit operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Survey {
    pub id: String,
    pub title: String,
    pub description: String,
    pub questions: Vec<SurveyQuestion>,
    pub created_at: SystemTime,
    pub expires_at: Option<SystemTime>,
    pub is_active: bool,
    pub target_audience: Option<Vec<String>>,
}

/// An answer to a single question: numeric for rating/emoji/nps questions,
/// text for free-form and multiple-choice questions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnswerValue {
    Number(i64),
    Text(String),
}

impl AnswerValue {
    /// Whether this value is the right shape for a question of `kind`.
    pub fn matches(&self, kind: QuestionType) -> bool {
        match kind {
            QuestionType::Rating | QuestionType::Nps | QuestionType::Emoji => {
                matches!(self, AnswerValue::Number(_))
            }
            QuestionType::Text | QuestionType::MultipleChoice => {
                matches!(self, AnswerValue::Text(_))
            }
        }
    }
}

/// Validation error for a survey answer map.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerError {
    /// A required question has no answer.
    MissingRequired { question_id: String },
    /// An answer refers to a question the survey does not contain.
    UnknownQuestion { question_id: String },
    /// The answer value shape does not match the question's declared type.
    WrongKind {
        question_id: String,
        expected: QuestionType,
    },
    /// A multiple-choice answer is not one of the question's options.
    NotAnOption { question_id: String },
}

impl fmt::Display for AnswerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnswerError::MissingRequired { question_id } => {
                write!(f, "required question {} has no answer", question_id)
            }
            AnswerError::UnknownQuestion { question_id } => {
                write!(f, "answer for unknown question {}", question_id)
            }
            AnswerError::WrongKind {
                question_id,
                expected,
            } => write!(
                f,
                "answer for question {} does not match its {} type",
                question_id,
                expected.as_str()
            ),
            AnswerError::NotAnOption { question_id } => {
                write!(f, "answer for question {} is not one of its options", question_id)
            }
        }
    }
}

impl std::error::Error for AnswerError {}

impl Survey {
    /// Look up a question by id.
    pub fn question(&self, id: &str) -> Option<&SurveyQuestion> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Validate an answer map against this survey: every required question
    /// answered, every answer matching its question's declared type, and
    /// multiple-choice answers drawn from the question's options.
    pub fn check_answers(
        &self,
        answers: &HashMap<String, AnswerValue>,
    ) -> Result<(), AnswerError> {
        for question in &self.questions {
            if question.required && !answers.contains_key(&question.id) {
                return Err(AnswerError::MissingRequired {
                    question_id: question.id.clone(),
                });
            }
        }
        for (question_id, value) in answers {
            let question =
                self.question(question_id)
                    .ok_or_else(|| AnswerError::UnknownQuestion {
                        question_id: question_id.clone(),
                    })?;
            if !value.matches(question.kind) {
                return Err(AnswerError::WrongKind {
                    question_id: question_id.clone(),
                    expected: question.kind,
                });
            }
            if let (QuestionType::MultipleChoice, AnswerValue::Text(chosen)) =
                (question.kind, value)
            {
                let known = question
                    .options
                    .as_ref()
                    .map(|options| options.iter().any(|o| o == chosen))
                    .unwrap_or(false);
                if !known {
                    return Err(AnswerError::NotAnOption {
                        question_id: question_id.clone(),
                    });
                }
            }
        }
        Ok(())
    }
}

/// Optional submission context recorded alongside a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseMetadata {
    pub user_agent: Option<String>,
    pub source: Option<String>,
}

/// A completed survey submission. Created once; never mutated or deleted.
///
/// `survey_id` is a weak reference: responses survive their survey and no
/// cascading delete exists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyResponse {
    pub id: String,
    pub survey_id: String,
    pub user_id: Option<String>,
    pub answers: HashMap<String, AnswerValue>,
    pub submitted_at: SystemTime,
    pub metadata: Option<ResponseMetadata>,
}
