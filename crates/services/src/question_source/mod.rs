//! Question sources: where a session gets its questions from.

mod file;
mod http;

use async_trait::async_trait;
use quiz_core::model::{Question, QuestionRecord};
use serde::Deserialize;

use crate::error::QuestionSourceError;

pub use file::FileQuestionSource;
pub use http::HttpQuestionSource;

/// Read-only retrieval of the full, ordered question set.
#[async_trait]
pub trait QuestionSource: Send + Sync {
    /// Fetch every question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionSourceError` on transport, parse, or validation failures,
    /// or when the set is empty.
    async fn fetch_questions(&self) -> Result<Vec<Question>, QuestionSourceError>;
}

/// Fixed in-memory question set.
#[derive(Clone, Debug, Default)]
pub struct StaticQuestionSource {
    questions: Vec<Question>,
}

impl StaticQuestionSource {
    #[must_use]
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }
}

#[async_trait]
impl QuestionSource for StaticQuestionSource {
    async fn fetch_questions(&self) -> Result<Vec<Question>, QuestionSourceError> {
        if self.questions.is_empty() {
            return Err(QuestionSourceError::Empty);
        }
        Ok(self.questions.clone())
    }
}

// Accepts both a bare array and a json-server style `{ "questions": [...] }` document.
#[derive(Deserialize)]
#[serde(untagged)]
enum Payload {
    List(Vec<QuestionRecord>),
    Document { questions: Vec<QuestionRecord> },
}

/// Decode and validate a question payload.
///
/// # Errors
///
/// Returns `QuestionSourceError::Parse` for malformed JSON,
/// `QuestionSourceError::InvalidQuestion` for a record that fails validation, and
/// `QuestionSourceError::Empty` when no questions are present.
pub fn parse_questions(bytes: &[u8]) -> Result<Vec<Question>, QuestionSourceError> {
    let records = match serde_json::from_slice::<Payload>(bytes)? {
        Payload::List(records) | Payload::Document { questions: records } => records,
    };
    if records.is_empty() {
        return Err(QuestionSourceError::Empty);
    }

    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            Question::try_from(record)
                .map_err(|source| QuestionSourceError::InvalidQuestion { index, source })
        })
        .collect()
}
