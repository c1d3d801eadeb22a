use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors raised while validating a question record.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionError {
    #[error("question text is empty")]
    EmptyText,

    #[error("question has no options")]
    NoOptions,

    #[error("correct option {correct} is out of range for {len} options")]
    CorrectOptionOutOfRange { correct: usize, len: usize },

    #[error("question must award at least one point")]
    ZeroPoints,
}

//
// ─── WIRE RECORD ──────────────────────────────────────────────────────────────
//

/// Serialized shape of a question as served by the question endpoint.
///
/// ```json
/// { "question": "...", "options": ["a", "b"], "correctOption": 1, "points": 10 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionRecord {
    #[serde(alias = "text")]
    pub question: String,
    pub options: Vec<String>,
    pub correct_option: usize,
    pub points: u32,
}

//
// ─── QUESTION ─────────────────────────────────────────────────────────────────
//

/// A validated multiple-choice question.
///
/// The index of an entry in `options` is that answer's identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "QuestionRecord", into = "QuestionRecord")]
pub struct Question {
    text: String,
    options: Vec<String>,
    correct_option: usize,
    points: u32,
}

impl Question {
    /// Build a validated question.
    ///
    /// # Errors
    ///
    /// Returns `QuestionError` if the text is blank, there are no options, the
    /// correct option does not index into `options`, or `points` is zero.
    pub fn new(
        text: impl Into<String>,
        options: Vec<String>,
        correct_option: usize,
        points: u32,
    ) -> Result<Self, QuestionError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(QuestionError::EmptyText);
        }
        if options.is_empty() {
            return Err(QuestionError::NoOptions);
        }
        if correct_option >= options.len() {
            return Err(QuestionError::CorrectOptionOutOfRange {
                correct: correct_option,
                len: options.len(),
            });
        }
        if points == 0 {
            return Err(QuestionError::ZeroPoints);
        }

        Ok(Self {
            text,
            options,
            correct_option,
            points,
        })
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct_option(&self) -> usize {
        self.correct_option
    }

    #[must_use]
    pub fn points(&self) -> u32 {
        self.points
    }

    /// Returns true if `selected` is the correct option.
    #[must_use]
    pub fn is_correct(&self, selected: usize) -> bool {
        selected == self.correct_option
    }
}

impl TryFrom<QuestionRecord> for Question {
    type Error = QuestionError;

    fn try_from(record: QuestionRecord) -> Result<Self, Self::Error> {
        Self::new(
            record.question,
            record.options,
            record.correct_option,
            record.points,
        )
    }
}

impl From<Question> for QuestionRecord {
    fn from(question: Question) -> Self {
        Self {
            question: question.text,
            options: question.options,
            correct_option: question.correct_option,
            points: question.points,
        }
    }
}
