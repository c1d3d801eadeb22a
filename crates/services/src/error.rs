//! Shared error types for the services crate.

use std::path::PathBuf;

use quiz_core::model::QuestionError;
use quiz_core::session::{EventKind, UnknownEventError};
use thiserror::Error;

/// Errors emitted by a `QuestionSource`.
///
/// Any of these ends the session in `Error` status; nothing is retried.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionSourceError {
    #[error("question request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed question payload: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("question {index} is invalid: {source}")]
    InvalidQuestion {
        index: usize,
        #[source]
        source: QuestionError,
    },
    #[error("question source returned no questions")]
    Empty,
}

/// Errors emitted by `SessionHandle`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SessionLoopError {
    #[error("session loop is no longer running")]
    Closed,
    #[error("{kind} needs a payload and cannot be submitted by name alone")]
    MissingPayload { kind: EventKind },
    #[error(transparent)]
    UnknownEvent(#[from] UnknownEventError),
}

/// Errors raised while reading `QuizConfig` from the environment.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid {var} value {raw:?}: {source}")]
    InvalidUrl {
        var: &'static str,
        raw: String,
        #[source]
        source: url::ParseError,
    },
    #[error("invalid {var} value {raw:?}: expected a positive integer")]
    InvalidNumber { var: &'static str, raw: String },
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    QuestionSource(#[from] QuestionSourceError),
}
