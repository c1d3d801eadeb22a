#![forbid(unsafe_code)]

pub mod app_services;
pub mod config;
pub mod error;
pub mod question_source;
pub mod sessions;
pub mod timer;

pub use sessions as session;

pub use app_services::AppServices;
pub use config::{QuestionOrigin, QuizConfig};
pub use error::{AppServicesError, ConfigError, QuestionSourceError, SessionLoopError};
pub use question_source::{
    FileQuestionSource, HttpQuestionSource, QuestionSource, StaticQuestionSource,
    parse_questions,
};
pub use sessions::{SessionHandle, SessionLoopService};
pub use timer::{TimerDriver, TimerTick};
