#![forbid(unsafe_code)]

pub mod model;
pub mod session;

pub use model::{Question, QuestionError, QuestionRecord};
pub use session::{
    EventKind, SECONDS_PER_QUESTION, SessionEvent, SessionState, SessionStatus,
    UnknownEventError, transition,
};
