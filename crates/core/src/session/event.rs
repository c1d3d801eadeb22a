use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::model::Question;

/// An event name outside the closed event vocabulary.
///
/// This signals an integration bug in whatever produced the name and is never
/// silently dropped.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown event kind: {kind:?}")]
pub struct UnknownEventError {
    pub kind: String,
}

/// Every input the session state machine understands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The question source delivered its questions.
    DataReceived(Vec<Question>),
    /// The question source failed.
    DataFailed,
    Start,
    /// The user picked the option at this index for the current question.
    NewAnswer(usize),
    NextQuestion,
    /// One timer period elapsed.
    Tick,
    Finish,
    Restart,
}

impl SessionEvent {
    #[must_use]
    pub fn kind(&self) -> EventKind {
        match self {
            SessionEvent::DataReceived(_) => EventKind::DataReceived,
            SessionEvent::DataFailed => EventKind::DataFailed,
            SessionEvent::Start => EventKind::Start,
            SessionEvent::NewAnswer(_) => EventKind::NewAnswer,
            SessionEvent::NextQuestion => EventKind::NextQuestion,
            SessionEvent::Tick => EventKind::Tick,
            SessionEvent::Finish => EventKind::Finish,
            SessionEvent::Restart => EventKind::Restart,
        }
    }
}

/// Payload-free discriminant of [`SessionEvent`], addressable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    DataReceived,
    DataFailed,
    Start,
    NewAnswer,
    NextQuestion,
    Tick,
    Finish,
    Restart,
}

impl EventKind {
    pub const ALL: [EventKind; 8] = [
        EventKind::DataReceived,
        EventKind::DataFailed,
        EventKind::Start,
        EventKind::NewAnswer,
        EventKind::NextQuestion,
        EventKind::Tick,
        EventKind::Finish,
        EventKind::Restart,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::DataReceived => "dataReceived",
            EventKind::DataFailed => "dataFailed",
            EventKind::Start => "start",
            EventKind::NewAnswer => "newAnswer",
            EventKind::NextQuestion => "nextQuestion",
            EventKind::Tick => "tick",
            EventKind::Finish => "finish",
            EventKind::Restart => "restart",
        }
    }

    /// Kinds a person may trigger directly; the rest come from the question
    /// source and the timer.
    #[must_use]
    pub fn is_user_gesture(self) -> bool {
        matches!(
            self,
            EventKind::Start
                | EventKind::NewAnswer
                | EventKind::NextQuestion
                | EventKind::Finish
                | EventKind::Restart
        )
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventKind {
    type Err = UnknownEventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownEventError {
                kind: s.to_string(),
            })
    }
}
