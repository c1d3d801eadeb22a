mod event;
mod state;
mod transition;

pub use event::{EventKind, SessionEvent, UnknownEventError};
pub use state::{SECONDS_PER_QUESTION, SessionState, SessionStatus};
pub use transition::transition;
