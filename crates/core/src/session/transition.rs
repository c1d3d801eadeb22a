use std::sync::Arc;

use super::event::SessionEvent;
use super::state::{SessionState, SessionStatus};

/// Advance the session by one event.
///
/// Pure and total: an event that has no effect in the current status (or fails
/// its guard) yields a state equal to the input. See [`SessionState::accepts`].
#[must_use]
pub fn transition(state: &SessionState, event: &SessionEvent) -> SessionState {
    step(state, event).unwrap_or_else(|| state.clone())
}

impl SessionState {
    /// Returns true if `event` would take effect in this state.
    #[must_use]
    pub fn accepts(&self, event: &SessionEvent) -> bool {
        step(self, event).is_some()
    }
}

fn step(state: &SessionState, event: &SessionEvent) -> Option<SessionState> {
    use SessionStatus::{Active, Finished, Loading, Ready};

    match (state.status, event) {
        (Loading, SessionEvent::DataReceived(questions)) => Some(SessionState {
            questions: Arc::from(questions.as_slice()),
            status: Ready,
            ..state.clone()
        }),
        (Loading, SessionEvent::DataFailed) => Some(SessionState {
            status: SessionStatus::Error,
            ..state.clone()
        }),
        (Ready, SessionEvent::Start) if !state.questions.is_empty() => Some(SessionState {
            status: Active,
            index: 0,
            answer: None,
            points: 0,
            seconds_remaining: Some(state.session_time_budget()),
            ..state.clone()
        }),
        (Active, SessionEvent::NewAnswer(selected)) => new_answer(state, *selected),
        (Active, SessionEvent::NextQuestion) if state.index < state.questions.len() => {
            Some(SessionState {
                index: state.index + 1,
                answer: None,
                ..state.clone()
            })
        }
        (Active, SessionEvent::Tick) => {
            let remaining = state.seconds_remaining.unwrap_or(0).saturating_sub(1);
            if remaining == 0 {
                Some(finish(state, Some(0)))
            } else {
                Some(SessionState {
                    seconds_remaining: Some(remaining),
                    ..state.clone()
                })
            }
        }
        (Active, SessionEvent::Finish) => Some(finish(state, state.seconds_remaining)),
        (Ready | Active | Finished, SessionEvent::Restart) => Some(SessionState {
            status: Ready,
            index: 0,
            answer: None,
            points: 0,
            seconds_remaining: None,
            ..state.clone()
        }),
        _ => None,
    }
}

// Only the first answer to a question scores; later submissions are ignored.
fn new_answer(state: &SessionState, selected: usize) -> Option<SessionState> {
    if state.answer.is_some() {
        return None;
    }
    let question = state.current_question()?;
    if selected >= question.options().len() {
        return None;
    }

    let points = if question.is_correct(selected) {
        state.points.saturating_add(question.points())
    } else {
        state.points
    };

    Some(SessionState {
        answer: Some(selected),
        points,
        ..state.clone()
    })
}

fn finish(state: &SessionState, seconds_remaining: Option<u32>) -> SessionState {
    SessionState {
        status: SessionStatus::Finished,
        highscore: state.highscore.max(state.points),
        seconds_remaining,
        ..state.clone()
    }
}
