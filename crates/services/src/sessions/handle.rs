use quiz_core::session::{EventKind, SessionEvent, SessionState};
use tokio::sync::{mpsc, watch};

use super::runner::LoopMessage;
use crate::error::SessionLoopError;

/// Cloneable access to a running session loop.
///
/// Reads see the most recently published state; writes enqueue events that the
/// loop applies in order.
#[derive(Clone, Debug)]
pub struct SessionHandle {
    sender: mpsc::UnboundedSender<LoopMessage>,
    state: watch::Receiver<SessionState>,
}

impl SessionHandle {
    pub(crate) fn new(
        sender: mpsc::UnboundedSender<LoopMessage>,
        state: watch::Receiver<SessionState>,
    ) -> Self {
        Self { sender, state }
    }

    /// Snapshot of the latest state.
    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Receiver notified after every applied event.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.clone()
    }

    /// Enqueue an event.
    ///
    /// # Errors
    ///
    /// Returns `SessionLoopError::Closed` if the loop has stopped.
    pub fn submit(&self, event: SessionEvent) -> Result<(), SessionLoopError> {
        self.sender
            .send(LoopMessage::Event(event))
            .map_err(|_| SessionLoopError::Closed)
    }

    /// Enqueue an event addressed by its name, e.g. `"nextQuestion"`.
    ///
    /// `answer` is the option index for `newAnswer` and ignored otherwise.
    ///
    /// # Errors
    ///
    /// Returns `SessionLoopError::UnknownEvent` for names outside the vocabulary,
    /// `SessionLoopError::MissingPayload` for `newAnswer` without an index or for
    /// `dataReceived`, and `SessionLoopError::Closed` if the loop has stopped.
    pub fn submit_named(&self, kind: &str, answer: Option<usize>) -> Result<(), SessionLoopError> {
        let kind: EventKind = kind.parse()?;
        let event = match kind {
            EventKind::DataReceived => return Err(SessionLoopError::MissingPayload { kind }),
            EventKind::NewAnswer => SessionEvent::NewAnswer(
                answer.ok_or(SessionLoopError::MissingPayload { kind })?,
            ),
            EventKind::DataFailed => SessionEvent::DataFailed,
            EventKind::Start => SessionEvent::Start,
            EventKind::NextQuestion => SessionEvent::NextQuestion,
            EventKind::Tick => SessionEvent::Tick,
            EventKind::Finish => SessionEvent::Finish,
            EventKind::Restart => SessionEvent::Restart,
        };
        self.submit(event)
    }

    /// Wait until the published state satisfies `predicate`.
    ///
    /// # Errors
    ///
    /// Returns `SessionLoopError::Closed` if the loop stops first.
    pub async fn wait_for(
        &self,
        predicate: impl FnMut(&SessionState) -> bool,
    ) -> Result<SessionState, SessionLoopError> {
        let mut receiver = self.state.clone();
        let state = receiver
            .wait_for(predicate)
            .await
            .map_err(|_| SessionLoopError::Closed)?;
        Ok(state.clone())
    }

    /// Ask the loop to stop. Later submissions fail with `Closed`.
    pub fn shutdown(&self) {
        let _ = self.sender.send(LoopMessage::Shutdown);
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}
