use std::sync::Arc;
use std::time::Duration;

use quiz_core::SECONDS_PER_QUESTION;
use quiz_core::session::SessionState;
use tokio::sync::{mpsc, watch};

use super::handle::SessionHandle;
use super::runner::{self, LoopMessage};
use crate::config::DEFAULT_TICK_PERIOD;
use crate::question_source::QuestionSource;
use crate::timer::TimerDriver;

/// Starts session loops: one question fetch, one state owner, one timer.
#[derive(Clone)]
pub struct SessionLoopService {
    source: Arc<dyn QuestionSource>,
    seconds_per_question: u32,
    tick_period: Duration,
}

impl SessionLoopService {
    #[must_use]
    pub fn new(source: Arc<dyn QuestionSource>) -> Self {
        Self {
            source,
            seconds_per_question: SECONDS_PER_QUESTION,
            tick_period: DEFAULT_TICK_PERIOD,
        }
    }

    #[must_use]
    pub fn with_seconds_per_question(mut self, seconds_per_question: u32) -> Self {
        self.seconds_per_question = seconds_per_question;
        self
    }

    #[must_use]
    pub fn with_tick_period(mut self, tick_period: Duration) -> Self {
        self.tick_period = tick_period;
        self
    }

    /// Spawn a session loop and kick off the question fetch.
    ///
    /// The returned handle starts in `Loading`. Must be called inside a tokio runtime.
    #[must_use]
    pub fn start(&self) -> SessionHandle {
        let (sender, inbox) = mpsc::unbounded_channel::<LoopMessage>();
        let initial = SessionState::with_seconds_per_question(self.seconds_per_question);
        let (publisher, state) = watch::channel(initial.clone());
        let timer = TimerDriver::new(self.tick_period, &sender);

        tokio::spawn(runner::run(initial, inbox, timer, publisher));
        tokio::spawn(runner::load_questions(
            Arc::clone(&self.source),
            sender.clone(),
        ));

        SessionHandle::new(sender, state)
    }
}
