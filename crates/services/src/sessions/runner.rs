use std::sync::Arc;

use quiz_core::session::{SessionEvent, SessionState, SessionStatus, transition};
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use crate::question_source::QuestionSource;
use crate::timer::{TimerDriver, TimerTick};

/// Everything the session loop consumes, in arrival order.
#[derive(Debug)]
pub(crate) enum LoopMessage {
    Event(SessionEvent),
    Tick(TimerTick),
    Shutdown,
}

impl From<TimerTick> for LoopMessage {
    fn from(tick: TimerTick) -> Self {
        Self::Tick(tick)
    }
}

/// Owns the session state and applies messages one at a time.
///
/// Exits on `Shutdown` or once every handle has been dropped.
pub(crate) async fn run(
    mut state: SessionState,
    mut inbox: mpsc::UnboundedReceiver<LoopMessage>,
    mut timer: TimerDriver<LoopMessage>,
    publisher: watch::Sender<SessionState>,
) {
    while let Some(message) = inbox.recv().await {
        let event = match message {
            LoopMessage::Event(event) => event,
            LoopMessage::Tick(tick) => {
                if !timer.is_current(tick) {
                    debug!(epoch = tick.epoch, "dropping stale tick");
                    continue;
                }
                SessionEvent::Tick
            }
            LoopMessage::Shutdown => break,
        };

        if !state.accepts(&event) {
            debug!(
                event = %event.kind(),
                status = state.status().as_str(),
                "event has no effect in current status"
            );
            continue;
        }

        let next = transition(&state, &event);
        debug!(
            event = %event.kind(),
            from = state.status().as_str(),
            to = next.status().as_str(),
            "applied event"
        );
        apply_effects(&state, &next, &mut timer);
        state = next;
        publisher.send_replace(state.clone());
    }

    timer.stop();
    debug!("session loop stopped");
}

// Side effects live here so `transition` stays pure.
fn apply_effects(before: &SessionState, after: &SessionState, timer: &mut TimerDriver<LoopMessage>) {
    let was_active = before.is_active();
    let is_active = after.is_active();

    if !was_active && is_active {
        timer.start();
        info!(
            questions = after.num_questions(),
            seconds = after.seconds_remaining().unwrap_or(0),
            "quiz session started"
        );
    } else if was_active && !is_active {
        timer.stop();
    }

    if before.status() != SessionStatus::Finished && after.status() == SessionStatus::Finished {
        info!(
            points = after.points(),
            max_points = after.max_possible_points(),
            highscore = after.highscore(),
            timed_out = after.seconds_remaining() == Some(0),
            "quiz session finished"
        );
    }
}

/// Fetch questions once and report the outcome as a single event.
pub(crate) async fn load_questions(
    source: Arc<dyn QuestionSource>,
    sender: mpsc::UnboundedSender<LoopMessage>,
) {
    let event = match source.fetch_questions().await {
        Ok(questions) => {
            info!(count = questions.len(), "questions loaded");
            SessionEvent::DataReceived(questions)
        }
        Err(err) => {
            warn!(error = %err, "failed to load questions");
            SessionEvent::DataFailed
        }
    };

    if sender.send(LoopMessage::Event(event)).is_err() {
        debug!("session loop closed before questions arrived");
    }
}
