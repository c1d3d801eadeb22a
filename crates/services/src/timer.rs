//! Periodic tick source for an active session.

use std::time::Duration;

use tokio::sync::mpsc::{UnboundedSender, WeakUnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};

/// One elapsed timer period, tagged with the cadence that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerTick {
    pub epoch: u64,
}

/// Emits a [`TimerTick`] into an event channel once per period while running.
///
/// Every `start` opens a new epoch and every `stop` closes it, so a consumer can
/// drop ticks that were already queued when the cadence was stopped by checking
/// [`TimerDriver::is_current`].
///
/// The driver only holds a weak sender and never keeps the channel open on its own.
pub struct TimerDriver<M = TimerTick> {
    period: Duration,
    sender: WeakUnboundedSender<M>,
    epoch: u64,
    task: Option<JoinHandle<()>>,
}

impl<M> TimerDriver<M>
where
    M: From<TimerTick> + Send + 'static,
{
    #[must_use]
    pub fn new(period: Duration, sender: &UnboundedSender<M>) -> Self {
        Self {
            period,
            sender: sender.downgrade(),
            epoch: 0,
            task: None,
        }
    }

    /// Begin the cadence. The first tick fires one full period from now.
    ///
    /// Does nothing if already running. Must be called inside a tokio runtime.
    pub fn start(&mut self) {
        if self.task.is_some() {
            return;
        }

        self.epoch += 1;
        let tick = TimerTick { epoch: self.epoch };
        let period = self.period;
        let sender = self.sender.clone();

        self.task = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                let Some(sender) = sender.upgrade() else {
                    break;
                };
                if sender.send(M::from(tick)).is_err() {
                    break;
                }
            }
        }));
    }

    /// Halt the cadence and invalidate its epoch. Does nothing if already stopped.
    pub fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
            self.epoch += 1;
        }
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    /// True if `tick` came from the cadence that is running right now.
    #[must_use]
    pub fn is_current(&self, tick: TimerTick) -> bool {
        self.task.is_some() && tick.epoch == self.epoch
    }
}

impl<M> Drop for TimerDriver<M> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
