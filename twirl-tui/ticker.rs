use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;
use twirl_common::tasks::wait_for_task;

#[cfg(test)]
#[path = "./ticker.tests.rs"]
mod ticker_tests;

/// Verdict returned from a tick callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickFlow {
    Continue,
    Stop,
}

/// Owns at most one periodic background task.\
/// The first tick fires immediately after the task is started.
#[derive(Default)]
pub struct Ticker {
    task: Option<JoinHandle<()>>,
    cancellation_token: Option<CancellationToken>,
}

impl Ticker {
    /// Starts new periodic task running `tick` on every interval expiry until it returns [`TickFlow::Stop`].
    /// **Note** that it stops the old task if it is running.
    pub fn start<F>(&mut self, runtime: &Handle, period: Duration, mut tick: F)
    where
        F: FnMut() -> TickFlow + Send + 'static,
    {
        self.stop();

        let cancellation_token = CancellationToken::new();
        let _cancellation_token = cancellation_token.clone();
        let task = runtime.spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                tokio::select! {
                    () = _cancellation_token.cancelled() => break,
                    _ = interval.tick() => {
                        if tick() == TickFlow::Stop {
                            break;
                        }
                    },
                }
            }
        });

        self.cancellation_token = Some(cancellation_token);
        self.task = Some(task);
    }

    /// Cancels the periodic task.
    pub fn cancel(&mut self) {
        if let Some(cancellation_token) = self.cancellation_token.take() {
            cancellation_token.cancel();
        }
    }

    /// Cancels the periodic task and waits until it is finished.
    pub fn stop(&mut self) {
        self.cancel();
        wait_for_task(self.task.take(), "ticker");
    }

    /// Returns `true` if the periodic task is still alive.
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.cancel();
    }
}
