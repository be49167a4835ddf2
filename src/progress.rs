//! Rotating progress messages shown while an outline is generated.

use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval_at};
use tracing::{debug, warn};

/// Messages cycled while waiting for the server.
pub const DEFAULT_MESSAGES: [&str; 5] = [
    "Analyzing requirements...",
    "Generating initial outline...",
    "Searching web resources...",
    "Enhancing content...",
    "Finalizing course outline...",
];

/// Time each message stays visible.
pub const DEFAULT_PERIOD: Duration = Duration::from_secs(2);

/// Receives progress text updates.
pub trait ProgressSink: Send + Sync + 'static {
    /// Replaces the visible progress text.
    fn show_progress(&self, message: &str);
}

/// Configuration of a repeating progress message task.
#[derive(Debug, Clone)]
pub struct ProgressRotator {
    messages: Arc<[String]>,
    period: Duration,
}

impl Default for ProgressRotator {
    fn default() -> Self {
        Self::new(DEFAULT_MESSAGES, DEFAULT_PERIOD)
    }
}

impl ProgressRotator {
    /// Creates rotator cycling `messages` every `period`.
    pub fn new<I, S>(messages: I, period: Duration) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            messages: messages.into_iter().map(Into::into).collect(),
            period,
        }
    }

    /// Spawns the rotation task on the current tokio runtime.
    ///
    /// The first message appears after one period, then each following
    /// message one period later, wrapping around at the end of the list.
    /// With no messages nothing is spawned and the handle is inert.
    ///
    /// # Returns
    ///
    /// Handle that stops the task on [`ProgressHandle::stop`] or drop
    pub fn start(&self, sink: Arc<dyn ProgressSink>) -> ProgressHandle {
        if self.messages.is_empty() || self.period.is_zero() {
            warn!("progress rotation has nothing to show");
            return ProgressHandle {
                stop: None,
                task: None,
            };
        }

        let (stop_tx, mut stop_rx) = oneshot::channel::<()>();
        let messages = Arc::clone(&self.messages);
        let period = self.period;

        let task = tokio::spawn(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            let mut index = 0;

            loop {
                tokio::select! {
                    _ = &mut stop_rx => break,
                    _ = ticker.tick() => {
                        sink.show_progress(&messages[index]);
                        index = (index + 1) % messages.len();
                    }
                }
            }
            debug!("progress rotation stopped");
        });

        ProgressHandle {
            stop: Some(stop_tx),
            task: Some(task),
        }
    }
}

/// Running progress rotation.
#[derive(Debug)]
pub struct ProgressHandle {
    stop: Option<oneshot::Sender<()>>,
    task: Option<JoinHandle<()>>,
}

impl ProgressHandle {
    /// Returns true while the rotation task has not finished.
    pub fn is_running(&self) -> bool {
        self.task.as_ref().is_some_and(|task| !task.is_finished())
    }

    /// Stops rotation and waits for the task to exit.
    ///
    /// No message is shown after this returns.
    pub async fn stop(mut self) {
        if let Some(stop) = self.stop.take() {
            let _ = stop.send(());
        }
        if let Some(task) = self.task.take()
            && let Err(e) = task.await
        {
            warn!(error = %e, "progress task ended abnormally");
        }
    }
}

impl Drop for ProgressHandle {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}
