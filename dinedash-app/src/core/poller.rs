//! Poller - periodic refresh tasks
//!
//! Runs a callback on a fixed interval in a spawned task until its
//! [`CancellationToken`] is cancelled (the page is closed). The first tick
//! fires immediately, so the callback also performs the initial load.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;

pub struct Poller {
    name: &'static str,
    interval: Duration,
    cancel: CancellationToken,
}

impl Poller {
    /// # Arguments
    /// * `name` - used in logs
    /// * `interval` - time between ticks
    pub fn new(name: &'static str, interval: Duration) -> Self {
        Self {
            name,
            interval,
            cancel: CancellationToken::new(),
        }
    }

    /// Stop together with a parent token
    pub fn with_parent(mut self, parent: &CancellationToken) -> Self {
        self.cancel = parent.child_token();
        self
    }

    /// Start the loop in the background
    pub fn spawn<F, Fut>(self, mut tick: F) -> PollHandle
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send,
    {
        let cancel = self.cancel.clone();
        let name = self.name;
        let period = self.interval;

        let join = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            let mut ticks = 0u64;

            loop {
                tokio::select! {
                    _ = cancel.cancelled() => break,
                    _ = ticker.tick() => {}
                }
                ticks += 1;
                tracing::trace!(poller = name, tick = ticks, "Polling");

                tokio::select! {
                    _ = cancel.cancelled() => break,
                    _ = tick() => {}
                }
            }
            tracing::debug!(poller = name, ticks, "Poller stopped");
        });

        PollHandle {
            cancel: self.cancel,
            join,
        }
    }
}

/// Handle of a running [`Poller`]
pub struct PollHandle {
    cancel: CancellationToken,
    join: JoinHandle<()>,
}

impl PollHandle {
    pub fn token(&self) -> CancellationToken {
        self.cancel.clone()
    }

    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Cancel and wait for the task to finish
    pub async fn stop(mut self) {
        self.cancel.cancel();
        if let Err(e) = (&mut self.join).await {
            tracing::warn!(error = %e, "Poller task did not finish cleanly");
        }
    }
}

impl Drop for PollHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test]
    async fn test_ticks_until_stopped() {
        let count = Arc::new(AtomicU32::new(0));
        let counter = count.clone();
        let handle = Poller::new("test", Duration::from_millis(10)).spawn(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
            }
        });

        tokio::time::sleep(Duration::from_millis(55)).await;
        handle.stop().await;
        let seen = count.load(Ordering::SeqCst);
        // first tick is immediate
        assert!(seen >= 2, "ticked {} times", seen);

        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(count.load(Ordering::SeqCst), seen);
    }

    #[tokio::test]
    async fn test_parent_cancel_stops_child() {
        let parent = CancellationToken::new();
        let handle = Poller::new("child", Duration::from_millis(5))
            .with_parent(&parent)
            .spawn(|| async {});
        parent.cancel();
        assert!(handle.is_cancelled());
        handle.stop().await;
    }
}
