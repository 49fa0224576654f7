//! Cancelable periodic fetch tasks.
//!
//! Each view owns the pollers it starts; dropping the [`Poller`] aborts the
//! task, so a view that goes away can never write into disposed state.
//! Pollers are fire-and-forget relative to each other; nothing coordinates
//! overlapping polls from different views.

use std::future::Future;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// A repeating background task tied to its owner's lifetime.
pub struct Poller {
    handle: JoinHandle<()>,
}

impl Poller {
    /// Run `tick` immediately and then once per `period` until dropped.
    pub fn spawn<F, Fut>(period: Duration, mut tick: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send,
    {
        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                tick().await;
            }
        });
        Self { handle }
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl Drop for Poller {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_poller_ticks_repeatedly() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        let _poller = Poller::spawn(Duration::from_millis(5), move || {
            let seen = Arc::clone(&seen);
            async move {
                seen.fetch_add(1, Ordering::SeqCst);
            }
        });
        tokio::time::sleep(Duration::from_millis(40)).await;
        assert!(count.load(Ordering::SeqCst) >= 2);
    }

    #[tokio::test]
    async fn test_dropping_poller_stops_ticks() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&count);
        let poller = Poller::spawn(Duration::from_millis(5), move || {
            let seen = Arc::clone(&seen);
            async move {
                seen.fetch_add(1, Ordering::SeqCst);
            }
        });
        tokio::time::sleep(Duration::from_millis(20)).await;
        drop(poller);
        tokio::time::sleep(Duration::from_millis(20)).await;
        let after_drop = count.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(30)).await;
        assert_eq!(count.load(Ordering::SeqCst), after_drop);
    }
}
