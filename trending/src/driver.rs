//! Polls a [`Feed`] on a fixed interval from a tokio task.
//!
//! Snapshots are published on a `watch` channel, so a slow reader only ever
//! sees the latest tick. The task lives as long as its [`FeedHandle`] and at
//! least one receiver.

use std::sync::atomic::AtomicBool;
use std::sync::atomic::Ordering;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use dioxus_logger::tracing::debug;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Interval;
use tokio::time::MissedTickBehavior;

use crate::feed::clamp_period;
use crate::feed::pump;
use crate::feed::Feed;
use crate::feed::Ticker;

pub type Snapshot<F> = Vec<<F as Feed>::Item>;

pub struct FeedDriver<F> {
    feed: F,
    period: Duration,
}

impl<F> FeedDriver<F>
where
    F: Feed + Send + 'static,
    F::Item: Send + Sync,
{
    /// A zero or very short `period` is raised to [`crate::feed::MIN_PERIOD`].
    pub fn new(feed: F, period: Duration) -> Self {
        Self {
            feed,
            period: clamp_period(period),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Produces the first snapshot immediately, then one per period.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(self) -> (FeedHandle, watch::Receiver<Snapshot<F>>) {
        let Self { mut feed, period } = self;
        let (tx, rx) = watch::channel(feed.produce());
        let paused = Arc::new(AtomicBool::new(false));

        let task = tokio::spawn(run(feed, period, tx, paused.clone()));
        (FeedHandle { task, paused }, rx)
    }
}

async fn run<F: Feed>(
    mut feed: F,
    period: Duration,
    tx: watch::Sender<Snapshot<F>>,
    paused: Arc<AtomicBool>,
) {
    let mut ticker = tokio::time::interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // first tick completes at once and the initial snapshot is already out
    ticker.tick().await;

    pump(
        &mut feed,
        ticker,
        || paused.load(Ordering::Relaxed),
        |snapshot| {
            if tx.is_closed() {
                debug!("feed driver: no receivers left, stopping");
                return false;
            }
            tx.send(snapshot).is_ok()
        },
    )
    .await;
}

impl Ticker for Interval {
    fn tick(&mut self) -> impl Future<Output = ()> {
        async move {
            Interval::tick(self).await;
        }
    }
}

/// Owns the driver task. Dropping the handle aborts it.
#[derive(Debug)]
pub struct FeedHandle {
    task: JoinHandle<()>,
    paused: Arc<AtomicBool>,
}

impl FeedHandle {
    /// Ticks keep firing while paused but nothing is produced.
    pub fn pause(&self) {
        self.paused.store(true, Ordering::Relaxed);
    }

    pub fn resume(&self) {
        self.paused.store(false, Ordering::Relaxed);
    }

    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Relaxed)
    }

    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }

    pub fn stop(self) {
        // Drop does the work
    }
}

impl Drop for FeedHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
