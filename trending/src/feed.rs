//! Sources of list snapshots and the loop that polls them on a timer.

use std::future::Future;
use std::time::Duration;

use crate::entity::ListEntity;

/// Shortest period a feed is polled at. Shorter periods are raised to it.
pub const MIN_PERIOD: Duration = Duration::from_millis(100);

/// `period`, raised to [`MIN_PERIOD`]. Timers panic on a zero period.
pub fn clamp_period(period: Duration) -> Duration {
    period.max(MIN_PERIOD)
}

/// Anything that can produce a fresh snapshot of entities on demand.
///
/// A feed is polled once per timer tick. Each call returns the complete
/// list, which replaces whatever was shown before.
pub trait Feed {
    type Item: ListEntity;

    fn produce(&mut self) -> Vec<Self::Item>;
}

impl<F: Feed + ?Sized> Feed for Box<F> {
    type Item = F::Item;

    fn produce(&mut self) -> Vec<Self::Item> {
        (**self).produce()
    }
}

/// Returns the same snapshot on every tick.
#[derive(Debug, Clone, PartialEq)]
pub struct FixtureFeed<E> {
    snapshot: Vec<E>,
}

impl<E: ListEntity> FixtureFeed<E> {
    pub fn new(snapshot: Vec<E>) -> Self {
        Self { snapshot }
    }
}

impl<E: ListEntity> Feed for FixtureFeed<E> {
    type Item = E;

    fn produce(&mut self) -> Vec<E> {
        self.snapshot.clone()
    }
}

/// Wraps a closure as a feed.
pub struct FnFeed<F>(pub F);

impl<E, F> Feed for FnFeed<F>
where
    E: ListEntity,
    F: FnMut() -> Vec<E>,
{
    type Item = E;

    fn produce(&mut self) -> Vec<E> {
        (self.0)()
    }
}

/// A repeating timer. Each call waits for the next tick.
pub trait Ticker {
    fn tick(&mut self) -> impl Future<Output = ()>;
}

/// Polls `feed` once per tick until `publish` declines a snapshot.
///
/// Ticks that arrive while `is_paused` returns true are skipped without
/// touching the feed. Dropping the returned future stops the loop, together
/// with the ticker it owns.
pub async fn pump<F, T>(
    feed: &mut F,
    mut ticker: T,
    is_paused: impl Fn() -> bool,
    mut publish: impl FnMut(Vec<F::Item>) -> bool,
) where
    F: Feed,
    T: Ticker,
{
    loop {
        ticker.tick().await;
        if is_paused() {
            continue;
        }
        if !publish(feed.produce()) {
            break;
        }
    }
}
