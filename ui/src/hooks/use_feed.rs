//! Drives a [`Feed`] from a component and pushes every tick into a list view.

use std::time::Duration;

use dioxus::prelude::*;
use dioxus_logger::tracing::debug;
use trending::feed::pump;
use trending::timeframe::Timeframe;
use trending::Feed;
use trending::ListEntity;
use trending::ListView;

use crate::compat::Interval;

/// Replaces the view with `f(view)`.
pub fn update_view<E: ListEntity>(mut view: Signal<ListView<E>>, f: impl FnOnce(ListView<E>) -> ListView<E>) {
    let next = f(view.peek().clone());
    view.set(next);
}

/// Polls a feed every `period` and loads each snapshot into `view`.
///
/// The first snapshot is loaded as soon as the component mounts. While
/// `paused` is true ticks are skipped. The feed is rebuilt by `make_feed`
/// whenever `timeframe` changes. The timer is torn down with the component.
pub fn use_feed<F, M>(
    view: Signal<ListView<F::Item>>,
    timeframe: Signal<Timeframe>,
    period: Duration,
    paused: Signal<bool>,
    mut make_feed: M,
) -> Coroutine<()>
where
    F: Feed + 'static,
    M: FnMut(Timeframe) -> F + 'static,
{
    let mut coroutine = use_coroutine(move |_rx: UnboundedReceiver<()>| {
        let mut feed = make_feed(*timeframe.peek());
        async move {
            update_view(view, |v| v.loading());
            update_view(view, |v| v.with_snapshot(feed.produce()));

            pump(
                &mut feed,
                Interval::new(period),
                || *paused.peek(),
                |snapshot| {
                    debug!("feed tick: {} entities", snapshot.len());
                    update_view(view, |v| v.with_snapshot(snapshot));
                    true
                },
            )
            .await;
        }
    });

    let mut loaded_for = use_signal(|| *timeframe.peek());
    use_effect(move || {
        let current = timeframe();
        if current != *loaded_for.peek() {
            loaded_for.set(current);
            coroutine.restart();
        }
    });

    coroutine
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use std::sync::atomic::AtomicUsize;
    use std::sync::atomic::Ordering;

    use dioxus::dioxus_core::NoOpMutations;
    use trending::feed::FnFeed;
    use trending::models::TrackedWallet;

    use super::*;

    const PERIOD: Duration = Duration::from_secs(2);

    static LIVE_PRODUCED: AtomicUsize = AtomicUsize::new(0);
    static PAUSED_PRODUCED: AtomicUsize = AtomicUsize::new(0);

    fn counting_list(produced: &'static AtomicUsize, start_paused: bool) -> Element {
        let view = use_signal(|| ListView::<TrackedWallet>::with_page_size(10));
        let timeframe = use_signal(Timeframe::default);
        let paused = use_signal(|| start_paused);
        use_feed(view, timeframe, PERIOD, paused, move |_| {
            FnFeed(move || {
                produced.fetch_add(1, Ordering::SeqCst);
                Vec::<TrackedWallet>::new()
            })
        });
        rsx! {}
    }

    #[allow(non_snake_case)]
    fn LiveList() -> Element {
        counting_list(&LIVE_PRODUCED, false)
    }

    #[allow(non_snake_case)]
    fn PausedList() -> Element {
        counting_list(&PAUSED_PRODUCED, true)
    }

    /// Runs the dom's scheduled work for `span` of (paused) tokio time.
    async fn drive(dom: &mut VirtualDom, span: Duration) {
        let _ = tokio::time::timeout(span, async {
            loop {
                dom.wait_for_work().await;
                dom.render_immediate(&mut NoOpMutations);
            }
        })
        .await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_ticks_until_unmounted() {
        let mut dom = VirtualDom::new(LiveList);
        dom.rebuild_in_place();
        drive(&mut dom, PERIOD * 3 + PERIOD / 2).await;

        let while_mounted = LIVE_PRODUCED.load(Ordering::SeqCst);
        assert!(while_mounted >= 2, "only {while_mounted} snapshots while mounted");

        drop(dom);
        tokio::time::sleep(PERIOD * 5).await;
        assert_eq!(LIVE_PRODUCED.load(Ordering::SeqCst), while_mounted);
    }

    #[tokio::test(start_paused = true)]
    async fn test_paused_feed_only_loads_first_snapshot() {
        let mut dom = VirtualDom::new(PausedList);
        dom.rebuild_in_place();
        drive(&mut dom, PERIOD * 5).await;

        assert_eq!(PAUSED_PRODUCED.load(Ordering::SeqCst), 1);
    }
}
