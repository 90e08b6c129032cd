//! Timers and clipboard access that differ between the browser and native builds.

#[cfg(target_arch = "wasm32")]
pub use wasm32::*;

#[cfg(not(target_arch = "wasm32"))]
pub use non_wasm32::*;

#[cfg(target_arch = "wasm32")]
pub mod wasm32 {
    use std::future::Future;
    use std::time::Duration;

    use trending::feed::clamp_period;
    use trending::feed::Ticker;
    use wasm_bindgen_futures::JsFuture;

    /// A repeating browser timer. The first tick fires one period after creation.
    /// Dropping the interval clears the JS timer.
    pub struct Interval {
        inner: Option<gloo_timers::callback::Interval>,
        rx: tokio::sync::mpsc::UnboundedReceiver<()>,
    }

    impl Interval {
        pub fn new(period: Duration) -> Self {
            let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
            let millis = clamp_period(period).as_millis().min(u32::MAX as u128) as u32;
            let inner = gloo_timers::callback::Interval::new(millis, move || {
                let _ = tx.send(());
            });
            Self {
                inner: Some(inner),
                rx,
            }
        }

        pub async fn tick(&mut self) {
            let _ = self.rx.recv().await;
        }
    }

    impl Ticker for Interval {
        fn tick(&mut self) -> impl Future<Output = ()> {
            Interval::tick(self)
        }
    }

    impl Drop for Interval {
        fn drop(&mut self) {
            if let Some(inner) = self.inner.take() {
                inner.cancel();
            }
        }
    }

    pub async fn sleep(duration: Duration) {
        gloo_timers::future::sleep(duration).await;
    }

    pub async fn clipboard_set(text: String) -> bool {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let promise = window.navigator().clipboard().write_text(&text);
        JsFuture::from(promise).await.is_ok()
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub mod non_wasm32 {
    use std::future::Future;
    use std::time::Duration;

    use dioxus_clipboard::prelude::*;
    use tokio::time::Instant;
    use tokio::time::MissedTickBehavior;
    use trending::feed::clamp_period;
    use trending::feed::Ticker;

    /// A repeating tokio timer. The first tick fires one period after creation,
    /// matching the browser version. Periods below
    /// [`trending::feed::MIN_PERIOD`] are raised to it.
    pub struct Interval {
        inner: tokio::time::Interval,
    }

    impl Interval {
        pub fn new(period: Duration) -> Self {
            let period = clamp_period(period);
            let mut inner = tokio::time::interval_at(Instant::now() + period, period);
            inner.set_missed_tick_behavior(MissedTickBehavior::Delay);
            Self { inner }
        }

        pub async fn tick(&mut self) {
            self.inner.tick().await;
        }
    }

    impl Ticker for Interval {
        fn tick(&mut self) -> impl Future<Output = ()> {
            Interval::tick(self)
        }
    }

    pub async fn sleep(duration: Duration) {
        tokio::time::sleep(duration).await;
    }

    pub async fn clipboard_set(text: String) -> bool {
        let mut clipboard = use_clipboard();
        clipboard.set(text).is_ok()
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use std::time::Duration;

    use tokio::time::timeout;

    use super::Interval;

    const PERIOD: Duration = Duration::from_secs(2);

    #[tokio::test(start_paused = true)]
    async fn test_first_tick_waits_one_period() {
        let mut interval = Interval::new(PERIOD);
        assert!(timeout(PERIOD / 2, interval.tick()).await.is_err());
        assert!(timeout(PERIOD, interval.tick()).await.is_ok());
        assert!(timeout(PERIOD + Duration::from_millis(1), interval.tick()).await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_period_ticks_at_the_minimum() {
        let mut interval = Interval::new(Duration::ZERO);
        assert!(timeout(trending::feed::MIN_PERIOD * 2, interval.tick()).await.is_ok());
    }
}
