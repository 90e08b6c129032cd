//! Dashboard-wide reactive state.

use dioxus::prelude::*;
use trending::timeframe::Timeframe;
use trending::trade::BuyAmount;

/// Signals shared by every screen, provided as a Dioxus context.
///
/// Immutable settings live in [`crate::app_state::AppState`] instead.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// Window the dashboard statistics are drawn for.
    pub timeframe: Signal<Timeframe>,
    /// Amount spent by every quick-buy button.
    pub buy_amount: Signal<BuyAmount>,
    /// Acknowledgement of the most recent quick buy.
    pub last_receipt: Signal<Option<String>>,
}
