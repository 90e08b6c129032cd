use dioxus::prelude::*;

use super::trending_tokens::TrendingTokensTable;
use super::twitter_trends::TwitterTrendingWidget;
use super::wallet_activity::TrackedWalletWidget;
use super::wallet_tracker::WalletTrackerModal;
use crate::app_state_mut::AppStateMut;
use crate::components::buy_amount_input::BuyAmountInput;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::timeframe_picker::TimeframePicker;

#[component]
pub fn DashboardScreen() -> Element {
    let mut app_state_mut = use_context::<AppStateMut>();
    let mut tracker_open = use_signal(|| false);
    let mut tracker_label = use_signal(|| None::<String>);

    rsx! {
        div {
            class: "dashboard-toolbar",
            TimeframePicker { selected: app_state_mut.timeframe }
            BuyAmountInput { amount: app_state_mut.buy_amount }
            Button {
                button_type: ButtonType::Contrast,
                outline: true,
                small: true,
                on_click: move |_| {
                    tracker_label.set(None);
                    tracker_open.set(true);
                },
                "Wallet Tracker"
            }
        }
        if let Some(receipt) = (app_state_mut.last_receipt)() {
            div {
                class: "receipt",
                role: "status",
                small { "{receipt}" }
                a {
                    href: "#",
                    onclick: move |evt: MouseEvent| {
                        evt.prevent_default();
                        app_state_mut.last_receipt.set(None);
                    },
                    " ✕"
                }
            }
        }
        div {
            class: "dashboard-grid",
            Card {
                title: "Trending Tokens",
                TrendingTokensTable {}
            }
            aside {
                TwitterTrendingWidget {}
                TrackedWalletWidget {
                    on_label: move |label: String| {
                        tracker_label.set(Some(label));
                        tracker_open.set(true);
                    },
                }
            }
        }
        WalletTrackerModal { is_open: tracker_open, highlight: tracker_label }
    }
}
