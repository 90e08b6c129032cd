use dioxus::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use trending::format::format_minutes_ago;
use trending::format::format_percent;
use trending::format::format_usd_compact;
use trending::format::shorten_address;
use trending::mock::MockWalletTrackerFeed;
use trending::models::TrackedWallet;
use trending::models::WalletField;
use trending::ListView;
use trending::SortDirection;
use trending::SortState;

use super::trending_tokens::change_class;
use super::wallet_activity::WALLET_LABELS;
use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::components::filter_panel::OneOfFilter;
use crate::components::filter_panel::SearchBox;
use crate::components::list_view::Column;
use crate::components::list_view::TokenListView;
use crate::components::pico::Modal;
use crate::hooks::use_feed::update_view;
use crate::hooks::use_feed::use_feed;

fn columns() -> Vec<Column<TrackedWallet>> {
    vec![
        Column::<TrackedWallet>::sortable("Wallet", WalletField::Name, |w| rsx! {
            strong { "{w.name}" }
            br {}
            code { title: "{w.address}", "{shorten_address(&w.address)}" }
        }),
        Column::<TrackedWallet>::plain("Labels", |w| rsx! {
            for label in w.labels.iter() {
                small { key: "{label}", class: "chip", "{label}" }
            }
        }),
        Column::<TrackedWallet>::sortable("Last active", WalletField::LastActive, |w| rsx! {
            "{format_minutes_ago(w.last_active_mins as u64)}"
        }),
        Column::<TrackedWallet>::sortable("Value", WalletField::Value, |w| rsx! { "{format_usd_compact(w.value, 2)}" }).numeric(),
        Column::<TrackedWallet>::sortable("30d PnL", WalletField::Pnl, |w| rsx! {
            span { class: change_class(w.pnl_30d), "{format_percent(w.pnl_30d)}" }
        })
        .numeric(),
        Column::<TrackedWallet>::sortable("Win rate", WalletField::WinRate, |w| rsx! { "{w.win_rate:.0}%" }).numeric(),
    ]
}

#[component]
fn WalletTrackerBody(highlight: Signal<Option<String>>) -> Element {
    let app_state = use_context::<AppState>();
    let app_state_mut = use_context::<AppStateMut>();
    let view = use_signal(|| {
        ListView::<TrackedWallet>::with_page_size(app_state.prefs.page_size.get())
            .with_sort(SortState::by(WalletField::Value, SortDirection::Descending))
    });
    let paused = use_signal(|| false);

    // tracked wallets do not depend on the timeframe
    use_feed(
        view,
        app_state_mut.timeframe,
        app_state.prefs.refresh_period(),
        paused,
        |_| MockWalletTrackerFeed::new(StdRng::from_entropy()),
    );

    use_effect(move || {
        let label = highlight();
        update_view(view, |v| v.with_highlight(label));
    });

    rsx! {
        div {
            class: "list-toolbar",
            SearchBox::<TrackedWallet> { view, placeholder: "Search by address/name..." }
        }
        details {
            summary { "Filters" }
            OneOfFilter::<TrackedWallet> {
                view,
                name: "labels",
                label: "Labels",
                field: WalletField::Labels,
                options: WALLET_LABELS.to_vec(),
            }
        }
        TokenListView::<TrackedWallet> {
            view,
            columns: columns(),
            empty_title: "No tracked wallets",
        }
    }
}

/// Modal listing tracked wallets. Wallets carrying the `highlight` label are
/// marked and listed first.
#[component]
pub fn WalletTrackerModal(is_open: Signal<bool>, highlight: Signal<Option<String>>) -> Element {
    let title = match highlight() {
        Some(label) => format!("Wallet Tracker · {label}"),
        None => "Wallet Tracker".to_string(),
    };

    rsx! {
        Modal {
            is_open,
            title,
            WalletTrackerBody { highlight }
        }
    }
}
