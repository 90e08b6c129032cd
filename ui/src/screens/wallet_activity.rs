//! Tokens bought by tracked wallets: a three-row widget for the dashboard and
//! a full screen that can highlight one token.

use dioxus::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use trending::format::format_usd_compact;
use trending::format::shorten_address;
use trending::mock::MockWalletActivityFeed;
use trending::models::WalletActivity;
use trending::models::WalletActivityField;
use trending::ListView;
use trending::SortDirection;
use trending::SortState;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::components::action_link::ActionLink;
use crate::components::filter_panel::OneOfFilter;
use crate::components::filter_panel::RangeFilter;
use crate::components::filter_panel::SearchBox;
use crate::components::list_view::Column;
use crate::components::list_view::TokenListView;
use crate::components::pico::Card;
use crate::components::timeframe_picker::TimeframePicker;
use crate::hooks::use_feed::update_view;
use crate::hooks::use_feed::use_feed;
use crate::Screen;

pub(crate) const WALLET_LABELS: [&str; 5] = ["Whale", "Sniper", "Smart Money", "Alpha Caller", "Insider"];

fn by_total_usd(page_size: usize) -> ListView<WalletActivity> {
    ListView::with_page_size(page_size)
        .with_sort(SortState::by(WalletActivityField::TotalUsd, SortDirection::Descending))
}

#[component]
fn TokenBadge(activity: WalletActivity) -> Element {
    rsx! {
        div {
            class: "token-cell",
            span { class: "logo", "{activity.icon}" }
            div {
                strong { "{activity.token_name}" }
                br {}
                small { "${activity.token_symbol}" }
            }
        }
    }
}

/// Label chips. Clicking one opens the wallet tracker filtered to it.
#[component]
fn LabelChips(labels: Vec<String>, on_label: Option<EventHandler<String>>) -> Element {
    rsx! {
        for label in labels {
            {
                let clicked = label.clone();
                rsx! {
                    small {
                        key: "{label}",
                        class: "chip",
                        style: if on_label.is_some() { "cursor: pointer;" } else { "" },
                        onclick: move |evt: MouseEvent| {
                            if let Some(handler) = &on_label {
                                evt.stop_propagation();
                                handler.call(clicked.clone());
                            }
                        },
                        "{label}"
                    }
                }
            }
        }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct TrackedWalletWidgetProps {
    /// Called with a label when one of its chips is clicked.
    on_label: EventHandler<String>,
}

/// The three biggest buys by tracked wallets.
#[component]
pub fn TrackedWalletWidget(props: TrackedWalletWidgetProps) -> Element {
    let app_state = use_context::<AppState>();
    let app_state_mut = use_context::<AppStateMut>();
    let mut active_screen = use_context::<Signal<Screen>>();
    let view = use_signal(|| by_total_usd(3));
    let paused = use_signal(|| false);

    use_feed(
        view,
        app_state_mut.timeframe,
        app_state.prefs.refresh_period(),
        paused,
        |timeframe| MockWalletActivityFeed::new(StdRng::from_entropy(), timeframe),
    );

    let on_label = props.on_label;
    let rows: Vec<WalletActivity> = view.read().derive().items;

    rsx! {
        Card {
            title: "Tracked Wallets",
            header_action: rsx! {
                ActionLink { to: Screen::WalletActivity { highlight: None }, "View all" }
            },
            if rows.is_empty() {
                p { small { class: "muted", "Waiting for wallet activity..." } }
            }
            for activity in rows {
                div {
                    key: "{activity.id}",
                    class: "activity-row",
                    style: "cursor: pointer;",
                    onclick: {
                        let symbol = activity.token_symbol.clone();
                        move |_| active_screen.set(Screen::WalletActivity { highlight: Some(symbol.clone()) })
                    },
                    TokenBadge { activity: activity.clone() }
                    div {
                        strong { "{format_usd_compact(activity.total_usd, 1)}" }
                        br {}
                        small { "{activity.buy_count} buys · {activity.wallet_count} wallets" }
                    }
                    div {
                        LabelChips { labels: activity.labels().to_vec(), on_label }
                    }
                }
            }
        }
    }
}

fn columns() -> Vec<Column<WalletActivity>> {
    vec![
        Column::<WalletActivity>::sortable("Token", WalletActivityField::TokenName, |a| rsx! {
            TokenBadge { activity: a.clone() }
        }),
        Column::<WalletActivity>::sortable("Buys", WalletActivityField::BuyCount, |a| rsx! { "{a.buy_count}" }).numeric(),
        Column::<WalletActivity>::sortable("Total", WalletActivityField::TotalUsd, |a| rsx! { "{format_usd_compact(a.total_usd, 2)}" })
            .numeric(),
        Column::<WalletActivity>::sortable("SOL", WalletActivityField::TotalSol, |a| rsx! { "{a.total_sol:.2}" }).numeric(),
        Column::<WalletActivity>::sortable("Wallets", WalletActivityField::WalletCount, |a| rsx! { "{a.wallet_count}" }).numeric(),
        Column::<WalletActivity>::plain("Labels", |a| rsx! {
            LabelChips { labels: a.labels().to_vec() }
        }),
        Column::<WalletActivity>::plain("Top wallets", |a| rsx! {
            ul {
                class: "wallet-buys",
                for buy in a.wallets.iter().take(3) {
                    li {
                        key: "{buy.address}",
                        code { "{shorten_address(&buy.address)}" }
                        " {buy.label} · {format_usd_compact(buy.amount_usd, 1)}"
                    }
                }
            }
        }),
    ]
}

/// Full wallet-activity list. Rows for `highlight` are marked and shown first.
#[component]
pub fn WalletActivityScreen(highlight: Option<String>) -> Element {
    let app_state = use_context::<AppState>();
    let app_state_mut = use_context::<AppStateMut>();
    let page_size = app_state.prefs.page_size.get();
    let view = use_signal(|| by_total_usd(page_size).with_highlight(highlight.clone()));
    let paused = use_signal(|| false);

    use_feed(
        view,
        app_state_mut.timeframe,
        app_state.prefs.refresh_period(),
        paused,
        |timeframe| MockWalletActivityFeed::new(StdRng::from_entropy(), timeframe),
    );

    let current_highlight = view.read().highlight().map(str::to_string);

    rsx! {
        Card {
            title: "Wallet Activity",
            header_action: rsx! {
                TimeframePicker { selected: app_state_mut.timeframe }
            },
            div {
                class: "list-toolbar",
                ActionLink { to: Screen::Dashboard, "← Dashboard" }
                SearchBox::<WalletActivity> { view, placeholder: "Search token" }
                if let Some(symbol) = current_highlight {
                    small {
                        class: "chip",
                        "Highlighting ${symbol} "
                        a {
                            href: "#",
                            onclick: move |evt: MouseEvent| {
                                evt.prevent_default();
                                update_view(view, |v| v.with_highlight(None));
                            },
                            "✕"
                        }
                    }
                }
            }
            details {
                summary { "Filters" }
                div {
                    class: "filter-grid",
                    OneOfFilter::<WalletActivity> {
                        view,
                        name: "labels",
                        label: "Wallet labels",
                        field: WalletActivityField::Labels,
                        options: WALLET_LABELS.to_vec(),
                    }
                    RangeFilter::<WalletActivity> {
                        view,
                        name: "total_usd",
                        label: "Total bought ($)",
                        field: WalletActivityField::TotalUsd,
                    }
                }
            }
            TokenListView::<WalletActivity> {
                view,
                columns: columns(),
                empty_title: "No wallet activity yet",
            }
        }
    }
}
