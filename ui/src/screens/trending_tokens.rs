//! The main trending-tokens table with its filter panel and quick-buy buttons.

use dioxus::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use strum::IntoEnumIterator;
use trending::format::format_compact;
use trending::format::format_count;
use trending::format::format_percent;
use trending::format::format_price;
use trending::format::format_usd_compact;
use trending::mock::MockTokenFeed;
use trending::models::Protocol;
use trending::models::Token;
use trending::models::TokenField;
use trending::trade::submit_buy;
use trending::trade::BuyOrder;
use trending::ListView;
use trending::SortDirection;
use trending::SortState;

use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::components::filter_panel::FlagFilter;
use crate::components::filter_panel::KeywordFilter;
use crate::components::filter_panel::OneOfFilter;
use crate::components::filter_panel::RangeFilter;
use crate::components::filter_panel::SearchBox;
use crate::components::list_view::Column;
use crate::components::list_view::TokenListView;
use crate::components::pico::Button;
use crate::hooks::use_feed::use_feed;
use crate::Screen;

/// CSS class for a signed change.
pub(crate) fn change_class(change: f64) -> &'static str {
    if change >= 0.0 {
        "up"
    } else {
        "down"
    }
}

#[component]
pub fn QuickBuyButton(symbol: String) -> Element {
    let mut app_state_mut = use_context::<AppStateMut>();
    let amount = app_state_mut.buy_amount;

    rsx! {
        Button {
            small: true,
            on_click: move |evt: MouseEvent| {
                evt.stop_propagation();
                let receipt = submit_buy(&BuyOrder::new(symbol.clone(), amount()));
                app_state_mut.last_receipt.set(Some(receipt));
            },
            "Buy {amount}"
        }
    }
}

#[component]
fn SocialIcons(token: Token) -> Element {
    rsx! {
        div {
            class: "socials",
            for (platform, url) in token.socials.iter() {
                a {
                    key: "{platform}",
                    href: "{url}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    title: "{platform}",
                    onclick: |evt| evt.stop_propagation(),
                    {social_glyph(platform)}
                }
            }
        }
    }
}

pub(crate) fn social_glyph(platform: &str) -> &'static str {
    match platform {
        "website" => "🌐",
        "twitter" => "𝕏",
        "telegram" => "✈",
        "discord" => "💬",
        _ => "🔗",
    }
}

fn columns() -> Vec<Column<Token>> {
    vec![
        Column::<Token>::sortable("Token", TokenField::Name, |t| rsx! {
            div {
                class: "token-cell",
                span { class: "logo", "{t.logo}" }
                div {
                    strong { "{t.name}" }
                    br {}
                    small { "${t.symbol}" }
                }
            }
        }),
        Column::<Token>::sortable("Protocol", TokenField::Protocol, |t| rsx! {
            small { class: "chip", "{t.protocol}" }
        }),
        Column::<Token>::sortable("Price", TokenField::Price, |t| rsx! { "{format_price(t.price)}" }).numeric(),
        Column::<Token>::sortable("24h", TokenField::Change24h, |t| rsx! {
            span { class: change_class(t.change_24h), "{format_percent(t.change_24h)}" }
        })
        .numeric(),
        Column::<Token>::sortable("Volume", TokenField::Volume, |t| rsx! { "{format_usd_compact(t.volume, 2)}" }).numeric(),
        Column::<Token>::sortable("Market Cap", TokenField::MarketCap, |t| rsx! { "{format_usd_compact(t.market_cap, 2)}" })
            .numeric(),
        Column::<Token>::sortable("Liquidity", TokenField::Liquidity, |t| rsx! { "{format_usd_compact(t.liquidity, 2)}" })
            .numeric(),
        Column::<Token>::sortable("Holders", TokenField::Holders, |t| rsx! { "{format_count(t.holders)}" }).numeric(),
        Column::<Token>::sortable("Top 10", TokenField::Top10HolderPct, |t| rsx! { "{t.top10_holder_pct:.1}%" }).numeric(),
        Column::<Token>::sortable("Txns", TokenField::Transactions, |t| rsx! {
            span {
                title: "{t.buy_txns} buys / {t.sell_txns} sells",
                "{format_compact(t.transactions as f64)}"
            }
        })
        .numeric(),
        Column::<Token>::sortable("Tweets", TokenField::Tweets, |t| rsx! { "{format_count(t.tweets)}" }).numeric(),
        Column::<Token>::sortable("Paid", TokenField::DexPaid, |t| rsx! {
            if t.dex_paid { "✅" } else { "-" }
        }),
        Column::<Token>::plain("Socials", |t| rsx! { SocialIcons { token: t.clone() } }),
        Column::<Token>::plain("", |t| rsx! { QuickBuyButton { symbol: t.symbol.clone() } }),
    ]
}

#[component]
pub fn TrendingTokensTable() -> Element {
    let app_state = use_context::<AppState>();
    let app_state_mut = use_context::<AppStateMut>();
    let mut active_screen = use_context::<Signal<Screen>>();
    let prefs = app_state.prefs;

    let view = use_signal(|| {
        ListView::<Token>::with_page_size(prefs.page_size.get())
            .with_sort(SortState::by(TokenField::Volume, SortDirection::Descending))
    });
    let mut paused = use_signal(|| false);

    use_feed(
        view,
        app_state_mut.timeframe,
        prefs.refresh_period(),
        paused,
        |timeframe| MockTokenFeed::new(StdRng::from_entropy(), timeframe),
    );

    let protocols: Vec<&'static str> = Protocol::iter().map(|p| p.label()).collect();
    let active_filters = view.read().filters().active_count();

    rsx! {
        div {
            class: "list-toolbar",
            SearchBox::<Token> { view, placeholder: "Search name, symbol or address" }
            if paused() {
                small { class: "paused", "⏸ paused" }
            }
        }
        details {
            summary {
                if active_filters > 0 {
                    "Filters ({active_filters} active)"
                } else {
                    "Filters"
                }
            }
            div {
                class: "filter-grid",
                RangeFilter::<Token> { view, name: "volume", label: "Volume ($)", field: TokenField::Volume }
                RangeFilter::<Token> { view, name: "market_cap", label: "Market cap ($)", field: TokenField::MarketCap }
                RangeFilter::<Token> { view, name: "liquidity", label: "Liquidity ($)", field: TokenField::Liquidity }
                RangeFilter::<Token> { view, name: "holders", label: "Holders", field: TokenField::Holders }
                RangeFilter::<Token> { view, name: "top10", label: "Top 10 holders (%)", field: TokenField::Top10HolderPct }
                OneOfFilter::<Token> { view, name: "protocol", label: "Protocol", field: TokenField::Protocol, options: protocols }
                div {
                    FlagFilter::<Token> { view, name: "dex_paid", label: "DEX paid", field: TokenField::DexPaid }
                    KeywordFilter::<Token> { view, name: "include", label: "Include keywords" }
                    KeywordFilter::<Token> { view, name: "exclude", label: "Exclude keywords", exclude: true }
                }
            }
        }
        div {
            onmouseenter: move |_| {
                if prefs.pause_on_hover {
                    paused.set(true);
                }
            },
            onmouseleave: move |_| paused.set(false),
            TokenListView::<Token> {
                view,
                columns: columns(),
                empty_title: "No trending tokens yet",
                on_row_click: move |token: Token| active_screen.set(Screen::TokenDetail(token.symbol)),
            }
        }
    }
}
