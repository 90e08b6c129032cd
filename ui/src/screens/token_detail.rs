use std::time::Duration;

use dioxus::prelude::*;
use dioxus_logger::tracing::warn;
use rand::rngs::StdRng;
use rand::SeedableRng;
use trending::format::format_count;
use trending::format::format_percent;
use trending::format::format_price;
use trending::format::format_usd_compact;
use trending::mock::mock_token_detail;

use super::trending_tokens::change_class;
use super::trending_tokens::social_glyph;
use super::trending_tokens::QuickBuyButton;
use crate::components::action_link::ActionLink;
use crate::components::pico::Button;
use crate::components::pico::ButtonType;
use crate::components::pico::Card;
use crate::components::pico::Grid;
use crate::compat;
use crate::Screen;

#[component]
fn Stat(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            class: "stat",
            small { class: "muted", "{label}" }
            h4 { style: "margin: 0;", "{value}" }
        }
    }
}

/// Copies `text` and shows "Copied!" for two seconds.
#[component]
fn CopyButton(text: String) -> Element {
    let mut copied = use_signal(|| false);

    rsx! {
        Button {
            button_type: ButtonType::Secondary,
            outline: true,
            small: true,
            on_click: move |_| {
                let text = text.clone();
                spawn(async move {
                    if compat::clipboard_set(text).await {
                        copied.set(true);
                        compat::sleep(Duration::from_secs(2)).await;
                        copied.set(false);
                    } else {
                        warn!("clipboard write failed");
                    }
                });
            },
            if copied() { "Copied!" } else { "Copy" }
        }
    }
}

/// Statistics, contract and links for one token.
#[component]
pub fn TokenDetailScreen(symbol: String) -> Element {
    let detail = use_signal(|| mock_token_detail(&symbol, &mut StdRng::from_entropy()));
    let d = detail.read();
    let buy_ratio = d.buy_ratio_pct();
    let sell_ratio = 100.0 - buy_ratio;
    let solscan = format!("https://solscan.io/token/{}", d.contract_address);
    let activity_target = Screen::WalletActivity {
        highlight: Some(d.symbol.clone()),
    };

    rsx! {
        Card {
            header_action: rsx! {
                ActionLink { to: Screen::Dashboard, "← Back" }
            },
            hgroup {
                h2 { style: "margin-bottom: 0;", "{d.name}" }
                p { "${d.symbol}" }
            }
            div {
                class: "detail-price",
                h3 { style: "margin: 0;", "{format_price(d.price)}" }
                span { class: change_class(d.price_change), "{format_percent(d.price_change)}" }
            }
            Grid {
                Stat { label: "Market Cap", value: format_usd_compact(d.market_cap, 2) }
                Stat { label: "Liquidity", value: format_usd_compact(d.liquidity, 2) }
                Stat { label: "Volume", value: format_usd_compact(d.volume, 2) }
                Stat { label: "Transactions", value: format_count(d.transactions) }
            }
            section {
                small { "Buys {d.buy_txns} · Sells {d.sell_txns}" }
                div {
                    class: "ratio-bar",
                    div { class: "ratio-buy", style: "width: {buy_ratio:.1}%;" }
                    div { class: "ratio-sell", style: "width: {sell_ratio:.1}%;" }
                }
                small { class: "muted", "{buy_ratio:.1}% buys" }
            }
            section {
                small { class: "muted", "Contract" }
                div {
                    role: "group",
                    input { r#type: "text", readonly: true, value: "{d.contract_address}" }
                    CopyButton { text: d.contract_address.clone() }
                }
                a { href: "{solscan}", target: "_blank", rel: "noopener noreferrer", "View on Solscan ↗" }
            }
            if !d.socials.is_empty() {
                section {
                    class: "socials",
                    for (platform, url) in d.socials.iter() {
                        a {
                            key: "{platform}",
                            href: "{url}",
                            target: "_blank",
                            rel: "noopener noreferrer",
                            "{social_glyph(platform)} {platform}"
                        }
                    }
                }
            }
            footer {
                QuickBuyButton { symbol: d.symbol.clone() }
                " "
                ActionLink { to: activity_target, "Wallet activity for ${d.symbol}" }
            }
        }
    }
}
