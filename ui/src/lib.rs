// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod app_state_mut;
pub mod compat;
mod components;
pub mod hooks;
mod screens;

use app_state::AppState;
use app_state_mut::AppStateMut;
use components::pico::Container;
use screens::dashboard::DashboardScreen;
use screens::token_detail::TokenDetailScreen;
use screens::twitter_trends::TwitterTrendsScreen;
use screens::wallet_activity::WalletActivityScreen;
use trending::prefs::DashboardPrefs;

/// Enum to represent the different screens in our application.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Screen {
    #[default]
    Dashboard,
    TwitterTrends,
    /// Wallet buys, optionally highlighting one token symbol.
    WalletActivity { highlight: Option<String> },
    /// Detail page for a token symbol.
    TokenDetail(String),
}

impl Screen {
    /// Helper to get the display name for each screen.
    fn name(&self) -> &'static str {
        match self {
            Screen::Dashboard => "Dashboard",
            Screen::TwitterTrends => "Twitter Trends",
            Screen::WalletActivity { .. } => "Wallet Activity",
            Screen::TokenDetail(_) => "Token",
        }
    }

    /// True if the tab for `tab` should be shown as active on this screen.
    fn selects_tab(&self, tab: &Screen) -> bool {
        match (self, tab) {
            (Screen::TokenDetail(_), Screen::Dashboard) => true,
            (Screen::WalletActivity { .. }, Screen::WalletActivity { .. }) => true,
            (active, tab) => active == tab,
        }
    }
}

/// A list of all tabbed screens for easy iteration.
const ALL_SCREENS: [Screen; 3] = [
    Screen::Dashboard,
    Screen::TwitterTrends,
    Screen::WalletActivity { highlight: None },
];

#[component]
fn Tabs(active_screen: Signal<Screen>) -> Element {
    rsx! {
        nav {
            class: "tab-menu",
            ul {
                for screen in ALL_SCREENS {
                    li {
                        a {
                            href: "#",
                            class: if active_screen.read().selects_tab(&screen) { "active-tab" } else { "" },
                            "aria-current": if active_screen.read().selects_tab(&screen) { "page" } else { "false" },
                            onclick: move |event| {
                                event.prevent_default();
                                active_screen.set(screen.clone());
                            },
                            "{screen.name()}"
                        }
                    }
                }
            }
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let responsive_css = r#"
    * { box-sizing: border-box; }

    .app-main-container { padding: 10px; }

    .app-main-container header {
        padding: 0 1rem;
        --pico-nav-element-spacing-vertical: 0.5rem;
    }

    .tab-menu a.active-tab {
        color: var(--pico-primary) !important;
        text-decoration: none;
        border-radius: 10px 10px 0 0;
        border-top: 3px solid color-mix(in srgb, var(--pico-primary), transparent 90%);
        background: linear-gradient(
            to bottom,
            color-mix(in srgb, var(--pico-primary), transparent 97%),
            transparent
        );
    }
    .tab-menu a:not(.active-tab) { color: var(--pico-muted-color); }

    .card-header { display: flex; justify-content: space-between; align-items: center; gap: 1rem; }
    .muted { color: var(--pico-muted-color); }
    .up { color: var(--pico-color-green-500, #2ecc71); }
    .down { color: var(--pico-color-red-500, #e74c3c); }
    .error { color: var(--pico-del-color); }

    .dashboard-toolbar, .list-toolbar {
        display: flex; flex-wrap: wrap; align-items: center; gap: 1rem; margin-bottom: 1rem;
    }
    .list-toolbar input[type=search] { margin-bottom: 0; max-width: 24rem; }
    .dashboard-grid { display: grid; grid-template-columns: minmax(0, 3fr) minmax(0, 1fr); gap: 1rem; }
    @media (max-width: 1024px) { .dashboard-grid { grid-template-columns: 1fr; } }

    .table-scroll { overflow-x: auto; }
    tr.highlighted td { background-color: color-mix(in srgb, var(--pico-primary), transparent 85%); }
    .filter-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(14rem, 1fr)); gap: 0.5rem 1rem; }
    .pager { display: flex; justify-content: space-between; align-items: center; }

    .token-cell { display: flex; align-items: center; gap: 0.5rem; }
    .token-cell .logo { font-size: 1.5rem; width: 2rem; text-align: center; }
    .socials { display: flex; gap: 0.5rem; }
    .socials a { text-decoration: none; }
    .chip {
        display: inline-block; padding: 0.1rem 0.5rem; margin: 0.1rem;
        border-radius: 1rem; background: var(--pico-secondary-background); color: var(--pico-secondary-inverse);
        font-size: 0.75rem; white-space: nowrap;
    }
    .activity-row { display: grid; grid-template-columns: 2fr 1fr; gap: 0.25rem; padding: 0.5rem 0; border-bottom: 1px solid var(--pico-muted-border-color); }
    .activity-row > div:last-child { grid-column: 1 / -1; }
    .wallet-buys { margin: 0; padding-left: 1rem; font-size: 0.8rem; }

    .ratio-bar { display: flex; height: 0.5rem; border-radius: 0.25rem; overflow: hidden; margin: 0.25rem 0; }
    .ratio-buy { background: var(--pico-color-green-500, #2ecc71); }
    .ratio-sell { background: var(--pico-color-red-500, #e74c3c); }

    .empty-state { text-align: center; padding: 2rem 1rem; }
    .empty-state-icon { font-size: 2.5rem; margin-bottom: 0.5rem; }
    .receipt { margin-bottom: 1rem; }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Link {
            rel: "stylesheet",
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.cyan.min.css",
        }
        style {
            "{responsive_css}"
        }
        LoadedApp {
            app_state: AppState::new(DashboardPrefs::from_env()),
        }
    }
}

/// Provides the shared state and renders the active screen.
#[component]
fn LoadedApp(app_state: AppState) -> Element {
    dioxus_logger::tracing::info!("prefs: {:?}", app_state.prefs);

    // Provide the stable, non-reactive AppState.
    use_context_provider(|| app_state.clone());

    let prefs = app_state.prefs;
    let timeframe = use_signal(|| prefs.timeframe);
    let buy_amount = use_signal(|| prefs.buy_amount);
    let last_receipt = use_signal(|| None);
    use_context_provider(|| AppStateMut {
        timeframe,
        buy_amount,
        last_receipt,
    });

    let active_screen = use_signal(Screen::default);
    use_context_provider(|| active_screen);

    rsx! {
        div {
            class: "app-main-container",
            Container {
                header {
                    nav {
                        ul {
                            li { strong { "Trending" } }
                        }
                        ul {
                            li {
                                Tabs {
                                    active_screen,
                                }
                            }
                        }
                    }
                }
                div {
                    class: "content",
                    match active_screen() {
                        Screen::Dashboard => rsx! {
                            DashboardScreen {}
                        },
                        Screen::TwitterTrends => rsx! {
                            TwitterTrendsScreen {}
                        },
                        Screen::WalletActivity { highlight } => {
                            let key = highlight.clone().unwrap_or_default();
                            rsx! {
                                WalletActivityScreen {
                                    key: "{key}",
                                    highlight,
                                }
                            }
                        }
                        Screen::TokenDetail(symbol) => rsx! {
                            TokenDetailScreen {
                                key: "{symbol}",
                                symbol,
                            }
                        },
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_screens_select_their_tab() {
        let detail = Screen::TokenDetail("PEPE".to_string());
        assert!(detail.selects_tab(&Screen::Dashboard));
        assert!(!detail.selects_tab(&Screen::TwitterTrends));

        let highlighted = Screen::WalletActivity {
            highlight: Some("FROG".to_string()),
        };
        assert!(highlighted.selects_tab(&ALL_SCREENS[2]));
        assert!(!highlighted.selects_tab(&Screen::Dashboard));
    }

    #[test]
    fn test_tab_names() {
        let names: Vec<&str> = ALL_SCREENS.iter().map(Screen::name).collect();
        assert_eq!(names, ["Dashboard", "Twitter Trends", "Wallet Activity"]);
    }
}
