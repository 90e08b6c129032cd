use chrono::Utc;
use dioxus::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use trending::format::format_ago;
use trending::format::format_count;
use trending::format::format_percent;
use trending::mock::MockTwitterFeed;
use trending::models::TwitterField;
use trending::models::TwitterTrend;
use trending::ListView;
use trending::SortDirection;
use trending::SortState;

use super::trending_tokens::change_class;
use crate::app_state::AppState;
use crate::app_state_mut::AppStateMut;
use crate::components::action_link::ActionLink;
use crate::components::filter_panel::RangeFilter;
use crate::components::filter_panel::SearchBox;
use crate::components::list_view::Column;
use crate::components::list_view::TokenListView;
use crate::components::pico::Card;
use crate::components::timeframe_picker::TimeframePicker;
use crate::hooks::use_feed::use_feed;
use crate::Screen;

fn by_mentions(page_size: usize) -> ListView<TwitterTrend> {
    ListView::with_page_size(page_size).with_sort(SortState::by(TwitterField::Mentions, SortDirection::Descending))
}

fn trend_arrow(t: &TwitterTrend) -> &'static str {
    if t.trend.is_up() {
        "↗"
    } else if t.trend.is_down() {
        "↘"
    } else {
        "→"
    }
}

/// Top five hashtags, shown beside the trending table.
#[component]
pub fn TwitterTrendingWidget() -> Element {
    let app_state = use_context::<AppState>();
    let app_state_mut = use_context::<AppStateMut>();
    let view = use_signal(|| by_mentions(5));
    let paused = use_signal(|| false);

    use_feed(
        view,
        app_state_mut.timeframe,
        app_state.prefs.refresh_period(),
        paused,
        |timeframe| MockTwitterFeed::new(StdRng::from_entropy(), timeframe),
    );

    let columns = vec![
        Column::<TwitterTrend>::plain("Token", |t: &TwitterTrend| rsx! {
            strong { "{t.symbol}" }
        }),
        Column::<TwitterTrend>::plain("Tweets", |t: &TwitterTrend| rsx! { "{format_count(t.mentions)}" }).numeric(),
        Column::<TwitterTrend>::plain("Change", |t: &TwitterTrend| rsx! {
            span { class: change_class(t.change_pct), "{trend_arrow(t)} {format_percent(t.change_pct)}" }
        })
        .numeric(),
    ];

    rsx! {
        Card {
            title: "Twitter Trending",
            header_action: rsx! {
                ActionLink { to: Screen::TwitterTrends, "View all" }
            },
            TokenListView::<TwitterTrend> { view, columns, hide_pager: true }
        }
    }
}

#[component]
fn LatestTweet(trend: TwitterTrend) -> Element {
    let Some(tweet) = trend.latest_tweet else {
        return rsx! { small { class: "muted", "No recent tweets" } };
    };
    let ago = format_ago(tweet.posted_at, Utc::now());

    rsx! {
        div {
            class: "tweet",
            small {
                strong { "{tweet.username}" }
                " {tweet.handle} · {ago}"
            }
            p { style: "margin: 0.25rem 0;", "{tweet.content}" }
            small { class: "muted", "♥ {tweet.likes}  ⟲ {tweet.retweets}" }
        }
    }
}

fn columns() -> Vec<Column<TwitterTrend>> {
    vec![
        Column::<TwitterTrend>::sortable("#", TwitterField::Rank, |t| rsx! { "{t.rank}" }),
        Column::<TwitterTrend>::sortable("Hashtag", TwitterField::Hashtag, |t| rsx! {
            strong { "{t.hashtag}" }
            br {}
            small { "{t.name}" }
        }),
        Column::<TwitterTrend>::sortable("Mentions", TwitterField::Mentions, |t| rsx! { "{format_count(t.mentions)}" }).numeric(),
        Column::<TwitterTrend>::sortable("Change", TwitterField::Change, |t| rsx! {
            span { class: change_class(t.change_pct), "{trend_arrow(t)} {format_percent(t.change_pct)}" }
        })
        .numeric(),
        Column::<TwitterTrend>::plain("Latest tweet", |t| rsx! { LatestTweet { trend: t.clone() } }),
    ]
}

/// Every tracked hashtag with search, a mentions filter and paging.
#[component]
pub fn TwitterTrendsScreen() -> Element {
    let app_state = use_context::<AppState>();
    let app_state_mut = use_context::<AppStateMut>();
    let view = use_signal(|| by_mentions(app_state.prefs.page_size.get()));
    let paused = use_signal(|| false);

    use_feed(
        view,
        app_state_mut.timeframe,
        app_state.prefs.refresh_period(),
        paused,
        |timeframe| MockTwitterFeed::new(StdRng::from_entropy(), timeframe),
    );

    rsx! {
        Card {
            title: "Twitter Trends",
            header_action: rsx! {
                TimeframePicker { selected: app_state_mut.timeframe }
            },
            div {
                class: "list-toolbar",
                ActionLink { to: Screen::Dashboard, "← Dashboard" }
                SearchBox::<TwitterTrend> { view, placeholder: "Search hashtag or token" }
            }
            details {
                summary { "Filters" }
                RangeFilter::<TwitterTrend> { view, name: "mentions", label: "Mentions", field: TwitterField::Mentions }
            }
            TokenListView::<TwitterTrend> {
                view,
                columns: columns(),
                empty_title: "No trends for this timeframe",
            }
        }
    }
}
