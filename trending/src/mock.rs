//! Synthetic feeds that stand in for market data.
//!
//! Names, symbols, glyphs and links come from a catalogue embedded at compile
//! time. Every tick redraws the numbers around that catalogue, so all
//! randomness is confined to the `R: Rng` each feed owns. Tests pass a seeded
//! `StdRng` to get repeatable snapshots.
//!
//! The full-screen lists hold 5 to 8 rows, so paging shows up at the default
//! page size. Set `PAGE_SIZE` to see a whole list on one page.

use std::sync::LazyLock;

use chrono::Duration as ChronoDuration;
use chrono::Utc;
use dioxus_logger::tracing::debug;
use dioxus_logger::tracing::error;
use rand::Rng;
use serde::Deserialize;

use crate::feed::Feed;
use crate::models::Protocol;
use crate::models::SocialLinks;
use crate::models::Token;
use crate::models::TokenDetail;
use crate::models::TrackedWallet;
use crate::models::Trend;
use crate::models::Tweet;
use crate::models::TwitterTrend;
use crate::models::WalletActivity;
use crate::models::WalletBuy;
use crate::timeframe::Timeframe;

//=============================================================================
// Seed catalogue
//=============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedToken {
    pub symbol: String,
    pub name: String,
    pub logo: String,
    pub protocol: Protocol,
    pub address: String,
    #[serde(default)]
    pub socials: SocialLinks,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedTweet {
    pub username: String,
    pub handle: String,
    pub content: String,
    pub minutes_ago: i64,
    pub likes: u32,
    pub retweets: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedHashtag {
    pub hashtag: String,
    pub symbol: String,
    pub name: String,
    pub mentions: u64,
    pub change_pct: f64,
    #[serde(default)]
    pub tweet: Option<SeedTweet>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedActivity {
    pub name: String,
    pub symbol: String,
    pub buy_count: u32,
    pub total_usd: f64,
    pub total_sol: f64,
    pub wallet_count: u32,
    #[serde(default)]
    pub wallets: Vec<WalletBuy>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SeedWallet {
    pub name: String,
    pub address: String,
    pub labels: Vec<String>,
    pub last_active_mins: u32,
    pub value: f64,
    pub pnl_30d: f64,
    pub win_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct SeedCatalogue {
    #[serde(default)]
    pub tokens: Vec<SeedToken>,
    #[serde(default)]
    pub hashtags: Vec<SeedHashtag>,
    #[serde(default)]
    pub wallet_activity: Vec<SeedActivity>,
    #[serde(default)]
    pub tracked_wallets: Vec<SeedWallet>,
}

impl SeedCatalogue {
    /// Bare catalogue used when the embedded one cannot be read.
    fn fallback() -> Self {
        Self {
            tokens: vec![SeedToken {
                symbol: "SOL".to_string(),
                name: "Wrapped SOL".to_string(),
                logo: "◎".to_string(),
                protocol: Protocol::Raydium,
                address: "So11111111111111111111111111111111111111112".to_string(),
                socials: SocialLinks::default(),
            }],
            hashtags: vec![SeedHashtag {
                hashtag: "#SOL".to_string(),
                symbol: "SOL".to_string(),
                name: "Solana".to_string(),
                mentions: 1000,
                change_pct: 0.0,
                tweet: None,
            }],
            wallet_activity: Vec::new(),
            tracked_wallets: Vec::new(),
        }
    }

    pub fn token(&self, symbol: &str) -> Option<&SeedToken> {
        self.tokens
            .iter()
            .find(|t| t.symbol.eq_ignore_ascii_case(symbol))
    }
}

static SEED_JSON: &str = include_str!("../assets/seed_catalogue.json");

// parsed once, on first use
static SEED_CATALOGUE: LazyLock<SeedCatalogue> = LazyLock::new(|| parse_catalogue(SEED_JSON));

pub fn catalogue() -> &'static SeedCatalogue {
    &SEED_CATALOGUE
}

fn parse_catalogue(json: &str) -> SeedCatalogue {
    match serde_json::from_str::<SeedCatalogue>(json) {
        Ok(catalogue) => {
            debug!(
                "loaded seed catalogue: {} tokens, {} hashtags, {} activities, {} wallets",
                catalogue.tokens.len(),
                catalogue.hashtags.len(),
                catalogue.wallet_activity.len(),
                catalogue.tracked_wallets.len()
            );
            catalogue
        }
        Err(e) => {
            error!("failed to parse seed catalogue, using fallback: {e}");
            SeedCatalogue::fallback()
        }
    }
}

//=============================================================================
// Helpers
//=============================================================================

/// `base` moved by up to `pct` percent in either direction.
fn jitter<R: Rng>(rng: &mut R, base: f64, pct: f64) -> f64 {
    base * (1.0 + rng.gen_range(-pct..=pct) / 100.0)
}

fn scaled(value: f64, scale: f64) -> u64 {
    (value * scale).round().max(0.0) as u64
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

//=============================================================================
// Trending tokens
//=============================================================================

/// Fresh market numbers for every catalogue token on each tick.
pub struct MockTokenFeed<R> {
    rng: R,
    timeframe: Timeframe,
    seeds: &'static [SeedToken],
}

impl<R: Rng> MockTokenFeed<R> {
    pub fn new(rng: R, timeframe: Timeframe) -> Self {
        Self {
            rng,
            timeframe,
            seeds: &catalogue().tokens,
        }
    }

    pub fn set_timeframe(&mut self, timeframe: Timeframe) {
        self.timeframe = timeframe;
    }

    fn token(&mut self, index: usize, seed: &SeedToken) -> Token {
        let scale = self.timeframe.activity_scale();
        let rng = &mut self.rng;

        let price = rng.gen::<f64>() * 10.0;
        let change_24h = (rng.gen::<f64>() - 0.5) * 20.0;
        let volume = rng.gen::<f64>() * 1_000_000.0 * scale;
        let market_cap = rng.gen::<f64>() * 100_000_000.0;
        let liquidity = market_cap * rng.gen_range(0.02..0.15);
        let holders = rng.gen_range(0..50_000);
        let top10_holder_pct = rng.gen_range(5.0..60.0);
        let buy_txns = scaled(rng.gen_range(100.0..5_000.0), scale);
        let sell_txns = scaled(rng.gen_range(100.0..4_000.0), scale);
        let tweets = scaled(rng.gen_range(0.0..1_000.0), scale);
        let dex_paid = rng.gen_bool(0.5);

        Token {
            id: format!("{}-{}", seed.symbol, index),
            symbol: seed.symbol.clone(),
            name: seed.name.clone(),
            logo: seed.logo.clone(),
            protocol: seed.protocol,
            address: seed.address.clone(),
            price,
            change_24h,
            volume,
            market_cap,
            liquidity,
            holders,
            top10_holder_pct,
            transactions: buy_txns + sell_txns,
            buy_txns,
            sell_txns,
            tweets,
            trend: Trend::from_change(change_24h),
            dex_paid,
            socials: seed.socials.clone(),
        }
    }
}

impl<R: Rng> Feed for MockTokenFeed<R> {
    type Item = Token;

    fn produce(&mut self) -> Vec<Token> {
        let seeds = self.seeds;
        seeds
            .iter()
            .enumerate()
            .map(|(i, seed)| self.token(i, seed))
            .collect()
    }
}

//=============================================================================
// Twitter trends
//=============================================================================

/// Mention counts drift around the catalogue values. Ranks follow mentions.
pub struct MockTwitterFeed<R> {
    rng: R,
    timeframe: Timeframe,
    seeds: &'static [SeedHashtag],
}

impl<R: Rng> MockTwitterFeed<R> {
    pub fn new(rng: R, timeframe: Timeframe) -> Self {
        Self {
            rng,
            timeframe,
            seeds: &catalogue().hashtags,
        }
    }

    pub fn set_timeframe(&mut self, timeframe: Timeframe) {
        self.timeframe = timeframe;
    }
}

impl<R: Rng> Feed for MockTwitterFeed<R> {
    type Item = TwitterTrend;

    fn produce(&mut self) -> Vec<TwitterTrend> {
        let scale = self.timeframe.activity_scale();
        let now = Utc::now();

        let mut trends: Vec<TwitterTrend> = self
            .seeds
            .iter()
            .enumerate()
            .map(|(i, seed)| {
                let mentions = scaled(jitter(&mut self.rng, seed.mentions as f64, 10.0), scale);
                let change_pct = round_to(seed.change_pct + self.rng.gen_range(-3.0..=3.0), 1);
                let latest_tweet = seed.tweet.as_ref().map(|t| Tweet {
                    id: format!("tweet-{}", i + 1),
                    username: t.username.clone(),
                    handle: t.handle.clone(),
                    content: t.content.clone(),
                    posted_at: now - ChronoDuration::minutes(t.minutes_ago),
                    likes: t.likes,
                    retweets: t.retweets,
                });
                TwitterTrend {
                    id: (i + 1).to_string(),
                    rank: 0,
                    hashtag: seed.hashtag.clone(),
                    symbol: seed.symbol.clone(),
                    name: seed.name.clone(),
                    mentions,
                    change_pct,
                    trend: Trend::from_change(change_pct),
                    latest_tweet,
                }
            })
            .collect();

        trends.sort_by(|a, b| b.mentions.cmp(&a.mentions));
        for (rank, trend) in trends.iter_mut().enumerate() {
            trend.rank = rank as u32 + 1;
        }
        trends
    }
}

//=============================================================================
// Tracked wallet buys
//=============================================================================

pub struct MockWalletActivityFeed<R> {
    rng: R,
    timeframe: Timeframe,
    seeds: &'static [SeedActivity],
}

impl<R: Rng> MockWalletActivityFeed<R> {
    pub fn new(rng: R, timeframe: Timeframe) -> Self {
        Self {
            rng,
            timeframe,
            seeds: &catalogue().wallet_activity,
        }
    }

    pub fn set_timeframe(&mut self, timeframe: Timeframe) {
        self.timeframe = timeframe;
    }
}

impl<R: Rng> Feed for MockWalletActivityFeed<R> {
    type Item = WalletActivity;

    fn produce(&mut self) -> Vec<WalletActivity> {
        let scale = self.timeframe.activity_scale();

        self.seeds
            .iter()
            .enumerate()
            .map(|(i, seed)| {
                let usd_factor = jitter(&mut self.rng, scale, 5.0);
                let buy_count = scaled(jitter(&mut self.rng, seed.buy_count as f64, 8.0), scale).max(1);
                let wallet_count = scaled(seed.wallet_count as f64, scale.sqrt()).max(1);
                let wallets = seed
                    .wallets
                    .iter()
                    .map(|w| WalletBuy {
                        amount_usd: (w.amount_usd * usd_factor).round(),
                        ..w.clone()
                    })
                    .collect();

                WalletActivity::new(
                    (i + 1).to_string(),
                    &seed.name,
                    &seed.symbol,
                    buy_count as u32,
                    (seed.total_usd * usd_factor).round(),
                    round_to(seed.total_sol * usd_factor, 1),
                    wallet_count as u32,
                    wallets,
                )
            })
            .collect()
    }
}

//=============================================================================
// Wallet tracker
//=============================================================================

pub struct MockWalletTrackerFeed<R> {
    rng: R,
    seeds: &'static [SeedWallet],
}

impl<R: Rng> MockWalletTrackerFeed<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            seeds: &catalogue().tracked_wallets,
        }
    }
}

impl<R: Rng> Feed for MockWalletTrackerFeed<R> {
    type Item = TrackedWallet;

    fn produce(&mut self) -> Vec<TrackedWallet> {
        self.seeds
            .iter()
            .enumerate()
            .map(|(i, seed)| TrackedWallet {
                id: (i + 1).to_string(),
                name: seed.name.clone(),
                address: seed.address.clone(),
                labels: seed.labels.clone(),
                last_active_mins: seed.last_active_mins,
                value: jitter(&mut self.rng, seed.value, 3.0).round(),
                pnl_30d: round_to(jitter(&mut self.rng, seed.pnl_30d, 2.0), 1),
                win_rate: seed.win_rate,
            })
            .collect()
    }
}

//=============================================================================
// Token detail
//=============================================================================

/// Placeholder contract shown for tokens missing from the catalogue.
pub const UNKNOWN_CONTRACT: &str = "0x1234...5678";

/// Builds the detail screen data for `symbol`.
pub fn mock_token_detail<R: Rng>(symbol: &str, rng: &mut R) -> TokenDetail {
    let symbol = symbol.trim().to_uppercase();
    let seed = catalogue().token(&symbol);

    let name = match (symbol.as_str(), seed) {
        ("FROG", _) => "Frogolicious".to_string(),
        (_, Some(seed)) => seed.name.clone(),
        _ => format!("Token {symbol}"),
    };
    let contract_address = seed
        .map(|s| s.address.clone())
        .unwrap_or_else(|| UNKNOWN_CONTRACT.to_string());
    let socials = seed
        .map(|s| s.socials.clone())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| SocialLinks {
            twitter: Some("https://twitter.com/token".to_string()),
            telegram: Some("https://t.me/token".to_string()),
            ..Default::default()
        });

    let buy_txns = rng.gen_range(200..2_200);
    let sell_txns = rng.gen_range(200..1_700);

    TokenDetail {
        name,
        price: rng.gen::<f64>() * 0.01,
        price_change: (rng.gen::<f64>() - 0.5) * 1_000.0,
        market_cap: rng.gen_range(500_000.0..5_500_000.0),
        liquidity: rng.gen_range(30_000.0..230_000.0),
        volume: rng.gen_range(100_000.0..1_100_000.0),
        transactions: rng.gen_range(500..3_500),
        buy_txns,
        sell_txns,
        contract_address,
        socials,
        symbol,
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::filter;
    use crate::filter::FilterState;
    use crate::models::WalletActivityField;
    use crate::paginate::PageState;
    use crate::view::ListView;

    fn rng(seed: u64) -> StdRng {
        StdRng::seed_from_u64(seed)
    }

    #[test]
    fn test_embedded_catalogue_parses() {
        let c = catalogue();
        assert!(c.tokens.len() >= 5);
        assert_eq!(c.hashtags[0].hashtag, "#PEPE");
        assert_eq!(c.wallet_activity.len(), 7);
        assert_eq!(c.tracked_wallets.len(), 5);
        assert_eq!(c.token("pepe").map(|t| t.protocol), Some(Protocol::PumpFun));
    }

    #[test]
    fn test_broken_catalogue_falls_back() {
        let c = parse_catalogue("{ not json");
        assert_eq!(c.tokens.len(), 1);
        assert_eq!(c.tokens[0].symbol, "SOL");
    }

    #[test]
    fn test_token_feed_is_repeatable_for_a_seed() {
        let a = MockTokenFeed::new(rng(7), Timeframe::default()).produce();
        let b = MockTokenFeed::new(rng(7), Timeframe::default()).produce();
        assert_eq!(a, b);
    }

    #[test]
    fn test_token_feed_values_in_range() {
        let mut feed = MockTokenFeed::new(rng(1), Timeframe::FiveMinutes);
        for _ in 0..50 {
            let tokens = feed.produce();
            let ids: HashSet<&str> = tokens.iter().map(|t| t.id.as_str()).collect();
            assert_eq!(ids.len(), tokens.len());
            for t in &tokens {
                assert!((0.0..10.0).contains(&t.price));
                assert!((-10.0..=10.0).contains(&t.change_24h));
                assert!((0.0..1e6).contains(&t.volume));
                assert!((0.0..1e8).contains(&t.market_cap));
                assert!(t.liquidity <= t.market_cap);
                assert!(t.holders < 50_000);
                assert_eq!(t.transactions, t.buy_txns + t.sell_txns);
                assert_eq!(t.trend, Trend::from_change(t.change_24h));
            }
        }
    }

    #[test]
    fn test_longer_timeframe_scales_volume() {
        let short = MockTokenFeed::new(rng(3), Timeframe::FiveMinutes).produce();
        let long = MockTokenFeed::new(rng(3), Timeframe::OneDay).produce();
        let scale = Timeframe::OneDay.activity_scale();
        for (s, l) in short.iter().zip(&long) {
            assert_eq!(s.price, l.price);
            assert!((l.volume - s.volume * scale).abs() < 1e-6 * l.volume.max(1.0));
        }
    }

    #[test]
    fn test_twitter_ranks_follow_mentions() {
        let mut feed = MockTwitterFeed::new(rng(11), Timeframe::default());
        for _ in 0..20 {
            let trends = feed.produce();
            let ranks: Vec<u32> = trends.iter().map(|t| t.rank).collect();
            assert_eq!(ranks, (1..=trends.len() as u32).collect::<Vec<_>>());
            assert!(trends.windows(2).all(|w| w[0].mentions >= w[1].mentions));
        }
    }

    #[test]
    fn test_twitter_latest_tweet_is_in_the_past() {
        let trends = MockTwitterFeed::new(rng(2), Timeframe::default()).produce();
        let pepe = trends.iter().find(|t| t.symbol == "PEPE").unwrap();
        let tweet = pepe.latest_tweet.as_ref().unwrap();
        assert_eq!(tweet.handle, "@cryptotrader");
        assert!(tweet.posted_at < Utc::now());
        assert!(trends.iter().find(|t| t.symbol == "BONK").unwrap().latest_tweet.is_none());
    }

    #[test]
    fn test_wallet_activity_search_frog() {
        let activities = MockWalletActivityFeed::new(rng(5), Timeframe::default()).produce();
        let found = filter::apply(&activities, "frog", &FilterState::new());
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].token_name, "Frogolicious");
        assert_eq!(found[0].icon, 'F');
    }

    #[test]
    fn test_wallet_activity_highlight_moves_symbol_first() {
        let activities = MockWalletActivityFeed::new(rng(5), Timeframe::default()).produce();
        let view = ListView::default()
            .with_snapshot(activities)
            .sort_by(WalletActivityField::TotalUsd)
            .with_highlight(Some("lunar".to_string()));
        let page = view.derive();
        assert_eq!(page.items[0].token_symbol, "LUNAR");
        assert!(view.is_highlighted(&page.items[0]));
    }

    #[test]
    fn test_full_screens_page_at_default_size() {
        let trends = MockTwitterFeed::new(rng(1), Timeframe::default()).produce();
        let page = ListView::default().with_snapshot(trends).next_page().derive();
        assert_eq!(page.items.len(), 8 - PageState::DEFAULT_PAGE_SIZE.get());
        assert_eq!(page.total_pages, 2);

        let activities = MockWalletActivityFeed::new(rng(1), Timeframe::default()).produce();
        let page = ListView::default().with_snapshot(activities).derive();
        assert_eq!(page.items.len(), PageState::DEFAULT_PAGE_SIZE.get());
        assert!(page.has_next());
    }

    #[test]
    fn test_wallet_tracker_keeps_labels() {
        let wallets = MockWalletTrackerFeed::new(rng(8)).produce();
        assert_eq!(wallets.len(), 5);
        assert_eq!(wallets[0].labels, vec!["Sniper", "High Profit"]);
        assert!(wallets[3].pnl_30d < 0.0);
    }

    #[test]
    fn test_token_detail_names() {
        let mut rng = rng(4);
        let frog = mock_token_detail("frog", &mut rng);
        assert_eq!(frog.name, "Frogolicious");
        assert_eq!(frog.symbol, "FROG");

        let unknown = mock_token_detail("ZZZ", &mut rng);
        assert_eq!(unknown.name, "Token ZZZ");
        assert_eq!(unknown.contract_address, UNKNOWN_CONTRACT);
        assert!(unknown.socials.twitter.is_some());

        for _ in 0..100 {
            let d = mock_token_detail("PEPE", &mut rng);
            assert!((0.0..0.01).contains(&d.price));
            assert!((500_000.0..5_500_000.0).contains(&d.market_cap));
            assert!((200..2_200).contains(&d.buy_txns));
        }
    }
}
