//! The records shown on the dashboard.

use chrono::DateTime;
use chrono::Utc;
use serde::Deserialize;
use serde::Serialize;

use crate::entity::FieldValue;
use crate::entity::ListEntity;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumIs)]
pub enum Trend {
    Up,
    Down,
    #[default]
    Stable,
}

impl Trend {
    pub fn from_change(change_pct: f64) -> Self {
        if change_pct > 0.0 {
            Self::Up
        } else if change_pct < 0.0 {
            Self::Down
        } else {
            Self::Stable
        }
    }
}

/// Launchpad or DEX a token trades on.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::Display,
)]
#[strum(ascii_case_insensitive)]
pub enum Protocol {
    #[strum(serialize = "Pump.fun")]
    PumpFun,
    Raydium,
    Meteora,
    Moonshot,
    Orca,
}

impl Protocol {
    pub fn label(&self) -> &'static str {
        self.into()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default)]
    pub discord: Option<String>,
    #[serde(default)]
    pub telegram: Option<String>,
    #[serde(default)]
    pub twitter: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
}

impl SocialLinks {
    /// Present links as `(platform, url)` pairs in display order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        [
            ("website", &self.website),
            ("twitter", &self.twitter),
            ("telegram", &self.telegram),
            ("discord", &self.discord),
        ]
        .into_iter()
        .filter_map(|(platform, url)| url.as_deref().map(|u| (platform, u)))
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }
}

//=============================================================================
// Trending tokens
//=============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub logo: String,
    pub protocol: Protocol,
    pub address: String,
    pub price: f64,
    pub change_24h: f64,
    pub volume: f64,
    pub market_cap: f64,
    pub liquidity: f64,
    pub holders: u64,
    /// Share of supply held by the ten largest holders, in percent.
    pub top10_holder_pct: f64,
    pub transactions: u64,
    pub buy_txns: u64,
    pub sell_txns: u64,
    pub tweets: u64,
    pub trend: Trend,
    pub dex_paid: bool,
    pub socials: SocialLinks,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenField {
    Name,
    Symbol,
    Address,
    Protocol,
    Price,
    Change24h,
    Volume,
    MarketCap,
    Liquidity,
    Holders,
    Top10HolderPct,
    Transactions,
    Tweets,
    DexPaid,
}

impl ListEntity for Token {
    type Field = TokenField;

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, field: TokenField) -> FieldValue<'_> {
        match field {
            TokenField::Name => FieldValue::Text(&self.name),
            TokenField::Symbol => FieldValue::Text(&self.symbol),
            TokenField::Address => FieldValue::Text(&self.address),
            TokenField::Protocol => FieldValue::Text(self.protocol.label()),
            TokenField::Price => FieldValue::Number(self.price),
            TokenField::Change24h => FieldValue::Number(self.change_24h),
            TokenField::Volume => FieldValue::Number(self.volume),
            TokenField::MarketCap => FieldValue::Number(self.market_cap),
            TokenField::Liquidity => FieldValue::Number(self.liquidity),
            TokenField::Holders => FieldValue::Number(self.holders as f64),
            TokenField::Top10HolderPct => FieldValue::Number(self.top10_holder_pct),
            TokenField::Transactions => FieldValue::Number(self.transactions as f64),
            TokenField::Tweets => FieldValue::Number(self.tweets as f64),
            TokenField::DexPaid => FieldValue::Flag(self.dex_paid),
        }
    }

    fn search_fields() -> &'static [TokenField] {
        &[TokenField::Name, TokenField::Symbol, TokenField::Address]
    }

    fn keyword_fields() -> &'static [TokenField] {
        &[TokenField::Name, TokenField::Symbol]
    }

    fn highlight_fields() -> &'static [TokenField] {
        &[TokenField::Symbol]
    }
}

//=============================================================================
// Twitter trends
//=============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tweet {
    pub id: String,
    pub username: String,
    pub handle: String,
    pub content: String,
    pub posted_at: DateTime<Utc>,
    pub likes: u32,
    pub retweets: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TwitterTrend {
    pub id: String,
    pub rank: u32,
    pub hashtag: String,
    pub symbol: String,
    pub name: String,
    pub mentions: u64,
    pub change_pct: f64,
    pub trend: Trend,
    pub latest_tweet: Option<Tweet>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TwitterField {
    Rank,
    Hashtag,
    Symbol,
    Name,
    Mentions,
    Change,
}

impl ListEntity for TwitterTrend {
    type Field = TwitterField;

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, field: TwitterField) -> FieldValue<'_> {
        match field {
            TwitterField::Rank => FieldValue::Number(self.rank as f64),
            TwitterField::Hashtag => FieldValue::Text(&self.hashtag),
            TwitterField::Symbol => FieldValue::Text(&self.symbol),
            TwitterField::Name => FieldValue::Text(&self.name),
            TwitterField::Mentions => FieldValue::Number(self.mentions as f64),
            TwitterField::Change => FieldValue::Number(self.change_pct),
        }
    }

    fn search_fields() -> &'static [TwitterField] {
        &[TwitterField::Name, TwitterField::Symbol, TwitterField::Hashtag]
    }

    fn keyword_fields() -> &'static [TwitterField] {
        &[TwitterField::Name, TwitterField::Symbol]
    }

    fn highlight_fields() -> &'static [TwitterField] {
        &[TwitterField::Symbol]
    }
}

//=============================================================================
// Tracked wallet buys, grouped per token
//=============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletBuy {
    pub address: String,
    pub label: String,
    pub amount_usd: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletActivity {
    pub id: String,
    pub icon: char,
    pub token_name: String,
    pub token_symbol: String,
    pub buy_count: u32,
    pub total_usd: f64,
    pub total_sol: f64,
    pub wallet_count: u32,
    pub wallets: Vec<WalletBuy>,
    /// Distinct labels of `wallets`, kept alongside for categorical filtering.
    labels: Vec<String>,
}

impl WalletActivity {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        token_name: impl Into<String>,
        token_symbol: impl Into<String>,
        buy_count: u32,
        total_usd: f64,
        total_sol: f64,
        wallet_count: u32,
        wallets: Vec<WalletBuy>,
    ) -> Self {
        let token_symbol = token_symbol.into();
        let icon = token_symbol.chars().next().unwrap_or('?').to_ascii_uppercase();
        let mut labels: Vec<String> = wallets.iter().map(|w| w.label.clone()).collect();
        labels.sort();
        labels.dedup();
        Self {
            id: id.into(),
            icon,
            token_name: token_name.into(),
            token_symbol,
            buy_count,
            total_usd,
            total_sol,
            wallet_count,
            wallets,
            labels,
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WalletActivityField {
    TokenName,
    TokenSymbol,
    BuyCount,
    TotalUsd,
    TotalSol,
    WalletCount,
    Labels,
}

impl ListEntity for WalletActivity {
    type Field = WalletActivityField;

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, field: WalletActivityField) -> FieldValue<'_> {
        match field {
            WalletActivityField::TokenName => FieldValue::Text(&self.token_name),
            WalletActivityField::TokenSymbol => FieldValue::Text(&self.token_symbol),
            WalletActivityField::BuyCount => FieldValue::Number(self.buy_count as f64),
            WalletActivityField::TotalUsd => FieldValue::Number(self.total_usd),
            WalletActivityField::TotalSol => FieldValue::Number(self.total_sol),
            WalletActivityField::WalletCount => FieldValue::Number(self.wallet_count as f64),
            WalletActivityField::Labels => FieldValue::Tags(&self.labels),
        }
    }

    fn search_fields() -> &'static [WalletActivityField] {
        &[WalletActivityField::TokenName, WalletActivityField::TokenSymbol]
    }

    fn keyword_fields() -> &'static [WalletActivityField] {
        &[WalletActivityField::TokenName, WalletActivityField::TokenSymbol]
    }

    fn highlight_fields() -> &'static [WalletActivityField] {
        &[WalletActivityField::TokenSymbol]
    }
}

//=============================================================================
// Wallets in the tracker
//=============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackedWallet {
    pub id: String,
    pub name: String,
    pub address: String,
    pub labels: Vec<String>,
    pub last_active_mins: u32,
    pub value: f64,
    pub pnl_30d: f64,
    pub win_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WalletField {
    Name,
    Address,
    Labels,
    LastActive,
    Value,
    Pnl,
    WinRate,
}

impl ListEntity for TrackedWallet {
    type Field = WalletField;

    fn id(&self) -> &str {
        &self.id
    }

    fn field(&self, field: WalletField) -> FieldValue<'_> {
        match field {
            WalletField::Name => FieldValue::Text(&self.name),
            WalletField::Address => FieldValue::Text(&self.address),
            WalletField::Labels => FieldValue::Tags(&self.labels),
            WalletField::LastActive => FieldValue::Number(self.last_active_mins as f64),
            WalletField::Value => FieldValue::Number(self.value),
            WalletField::Pnl => FieldValue::Number(self.pnl_30d),
            WalletField::WinRate => FieldValue::Number(self.win_rate),
        }
    }

    // the tracker's search box also matches labels
    fn search_fields() -> &'static [WalletField] {
        &[WalletField::Name, WalletField::Address, WalletField::Labels]
    }

    fn keyword_fields() -> &'static [WalletField] {
        &[WalletField::Name, WalletField::Labels]
    }

    fn highlight_fields() -> &'static [WalletField] {
        &[WalletField::Labels]
    }
}

//=============================================================================
// Token detail screen
//=============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenDetail {
    pub name: String,
    pub symbol: String,
    pub price: f64,
    pub price_change: f64,
    pub market_cap: f64,
    pub liquidity: f64,
    pub volume: f64,
    pub transactions: u64,
    pub buy_txns: u64,
    pub sell_txns: u64,
    pub contract_address: String,
    pub socials: SocialLinks,
}

impl TokenDetail {
    /// Buys as a share of all buys and sells, in percent.
    pub fn buy_ratio_pct(&self) -> f64 {
        let total = self.buy_txns + self.sell_txns;
        if total == 0 {
            return 0.0;
        }
        self.buy_txns as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter;
    use crate::filter::Constraint;
    use crate::filter::FilterState;

    fn wallet(id: &str, name: &str, labels: &[&str]) -> TrackedWallet {
        TrackedWallet {
            id: id.to_string(),
            name: name.to_string(),
            address: format!("{id}xAbC"),
            labels: labels.iter().map(|l| l.to_string()).collect(),
            last_active_mins: 1,
            value: 100.0,
            pnl_30d: 1.0,
            win_rate: 50.0,
        }
    }

    #[test]
    fn test_wallet_search_matches_labels() {
        let wallets = vec![
            wallet("1", "HIGH PROFIT", &["Sniper", "High Profit"]),
            wallet("2", "STABLE EARN", &["Whale", "Stable"]),
        ];
        let out = filter::apply(&wallets, "whale", &FilterState::new());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "2");
    }

    #[test]
    fn test_wallet_activity_labels_are_distinct() {
        let buys = vec![
            WalletBuy { address: "a".into(), label: "Whale".into(), amount_usd: 1.0 },
            WalletBuy { address: "b".into(), label: "Sniper".into(), amount_usd: 1.0 },
            WalletBuy { address: "c".into(), label: "Whale".into(), amount_usd: 1.0 },
        ];
        let activity = WalletActivity::new("1", "frogolicious", "FROG", 3, 3.0, 0.1, 3, buys);
        assert_eq!(activity.labels(), &["Sniper".to_string(), "Whale".to_string()]);
        assert_eq!(activity.icon, 'F');

        let filters = FilterState::new()
            .with("labels", Constraint::one_of(WalletActivityField::Labels, ["sniper"]));
        assert_eq!(filter::apply(&[activity], "", &filters).len(), 1);
    }

    #[test]
    fn test_social_links_skip_missing() {
        let links = SocialLinks {
            twitter: Some("https://twitter.com/pepe".into()),
            website: Some("https://pepe.com".into()),
            ..Default::default()
        };
        let platforms: Vec<&str> = links.iter().map(|(p, _)| p).collect();
        assert_eq!(platforms, vec!["website", "twitter"]);
        assert!(SocialLinks::default().is_empty());
    }

    #[test]
    fn test_trend_from_change() {
        assert!(Trend::from_change(1.5).is_up());
        assert!(Trend::from_change(-0.1).is_down());
        assert!(Trend::from_change(0.0).is_stable());
    }

    #[test]
    fn test_buy_ratio() {
        let detail = TokenDetail {
            name: "Frogolicious".into(),
            symbol: "FROG".into(),
            price: 0.001,
            price_change: 12.0,
            market_cap: 1.0,
            liquidity: 1.0,
            volume: 1.0,
            transactions: 400,
            buy_txns: 300,
            sell_txns: 100,
            contract_address: "0x1234...5678".into(),
            socials: SocialLinks::default(),
        };
        assert_eq!(detail.buy_ratio_pct(), 75.0);
    }
}
