use std::env;
use std::num::NonZeroU64;
use std::num::NonZeroUsize;
use std::str::FromStr;
use std::time::Duration;

use dioxus_logger::tracing::warn;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

use crate::paginate::PageState;
use crate::timeframe::Timeframe;
use crate::trade::BuyAmount;
use crate::trade::ParseBuyAmountError;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum PrefsError {
    #[error("unknown timeframe {0:?}")]
    Timeframe(String),

    #[error("invalid buy amount {value:?}")]
    BuyAmount {
        value: String,
        #[source]
        source: ParseBuyAmountError,
    },

    #[error("{var} must be a positive whole number, got {value:?}")]
    PositiveInteger { var: &'static str, value: String },

    #[error("{var} must be true or false, got {value:?}")]
    Flag { var: &'static str, value: String },
}

/// Dashboard settings.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct DashboardPrefs {
    pub timeframe: Timeframe,
    pub buy_amount: BuyAmount,
    pub page_size: NonZeroUsize,
    /// Seconds between feed ticks. Zero is rejected when deserializing.
    pub refresh_secs: NonZeroU64,
    pub pause_on_hover: bool,
}

impl DashboardPrefs {
    pub const DEFAULT_REFRESH_SECS: NonZeroU64 = match NonZeroU64::new(2) {
        Some(secs) => secs,
        None => unreachable!(),
    };

    /// Values used when a variable is unset or malformed.
    pub fn builtin() -> Self {
        Self {
            timeframe: Timeframe::default(),
            buy_amount: BuyAmount::default(),
            page_size: PageState::DEFAULT_PAGE_SIZE,
            refresh_secs: Self::DEFAULT_REFRESH_SECS,
            pause_on_hover: true,
        }
    }

    /// Reads the prefs from environment variables.
    ///
    /// # Environment Variables
    /// - `TRENDING_TIMEFRAME`: "1m", "5m", "30m", "1h", "4h" or "24h".
    /// - `BUY_AMOUNT_SOL`: default quick-buy amount, e.g. "0.1".
    /// - `PAGE_SIZE`: rows per page.
    /// - `REFRESH_SECS`: seconds between feed ticks.
    /// - `PAUSE_ON_HOVER`: "true" or "false" (also "1" / "0").
    ///
    /// A malformed value is logged and replaced by its default.
    pub fn from_env() -> Self {
        Self::from_lookup(|var| env::var(var).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let builtin = Self::builtin();
        Self {
            timeframe: setting(&lookup, "TRENDING_TIMEFRAME", parse_timeframe, builtin.timeframe),
            buy_amount: setting(&lookup, "BUY_AMOUNT_SOL", parse_buy_amount, builtin.buy_amount),
            page_size: setting(
                &lookup,
                "PAGE_SIZE",
                |v| parse_positive("PAGE_SIZE", v),
                builtin.page_size,
            ),
            refresh_secs: setting(
                &lookup,
                "REFRESH_SECS",
                |v| parse_positive("REFRESH_SECS", v),
                builtin.refresh_secs,
            ),
            pause_on_hover: setting(
                &lookup,
                "PAUSE_ON_HOVER",
                |v| parse_flag("PAUSE_ON_HOVER", v),
                builtin.pause_on_hover,
            ),
        }
    }

    pub fn refresh_period(&self) -> Duration {
        Duration::from_secs(self.refresh_secs.get())
    }
}

impl Default for DashboardPrefs {
    fn default() -> Self {
        Self::from_env()
    }
}

fn setting<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    parse: impl Fn(&str) -> Result<T, PrefsError>,
    fallback: T,
) -> T {
    let Some(raw) = lookup(var) else {
        return fallback;
    };
    match parse(raw.trim()) {
        Ok(value) => value,
        Err(e) => {
            warn!("ignoring {var}: {e}");
            fallback
        }
    }
}

fn parse_timeframe(value: &str) -> Result<Timeframe, PrefsError> {
    Timeframe::from_str(value).map_err(|_| PrefsError::Timeframe(value.to_string()))
}

fn parse_buy_amount(value: &str) -> Result<BuyAmount, PrefsError> {
    BuyAmount::from_str(value).map_err(|source| PrefsError::BuyAmount {
        value: value.to_string(),
        source,
    })
}

fn parse_positive<T: FromStr>(var: &'static str, value: &str) -> Result<T, PrefsError> {
    value
        .parse::<T>()
        .map_err(|_| PrefsError::PositiveInteger {
            var,
            value: value.to_string(),
        })
}

fn parse_flag(var: &'static str, value: &str) -> Result<bool, PrefsError> {
    if value.eq_ignore_ascii_case("true") || value == "1" {
        Ok(true)
    } else if value.eq_ignore_ascii_case("false") || value == "0" {
        Ok(false)
    } else {
        Err(PrefsError::Flag {
            var,
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn prefs(vars: &[(&str, &str)]) -> DashboardPrefs {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        DashboardPrefs::from_lookup(|var| map.get(var).cloned())
    }

    #[test]
    fn test_unset_uses_builtin() {
        assert_eq!(prefs(&[]), DashboardPrefs::builtin());
    }

    #[test]
    fn test_reads_every_variable() {
        let p = prefs(&[
            ("TRENDING_TIMEFRAME", "1H"),
            ("BUY_AMOUNT_SOL", "0.5"),
            ("PAGE_SIZE", "25"),
            ("REFRESH_SECS", "5"),
            ("PAUSE_ON_HOVER", "false"),
        ]);
        assert_eq!(p.timeframe, Timeframe::OneHour);
        assert_eq!(p.buy_amount.sol(), 0.5);
        assert_eq!(p.page_size.get(), 25);
        assert_eq!(p.refresh_period(), Duration::from_secs(5));
        assert!(!p.pause_on_hover);
    }

    #[test]
    fn test_malformed_values_fall_back() {
        let p = prefs(&[
            ("TRENDING_TIMEFRAME", "2d"),
            ("BUY_AMOUNT_SOL", "-3"),
            ("PAGE_SIZE", "0"),
            ("REFRESH_SECS", "soon"),
            ("PAUSE_ON_HOVER", "maybe"),
        ]);
        assert_eq!(p, DashboardPrefs::builtin());
    }

    #[test]
    fn test_error_messages() {
        let err = parse_buy_amount("-3").unwrap_err();
        assert_eq!(
            err,
            PrefsError::BuyAmount {
                value: "-3".to_string(),
                source: ParseBuyAmountError::Negative
            }
        );
        assert_eq!(
            parse_positive::<NonZeroUsize>("PAGE_SIZE", "0").unwrap_err().to_string(),
            "PAGE_SIZE must be a positive whole number, got \"0\""
        );
    }

    #[test]
    fn test_zero_refresh_is_rejected_everywhere() {
        assert_eq!(prefs(&[("REFRESH_SECS", "0")]).refresh_period(), Duration::from_secs(2));

        let json = serde_json::to_string(&DashboardPrefs::builtin()).unwrap();
        let zeroed = json.replace("\"refresh_secs\":2", "\"refresh_secs\":0");
        assert_ne!(json, zeroed);
        assert!(serde_json::from_str::<DashboardPrefs>(&zeroed).is_err());

        let round_trip: DashboardPrefs = serde_json::from_str(&json).unwrap();
        assert_eq!(round_trip.refresh_period(), Duration::from_secs(2));
    }
}
