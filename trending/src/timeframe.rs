//! The lookback window the dashboard statistics are computed over.

use std::time::Duration;

use serde::Deserialize;
use serde::Serialize;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::Display,
)]
#[strum(ascii_case_insensitive)]
pub enum Timeframe {
    #[strum(serialize = "1m")]
    OneMinute,
    #[default]
    #[strum(serialize = "5m")]
    FiveMinutes,
    #[strum(serialize = "30m")]
    ThirtyMinutes,
    #[strum(serialize = "1h")]
    OneHour,
    #[strum(serialize = "4h")]
    FourHours,
    #[strum(serialize = "24h")]
    OneDay,
}

impl Timeframe {
    /// Short label used on the timeframe picker ("5m").
    pub fn label(&self) -> &'static str {
        self.into()
    }

    pub fn window(&self) -> Duration {
        let minutes = match self {
            Self::OneMinute => 1,
            Self::FiveMinutes => 5,
            Self::ThirtyMinutes => 30,
            Self::OneHour => 60,
            Self::FourHours => 240,
            Self::OneDay => 1440,
        };
        Duration::from_secs(minutes * 60)
    }

    /// How much more activity a window holds compared to the 5 minute default.
    /// Mock feeds scale counts and volumes by this.
    pub fn activity_scale(&self) -> f64 {
        (self.window().as_secs_f64() / Self::FiveMinutes.window().as_secs_f64()).sqrt()
    }
}
