//! Quick-buy orders. Nothing is executed: an order is logged and acknowledged.

use std::fmt;
use std::str::FromStr;

use dioxus_logger::tracing::info;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

/// An error that can occur when parsing text into a [`BuyAmount`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseBuyAmountError {
    #[error("invalid buy amount format")]
    InvalidFormat,

    #[error("buy amount cannot be negative")]
    Negative,
}

/// An amount of SOL to spend on a quick buy.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct BuyAmount(f64);

impl BuyAmount {
    pub const DEFAULT: BuyAmount = BuyAmount(0.1);

    pub fn sol(&self) -> f64 {
        self.0
    }
}

impl Default for BuyAmount {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl FromStr for BuyAmount {
    type Err = ParseBuyAmountError;

    /// Accepts plain decimals such as `"0.1"`, `".5"` or `"2"`.
    ///
    /// ```
    /// use trending::trade::{BuyAmount, ParseBuyAmountError};
    /// assert_eq!("0.25".parse::<BuyAmount>().unwrap().sol(), 0.25);
    /// assert_eq!("-1".parse::<BuyAmount>(), Err(ParseBuyAmountError::Negative));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_suffix("SOL").or_else(|| s.strip_suffix("sol")).unwrap_or(s).trim();
        if s.is_empty() || !s.chars().all(|c| c.is_ascii_digit() || c == '.' || c == '-') {
            return Err(ParseBuyAmountError::InvalidFormat);
        }

        let value: f64 = s.parse().map_err(|_| ParseBuyAmountError::InvalidFormat)?;
        if !value.is_finite() {
            return Err(ParseBuyAmountError::InvalidFormat);
        }
        if value < 0.0 {
            return Err(ParseBuyAmountError::Negative);
        }
        Ok(Self(value))
    }
}

impl fmt::Display for BuyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} SOL", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuyOrder {
    pub symbol: String,
    pub amount: BuyAmount,
}

impl BuyOrder {
    pub fn new(symbol: impl Into<String>, amount: BuyAmount) -> Self {
        Self {
            symbol: symbol.into(),
            amount,
        }
    }
}

/// Records the order and returns the acknowledgement shown to the user.
pub fn submit_buy(order: &BuyOrder) -> String {
    info!(symbol = %order.symbol, sol = order.amount.sol(), "quick buy submitted");
    format!("Buying {} of {}", order.amount, order.symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_buy_amount() {
        assert_eq!(BuyAmount::from_str("0.1").unwrap(), BuyAmount::DEFAULT);
        assert_eq!(BuyAmount::from_str(" 2 ").unwrap().sol(), 2.0);
        assert_eq!(BuyAmount::from_str(".5").unwrap().sol(), 0.5);
        assert_eq!(BuyAmount::from_str("1.5 SOL").unwrap().sol(), 1.5);
        assert_eq!(BuyAmount::from_str("0").unwrap().sol(), 0.0);
    }

    #[test]
    fn test_parse_buy_amount_errors() {
        assert_eq!(BuyAmount::from_str(""), Err(ParseBuyAmountError::InvalidFormat));
        assert_eq!(BuyAmount::from_str("abc"), Err(ParseBuyAmountError::InvalidFormat));
        assert_eq!(BuyAmount::from_str("1.2.3"), Err(ParseBuyAmountError::InvalidFormat));
        assert_eq!(BuyAmount::from_str("inf"), Err(ParseBuyAmountError::InvalidFormat));
        assert_eq!(BuyAmount::from_str("-0.5"), Err(ParseBuyAmountError::Negative));
    }

    #[test]
    fn test_submit_buy_receipt() {
        let order = BuyOrder::new("PEPE", BuyAmount::from_str("0.1").unwrap());
        assert_eq!(submit_buy(&order), "Buying 0.1 SOL of PEPE");
    }
}
