//! Types for the public endpoints.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Deserialize;
use time::OffsetDateTime;

use crate::types::ApiResponse;

/// A tradable market.
#[derive(Debug, Clone, Deserialize)]
pub struct Market {
    /// Market name, e.g. `ETH_BTC`.
    pub name: String,
    /// Base currency, the one being bought and sold.
    pub stock: String,
    /// Quote currency the market prices in.
    pub money: String,
    /// Decimal precision for each component of an order.
    pub precision: MarketPrecision,
    /// Order size and price limits.
    pub limits: MarketLimits,
}

/// Digits of precision for a market's amounts, prices and fees.
///
/// The exchange reports these as strings of digits, not numbers.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketPrecision {
    /// Quote currency precision.
    pub money: String,
    /// Base currency precision.
    pub stock: String,
    /// Fee precision.
    pub fee: String,
}

/// Order limits of a market.
#[derive(Debug, Clone, Deserialize)]
pub struct MarketLimits {
    /// Smallest order amount, in the base currency.
    #[serde(with = "rust_decimal::serde::str")]
    pub min_amount: Decimal,
    /// Largest order amount, in the base currency.
    #[serde(with = "rust_decimal::serde::str")]
    pub max_amount: Decimal,
    /// Increment between valid order amounts.
    #[serde(with = "rust_decimal::serde::str")]
    pub step_size: Decimal,
    /// Lowest accepted order price.
    #[serde(with = "rust_decimal::serde::str")]
    pub min_price: Decimal,
    /// Highest accepted order price.
    #[serde(with = "rust_decimal::serde::str")]
    pub max_price: Decimal,
    /// Increment between valid order prices.
    #[serde(with = "rust_decimal::serde::str")]
    pub tick_size: Decimal,
    /// Smallest order value, in the quote currency.
    #[serde(with = "rust_decimal::serde::str")]
    pub min_total: Decimal,
}

/// Point-in-time ticker for one market.
#[derive(Debug, Clone, Deserialize)]
pub struct TickerSnapshot {
    /// When the snapshot was taken.
    #[serde(with = "time::serde::timestamp")]
    pub at: OffsetDateTime,
    /// The ticker values.
    pub ticker: Ticker,
}

/// Ticker values over the last 24 hours.
#[derive(Debug, Clone, Deserialize)]
pub struct Ticker {
    /// Best bid price.
    #[serde(with = "rust_decimal::serde::str")]
    pub bid: Decimal,
    /// Best ask price.
    #[serde(with = "rust_decimal::serde::str")]
    pub ask: Decimal,
    /// Lowest trade price.
    #[serde(with = "rust_decimal::serde::str")]
    pub low: Decimal,
    /// Highest trade price.
    #[serde(with = "rust_decimal::serde::str")]
    pub high: Decimal,
    /// Price of the most recent trade.
    #[serde(with = "rust_decimal::serde::str")]
    pub last: Decimal,
    /// Volume traded, in the base currency.
    #[serde(with = "rust_decimal::serde::str")]
    pub vol: Decimal,
    /// Volume traded, in the quote currency.
    #[serde(with = "rust_decimal::serde::str")]
    pub deal: Decimal,
    /// Percentage price change; negative when the price fell.
    #[serde(with = "rust_decimal::serde::str")]
    pub change: Decimal,
}

/// Response listing every tradable market.
pub type MarketsResponse = ApiResponse<Vec<Market>>;

/// Response mapping market names to ticker snapshots.
pub type TickersResponse = ApiResponse<HashMap<String, TickerSnapshot>>;

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;

    #[test]
    fn ticker_snapshot_decodes_a_unix_timestamp() {
        let snapshot: TickerSnapshot = serde_json::from_str(
            r#"{
                "at": 1662387966,
                "ticker": {
                    "bid": "0.021", "ask": "0.022", "low": "0.02", "high": "0.023",
                    "last": "0.0215", "vol": "2392", "deal": "50.3", "change": "-1.2"
                }
            }"#,
        )
        .unwrap();
        assert_eq!(snapshot.at, datetime!(2022-09-05 14:26:06 UTC));
        assert_eq!(snapshot.ticker.last, "0.0215".parse::<Decimal>().unwrap());
        assert!(snapshot.ticker.change.is_sign_negative());
    }

    #[test]
    fn market_decodes_nested_precision_and_limits() {
        let market: Market = serde_json::from_str(
            r#"{
                "name": "ETH_BTC",
                "stock": "ETH",
                "money": "BTC",
                "precision": {"money": "6", "stock": "3", "fee": "4"},
                "limits": {
                    "min_amount": "0.001", "max_amount": "100000", "step_size": "0.001",
                    "min_price": "0.000001", "max_price": "100000", "tick_size": "0.000001",
                    "min_total": "0.0001"
                }
            }"#,
        )
        .unwrap();
        assert_eq!(market.name, "ETH_BTC");
        assert_eq!(market.precision.money, "6");
        assert_eq!(
            market.limits.tick_size,
            "0.000001".parse::<Decimal>().unwrap()
        );
    }
}
