//! Types for the account endpoints.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::ApiResponse;

/// Balance of a single currency.
///
/// The exchange reports amounts as JSON strings; they are decoded into
/// [`Decimal`] so trailing zeros and full precision survive.
#[derive(Debug, Clone, Deserialize)]
pub struct Balance {
    /// Funds available for trading.
    #[serde(with = "rust_decimal::serde::str")]
    pub available: Decimal,
    /// Funds locked in open orders.
    #[serde(with = "rust_decimal::serde::str")]
    pub freeze: Decimal,
}

/// Request body for the single-currency balance endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct CurrencyBalanceRequest {
    /// Currency ticker, e.g. `BTC`.
    pub currency: String,
}

impl CurrencyBalanceRequest {
    /// Request the balance of one currency.
    pub fn new(currency: impl Into<String>) -> Self {
        Self {
            currency: currency.into(),
        }
    }
}

/// Response mapping currency tickers to balances.
pub type BalancesResponse = ApiResponse<HashMap<String, Balance>>;

/// Response carrying a single currency's balance.
pub type CurrencyBalanceResponse = ApiResponse<Balance>;
