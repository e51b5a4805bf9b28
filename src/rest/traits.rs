//! Trait definitions for the p2pb2b REST API client.

use std::future::Future;

use crate::error::P2pb2bError;
use crate::rest::account::{BalancesResponse, CurrencyBalanceRequest, CurrencyBalanceResponse};
use crate::rest::public::{MarketsResponse, TickersResponse};

/// The operations of the p2pb2b REST API.
///
/// [`RestClient`](crate::rest::RestClient) is the provided implementation;
/// the trait exists so application code can depend on the operations and
/// substitute a fake in tests.
pub trait P2pb2bClient: Send + Sync {
    /// List every tradable market.
    fn get_markets(&self) -> impl Future<Output = Result<MarketsResponse, P2pb2bError>> + Send;

    /// Get ticker snapshots for all markets.
    fn get_tickers(&self) -> impl Future<Output = Result<TickersResponse, P2pb2bError>> + Send;

    /// Get the balances of every currency in the account.
    fn get_balances(&self) -> impl Future<Output = Result<BalancesResponse, P2pb2bError>> + Send;

    /// Get the balance of a single currency.
    fn get_currency_balance(
        &self,
        request: &CurrencyBalanceRequest,
    ) -> impl Future<Output = Result<CurrencyBalanceResponse, P2pb2bError>> + Send;
}

/// [`P2pb2bClient`] with plain `async fn` signatures.
///
/// Implemented for every [`P2pb2bClient`], so generic code that does not
/// need to name the returned futures can take `impl P2pb2bClientExt` and
/// call the operations directly.
#[allow(async_fn_in_trait)]
pub trait P2pb2bClientExt: Send + Sync {
    /// List every tradable market.
    async fn get_markets(&self) -> Result<MarketsResponse, P2pb2bError>;

    /// Get ticker snapshots for all markets.
    async fn get_tickers(&self) -> Result<TickersResponse, P2pb2bError>;

    /// Get the balances of every currency in the account.
    async fn get_balances(&self) -> Result<BalancesResponse, P2pb2bError>;

    /// Get the balance of a single currency.
    async fn get_currency_balance(
        &self,
        request: &CurrencyBalanceRequest,
    ) -> Result<CurrencyBalanceResponse, P2pb2bError>;
}

impl<T: P2pb2bClient> P2pb2bClientExt for T {
    async fn get_markets(&self) -> Result<MarketsResponse, P2pb2bError> {
        P2pb2bClient::get_markets(self).await
    }

    async fn get_tickers(&self) -> Result<TickersResponse, P2pb2bError> {
        P2pb2bClient::get_tickers(self).await
    }

    async fn get_balances(&self) -> Result<BalancesResponse, P2pb2bError> {
        P2pb2bClient::get_balances(self).await
    }

    async fn get_currency_balance(
        &self,
        request: &CurrencyBalanceRequest,
    ) -> Result<CurrencyBalanceResponse, P2pb2bError> {
        P2pb2bClient::get_currency_balance(self, request).await
    }
}
