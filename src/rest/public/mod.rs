//! Public endpoints (no authentication required).

mod types;

pub use types::*;

use crate::error::P2pb2bError;
use crate::rest::RestClient;
use crate::rest::endpoints::public;

impl RestClient {
    /// List every tradable market.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use p2pb2b_api_client::rest::RestClient;
    /// # async fn example() -> Result<(), p2pb2b_api_client::P2pb2bError> {
    /// let client = RestClient::new();
    /// let markets = client.get_markets().await?;
    /// for market in &markets.result {
    ///     println!("{} ({} / {})", market.name, market.stock, market.money);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_markets(&self) -> Result<MarketsResponse, P2pb2bError> {
        self.public_get(public::MARKETS).await
    }

    /// Get ticker snapshots for all markets.
    pub async fn get_tickers(&self) -> Result<TickersResponse, P2pb2bError> {
        self.public_get(public::TICKERS).await
    }
}
