//! Account endpoints (authentication required).

mod types;

pub use types::*;

use crate::error::P2pb2bError;
use crate::rest::RestClient;
use crate::rest::endpoints::account;

impl RestClient {
    /// Get the balances of every currency in the account.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use std::sync::Arc;
    /// # use p2pb2b_api_client::auth::StaticCredentials;
    /// # use p2pb2b_api_client::rest::RestClient;
    /// # async fn example() -> Result<(), p2pb2b_api_client::P2pb2bError> {
    /// # let client = RestClient::builder()
    /// #     .credentials(Arc::new(StaticCredentials::new("key", "secret")))
    /// #     .build();
    /// let balances = client.get_balances().await?;
    /// if let Some(btc) = balances.result.get("BTC") {
    ///     println!("BTC available: {}", btc.available);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn get_balances(&self) -> Result<BalancesResponse, P2pb2bError> {
        #[derive(serde::Serialize)]
        struct Empty {}
        self.private_post(account::BALANCES, &Empty {}).await
    }

    /// Get the balance of a single currency.
    pub async fn get_currency_balance(
        &self,
        request: &CurrencyBalanceRequest,
    ) -> Result<CurrencyBalanceResponse, P2pb2bError> {
        self.private_post(account::BALANCE, request).await
    }
}
