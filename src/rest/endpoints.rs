//! p2pb2b API endpoint constants.

/// Base URL for the p2pb2b REST API.
pub const P2PB2B_BASE_URL: &str = "https://api.p2pb2b.com/api/v2";

/// URL of the p2pb2b WebSocket API.
pub const P2PB2B_WS_URL: &str = "wss://apiws.p2pb2b.com/";

/// Path prefix the server expects in the request envelope's `request` field.
pub(crate) const REQUEST_PATH_PREFIX: &str = "/api/v2";

/// Account endpoints (authentication required).
pub mod account {
    /// Balances of every currency in the account.
    pub const BALANCES: &str = "/account/balances";
    /// Balance of a single currency.
    pub const BALANCE: &str = "/account/balance";
}

/// Public endpoints (no authentication required).
pub mod public {
    /// List of tradable markets.
    pub const MARKETS: &str = "/public/markets";
    /// Ticker snapshots for every market.
    pub const TICKERS: &str = "/public/tickers";
}
