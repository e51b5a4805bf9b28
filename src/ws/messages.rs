//! Outbound WebSocket request messages.

use serde::Serialize;
use time::OffsetDateTime;

/// A request sent over the p2pb2b WebSocket channel.
///
/// The server echoes `id` back in its reply, so callers can match
/// responses to requests. Ids are seeded from the Unix time in seconds;
/// requests built within the same second share an id, which the protocol
/// tolerates.
///
/// # Examples
///
/// ```rust
/// use p2pb2b_api_client::ws::WsRequest;
///
/// let subscribe = WsRequest::new(
///     "depth.subscribe",
///     vec!["ETH_BTC".to_string(), "50".to_string(), "0".to_string()],
/// );
/// let json = serde_json::to_string(&subscribe).unwrap();
/// assert!(json.contains(r#""method":"depth.subscribe""#));
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct WsRequest {
    /// Method to invoke, e.g. `depth.subscribe`.
    pub method: String,
    /// Positional parameters of the call.
    pub params: Vec<String>,
    /// Request id echoed back by the server.
    pub id: i64,
}

impl WsRequest {
    /// Build a request for an arbitrary method.
    pub fn new(method: impl Into<String>, params: Vec<String>) -> Self {
        Self {
            method: method.into(),
            params,
            id: OffsetDateTime::now_utc().unix_timestamp(),
        }
    }

    /// Build a `server.ping` keepalive request.
    pub fn ping() -> Self {
        Self::new("server.ping", Vec::new())
    }

    /// Build an unsubscribe request for a channel, e.g. `unsubscribe("depth")`
    /// stops a `depth.subscribe` subscription.
    pub fn unsubscribe(channel: &str) -> Self {
        Self::new(format!("{channel}.unsubscribe"), Vec::new())
    }
}
