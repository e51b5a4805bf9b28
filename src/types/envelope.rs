//! Request and response envelopes shared by every endpoint.

use serde::{Deserialize, Serialize};

/// Fields the server requires in every authenticated request body.
///
/// The client flattens these next to the endpoint-specific fields, so the
/// wire shape is a single JSON object. `request` always carries the full
/// API path including the `/api/v2` prefix, whatever base URL the client
/// was built with; the server checks the literal path, not the URL.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestEnvelope {
    /// Full API path of the operation, e.g. `/api/v2/account/balances`.
    pub request: String,
    /// Millisecond Unix timestamp as a decimal string, fresh per request.
    pub nonce: String,
}

/// Shape of every decoded p2pb2b response.
///
/// The exchange reports application-level outcomes in `success` and
/// `message` while still answering HTTP 200, so the whole envelope is
/// handed to the caller rather than unwrapped.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    /// Whether the exchange accepted the operation.
    pub success: bool,
    /// Server-provided detail, usually empty on success.
    #[serde(default)]
    pub message: String,
    /// Endpoint-specific payload.
    pub result: T,
}
