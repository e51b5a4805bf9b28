//! Error types for the p2pb2b client library.

use thiserror::Error;

/// The main error type for all p2pb2b client operations.
#[derive(Error, Debug)]
pub enum P2pb2bError {
    /// HTTP transport failure (connection, TLS, timeout)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP transport failure surfaced by the middleware stack
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// JSON serialization error while building a request body
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Response body could not be decoded into the expected structure
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Response status code was not in the expected set
    #[error("unexpected HTTP status: expected one of {expected:?}, got {actual}: {body}")]
    UnexpectedStatus {
        /// Status codes the caller was prepared to accept
        expected: Vec<u16>,
        /// Status code the server actually returned
        actual: u16,
        /// Raw response body, kept so server-side error detail is not lost
        body: String,
    },

    /// Authentication material could not be used
    #[error("Authentication error: {0}")]
    Auth(String),

    /// A private endpoint was called on a client built without credentials
    #[error("Missing credentials: API key and secret are required for private endpoints")]
    MissingCredentials,
}
