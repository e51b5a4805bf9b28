//! # p2pb2b API Client
//!
//! An async Rust client library for the p2pb2b cryptocurrency exchange.
//!
//! ## Features
//!
//! - Typed REST operations returning the exchange's success/message envelope
//! - HMAC-SHA512 request signing with base64 payload and hex signature headers
//! - A fresh millisecond nonce stamped into every signed request
//! - Financial precision via `rust_decimal`
//! - Redirects are never followed; a 3xx comes back as an error
//! - WebSocket request builders for subscribe, unsubscribe and ping
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use p2pb2b_api_client::auth::StaticCredentials;
//! use p2pb2b_api_client::rest::RestClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Public endpoints need no credentials.
//!     let client = RestClient::new();
//!     let markets = client.get_markets().await?;
//!     println!("{} markets listed", markets.result.len());
//!
//!     // Private endpoints need an API key and secret.
//!     let client = RestClient::builder()
//!         .credentials(Arc::new(StaticCredentials::new("api-key", "api-secret")))
//!         .build();
//!     let balances = client.get_balances().await?;
//!     println!("success: {}", balances.success);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod rest;
pub mod types;
pub mod ws;

pub use error::P2pb2bError;
pub use types::{ApiResponse, RequestEnvelope};

/// Result type alias using [`P2pb2bError`].
pub type Result<T> = std::result::Result<T, P2pb2bError>;
