//! p2pb2b REST API client.
//!
//! [`RestClient`] is the concrete client; the [`P2pb2bClient`] trait mirrors
//! its operations for code that wants to substitute a fake. Endpoint methods
//! are split between [`account`] (signed) and [`public`] (unsigned).

pub mod account;
mod client;
mod endpoints;
pub mod public;
mod traits;

pub use client::{RestClient, RestClientBuilder, check_status};
pub use endpoints::*;
pub use traits::{P2pb2bClient, P2pb2bClientExt};
