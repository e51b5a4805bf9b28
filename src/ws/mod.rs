//! p2pb2b WebSocket messages.
//!
//! Only the outbound request shapes live here. Opening the connection and
//! consuming the stream are left to the caller;
//! [`RestClient::ws_url`](crate::rest::RestClient::ws_url) reports the
//! endpoint to connect to.

pub mod messages;

pub use messages::WsRequest;
