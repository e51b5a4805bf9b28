//! Authentication for the p2pb2b API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - Millisecond nonce generation for replay protection
//! - Payload encoding and HMAC-SHA512 request signing

mod credentials;
mod nonce;
mod signature;

pub use credentials::{
    Credentials, CredentialsProvider, ENV_API_KEY, ENV_API_SECRET, EnvCredentials,
    StaticCredentials,
};
pub use nonce::{MillisNonce, NonceProvider};
pub use signature::{
    HEADER_API_KEY, HEADER_PAYLOAD, HEADER_SIGNATURE, encode_payload, sign_payload,
};
