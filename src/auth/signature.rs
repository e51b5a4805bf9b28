//! Payload encoding and request signing for the p2pb2b API.
//!
//! Private endpoints authenticate every POST with three headers:
//!
//! ```text
//! X-TXC-APIKEY:    the public API key
//! X-TXC-PAYLOAD:   base64 of the exact request body bytes
//! X-TXC-SIGNATURE: lowercase hex HMAC-SHA512 of the payload
//! ```
//!
//! The signature covers the base64 payload string, not the raw body bytes,
//! and the HMAC key is the secret's raw bytes. Both points are what the
//! server verifies against; get either wrong and every request is rejected.

use base64::{Engine, engine::general_purpose::STANDARD as BASE64};
use hmac::{Hmac, Mac};
use sha2::Sha512;

use crate::auth::Credentials;
use crate::error::P2pb2bError;

/// Header carrying the public API key.
pub const HEADER_API_KEY: &str = "X-TXC-APIKEY";
/// Header carrying the base64-encoded request body.
pub const HEADER_PAYLOAD: &str = "X-TXC-PAYLOAD";
/// Header carrying the hex HMAC-SHA512 signature of the payload.
pub const HEADER_SIGNATURE: &str = "X-TXC-SIGNATURE";

type HmacSha512 = Hmac<Sha512>;

/// Encode serialized request body bytes as the base64 payload string.
///
/// The bytes passed here must be the exact bytes sent as the request body;
/// re-serializing the value separately risks a mismatch the server will
/// reject.
pub fn encode_payload(body: &[u8]) -> String {
    BASE64.encode(body)
}

/// Sign a base64 payload string, returning the lowercase hex signature.
pub fn sign_payload(credentials: &Credentials, payload: &str) -> Result<String, P2pb2bError> {
    let mut mac = HmacSha512::new_from_slice(credentials.expose_secret().as_bytes())
        .map_err(|e| P2pb2bError::Auth(format!("invalid HMAC key: {e}")))?;
    mac.update(payload.as_bytes());
    Ok(hex::encode(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials::new("test-key", "test-secret")
    }

    #[test]
    fn payload_is_plain_base64_of_the_body() {
        let payload = encode_payload(br#"{"request":"/api/v2/account/balances","nonce":"1"}"#);
        let decoded = BASE64.decode(&payload).unwrap();
        assert_eq!(
            decoded,
            br#"{"request":"/api/v2/account/balances","nonce":"1"}"#
        );
    }

    #[test]
    fn signing_is_deterministic() {
        let payload = encode_payload(b"{\"nonce\":\"1662387966000\"}");
        let first = sign_payload(&credentials(), &payload).unwrap();
        let second = sign_payload(&credentials(), &payload).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn signature_is_lowercase_hex_of_sha512_width() {
        let payload = encode_payload(b"{}");
        let signature = sign_payload(&credentials(), &payload).unwrap();
        // SHA-512 digests are 64 bytes, so 128 hex characters.
        assert_eq!(signature.len(), 128);
        assert!(signature.chars().all(|c| c.is_ascii_hexdigit()));
        assert_eq!(signature, signature.to_lowercase());
    }

    #[test]
    fn different_bodies_produce_different_signatures() {
        let first = sign_payload(&credentials(), &encode_payload(b"{\"nonce\":\"1\"}")).unwrap();
        let second = sign_payload(&credentials(), &encode_payload(b"{\"nonce\":\"2\"}")).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn different_secrets_produce_different_signatures() {
        let payload = encode_payload(b"{\"nonce\":\"1\"}");
        let first = sign_payload(&Credentials::new("k", "secret-a"), &payload).unwrap();
        let second = sign_payload(&Credentials::new("k", "secret-b"), &payload).unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn signature_covers_the_payload_string_not_the_body() {
        let body = b"{\"nonce\":\"1662387966000\"}";
        let payload = encode_payload(body);

        let mut raw = HmacSha512::new_from_slice(b"test-secret").unwrap();
        raw.update(body);
        let over_body = hex::encode(raw.finalize().into_bytes());

        let over_payload = sign_payload(&credentials(), &payload).unwrap();
        assert_ne!(over_payload, over_body);
    }
}
