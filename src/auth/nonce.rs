//! Nonce generation for authenticated requests.
//!
//! Every signed request body carries a `nonce` field and the server rejects
//! values it has already seen. p2pb2b expects the current Unix time in
//! milliseconds, so the nonce doubles as a request timestamp and must be
//! stamped immediately before each send.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Source of request nonces.
///
/// Implementations must be thread safe and every call must return a value
/// strictly greater than all previous ones.
pub trait NonceProvider: Send + Sync {
    /// Produce the next nonce.
    fn next_nonce(&self) -> u64;
}

/// Millisecond-timestamp nonce provider.
///
/// Returns the current wall clock in milliseconds, bumped past the last
/// issued value when several requests land within the same millisecond.
pub struct MillisNonce {
    last: AtomicU64,
}

impl MillisNonce {
    /// Create a provider. The clock is read on every [`next_nonce`] call,
    /// not at construction.
    ///
    /// [`next_nonce`]: NonceProvider::next_nonce
    pub fn new() -> Self {
        Self {
            last: AtomicU64::new(0),
        }
    }

    fn now_millis() -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

impl Default for MillisNonce {
    fn default() -> Self {
        Self::new()
    }
}

impl NonceProvider for MillisNonce {
    fn next_nonce(&self) -> u64 {
        let now = Self::now_millis();
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let next = now.max(last + 1);
            match self
                .last
                .compare_exchange_weak(last, next, Ordering::SeqCst, Ordering::Relaxed)
            {
                Ok(_) => return next,
                Err(observed) => last = observed,
            }
        }
    }
}
