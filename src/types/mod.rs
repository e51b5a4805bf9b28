//! Common types shared across the p2pb2b client library.

mod envelope;

pub use envelope::{ApiResponse, RequestEnvelope};

use time::OffsetDateTime;
use time::error::ComponentRange;

/// Convert a fractional Unix timestamp in seconds, as several p2pb2b
/// responses report times, into an [`OffsetDateTime`].
///
/// Sub-second precision is preserved to the resolution of `f64`. Errors
/// only when the value falls outside the representable date range.
pub fn timestamp_to_datetime(timestamp: f64) -> Result<OffsetDateTime, ComponentRange> {
    OffsetDateTime::from_unix_timestamp_nanos((timestamp * 1e9) as i128)
}
