//! Timestamp generation for Coinbase API authentication.
//!
//! Signed requests carry the unix time in whole seconds, both inside the
//! signed message and in the `CB-ACCESS-TIMESTAMP` header. The server
//! rejects requests whose timestamp drifts too far from its own clock.

use time::OffsetDateTime;

/// Trait for providing request timestamps.
///
/// The signer calls [`TimestampProvider::timestamp`] exactly once per request
/// and reuses the value for the message and the header.
pub trait TimestampProvider: Send + Sync {
    /// Seconds since the unix epoch.
    fn timestamp(&self) -> i64;

    /// Milliseconds since the unix epoch.
    fn timestamp_millis(&self) -> i64 {
        self.timestamp() * 1000
    }
}

/// Reads the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTimestamp;

impl SystemTimestamp {
    /// Create a new system clock provider.
    pub fn new() -> Self {
        Self
    }
}

impl TimestampProvider for SystemTimestamp {
    fn timestamp(&self) -> i64 {
        OffsetDateTime::now_utc().unix_timestamp()
    }

    fn timestamp_millis(&self) -> i64 {
        (OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000) as i64
    }
}

/// Always returns the same timestamp.
///
/// Useful for reproducing a signature or testing against recorded requests.
#[derive(Debug, Clone, Copy)]
pub struct FixedTimestamp(pub i64);

impl TimestampProvider for FixedTimestamp {
    fn timestamp(&self) -> i64 {
        self.0
    }
}
