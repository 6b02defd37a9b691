//! Timeout helpers used across the crate.
//!
//! Centralizes the default discovery-wait values so the reader config,
//! tests and transports agree on them.

use std::time::Duration;

/// Interval between ready-status polls while waiting for a target.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 10;

/// Upper bound on the discovery wait before `Error::Timeout`.
pub const DEFAULT_DISCOVERY_TIMEOUT_MS: u64 = 5000;

/// Longest the discovery wait sleeps before looking at its cancellation
/// token again.
pub const CANCEL_CHECK_INTERVAL_MS: u64 = 5;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

pub fn default_poll_interval() -> Duration {
    ms(DEFAULT_POLL_INTERVAL_MS)
}

pub fn default_discovery_timeout() -> Duration {
    ms(DEFAULT_DISCOVERY_TIMEOUT_MS)
}

pub fn cancel_check_interval() -> Duration {
    ms(CANCEL_CHECK_INTERVAL_MS)
}
