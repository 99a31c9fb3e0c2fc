//! Timeout helpers used across the crate.

use std::time::Duration;

/// ACK timeout used when a caller doesn't provide one explicitly.
pub const DEFAULT_ACK_TIMEOUT_MS: u64 = 1000;

/// How long `in_list_passive_target` waits for a card to enter the field.
pub const LIST_TARGET_TIMEOUT_MS: u64 = 30_000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Default ACK timeout as Duration.
pub fn default_ack_timeout() -> Duration {
    ms(DEFAULT_ACK_TIMEOUT_MS)
}
