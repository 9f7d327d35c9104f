//! Loop pacing and start-up synchronisation limits

/// Interval between clock loop ticks
pub const TIME_UPDATE_INTERVAL_MS: u64 = 100;

/// Longest start-up wait for the first valid time
pub const TIME_SYNC_TIMEOUT_MS: u64 = 10_000;

/// Re-poll interval while waiting for the first valid time
pub const TIME_SYNC_POLL_MS: u64 = 200;
