//! Rate-limit wait policy

use crate::types::QuotaState;
use std::time::Duration;

/// Default remaining-request floor below which the importer waits
pub const DEFAULT_QUOTA_THRESHOLD: u64 = 10;

/// Default slack added after the reported reset time
pub const DEFAULT_RESET_BUFFER: Duration = Duration::from_secs(10);

/// Decides how long to pause before the next request
///
/// Pure arithmetic over a [`QuotaState`]; fetching the state is the caller's
/// job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuotaPolicy {
    /// Wait when fewer than this many requests remain
    pub threshold: u64,
    /// Added on top of the time left until reset
    pub buffer: Duration,
}

impl Default for QuotaPolicy {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_QUOTA_THRESHOLD,
            buffer: DEFAULT_RESET_BUFFER,
        }
    }
}

impl QuotaPolicy {
    /// Time to sleep given the quota and the current time
    ///
    /// Zero when enough quota remains or the window (plus buffer) has
    /// already passed.
    pub fn should_wait(&self, state: &QuotaState, now_epoch_seconds: i64) -> Duration {
        if state.remaining >= self.threshold {
            return Duration::ZERO;
        }

        let buffer = i64::try_from(self.buffer.as_secs()).unwrap_or(i64::MAX);
        let wait = state
            .reset_at_epoch_seconds
            .saturating_sub(now_epoch_seconds)
            .saturating_add(buffer);

        u64::try_from(wait).map_or(Duration::ZERO, Duration::from_secs)
    }
}
