//! Wall clock and sleeping, abstracted for tests

use async_trait::async_trait;
use std::time::Duration;

/// Source of the current time and of blocking pauses
#[async_trait]
pub trait Clock: Send + Sync {
    /// Current unix time in seconds
    fn now_epoch_seconds(&self) -> i64;

    /// Suspend the batch for `duration`
    async fn sleep(&self, duration: Duration);
}

/// Real clock backed by chrono and tokio timers
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

#[async_trait]
impl Clock for SystemClock {
    fn now_epoch_seconds(&self) -> i64 {
        chrono::Utc::now().timestamp()
    }

    async fn sleep(&self, duration: Duration) {
        if !duration.is_zero() {
            tokio::time::sleep(duration).await;
        }
    }
}
