//! Delay abstraction for the retry loop.

use async_trait::async_trait;
use std::time::Duration;

/// Scheduler for retry delays.
///
/// Production code uses [`TokioSleeper`]; tests inject a recording fake so
/// retry schedules can be asserted without real waiting.
#[async_trait]
pub trait Sleeper: Send + Sync {
    /// Wait for the given duration
    async fn sleep(&self, duration: Duration);
}

/// Sleeper backed by the tokio timer
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}
