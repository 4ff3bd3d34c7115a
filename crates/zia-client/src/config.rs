//! Client configuration types.

use std::time::Duration;

/// Retry configuration for transient provider failures.
///
/// The backoff computed here is the outer, escalating wait between attempts.
/// Condition-specific waits (rate-limit reset, edit lock, maintenance) are
/// applied separately by the dispatcher and compound with this curve.
#[derive(Debug, Clone)]
pub struct RetryConfig {
    /// Maximum number of total attempts (first try included)
    pub max_attempts: u32,

    /// Initial backoff duration
    pub initial_backoff: Duration,

    /// Maximum backoff duration
    pub max_backoff: Duration,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl RetryConfig {
    /// Create the standard retry configuration: five attempts with
    /// exponential backoff from 2s up to a 30s ceiling
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_attempts: 5,
            initial_backoff: Duration::from_secs(2),
            max_backoff: Duration::from_secs(30),
        }
    }

    /// Set maximum attempts
    #[must_use]
    pub const fn max_attempts(mut self, max: u32) -> Self {
        self.max_attempts = max;
        self
    }

    /// Set initial backoff duration
    #[must_use]
    pub const fn initial_backoff(mut self, duration: Duration) -> Self {
        self.initial_backoff = duration;
        self
    }

    /// Set maximum backoff duration
    #[must_use]
    pub const fn max_backoff(mut self, duration: Duration) -> Self {
        self.max_backoff = duration;
        self
    }

    /// Backoff to wait after the given completed attempt (1-based)
    #[must_use]
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        let exponent = attempt.saturating_sub(1).min(16);
        let backoff = self.initial_backoff.as_millis() as u64 * 2u64.pow(exponent);
        let max = self.max_backoff.as_millis() as u64;
        Duration::from_millis(backoff.min(max))
    }
}
