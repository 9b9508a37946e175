//! Application-level configuration.
//!
//! This module provides configuration types that control how use cases behave,
//! such as invocation timeouts and retry policies.

use std::time::Duration;

/// Application behavior configuration.
///
/// Applies to every agent invocation: debater turns, checkpoint analysis and
/// judge evaluations alike.
#[derive(Debug, Clone)]
pub struct BehaviorConfig {
    /// Maximum time to wait for a single reply before timing out.
    pub timeout: Option<Duration>,
    /// Retries after the first attempt for timeouts and failed requests.
    pub max_retries: u32,
    /// Delay before the first retry; doubled for each further retry.
    pub retry_backoff: Duration,
}

impl Default for BehaviorConfig {
    fn default() -> Self {
        Self {
            timeout: Some(Duration::from_secs(120)),
            max_retries: 2,
            retry_backoff: Duration::from_millis(500),
        }
    }
}

impl BehaviorConfig {
    /// Creates a BehaviorConfig with a timeout specified in seconds.
    pub fn with_timeout_seconds(seconds: u64) -> Self {
        Self {
            timeout: Some(Duration::from_secs(seconds)),
            ..Self::default()
        }
    }

    /// Creates a BehaviorConfig from an optional timeout in seconds.
    ///
    /// If `seconds` is `None`, no timeout is applied.
    pub fn from_timeout_seconds(seconds: Option<u64>) -> Self {
        Self {
            timeout: seconds.map(Duration::from_secs),
            ..Self::default()
        }
    }

    pub fn with_retries(mut self, max_retries: u32, backoff: Duration) -> Self {
        self.max_retries = max_retries;
        self.retry_backoff = backoff;
        self
    }

    /// Delay before retry number `attempt` (1-based).
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
        self.retry_backoff.saturating_mul(factor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoff_doubles() {
        let config = BehaviorConfig::default().with_retries(3, Duration::from_millis(100));
        assert_eq!(config.backoff_for(1), Duration::from_millis(100));
        assert_eq!(config.backoff_for(2), Duration::from_millis(200));
        assert_eq!(config.backoff_for(3), Duration::from_millis(400));
    }

    #[test]
    fn test_from_timeout_seconds_none() {
        let config = BehaviorConfig::from_timeout_seconds(None);
        assert!(config.timeout.is_none());
        assert_eq!(config.max_retries, 2);
    }
}
