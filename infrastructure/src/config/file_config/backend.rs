//! Backend configuration from TOML (`[backend]` section)

use arena_application::BehaviorConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw backend configuration from TOML
///
/// # Example
///
/// ```toml
/// [backend]
/// base_url = "http://gpu-box:11434"
/// timeout_seconds = 300
/// max_retries = 3
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileBackendConfig {
    /// Ollama server address
    pub base_url: String,
    /// Per-invocation timeout; 0 disables it
    pub timeout_seconds: u64,
    pub max_retries: u32,
    pub retry_backoff_ms: u64,
}

impl Default for FileBackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:11434".to_string(),
            timeout_seconds: 120,
            max_retries: 2,
            retry_backoff_ms: 500,
        }
    }
}

impl FileBackendConfig {
    pub fn to_behavior(&self) -> BehaviorConfig {
        let timeout = (self.timeout_seconds > 0).then_some(self.timeout_seconds);
        BehaviorConfig::from_timeout_seconds(timeout).with_retries(
            self.max_retries,
            Duration::from_millis(self.retry_backoff_ms),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_to_behavior() {
        let backend = FileBackendConfig {
            timeout_seconds: 30,
            max_retries: 4,
            retry_backoff_ms: 250,
            ..FileBackendConfig::default()
        };
        let behavior = backend.to_behavior();
        assert_eq!(behavior.timeout, Some(Duration::from_secs(30)));
        assert_eq!(behavior.max_retries, 4);
        assert_eq!(behavior.retry_backoff, Duration::from_millis(250));
    }

    #[test]
    fn test_zero_timeout_disables_it() {
        let backend = FileBackendConfig {
            timeout_seconds: 0,
            ..FileBackendConfig::default()
        };
        assert!(backend.to_behavior().timeout.is_none());
    }
}
