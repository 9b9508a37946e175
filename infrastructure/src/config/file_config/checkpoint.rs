//! Checkpoint configuration from TOML (`[checkpoint]` section)

use arena_domain::CheckpointParams;
use serde::{Deserialize, Serialize};

/// Raw checkpoint configuration from TOML
///
/// # Example
///
/// ```toml
/// [checkpoint]
/// enabled = true
/// interval_turns = 3
/// max_violations = 0     # never end on violations
/// window_turns = 4
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCheckpointConfig {
    pub enabled: bool,
    pub interval_turns: u32,
    pub max_violations: u32,
    /// Defaults to `interval_turns`
    pub window_turns: Option<u32>,
    pub excerpt_chars: usize,
    pub restriction_char_budget: usize,
}

impl Default for FileCheckpointConfig {
    fn default() -> Self {
        let params = CheckpointParams::default();
        Self {
            enabled: params.enabled,
            interval_turns: params.interval_turns,
            max_violations: params.max_violations,
            window_turns: params.window_turns,
            excerpt_chars: params.excerpt_chars,
            restriction_char_budget: params.restriction_char_budget,
        }
    }
}

impl FileCheckpointConfig {
    pub fn to_params(&self) -> CheckpointParams {
        CheckpointParams {
            enabled: self.enabled,
            interval_turns: self.interval_turns,
            max_violations: self.max_violations,
            window_turns: self.window_turns,
            excerpt_chars: self.excerpt_chars,
            restriction_char_budget: self.restriction_char_budget,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::FileConfig;

    #[test]
    fn test_checkpoint_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        let params = config.checkpoint.to_params();
        assert!(params.enabled);
        assert_eq!(params.interval_turns, 2);
        assert_eq!(params.max_violations, 3);
        assert_eq!(params.effective_window(), 2);
    }

    #[test]
    fn test_checkpoint_section() {
        let toml_str = r#"
[checkpoint]
interval_turns = 3
max_violations = 0
window_turns = 5
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let params = config.checkpoint.to_params();
        assert_eq!(params.interval_turns, 3);
        assert_eq!(params.max_violations, 0);
        assert_eq!(params.effective_window(), 5);
    }
}
