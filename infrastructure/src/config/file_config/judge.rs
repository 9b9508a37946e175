//! Judge configuration from TOML (`[judge]` section)

use arena_domain::JudgeParams;
use serde::{Deserialize, Serialize};

/// Raw judge configuration from TOML
///
/// # Example
///
/// ```toml
/// [judge]
/// enabled = true
/// interval_turns = 0          # consult at every checkpoint
/// verdict_on_turn_limit = true
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileJudgeConfig {
    pub enabled: bool,
    pub interval_turns: u32,
    pub window_turns: u32,
    pub verdict_on_turn_limit: bool,
}

impl Default for FileJudgeConfig {
    fn default() -> Self {
        let params = JudgeParams::default();
        Self {
            enabled: params.enabled,
            interval_turns: params.interval_turns,
            window_turns: params.window_turns,
            verdict_on_turn_limit: params.verdict_on_turn_limit,
        }
    }
}

impl FileJudgeConfig {
    pub fn to_params(&self) -> JudgeParams {
        JudgeParams {
            enabled: self.enabled,
            interval_turns: self.interval_turns,
            window_turns: self.window_turns,
            verdict_on_turn_limit: self.verdict_on_turn_limit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::FileConfig;

    #[test]
    fn test_judge_disabled_by_default() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert!(!config.judge.enabled);
        assert_eq!(config.judge.window_turns, 4);
    }

    #[test]
    fn test_judge_section() {
        let toml_str = r#"
[judge]
enabled = true
interval_turns = 3
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let params = config.judge.to_params();
        assert!(params.enabled);
        assert!(params.is_due(3, false));
        assert!(!params.verdict_on_turn_limit);
    }
}
