//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod backend;
mod checkpoint;
mod debate;
mod judge;
mod models;
mod output;

pub use backend::FileBackendConfig;
pub use checkpoint::FileCheckpointConfig;
pub use debate::FileDebateConfig;
pub use judge::FileJudgeConfig;
pub use models::{FileAgentModel, FileModelsConfig};
pub use output::{FileOutputConfig, FileOutputFormat};

use arena_application::DebateRoster;
use arena_domain::{
    AgentRole, ConfigIssue, ConfigIssueCode, DebateConfig, Severity, Side, SideMap,
};
use serde::{Deserialize, Serialize};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Session settings
    pub debate: FileDebateConfig,
    /// Checkpoint and restriction settings
    pub checkpoint: FileCheckpointConfig,
    /// Judge settings
    pub judge: FileJudgeConfig,
    /// Per-role model selection
    pub models: FileModelsConfig,
    /// Ollama connection and retry policy
    pub backend: FileBackendConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    ///
    /// This is the single entry point for config validation. It checks:
    /// 1. Debate, checkpoint and judge parameters
    /// 2. Model names and temperatures
    /// 3. The backend address
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = self.to_debate_config().validate();

        issues.extend(self.models.validate());

        if self.backend.base_url.trim().is_empty() {
            issues.push(ConfigIssue::new(
                Severity::Error,
                ConfigIssueCode::EmptyValue {
                    field: "backend.base_url".to_string(),
                },
                "backend.base_url must not be empty",
            ));
        }

        issues
    }

    pub fn to_debate_config(&self) -> DebateConfig {
        DebateConfig {
            debate: self.debate.to_params(),
            checkpoint: self.checkpoint.to_params(),
            judge: self.judge.to_params(),
        }
    }

    /// Agent profiles with role prompts rendered for `topic`.
    pub fn roster(&self, topic: &str) -> DebateRoster {
        DebateRoster {
            debaters: SideMap::new(
                self.models.profile(AgentRole::Debater(Side::A), topic),
                self.models.profile(AgentRole::Debater(Side::B), topic),
            ),
            summarizer: self.models.profile(AgentRole::Summarizer, topic),
            judge: self.models.profile(AgentRole::Judge, topic),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_domain::{Model, OutputFormat, has_errors};

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[debate]
topic = "Should cities ban cars downtown?"
max_turns = 6
min_chars_per_turn = 150

[checkpoint]
interval_turns = 3
max_violations = 2

[judge]
enabled = true

[models.debater_a]
name = "llama3.1"

[models.debater_b]
name = "mistral"

[backend]
base_url = "http://gpu-box:11434"
timeout_seconds = 300

[output]
format = "full"
color = false
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let debate = config.to_debate_config();
        assert_eq!(debate.debate.max_turns, 6);
        assert_eq!(debate.debate.min_chars_per_turn, 150);
        assert_eq!(debate.checkpoint.interval_turns, 3);
        assert_eq!(debate.checkpoint.max_violations, 2);
        assert!(debate.judge.enabled);
        assert_eq!(config.backend.base_url, "http://gpu-box:11434");
        assert_eq!(config.output.format, Some(OutputFormat::Full));
        assert!(!config.output.color);

        let roster = config.roster("Should cities ban cars downtown?");
        assert_eq!(roster.debaters.b.model, Model::Mistral);
        assert_eq!(roster.judge.model, Model::Llama31);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert!(config.debate.topic.is_none());
        assert!(config.output.color);
        assert!(config.checkpoint.enabled);
        assert!(!config.judge.enabled);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_collects_issues_from_all_sections() {
        let toml_str = r#"
[debate]
max_turns = 0

[models.summarizer]
name = ""

[backend]
base_url = ""
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();
        assert!(has_errors(&issues));
        let fields: Vec<String> = issues
            .iter()
            .filter_map(|i| match &i.code {
                ConfigIssueCode::NonPositiveValue { field }
                | ConfigIssueCode::EmptyValue { field }
                | ConfigIssueCode::EmptyModelName { field } => Some(field.clone()),
                _ => None,
            })
            .collect();
        assert!(fields.contains(&"debate.max_turns".to_string()));
        assert!(fields.contains(&"models.summarizer.name".to_string()));
        assert!(fields.contains(&"backend.base_url".to_string()));
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let toml_str = r#"
[debate]
max_turns = 3
mood = "spicy"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.debate.max_turns, 3);
    }
}
