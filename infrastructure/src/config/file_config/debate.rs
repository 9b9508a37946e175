//! Debate configuration from TOML (`[debate]` section)

use arena_domain::DebateParams;
use serde::{Deserialize, Serialize};

/// Raw debate configuration from TOML
///
/// # Example
///
/// ```toml
/// [debate]
/// topic = "Should cities ban cars downtown?"
/// max_turns = 8
/// min_chars_per_turn = 200
/// language = "Spanish"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDebateConfig {
    /// Topic; the `--prompt` flag overrides it
    pub topic: Option<String>,
    pub max_turns: u32,
    pub min_chars_per_turn: usize,
    pub language: String,
    pub max_regenerations: u32,
}

impl Default for FileDebateConfig {
    fn default() -> Self {
        let params = DebateParams::default();
        Self {
            topic: None,
            max_turns: params.max_turns,
            min_chars_per_turn: params.min_chars_per_turn,
            language: params.language,
            max_regenerations: params.max_regenerations,
        }
    }
}

impl FileDebateConfig {
    pub fn to_params(&self) -> DebateParams {
        DebateParams {
            max_turns: self.max_turns,
            min_chars_per_turn: self.min_chars_per_turn,
            language: self.language.clone(),
            max_regenerations: self.max_regenerations,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::FileConfig;

    #[test]
    fn test_debate_section() {
        let toml_str = r#"
[debate]
topic = "Remote work beats the office"
max_turns = 8
language = "Spanish"
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.debate.topic.as_deref(),
            Some("Remote work beats the office")
        );
        let params = config.debate.to_params();
        assert_eq!(params.max_turns, 8);
        assert_eq!(params.language, "Spanish");
        // Unset keys keep their defaults
        assert_eq!(params.min_chars_per_turn, 0);
        assert_eq!(params.max_regenerations, 2);
    }
}
