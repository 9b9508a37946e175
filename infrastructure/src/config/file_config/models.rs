//! Per-role model configuration from TOML (`[models.*]` sections)

use arena_domain::{
    AgentProfile, AgentRole, ConfigIssue, ConfigIssueCode, DebatePromptTemplate, Model, Severity,
    Side,
};
use serde::{Deserialize, Serialize};

/// One agent's model settings
///
/// Unset fields fall back to the role's defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAgentModel {
    pub name: Option<String>,
    pub temperature: Option<f32>,
    /// Role prompt; `{topic}` is replaced with the debate topic
    pub system_prompt: Option<String>,
}

/// Per-role model configuration from TOML
///
/// # Example
///
/// ```toml
/// [models.debater_a]
/// name = "llama3.1"
/// temperature = 0.8
///
/// [models.debater_b]
/// name = "mistral"
///
/// [models.summarizer]
/// name = "qwen2.5"
/// temperature = 0.2
///
/// [models.judge]
/// name = "llama3.1"
/// system_prompt = "You judge debates about {topic} strictly."
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileModelsConfig {
    pub debater_a: FileAgentModel,
    pub debater_b: FileAgentModel,
    pub summarizer: FileAgentModel,
    pub judge: FileAgentModel,
}

impl FileModelsConfig {
    const ROLES: [AgentRole; 4] = [
        AgentRole::Debater(Side::A),
        AgentRole::Debater(Side::B),
        AgentRole::Summarizer,
        AgentRole::Judge,
    ];

    pub fn for_role(&self, role: AgentRole) -> &FileAgentModel {
        match role {
            AgentRole::Debater(Side::A) => &self.debater_a,
            AgentRole::Debater(Side::B) => &self.debater_b,
            AgentRole::Summarizer => &self.summarizer,
            AgentRole::Judge => &self.judge,
        }
    }

    fn default_temperature(role: AgentRole) -> f32 {
        match role {
            AgentRole::Debater(_) => 0.7,
            AgentRole::Summarizer => 0.3,
            AgentRole::Judge => 0.2,
        }
    }

    fn default_prompt(role: AgentRole) -> &'static str {
        match role {
            AgentRole::Debater(Side::A) => DebatePromptTemplate::debater_a_system(),
            AgentRole::Debater(Side::B) => DebatePromptTemplate::debater_b_system(),
            AgentRole::Summarizer => DebatePromptTemplate::summarizer_system(),
            AgentRole::Judge => DebatePromptTemplate::judge_system(),
        }
    }

    /// Resolve the profile for `role`, substituting `topic` into its prompt.
    pub fn profile(&self, role: AgentRole, topic: &str) -> AgentProfile {
        let file = self.for_role(role);
        let model = file
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(Model::from)
            .unwrap_or_default();
        let temperature = file
            .temperature
            .unwrap_or_else(|| Self::default_temperature(role));
        let template = file
            .system_prompt
            .as_deref()
            .unwrap_or_else(|| Self::default_prompt(role));

        AgentProfile::new(
            role,
            model,
            temperature,
            DebatePromptTemplate::render_role_prompt(template, topic),
        )
    }

    /// Empty model names and out-of-range temperatures.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();
        for role in Self::ROLES {
            let file = self.for_role(role);
            if let Some(name) = &file.name
                && name.trim().is_empty()
            {
                let field = format!("models.{}.name", role);
                issues.push(ConfigIssue::new(
                    Severity::Error,
                    ConfigIssueCode::EmptyModelName {
                        field: field.clone(),
                    },
                    format!("{}: model name cannot be empty", field),
                ));
            }
            if let Some(t) = file.temperature
                && !(0.0..=2.0).contains(&t)
            {
                let field = format!("models.{}.temperature", role);
                issues.push(ConfigIssue::new(
                    Severity::Error,
                    ConfigIssueCode::TemperatureOutOfRange {
                        field: field.clone(),
                    },
                    format!("{}: {} is outside 0.0..=2.0", field, t),
                ));
            }
        }
        issues
    }
}
