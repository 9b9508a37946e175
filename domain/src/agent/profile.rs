//! Agent profiles

use crate::core::model::Model;
use crate::core::side::Side;
use serde::{Deserialize, Serialize};

/// The capability an agent is invoked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentRole {
    Debater(Side),
    Summarizer,
    Judge,
}

impl AgentRole {
    pub fn as_str(self) -> &'static str {
        match self {
            AgentRole::Debater(Side::A) => "debater_a",
            AgentRole::Debater(Side::B) => "debater_b",
            AgentRole::Summarizer => "summarizer",
            AgentRole::Judge => "judge",
        }
    }
}

impl std::fmt::Display for AgentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Model settings and role prompt for one agent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentProfile {
    pub role: AgentRole,
    pub model: Model,
    pub temperature: f32,
    /// Role prompt with the topic already substituted
    pub system_prompt: String,
}

impl AgentProfile {
    pub fn new(
        role: AgentRole,
        model: Model,
        temperature: f32,
        system_prompt: impl Into<String>,
    ) -> Self {
        Self {
            role,
            model,
            temperature,
            system_prompt: system_prompt.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_names() {
        assert_eq!(AgentRole::Debater(Side::A).as_str(), "debater_a");
        assert_eq!(AgentRole::Debater(Side::B).to_string(), "debater_b");
        assert_eq!(AgentRole::Judge.as_str(), "judge");
    }
}
