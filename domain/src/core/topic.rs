//! Topic value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// The proposition under debate (Value Object)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    content: String,
}

impl Topic {
    /// Create a topic, rejecting empty or whitespace-only text
    pub fn try_new(content: impl Into<String>) -> Result<Self, DomainError> {
        let content = content.into();
        if content.trim().is_empty() {
            return Err(DomainError::InvalidTopic(
                "topic cannot be empty".to_string(),
            ));
        }
        Ok(Self {
            content: content.trim().to_string(),
        })
    }

    /// Get the topic content
    pub fn content(&self) -> &str {
        &self.content
    }
}

impl std::fmt::Display for Topic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.content)
    }
}
