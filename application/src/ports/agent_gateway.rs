//! Agent Gateway port
//!
//! Defines the interface for invoking debaters, the summarizer and the judge.

use arena_domain::core::string::truncate;
use arena_domain::{AgentContext, AgentProfile, parse_json_object};
use async_trait::async_trait;
use serde_json::Value;
use thiserror::Error;

/// Errors that can occur during agent invocations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Timeout")]
    Timeout,

    #[error("Backend unavailable: {0}")]
    Unavailable(String),

    #[error("Request failed: {0}")]
    RequestFailed(String),

    #[error("Malformed reply: {0}")]
    MalformedReply(String),
}

impl GatewayError {
    /// Worth another attempt after a backoff.
    pub fn is_retryable(&self) -> bool {
        matches!(self, GatewayError::Timeout | GatewayError::RequestFailed(_))
    }

    /// Ends the session.
    pub fn is_fatal(&self) -> bool {
        matches!(self, GatewayError::Unavailable(_))
    }
}

/// Gateway for agent invocations
///
/// One implementation serves every role; the profile says which model,
/// temperature and role prompt to use. Implementations (adapters) live in the
/// infrastructure layer.
#[async_trait]
pub trait AgentGateway: Send + Sync {
    /// Free-text reply, used for debater turns and judge evaluations.
    async fn generate(
        &self,
        profile: &AgentProfile,
        context: &AgentContext,
    ) -> Result<String, GatewayError>;

    /// Structured (JSON object) reply, used for checkpoint analysis.
    ///
    /// The default asks for free text and extracts the first JSON object.
    async fn generate_structured(
        &self,
        profile: &AgentProfile,
        context: &AgentContext,
    ) -> Result<Value, GatewayError> {
        let text = self.generate(profile, context).await?;
        parse_json_object(&text)
            .ok_or_else(|| GatewayError::MalformedReply(truncate(text.trim(), 200)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_domain::{AgentRole, Model};

    struct Echo(&'static str);

    #[async_trait]
    impl AgentGateway for Echo {
        async fn generate(
            &self,
            _profile: &AgentProfile,
            _context: &AgentContext,
        ) -> Result<String, GatewayError> {
            Ok(self.0.to_string())
        }
    }

    fn profile() -> AgentProfile {
        AgentProfile::new(AgentRole::Summarizer, Model::default(), 0.3, "sys")
    }

    #[tokio::test]
    async fn test_default_structured_extracts_json() {
        let gateway = Echo("Here you go:\n```json\n{\"current_focus\": \"cost\"}\n```");
        let value = gateway
            .generate_structured(&profile(), &AgentContext::new("sys"))
            .await
            .unwrap();
        assert_eq!(value["current_focus"], "cost");
    }

    #[tokio::test]
    async fn test_default_structured_rejects_prose() {
        let gateway = Echo("I cannot produce JSON today.");
        let err = gateway
            .generate_structured(&profile(), &AgentContext::new("sys"))
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::MalformedReply(_)));
        assert!(!err.is_retryable());
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_error_classes() {
        assert!(GatewayError::Timeout.is_retryable());
        assert!(GatewayError::RequestFailed("503".into()).is_retryable());
        assert!(GatewayError::Unavailable("refused".into()).is_fatal());
        assert!(!GatewayError::Unavailable("refused".into()).is_retryable());
    }
}
