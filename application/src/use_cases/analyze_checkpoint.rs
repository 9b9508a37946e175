//! Checkpoint analysis use case
//!
//! Sends a window of the transcript to the summarizer and validates its
//! structured reply into a [`CheckpointReport`].

use crate::config::BehaviorConfig;
use crate::ports::agent_gateway::{AgentGateway, GatewayError};
use crate::use_cases::shared::invoke_with_retry;
use arena_domain::{
    AgentContext, AgentProfile, CheckpointReport, DebatePromptTemplate, Turn, format_window,
    parse_checkpoint_report,
};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors that can occur during checkpoint analysis
#[derive(Error, Debug)]
pub enum AnalyzeError {
    /// The reply was not a well-formed report
    #[error("Analysis parse error: {0}")]
    Parse(String),

    #[error("Gateway error: {0}")]
    Gateway(GatewayError),
}

impl From<GatewayError> for AnalyzeError {
    fn from(e: GatewayError) -> Self {
        match e {
            GatewayError::MalformedReply(reply) => AnalyzeError::Parse(reply),
            other => AnalyzeError::Gateway(other),
        }
    }
}

/// Analysis Aggregator: one summarizer call per checkpoint
pub struct CheckpointAnalyzer<G: AgentGateway + 'static> {
    gateway: Arc<G>,
    profile: AgentProfile,
    behavior: BehaviorConfig,
    excerpt_chars: usize,
}

impl<G: AgentGateway + 'static> CheckpointAnalyzer<G> {
    pub fn new(
        gateway: Arc<G>,
        profile: AgentProfile,
        behavior: BehaviorConfig,
        excerpt_chars: usize,
    ) -> Self {
        Self {
            gateway,
            profile,
            behavior,
            excerpt_chars,
        }
    }

    /// Analyse `window`, the most recent turns of the transcript.
    ///
    /// `previous_restrictions` is the restriction text the debaters were
    /// given at the last checkpoint, if any.
    pub async fn analyze(
        &self,
        window: &[Turn],
        topic: &str,
        language: &str,
        previous_restrictions: Option<&str>,
    ) -> Result<CheckpointReport, AnalyzeError> {
        let transcript = format_window(window, self.excerpt_chars);
        let prompt = DebatePromptTemplate::analysis_prompt(
            topic,
            language,
            &transcript,
            previous_restrictions,
        );
        let context = AgentContext::single(self.profile.system_prompt.clone(), prompt);

        debug!("Analysing {} turns with {}", window.len(), self.profile.model);
        let value = invoke_with_retry(&self.behavior, "summarizer", || {
            self.gateway.generate_structured(&self.profile, &context)
        })
        .await?;

        parse_checkpoint_report(value).map_err(|e| AnalyzeError::Parse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arena_domain::{AgentRole, Model, Side, Transcript};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FixedGateway {
        reply: Result<String, GatewayError>,
        prompts: Mutex<Vec<String>>,
    }

    impl FixedGateway {
        fn new(reply: Result<&str, GatewayError>) -> Self {
            Self {
                reply: reply.map(str::to_string),
                prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl AgentGateway for FixedGateway {
        async fn generate(
            &self,
            _profile: &AgentProfile,
            context: &AgentContext,
        ) -> Result<String, GatewayError> {
            let prompt = context.messages()[0].content.clone();
            self.prompts.lock().unwrap().push(prompt);
            self.reply.clone()
        }
    }

    fn analyzer(gateway: FixedGateway) -> (Arc<FixedGateway>, CheckpointAnalyzer<FixedGateway>) {
        let gateway = Arc::new(gateway);
        let profile = AgentProfile::new(AgentRole::Summarizer, Model::default(), 0.3, "sys");
        let behavior = BehaviorConfig {
            timeout: None,
            max_retries: 0,
            ..BehaviorConfig::default()
        };
        let analyzer = CheckpointAnalyzer::new(Arc::clone(&gateway), profile, behavior, 500);
        (gateway, analyzer)
    }

    fn transcript() -> Transcript {
        let mut t = Transcript::new();
        t.append(1, Side::A, "Cars pollute the city centre.");
        t.append(1, Side::B, "Shops depend on drivers.");
        t
    }

    const REPORT: &str = r#"{
        "debater_a_arguments": ["pollution"],
        "debater_b_arguments": ["shops"],
        "exhausted_lines": {"debater_a": ["Cars pollute"], "debater_b": []},
        "key_points": ["pollution vs commerce"],
        "current_focus": "commerce"
    }"#;

    #[tokio::test]
    async fn test_analyze_parses_report() {
        let (gateway, analyzer) = analyzer(FixedGateway::new(Ok(REPORT)));
        let t = transcript();
        let report = analyzer
            .analyze(t.turns(), "Ban cars", "English", Some("FORBIDDEN: x"))
            .await
            .unwrap();

        assert_eq!(report.exhausted_for(Side::A), ["Cars pollute"]);
        assert_eq!(report.current_focus, "commerce");

        let prompts = gateway.prompts.lock().unwrap();
        assert!(prompts[0].contains("Debater A: Cars pollute the city centre."));
        assert!(prompts[0].contains("FORBIDDEN: x"));
    }

    #[tokio::test]
    async fn test_prose_reply_is_parse_error() {
        let (_, analyzer) = analyzer(FixedGateway::new(Ok("The debate is going well.")));
        let t = transcript();
        let err = analyzer
            .analyze(t.turns(), "Ban cars", "English", None)
            .await
            .unwrap_err();
        assert!(matches!(err, AnalyzeError::Parse(_)));
    }

    #[tokio::test]
    async fn test_missing_fields_is_parse_error() {
        let (_, analyzer) = analyzer(FixedGateway::new(Ok(r#"{"key_points": []}"#)));
        let t = transcript();
        let err = analyzer
            .analyze(t.turns(), "Ban cars", "English", None)
            .await
            .unwrap_err();
        assert!(matches!(err, AnalyzeError::Parse(_)));
    }

    #[tokio::test]
    async fn test_backend_error_is_gateway_error() {
        let (_, analyzer) = analyzer(FixedGateway::new(Err(GatewayError::Unavailable(
            "refused".into(),
        ))));
        let t = transcript();
        let err = analyzer
            .analyze(t.turns(), "Ban cars", "English", None)
            .await
            .unwrap_err();
        assert!(matches!(err, AnalyzeError::Gateway(ref e) if e.is_fatal()));
    }
}
