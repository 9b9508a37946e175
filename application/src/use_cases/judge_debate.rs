//! Judge protocol
//!
//! Stateless per call: one judge invocation over a transcript window.

use crate::config::BehaviorConfig;
use crate::ports::agent_gateway::{AgentGateway, GatewayError};
use crate::use_cases::shared::invoke_with_retry;
use arena_domain::{
    AgentContext, AgentProfile, ClosingVerdict, DebatePromptTemplate, Turn, Verdict,
    format_window, parse_verdict,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Invokes the judge and parses its decision
pub struct JudgeProtocol<G: AgentGateway + 'static> {
    gateway: Arc<G>,
    profile: AgentProfile,
    behavior: BehaviorConfig,
}

impl<G: AgentGateway + 'static> JudgeProtocol<G> {
    pub fn new(gateway: Arc<G>, profile: AgentProfile, behavior: BehaviorConfig) -> Self {
        Self {
            gateway,
            profile,
            behavior,
        }
    }

    /// Ask the judge whether the debate should go on.
    ///
    /// With `forced`, the judge is told the debate is over and must not
    /// answer `continue`; enforcing that is up to the caller.
    pub async fn evaluate(
        &self,
        window: &[Turn],
        topic: &str,
        forced: bool,
    ) -> Result<Verdict, GatewayError> {
        let transcript = format_window(window, usize::MAX);
        let prompt = DebatePromptTemplate::judge_prompt(topic, &transcript, forced);
        let context = AgentContext::single(self.profile.system_prompt.clone(), prompt);

        let reply = invoke_with_retry(&self.behavior, "judge", || {
            self.gateway.generate(&self.profile, &context)
        })
        .await?;

        let verdict = parse_verdict(&reply);
        debug!("Judge decided {} (forced: {})", verdict.decision, forced);
        Ok(verdict)
    }

    /// Final verdict for a debate that has already ended.
    ///
    /// Never fails: a `continue` answer or any error yields
    /// [`ClosingVerdict::unavailable`].
    pub async fn closing_verdict(&self, window: &[Turn], topic: &str) -> ClosingVerdict {
        match self.evaluate(window, topic, true).await {
            Ok(verdict) if verdict.decision.ends_debate() => ClosingVerdict::Rendered(verdict),
            Ok(_) => {
                warn!("Judge answered continue to a final verdict request");
                ClosingVerdict::unavailable()
            }
            Err(e) => {
                warn!("Final verdict failed: {}", e);
                ClosingVerdict::unavailable()
            }
        }
    }
}
