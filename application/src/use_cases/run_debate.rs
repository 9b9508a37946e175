//! Run Debate use case
//!
//! Orchestrates a full debate: alternating turns, periodic checkpoints that
//! rebuild the debaters' contexts under restrictions, judge evaluations and
//! the termination policy.
//!
//! # Exchange cycle
//!
//! Debater A speaks, then Debater B; together that is one exchange and the
//! session turn index advances by one. After every exchange the loop checks,
//! in order:
//!
//! 1. cancellation
//! 2. the turn limit (no checkpoint runs at the limit)
//! 3. the checkpoint schedule, which may end the debate on violations
//! 4. the judge schedule, which may end the debate on a verdict

use crate::config::BehaviorConfig;
use crate::ports::agent_gateway::{AgentGateway, GatewayError};
use crate::ports::conversation_logger::{
    ConversationEvent, ConversationLogger, NoConversationLogger,
};
use crate::ports::progress::{DebateProgressNotifier, NoProgress};
use crate::use_cases::analyze_checkpoint::{AnalyzeError, CheckpointAnalyzer};
use crate::use_cases::judge_debate::JudgeProtocol;
use crate::use_cases::shared::{invoke_with_retry, is_cancelled};
use arena_domain::core::string::char_len;
use arena_domain::{
    AgentContext, AgentProfile, AgentRole, ClosingVerdict, DebateConfig, DebateOutcome,
    DebatePromptTemplate, DebateSession, DomainError, Message, Restriction, RestrictionBuilder,
    SessionStatus, Side, SideMap, Topic, Transcript, ViolationCounter, detect_violations,
    has_errors, reset_context, should_trigger,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors that end a debate without an outcome
#[derive(Error, Debug)]
pub enum RunDebateError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Backend unavailable: {message}")]
    BackendUnavailable {
        message: String,
        /// Turns accepted before the backend went away
        transcript: Transcript,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
}

impl RunDebateError {
    pub fn partial_transcript(&self) -> Option<&Transcript> {
        match self {
            RunDebateError::BackendUnavailable { transcript, .. } => Some(transcript),
            _ => None,
        }
    }
}

/// The agents taking part in a debate
#[derive(Debug, Clone)]
pub struct DebateRoster {
    pub debaters: SideMap<AgentProfile>,
    pub summarizer: AgentProfile,
    /// Only invoked when the judge is enabled
    pub judge: AgentProfile,
}

/// Input for the RunDebate use case
#[derive(Debug, Clone)]
pub struct RunDebateInput {
    pub topic: Topic,
    pub config: DebateConfig,
    pub roster: DebateRoster,
}

impl RunDebateInput {
    pub fn new(topic: Topic, config: DebateConfig, roster: DebateRoster) -> Self {
        Self {
            topic,
            config,
            roster,
        }
    }
}

/// Session-scoped mutable state, owned by a single `execute` call.
struct DebateState {
    session: DebateSession,
    transcript: Transcript,
    restrictions: SideMap<Restriction>,
    contexts: SideMap<AgentContext>,
    violations: ViolationCounter,
    checkpoints_run: u32,
    /// Turn index of the last applied checkpoint, 0 before the first
    last_checkpoint_turn: u32,
    verdict: Option<ClosingVerdict>,
    end_reason: Option<String>,
}

impl DebateState {
    fn new(input: &RunDebateInput) -> Self {
        let language = &input.config.debate.language;
        let fresh = |side: Side| {
            reset_context(
                &input.roster.debaters.get(side).system_prompt,
                &Restriction::empty(side),
                &input.topic,
                language,
            )
        };

        Self {
            session: DebateSession::new(input.topic.clone(), &input.config.debate),
            transcript: Transcript::new(),
            restrictions: SideMap::new(Restriction::empty(Side::A), Restriction::empty(Side::B)),
            contexts: SideMap::new(fresh(Side::A), fresh(Side::B)),
            violations: ViolationCounter::new(),
            checkpoints_run: 0,
            last_checkpoint_turn: 0,
            verdict: None,
            end_reason: None,
        }
    }

    fn end(&mut self, status: SessionStatus, reason: String) -> Result<(), DomainError> {
        self.session.end(status)?;
        self.end_reason = Some(reason);
        Ok(())
    }

    /// Restriction text both debaters currently carry, for the summarizer.
    fn previous_restrictions(&self) -> Option<String> {
        let rendered: Vec<String> = Side::BOTH
            .iter()
            .map(|side| self.restrictions.get(*side))
            .filter(|r| !r.is_empty())
            .map(|r| format!("{}:\n{}", r.side(), r.rendered_text()))
            .collect();
        (!rendered.is_empty()).then(|| rendered.join("\n\n"))
    }

    fn into_outcome(self) -> DebateOutcome {
        DebateOutcome {
            topic: self.session.topic().clone(),
            status: self.session.status(),
            turns_completed: self.session.current_turn(),
            max_turns: self.session.max_turns(),
            transcript: self.transcript,
            checkpoints_run: self.checkpoints_run,
            violations: self.violations,
            verdict: self.verdict,
            end_reason: self.end_reason,
        }
    }
}

/// Result of a checkpoint attempt
enum Checkpoint {
    Applied { end_hint: bool },
    Skipped,
}

/// Use case for running a debate
pub struct RunDebateUseCase<G: AgentGateway + 'static> {
    gateway: Arc<G>,
    behavior: BehaviorConfig,
    conversation_logger: Arc<dyn ConversationLogger>,
    cancellation_token: Option<CancellationToken>,
}

impl<G: AgentGateway + 'static> RunDebateUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self {
            gateway,
            behavior: BehaviorConfig::default(),
            conversation_logger: Arc::new(NoConversationLogger),
            cancellation_token: None,
        }
    }

    pub fn with_behavior(mut self, behavior: BehaviorConfig) -> Self {
        self.behavior = behavior;
        self
    }

    pub fn with_conversation_logger(mut self, logger: Arc<dyn ConversationLogger>) -> Self {
        self.conversation_logger = logger;
        self
    }

    /// Checked between exchanges; a cancelled debate ends with `Cancelled`.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation_token = Some(token);
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(&self, input: RunDebateInput) -> Result<DebateOutcome, RunDebateError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunDebateInput,
        progress: &dyn DebateProgressNotifier,
    ) -> Result<DebateOutcome, RunDebateError> {
        self.validate(&input)?;

        let config = &input.config;
        let topic = input.topic.content();
        let analyzer = CheckpointAnalyzer::new(
            Arc::clone(&self.gateway),
            input.roster.summarizer.clone(),
            self.behavior.clone(),
            config.checkpoint.excerpt_chars,
        );
        let judge = config.judge.enabled.then(|| {
            JudgeProtocol::new(
                Arc::clone(&self.gateway),
                input.roster.judge.clone(),
                self.behavior.clone(),
            )
        });

        info!(
            "Starting debate on '{}' ({} turns, checkpoints {}, judge {})",
            topic,
            config.debate.max_turns,
            if config.checkpoint.is_active() { "on" } else { "off" },
            if judge.is_some() { "on" } else { "off" }
        );
        self.log(
            "debate_started",
            json!({
                "topic": topic,
                "max_turns": config.debate.max_turns,
                "language": config.debate.language,
                "checkpoint_interval": config.checkpoint.is_active().then_some(config.checkpoint.interval_turns),
                "max_violations": config.checkpoint.max_violations,
                "judge": judge.is_some(),
                "models": {
                    "debater_a": input.roster.debaters.a.model.to_string(),
                    "debater_b": input.roster.debaters.b.model.to_string(),
                    "summarizer": input.roster.summarizer.model.to_string(),
                    "judge": input.roster.judge.model.to_string(),
                },
            }),
        );
        progress.on_debate_start(topic, config.debate.max_turns);

        let mut state = DebateState::new(&input);

        loop {
            let round = state.session.current_turn() + 1;
            for side in Side::BOTH {
                self.play_half(&mut state, &input, side, round, progress)
                    .await?;
            }
            let turn_index = state.session.complete_exchange()?;
            debug!("Exchange {} complete", turn_index);

            if is_cancelled(&self.cancellation_token) {
                info!("Debate cancelled after turn {}", turn_index);
                state.end(SessionStatus::Cancelled, "cancelled by user".to_string())?;
                break;
            }

            if state.session.turn_limit_reached() {
                state.end(
                    SessionStatus::EndedByTurnLimit,
                    format!("reached the turn limit ({})", config.debate.max_turns),
                )?;
                if let Some(judge) = &judge
                    && config.judge.verdict_on_turn_limit
                {
                    let closing = self.closing_verdict(judge, &state, &input, progress).await;
                    state.verdict = Some(closing);
                }
                break;
            }

            let triggered = should_trigger(
                turn_index,
                config.checkpoint.interval_turns,
                config.checkpoint.enabled,
            );
            let mut end_hint = false;
            if triggered {
                if let Checkpoint::Applied { end_hint: hint } = self
                    .run_checkpoint(&mut state, &input, &analyzer, turn_index, progress)
                    .await?
                {
                    end_hint = hint;
                }

                if state.violations.reached(config.checkpoint.max_violations) {
                    warn!(
                        "Violation limit reached ({} of {})",
                        state.violations.total(),
                        config.checkpoint.max_violations
                    );
                    state.end(
                        SessionStatus::EndedByViolations,
                        format!(
                            "violation limit reached ({} of {})",
                            state.violations.total(),
                            config.checkpoint.max_violations
                        ),
                    )?;
                    if let Some(judge) = &judge {
                        let closing = self.closing_verdict(judge, &state, &input, progress).await;
                        state.verdict = Some(closing);
                    }
                    break;
                }
            }

            if let Some(judge) = &judge
                && (config.judge.is_due(turn_index, triggered) || end_hint)
                && self
                    .consult_judge(judge, &mut state, &input, progress)
                    .await?
            {
                break;
            }
        }

        let outcome = state.into_outcome();
        info!(
            "Debate finished: {} after {} turns ({} checkpoints, {} violations)",
            outcome.status,
            outcome.turns_completed,
            outcome.checkpoints_run,
            outcome.violations.total()
        );
        self.log(
            "debate_finished",
            json!({
                "status": outcome.status,
                "turns_completed": outcome.turns_completed,
                "checkpoints_run": outcome.checkpoints_run,
                "violations": outcome.violations.total(),
                "end_reason": outcome.end_reason,
                "verdict": outcome.verdict,
            }),
        );
        progress.on_debate_end(&outcome);
        Ok(outcome)
    }

    fn validate(&self, input: &RunDebateInput) -> Result<(), RunDebateError> {
        let issues = input.config.validate();
        for issue in &issues {
            warn!("{}", issue);
        }
        if has_errors(&issues) {
            let message = issues
                .iter()
                .map(|i| i.message.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            return Err(RunDebateError::InvalidConfig(message));
        }
        Ok(())
    }

    fn log(&self, event_type: &'static str, payload: serde_json::Value) {
        self.conversation_logger
            .log(ConversationEvent::new(event_type, payload));
    }

    fn backend_unavailable(&self, error: GatewayError, state: &DebateState) -> RunDebateError {
        warn!("Backend unavailable: {}", error);
        self.log(
            "debate_finished",
            json!({
                "status": "backend_unavailable",
                "error": error.to_string(),
                "turns_completed": state.session.current_turn(),
            }),
        );
        RunDebateError::BackendUnavailable {
            message: error.to_string(),
            transcript: state.transcript.clone(),
        }
    }

    async fn invoke_agent(
        &self,
        profile: &AgentProfile,
        context: &AgentContext,
        progress: &dyn DebateProgressNotifier,
    ) -> Result<String, GatewayError> {
        progress.on_agent_start(profile.role);
        let result = invoke_with_retry(&self.behavior, profile.role.as_str(), || {
            self.gateway.generate(profile, context)
        })
        .await;
        progress.on_agent_end(profile.role);
        result
    }

    /// One debater's half of an exchange.
    ///
    /// Short replies are regenerated up to `max_regenerations` times and the
    /// longest attempt is accepted. A half whose invocation keeps failing is
    /// skipped and appends nothing.
    async fn play_half(
        &self,
        state: &mut DebateState,
        input: &RunDebateInput,
        side: Side,
        round: u32,
        progress: &dyn DebateProgressNotifier,
    ) -> Result<(), RunDebateError> {
        let profile = input.roster.debaters.get(side);
        let prompt = match state.transcript.last() {
            Some(turn) => turn.text.clone(),
            None => DebatePromptTemplate::opening_prompt(input.topic.content()),
        };
        let base = state.contexts.get(side).with_user(prompt.clone());

        let mut best = match self.invoke_agent(profile, &base, progress).await {
            Ok(text) => text,
            Err(e) if e.is_fatal() => return Err(self.backend_unavailable(e, state)),
            Err(e) => {
                warn!("{} skipped in round {}: {}", side, round, e);
                progress.on_turn_skipped(side, &e.to_string());
                return Ok(());
            }
        };

        let minimum = state.session.min_chars_per_turn();
        let mut regenerations = 0;
        while minimum > 0
            && char_len(&best) < minimum
            && regenerations < input.config.debate.max_regenerations
        {
            regenerations += 1;
            let length = char_len(&best);
            debug!(
                "{} reply too short ({} < {}), regeneration {}",
                side, length, minimum, regenerations
            );
            progress.on_turn_regenerated(side, regenerations, length, minimum);
            self.log(
                "turn_regenerated",
                json!({
                    "round": round,
                    "speaker": side.report_key(),
                    "attempt": regenerations,
                    "length": length,
                    "minimum": minimum,
                }),
            );

            let retry = base
                .clone()
                .with_message(Message::assistant(best.clone()))
                .with_message(Message::user(DebatePromptTemplate::regenerate_prompt(
                    &prompt, length, minimum,
                )));
            match self.invoke_agent(profile, &retry, progress).await {
                Ok(candidate) => {
                    if char_len(&candidate) > char_len(&best) {
                        best = candidate;
                    }
                }
                Err(e) if e.is_fatal() => return Err(self.backend_unavailable(e, state)),
                Err(e) => {
                    warn!("Regeneration for {} failed: {}", side, e);
                    break;
                }
            }
        }

        let text = best.trim().to_string();
        state
            .contexts
            .set(side, base.with_message(Message::assistant(text.clone())));

        let turn = state.transcript.append(round, side, text);
        progress.on_turn_accepted(turn, state.session.max_turns());
        self.log(
            "turn_accepted",
            json!({
                "round": turn.round,
                "sequence": turn.sequence,
                "speaker": turn.speaker.report_key(),
                "text": turn.text,
                "regenerations": regenerations,
            }),
        );
        Ok(())
    }

    /// Analyse the recent transcript, charge violations, rebuild restrictions
    /// and reset both debaters.
    ///
    /// A failed analysis leaves restrictions, contexts and the violation
    /// counter untouched.
    async fn run_checkpoint(
        &self,
        state: &mut DebateState,
        input: &RunDebateInput,
        analyzer: &CheckpointAnalyzer<G>,
        turn_index: u32,
        progress: &dyn DebateProgressNotifier,
    ) -> Result<Checkpoint, RunDebateError> {
        let params = &input.config.checkpoint;
        let language = &input.config.debate.language;
        let previous = state.previous_restrictions();

        info!("Checkpoint at turn {}", turn_index);
        progress.on_agent_start(AgentRole::Summarizer);
        let result = analyzer
            .analyze(
                state.transcript.window(turn_index, params.effective_window()),
                input.topic.content(),
                language,
                previous.as_deref(),
            )
            .await;
        progress.on_agent_end(AgentRole::Summarizer);

        let report = match result {
            Ok(report) => report,
            Err(AnalyzeError::Gateway(e)) if e.is_fatal() => {
                return Err(self.backend_unavailable(e, state));
            }
            Err(e) => {
                warn!("Checkpoint at turn {} skipped: {}", turn_index, e);
                progress.on_checkpoint_skipped(turn_index, &e.to_string());
                self.log(
                    "checkpoint_skipped",
                    json!({ "turn": turn_index, "reason": e.to_string() }),
                );
                return Ok(Checkpoint::Skipped);
            }
        };

        let builder = RestrictionBuilder::new(params.restriction_char_budget);
        for side in Side::BOTH {
            // A turn already seen by an earlier checkpoint is never charged again
            let latest = state
                .transcript
                .last_by(side)
                .filter(|t| t.round > state.last_checkpoint_turn)
                .map(|t| t.text.as_str());
            let charged = detect_violations(&report, state.restrictions.get(side), latest);
            if !charged.is_empty() {
                state.violations.record(side, charged.len() as u32);
                warn!("{} reused {} forbidden line(s)", side, charged.len());
                progress.on_violation(side, &charged, state.violations.total());
                self.log(
                    "violation_detected",
                    json!({
                        "turn": turn_index,
                        "speaker": side.report_key(),
                        "lines": charged,
                        "side_total": state.violations.for_side(side),
                        "total": state.violations.total(),
                    }),
                );
            }

            let restriction = builder.build(&report, state.restrictions.get(side), turn_index);
            let context = reset_context(
                &input.roster.debaters.get(side).system_prompt,
                &restriction,
                &input.topic,
                language,
            );
            state.restrictions.set(side, restriction);
            state.contexts.set(side, context);
        }
        state.checkpoints_run += 1;
        state.last_checkpoint_turn = turn_index;

        if report.should_end {
            info!(
                "Summarizer suggests ending the debate: {}",
                report.end_reason.as_deref().unwrap_or("no reason given")
            );
        }

        progress.on_checkpoint(turn_index, &report);
        self.log(
            "checkpoint_completed",
            json!({
                "turn": turn_index,
                "forbidden": {
                    "debater_a": state.restrictions.a.forbidden_count(),
                    "debater_b": state.restrictions.b.forbidden_count(),
                },
                "key_points": report.key_points,
                "current_focus": report.current_focus,
                "should_end": report.should_end,
                "end_reason": report.end_reason,
            }),
        );

        Ok(Checkpoint::Applied {
            end_hint: report.should_end,
        })
    }

    /// Regular judge evaluation. Returns `true` when the judge ended the debate.
    async fn consult_judge(
        &self,
        judge: &JudgeProtocol<G>,
        state: &mut DebateState,
        input: &RunDebateInput,
        progress: &dyn DebateProgressNotifier,
    ) -> Result<bool, RunDebateError> {
        progress.on_agent_start(AgentRole::Judge);
        let result = judge
            .evaluate(
                state
                    .transcript
                    .window(state.session.current_turn(), input.config.judge.window_turns),
                input.topic.content(),
                false,
            )
            .await;
        progress.on_agent_end(AgentRole::Judge);

        let verdict = match result {
            Ok(verdict) => verdict,
            Err(e) if e.is_fatal() => return Err(self.backend_unavailable(e, state)),
            Err(e) => {
                warn!("Judge evaluation skipped: {}", e);
                return Ok(false);
            }
        };

        progress.on_verdict(&verdict, false);
        self.log(
            "judge_verdict",
            json!({
                "turn": state.session.current_turn(),
                "forced": false,
                "verdict": verdict,
            }),
        );

        if !verdict.decision.ends_debate() {
            return Ok(false);
        }

        let reason = verdict
            .rationale
            .clone()
            .unwrap_or_else(|| format!("judge decided {}", verdict.decision));
        state.end(SessionStatus::EndedByJudge, reason)?;
        state.verdict = Some(ClosingVerdict::Rendered(verdict));
        Ok(true)
    }

    /// Forced final verdict for a debate that has already ended.
    async fn closing_verdict(
        &self,
        judge: &JudgeProtocol<G>,
        state: &DebateState,
        input: &RunDebateInput,
        progress: &dyn DebateProgressNotifier,
    ) -> ClosingVerdict {
        progress.on_agent_start(AgentRole::Judge);
        let closing = judge
            .closing_verdict(
                state
                    .transcript
                    .window(state.session.current_turn(), input.config.judge.window_turns),
                input.topic.content(),
            )
            .await;
        progress.on_agent_end(AgentRole::Judge);

        if let Some(verdict) = closing.verdict() {
            progress.on_verdict(verdict, true);
        }
        self.log(
            "judge_verdict",
            json!({
                "turn": state.session.current_turn(),
                "forced": true,
                "verdict": closing,
            }),
        );
        closing
    }
}
