//! Progress notification port
//!
//! Defines the interface for reporting progress while a debate runs.

use arena_domain::{AgentRole, CheckpointReport, DebateOutcome, Side, Turn, Verdict};

/// Callback for progress updates during a debate
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, log file, etc.). Every method has a
/// no-op default so implementations only override what they show.
pub trait DebateProgressNotifier: Send + Sync {
    /// Called once before the first turn
    fn on_debate_start(&self, _topic: &str, _max_turns: u32) {}

    /// Called when an agent is invoked
    fn on_agent_start(&self, _role: AgentRole) {}

    /// Called when an agent invocation returns, successfully or not
    fn on_agent_end(&self, _role: AgentRole) {}

    /// Called when a turn is appended to the transcript
    fn on_turn_accepted(&self, _turn: &Turn, _max_turns: u32) {}

    /// Called when a short reply is sent back for regeneration
    fn on_turn_regenerated(&self, _side: Side, _attempt: u32, _length: usize, _minimum: usize) {}

    /// Called when a debater's half of an exchange is skipped
    fn on_turn_skipped(&self, _side: Side, _reason: &str) {}

    /// Called after a checkpoint has updated the restrictions
    fn on_checkpoint(&self, _turn_index: u32, _report: &CheckpointReport) {}

    /// Called when a checkpoint turned into a no-op
    fn on_checkpoint_skipped(&self, _turn_index: u32, _reason: &str) {}

    /// Called when forbidden lines were reused
    fn on_violation(&self, _side: Side, _lines: &[String], _total: u32) {}

    /// Called for every judge decision
    fn on_verdict(&self, _verdict: &Verdict, _forced: bool) {}

    /// Called once the session reached a terminal status
    fn on_debate_end(&self, _outcome: &DebateOutcome) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl DebateProgressNotifier for NoProgress {}
