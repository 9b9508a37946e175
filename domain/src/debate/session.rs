//! Debate session entity and its one-way status machine.

use crate::config::DebateParams;
use crate::core::error::DomainError;
use crate::core::topic::Topic;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a debate session.
///
/// `Running` is the only non-terminal state. Once a terminal state is
/// reached the session never re-enters `Running` nor moves to another
/// terminal state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    Running,
    EndedByTurnLimit,
    EndedByJudge,
    EndedByViolations,
    Cancelled,
}

impl SessionStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, SessionStatus::Running)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SessionStatus::Running => "running",
            SessionStatus::EndedByTurnLimit => "ended_by_turn_limit",
            SessionStatus::EndedByJudge => "ended_by_judge",
            SessionStatus::EndedByViolations => "ended_by_violations",
            SessionStatus::Cancelled => "cancelled",
        }
    }

    /// Human-readable reason shown at the end of a transcript.
    pub fn description(self) -> &'static str {
        match self {
            SessionStatus::Running => "Debate in progress",
            SessionStatus::EndedByTurnLimit => "Turn limit reached",
            SessionStatus::EndedByJudge => "Ended by the judge",
            SessionStatus::EndedByViolations => "Too many rule violations",
            SessionStatus::Cancelled => "Cancelled",
        }
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single debate session (Entity)
///
/// Owned and mutated only by the orchestrator. `current_turn` counts
/// completed exchanges (A then B).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebateSession {
    topic: Topic,
    max_turns: u32,
    min_chars_per_turn: usize,
    language: String,
    current_turn: u32,
    status: SessionStatus,
}

impl DebateSession {
    pub fn new(topic: Topic, params: &DebateParams) -> Self {
        Self {
            topic,
            max_turns: params.max_turns,
            min_chars_per_turn: params.min_chars_per_turn,
            language: params.language.clone(),
            current_turn: 0,
            status: SessionStatus::Running,
        }
    }

    pub fn topic(&self) -> &Topic {
        &self.topic
    }

    pub fn max_turns(&self) -> u32 {
        self.max_turns
    }

    pub fn min_chars_per_turn(&self) -> usize {
        self.min_chars_per_turn
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn current_turn(&self) -> u32 {
        self.current_turn
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == SessionStatus::Running
    }

    /// Record a completed exchange and return the new turn index.
    pub fn complete_exchange(&mut self) -> Result<u32, DomainError> {
        if self.status.is_terminal() {
            return Err(DomainError::IllegalTransition {
                from: self.status,
                to: SessionStatus::Running,
            });
        }
        self.current_turn += 1;
        Ok(self.current_turn)
    }

    pub fn turn_limit_reached(&self) -> bool {
        self.current_turn >= self.max_turns
    }

    /// Move to a terminal status. Fails if already terminal or if `status`
    /// is `Running`.
    pub fn end(&mut self, status: SessionStatus) -> Result<(), DomainError> {
        if self.status.is_terminal() || !status.is_terminal() {
            return Err(DomainError::IllegalTransition {
                from: self.status,
                to: status,
            });
        }
        self.status = status;
        Ok(())
    }
}
