//! Result of a finished debate session.

use crate::core::topic::Topic;
use crate::debate::session::SessionStatus;
use crate::debate::transcript::Transcript;
use crate::debate::verdict::ClosingVerdict;
use crate::restriction::violation::ViolationCounter;
use serde::{Deserialize, Serialize};

/// Everything a finished session hands back to its caller.
///
/// Every termination path produces one of these, including cancellation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebateOutcome {
    pub topic: Topic,
    pub status: SessionStatus,
    pub transcript: Transcript,
    /// Completed exchanges
    pub turns_completed: u32,
    pub max_turns: u32,
    pub checkpoints_run: u32,
    pub violations: ViolationCounter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verdict: Option<ClosingVerdict>,
    /// Free-text reason for the termination, when one is known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_reason: Option<String>,
}

impl DebateOutcome {
    /// Whether the session reached a clean terminal state.
    pub fn is_clean(&self) -> bool {
        self.status.is_terminal()
    }
}
