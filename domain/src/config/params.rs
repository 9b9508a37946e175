//! Debate, checkpoint and judge parameters.
//!
//! Plain values: the infrastructure layer fills them from config files and
//! the CLI, the application layer reads them. Counts of "turns" here are
//! exchanges, one reply from each debater.

use super::validation::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};

/// Session-level parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebateParams {
    pub max_turns: u32,
    /// Minimum reply length in characters; 0 disables the check
    pub min_chars_per_turn: usize,
    pub language: String,
    /// Regeneration attempts for a reply below `min_chars_per_turn`
    pub max_regenerations: u32,
}

impl Default for DebateParams {
    fn default() -> Self {
        Self {
            max_turns: 5,
            min_chars_per_turn: 0,
            language: "English".to_string(),
            max_regenerations: 2,
        }
    }
}

/// Checkpoint parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckpointParams {
    pub enabled: bool,
    pub interval_turns: u32,
    /// Violations that end the debate; 0 never ends it
    pub max_violations: u32,
    /// Turns shown to the summarizer; defaults to `interval_turns`
    pub window_turns: Option<u32>,
    pub excerpt_chars: usize,
    pub restriction_char_budget: usize,
}

impl Default for CheckpointParams {
    fn default() -> Self {
        Self {
            enabled: true,
            interval_turns: 2,
            max_violations: 3,
            window_turns: None,
            excerpt_chars: 500,
            restriction_char_budget: 4000,
        }
    }
}

impl CheckpointParams {
    pub fn effective_window(&self) -> u32 {
        self.window_turns.unwrap_or(self.interval_turns).max(1)
    }

    /// Checkpoints can actually fire.
    pub fn is_active(&self) -> bool {
        self.enabled && self.interval_turns > 0
    }
}

/// Judge parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgeParams {
    pub enabled: bool,
    /// Turns between judge calls; 0 means "at every checkpoint"
    pub interval_turns: u32,
    pub window_turns: u32,
    /// Ask for a closing verdict when the turn limit ends the debate
    pub verdict_on_turn_limit: bool,
}

impl Default for JudgeParams {
    fn default() -> Self {
        Self {
            enabled: false,
            interval_turns: 0,
            window_turns: 4,
            verdict_on_turn_limit: false,
        }
    }
}

impl JudgeParams {
    /// Whether the judge is consulted after `turn_index`.
    pub fn is_due(&self, turn_index: u32, checkpoint_ran: bool) -> bool {
        if !self.enabled || turn_index == 0 {
            return false;
        }
        match self.interval_turns {
            0 => checkpoint_ran,
            n => turn_index % n == 0,
        }
    }
}

/// The three parameter groups together
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DebateConfig {
    pub debate: DebateParams,
    pub checkpoint: CheckpointParams,
    pub judge: JudgeParams,
}

impl DebateConfig {
    /// Detect invalid or suspicious parameter combinations.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        if self.debate.max_turns == 0 {
            issues.push(ConfigIssue::new(
                Severity::Error,
                ConfigIssueCode::NonPositiveValue {
                    field: "debate.max_turns".to_string(),
                },
                "debate.max_turns must be at least 1",
            ));
        }

        if self.debate.language.trim().is_empty() {
            issues.push(ConfigIssue::new(
                Severity::Error,
                ConfigIssueCode::EmptyValue {
                    field: "debate.language".to_string(),
                },
                "debate.language must not be empty",
            ));
        }

        if self.checkpoint.enabled && self.checkpoint.interval_turns == 0 {
            issues.push(ConfigIssue::new(
                Severity::Error,
                ConfigIssueCode::NonPositiveValue {
                    field: "checkpoint.interval_turns".to_string(),
                },
                "checkpoint.interval_turns must be at least 1 when checkpoints are enabled",
            ));
        }

        if self.checkpoint.is_active()
            && self.checkpoint.interval_turns >= self.debate.max_turns
            && self.debate.max_turns > 0
        {
            issues.push(ConfigIssue::new(
                Severity::Warning,
                ConfigIssueCode::CheckpointNeverFires,
                format!(
                    "checkpoint.interval_turns ({}) is not below debate.max_turns ({}); no checkpoint will run",
                    self.checkpoint.interval_turns, self.debate.max_turns
                ),
            ));
        }

        if self.checkpoint.window_turns == Some(0) {
            issues.push(ConfigIssue::new(
                Severity::Error,
                ConfigIssueCode::NonPositiveValue {
                    field: "checkpoint.window_turns".to_string(),
                },
                "checkpoint.window_turns must be at least 1",
            ));
        }

        if self.judge.enabled {
            if self.judge.window_turns == 0 {
                issues.push(ConfigIssue::new(
                    Severity::Error,
                    ConfigIssueCode::NonPositiveValue {
                        field: "judge.window_turns".to_string(),
                    },
                    "judge.window_turns must be at least 1",
                ));
            }
            if self.judge.interval_turns == 0 && !self.checkpoint.is_active() {
                issues.push(ConfigIssue::new(
                    Severity::Warning,
                    ConfigIssueCode::JudgeNeverRuns,
                    "judge runs at checkpoints but checkpoints are disabled",
                ));
            }
        }

        issues
    }
}
