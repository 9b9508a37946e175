//! Transcript of accepted turns.

use crate::core::side::Side;
use crate::core::string::truncate_chars;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One accepted debater message. Immutable once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    /// 1-based sequence number, one per accepted half of an exchange
    pub sequence: u32,
    /// Exchange (round) this turn belongs to, 1-based
    pub round: u32,
    pub speaker: Side,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// Append-only ordered record of turns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn; the sequence number is assigned here.
    pub fn append(&mut self, round: u32, speaker: Side, text: impl Into<String>) -> &Turn {
        let sequence = self.turns.len() as u32 + 1;
        self.turns.push(Turn {
            sequence,
            round,
            speaker,
            text: text.into(),
            timestamp: Utc::now(),
        });
        &self.turns[self.turns.len() - 1]
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Latest turn spoken by `side`.
    pub fn last_by(&self, side: Side) -> Option<&Turn> {
        self.turns.iter().rev().find(|t| t.speaker == side)
    }

    /// Number of distinct rounds that have at least one accepted turn.
    pub fn rounds(&self) -> u32 {
        let mut rounds: Vec<u32> = self.turns.iter().map(|t| t.round).collect();
        rounds.dedup();
        rounds.len() as u32
    }

    /// Read-only view over the turns of the `rounds` rounds ending at
    /// `current_round`. Rounds with no accepted turn still count.
    pub fn window(&self, current_round: u32, rounds: u32) -> &[Turn] {
        let first_round = current_round
            .saturating_sub(rounds.saturating_sub(1))
            .max(1);
        let start = self
            .turns
            .iter()
            .position(|t| t.round >= first_round)
            .unwrap_or(self.turns.len());
        &self.turns[start..]
    }
}

/// Render turns as "Debater A: text" blocks, truncating each to `excerpt_chars`.
pub fn format_window(turns: &[Turn], excerpt_chars: usize) -> String {
    turns
        .iter()
        .map(|t| format!("{}: {}", t.speaker, truncate_chars(&t.text, excerpt_chars)))
        .collect::<Vec<_>>()
        .join("\n\n")
}
