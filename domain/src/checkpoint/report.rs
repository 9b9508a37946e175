//! Checkpoint report produced by the summarizer.
//!
//! The summarizer replies with JSON. [`parse_checkpoint_report`] validates
//! the shape and normalises it into a [`CheckpointReport`]: blank entries are
//! dropped and duplicates collapsed (first occurrence wins).
//!
//! Required fields: `debater_a_arguments`, `debater_b_arguments`,
//! `exhausted_lines`, `key_points`, `current_focus`.

use crate::core::error::DomainError;
use crate::core::side::{Side, SideMap};
use crate::core::string::normalize_line;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Validated analysis of a transcript window.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckpointReport {
    pub arguments: SideMap<Vec<String>>,
    pub refuted: Vec<String>,
    pub stalemate_topics: Vec<String>,
    /// Lines that should no longer be argued, per side
    pub exhausted: SideMap<Vec<String>>,
    /// Lines the summarizer saw a side reuse after they were forbidden
    pub repeated: SideMap<Vec<String>>,
    pub key_points: Vec<String>,
    pub current_focus: String,
    pub should_end: bool,
    pub end_reason: Option<String>,
}

impl CheckpointReport {
    pub fn exhausted_for(&self, side: Side) -> &[String] {
        self.exhausted.get(side)
    }

    pub fn repeated_for(&self, side: Side) -> &[String] {
        self.repeated.get(side)
    }
}

#[derive(Debug, Deserialize)]
struct RawReport {
    debater_a_arguments: Vec<String>,
    debater_b_arguments: Vec<String>,
    #[serde(default)]
    refuted_arguments: Option<RawLines>,
    #[serde(default)]
    stalemate_topics: Vec<String>,
    exhausted_lines: RawLines,
    #[serde(default)]
    repeated_lines: Option<RawLines>,
    key_points: Vec<String>,
    current_focus: String,
    #[serde(default)]
    should_end: bool,
    #[serde(default)]
    end_reason: Option<String>,
}

/// Either a flat list shared by both sides or a per-debater mapping.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawLines {
    Shared(Vec<String>),
    BySide(HashMap<String, Vec<String>>),
}

impl RawLines {
    fn split(self) -> SideMap<Vec<String>> {
        match self {
            RawLines::Shared(lines) => SideMap::new(dedup(lines.clone()), dedup(lines)),
            RawLines::BySide(map) => {
                let mut sides = SideMap::<Vec<String>>::default();
                for (key, lines) in map {
                    if let Some(side) = Side::parse_loose(&key) {
                        sides.get_mut(side).extend(lines);
                    }
                }
                SideMap::new(dedup(sides.a), dedup(sides.b))
            }
        }
    }

    fn flatten(self) -> Vec<String> {
        let sides = self.split();
        dedup(sides.a.into_iter().chain(sides.b).collect())
    }
}

/// Drop blank entries and duplicates (normalised comparison), keeping order.
fn dedup(lines: Vec<String>) -> Vec<String> {
    let mut seen = Vec::new();
    let mut out = Vec::new();
    for line in lines {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let key = normalize_line(trimmed);
        if !seen.contains(&key) {
            seen.push(key);
            out.push(trimmed.to_string());
        }
    }
    out
}

/// Validate structured summarizer output.
///
/// Fails with [`DomainError::AnalysisParse`] when the value is not an object
/// of the expected shape or a required field is missing.
pub fn parse_checkpoint_report(value: Value) -> Result<CheckpointReport, DomainError> {
    if !value.is_object() {
        return Err(DomainError::AnalysisParse(
            "summarizer reply is not a JSON object".to_string(),
        ));
    }
    let raw: RawReport =
        serde_json::from_value(value).map_err(|e| DomainError::AnalysisParse(e.to_string()))?;

    let end_reason = raw
        .end_reason
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty());

    Ok(CheckpointReport {
        arguments: SideMap::new(
            dedup(raw.debater_a_arguments),
            dedup(raw.debater_b_arguments),
        ),
        refuted: raw.refuted_arguments.map(RawLines::flatten).unwrap_or_default(),
        stalemate_topics: dedup(raw.stalemate_topics),
        exhausted: raw.exhausted_lines.split(),
        repeated: raw.repeated_lines.map(RawLines::split).unwrap_or_default(),
        key_points: dedup(raw.key_points),
        current_focus: raw.current_focus.trim().to_string(),
        should_end: raw.should_end,
        end_reason,
    })
}
