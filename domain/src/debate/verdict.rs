//! Judge verdicts and their parsing.
//!
//! The judge is asked for a JSON object; keyword parsing is the fallback.
//! Ambiguous replies default to [`Decision::Continue`].

use crate::core::side::Side;
use crate::parsing::parse_json_object;
use serde::{Deserialize, Serialize};

/// What the judge decided about the debate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Continue,
    EndAgreement,
    EndRefutation,
    EndConcession,
}

impl Decision {
    pub fn ends_debate(self) -> bool {
        !matches!(self, Decision::Continue)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Decision::Continue => "continue",
            Decision::EndAgreement => "end_agreement",
            Decision::EndRefutation => "end_refutation",
            Decision::EndConcession => "end_concession",
        }
    }

    fn parse(s: &str) -> Option<Decision> {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "continue" => Some(Decision::Continue),
            "end_agreement" | "agreement" => Some(Decision::EndAgreement),
            "end_refutation" | "refutation" => Some(Decision::EndRefutation),
            "end_concession" | "concession" => Some(Decision::EndConcession),
            _ => None,
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The judge's decision with optional rationale and winner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub decision: Decision,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<Side>,
}

impl Verdict {
    pub fn new(decision: Decision) -> Self {
        Self {
            decision,
            rationale: None,
            winner: None,
        }
    }

    pub fn continue_debate() -> Self {
        Self::new(Decision::Continue)
    }

    pub fn with_rationale(mut self, rationale: impl Into<String>) -> Self {
        self.rationale = Some(rationale.into());
        self
    }

    pub fn with_winner(mut self, winner: Side) -> Self {
        self.winner = Some(winner);
        self
    }
}

/// Final verdict attached to a finished session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ClosingVerdict {
    Rendered(Verdict),
    Unavailable { reason: String },
}

impl ClosingVerdict {
    pub const NO_VERDICT: &'static str = "no verdict available";

    pub fn unavailable() -> Self {
        ClosingVerdict::Unavailable {
            reason: Self::NO_VERDICT.to_string(),
        }
    }

    pub fn verdict(&self) -> Option<&Verdict> {
        match self {
            ClosingVerdict::Rendered(v) => Some(v),
            ClosingVerdict::Unavailable { .. } => None,
        }
    }
}

/// Parse a judge reply into a [`Verdict`].
///
/// # Supported Formats
///
/// 1. **JSON** (preferred): `{"decision": "end_agreement", "rationale": "...", "winner": "A"}`
/// 2. **Keywords**: `END_REFUTATION`, `END_CONCESSION`, `END_AGREEMENT`, `CONTINUE`
///
/// Anything else is `Continue`, with the reply kept as rationale.
pub fn parse_verdict(response: &str) -> Verdict {
    if let Some(value) = parse_json_object(response)
        && let Some(decision) = value
            .get("decision")
            .and_then(|d| d.as_str())
            .and_then(Decision::parse)
    {
        let rationale = value
            .get("rationale")
            .and_then(|r| r.as_str())
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string);
        let winner = value
            .get("winner")
            .and_then(|w| w.as_str())
            .and_then(Side::parse_loose);
        return Verdict {
            decision,
            rationale,
            winner,
        };
    }

    let upper = response.to_uppercase();
    let decision = if upper.contains("END_CONCESSION") {
        Decision::EndConcession
    } else if upper.contains("END_REFUTATION") {
        Decision::EndRefutation
    } else if upper.contains("END_AGREEMENT") {
        Decision::EndAgreement
    } else {
        Decision::Continue
    };

    let trimmed = response.trim();
    Verdict {
        decision,
        rationale: (!trimmed.is_empty()).then(|| trimmed.to_string()),
        winner: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_json_verdict() {
        let verdict = parse_verdict(
            r#"{"decision": "end_refutation", "rationale": "B never answered the cost argument", "winner": "A"}"#,
        );
        assert_eq!(verdict.decision, Decision::EndRefutation);
        assert_eq!(verdict.winner, Some(Side::A));
        assert_eq!(
            verdict.rationale.as_deref(),
            Some("B never answered the cost argument")
        );
    }

    #[test]
    fn test_parse_fenced_json_with_null_winner() {
        let reply = "```json\n{\"decision\": \"end_agreement\", \"rationale\": \"Both converge\", \"winner\": null}\n```";
        let verdict = parse_verdict(reply);
        assert_eq!(verdict.decision, Decision::EndAgreement);
        assert!(verdict.winner.is_none());
    }

    #[test]
    fn test_parse_keyword_fallback() {
        let verdict = parse_verdict("Decision: END_CONCESSION. Debater B conceded.");
        assert_eq!(verdict.decision, Decision::EndConcession);
        assert!(verdict.rationale.unwrap().contains("conceded"));
    }

    #[test]
    fn test_ambiguous_defaults_to_continue() {
        assert_eq!(
            parse_verdict("Both sides make good points.").decision,
            Decision::Continue
        );
        assert_eq!(parse_verdict("").decision, Decision::Continue);
        assert!(parse_verdict("").rationale.is_none());
    }

    #[test]
    fn test_unknown_json_decision_falls_back_to_keywords() {
        let verdict = parse_verdict(r#"{"decision": "maybe"} CONTINUE"#);
        assert_eq!(verdict.decision, Decision::Continue);
    }

    #[test]
    fn test_closing_verdict_unavailable() {
        let closing = ClosingVerdict::unavailable();
        assert!(closing.verdict().is_none());
        assert_eq!(
            closing,
            ClosingVerdict::Unavailable {
                reason: "no verdict available".to_string()
            }
        );
    }
}
