//! Restriction entities

use crate::core::side::Side;
use crate::core::string::normalize_line;
use serde::{Deserialize, Serialize};

/// An argument line a side may no longer use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForbiddenLine {
    pub text: String,
    /// Turn index of the checkpoint that first forbade this line
    pub since_turn: u32,
    /// Extra context shown next to the line (refuted, stalemate)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ForbiddenLine {
    pub fn matches(&self, line: &str) -> bool {
        normalize_line(&self.text) == normalize_line(line)
    }
}

/// Restriction state for one side.
///
/// Replaced at every successful checkpoint. The forbidden set only grows:
/// a new restriction always starts from the previous one's lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Restriction {
    side: Side,
    forbidden: Vec<ForbiddenLine>,
    summary: String,
    rendered: String,
}

impl Restriction {
    /// Restriction in force before the first checkpoint.
    pub fn empty(side: Side) -> Self {
        Self {
            side,
            forbidden: Vec::new(),
            summary: String::new(),
            rendered: String::new(),
        }
    }

    pub(crate) fn from_parts(
        side: Side,
        forbidden: Vec<ForbiddenLine>,
        summary: String,
        rendered: String,
    ) -> Self {
        Self {
            side,
            forbidden,
            summary,
            rendered,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// Forbidden lines, oldest first.
    pub fn forbidden_lines(&self) -> &[ForbiddenLine] {
        &self.forbidden
    }

    pub fn forbidden_count(&self) -> usize {
        self.forbidden.len()
    }

    /// Find the forbidden line equivalent to `line`, if any.
    pub fn find(&self, line: &str) -> Option<&ForbiddenLine> {
        self.forbidden.iter().find(|f| f.matches(line))
    }

    pub fn is_forbidden(&self, line: &str) -> bool {
        self.find(line).is_some()
    }

    /// Condensed summary of the debate at the last checkpoint.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    /// Text injected into the debater's context.
    pub fn rendered_text(&self) -> &str {
        &self.rendered
    }

    pub fn is_empty(&self) -> bool {
        self.rendered.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_restriction() {
        let r = Restriction::empty(Side::A);
        assert!(r.is_empty());
        assert_eq!(r.forbidden_count(), 0);
        assert!(!r.is_forbidden("anything"));
    }

    #[test]
    fn test_find_is_normalized() {
        let r = Restriction::from_parts(
            Side::B,
            vec![ForbiddenLine {
                text: "Cars enable jobs".to_string(),
                since_turn: 2,
                note: None,
            }],
            String::new(),
            "x".to_string(),
        );
        assert!(r.is_forbidden("cars   ENABLE jobs"));
        assert_eq!(r.find("cars enable jobs").unwrap().since_turn, 2);
        assert!(!r.is_forbidden("cars enable"));
    }
}
