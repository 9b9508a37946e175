//! Restriction builder.
//!
//! Folds a [`CheckpointReport`] into the previous [`Restriction`] of a side:
//! exhausted lines are unioned into the forbidden set, and the restriction
//! text is re-rendered deterministically.
//!
//! The rendered text is kept under a character budget. Over budget, detail is
//! shed in this order: notes on the oldest forbidden lines, key points,
//! stalemate topics, refuted arguments, the current focus. Forbidden lines
//! themselves are always rendered, so a budget smaller than the bare list is
//! exceeded rather than dropping a line.

use crate::checkpoint::report::CheckpointReport;
use crate::core::string::contains_normalized;
use crate::prompt::template::DebatePromptTemplate;
use crate::restriction::entities::{ForbiddenLine, Restriction};

/// Default character budget of the rendered restriction text
pub const DEFAULT_CHAR_BUDGET: usize = 4000;

/// Number of key points carried into the summary
pub const KEY_POINT_LIMIT: usize = 5;

/// Builds per-side restrictions from checkpoint reports.
#[derive(Debug, Clone)]
pub struct RestrictionBuilder {
    char_budget: usize,
}

impl Default for RestrictionBuilder {
    fn default() -> Self {
        Self {
            char_budget: DEFAULT_CHAR_BUDGET,
        }
    }
}

#[derive(Debug, Clone)]
struct Draft {
    lines: Vec<(String, Option<String>)>,
    refuted: Vec<String>,
    stalemate: Vec<String>,
    key_points: Vec<String>,
    focus: Option<String>,
}

impl RestrictionBuilder {
    pub fn new(char_budget: usize) -> Self {
        Self { char_budget }
    }

    pub fn char_budget(&self) -> usize {
        self.char_budget
    }

    /// Build the restriction that replaces `prior` after checkpoint `turn`.
    pub fn build(&self, report: &CheckpointReport, prior: &Restriction, turn: u32) -> Restriction {
        let side = prior.side();
        let mut forbidden: Vec<ForbiddenLine> = prior.forbidden_lines().to_vec();

        for line in report.exhausted_for(side) {
            if forbidden.iter().any(|f| f.matches(line)) {
                continue;
            }
            forbidden.push(ForbiddenLine {
                text: line.clone(),
                since_turn: turn,
                note: Self::note_for(line, report),
            });
        }

        let key_points: Vec<String> = report
            .key_points
            .iter()
            .skip(report.key_points.len().saturating_sub(KEY_POINT_LIMIT))
            .cloned()
            .collect();
        let focus = (!report.current_focus.is_empty()).then(|| report.current_focus.clone());
        let summary = Self::summary_text(&key_points, focus.as_deref());

        let draft = Draft {
            lines: forbidden
                .iter()
                .map(|f| (f.text.clone(), Some(Self::detail(f))))
                .collect(),
            refuted: report.refuted.clone(),
            stalemate: report.stalemate_topics.clone(),
            key_points,
            focus,
        };
        let rendered = self.render_within_budget(draft);

        Restriction::from_parts(side, forbidden, summary, rendered)
    }

    fn note_for(line: &str, report: &CheckpointReport) -> Option<String> {
        if report.refuted.iter().any(|r| contains_normalized(r, line) || contains_normalized(line, r)) {
            Some("refuted".to_string())
        } else if report
            .stalemate_topics
            .iter()
            .any(|s| contains_normalized(s, line) || contains_normalized(line, s))
        {
            Some("stalemate".to_string())
        } else {
            None
        }
    }

    fn detail(line: &ForbiddenLine) -> String {
        match &line.note {
            Some(note) => format!("{}, since turn {}", note, line.since_turn),
            None => format!("since turn {}", line.since_turn),
        }
    }

    fn summary_text(key_points: &[String], focus: Option<&str>) -> String {
        let mut parts: Vec<String> = key_points.to_vec();
        if let Some(focus) = focus {
            parts.push(format!("Current focus: {}", focus));
        }
        parts.join(" ")
    }

    fn render_within_budget(&self, mut draft: Draft) -> String {
        let mut text = Self::render(&draft);
        let over = |t: &str| t.chars().count() > self.char_budget;

        for i in 0..draft.lines.len() {
            if !over(&text) {
                return text;
            }
            draft.lines[i].1 = None;
            text = Self::render(&draft);
        }
        for list in [0, 1, 2] {
            loop {
                if !over(&text) {
                    return text;
                }
                let target = match list {
                    0 => &mut draft.key_points,
                    1 => &mut draft.stalemate,
                    _ => &mut draft.refuted,
                };
                if target.is_empty() {
                    break;
                }
                target.remove(0);
                text = Self::render(&draft);
            }
        }
        if over(&text) && draft.focus.is_some() {
            draft.focus = None;
            text = Self::render(&draft);
        }
        text
    }

    fn render(draft: &Draft) -> String {
        let mut sections: Vec<String> = Vec::new();

        if !draft.lines.is_empty() {
            let mut s = DebatePromptTemplate::FORBIDDEN_HEADING.to_string();
            for (line, detail) in &draft.lines {
                match detail {
                    Some(d) => s.push_str(&format!("\n  - {} ({})", line, d)),
                    None => s.push_str(&format!("\n  - {}", line)),
                }
            }
            sections.push(s);
        }
        if !draft.refuted.is_empty() {
            sections.push(Self::bullets(DebatePromptTemplate::REFUTED_HEADING, &draft.refuted));
        }
        if !draft.stalemate.is_empty() {
            sections.push(Self::bullets(
                DebatePromptTemplate::STALEMATE_HEADING,
                &draft.stalemate,
            ));
        }
        if !draft.key_points.is_empty() || draft.focus.is_some() {
            let mut s = Self::bullets(DebatePromptTemplate::SUMMARY_HEADING, &draft.key_points);
            if let Some(focus) = &draft.focus {
                s.push_str(&format!("\nCurrent focus: {}", focus));
            }
            sections.push(s);
        }

        if sections.is_empty() {
            return String::new();
        }

        format!(
            "{}\n{}\n\n{}\n{}",
            DebatePromptTemplate::RESTRICTION_HEADER,
            sections.join("\n\n"),
            DebatePromptTemplate::RESTRICTION_WARNING,
            DebatePromptTemplate::RESTRICTION_FOOTER
        )
    }

    fn bullets(heading: &str, items: &[String]) -> String {
        let mut s = heading.to_string();
        for item in items {
            s.push_str(&format!("\n  - {}", item));
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::side::Side;

    fn report_with(side: Side, exhausted: &[&str]) -> CheckpointReport {
        let mut report = CheckpointReport {
            key_points: vec!["Costs dominate".to_string()],
            current_focus: "Funding".to_string(),
            ..CheckpointReport::default()
        };
        *report.exhausted.get_mut(side) = exhausted.iter().map(|s| s.to_string()).collect();
        report
    }

    #[test]
    fn test_forbidden_set_grows_monotonically() {
        let builder = RestrictionBuilder::default();
        let r0 = Restriction::empty(Side::A);
        let r1 = builder.build(&report_with(Side::A, &["Line one"]), &r0, 2);
        let r2 = builder.build(&report_with(Side::A, &["line ONE", "Line two"]), &r1, 4);
        // A report that forgets earlier lines does not shrink the set
        let r3 = builder.build(&report_with(Side::A, &[]), &r2, 6);

        assert_eq!(r1.forbidden_count(), 1);
        assert_eq!(r2.forbidden_count(), 2);
        assert_eq!(r3.forbidden_count(), 2);
        assert_eq!(r3.find("line one").unwrap().since_turn, 2);
        assert_eq!(r3.find("line two").unwrap().since_turn, 4);
    }

    #[test]
    fn test_other_side_lines_do_not_leak() {
        let builder = RestrictionBuilder::default();
        let r = builder.build(
            &report_with(Side::B, &["B only"]),
            &Restriction::empty(Side::A),
            2,
        );
        assert_eq!(r.forbidden_count(), 0);
    }

    #[test]
    fn test_render_contains_every_forbidden_line_and_summary() {
        let builder = RestrictionBuilder::default();
        let r = builder.build(
            &report_with(Side::A, &["Line one", "Line two"]),
            &Restriction::empty(Side::A),
            2,
        );
        let text = r.rendered_text();
        assert!(text.starts_with(DebatePromptTemplate::RESTRICTION_HEADER));
        assert!(text.contains("  - Line one (since turn 2)"));
        assert!(text.contains("  - Line two"));
        assert!(text.contains("Costs dominate"));
        assert!(text.contains("Current focus: Funding"));
        assert_eq!(r.summary(), "Costs dominate Current focus: Funding");
    }

    #[test]
    fn test_render_is_deterministic() {
        let builder = RestrictionBuilder::default();
        let report = report_with(Side::A, &["x", "y"]);
        let prior = Restriction::empty(Side::A);
        assert_eq!(builder.build(&report, &prior, 2), builder.build(&report, &prior, 2));
    }

    #[test]
    fn test_notes_mark_refuted_lines() {
        let mut report = report_with(Side::A, &["Bikes are slow"]);
        report.refuted = vec!["Bikes are slow".to_string()];
        let r = RestrictionBuilder::default().build(&report, &Restriction::empty(Side::A), 2);
        assert_eq!(r.forbidden_lines()[0].note.as_deref(), Some("refuted"));
        assert!(r.rendered_text().contains("Bikes are slow (refuted, since turn 2)"));
    }

    #[test]
    fn test_budget_sheds_detail_but_keeps_lines() {
        let lines: Vec<String> = (0..20).map(|i| format!("Forbidden line number {}", i)).collect();
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let mut report = report_with(Side::A, &refs);
        report.key_points = (0..10).map(|i| format!("key point {}", i)).collect();
        report.stalemate_topics = vec!["stalemate".to_string()];

        let tight = RestrictionBuilder::new(200);
        let r = tight.build(&report, &Restriction::empty(Side::A), 2);
        let text = r.rendered_text();

        for line in &lines {
            assert!(text.contains(line.as_str()), "missing {}", line);
        }
        assert!(!text.contains("since turn"));
        assert!(!text.contains("key point"));
        assert_eq!(r.forbidden_count(), 20);
    }

    #[test]
    fn test_budget_trims_oldest_details_first() {
        let mut report = report_with(Side::A, &["alpha", "beta"]);
        report.key_points.clear();
        report.current_focus.clear();
        let full = RestrictionBuilder::new(usize::MAX)
            .build(&report, &Restriction::empty(Side::A), 2)
            .rendered_text()
            .chars()
            .count();

        // One detail's worth of room less than the full rendering
        let builder = RestrictionBuilder::new(full - 5);
        let text = builder
            .build(&report, &Restriction::empty(Side::A), 2)
            .rendered_text()
            .to_string();
        assert!(text.contains("  - alpha\n"));
        assert!(text.contains("  - beta (since turn 2)"));
    }

    #[test]
    fn test_empty_report_renders_nothing() {
        let report = CheckpointReport::default();
        let r = RestrictionBuilder::default().build(&report, &Restriction::empty(Side::A), 2);
        assert!(r.is_empty());
        assert_eq!(r.summary(), "");
    }
}
