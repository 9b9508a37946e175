//! Violation detection and counting.
//!
//! A line is charged to a side when it was already forbidden for that side
//! before the current checkpoint and either the summarizer reports the side
//! reused it, or the summarizer re-reports it as exhausted and it appears in
//! the side's most recent turn. Each forbidden line is charged at most once
//! per checkpoint.

use crate::checkpoint::report::CheckpointReport;
use crate::core::side::{Side, SideMap};
use crate::core::string::contains_normalized;
use crate::restriction::entities::Restriction;
use serde::{Deserialize, Serialize};

/// Session-wide violation tally. Never decreases.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationCounter {
    per_side: SideMap<u32>,
}

impl ViolationCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, side: Side, count: u32) {
        *self.per_side.get_mut(side) += count;
    }

    pub fn for_side(&self, side: Side) -> u32 {
        *self.per_side.get(side)
    }

    pub fn total(&self) -> u32 {
        self.per_side.a + self.per_side.b
    }

    /// Whether the configured maximum has been reached. A maximum of zero
    /// disables violation-based termination.
    pub fn reached(&self, max_violations: u32) -> bool {
        max_violations > 0 && self.total() >= max_violations
    }
}

/// Forbidden lines of `prior` that `side` reused, per the report.
///
/// `latest_text` is the side's most recent accepted turn, if any.
pub fn detect_violations(
    report: &CheckpointReport,
    prior: &Restriction,
    latest_text: Option<&str>,
) -> Vec<String> {
    let side = prior.side();
    let mut charged: Vec<String> = Vec::new();

    let flagged = report.repeated_for(side).iter().filter_map(|l| prior.find(l));

    let re_exhausted = report
        .exhausted_for(side)
        .iter()
        .filter_map(|l| prior.find(l))
        .filter(|f| latest_text.is_some_and(|text| contains_normalized(text, &f.text)));

    for line in flagged.chain(re_exhausted) {
        if !charged.iter().any(|c| c == &line.text) {
            charged.push(line.text.clone());
        }
    }
    charged
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::restriction::entities::ForbiddenLine;

    fn prior(side: Side, lines: &[&str]) -> Restriction {
        Restriction::from_parts(
            side,
            lines
                .iter()
                .map(|l| ForbiddenLine {
                    text: l.to_string(),
                    since_turn: 2,
                    note: None,
                })
                .collect(),
            String::new(),
            "restricted".to_string(),
        )
    }

    fn report(side: Side, exhausted: &[&str], repeated: &[&str]) -> CheckpointReport {
        let mut report = CheckpointReport::default();
        *report.exhausted.get_mut(side) = exhausted.iter().map(|s| s.to_string()).collect();
        *report.repeated.get_mut(side) = repeated.iter().map(|s| s.to_string()).collect();
        report
    }

    #[test]
    fn test_counter_never_decreases_and_totals() {
        let mut counter = ViolationCounter::new();
        counter.record(Side::A, 1);
        counter.record(Side::B, 2);
        counter.record(Side::A, 0);
        assert_eq!(counter.for_side(Side::A), 1);
        assert_eq!(counter.total(), 3);
        assert!(counter.reached(3));
        assert!(!counter.reached(4));
    }

    #[test]
    fn test_zero_max_disables() {
        let mut counter = ViolationCounter::new();
        counter.record(Side::A, 10);
        assert!(!counter.reached(0));
    }

    #[test]
    fn test_re_exhausted_line_in_latest_turn_is_charged() {
        let prior = prior(Side::A, &["Cars pollute"]);
        let report = report(Side::A, &["cars pollute"], &[]);
        let charged = detect_violations(
            &report,
            &prior,
            Some("Again: CARS POLLUTE the air we breathe."),
        );
        assert_eq!(charged, vec!["Cars pollute"]);
    }

    #[test]
    fn test_re_exhausted_line_absent_from_latest_turn_is_not_charged() {
        let prior = prior(Side::A, &["Cars pollute"]);
        let report = report(Side::A, &["Cars pollute"], &[]);
        assert!(detect_violations(&report, &prior, Some("Trains are faster")).is_empty());
        assert!(detect_violations(&report, &prior, None).is_empty());
    }

    #[test]
    fn test_newly_exhausted_line_is_not_a_violation() {
        let prior = prior(Side::A, &[]);
        let report = report(Side::A, &["Cars pollute"], &[]);
        assert!(detect_violations(&report, &prior, Some("Cars pollute")).is_empty());
    }

    #[test]
    fn test_summarizer_flag_counts_once() {
        let prior = prior(Side::B, &["Cars enable jobs"]);
        let report = report(
            Side::B,
            &["Cars enable jobs"],
            &["cars enable jobs", "Cars enable jobs"],
        );
        let charged = detect_violations(&report, &prior, Some("cars enable jobs, as I said"));
        assert_eq!(charged.len(), 1);
    }

    #[test]
    fn test_flag_for_unforbidden_line_is_ignored() {
        let prior = prior(Side::B, &["Cars enable jobs"]);
        let report = report(Side::B, &[], &["Something new"]);
        assert!(detect_violations(&report, &prior, None).is_empty());
    }

    #[test]
    fn test_other_side_lines_are_ignored() {
        let prior = prior(Side::A, &["Cars pollute"]);
        let report = report(Side::B, &["Cars pollute"], &["Cars pollute"]);
        assert!(detect_violations(&report, &prior, Some("Cars pollute")).is_empty());
    }
}
