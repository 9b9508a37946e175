//! Output formatter trait

use arena_domain::{DebateOutcome, OutputFormat};

/// Trait for formatting debate outcomes
pub trait OutputFormatter {
    /// Header, every turn and the closing section
    fn format(&self, outcome: &DebateOutcome) -> String;

    /// Status, violations and the closing verdict only
    fn format_verdict_only(&self, outcome: &DebateOutcome) -> String;

    /// Format as JSON
    fn format_json(&self, outcome: &DebateOutcome) -> String;

    fn format_as(&self, outcome: &DebateOutcome, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => self.format(outcome),
            OutputFormat::Verdict => self.format_verdict_only(outcome),
            OutputFormat::Json => self.format_json(outcome),
        }
    }
}
