//! Console output formatter for debate results

use crate::output::formatter::OutputFormatter;
use arena_domain::{
    CheckpointReport, ClosingVerdict, DebateOutcome, Side, Turn, Verdict,
};
use colored::{ColoredString, Colorize};

/// Formats debate outcomes for console display
///
/// With `color` off the same layout is produced as plain text, which is what
/// the transcript file writer uses.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleFormatter {
    color: bool,
}

impl ConsoleFormatter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Formatter without ANSI escapes
    pub fn plain() -> Self {
        Self::new(false)
    }

    fn paint(&self, text: &str, style: fn(&str) -> ColoredString) -> String {
        if self.color {
            style(text).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn header(&self, topic: &str, max_turns: u32) -> String {
        let mut output = String::new();
        output.push_str(&self.paint("=== Debate Arena ===", |s| s.cyan().bold()));
        output.push_str("\n\n");
        output.push_str(&format!("{} {}\n", self.paint("Topic:", |s| s.cyan().bold()), topic));
        output.push_str(&format!(
            "{} up to {}\n\n",
            self.paint("Turns:", |s| s.cyan().bold()),
            max_turns
        ));
        output
    }

    pub fn round_header(&self, round: u32, max_turns: u32) -> String {
        self.paint(&format!("--- Turn {}/{} ---", round, max_turns), |s| {
            s.yellow().bold()
        })
    }

    /// One turn as "Debater A: text"
    pub fn turn(&self, turn: &Turn) -> String {
        let speaker = format!("{}:", turn.speaker.display_name());
        let speaker = match turn.speaker {
            Side::A => self.paint(&speaker, |s| s.blue().bold()),
            Side::B => self.paint(&speaker, |s| s.magenta().bold()),
        };
        format!("{} {}\n", speaker, turn.text.trim())
    }

    /// Every turn with a round header whenever the round changes
    pub fn turns(&self, turns: &[Turn], max_turns: u32) -> String {
        let mut output = String::new();
        let mut current_round = None;
        for turn in turns {
            if current_round != Some(turn.round) {
                current_round = Some(turn.round);
                output.push_str(&self.round_header(turn.round, max_turns));
                output.push('\n');
            }
            output.push_str(&self.turn(turn));
            output.push('\n');
        }
        output
    }

    pub fn checkpoint_note(&self, turn_index: u32, report: &CheckpointReport) -> String {
        let mut output = format!(
            "{}\n",
            self.paint(&format!("[checkpoint after turn {}]", turn_index), |s| {
                s.cyan()
            })
        );
        if !report.current_focus.is_empty() {
            output.push_str(&format!("  focus: {}\n", report.current_focus));
        }
        for side in Side::BOTH {
            let exhausted = report.exhausted_for(side);
            if !exhausted.is_empty() {
                output.push_str(&format!(
                    "  forbidden for {}: {}\n",
                    side.display_name(),
                    exhausted.join("; ")
                ));
            }
        }
        if report.should_end {
            let reason = report.end_reason.as_deref().unwrap_or("no reason given");
            output.push_str(&format!("  summarizer suggests ending: {}\n", reason));
        }
        output
    }

    pub fn violation_note(&self, side: Side, lines: &[String], total: u32) -> String {
        self.paint(
            &format!(
                "[violation] {} reused: {} (total {})",
                side.display_name(),
                lines.join("; "),
                total
            ),
            |s| s.red(),
        )
    }

    pub fn verdict(&self, verdict: &Verdict) -> String {
        let mut output = format!(
            "{} {}\n",
            self.paint("Decision:", |s| s.green().bold()),
            verdict.decision.as_str().to_uppercase()
        );
        if let Some(winner) = verdict.winner {
            output.push_str(&format!(
                "{} {}\n",
                self.paint("Winner:", |s| s.green().bold()),
                winner.display_name()
            ));
        }
        if let Some(rationale) = verdict.rationale.as_deref() {
            output.push_str(&format!(
                "{} {}\n",
                self.paint("Rationale:", |s| s.green().bold()),
                rationale
            ));
        }
        output
    }

    /// Status line, statistics and the closing verdict
    pub fn closing(&self, outcome: &DebateOutcome) -> String {
        let mut output = String::new();
        output.push_str(&self.paint("=== Result ===", |s| s.cyan().bold()));
        output.push_str("\n\n");
        output.push_str(&format!(
            "{} {}\n",
            self.paint("Status:", |s| s.cyan().bold()),
            outcome.status.description()
        ));
        output.push_str(&format!(
            "{} {}/{}\n",
            self.paint("Turns completed:", |s| s.cyan().bold()),
            outcome.turns_completed,
            outcome.max_turns
        ));
        output.push_str(&format!(
            "{} {}\n",
            self.paint("Checkpoints:", |s| s.cyan().bold()),
            outcome.checkpoints_run
        ));
        output.push_str(&format!(
            "{} Debater A {}, Debater B {} (total {})\n",
            self.paint("Violations:", |s| s.cyan().bold()),
            outcome.violations.for_side(Side::A),
            outcome.violations.for_side(Side::B),
            outcome.violations.total()
        ));
        if let Some(reason) = outcome.end_reason.as_deref() {
            output.push_str(&format!(
                "{} {}\n",
                self.paint("Reason:", |s| s.cyan().bold()),
                reason
            ));
        }

        match &outcome.verdict {
            Some(ClosingVerdict::Rendered(verdict)) => {
                output.push('\n');
                output.push_str(&self.verdict(verdict));
            }
            Some(ClosingVerdict::Unavailable { reason }) => {
                output.push('\n');
                output.push_str(&format!(
                    "{} {}\n",
                    self.paint("Verdict:", |s| s.yellow().bold()),
                    reason
                ));
            }
            None => {}
        }
        output
    }
}

impl Default for ConsoleFormatter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, outcome: &DebateOutcome) -> String {
        let mut output = self.header(outcome.topic.content(), outcome.max_turns);
        output.push_str(&self.turns(outcome.transcript.turns(), outcome.max_turns));
        output.push_str(&self.closing(outcome));
        output
    }

    fn format_verdict_only(&self, outcome: &DebateOutcome) -> String {
        let mut output = format!(
            "{} {}\n\n",
            self.paint("Topic:", |s| s.bold()),
            outcome.topic.content()
        );
        output.push_str(&self.closing(outcome));
        output
    }

    fn format_json(&self, outcome: &DebateOutcome) -> String {
        serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string())
    }
}
