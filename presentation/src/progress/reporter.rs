//! Progress reporting for a running debate

use crate::output::console::ConsoleFormatter;
use arena_application::DebateProgressNotifier;
use arena_domain::{AgentRole, CheckpointReport, Side, Turn, Verdict};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;
use std::time::Duration;

/// Reports progress with a spinner while an agent is thinking.
///
/// In live mode every accepted turn is printed to stdout as it arrives,
/// together with checkpoint, violation and judge notes. Otherwise only short
/// status lines are written to stderr and the caller prints the result.
pub struct ProgressReporter {
    formatter: ConsoleFormatter,
    live_transcript: bool,
    spinner: Mutex<Option<ProgressBar>>,
    last_round: Mutex<Option<u32>>,
}

impl ProgressReporter {
    pub fn new(formatter: ConsoleFormatter, live_transcript: bool) -> Self {
        Self {
            formatter,
            live_transcript,
            spinner: Mutex::new(None),
            last_round: Mutex::new(None),
        }
    }

    /// Whether turns are printed as they arrive
    pub fn is_live(&self) -> bool {
        self.live_transcript
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn role_label(role: AgentRole) -> &'static str {
        match role {
            AgentRole::Debater(side) => side.display_name(),
            AgentRole::Summarizer => "Summarizer",
            AgentRole::Judge => "Judge",
        }
    }

    fn note(&self, text: &str) {
        if self.live_transcript {
            println!("{}", text.trim_end());
        } else {
            eprintln!("{}", text.trim_end());
        }
    }
}

impl DebateProgressNotifier for ProgressReporter {
    fn on_debate_start(&self, topic: &str, max_turns: u32) {
        if self.live_transcript {
            print!("{}", self.formatter.header(topic, max_turns));
        } else {
            eprintln!("{} {}", "->".cyan(), topic.bold());
        }
    }

    fn on_agent_start(&self, role: AgentRole) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(Self::role_label(role));
        pb.set_message("is thinking...");
        pb.enable_steady_tick(Duration::from_millis(120));

        if let Ok(mut spinner) = self.spinner.lock()
            && let Some(previous) = spinner.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn on_agent_end(&self, _role: AgentRole) {
        if let Ok(mut spinner) = self.spinner.lock()
            && let Some(pb) = spinner.take()
        {
            pb.finish_and_clear();
        }
    }

    fn on_turn_accepted(&self, turn: &Turn, max_turns: u32) {
        if !self.live_transcript {
            eprintln!(
                "  {} {} (turn {}/{})",
                "v".green(),
                turn.speaker.display_name(),
                turn.round,
                max_turns
            );
            return;
        }

        if let Ok(mut last_round) = self.last_round.lock()
            && *last_round != Some(turn.round)
        {
            *last_round = Some(turn.round);
            println!("{}", self.formatter.round_header(turn.round, max_turns));
        }
        println!("{}", self.formatter.turn(turn));
    }

    fn on_turn_regenerated(&self, side: Side, attempt: u32, length: usize, minimum: usize) {
        eprintln!(
            "  {} {} reply too short ({} < {} chars), regenerating (attempt {})",
            "!".yellow(),
            side.display_name(),
            length,
            minimum,
            attempt
        );
    }

    fn on_turn_skipped(&self, side: Side, reason: &str) {
        eprintln!(
            "  {} {} skipped: {}",
            "x".red(),
            side.display_name(),
            reason
        );
    }

    fn on_checkpoint(&self, turn_index: u32, report: &CheckpointReport) {
        self.note(&self.formatter.checkpoint_note(turn_index, report));
    }

    fn on_checkpoint_skipped(&self, turn_index: u32, reason: &str) {
        self.note(&format!(
            "{} {}",
            format!("[checkpoint after turn {} skipped]", turn_index).yellow(),
            reason
        ));
    }

    fn on_violation(&self, side: Side, lines: &[String], total: u32) {
        self.note(&self.formatter.violation_note(side, lines, total));
    }

    fn on_verdict(&self, verdict: &Verdict, forced: bool) {
        let label = if forced { "[final verdict]" } else { "[judge]" };
        self.note(&format!(
            "{} {}",
            label.green(),
            verdict.decision.as_str().to_uppercase()
        ));
    }
}
