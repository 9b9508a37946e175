//! CLI command definitions

use arena_domain::OutputFormat as DomainOutputFormat;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for debate results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full transcript with checkpoint notes and the closing verdict
    Full,
    /// Only the closing verdict
    Verdict,
    /// JSON output
    Json,
}

impl From<OutputFormat> for DomainOutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => DomainOutputFormat::Full,
            OutputFormat::Verdict => DomainOutputFormat::Verdict,
            OutputFormat::Json => DomainOutputFormat::Json,
        }
    }
}

/// CLI arguments for debate-arena
#[derive(Parser, Debug)]
#[command(name = "debate-arena")]
#[command(author, version, about = "Two local models debate a topic while a summarizer keeps them honest")]
#[command(long_about = r#"
Debate Arena runs a debate between two Ollama models on a topic.

Every few turns a summarizer model reviews the recent exchanges, lists the
arguments that are exhausted or repeated, and both debaters are reset with
those lines forbidden. An optional judge can end the debate early.

Configuration files are loaded from (in priority order):
1. DEBATE_ARENA_* environment variables
2. --config <path>          Explicit config file
3. ./debate-arena.toml      Project-level config
4. ~/.config/debate-arena/config.toml   Global config

Example:
  debate-arena -p "Should cities ban cars downtown?"
  debate-arena -p "Is remote work better?" --max-turns 8 --judge -f debate.txt
"#)]
pub struct Cli {
    /// The debate topic (overrides `debate.topic` from the config)
    #[arg(short, long, value_name = "TOPIC")]
    pub prompt: Option<String>,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Also write the transcript to this file
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Maximum number of exchanges
    #[arg(long, value_name = "N")]
    pub max_turns: Option<u32>,

    /// Disable checkpoints (no summaries, no restrictions)
    #[arg(long)]
    pub no_checkpoint: bool,

    /// Enable the judge
    #[arg(long)]
    pub judge: bool,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Write daily-rolling diagnostic logs to this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Write a JSONL conversation log to this path
    #[arg(long, value_name = "PATH")]
    pub conversation_log: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_flag_set() {
        let cli = Cli::try_parse_from([
            "debate-arena",
            "-p",
            "Should cities ban cars?",
            "--max-turns",
            "8",
            "--no-checkpoint",
            "--judge",
            "-o",
            "verdict",
            "-vv",
            "-q",
            "-f",
            "out.txt",
        ])
        .unwrap();

        assert_eq!(cli.prompt.as_deref(), Some("Should cities ban cars?"));
        assert_eq!(cli.max_turns, Some(8));
        assert!(cli.no_checkpoint);
        assert!(cli.judge);
        assert_eq!(cli.output, Some(OutputFormat::Verdict));
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
        assert_eq!(cli.file, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn test_defaults_leave_config_in_charge() {
        let cli = Cli::try_parse_from(["debate-arena"]).unwrap();
        assert!(cli.prompt.is_none());
        assert!(cli.max_turns.is_none());
        assert!(cli.output.is_none());
        assert!(!cli.judge);
    }

    #[test]
    fn test_rejects_unknown_format() {
        assert!(Cli::try_parse_from(["debate-arena", "-o", "synthesis"]).is_err());
    }

    #[test]
    fn test_output_format_maps_to_domain() {
        assert_eq!(
            DomainOutputFormat::from(OutputFormat::Json),
            DomainOutputFormat::Json
        );
    }
}
