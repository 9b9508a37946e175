//! CLI entrypoint for Debate Arena
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow, bail};
use arena_application::{
    ConversationLogger, DebateProgressNotifier, NoProgress, RunDebateError, RunDebateInput,
    RunDebateUseCase,
};
use arena_domain::{OutputFormat, Severity, Topic, has_errors};
use arena_infrastructure::{ConfigLoader, FileConfig, JsonlConversationLogger, OllamaGateway};
use arena_presentation::{
    Cli, ConsoleFormatter, OutputFormatter, ProgressReporter, TranscriptFileWriter,
};
use clap::Parser;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Initialize logging based on verbosity level. `RUST_LOG` wins when set.
fn init_tracing(cli: &Cli) -> Option<WorkerGuard> {
    let level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let (file_layer, guard) = match &cli.log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "debate-arena.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .with(file_layer)
        .init();

    guard
}

/// Load config files unless disabled, then apply command-line overrides.
fn load_config(cli: &Cli) -> Result<FileConfig> {
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        if let Some(path) = &cli.config
            && !path.exists()
        {
            bail!("Config file not found: {}", path.display());
        }
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };

    if let Some(prompt) = &cli.prompt {
        config.debate.topic = Some(prompt.clone());
    }
    if let Some(max_turns) = cli.max_turns {
        config.debate.max_turns = max_turns;
    }
    if cli.no_checkpoint {
        config.checkpoint.enabled = false;
    }
    if cli.judge {
        config.judge.enabled = true;
    }
    if let Some(format) = cli.output {
        config.output.format = Some(format.into());
    }
    if let Some(path) = &cli.conversation_log {
        config.output.conversation_log = Some(path.clone());
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = init_tracing(&cli);

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    info!("Starting Debate Arena");

    let config = load_config(&cli)?;

    let issues = config.validate();
    for issue in &issues {
        match issue.severity {
            Severity::Error => eprintln!("{}", issue),
            Severity::Warning => warn!("{}", issue.message),
        }
    }
    if has_errors(&issues) {
        bail!("Invalid configuration");
    }

    let topic_text = match config.debate.topic.as_deref().map(str::trim) {
        Some(topic) if !topic.is_empty() => topic.to_string(),
        _ => bail!("A debate topic is required. Use -p/--prompt or set debate.topic."),
    };
    let topic = Topic::try_new(topic_text.clone())?;

    if !config.output.color {
        colored::control::set_override(false);
    }
    let format = config.output.format.unwrap_or_default();
    let formatter = ConsoleFormatter::new(config.output.color);

    // === Dependency Injection ===
    let gateway = Arc::new(OllamaGateway::new(config.backend.base_url.clone(), None)?);

    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                warn!("Interrupted, stopping after the current exchange");
                cancel.cancel();
            }
        });
    }

    let mut use_case = RunDebateUseCase::new(gateway)
        .with_behavior(config.backend.to_behavior())
        .with_cancellation(cancel);

    if let Some(path) = &config.output.conversation_log {
        let logger = JsonlConversationLogger::create(path).with_context(|| {
            format!("Failed to open conversation log {}", path.display())
        })?;
        let logger: Arc<dyn ConversationLogger> = Arc::new(logger);
        use_case = use_case.with_conversation_logger(logger);
    }

    let transcript_file = match &cli.file {
        Some(path) => Some(
            TranscriptFileWriter::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?,
        ),
        None => None,
    };

    let input = RunDebateInput::new(
        topic,
        config.to_debate_config(),
        config.roster(&topic_text),
    );

    let reporter = ProgressReporter::new(formatter, format == OutputFormat::Full);
    let progress: &dyn DebateProgressNotifier = if cli.quiet { &NoProgress } else { &reporter };
    let live = !cli.quiet && reporter.is_live();

    let outcome = match use_case.execute_with_progress(input, progress).await {
        Ok(outcome) => outcome,
        Err(err @ RunDebateError::BackendUnavailable { .. }) => {
            if let Some(transcript) = err.partial_transcript() {
                if !transcript.is_empty() && !live {
                    eprintln!("Partial transcript:\n");
                    eprint!(
                        "{}",
                        formatter.turns(transcript.turns(), config.debate.max_turns)
                    );
                }
                if let Some(writer) = transcript_file {
                    let path = writer.path().to_path_buf();
                    writer
                        .write_partial(
                            &topic_text,
                            config.debate.max_turns,
                            transcript,
                            &err.to_string(),
                        )
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                }
            }
            return Err(err.into());
        }
        Err(err) => return Err(err.into()),
    };

    // Turns were already printed live; only the closing section is left
    let output = if live {
        formatter.closing(&outcome)
    } else {
        formatter.format_as(&outcome, format)
    };
    println!("{}", output.trim_end());

    if let Some(writer) = transcript_file {
        let path = writer.path().to_path_buf();
        writer
            .write_outcome(&outcome)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!("Transcript written to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::try_parse_from([
            "debate-arena",
            "--no-config",
            "-p",
            "Is remote work better?",
            "--max-turns",
            "7",
            "--no-checkpoint",
            "--judge",
            "-o",
            "json",
        ])
        .unwrap();

        let config = load_config(&cli).unwrap();
        assert_eq!(config.debate.topic.as_deref(), Some("Is remote work better?"));
        assert_eq!(config.debate.max_turns, 7);
        assert!(!config.checkpoint.enabled);
        assert!(config.judge.enabled);
        assert_eq!(config.output.format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let cli = Cli::try_parse_from([
            "debate-arena",
            "--config",
            "/nonexistent/debate-arena.toml",
        ])
        .unwrap();
        assert!(load_config(&cli).is_err());
    }
}
