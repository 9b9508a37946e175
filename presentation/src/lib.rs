//! Presentation layer for debate-arena
//!
//! This crate contains the CLI definition, output formatters,
//! the transcript file writer and the progress reporter.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use output::transcript_file::TranscriptFileWriter;
pub use progress::reporter::ProgressReporter;
