//! Checkpoint domain: when to analyse, and what the analysis says.
//!
//! - [`trigger`] — pure predicate deciding whether a turn index is a checkpoint
//! - [`report::CheckpointReport`] — the validated summarizer output

pub mod report;
pub mod trigger;

pub use report::{CheckpointReport, parse_checkpoint_report};
pub use trigger::should_trigger;
