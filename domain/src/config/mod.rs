//! Configuration value objects for the domain layer
//!
//! These are domain concepts related to configuration that are
//! used across multiple layers.

mod output_format;
mod params;
mod validation;

pub use output_format::OutputFormat;
pub use params::{CheckpointParams, DebateConfig, DebateParams, JudgeParams};
pub use validation::{ConfigIssue, ConfigIssueCode, Severity, has_errors};
