//! Output format value object

use serde::{Deserialize, Serialize};

/// How a finished debate is reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Transcript, checkpoints and verdict (default)
    #[default]
    Full,
    /// Only the closing verdict
    Verdict,
    /// The whole outcome as JSON
    Json,
}
