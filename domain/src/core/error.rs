//! Domain error types

use crate::debate::session::SessionStatus;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid topic: {0}")]
    InvalidTopic(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Illegal status transition from {from} to {to}")]
    IllegalTransition {
        from: SessionStatus,
        to: SessionStatus,
    },

    #[error("Analysis parse error: {0}")]
    AnalysisParse(String),

    #[error("Operation cancelled")]
    Cancelled,
}

impl DomainError {
    /// Check if this error represents a cancellation
    pub fn is_cancelled(&self) -> bool {
        matches!(self, DomainError::Cancelled)
    }
}
