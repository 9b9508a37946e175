//! Parameter validation issues.
//!
//! Validation never fails outright: it returns every issue found, each with
//! a severity. Callers refuse to start on any [`Severity::Error`] and print
//! warnings.

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigIssueCode {
    /// A count that must be positive is zero.
    NonPositiveValue { field: String },
    /// A required string is blank.
    EmptyValue { field: String },
    /// A model name is blank.
    EmptyModelName { field: String },
    /// A temperature outside `0.0..=2.0`.
    TemperatureOutOfRange { field: String },
    /// The checkpoint interval is not below the turn limit.
    CheckpointNeverFires,
    /// The judge is tied to checkpoints that never run.
    JudgeNeverRuns,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn new(severity: Severity, code: ConfigIssueCode, message: impl Into<String>) -> Self {
        Self {
            severity,
            code,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{}: {}", level, self.message)
    }
}

/// Whether any issue is fatal.
pub fn has_errors(issues: &[ConfigIssue]) -> bool {
    issues.iter().any(|i| i.severity == Severity::Error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_errors_returns_false_for_warnings_only() {
        let issues = vec![ConfigIssue::new(
            Severity::Warning,
            ConfigIssueCode::JudgeNeverRuns,
            "w",
        )];
        assert!(!has_errors(&issues));
    }

    #[test]
    fn has_errors_returns_false_for_empty() {
        assert!(!has_errors(&[]));
    }

    #[test]
    fn display_includes_level() {
        let issue = ConfigIssue::new(
            Severity::Error,
            ConfigIssueCode::EmptyModelName {
                field: "models.judge.name".to_string(),
            },
            "models.judge.name must not be empty",
        );
        assert_eq!(
            issue.to_string(),
            "error: models.judge.name must not be empty"
        );
    }
}
