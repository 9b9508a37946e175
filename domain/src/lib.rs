//! Domain layer for debate-arena
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Debate
//!
//! Two debater agents alternate on a single topic. One exchange (a reply from
//! each side) is one turn of the session.
//!
//! ## Checkpoint
//!
//! Every few turns a summarizer reads the recent transcript and reports which
//! argument lines are exhausted. Those lines become a per-side
//! [`Restriction`], and both debaters are reset to a fresh context carrying
//! it. Reusing a forbidden line counts as a violation.
//!
//! ## Judge
//!
//! An optional judge reads a window of the transcript and decides whether the
//! debate should continue or has ended by agreement, refutation or
//! concession.

pub mod agent;
pub mod checkpoint;
pub mod config;
pub mod core;
pub mod debate;
pub mod parsing;
pub mod prompt;
pub mod restriction;

// Re-export commonly used types
pub use agent::{AgentContext, AgentProfile, AgentRole, Message, Role, reset_context};
pub use checkpoint::{CheckpointReport, parse_checkpoint_report, should_trigger};
pub use config::{
    CheckpointParams, ConfigIssue, ConfigIssueCode, DebateConfig, DebateParams, JudgeParams,
    OutputFormat, Severity, has_errors,
};
pub use core::{error::DomainError, model::Model, side::Side, side::SideMap, topic::Topic};
pub use debate::{
    outcome::DebateOutcome,
    session::{DebateSession, SessionStatus},
    transcript::{Transcript, Turn, format_window},
    verdict::{ClosingVerdict, Decision, Verdict, parse_verdict},
};
pub use parsing::{extract_json_block, parse_json_object};
pub use prompt::DebatePromptTemplate;
pub use restriction::{
    ForbiddenLine, Restriction, RestrictionBuilder, ViolationCounter, detect_violations,
};
