//! Debate session domain.
//!
//! - [`session::DebateSession`] — per-session parameters, turn index and status
//! - [`transcript::Transcript`] — append-only record of accepted turns
//! - [`verdict::Verdict`] — the judge's decision and its parsing
//! - [`outcome::DebateOutcome`] — what a finished session hands back

pub mod outcome;
pub mod session;
pub mod transcript;
pub mod verdict;
