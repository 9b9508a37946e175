//! Core domain concepts shared across all subdomains.
//!
//! - [`model::Model`] — backend model identifiers (llama3.1, mistral, ...)
//! - [`side::Side`] — the two debaters and per-side storage
//! - [`topic::Topic`] — a validated debate topic
//! - [`error::DomainError`] — domain-level errors

pub mod error;
pub mod model;
pub mod side;
pub mod string;
pub mod topic;
