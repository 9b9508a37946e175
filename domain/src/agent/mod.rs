//! Agent domain: who is invoked and with what working context.
//!
//! - [`profile::AgentProfile`] — role, model, temperature and role prompt
//! - [`context::AgentContext`] — the immutable working context sent to a backend
//! - [`reset::reset_context`] — rebuilds a debater's context after a checkpoint

pub mod context;
pub mod profile;
pub mod reset;

pub use context::{AgentContext, Message, Role};
pub use profile::{AgentProfile, AgentRole};
pub use reset::reset_context;
