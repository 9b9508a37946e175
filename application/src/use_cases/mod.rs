//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod analyze_checkpoint;
pub mod judge_debate;
pub mod run_debate;
pub(crate) mod shared;
