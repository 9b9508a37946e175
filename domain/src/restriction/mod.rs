//! Restriction domain: the anti-repetition state injected into debaters.
//!
//! - [`entities::Restriction`] — per-side forbidden lines plus rendered text
//! - [`builder::RestrictionBuilder`] — folds a checkpoint report into a new restriction
//! - [`violation`] — detection and counting of reused forbidden lines

pub mod builder;
pub mod entities;
pub mod violation;

pub use builder::RestrictionBuilder;
pub use entities::{ForbiddenLine, Restriction};
pub use violation::{ViolationCounter, detect_violations};
