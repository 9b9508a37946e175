//! Live progress reporting

pub mod reporter;
