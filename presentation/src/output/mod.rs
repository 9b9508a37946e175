//! Output formatting for debate results

pub mod console;
pub mod formatter;
pub mod transcript_file;
