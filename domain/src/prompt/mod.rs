//! Prompt templates for debaters, the summarizer and the judge.

pub mod template;

pub use template::DebatePromptTemplate;
