//! Ollama adapter
//!
//! Implements the [`AgentGateway`](arena_application::AgentGateway) port
//! over Ollama's HTTP chat API. Every role (debaters, summarizer, judge)
//! goes through the same gateway; the agent profile picks the model.

mod error;
mod gateway;
mod protocol;

pub use error::OllamaError;
pub use gateway::OllamaGateway;
