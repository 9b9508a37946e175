//! Infrastructure layer for debate-arena
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod ollama;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileAgentModel, FileBackendConfig, FileCheckpointConfig, FileConfig,
    FileDebateConfig, FileJudgeConfig, FileModelsConfig, FileOutputConfig, FileOutputFormat,
};
pub use logging::JsonlConversationLogger;
pub use ollama::{OllamaError, OllamaGateway};
