//! Application layer for debate-arena
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::BehaviorConfig;
pub use ports::{
    agent_gateway::{AgentGateway, GatewayError},
    conversation_logger::{ConversationEvent, ConversationLogger, NoConversationLogger},
    progress::{DebateProgressNotifier, NoProgress},
};
pub use use_cases::analyze_checkpoint::{AnalyzeError, CheckpointAnalyzer};
pub use use_cases::judge_debate::JudgeProtocol;
pub use use_cases::run_debate::{DebateRoster, RunDebateError, RunDebateInput, RunDebateUseCase};
