//! Port definitions (interfaces for external adapters)
//!
//! Ports define the interfaces that the application layer uses to
//! communicate with external systems. Adapters in the infrastructure
//! and presentation layers implement these.

pub mod agent_gateway;
pub mod conversation_logger;
pub mod progress;
