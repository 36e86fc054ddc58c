//! Infrastructure layer for agent-parliament
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod logging;
pub mod reasoner;

// Re-export commonly used types
pub use config::{
    ConfigLoader, ConfigValidationError, FileAgentProfile, FileConfig, FileLogConfig,
    FileParliamentConfig, FileReasonerConfig,
};
pub use logging::JsonlDeliberationLogger;
pub use reasoner::{HttpReasoner, TimeoutReasoner, build_reasoner};
