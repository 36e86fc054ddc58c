//! Application layer for agent-parliament
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod fallback_rng;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ParliamentConfig;
pub use fallback_rng::FallbackRng;
pub use ports::{
    deliberation_logger::{DeliberationEvent, DeliberationLogger, NoDeliberationLog},
    progress::{DeliberationProgress, NoProgress},
    reasoner::{NullReasoner, Reasoner, ReasonerError, ReasonerRequest},
};
pub use use_cases::parliament_service::ParliamentService;
pub use use_cases::run_deliberation::{
    DeliberationResult, RunDeliberationError, RunDeliberationInput, RunDeliberationUseCase,
};
