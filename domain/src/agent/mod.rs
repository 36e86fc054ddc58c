//! Specialist agents of the parliament
//!
//! - [`AgentProfile`]: immutable descriptor (credibility, specialization)
//! - [`AgentRegistry`]: the fixed, ordered set of configured specialists

pub mod profile;
pub mod registry;

pub use profile::{AgentProfile, AgentType, Position};
pub use registry::AgentRegistry;
