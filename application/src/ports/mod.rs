//! Port definitions (interfaces for external adapters)
//!
//! Ports define the boundaries between the application layer and
//! infrastructure. Adapters implementing these ports live in the
//! infrastructure or presentation layers.

pub mod deliberation_logger;
pub mod progress;
pub mod reasoner;
