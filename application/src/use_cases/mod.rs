//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod parliament_service;
pub mod run_deliberation;
