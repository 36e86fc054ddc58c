//! Application-level configuration.
//!
//! - [`ParliamentConfig`]: orchestration control (rounds, thresholds, re-entry budget)

pub mod parliament_config;

pub use parliament_config::ParliamentConfig;
