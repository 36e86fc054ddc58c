//! Presentation layer for agent-parliament
//!
//! This crate contains CLI definitions, proposal input parsing, output
//! formatters and progress reporters.

pub mod cli;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use cli::proposal::{ProposalError, ProposalFile, build_context, parse_data_pair};
pub use output::console::ConsoleFormatter;
pub use output::formatter::OutputFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
