//! Logging infrastructure: structured deliberation logging.
//!
//! Provides [`JsonlDeliberationLogger`], a JSONL file writer that implements
//! the [`DeliberationLogger`](parliament_application::DeliberationLogger) port.

mod jsonl_logger;

pub use jsonl_logger::JsonlDeliberationLogger;
