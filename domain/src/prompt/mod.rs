//! Prompt domain
//!
//! Templates for the reasoner requests made at each stage of a deliberation.

mod template;

pub use template::ParliamentPrompt;
