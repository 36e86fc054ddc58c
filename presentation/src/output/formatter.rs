//! Output formatter trait

use parliament_application::DeliberationResult;

/// Trait for formatting deliberation results
pub trait OutputFormatter {
    /// Format the complete result: transcript, votes, summary, outcome
    fn format(&self, result: &DeliberationResult) -> String;

    /// Format as JSON
    fn format_json(&self, result: &DeliberationResult) -> String;

    /// Format the summary and outcome only (concise output)
    fn format_summary_only(&self, result: &DeliberationResult) -> String;
}
