//! Progress notification port
//!
//! Defines the interface for reporting progress during a deliberation.

use parliament_domain::{DebateEntry, MetaSummary, Outcome, Vote};

/// Callback for progress updates during a deliberation
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (console, web UI, etc.)
pub trait DeliberationProgress: Send + Sync {
    /// Called when a debate round starts
    fn on_round_start(&self, round: usize, total_rounds: usize, agents: usize);

    /// Called for each entry once the round has been appended
    fn on_debate_entry(&self, entry: &DebateEntry);

    /// Called when a debate round completes
    fn on_round_complete(&self, round: usize);

    /// Called when the voting phase starts
    fn on_voting_start(&self, agents: usize);

    /// Called for each cast vote
    fn on_vote(&self, vote: &Vote);

    /// Called once the votes are synthesized and resolved
    fn on_resolved(&self, _summary: &MetaSummary, _outcome: Outcome, _deliberation: usize) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl DeliberationProgress for NoProgress {
    fn on_round_start(&self, _round: usize, _total_rounds: usize, _agents: usize) {}
    fn on_debate_entry(&self, _entry: &DebateEntry) {}
    fn on_round_complete(&self, _round: usize) {}
    fn on_voting_start(&self, _agents: usize) {}
    fn on_vote(&self, _vote: &Vote) {}
}
