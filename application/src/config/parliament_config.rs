//! Parliament parameters: orchestration control.
//!
//! [`ParliamentConfig`] groups the static parameters that control a
//! deliberation run in
//! [`RunDeliberationUseCase`](crate::use_cases::run_deliberation::RunDeliberationUseCase).
//! The thresholds are handed to the domain resolver unchanged.

use parliament_domain::QuorumRule;
use serde::{Deserialize, Serialize};

/// Deliberation control parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParliamentConfig {
    /// Minimum number of votes before a non-deadlock outcome.
    pub quorum: usize,
    /// Weighted share (percent) a side needs to win.
    pub required_majority: f64,
    /// Debate rounds before each voting phase.
    pub debate_rounds: usize,
    /// Maximum debate+vote passes; a deadlock re-enters debate until exhausted.
    pub max_deliberations: usize,
    /// Trailing debate entries included in reasoner prompts.
    pub history_window: usize,
    /// Fixed seed for fallback generation.
    pub seed: Option<u64>,
}

impl Default for ParliamentConfig {
    fn default() -> Self {
        Self {
            quorum: 3,
            required_majority: 60.0,
            debate_rounds: 2,
            max_deliberations: 1,
            history_window: 5,
            seed: None,
        }
    }
}

impl ParliamentConfig {
    // ==================== Builder Methods ====================

    pub fn with_quorum(mut self, quorum: usize) -> Self {
        self.quorum = quorum;
        self
    }

    pub fn with_required_majority(mut self, majority: f64) -> Self {
        self.required_majority = majority;
        self
    }

    pub fn with_debate_rounds(mut self, rounds: usize) -> Self {
        self.debate_rounds = rounds;
        self
    }

    pub fn with_max_deliberations(mut self, max: usize) -> Self {
        self.max_deliberations = max;
        self
    }

    pub fn with_history_window(mut self, window: usize) -> Self {
        self.history_window = window;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// The resolver thresholds
    pub fn rule(&self) -> QuorumRule {
        QuorumRule::new(self.quorum, self.required_majority)
    }
}
