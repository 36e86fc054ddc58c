//! Parliament configuration from TOML (`[parliament]` section)
//!
//! Example configuration:
//!
//! ```toml
//! [parliament]
//! quorum = 3
//! required_majority = 60.0
//! debate_rounds = 2
//! max_deliberations = 1
//! history_window = 5
//! seed = 42
//! ```

use parliament_application::ParliamentConfig;
use serde::{Deserialize, Serialize};

/// Deliberation thresholds and scheduling
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileParliamentConfig {
    /// Minimum votes before a non-deadlock outcome
    pub quorum: usize,
    /// Weighted share (percent) needed to decide
    pub required_majority: f64,
    pub debate_rounds: usize,
    /// Deadlock re-entry budget
    pub max_deliberations: usize,
    /// Trailing debate entries included in prompts
    pub history_window: usize,
    /// Fixed seed for fallback generation
    pub seed: Option<u64>,
}

impl Default for FileParliamentConfig {
    fn default() -> Self {
        let defaults = ParliamentConfig::default();
        Self {
            quorum: defaults.quorum,
            required_majority: defaults.required_majority,
            debate_rounds: defaults.debate_rounds,
            max_deliberations: defaults.max_deliberations,
            history_window: defaults.history_window,
            seed: defaults.seed,
        }
    }
}

impl FileParliamentConfig {
    pub fn to_parliament_config(&self) -> ParliamentConfig {
        ParliamentConfig::default()
            .with_quorum(self.quorum)
            .with_required_majority(self.required_majority)
            .with_debate_rounds(self.debate_rounds)
            .with_max_deliberations(self.max_deliberations)
            .with_history_window(self.history_window)
            .with_seed(self.seed)
    }
}
