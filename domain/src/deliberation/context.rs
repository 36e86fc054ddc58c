//! Debate context: the proposal under deliberation plus its history.

use super::entry::DebateEntry;
use crate::quorum::vote::Vote;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Category of the governance action being proposed
///
/// Drives the baseline return/risk assumptions of expected-outcome
/// estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    Swap,
    ProvideLiquidity,
    Stake,
    Transfer,
    Rebalance,
    ParameterChange,
    #[default]
    Other,
}

impl ActionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::Swap => "swap",
            ActionType::ProvideLiquidity => "provide_liquidity",
            ActionType::Stake => "stake",
            ActionType::Transfer => "transfer",
            ActionType::Rebalance => "rebalance",
            ActionType::ParameterChange => "parameter_change",
            ActionType::Other => "other",
        }
    }
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ActionType {
    type Err = std::convert::Infallible;

    /// Unknown categories map to [`ActionType::Other`]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', ' '], "_");
        Ok(match normalized.as_str() {
            "swap" | "trade" => ActionType::Swap,
            "provide_liquidity" | "liquidity" | "add_liquidity" => ActionType::ProvideLiquidity,
            "stake" | "staking" => ActionType::Stake,
            "transfer" => ActionType::Transfer,
            "rebalance" => ActionType::Rebalance,
            "parameter_change" | "governance" => ActionType::ParameterChange,
            _ => ActionType::Other,
        })
    }
}

/// Everything an agent sees when producing a debate statement or vote
///
/// Owned and mutated only by the caller between rounds; generators borrow
/// it read-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DebateContext {
    pub topic: String,
    pub description: String,
    pub action_type: ActionType,
    /// Opaque proposal parameters (e.g., "amount" -> 1000)
    pub proposal_data: BTreeMap<String, serde_json::Value>,
    pub previous_debates: Vec<DebateEntry>,
    pub other_agent_votes: Vec<Vote>,
}

impl DebateContext {
    pub fn new(
        topic: impl Into<String>,
        description: impl Into<String>,
        action_type: ActionType,
    ) -> Self {
        Self {
            topic: topic.into(),
            description: description.into(),
            action_type,
            ..Default::default()
        }
    }

    pub fn with_proposal_data(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.proposal_data.insert(key.into(), value.into());
        self
    }

    /// Append a finalized debate entry
    pub fn push_debate(&mut self, entry: DebateEntry) {
        self.previous_debates.push(entry);
    }

    /// Append a cast vote
    pub fn push_vote(&mut self, vote: Vote) {
        self.other_agent_votes.push(vote);
    }

    /// The trailing `window` debate entries, oldest first
    pub fn recent_debates(&self, window: usize) -> &[DebateEntry] {
        let start = self.previous_debates.len().saturating_sub(window);
        &self.previous_debates[start..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{AgentType, Position};

    fn entry(agent_id: &str) -> DebateEntry {
        DebateEntry::new(agent_id, AgentType::Scout, Position::For, "statement", vec![])
    }

    #[test]
    fn test_action_type_parse() {
        assert_eq!("swap".parse::<ActionType>().unwrap(), ActionType::Swap);
        assert_eq!(
            "Provide-Liquidity".parse::<ActionType>().unwrap(),
            ActionType::ProvideLiquidity
        );
        assert_eq!("mint_nft".parse::<ActionType>().unwrap(), ActionType::Other);
    }

    #[test]
    fn test_recent_debates_window() {
        let mut context = DebateContext::new("Swap ETH", "", ActionType::Swap);
        for i in 0..7 {
            context.push_debate(entry(&format!("agent-{}", i)));
        }

        let recent = context.recent_debates(5);
        assert_eq!(recent.len(), 5);
        assert_eq!(recent[0].agent_id, "agent-2");
        assert_eq!(recent[4].agent_id, "agent-6");

        assert_eq!(context.recent_debates(100).len(), 7);
        assert!(context.recent_debates(0).is_empty());
    }

    #[test]
    fn test_proposal_data_builder() {
        let context = DebateContext::new("Stake", "", ActionType::Stake)
            .with_proposal_data("amount", 1000)
            .with_proposal_data("token", "ETH");
        assert_eq!(context.proposal_data["amount"], serde_json::json!(1000));
        assert_eq!(context.proposal_data["token"], serde_json::json!("ETH"));
    }
}
