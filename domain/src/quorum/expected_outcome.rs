//! Expected-outcome estimates attached to every vote.
//!
//! The estimate depends only on the proposal's [`ActionType`] and the
//! voting agent's risk bias, never on what the agent actually voted.

use crate::agent::AgentType;
use crate::deliberation::ActionType;
use serde::{Deserialize, Serialize};

/// An agent's projection of what the action will yield
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpectedOutcome {
    pub return_percent: f64,
    /// 0-100
    pub risk_score: f64,
    pub time_horizon: String,
    /// 0-100
    pub confidence: f64,
}

/// Baseline assumptions per action category: (return %, risk score, horizon)
fn baseline(action_type: ActionType) -> (f64, f64, &'static str) {
    match action_type {
        ActionType::Swap => (2.5, 45.0, "1-7 days"),
        ActionType::ProvideLiquidity => (8.0, 55.0, "30-90 days"),
        ActionType::Stake => (5.5, 30.0, "90-365 days"),
        ActionType::Transfer => (0.0, 20.0, "immediate"),
        ActionType::Rebalance => (4.0, 40.0, "7-30 days"),
        ActionType::ParameterChange => (1.5, 50.0, "30-90 days"),
        ActionType::Other => (2.0, 60.0, "undetermined"),
    }
}

/// Agent risk bias: (return multiplier, risk offset, estimate confidence)
fn bias(agent_type: AgentType) -> (f64, f64, f64) {
    match agent_type {
        AgentType::Scout => (1.25, -10.0, 70.0),
        AgentType::Risk => (0.6, 20.0, 80.0),
        AgentType::Execution => (0.9, 5.0, 75.0),
        AgentType::Meta => (1.0, 0.0, 72.0),
    }
}

impl ExpectedOutcome {
    /// Estimate the outcome of `action_type` as seen by `agent_type`
    ///
    /// # Example
    ///
    /// ```
    /// use parliament_domain::agent::AgentType;
    /// use parliament_domain::deliberation::ActionType;
    /// use parliament_domain::quorum::ExpectedOutcome;
    ///
    /// let scout = ExpectedOutcome::estimate(ActionType::Stake, AgentType::Scout);
    /// let risk = ExpectedOutcome::estimate(ActionType::Stake, AgentType::Risk);
    /// assert!(scout.return_percent > risk.return_percent);
    /// assert!(scout.risk_score < risk.risk_score);
    /// ```
    pub fn estimate(action_type: ActionType, agent_type: AgentType) -> Self {
        let (base_return, base_risk, horizon) = baseline(action_type);
        let (return_multiplier, risk_offset, confidence) = bias(agent_type);

        Self {
            return_percent: base_return * return_multiplier,
            risk_score: (base_risk + risk_offset).clamp(0.0, 100.0),
            time_horizon: horizon.to_string(),
            confidence,
        }
    }
}
