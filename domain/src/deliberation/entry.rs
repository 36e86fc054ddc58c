//! Debate entries produced once per agent per round.

use crate::agent::{AgentType, Position};
use crate::core::current_timestamp;
use serde::{Deserialize, Serialize};

/// Outcome of a stress scenario run by the Risk agent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    pub scenario_name: String,
    pub outcome: String,
    /// Confidence in the scenario outcome (0-100)
    pub confidence: f64,
}

/// One agent's statement in one debate round
///
/// Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DebateEntry {
    pub agent_id: String,
    pub agent_type: AgentType,
    pub position: Position,
    pub statement: String,
    pub data_sources: Vec<String>,
    /// Present on Risk agent entries only
    pub simulation_results: Option<SimulationResult>,
    /// Milliseconds since epoch
    pub timestamp: u64,
}

impl DebateEntry {
    pub fn new(
        agent_id: impl Into<String>,
        agent_type: AgentType,
        position: Position,
        statement: impl Into<String>,
        data_sources: Vec<String>,
    ) -> Self {
        Self {
            agent_id: agent_id.into(),
            agent_type,
            position,
            statement: statement.into(),
            data_sources,
            simulation_results: None,
            timestamp: current_timestamp(),
        }
    }

    pub fn with_simulation(mut self, simulation: SimulationResult) -> Self {
        self.simulation_results = Some(simulation);
        self
    }
}
