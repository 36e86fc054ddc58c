//! Agent profile registry
//!
//! A fixed, ordered list of specialists. The registry is read-only once
//! built, so it can be shared freely between concurrent generators.

use super::profile::{AgentProfile, AgentType, Position};
use crate::core::error::DomainError;

/// Fixed, ordered set of configured specialist agents
///
/// # Example
///
/// ```
/// use parliament_domain::agent::{AgentRegistry, AgentType};
///
/// let registry = AgentRegistry::canonical();
/// assert_eq!(registry.profiles().len(), 4);
/// assert_eq!(registry.profile(AgentType::Risk).unwrap().credit_score, 90.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AgentRegistry {
    profiles: Vec<AgentProfile>,
}

impl AgentRegistry {
    /// Build a registry from configured profiles, validating each one
    pub fn new(profiles: Vec<AgentProfile>) -> Result<Self, DomainError> {
        for profile in &profiles {
            profile.validate()?;
        }
        Ok(Self { profiles })
    }

    /// The canonical four-specialist parliament
    pub fn canonical() -> Self {
        Self {
            profiles: vec![
                AgentProfile {
                    id: "scout".to_string(),
                    agent_type: AgentType::Scout,
                    name: "Scout".to_string(),
                    credit_score: 85.0,
                    historical_accuracy: 0.82,
                    specialization: tags(&["yield", "opportunity", "market-trends"]),
                    default_position: Position::For,
                },
                AgentProfile {
                    id: "risk".to_string(),
                    agent_type: AgentType::Risk,
                    name: "Risk".to_string(),
                    credit_score: 90.0,
                    historical_accuracy: 0.88,
                    specialization: tags(&["volatility", "liquidation", "security"]),
                    default_position: Position::Against,
                },
                AgentProfile {
                    id: "execution".to_string(),
                    agent_type: AgentType::Execution,
                    name: "Execution".to_string(),
                    credit_score: 88.0,
                    historical_accuracy: 0.85,
                    specialization: tags(&["gas", "slippage", "routing"]),
                    default_position: Position::Clarification,
                },
                AgentProfile {
                    id: "meta".to_string(),
                    agent_type: AgentType::Meta,
                    name: "Meta".to_string(),
                    credit_score: 92.0,
                    historical_accuracy: 0.90,
                    specialization: tags(&["synthesis", "governance", "process"]),
                    default_position: Position::Clarification,
                },
            ],
        }
    }

    /// All profiles in registry order
    pub fn profiles(&self) -> &[AgentProfile] {
        &self.profiles
    }

    /// First profile of the given type
    pub fn profile(&self, agent_type: AgentType) -> Result<&AgentProfile, DomainError> {
        self.profiles
            .iter()
            .find(|p| p.agent_type == agent_type)
            .ok_or(DomainError::MissingAgentProfile(agent_type))
    }

    /// Look up a profile by a configured type name (e.g., "risk")
    pub fn profile_by_name(&self, agent_type: &str) -> Result<&AgentProfile, DomainError> {
        let agent_type: AgentType = agent_type.parse()?;
        self.profile(agent_type)
    }

    /// Attribution labels for an agent type
    pub fn data_sources(&self, agent_type: AgentType) -> &'static [&'static str] {
        agent_type.data_sources()
    }

    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }
}

impl Default for AgentRegistry {
    fn default() -> Self {
        Self::canonical()
    }
}

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}
