//! Specialist agent descriptors
//!
//! An [`AgentProfile`] is loaded once at startup and never mutated by the
//! parliament. Votes copy the credibility fields at cast time (see
//! [`CredibilitySnapshot`](crate::quorum::vote::CredibilitySnapshot)).

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// The specialist role an agent plays in the parliament
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgentType {
    /// Opportunity hunter, biased toward approving
    Scout,
    /// Downside analyst, biased toward rejecting
    Risk,
    /// Feasibility and cost of carrying out the action
    Execution,
    /// Process reviewer weighing the other agents' arguments
    Meta,
}

impl AgentType {
    /// All agent types in canonical registry order
    pub const ALL: [AgentType; 4] = [
        AgentType::Scout,
        AgentType::Risk,
        AgentType::Execution,
        AgentType::Meta,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgentType::Scout => "scout",
            AgentType::Risk => "risk",
            AgentType::Execution => "execution",
            AgentType::Meta => "meta",
        }
    }

    /// Human-readable role name (e.g., "Risk")
    pub fn display_name(&self) -> &'static str {
        match self {
            AgentType::Scout => "Scout",
            AgentType::Risk => "Risk",
            AgentType::Execution => "Execution",
            AgentType::Meta => "Meta",
        }
    }

    /// Attribution labels for an agent type, in fixed order.
    ///
    /// These are never fetched or validated; they only name where an
    /// agent's reasoning claims to come from.
    pub fn data_sources(&self) -> &'static [&'static str] {
        match self {
            AgentType::Scout => &[
                "DEX volume aggregates",
                "Protocol TVL feed",
                "Yield opportunity index",
            ],
            AgentType::Risk => &[
                "Historical volatility series",
                "Liquidation heatmap",
                "Smart contract audit registry",
            ],
            AgentType::Execution => &[
                "Gas price oracle",
                "DEX liquidity depth",
                "Slippage simulator",
            ],
            AgentType::Meta => &[
                "Agent track records",
                "Prior governance outcomes",
                "Debate transcript",
            ],
        }
    }
}

impl std::fmt::Display for AgentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for AgentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "scout" => Ok(AgentType::Scout),
            "risk" => Ok(AgentType::Risk),
            "execution" => Ok(AgentType::Execution),
            "meta" => Ok(AgentType::Meta),
            other => Err(DomainError::UnknownAgentType(other.to_string())),
        }
    }
}

/// Stance an agent takes in a debate statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Position {
    For,
    Against,
    Clarification,
}

impl Position {
    pub fn as_str(&self) -> &'static str {
        match self {
            Position::For => "for",
            Position::Against => "against",
            Position::Clarification => "clarification",
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "for" => Ok(Position::For),
            "against" => Ok(Position::Against),
            "clarification" => Ok(Position::Clarification),
            other => Err(format!(
                "Unknown position: {}. Valid: for, against, clarification",
                other
            )),
        }
    }
}

/// A specialist agent taking part in the parliament
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentProfile {
    pub id: String,
    pub agent_type: AgentType,
    pub name: String,
    /// Track-record score (0-100)
    pub credit_score: f64,
    /// Fraction of past calls that proved correct (0.0-1.0)
    pub historical_accuracy: f64,
    /// Specialization tags
    pub specialization: Vec<String>,
    pub default_position: Position,
}

impl AgentProfile {
    /// Create a profile with the given credibility.
    ///
    /// Fails with [`DomainError::InvalidProfile`] when the credit score or
    /// accuracy falls outside its documented range.
    pub fn new(
        id: impl Into<String>,
        agent_type: AgentType,
        name: impl Into<String>,
        credit_score: f64,
        historical_accuracy: f64,
    ) -> Result<Self, DomainError> {
        let profile = Self {
            id: id.into(),
            agent_type,
            name: name.into(),
            credit_score,
            historical_accuracy,
            specialization: Vec::new(),
            default_position: Position::Clarification,
        };
        profile.validate()?;
        Ok(profile)
    }

    pub fn with_specialization<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.specialization = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_default_position(mut self, position: Position) -> Self {
        self.default_position = position;
        self
    }

    /// Check the credibility ranges
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.id.trim().is_empty() {
            return Err(DomainError::InvalidProfile(
                "agent id must not be empty".to_string(),
            ));
        }
        if !(0.0..=100.0).contains(&self.credit_score) {
            return Err(DomainError::InvalidProfile(format!(
                "{}: credit score {} outside 0-100",
                self.id, self.credit_score
            )));
        }
        if !(0.0..=1.0).contains(&self.historical_accuracy) {
            return Err(DomainError::InvalidProfile(format!(
                "{}: historical accuracy {} outside 0-1",
                self.id, self.historical_accuracy
            )));
        }
        Ok(())
    }

    /// Credibility ceiling of this agent's votes: `credit/100 * accuracy`
    pub fn credibility(&self) -> f64 {
        (self.credit_score / 100.0) * self.historical_accuracy
    }
}
