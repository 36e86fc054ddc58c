//! Agent roster from TOML (`[[agents]]` array)
//!
//! When present, the roster replaces the canonical four specialists.
//!
//! ```toml
//! [[agents]]
//! id = "scout-1"
//! agent_type = "scout"
//! name = "Scout"
//! credit_score = 85.0
//! historical_accuracy = 0.82
//! specialization = ["yield", "opportunity"]
//! default_position = "for"
//! ```

use parliament_domain::{AgentProfile, AgentType, DomainError, Position};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileAgentProfile {
    pub id: String,
    /// scout, risk, execution or meta
    pub agent_type: String,
    #[serde(default)]
    pub name: Option<String>,
    pub credit_score: f64,
    pub historical_accuracy: f64,
    #[serde(default)]
    pub specialization: Vec<String>,
    /// for, against or clarification
    #[serde(default)]
    pub default_position: Option<String>,
}

impl FileAgentProfile {
    /// Convert to a validated domain profile
    pub fn to_profile(&self) -> Result<AgentProfile, DomainError> {
        let agent_type: AgentType = self.agent_type.parse()?;
        let name = self
            .name
            .clone()
            .unwrap_or_else(|| agent_type.display_name().to_string());

        let mut profile = AgentProfile::new(
            self.id.clone(),
            agent_type,
            name,
            self.credit_score,
            self.historical_accuracy,
        )?
        .with_specialization(self.specialization.iter().cloned());

        if let Some(raw) = &self.default_position {
            let position: Position = raw.parse().map_err(DomainError::InvalidProfile)?;
            profile = profile.with_default_position(position);
        }
        Ok(profile)
    }
}
