//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to domain and application
//! types after validation.

mod agents;
mod log;
mod parliament;
mod reasoner;

pub use agents::FileAgentProfile;
pub use log::FileLogConfig;
pub use parliament::FileParliamentConfig;
pub use reasoner::FileReasonerConfig;

use parliament_domain::{AgentRegistry, DomainError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigValidationError {
    #[error("parliament.quorum must be at least 1")]
    InvalidQuorum,

    #[error("parliament.required_majority must be in (0, 100], got {0}")]
    InvalidMajority(f64),

    #[error("reasoner.timeout_seconds cannot be 0")]
    InvalidTimeout,

    #[error("reasoner.model cannot be empty")]
    EmptyModelName,

    #[error("agents[{index}]: {source}")]
    InvalidAgent {
        index: usize,
        #[source]
        source: DomainError,
    },
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Deliberation thresholds and scheduling
    pub parliament: FileParliamentConfig,
    /// Optional text generator
    pub reasoner: FileReasonerConfig,
    /// Structured event log
    pub log: FileLogConfig,
    /// Custom roster; empty means the canonical four specialists
    pub agents: Vec<FileAgentProfile>,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        if self.parliament.quorum == 0 {
            issues.push(ConfigValidationError::InvalidQuorum);
        }
        let majority = self.parliament.required_majority;
        if !(majority > 0.0 && majority <= 100.0) {
            issues.push(ConfigValidationError::InvalidMajority(majority));
        }

        if self.reasoner.enabled {
            if self.reasoner.timeout_seconds == 0 {
                issues.push(ConfigValidationError::InvalidTimeout);
            }
            if self.reasoner.model.trim().is_empty() {
                issues.push(ConfigValidationError::EmptyModelName);
            }
        }

        for (index, agent) in self.agents.iter().enumerate() {
            if let Err(source) = agent.to_profile() {
                issues.push(ConfigValidationError::InvalidAgent { index, source });
            }
        }

        issues
    }

    /// Build the agent registry: the configured roster, or the canonical one
    pub fn to_registry(&self) -> Result<AgentRegistry, ConfigValidationError> {
        if self.agents.is_empty() {
            return Ok(AgentRegistry::canonical());
        }

        let profiles = self
            .agents
            .iter()
            .enumerate()
            .map(|(index, agent)| {
                agent
                    .to_profile()
                    .map_err(|source| ConfigValidationError::InvalidAgent { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        AgentRegistry::new(profiles)
            .map_err(|source| ConfigValidationError::InvalidAgent { index: 0, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parliament_domain::AgentType;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[parliament]
quorum = 2
required_majority = 55.0
debate_rounds = 3
seed = 42

[reasoner]
enabled = true
base_url = "http://localhost:11434"
model = "llama3"
timeout_seconds = 10

[log]
deliberation_log = "parliament.jsonl"

[[agents]]
id = "scout-1"
agent_type = "scout"
credit_score = 80.0
historical_accuracy = 0.7

[[agents]]
id = "risk-1"
agent_type = "risk"
name = "Cautious"
credit_score = 95.0
historical_accuracy = 0.9
default_position = "against"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.parliament.quorum, 2);
        assert_eq!(config.parliament.seed, Some(42));
        assert!(config.reasoner.enabled);
        assert_eq!(config.reasoner.model, "llama3");
        assert_eq!(config.log.deliberation_log.as_deref(), Some("parliament.jsonl"));
        assert_eq!(config.agents.len(), 2);
        assert!(config.validate().is_empty());

        let registry = config.to_registry().unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.profile(AgentType::Risk).unwrap().name, "Cautious");
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert_eq!(config, FileConfig::default());
        assert!(config.validate().is_empty());
        assert_eq!(config.to_registry().unwrap().len(), 4);
    }

    #[test]
    fn test_validate_reports_every_issue() {
        let toml_str = r#"
[parliament]
quorum = 0
required_majority = 120.0

[reasoner]
enabled = true
model = ""
timeout_seconds = 0

[[agents]]
id = "x"
agent_type = "oracle"
credit_score = 50.0
historical_accuracy = 0.5
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();

        assert_eq!(issues.len(), 5);
        assert!(issues.contains(&ConfigValidationError::InvalidQuorum));
        assert!(issues.contains(&ConfigValidationError::InvalidMajority(120.0)));
        assert!(issues.contains(&ConfigValidationError::InvalidTimeout));
        assert!(issues.contains(&ConfigValidationError::EmptyModelName));
        assert!(matches!(
            issues.last(),
            Some(ConfigValidationError::InvalidAgent { index: 0, .. })
        ));
        assert!(config.to_registry().is_err());
    }

    #[test]
    fn test_disabled_reasoner_skips_reasoner_checks() {
        let config: FileConfig = toml::from_str("[reasoner]\ntimeout_seconds = 0").unwrap();
        assert!(config.validate().is_empty());
    }
}
