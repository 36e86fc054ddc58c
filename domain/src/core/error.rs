//! Domain error types

use crate::agent::profile::AgentType;
use thiserror::Error;

/// Domain-level errors
///
/// Delegate failures never appear here: they are recovered by fallback
/// generation before they can reach a caller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("Unknown agent type: {0}")]
    UnknownAgentType(String),

    #[error("No agent profile registered for type {0}")]
    MissingAgentProfile(AgentType),

    #[error("Invalid agent profile: {0}")]
    InvalidProfile(String),

    #[error("Vote set is empty")]
    EmptyVoteSet,
}

impl DomainError {
    /// Errors caused by a bad agent configuration (fatal to the call)
    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            DomainError::UnknownAgentType(_)
                | DomainError::MissingAgentProfile(_)
                | DomainError::InvalidProfile(_)
        )
    }

    /// Errors caused by calling an operation outside its precondition
    pub fn is_precondition_violation(&self) -> bool {
        matches!(self, DomainError::EmptyVoteSet)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_vote_set_display() {
        let error = DomainError::EmptyVoteSet;
        assert_eq!(error.to_string(), "Vote set is empty");
    }

    #[test]
    fn test_error_classification() {
        assert!(DomainError::UnknownAgentType("oracle".to_string()).is_configuration_error());
        assert!(DomainError::MissingAgentProfile(AgentType::Risk).is_configuration_error());
        assert!(!DomainError::EmptyVoteSet.is_configuration_error());
        assert!(DomainError::EmptyVoteSet.is_precondition_violation());
        assert!(!DomainError::InvalidProfile("x".to_string()).is_precondition_violation());
    }

    #[test]
    fn test_missing_profile_display() {
        let error = DomainError::MissingAgentProfile(AgentType::Scout);
        assert_eq!(error.to_string(), "No agent profile registered for type scout");
    }
}
