//! Reasoner port
//!
//! Defines the interface to the optional text generator that backs agent
//! statements and votes. Every error is recoverable: the parliament service
//! routes all of them to deterministic fallback generation.

use async_trait::async_trait;
use parliament_domain::{AgentProfile, DebateContext, ParliamentPrompt};
use thiserror::Error;

/// Errors that can occur during a reasoner call
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ReasonerError {
    #[error("Reasoner unavailable: {0}")]
    Unavailable(String),

    #[error("Timeout")]
    Timeout,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

/// One structured request to the reasoner
#[derive(Debug, Clone, PartialEq)]
pub struct ReasonerRequest {
    pub system_instruction: String,
    /// Proposal and recent history, serialized as JSON
    pub structured_context: String,
    pub user_prompt: String,
}

impl ReasonerRequest {
    pub fn new(
        system_instruction: impl Into<String>,
        structured_context: impl Into<String>,
        user_prompt: impl Into<String>,
    ) -> Self {
        Self {
            system_instruction: system_instruction.into(),
            structured_context: structured_context.into(),
            user_prompt: user_prompt.into(),
        }
    }

    /// Request for a debate statement
    pub fn debate(profile: &AgentProfile, context: &DebateContext, history_window: usize) -> Self {
        Self::new(
            ParliamentPrompt::system_instruction(profile),
            ParliamentPrompt::structured_context(context, history_window),
            ParliamentPrompt::debate_prompt(profile, context),
        )
    }

    /// Request for a vote
    pub fn vote(profile: &AgentProfile, context: &DebateContext, history_window: usize) -> Self {
        Self::new(
            ParliamentPrompt::system_instruction(profile),
            ParliamentPrompt::structured_context(context, history_window),
            ParliamentPrompt::vote_prompt(profile, context),
        )
    }
}

/// Text generator behind agent statements and votes
///
/// This port defines how the application layer asks for generated text.
/// Implementations (adapters) live in the infrastructure layer. A single
/// call is made per generation step, never retried.
#[async_trait]
pub trait Reasoner: Send + Sync {
    async fn ask(&self, request: &ReasonerRequest) -> Result<String, ReasonerError>;
}

/// Reasoner used when generation is disabled: every call fails immediately
pub struct NullReasoner;

#[async_trait]
impl Reasoner for NullReasoner {
    async fn ask(&self, _request: &ReasonerRequest) -> Result<String, ReasonerError> {
        Err(ReasonerError::Unavailable("reasoner disabled".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parliament_domain::{ActionType, AgentRegistry, AgentType};

    #[tokio::test]
    async fn test_null_reasoner_is_unavailable() {
        let request = ReasonerRequest::new("system", "{}", "prompt");
        let result = NullReasoner.ask(&request).await;
        assert!(matches!(result, Err(ReasonerError::Unavailable(_))));
    }

    #[test]
    fn test_vote_request_parts() {
        let registry = AgentRegistry::canonical();
        let risk = registry.profile(AgentType::Risk).unwrap();
        let context = DebateContext::new("swap 10 ETH", "", ActionType::Swap);

        let request = ReasonerRequest::vote(risk, &context, 5);
        assert!(request.system_instruction.contains("Risk"));
        assert!(request.structured_context.contains("swap 10 ETH"));
        assert!(request.user_prompt.contains("CONFIDENCE"));
    }
}
