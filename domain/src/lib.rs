//! Domain layer for agent-parliament
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Parliament
//!
//! A fixed roster of specialist agents (Scout, Risk, Execution, Meta)
//! debates a governance proposal, then votes on it:
//!
//! - **Debate**: each agent contributes a positioned statement per round
//! - **Vote**: each agent casts approve / reject / abstain with a confidence
//! - **Synthesis**: votes are weighted by credibility and confidence into a
//!   [`MetaSummary`] recommendation
//! - **Resolution**: quorum and weighted majority decide the [`Outcome`]
//!
//! ## Fallback
//!
//! Every generation step can be produced without a reasoner. The
//! [`fallback`] module draws templated content from an injected RNG, so
//! seeded runs are reproducible.

pub mod agent;
pub mod core;
pub mod deliberation;
pub mod fallback;
pub mod prompt;
pub mod quorum;

// Re-export commonly used types
pub use agent::{AgentProfile, AgentRegistry, AgentType, Position};
pub use core::error::DomainError;
pub use deliberation::{ActionType, DebateContext, DebateEntry, SimulationResult};
pub use prompt::ParliamentPrompt;

// Re-export quorum types
pub use quorum::{
    ExpectedOutcome, MetaSummary, Outcome, ParseError, QuorumRule, Recommendation, RiskAssessment,
    RiskLevel, Vote, VoteChoice, WeightedTally, determine_outcome, parse_debate_response,
    parse_vote_response, synthesize_meta_summary,
};
