//! Weighted parliament consensus
//!
//! This module contains the core concepts for credibility-weighted decision
//! making.
//!
//! # Core Concepts
//!
//! ## Weighted Vote
//! Each [`Vote`] carries a snapshot of the casting agent's credibility. Its
//! influence is `credit/100 * accuracy`, scaled by a confidence modifier in
//! `[0.5, 1.0]` ([`weighting`]).
//!
//! ## Synthesis
//! [`synthesize_meta_summary`] aggregates a vote set into a [`MetaSummary`]:
//! conflicts, amendments, risk tier and a recommendation.
//!
//! ## Resolution
//! [`determine_outcome`] applies quorum and weighted-majority thresholds to
//! the same shares and yields a terminal [`Outcome`].
//!
//! ```text
//! ┌──────────┐     ┌────────────────┐     ┌─────────────┐
//! │  votes   │────▶│ WeightedTally  │────▶│ MetaSummary │  (synthesizer)
//! └──────────┘     │ (shared)       │     └─────────────┘
//!                  │                │     ┌─────────────┐
//!                  │                │────▶│   Outcome   │  (resolver)
//!                  └────────────────┘     └─────────────┘
//! ```

pub mod consensus;
pub mod expected_outcome;
pub mod parsing;
pub mod rule;
pub mod vote;
pub mod weighting;

// Re-export main types
pub use consensus::{MetaSummary, Recommendation, RiskAssessment, RiskLevel, synthesize_meta_summary};
pub use expected_outcome::ExpectedOutcome;
pub use parsing::{ParseError, ParsedStatement, ParsedVote, parse_debate_response, parse_vote_response};
pub use rule::{Outcome, QuorumRule, determine_outcome};
pub use vote::{CredibilitySnapshot, Vote, VoteChoice, VoteCounts, vote_summary};
pub use weighting::{WeightedTally, vote_weight};
