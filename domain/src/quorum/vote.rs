//! Vote types for parliament consensus
//!
//! This module defines the core voting primitives used in weighted
//! decision making.

use super::expected_outcome::ExpectedOutcome;
use crate::agent::{AgentProfile, AgentType};
use crate::core::current_timestamp;
use serde::{Deserialize, Serialize};

/// A single agent's ballot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteChoice {
    Approve,
    Reject,
    Abstain,
}

impl VoteChoice {
    pub fn as_str(&self) -> &'static str {
        match self {
            VoteChoice::Approve => "approve",
            VoteChoice::Reject => "reject",
            VoteChoice::Abstain => "abstain",
        }
    }

    /// Glyph used in compact vote summaries
    pub fn glyph(&self) -> char {
        match self {
            VoteChoice::Approve => '✓',
            VoteChoice::Reject => '✗',
            VoteChoice::Abstain => '·',
        }
    }
}

impl std::fmt::Display for VoteChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Credibility of the casting agent, copied at cast time
///
/// Later profile changes cannot retroactively alter a past vote's weight.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CredibilitySnapshot {
    /// 0-100
    pub credit_score: f64,
    /// 0.0-1.0
    pub historical_accuracy: f64,
}

impl CredibilitySnapshot {
    pub fn new(credit_score: f64, historical_accuracy: f64) -> Self {
        Self {
            credit_score: credit_score.clamp(0.0, 100.0),
            historical_accuracy: historical_accuracy.clamp(0.0, 1.0),
        }
    }

    pub fn of(profile: &AgentProfile) -> Self {
        Self::new(profile.credit_score, profile.historical_accuracy)
    }
}

/// A single structured vote from an agent
///
/// # Example
///
/// ```
/// use parliament_domain::agent::AgentRegistry;
/// use parliament_domain::quorum::{Vote, VoteChoice};
///
/// let registry = AgentRegistry::canonical();
/// let scout = &registry.profiles()[0];
/// let vote = Vote::new(scout, VoteChoice::Approve, 85.0, "Yield is attractive");
/// assert!(vote.is_approve());
/// assert_eq!(vote.credibility.credit_score, 85.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vote {
    pub agent_id: String,
    pub agent_type: AgentType,
    #[serde(rename = "vote")]
    pub choice: VoteChoice,
    pub reasoning: String,
    /// Self-reported confidence (0-100)
    pub confidence: f64,
    pub expected_outcome: Option<ExpectedOutcome>,
    /// Mitigations; non-empty only when the vote is not an approval
    pub alternative_suggestions: Vec<String>,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub data_sources_used: Vec<String>,
    pub credibility: CredibilitySnapshot,
    /// Milliseconds since epoch
    pub timestamp: u64,
}

impl Vote {
    /// Cast a vote on behalf of `profile`, snapshotting its credibility
    pub fn new(
        profile: &AgentProfile,
        choice: VoteChoice,
        confidence: f64,
        reasoning: impl Into<String>,
    ) -> Self {
        Self {
            agent_id: profile.id.clone(),
            agent_type: profile.agent_type,
            choice,
            reasoning: reasoning.into(),
            confidence: confidence.clamp(0.0, 100.0),
            expected_outcome: None,
            alternative_suggestions: Vec::new(),
            pros: Vec::new(),
            cons: Vec::new(),
            data_sources_used: Vec::new(),
            credibility: CredibilitySnapshot::of(profile),
            timestamp: current_timestamp(),
        }
    }

    pub fn with_expected_outcome(mut self, outcome: ExpectedOutcome) -> Self {
        self.expected_outcome = Some(outcome);
        self
    }

    pub fn with_suggestions(mut self, suggestions: Vec<String>) -> Self {
        self.alternative_suggestions = suggestions;
        self
    }

    pub fn with_pros(mut self, pros: Vec<String>) -> Self {
        self.pros = pros;
        self
    }

    pub fn with_cons(mut self, cons: Vec<String>) -> Self {
        self.cons = cons;
        self
    }

    pub fn with_data_sources(mut self, sources: Vec<String>) -> Self {
        self.data_sources_used = sources;
        self
    }

    pub fn is_approve(&self) -> bool {
        self.choice == VoteChoice::Approve
    }

    pub fn is_reject(&self) -> bool {
        self.choice == VoteChoice::Reject
    }

    pub fn is_abstain(&self) -> bool {
        self.choice == VoteChoice::Abstain
    }

    /// Risk score of the attached expected outcome, if any
    pub fn risk_score(&self) -> Option<f64> {
        self.expected_outcome.as_ref().map(|o| o.risk_score)
    }
}

/// Raw (unweighted) ballot counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoteCounts {
    pub approve: usize,
    pub reject: usize,
    pub abstain: usize,
}

impl VoteCounts {
    pub fn from_votes(votes: &[Vote]) -> Self {
        votes.iter().fold(Self::default(), |mut counts, vote| {
            match vote.choice {
                VoteChoice::Approve => counts.approve += 1,
                VoteChoice::Reject => counts.reject += 1,
                VoteChoice::Abstain => counts.abstain += 1,
            }
            counts
        })
    }

    pub fn total(&self) -> usize {
        self.approve + self.reject + self.abstain
    }

    pub fn is_unanimous(&self) -> bool {
        let total = self.total();
        total > 0 && (self.approve == total || self.reject == total)
    }
}

/// Generate a visual vote summary (e.g., "[✓✗·]")
pub fn vote_summary(votes: &[Vote]) -> String {
    let mut summary = String::from("[");
    for vote in votes {
        summary.push(vote.choice.glyph());
    }
    summary.push(']');
    summary
}
