//! Credibility-and-confidence vote weighting.
//!
//! Both the consensus synthesizer and the outcome resolver read their
//! approve/reject shares from [`WeightedTally`], so the two can never
//! disagree about what a vote is worth.
//!
//! ```text
//! weight(v) = (credit/100) * accuracy * (0.5 + 0.5 * confidence/100)
//!             └──── credibility ────┘   └── modifier in [0.5, 1.0] ──┘
//! ```

use super::vote::{Vote, VoteChoice};
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Weight of a single vote, in `[0, 1]`
///
/// Never above the agent's credibility ceiling (`credit/100 * accuracy`)
/// and never below half of it.
pub fn vote_weight(vote: &Vote) -> f64 {
    let credit = vote.credibility.credit_score.clamp(0.0, 100.0);
    let accuracy = vote.credibility.historical_accuracy.clamp(0.0, 1.0);
    let confidence = vote.confidence.clamp(0.0, 100.0);

    let credibility = (credit / 100.0) * accuracy;
    credibility * (0.5 + 0.5 * confidence / 100.0)
}

/// Weighted aggregate over a non-empty vote set
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightedTally {
    pub approve_weight: f64,
    pub reject_weight: f64,
    pub abstain_weight: f64,
    pub total_weight: f64,
    /// Weight-weighted mean of raw confidences (0-100)
    pub weighted_confidence: f64,
    pub vote_count: usize,
}

impl WeightedTally {
    /// Aggregate `votes`, failing on an empty set
    pub fn from_votes(votes: &[Vote]) -> Result<Self, DomainError> {
        if votes.is_empty() {
            return Err(DomainError::EmptyVoteSet);
        }

        let mut tally = Self {
            approve_weight: 0.0,
            reject_weight: 0.0,
            abstain_weight: 0.0,
            total_weight: 0.0,
            weighted_confidence: 0.0,
            vote_count: votes.len(),
        };
        let mut confidence_sum = 0.0;

        for vote in votes {
            let weight = vote_weight(vote);
            match vote.choice {
                VoteChoice::Approve => tally.approve_weight += weight,
                VoteChoice::Reject => tally.reject_weight += weight,
                VoteChoice::Abstain => tally.abstain_weight += weight,
            }
            tally.total_weight += weight;
            confidence_sum += weight * vote.confidence.clamp(0.0, 100.0);
        }

        tally.weighted_confidence = if tally.total_weight > 0.0 {
            confidence_sum / tally.total_weight
        } else {
            // Every agent has zero credibility: fall back to the plain mean
            votes
                .iter()
                .map(|v| v.confidence.clamp(0.0, 100.0))
                .sum::<f64>()
                / votes.len() as f64
        };
        tally.weighted_confidence = tally.weighted_confidence.clamp(0.0, 100.0);

        Ok(tally)
    }

    /// Approve share of total weight, in percent (abstains dilute it)
    pub fn approve_share(&self) -> f64 {
        self.share(self.approve_weight)
    }

    /// Reject share of total weight, in percent (abstains dilute it)
    pub fn reject_share(&self) -> f64 {
        self.share(self.reject_weight)
    }

    fn share(&self, weight: f64) -> f64 {
        if self.total_weight > 0.0 {
            weight / self.total_weight * 100.0
        } else {
            0.0
        }
    }
}
