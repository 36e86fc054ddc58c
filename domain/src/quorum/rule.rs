//! Quorum rules for outcome determination
//!
//! Terminal resolution of a vote set. Runs standalone against a raw vote
//! list: it reads its shares from [`WeightedTally`], the same routine the
//! synthesizer uses, and never from a [`MetaSummary`](super::MetaSummary).

use super::vote::Vote;
use super::weighting::WeightedTally;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Terminal state of a voting phase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Approved,
    Rejected,
    /// Quorum not met, or neither side cleared the required majority
    Deadlocked,
}

impl Outcome {
    pub fn is_approved(&self) -> bool {
        matches!(self, Outcome::Approved)
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Outcome::Rejected)
    }

    pub fn is_deadlocked(&self) -> bool {
        matches!(self, Outcome::Deadlocked)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Approved => write!(f, "approved"),
            Outcome::Rejected => write!(f, "rejected"),
            Outcome::Deadlocked => write!(f, "deadlocked"),
        }
    }
}

/// Quorum and majority thresholds for deciding a session
///
/// # Example
///
/// ```
/// use parliament_domain::quorum::QuorumRule;
///
/// let rule = QuorumRule::new(3, 60.0);
/// assert_eq!(rule.description(), "quorum of 3 votes, 60% weighted majority");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QuorumRule {
    /// Minimum number of cast votes
    pub quorum: usize,
    /// Weighted share (percent) a side needs to win
    pub required_majority: f64,
}

impl Default for QuorumRule {
    fn default() -> Self {
        Self {
            quorum: 3,
            required_majority: 60.0,
        }
    }
}

impl QuorumRule {
    pub fn new(quorum: usize, required_majority: f64) -> Self {
        Self {
            quorum,
            required_majority,
        }
    }

    /// Resolve `votes` under this rule
    pub fn resolve(&self, votes: &[Vote]) -> Result<Outcome, DomainError> {
        determine_outcome(votes, self.quorum, self.required_majority)
    }

    pub fn description(&self) -> String {
        format!(
            "quorum of {} votes, {}% weighted majority",
            self.quorum, self.required_majority
        )
    }
}

impl std::fmt::Display for QuorumRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.description())
    }
}

/// Apply quorum and weighted-majority thresholds to a vote set
///
/// The quorum check comes first and short-circuits: fewer than `quorum`
/// votes is always [`Outcome::Deadlocked`], whatever the votes say.
///
/// # Errors
///
/// [`DomainError::EmptyVoteSet`] when `votes` is empty.
pub fn determine_outcome(
    votes: &[Vote],
    quorum: usize,
    required_majority: f64,
) -> Result<Outcome, DomainError> {
    if votes.is_empty() {
        return Err(DomainError::EmptyVoteSet);
    }
    if votes.len() < quorum {
        return Ok(Outcome::Deadlocked);
    }

    let tally = WeightedTally::from_votes(votes)?;
    let outcome = if tally.approve_share() >= required_majority {
        Outcome::Approved
    } else if tally.reject_share() >= required_majority {
        Outcome::Rejected
    } else {
        Outcome::Deadlocked
    };
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{AgentProfile, AgentType};
    use crate::quorum::vote::VoteChoice;
    use proptest::prelude::*;

    fn vote(choice: VoteChoice, confidence: f64) -> Vote {
        let profile = AgentProfile::new("agent", AgentType::Meta, "Agent", 90.0, 0.9).unwrap();
        Vote::new(&profile, choice, confidence, "reason")
    }

    #[test]
    fn test_quorum_short_circuits() {
        let votes = vec![vote(VoteChoice::Approve, 100.0), vote(VoteChoice::Approve, 100.0)];
        assert_eq!(determine_outcome(&votes, 3, 60.0), Ok(Outcome::Deadlocked));
        assert_eq!(determine_outcome(&votes, 2, 60.0), Ok(Outcome::Approved));
    }

    #[test]
    fn test_rejected() {
        let votes = vec![
            vote(VoteChoice::Reject, 80.0),
            vote(VoteChoice::Reject, 80.0),
            vote(VoteChoice::Approve, 80.0),
        ];
        assert_eq!(determine_outcome(&votes, 3, 60.0), Ok(Outcome::Rejected));
    }

    #[test]
    fn test_majority_threshold_is_inclusive() {
        // Equal weights: 1 approve out of 2 = exactly 50%
        let votes = vec![vote(VoteChoice::Approve, 80.0), vote(VoteChoice::Abstain, 80.0)];
        assert_eq!(determine_outcome(&votes, 2, 50.0), Ok(Outcome::Approved));
        assert_eq!(determine_outcome(&votes, 2, 50.1), Ok(Outcome::Deadlocked));
    }

    #[test]
    fn test_heavy_abstention_deadlocks() {
        let votes = vec![
            vote(VoteChoice::Approve, 80.0),
            vote(VoteChoice::Abstain, 80.0),
            vote(VoteChoice::Abstain, 80.0),
            vote(VoteChoice::Reject, 80.0),
        ];
        assert_eq!(determine_outcome(&votes, 3, 60.0), Ok(Outcome::Deadlocked));
    }

    #[test]
    fn test_empty_votes_is_precondition_violation() {
        assert_eq!(determine_outcome(&[], 0, 60.0), Err(DomainError::EmptyVoteSet));
        assert_eq!(determine_outcome(&[], 3, 60.0), Err(DomainError::EmptyVoteSet));
    }

    #[test]
    fn test_rule_resolve_and_display() {
        let rule = QuorumRule::default();
        assert_eq!(rule.quorum, 3);
        assert_eq!(rule.to_string(), "quorum of 3 votes, 60% weighted majority");
        assert_eq!(rule.resolve(&[vote(VoteChoice::Approve, 90.0)]), Ok(Outcome::Deadlocked));
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(Outcome::Approved.to_string(), "approved");
        assert_eq!(Outcome::Rejected.to_string(), "rejected");
        assert_eq!(Outcome::Deadlocked.to_string(), "deadlocked");
    }

    fn arb_votes(max: usize) -> impl Strategy<Value = Vec<Vote>> {
        prop::collection::vec(
            (
                prop_oneof![
                    Just(VoteChoice::Approve),
                    Just(VoteChoice::Reject),
                    Just(VoteChoice::Abstain),
                ],
                0.0f64..=100.0,
            ),
            1..max,
        )
        .prop_map(|ballots| ballots.into_iter().map(|(c, conf)| vote(c, conf)).collect())
    }

    proptest! {
        #[test]
        fn prop_quorum_dominates(votes in arb_votes(8), extra in 1usize..5, majority in 0.0f64..=100.0) {
            let quorum = votes.len() + extra;
            prop_assert_eq!(determine_outcome(&votes, quorum, majority), Ok(Outcome::Deadlocked));
        }

        #[test]
        fn prop_idempotent(votes in arb_votes(8), quorum in 0usize..8, majority in 1.0f64..=100.0) {
            let first = determine_outcome(&votes, quorum, majority);
            let second = determine_outcome(&votes, quorum, majority);
            prop_assert_eq!(first, second);
        }
    }
}
