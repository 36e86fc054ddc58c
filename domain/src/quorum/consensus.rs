//! Consensus synthesis
//!
//! Pure aggregation of a vote set (plus the debate transcript) into a
//! [`MetaSummary`]: weighted confidence, conflict detection, amendments,
//! risk classification and a short narrative.

use super::vote::{Vote, VoteChoice, VoteCounts};
use super::weighting::WeightedTally;
use crate::agent::AgentType;
use crate::core::current_timestamp;
use crate::core::error::DomainError;
use crate::deliberation::DebateEntry;
use serde::{Deserialize, Serialize};

/// Confidence both sides must exceed for a Risk-Scout conflict
pub const CONFLICT_CONFIDENCE_THRESHOLD: f64 = 70.0;
/// Risk score above which an estimate counts as high risk
pub const HIGH_RISK_THRESHOLD: f64 = 70.0;
/// Spread between most and least confident vote that counts as divergence
pub const CONFIDENCE_DIVERGENCE_THRESHOLD: f64 = 40.0;
/// Weighted share (percent) a side needs for a clean recommendation
pub const RECOMMENDATION_THRESHOLD: f64 = 60.0;
/// Maximum number of suggested amendments
pub const MAX_AMENDMENTS: usize = 5;
/// Risk agent concern count above which a factor note is added
const RISK_CONCERN_NOTE_THRESHOLD: usize = 3;

/// Synthesizer recommendation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Approve,
    Reject,
    NeedsReview,
}

impl Recommendation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Recommendation::Approve => "approve",
            Recommendation::Reject => "reject",
            Recommendation::NeedsReview => "needs_review",
        }
    }
}

impl std::fmt::Display for Recommendation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Aggregate risk tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    /// Step a mean risk score into a tier
    pub fn from_score(score: f64) -> Self {
        if score > 80.0 {
            RiskLevel::Critical
        } else if score > 60.0 {
            RiskLevel::High
        } else if score > 40.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// One tier up; `Critical` saturates
    pub fn escalate(self) -> Self {
        match self {
            RiskLevel::Low => RiskLevel::Medium,
            RiskLevel::Medium => RiskLevel::High,
            RiskLevel::High | RiskLevel::Critical => RiskLevel::Critical,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub overall_risk: RiskLevel,
    pub factors: Vec<String>,
}

/// Synthesized view over one voting phase
///
/// Derived and recomputed fresh on every call; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetaSummary {
    /// Weight-weighted mean confidence (0-100)
    pub weighted_confidence: f64,
    /// Weighted approve share (percent)
    pub approve_share: f64,
    /// Weighted reject share (percent)
    pub reject_share: f64,
    pub recommendation: Recommendation,
    pub conflicts_detected: Vec<String>,
    /// Deduplicated, at most [`MAX_AMENDMENTS`], in vote order
    pub suggested_amendments: Vec<String>,
    pub risk_assessment: RiskAssessment,
    pub synthesis_statement: String,
    /// Milliseconds since epoch
    pub timestamp: u64,
}

impl MetaSummary {
    pub fn has_conflicts(&self) -> bool {
        !self.conflicts_detected.is_empty()
    }
}

/// Aggregate a non-empty vote set into a [`MetaSummary`]
///
/// # Errors
///
/// [`DomainError::EmptyVoteSet`] when `votes` is empty.
///
/// # Example
///
/// ```
/// use parliament_domain::agent::{AgentRegistry, AgentType};
/// use parliament_domain::quorum::{synthesize_meta_summary, Recommendation, Vote, VoteChoice};
///
/// let registry = AgentRegistry::canonical();
/// let votes: Vec<Vote> = registry
///     .profiles()
///     .iter()
///     .map(|p| Vote::new(p, VoteChoice::Approve, 80.0, "Sound proposal"))
///     .collect();
///
/// let summary = synthesize_meta_summary(&votes, &[]).unwrap();
/// assert_eq!(summary.recommendation, Recommendation::Approve);
/// assert!(summary.conflicts_detected.is_empty());
/// ```
pub fn synthesize_meta_summary(
    votes: &[Vote],
    debates: &[DebateEntry],
) -> Result<MetaSummary, DomainError> {
    let tally = WeightedTally::from_votes(votes)?;

    let conflicts_detected = detect_conflicts(votes);
    let suggested_amendments = collect_amendments(votes);
    let risk_assessment = assess_risk(votes);
    let recommendation = recommend(&tally, &conflicts_detected);
    let synthesis_statement = narrate(votes, debates, &tally, recommendation);

    Ok(MetaSummary {
        weighted_confidence: tally.weighted_confidence,
        approve_share: tally.approve_share(),
        reject_share: tally.reject_share(),
        recommendation,
        conflicts_detected,
        suggested_amendments,
        risk_assessment,
        synthesis_statement,
        timestamp: current_timestamp(),
    })
}

/// Evaluate every conflict rule; all matches are reported
pub fn detect_conflicts(votes: &[Vote]) -> Vec<String> {
    let mut conflicts = Vec::new();

    let confident = |agent_type: AgentType, choice: VoteChoice| {
        votes
            .iter()
            .filter(|v| v.agent_type == agent_type && v.choice == choice)
            .map(|v| v.confidence)
            .filter(|c| *c > CONFLICT_CONFIDENCE_THRESHOLD)
            .reduce(f64::max)
    };
    if let (Some(risk), Some(scout)) = (
        confident(AgentType::Risk, VoteChoice::Reject),
        confident(AgentType::Scout, VoteChoice::Approve),
    ) {
        conflicts.push(format!(
            "Risk-Scout conflict: Risk rejects at {:.0}% confidence while Scout approves at {:.0}%",
            risk, scout
        ));
    }

    let high_risk = votes
        .iter()
        .filter_map(|v| v.risk_score())
        .filter(|r| *r > HIGH_RISK_THRESHOLD)
        .count();
    if high_risk > 1 {
        conflicts.push(format!(
            "High risk concern: {} agents project risk scores above {:.0}",
            high_risk, HIGH_RISK_THRESHOLD
        ));
    }

    let max = votes.iter().map(|v| v.confidence).reduce(f64::max);
    let min = votes.iter().map(|v| v.confidence).reduce(f64::min);
    if let (Some(max), Some(min)) = (max, min)
        && max - min > CONFIDENCE_DIVERGENCE_THRESHOLD
    {
        conflicts.push(format!(
            "High confidence divergence: {:.0} point spread between agents",
            max - min
        ));
    }

    conflicts
}

/// Deduplicated union of alternative suggestions, first [`MAX_AMENDMENTS`] in vote order
pub fn collect_amendments(votes: &[Vote]) -> Vec<String> {
    let mut amendments: Vec<String> = Vec::new();
    for suggestion in votes.iter().flat_map(|v| &v.alternative_suggestions) {
        if amendments.len() == MAX_AMENDMENTS {
            break;
        }
        if !amendments.contains(suggestion) {
            amendments.push(suggestion.clone());
        }
    }
    amendments
}

/// Classify aggregate risk from expected outcomes and the Risk agent's vote
pub fn assess_risk(votes: &[Vote]) -> RiskAssessment {
    let mut factors = Vec::new();

    let scores: Vec<f64> = votes.iter().filter_map(|v| v.risk_score()).collect();
    let mut overall_risk = if scores.is_empty() {
        factors.push("No risk estimates available".to_string());
        RiskLevel::Low
    } else {
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        factors.push(format!(
            "Average risk score {:.1} across {} estimates",
            mean,
            scores.len()
        ));
        RiskLevel::from_score(mean)
    };

    if let Some(risk_vote) = votes.iter().find(|v| v.agent_type == AgentType::Risk) {
        if risk_vote.is_reject() {
            overall_risk = overall_risk.escalate();
            factors.push("Risk agent voted to reject".to_string());
        }
        if risk_vote.cons.len() > RISK_CONCERN_NOTE_THRESHOLD {
            factors.push(format!(
                "Risk agent raised {} separate concerns",
                risk_vote.cons.len()
            ));
        }
    }

    RiskAssessment {
        overall_risk,
        factors,
    }
}

fn recommend(tally: &WeightedTally, conflicts: &[String]) -> Recommendation {
    if !conflicts.is_empty() {
        Recommendation::NeedsReview
    } else if tally.approve_share() > RECOMMENDATION_THRESHOLD {
        Recommendation::Approve
    } else if tally.reject_share() > RECOMMENDATION_THRESHOLD {
        Recommendation::Reject
    } else {
        Recommendation::NeedsReview
    }
}

fn narrate(
    votes: &[Vote],
    debates: &[DebateEntry],
    tally: &WeightedTally,
    recommendation: Recommendation,
) -> String {
    let counts = VoteCounts::from_votes(votes);
    let mean_confidence = votes.iter().map(|v| v.confidence).sum::<f64>() / votes.len() as f64;

    let mut statement = String::new();
    if !debates.is_empty() {
        statement.push_str(&format!("After {} debate statements, ", debates.len()));
    }
    statement.push_str(&format!(
        "{} agents voted: {} approve, {} reject, {} abstain (average confidence {:.0}%).",
        counts.total(),
        counts.approve,
        counts.reject,
        counts.abstain,
        mean_confidence
    ));

    let find = |agent_type: AgentType| votes.iter().find(|v| v.agent_type == agent_type);

    match recommendation {
        Recommendation::Approve => {
            match find(AgentType::Scout).and_then(|v| v.expected_outcome.as_ref()) {
                Some(outcome) => statement.push_str(&format!(
                    " Scout projects a {:.1}% return over {} with risk score {:.0}.",
                    outcome.return_percent, outcome.time_horizon, outcome.risk_score
                )),
                None => statement.push_str(&format!(
                    " Weighted approval reached {:.0}%.",
                    tally.approve_share()
                )),
            }
        }
        Recommendation::Reject => match find(AgentType::Risk).and_then(|v| v.cons.first()) {
            Some(concern) => statement.push_str(&format!(" Key risk: {}.", concern)),
            None => statement.push_str(&format!(
                " Weighted rejection reached {:.0}%.",
                tally.reject_share()
            )),
        },
        Recommendation::NeedsReview => {
            statement.push_str(" Manual review is recommended before proceeding.")
        }
    }

    statement
}
