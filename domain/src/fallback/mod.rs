//! Deterministic fallback generation
//!
//! Templated debate statements and votes produced whenever the reasoner is
//! unavailable or its output fails parsing. Every random choice is drawn
//! from the caller's RNG, so a seeded RNG reproduces the same content.
//!
//! Pieces that do not depend on which branch produced a vote
//! ([`finalize_vote`]) or entry ([`simulate_stress`]) live here too, so the
//! reasoner path and the fallback path share them.

mod pools;

pub use pools::{SIMULATION_CONFIDENCE_RANGE, confidence_range};

use crate::agent::{AgentProfile, AgentType};
use crate::deliberation::{DebateContext, DebateEntry, SimulationResult};
use crate::quorum::{ExpectedOutcome, Vote, VoteChoice};
use rand::Rng;
use rand::seq::SliceRandom;

/// Template-based debate entry for `profile`
pub fn fallback_debate_entry<R: Rng + ?Sized>(
    profile: &AgentProfile,
    context: &DebateContext,
    rng: &mut R,
) -> DebateEntry {
    let templates = pools::debate_templates(profile.agent_type);
    let (position, template) = templates[rng.gen_range(0..templates.len())];

    DebateEntry::new(
        profile.id.clone(),
        profile.agent_type,
        position,
        fill(template, &context.topic),
        data_sources(profile.agent_type),
    )
}

/// Template-based vote for `profile`, not yet finalized
///
/// The choice is sampled from the agent type's categorical distribution
/// and the confidence from its bounded range.
pub fn fallback_vote<R: Rng + ?Sized>(
    profile: &AgentProfile,
    context: &DebateContext,
    rng: &mut R,
) -> Vote {
    let agent_type = profile.agent_type;
    let choice = sample_choice(agent_type, rng);

    let (low, high) = confidence_range(agent_type);
    let confidence = rng.gen_range(low..=high).round();

    let reasons = pools::vote_reasoning(agent_type, choice);
    let reasoning = fill(reasons[rng.gen_range(0..reasons.len())], &context.topic);

    Vote::new(profile, choice, confidence, reasoning)
        .with_pros(sample_some(pools::pros(agent_type), rng))
        .with_cons(sample_some(pools::cons(agent_type), rng))
}

/// Pros or cons for a vote whose reasoner reply did not supply any
pub fn sample_pros<R: Rng + ?Sized>(agent_type: AgentType, rng: &mut R) -> Vec<String> {
    sample_some(pools::pros(agent_type), rng)
}

pub fn sample_cons<R: Rng + ?Sized>(agent_type: AgentType, rng: &mut R) -> Vec<String> {
    sample_some(pools::cons(agent_type), rng)
}

/// One stress scenario from the fixed set
pub fn simulate_stress<R: Rng + ?Sized>(rng: &mut R) -> SimulationResult {
    let (name, outcome) = pools::STRESS_SCENARIOS[rng.gen_range(0..pools::STRESS_SCENARIOS.len())];
    let (low, high) = SIMULATION_CONFIDENCE_RANGE;

    SimulationResult {
        scenario_name: name.to_string(),
        outcome: outcome.to_string(),
        confidence: rng.gen_range(low..=high).round(),
    }
}

/// Attach the branch-independent parts of a vote.
///
/// - `expected_outcome` from the action type and the agent's risk bias
/// - `alternative_suggestions` from the agent's mitigations, only when the
///   vote is not an approval
/// - `data_sources_used` from the agent type's attribution labels
pub fn finalize_vote(vote: Vote, context: &DebateContext) -> Vote {
    let agent_type = vote.agent_type;
    let suggestions = if vote.choice == VoteChoice::Approve {
        Vec::new()
    } else {
        pools::mitigations(agent_type)
            .iter()
            .map(|s| s.to_string())
            .collect()
    };

    vote.with_expected_outcome(ExpectedOutcome::estimate(context.action_type, agent_type))
        .with_suggestions(suggestions)
        .with_data_sources(data_sources(agent_type))
}

pub fn data_sources(agent_type: AgentType) -> Vec<String> {
    agent_type
        .data_sources()
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn sample_choice<R: Rng + ?Sized>(agent_type: AgentType, rng: &mut R) -> VoteChoice {
    let (approve, reject) = pools::vote_distribution(agent_type);
    let roll = rng.gen_range(0.0..1.0);
    if roll < approve {
        VoteChoice::Approve
    } else if roll < approve + reject {
        VoteChoice::Reject
    } else {
        VoteChoice::Abstain
    }
}

/// One or two distinct entries from `pool`
fn sample_some<R: Rng + ?Sized>(pool: &[&str], rng: &mut R) -> Vec<String> {
    let count = rng.gen_range(1..=2);
    pool.choose_multiple(rng, count)
        .map(|s| s.to_string())
        .collect()
}

fn fill(template: &str, topic: &str) -> String {
    let topic = if topic.trim().is_empty() {
        "this proposal"
    } else {
        topic.trim()
    };
    let filled = template.replace("{topic}", topic);

    // Templates may open with the topic
    let mut chars = filled.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => filled,
    }
}
