//! Fixed content pools for fallback generation, keyed by agent type.
//!
//! `{topic}` in a template is replaced with the proposal topic.

use crate::agent::{AgentType, Position};
use crate::quorum::VoteChoice;

pub(crate) fn debate_templates(agent_type: AgentType) -> &'static [(Position, &'static str)] {
    match agent_type {
        AgentType::Scout => &[
            (
                Position::For,
                "Market data shows favorable conditions for {topic}. Volume and liquidity trends support moving forward now.",
            ),
            (
                Position::For,
                "{topic} lines up with current yield opportunities; waiting risks missing the entry window.",
            ),
            (
                Position::For,
                "On-chain activity around {topic} has been rising steadily, which usually precedes better returns.",
            ),
            (
                Position::Clarification,
                "Before committing to {topic}, I want to confirm the entry price and the size of the position.",
            ),
        ],
        AgentType::Risk => &[
            (
                Position::Against,
                "{topic} carries downside exposure we have not priced in; a sharp drawdown would hit the treasury hard.",
            ),
            (
                Position::Against,
                "Historical volatility suggests {topic} could lose value quickly. We need tighter limits before proceeding.",
            ),
            (
                Position::Clarification,
                "What is the worst-case loss on {topic}, and do we have an exit plan if liquidity dries up?",
            ),
            (
                Position::For,
                "Stress tests on {topic} look survivable at the proposed size, provided a stop-loss stays in place.",
            ),
        ],
        AgentType::Execution => &[
            (
                Position::For,
                "{topic} is executable today: liquidity depth is adequate and gas costs are within budget.",
            ),
            (
                Position::Clarification,
                "Routing for {topic} needs confirmation; splitting the order could reduce slippage.",
            ),
            (
                Position::Against,
                "Current gas prices make {topic} expensive to execute; fees would eat most of the expected gain.",
            ),
            (
                Position::For,
                "The execution path for {topic} is straightforward and can complete in a single transaction batch.",
            ),
        ],
        AgentType::Meta => &[
            (
                Position::Clarification,
                "The debate on {topic} so far splits between opportunity and downside; we need firmer numbers.",
            ),
            (
                Position::For,
                "Weighing the arguments on {topic}, the upside case is better supported than the objections.",
            ),
            (
                Position::Against,
                "The objections raised about {topic} have not been answered; the proposal is not ready.",
            ),
            (
                Position::Clarification,
                "Each agent should state what evidence would change their position on {topic}.",
            ),
        ],
    }
}

pub(crate) fn vote_reasoning(agent_type: AgentType, choice: VoteChoice) -> &'static [&'static str] {
    match (agent_type, choice) {
        (AgentType::Scout, VoteChoice::Approve) => &[
            "The opportunity in {topic} outweighs the known downsides.",
            "Momentum and liquidity both favor {topic} right now.",
        ],
        (AgentType::Scout, VoteChoice::Reject) => &[
            "The return on {topic} is too thin to justify the capital.",
            "Better opportunities exist than {topic} at the moment.",
        ],
        (AgentType::Scout, VoteChoice::Abstain) => &[
            "Market signals on {topic} are mixed; I cannot call it either way.",
            "Not enough data on {topic} to take a position.",
        ],
        (AgentType::Risk, VoteChoice::Approve) => &[
            "Downside on {topic} is bounded and acceptable at this size.",
            "Risk controls proposed for {topic} are sufficient.",
        ],
        (AgentType::Risk, VoteChoice::Reject) => &[
            "Tail risk on {topic} is too high for the treasury.",
            "{topic} exposes us to losses we cannot hedge.",
        ],
        (AgentType::Risk, VoteChoice::Abstain) => &[
            "Risk on {topic} is unclear until the stress scenarios are refined.",
            "I need a worst-case estimate for {topic} before voting.",
        ],
        (AgentType::Execution, VoteChoice::Approve) => &[
            "{topic} can be executed cleanly with acceptable slippage.",
            "Costs to execute {topic} are well within budget.",
        ],
        (AgentType::Execution, VoteChoice::Reject) => &[
            "Execution costs for {topic} erase the expected gain.",
            "Liquidity is too shallow to execute {topic} at this size.",
        ],
        (AgentType::Execution, VoteChoice::Abstain) => &[
            "Execution of {topic} depends on gas conditions I cannot predict.",
            "Routing for {topic} is feasible but unconfirmed.",
        ],
        (AgentType::Meta, VoteChoice::Approve) => &[
            "The debate on {topic} converged on a well-supported case for action.",
            "Arguments for {topic} were stronger and better evidenced.",
        ],
        (AgentType::Meta, VoteChoice::Reject) => &[
            "Unresolved objections on {topic} make approval premature.",
            "The case for {topic} relied on assumptions nobody defended.",
        ],
        (AgentType::Meta, VoteChoice::Abstain) => &[
            "The debate on {topic} did not settle the key disagreements.",
            "Evidence on {topic} is balanced; I defer to the specialists.",
        ],
    }
}

pub(crate) fn pros(agent_type: AgentType) -> &'static [&'static str] {
    match agent_type {
        AgentType::Scout => &[
            "Attractive projected yield",
            "Rising market momentum",
            "Deep liquidity at entry",
            "Early positioning advantage",
        ],
        AgentType::Risk => &[
            "Bounded maximum loss",
            "Audited contracts involved",
            "Diversifies treasury exposure",
            "Clear exit path",
        ],
        AgentType::Execution => &[
            "Low gas cost",
            "Minimal slippage expected",
            "Single-batch execution",
            "Reliable routing available",
        ],
        AgentType::Meta => &[
            "Consistent with past approved actions",
            "Broad agreement among specialists",
            "Well-documented rationale",
            "Reversible if conditions change",
        ],
    }
}

pub(crate) fn cons(agent_type: AgentType) -> &'static [&'static str] {
    match agent_type {
        AgentType::Scout => &[
            "Opportunity may already be priced in",
            "Yield could compress quickly",
            "Competing protocols offer similar returns",
            "Entry timing uncertain",
        ],
        AgentType::Risk => &[
            "Exposure to sharp drawdowns",
            "Liquidation risk under stress",
            "Smart contract risk",
            "Correlated losses with existing positions",
        ],
        AgentType::Execution => &[
            "Gas price volatility",
            "Slippage on large orders",
            "Multi-step execution can fail midway",
            "MEV exposure on public mempool",
        ],
        AgentType::Meta => &[
            "Specialists disagree on key numbers",
            "Limited historical precedent",
            "Open questions left unanswered",
            "Rationale depends on optimistic assumptions",
        ],
    }
}

/// Mitigations an agent proposes when it does not approve
pub(crate) fn mitigations(agent_type: AgentType) -> &'static [&'static str] {
    match agent_type {
        AgentType::Scout => &[
            "Wait for a better entry point",
            "Start with a smaller pilot position",
        ],
        AgentType::Risk => &[
            "Reduce position size by half",
            "Add a stop-loss at 10% drawdown",
            "Hedge exposure with a stable asset",
        ],
        AgentType::Execution => &[
            "Split the order into smaller tranches",
            "Execute during low gas periods",
        ],
        AgentType::Meta => &[
            "Schedule another debate round with updated data",
            "Require explicit sign-off from the Risk agent",
        ],
    }
}

/// Categorical vote distribution: (approve, reject); abstain takes the rest
pub(crate) fn vote_distribution(agent_type: AgentType) -> (f64, f64) {
    match agent_type {
        AgentType::Scout => (0.60, 0.15),
        AgentType::Risk => (0.20, 0.55),
        AgentType::Execution => (0.50, 0.25),
        AgentType::Meta => (0.40, 0.30),
    }
}

/// Inclusive confidence range for fallback votes
pub fn confidence_range(agent_type: AgentType) -> (f64, f64) {
    match agent_type {
        AgentType::Scout => (65.0, 90.0),
        AgentType::Risk => (60.0, 88.0),
        AgentType::Execution => (60.0, 85.0),
        AgentType::Meta => (55.0, 80.0),
    }
}

/// Stress scenarios run by the Risk agent: (name, outcome)
pub(crate) const STRESS_SCENARIOS: &[(&str, &str)] = &[
    (
        "Flash Crash",
        "Position draws down roughly 35% within an hour before partial recovery",
    ),
    (
        "Normal Volatility",
        "Returns stay within 8% of the baseline projection",
    ),
    (
        "High Growth",
        "Upside of 20% or more, offset by moderate impermanent loss",
    ),
];

/// Inclusive confidence range for stress scenario results
pub const SIMULATION_CONFIDENCE_RANGE: (f64, f64) = (55.0, 85.0);
