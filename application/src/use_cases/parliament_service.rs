//! Parliament service
//!
//! The stateless operations of the parliament: debate and vote generation
//! with reasoner-or-fallback, consensus synthesis and outcome resolution.
//! All state the service needs is injected at construction; scheduling and
//! context mutation belong to the caller.

use crate::fallback_rng::FallbackRng;
use crate::ports::reasoner::{NullReasoner, Reasoner, ReasonerRequest};
use parliament_domain::fallback;
use parliament_domain::{
    AgentProfile, AgentRegistry, AgentType, DebateContext, DebateEntry, DomainError, MetaSummary,
    Outcome, QuorumRule, Recommendation, Vote, parse_debate_response, parse_vote_response,
};
use std::sync::Arc;
use tracing::{debug, warn};

/// Default number of trailing debate entries included in prompts
pub const DEFAULT_HISTORY_WINDOW: usize = 5;

/// Generators and consensus operations over an injected registry
pub struct ParliamentService {
    registry: AgentRegistry,
    reasoner: Arc<dyn Reasoner>,
    rng: FallbackRng,
    history_window: usize,
}

impl ParliamentService {
    pub fn new(registry: AgentRegistry, reasoner: Arc<dyn Reasoner>, rng: FallbackRng) -> Self {
        Self {
            registry,
            reasoner,
            rng,
            history_window: DEFAULT_HISTORY_WINDOW,
        }
    }

    /// Service with no reasoner: every generation takes the fallback path
    pub fn offline(registry: AgentRegistry, rng: FallbackRng) -> Self {
        Self::new(registry, Arc::new(NullReasoner), rng)
    }

    pub fn with_history_window(mut self, window: usize) -> Self {
        self.history_window = window;
        self
    }

    pub fn registry(&self) -> &AgentRegistry {
        &self.registry
    }

    /// Configured specialists, in registry order
    pub fn get_agent_profiles(&self) -> &[AgentProfile] {
        self.registry.profiles()
    }

    /// Attribution labels for an agent type
    pub fn get_data_sources(&self, agent_type: AgentType) -> &'static [&'static str] {
        self.registry.data_sources(agent_type)
    }

    /// Produce one debate statement for `profile`.
    ///
    /// One reasoner call, no retry. Any reasoner error or unparseable reply
    /// falls through to a templated statement. Never fails.
    ///
    /// Risk agents always carry a stress scenario, whichever branch produced
    /// the statement. The entry is returned, not appended to `context`.
    pub async fn generate_debate_entry(
        &self,
        profile: &AgentProfile,
        context: &DebateContext,
    ) -> DebateEntry {
        let request = ReasonerRequest::debate(profile, context, self.history_window);

        let parsed = match self.reasoner.ask(&request).await {
            Ok(reply) => parse_debate_response(profile.agent_type, &reply).map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };

        let entry = match parsed {
            Ok(statement) => DebateEntry::new(
                profile.id.clone(),
                profile.agent_type,
                statement.position,
                statement.statement,
                fallback::data_sources(profile.agent_type),
            ),
            Err(reason) => {
                debug!("Debate fallback for {}: {}", profile.id, reason);
                self.rng
                    .with(|rng| fallback::fallback_debate_entry(profile, context, rng))
            }
        };

        if profile.agent_type == AgentType::Risk {
            entry.with_simulation(self.rng.with(|rng| fallback::simulate_stress(rng)))
        } else {
            entry
        }
    }

    /// Produce one vote for `profile` over the context's debate history.
    ///
    /// Same reasoner-or-fallback contract as [`Self::generate_debate_entry`].
    /// Expected outcome, mitigations and data sources are attached after
    /// either branch.
    pub async fn generate_vote(&self, profile: &AgentProfile, context: &DebateContext) -> Vote {
        let request = ReasonerRequest::vote(profile, context, self.history_window);

        let parsed = match self.reasoner.ask(&request).await {
            Ok(reply) => parse_vote_response(&reply).map_err(|e| e.to_string()),
            Err(e) => Err(e.to_string()),
        };

        let vote = match parsed {
            Ok(parsed) => {
                let agent_type = profile.agent_type;
                let (pros, cons) = self.rng.with(|rng| {
                    let pros = if parsed.pros.is_empty() {
                        fallback::sample_pros(agent_type, rng)
                    } else {
                        parsed.pros
                    };
                    let cons = if parsed.cons.is_empty() {
                        fallback::sample_cons(agent_type, rng)
                    } else {
                        parsed.cons
                    };
                    (pros, cons)
                });
                Vote::new(profile, parsed.choice, parsed.confidence, parsed.reasoning)
                    .with_pros(pros)
                    .with_cons(cons)
            }
            Err(reason) => {
                debug!("Vote fallback for {}: {}", profile.id, reason);
                self.rng
                    .with(|rng| fallback::fallback_vote(profile, context, rng))
            }
        };

        fallback::finalize_vote(vote, context)
    }

    /// Aggregate a vote set into a [`MetaSummary`]
    pub fn synthesize_meta_summary(
        &self,
        votes: &[Vote],
        debates: &[DebateEntry],
    ) -> Result<MetaSummary, DomainError> {
        parliament_domain::synthesize_meta_summary(votes, debates)
    }

    /// Resolve the terminal outcome of a vote set.
    ///
    /// The outcome is computed from the votes alone. A supplied summary is
    /// only compared against it, and a decisive contradiction is logged.
    pub fn determine_outcome(
        &self,
        votes: &[Vote],
        rule: &QuorumRule,
        summary: Option<&MetaSummary>,
    ) -> Result<Outcome, DomainError> {
        let outcome = rule.resolve(votes)?;

        if let Some(summary) = summary {
            match (outcome, summary.recommendation) {
                (Outcome::Approved, Recommendation::Reject)
                | (Outcome::Rejected, Recommendation::Approve) => {
                    warn!(
                        "Outcome {} contradicts recommendation {}",
                        outcome, summary.recommendation
                    );
                }
                (Outcome::Approved, Recommendation::NeedsReview)
                | (Outcome::Rejected, Recommendation::NeedsReview) => {
                    debug!(
                        "Outcome {} reached despite {} conflict(s)",
                        outcome,
                        summary.conflicts_detected.len()
                    );
                }
                _ => {}
            }
        }

        Ok(outcome)
    }
}
