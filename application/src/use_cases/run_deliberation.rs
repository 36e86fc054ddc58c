//! Run Deliberation use case
//!
//! Orchestrates the full parliament flow: debate rounds, voting, synthesis
//! and resolution, re-entering debate on deadlock while the budget allows.

use crate::config::ParliamentConfig;
use crate::ports::deliberation_logger::{DeliberationEvent, DeliberationLogger, NoDeliberationLog};
use crate::ports::progress::{DeliberationProgress, NoProgress};
use crate::use_cases::parliament_service::ParliamentService;
use futures::future::join_all;
use parliament_domain::{DebateContext, DomainError, MetaSummary, Outcome, Vote};
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Errors that can occur during a deliberation
#[derive(Error, Debug, PartialEq)]
pub enum RunDeliberationError {
    #[error("No agents configured")]
    NoAgents,

    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Input for the RunDeliberation use case
#[derive(Debug, Clone)]
pub struct RunDeliberationInput {
    /// Proposal plus any history the caller already has
    pub context: DebateContext,
    pub config: ParliamentConfig,
}

impl RunDeliberationInput {
    pub fn new(context: DebateContext, config: ParliamentConfig) -> Self {
        Self { context, config }
    }
}

/// Final state of a deliberation
#[derive(Debug, Clone, Serialize)]
pub struct DeliberationResult {
    /// Proposal with the full debate history and the last vote set
    pub context: DebateContext,
    /// Votes of the last completed voting phase
    pub votes: Vec<Vote>,
    /// Summary of the last completed voting phase; absent if cancelled before any
    pub summary: Option<MetaSummary>,
    pub outcome: Outcome,
    /// Debate+vote passes started
    pub deliberations: usize,
    pub cancelled: bool,
}

/// Use case for running a parliament deliberation
pub struct RunDeliberationUseCase {
    service: Arc<ParliamentService>,
    logger: Arc<dyn DeliberationLogger>,
    cancellation: CancellationToken,
}

impl RunDeliberationUseCase {
    pub fn new(service: Arc<ParliamentService>) -> Self {
        Self {
            service,
            logger: Arc::new(NoDeliberationLog),
            cancellation: CancellationToken::new(),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn DeliberationLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        input: RunDeliberationInput,
    ) -> Result<DeliberationResult, RunDeliberationError> {
        self.execute_with_progress(input, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        input: RunDeliberationInput,
        progress: &dyn DeliberationProgress,
    ) -> Result<DeliberationResult, RunDeliberationError> {
        if self.service.registry().is_empty() {
            return Err(RunDeliberationError::NoAgents);
        }

        let RunDeliberationInput {
            mut context,
            config,
        } = input;
        let rule = config.rule();
        let max_deliberations = config.max_deliberations.max(1);

        info!(
            "Starting deliberation on '{}' with {} agents ({})",
            context.topic,
            self.service.registry().len(),
            rule
        );

        let mut votes = Vec::new();
        let mut summary = None;
        let mut deliberations = 0;

        loop {
            deliberations += 1;

            for round in 1..=config.debate_rounds {
                if self.cancellation.is_cancelled() {
                    return Ok(self.cancelled(context, votes, summary, deliberations));
                }
                self.debate_round(&mut context, round, config.debate_rounds, progress)
                    .await;
            }

            if self.cancellation.is_cancelled() {
                return Ok(self.cancelled(context, votes, summary, deliberations));
            }
            votes = self.voting(&mut context, progress).await;

            let meta = self
                .service
                .synthesize_meta_summary(&votes, &context.previous_debates)?;
            let outcome = self.service.determine_outcome(&votes, &rule, Some(&meta))?;

            info!(
                "Deliberation {} resolved: {} (recommendation: {})",
                deliberations, outcome, meta.recommendation
            );
            self.logger
                .log(DeliberationEvent::from_serializable("summary", &meta));
            self.logger.log(DeliberationEvent::new(
                "outcome",
                json!({ "outcome": outcome, "deliberation": deliberations }),
            ));
            progress.on_resolved(&meta, outcome, deliberations);

            if !outcome.is_deadlocked() || deliberations >= max_deliberations {
                return Ok(DeliberationResult {
                    context,
                    votes,
                    summary: Some(meta),
                    outcome,
                    deliberations,
                    cancelled: false,
                });
            }

            debug!("Deadlocked; re-entering debate");
            summary = Some(meta);
        }
    }

    /// One debate round: all agents speak concurrently over the same
    /// history, then the entries are appended in registry order.
    async fn debate_round(
        &self,
        context: &mut DebateContext,
        round: usize,
        total_rounds: usize,
        progress: &dyn DeliberationProgress,
    ) {
        let profiles = self.service.get_agent_profiles();
        info!("Debate round {}/{}", round, total_rounds);
        progress.on_round_start(round, total_rounds, profiles.len());

        let snapshot: &DebateContext = context;
        let entries = join_all(
            profiles
                .iter()
                .map(|profile| self.service.generate_debate_entry(profile, snapshot)),
        )
        .await;

        for entry in entries {
            self.logger
                .log(DeliberationEvent::from_serializable("debate_entry", &entry));
            progress.on_debate_entry(&entry);
            context.push_debate(entry);
        }
        progress.on_round_complete(round);
    }

    /// Voting phase: all agents vote concurrently over the final history.
    /// The new vote set replaces the previous one in the context.
    async fn voting(
        &self,
        context: &mut DebateContext,
        progress: &dyn DeliberationProgress,
    ) -> Vec<Vote> {
        let profiles = self.service.get_agent_profiles();
        info!("Voting");
        progress.on_voting_start(profiles.len());

        let snapshot: &DebateContext = context;
        let votes = join_all(
            profiles
                .iter()
                .map(|profile| self.service.generate_vote(profile, snapshot)),
        )
        .await;

        context.other_agent_votes.clear();
        for vote in &votes {
            self.logger
                .log(DeliberationEvent::from_serializable("vote", vote));
            progress.on_vote(vote);
            context.push_vote(vote.clone());
        }
        votes
    }

    fn cancelled(
        &self,
        context: DebateContext,
        votes: Vec<Vote>,
        summary: Option<MetaSummary>,
        deliberations: usize,
    ) -> DeliberationResult {
        info!("Deliberation cancelled after {} pass(es)", deliberations);
        DeliberationResult {
            context,
            votes,
            summary,
            outcome: Outcome::Deadlocked,
            deliberations,
            cancelled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback_rng::FallbackRng;
    use crate::ports::reasoner::{Reasoner, ReasonerError, ReasonerRequest};
    use async_trait::async_trait;
    use parliament_domain::{ActionType, AgentRegistry, AgentType};
    use std::sync::Mutex;

    /// Reasoner that answers by agent: debate prompts get a statement,
    /// vote prompts get the fixed vote for the agent named in the system
    /// instruction.
    struct PartyLineReasoner;

    #[async_trait]
    impl Reasoner for PartyLineReasoner {
        async fn ask(&self, request: &ReasonerRequest) -> Result<String, ReasonerError> {
            let is_vote = request.user_prompt.contains("cast your vote");
            let is_risk = request.system_instruction.contains("Risk officer");
            match (is_vote, is_risk) {
                (false, true) => Ok("There is real risk of a drawdown.".to_string()),
                (false, false) => Ok("I support this proposal.".to_string()),
                (true, true) => Ok(
                    r#"{"vote": "reject", "confidence": 80, "reasoning": "Too risky."}"#.to_string(),
                ),
                (true, false) => Ok(
                    r#"{"vote": "approve", "confidence": 85, "reasoning": "Worth it."}"#.to_string(),
                ),
            }
        }
    }

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<&'static str>>,
    }

    impl DeliberationLogger for RecordingLogger {
        fn log(&self, event: DeliberationEvent) {
            self.events.lock().unwrap().push(event.event_type);
        }
    }

    fn context() -> DebateContext {
        DebateContext::new("stake 500 ETH", "Earn validator yield", ActionType::Stake)
    }

    fn use_case(reasoner: Arc<dyn Reasoner>) -> RunDeliberationUseCase {
        let service = ParliamentService::new(
            AgentRegistry::canonical(),
            reasoner,
            FallbackRng::seeded(5),
        );
        RunDeliberationUseCase::new(Arc::new(service))
    }

    #[tokio::test]
    async fn test_rounds_append_in_registry_order() {
        let use_case = use_case(Arc::new(PartyLineReasoner));
        let config = ParliamentConfig::default().with_debate_rounds(2);

        let result = use_case
            .execute(RunDeliberationInput::new(context(), config))
            .await
            .unwrap();

        let order: Vec<AgentType> = result
            .context
            .previous_debates
            .iter()
            .map(|e| e.agent_type)
            .collect();
        assert_eq!(
            order,
            vec![
                AgentType::Scout,
                AgentType::Risk,
                AgentType::Execution,
                AgentType::Meta,
                AgentType::Scout,
                AgentType::Risk,
                AgentType::Execution,
                AgentType::Meta,
            ]
        );
        assert_eq!(result.votes.len(), 4);
        assert_eq!(result.context.other_agent_votes.len(), 4);
    }

    #[tokio::test]
    async fn test_party_line_votes_resolve() {
        let logger = Arc::new(RecordingLogger::default());
        let use_case = use_case(Arc::new(PartyLineReasoner)).with_logger(logger.clone());
        let config = ParliamentConfig::default().with_debate_rounds(1);

        let result = use_case
            .execute(RunDeliberationInput::new(context(), config))
            .await
            .unwrap();

        // Three approvals at high credibility clear 60% despite the Risk reject
        assert_eq!(result.outcome, Outcome::Approved);
        assert_eq!(result.deliberations, 1);
        assert!(!result.cancelled);

        let summary = result.summary.unwrap();
        assert!(summary.approve_share > 60.0);

        let events = logger.events.lock().unwrap();
        assert_eq!(events.iter().filter(|e| **e == "debate_entry").count(), 4);
        assert_eq!(events.iter().filter(|e| **e == "vote").count(), 4);
        assert_eq!(events[events.len() - 2], "summary");
        assert_eq!(events[events.len() - 1], "outcome");
    }

    #[tokio::test]
    async fn test_deadlock_re_enters_until_budget() {
        // Quorum above the roster size always deadlocks
        let use_case = use_case(Arc::new(PartyLineReasoner));
        let config = ParliamentConfig::default()
            .with_quorum(10)
            .with_debate_rounds(1)
            .with_max_deliberations(3);

        let result = use_case
            .execute(RunDeliberationInput::new(context(), config))
            .await
            .unwrap();

        assert_eq!(result.outcome, Outcome::Deadlocked);
        assert_eq!(result.deliberations, 3);
        assert_eq!(result.context.previous_debates.len(), 12);
        assert_eq!(result.votes.len(), 4);
    }

    #[tokio::test]
    async fn test_cancelled_before_start() {
        let token = CancellationToken::new();
        token.cancel();
        let use_case = use_case(Arc::new(PartyLineReasoner)).with_cancellation(token);

        let result = use_case
            .execute(RunDeliberationInput::new(context(), ParliamentConfig::default()))
            .await
            .unwrap();

        assert!(result.cancelled);
        assert_eq!(result.outcome, Outcome::Deadlocked);
        assert!(result.votes.is_empty());
        assert!(result.summary.is_none());
        assert!(result.context.previous_debates.is_empty());
    }

    #[tokio::test]
    async fn test_offline_run_completes() {
        let service =
            ParliamentService::offline(AgentRegistry::canonical(), FallbackRng::seeded(1234));
        let use_case = RunDeliberationUseCase::new(Arc::new(service));

        let result = use_case
            .execute(RunDeliberationInput::new(context(), ParliamentConfig::default()))
            .await
            .unwrap();

        assert_eq!(result.context.previous_debates.len(), 8);
        assert_eq!(result.votes.len(), 4);
        assert!(result.summary.is_some());
    }

    #[tokio::test]
    async fn test_empty_registry_is_rejected() {
        let registry = AgentRegistry::new(vec![]).unwrap();
        let service = ParliamentService::offline(registry, FallbackRng::seeded(1));
        let use_case = RunDeliberationUseCase::new(Arc::new(service));

        let result = use_case
            .execute(RunDeliberationInput::new(context(), ParliamentConfig::default()))
            .await;
        assert_eq!(result.unwrap_err(), RunDeliberationError::NoAgents);
    }
}
