//! End-to-end scenarios over the public application API.

use parliament_application::{
    FallbackRng, ParliamentConfig, ParliamentService, RunDeliberationInput, RunDeliberationUseCase,
};
use parliament_domain::{
    ActionType, AgentRegistry, AgentType, DebateContext, Outcome, QuorumRule, Recommendation, Vote,
    VoteChoice, WeightedTally,
};
use std::sync::Arc;

fn scenario_votes(registry: &AgentRegistry) -> Vec<Vote> {
    let ballot = |agent_type: AgentType, choice: VoteChoice, confidence: f64| {
        Vote::new(
            registry.profile(agent_type).unwrap(),
            choice,
            confidence,
            format!("{} ballot", agent_type),
        )
    };
    vec![
        ballot(AgentType::Scout, VoteChoice::Approve, 85.0),
        ballot(AgentType::Risk, VoteChoice::Reject, 75.0),
        ballot(AgentType::Execution, VoteChoice::Approve, 70.0),
        ballot(AgentType::Meta, VoteChoice::Abstain, 60.0),
    ]
}

#[test]
fn test_four_agent_scenario() {
    let registry = AgentRegistry::canonical();
    let service = ParliamentService::offline(registry.clone(), FallbackRng::seeded(1));
    let votes = scenario_votes(&registry);

    // Scout .644725 + Execution .6358 approve, Risk .693 reject, Meta .6624 abstain
    let tally = WeightedTally::from_votes(&votes).unwrap();
    assert!((tally.total_weight - 2.635925).abs() < 1e-9);
    assert!((tally.approve_share() - 48.579).abs() < 0.01);
    assert!((tally.reject_share() - 26.291).abs() < 0.01);

    let summary = service.synthesize_meta_summary(&votes, &[]).unwrap();
    assert!(
        summary
            .conflicts_detected
            .iter()
            .any(|c| c.starts_with("Risk-Scout conflict"))
    );
    assert_eq!(summary.recommendation, Recommendation::NeedsReview);
    assert!((summary.weighted_confidence - 72.47).abs() < 0.01);

    // Neither share clears 60
    let outcome = service
        .determine_outcome(&votes, &QuorumRule::new(3, 60.0), Some(&summary))
        .unwrap();
    assert_eq!(outcome, Outcome::Deadlocked);
}

#[test]
fn test_conflict_threshold_is_strict() {
    let registry = AgentRegistry::canonical();
    let scout = registry.profile(AgentType::Scout).unwrap();
    let risk = registry.profile(AgentType::Risk).unwrap();

    let firing = vec![
        Vote::new(risk, VoteChoice::Reject, 75.0, "no"),
        Vote::new(scout, VoteChoice::Approve, 80.0, "yes"),
    ];
    let quiet = vec![
        Vote::new(risk, VoteChoice::Reject, 65.0, "no"),
        Vote::new(scout, VoteChoice::Approve, 80.0, "yes"),
    ];

    let has_conflict = |votes: &[Vote]| {
        parliament_domain::synthesize_meta_summary(votes, &[])
            .unwrap()
            .conflicts_detected
            .iter()
            .any(|c| c.starts_with("Risk-Scout conflict"))
    };
    assert!(has_conflict(&firing));
    assert!(!has_conflict(&quiet));
}

#[tokio::test]
async fn test_seeded_offline_deliberation_is_reproducible() {
    let run = |seed: u64| async move {
        let service = ParliamentService::offline(AgentRegistry::canonical(), FallbackRng::seeded(seed));
        let context = DebateContext::new(
            "provide liquidity to the ETH/USDC pool",
            "Deploy idle stablecoins",
            ActionType::ProvideLiquidity,
        )
        .with_proposal_data("amount", 250_000);

        RunDeliberationUseCase::new(Arc::new(service))
            .execute(RunDeliberationInput::new(context, ParliamentConfig::default()))
            .await
            .unwrap()
    };

    let first = run(77).await;
    let second = run(77).await;

    let statements = |r: &parliament_application::DeliberationResult| {
        r.context
            .previous_debates
            .iter()
            .map(|e| e.statement.clone())
            .collect::<Vec<_>>()
    };
    assert_eq!(statements(&first), statements(&second));
    assert_eq!(first.outcome, second.outcome);
    assert_eq!(
        first.votes.iter().map(|v| v.choice).collect::<Vec<_>>(),
        second.votes.iter().map(|v| v.choice).collect::<Vec<_>>()
    );

    let summary = first.summary.unwrap();
    assert!(summary.suggested_amendments.len() <= 5);
    assert!((0.0..=100.0).contains(&summary.weighted_confidence));
}
