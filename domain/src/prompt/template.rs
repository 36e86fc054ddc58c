//! Prompt templates for the parliament flow

use crate::agent::{AgentProfile, AgentType};
use crate::deliberation::DebateContext;
use crate::quorum::vote_summary;
use serde_json::json;

/// Templates for the reasoner requests made by each agent
pub struct ParliamentPrompt;

impl ParliamentPrompt {
    /// System instruction for an agent
    pub fn system_instruction(profile: &AgentProfile) -> String {
        let role = match profile.agent_type {
            AgentType::Scout => {
                "You are the Scout of a treasury governance parliament. You look for opportunity: \
yield, momentum and timing. You argue for actions whose upside is real and warn when a window is closing."
            }
            AgentType::Risk => {
                "You are the Risk officer of a treasury governance parliament. You look for downside: \
volatility, liquidation, contract and correlation risk. Caution is your default stance."
            }
            AgentType::Execution => {
                "You are the Execution specialist of a treasury governance parliament. You judge whether \
an action can be carried out cleanly: liquidity depth, gas cost, slippage and routing."
            }
            AgentType::Meta => {
                "You are the Meta reviewer of a treasury governance parliament. You weigh the other \
agents' arguments, point out unresolved disagreements and judge which case is better supported."
            }
        };

        let mut instruction = format!("{}\nYour name is {}.", role, profile.name);
        if !profile.specialization.is_empty() {
            instruction.push_str(&format!(
                "\nYour specialization: {}.",
                profile.specialization.join(", ")
            ));
        }
        instruction.push_str("\nBe concise. Answer in at most three sentences.");
        instruction
    }

    /// Proposal and trailing debate history as pretty-printed JSON
    pub fn structured_context(context: &DebateContext, history_window: usize) -> String {
        let debates: Vec<_> = context
            .recent_debates(history_window)
            .iter()
            .map(|entry| {
                json!({
                    "agent": entry.agent_id,
                    "type": entry.agent_type.as_str(),
                    "position": entry.position.as_str(),
                    "statement": entry.statement,
                })
            })
            .collect();

        let value = json!({
            "topic": context.topic,
            "description": context.description,
            "action_type": context.action_type.as_str(),
            "proposal_data": context.proposal_data,
            "recent_debates": debates,
        });
        format!("{:#}", value)
    }

    /// User prompt for a debate statement
    pub fn debate_prompt(profile: &AgentProfile, context: &DebateContext) -> String {
        format!(
            r#"The parliament is debating the proposal "{}".

As the {} agent, state your position on it. Say clearly whether you support it, oppose it, or need clarification, and why.
Respond to points made earlier in the debate where relevant."#,
            context.topic,
            profile.agent_type.display_name()
        )
    }

    /// User prompt for a vote
    pub fn vote_prompt(profile: &AgentProfile, context: &DebateContext) -> String {
        let mut prompt = format!(
            r#"The debate on "{}" is over. As the {} agent, cast your vote."#,
            context.topic,
            profile.agent_type.display_name()
        );

        if !context.other_agent_votes.is_empty() {
            prompt.push_str(&format!(
                "\nVotes cast so far: {}",
                vote_summary(&context.other_agent_votes)
            ));
        }

        prompt.push_str(
            r#"

Reply with a JSON object only:
{"vote": "approve" | "reject" | "abstain", "confidence": 0-100, "reasoning": "...", "pros": ["..."], "cons": ["..."]}

If you cannot produce JSON, use this format instead:
VOTE: [APPROVE/REJECT/ABSTAIN]
CONFIDENCE: [0-100]
REASONING: [one or two sentences]
PROS: [item; item]
CONS: [item; item]"#,
        );

        prompt
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::{AgentRegistry, Position};
    use crate::deliberation::{ActionType, DebateEntry};

    fn context() -> DebateContext {
        let mut context = DebateContext::new("stake 500 ETH", "Earn validator yield", ActionType::Stake)
            .with_proposal_data("amount", 500);
        for i in 0..8 {
            context.push_debate(DebateEntry::new(
                format!("agent-{}", i),
                AgentType::Scout,
                Position::For,
                format!("statement {}", i),
                vec![],
            ));
        }
        context
    }

    #[test]
    fn test_system_instruction_per_agent() {
        let registry = AgentRegistry::canonical();
        let risk = registry.profile(AgentType::Risk).unwrap();
        let instruction = ParliamentPrompt::system_instruction(risk);
        assert!(instruction.contains("Risk officer"));
        assert!(instruction.contains(&risk.name));
    }

    #[test]
    fn test_structured_context_uses_history_window() {
        let rendered = ParliamentPrompt::structured_context(&context(), 3);
        assert!(rendered.contains("stake 500 ETH"));
        assert!(rendered.contains("\"amount\": 500"));
        assert!(rendered.contains("statement 7"));
        assert!(rendered.contains("statement 5"));
        assert!(!rendered.contains("statement 4"));
    }

    #[test]
    fn test_vote_prompt_format() {
        let registry = AgentRegistry::canonical();
        let scout = registry.profile(AgentType::Scout).unwrap();
        let prompt = ParliamentPrompt::vote_prompt(scout, &context());
        assert!(prompt.contains("\"vote\""));
        assert!(prompt.contains("CONFIDENCE:"));
        assert!(!prompt.contains("Votes cast so far"));
    }

    #[test]
    fn test_debate_prompt_mentions_topic() {
        let registry = AgentRegistry::canonical();
        let meta = registry.profile(AgentType::Meta).unwrap();
        let prompt = ParliamentPrompt::debate_prompt(meta, &context());
        assert!(prompt.contains("stake 500 ETH"));
    }
}
