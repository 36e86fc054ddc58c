//! Console output formatter for deliberation results

use crate::output::formatter::OutputFormatter;
use colored::{ColoredString, Colorize};
use parliament_application::DeliberationResult;
use parliament_domain::quorum::vote_weight;
use parliament_domain::{DebateEntry, MetaSummary, Outcome, Position, Vote, VoteChoice};

/// Formats deliberation results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete deliberation result
    pub fn format(result: &DeliberationResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Agent Parliament"));
        output.push('\n');
        output.push_str(&Self::proposal(result));

        output.push_str(&Self::section_header("Debate"));
        for entry in &result.context.previous_debates {
            output.push_str(&Self::debate_entry(entry));
        }

        output.push_str(&Self::section_header("Votes"));
        output.push('\n');
        if result.votes.is_empty() {
            output.push_str(&format!("{}\n", "No votes were cast".dimmed()));
        }
        for vote in &result.votes {
            output.push_str(&Self::vote_line(vote));
        }

        if let Some(summary) = &result.summary {
            output.push_str(&Self::section_header("Meta Summary"));
            output.push_str(&Self::summary(summary));
        }

        output.push_str(&Self::outcome_line(result));
        output.push_str(&Self::footer());
        output
    }

    /// Format only the meta summary and outcome
    pub fn format_summary(result: &DeliberationResult) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "{} {}\n",
            "Proposal:".cyan().bold(),
            result.context.topic
        ));
        if let Some(summary) = &result.summary {
            output.push_str(&Self::summary(summary));
        }
        output.push_str(&Self::outcome_line(result));
        output
    }

    /// Format as JSON
    pub fn format_json(result: &DeliberationResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!(
            "{}\n{}\n{}\n",
            line.cyan(),
            format!("  {}", title).cyan().bold(),
            line.cyan()
        )
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n", format!("━━━ {} ━━━", title).magenta().bold())
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    fn proposal(result: &DeliberationResult) -> String {
        let context = &result.context;
        let mut output = format!("{} {}\n", "Proposal:".cyan().bold(), context.topic);
        if !context.description.is_empty() {
            output.push_str(&format!("{} {}\n", "Description:".cyan().bold(), context.description));
        }
        output.push_str(&format!("{} {}\n", "Action:".cyan().bold(), context.action_type));
        for (key, value) in &context.proposal_data {
            output.push_str(&format!("  {} = {}\n", key.dimmed(), value));
        }
        output
    }

    fn debate_entry(entry: &DebateEntry) -> String {
        let position = match entry.position {
            Position::For => entry.position.as_str().green(),
            Position::Against => entry.position.as_str().red(),
            Position::Clarification => entry.position.as_str().yellow(),
        };
        let mut output = format!(
            "\n{} [{}]\n{}\n",
            format!("── {} ({}) ──", entry.agent_type.display_name(), entry.agent_id)
                .yellow()
                .bold(),
            position,
            entry.statement
        );
        if let Some(sim) = &entry.simulation_results {
            output.push_str(&format!(
                "  {} {}: {} ({:.0}% confidence)\n",
                "stress test".dimmed(),
                sim.scenario_name,
                sim.outcome,
                sim.confidence
            ));
        }
        output
    }

    fn vote_line(vote: &Vote) -> String {
        format!(
            "  {} {:<10} {:<8} conf {:>5.1}  weight {:.3}  {}\n",
            Self::choice_glyph(vote.choice),
            vote.agent_type.display_name(),
            Self::choice_label(vote.choice),
            vote.confidence,
            vote_weight(vote),
            vote.reasoning.dimmed()
        )
    }

    fn summary(summary: &MetaSummary) -> String {
        let mut output = format!("\n{}\n\n", summary.synthesis_statement);
        output.push_str(&format!(
            "{} {:.1}%  {} {:.1}%  {} {:.1}\n",
            "Approve:".green().bold(),
            summary.approve_share,
            "Reject:".red().bold(),
            summary.reject_share,
            "Confidence:".cyan().bold(),
            summary.weighted_confidence
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Recommendation:".cyan().bold(),
            summary.recommendation
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Risk:".cyan().bold(),
            summary.risk_assessment.overall_risk
        ));
        for factor in &summary.risk_assessment.factors {
            output.push_str(&format!("  - {}\n", factor));
        }

        if summary.has_conflicts() {
            output.push_str(&format!("\n{}\n", "Conflicts:".yellow().bold()));
            for conflict in &summary.conflicts_detected {
                output.push_str(&format!("  ! {}\n", conflict));
            }
        }

        if !summary.suggested_amendments.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggested amendments:".cyan().bold()));
            for amendment in &summary.suggested_amendments {
                output.push_str(&format!("  * {}\n", amendment));
            }
        }
        output
    }

    fn outcome_line(result: &DeliberationResult) -> String {
        let outcome = match result.outcome {
            Outcome::Approved => "APPROVED".green().bold(),
            Outcome::Rejected => "REJECTED".red().bold(),
            Outcome::Deadlocked => "DEADLOCKED".yellow().bold(),
        };
        let mut line = format!(
            "\n{} {} after {} deliberation(s)",
            "Outcome:".cyan().bold(),
            outcome,
            result.deliberations
        );
        if result.cancelled {
            line.push_str(&format!(" {}", "(cancelled)".red()));
        }
        line.push('\n');
        line
    }

    fn choice_glyph(choice: VoteChoice) -> ColoredString {
        let glyph = choice.glyph().to_string();
        match choice {
            VoteChoice::Approve => glyph.green(),
            VoteChoice::Reject => glyph.red(),
            VoteChoice::Abstain => glyph.dimmed(),
        }
    }

    fn choice_label(choice: VoteChoice) -> ColoredString {
        match choice {
            VoteChoice::Approve => choice.as_str().green(),
            VoteChoice::Reject => choice.as_str().red(),
            VoteChoice::Abstain => choice.as_str().dimmed(),
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, result: &DeliberationResult) -> String {
        Self::format(result)
    }

    fn format_json(&self, result: &DeliberationResult) -> String {
        Self::format_json(result)
    }

    fn format_summary_only(&self, result: &DeliberationResult) -> String {
        Self::format_summary(result)
    }
}
