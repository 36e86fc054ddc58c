//! Progress reporting for deliberations

use colored::Colorize;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use parliament_application::DeliberationProgress;
use parliament_domain::{DebateEntry, MetaSummary, Outcome, Vote, VoteChoice};
use std::sync::Mutex;

/// Reports progress with one bar per debate round and voting phase
pub struct ProgressReporter {
    multi: MultiProgress,
    phase_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::new(),
            phase_bar: Mutex::new(None),
        }
    }

    fn phase_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn start_phase(&self, prefix: String, len: usize) {
        let pb = self.multi.add(ProgressBar::new(len as u64));
        pb.set_style(Self::phase_style());
        pb.set_prefix(prefix);
        pb.set_message("Starting...");

        if let Ok(mut slot) = self.phase_bar.lock() {
            *slot = Some(pb);
        }
    }

    fn advance(&self, message: String) {
        if let Ok(slot) = self.phase_bar.lock()
            && let Some(pb) = slot.as_ref()
        {
            pb.set_message(message);
            pb.inc(1);
        }
    }

    fn finish_phase(&self, message: String) {
        if let Ok(mut slot) = self.phase_bar.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_with_message(message);
        }
    }

    fn vote_status(vote: &Vote) -> String {
        let glyph = vote.choice.glyph().to_string();
        let glyph = match vote.choice {
            VoteChoice::Approve => glyph.green(),
            VoteChoice::Reject => glyph.red(),
            VoteChoice::Abstain => glyph.dimmed(),
        };
        format!("{} {} {}", glyph, vote.agent_type.display_name(), vote.choice)
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl DeliberationProgress for ProgressReporter {
    fn on_round_start(&self, round: usize, total_rounds: usize, agents: usize) {
        self.start_phase(format!("Debate {}/{}", round, total_rounds), agents);
    }

    fn on_debate_entry(&self, entry: &DebateEntry) {
        self.advance(format!(
            "{} {} ({})",
            "v".green(),
            entry.agent_type.display_name(),
            entry.position
        ));
    }

    fn on_round_complete(&self, round: usize) {
        self.finish_phase(format!("{} complete!", format!("Round {}", round).green()));
    }

    fn on_voting_start(&self, agents: usize) {
        self.start_phase("Voting".to_string(), agents);
    }

    fn on_vote(&self, vote: &Vote) {
        self.advance(Self::vote_status(vote));
    }

    fn on_resolved(&self, summary: &MetaSummary, outcome: Outcome, deliberation: usize) {
        self.finish_phase(format!(
            "{} {} (approve {:.1}%, reject {:.1}%) pass {}",
            "Resolved:".green(),
            outcome,
            summary.approve_share,
            summary.reject_share,
            deliberation
        ));
    }
}

/// Simple text-based progress (no fancy UI), written to stderr
pub struct SimpleProgress;

impl DeliberationProgress for SimpleProgress {
    fn on_round_start(&self, round: usize, total_rounds: usize, agents: usize) {
        eprintln!(
            "{} {} ({} agents)",
            "->".cyan(),
            format!("Debate round {}/{}", round, total_rounds).bold(),
            agents
        );
    }

    fn on_debate_entry(&self, entry: &DebateEntry) {
        eprintln!(
            "  {} {} ({})",
            "v".green(),
            entry.agent_type.display_name(),
            entry.position
        );
    }

    fn on_round_complete(&self, _round: usize) {
        eprintln!();
    }

    fn on_voting_start(&self, agents: usize) {
        eprintln!("{} {} ({} agents)", "->".cyan(), "Voting".bold(), agents);
    }

    fn on_vote(&self, vote: &Vote) {
        eprintln!("  {}", ProgressReporter::vote_status(vote));
    }

    fn on_resolved(&self, _summary: &MetaSummary, outcome: Outcome, deliberation: usize) {
        eprintln!("{} {} (pass {})\n", "->".cyan(), outcome.to_string().bold(), deliberation);
    }
}
