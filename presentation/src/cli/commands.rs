//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for deliberation results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Debate transcript, votes, summary and outcome
    Full,
    /// Only the meta summary and outcome
    Summary,
    /// JSON output
    Json,
}

/// CLI arguments for agent-parliament
#[derive(Parser, Debug)]
#[command(name = "agent-parliament")]
#[command(author, version, about = "Agent Parliament - Specialist agents debate and vote on a proposal")]
#[command(long_about = r#"
Agent Parliament runs a panel of specialist agents (Scout, Risk, Execution,
Meta) over a governance proposal and reaches a weighted decision.

The process has three phases:
1. Debate: every agent states a position, for one or more rounds
2. Vote: every agent votes approve / reject / abstain with a confidence
3. Resolution: votes are weighted by credibility and confidence, then the
   quorum and majority thresholds decide approved / rejected / deadlocked

Without a reasoner (the default) all statements and votes come from
deterministic templates; pass --seed for reproducible runs.

Configuration files are loaded from (in priority order):
1. --config <path>        Explicit config file
2. ./parliament.toml      Project-level config
3. ~/.config/agent-parliament/config.toml   Global config
4. PARLIAMENT_* environment variables

Example:
  agent-parliament "Swap 10 ETH for USDC" --action swap --data amount=10
  agent-parliament --proposal proposal.toml --rounds 3 --seed 42
  agent-parliament "Stake 500 ETH" --output json
"#)]
pub struct Cli {
    /// Proposal topic (optional with --proposal)
    pub topic: Option<String>,

    /// Longer description of the proposal
    #[arg(short, long)]
    pub description: Option<String>,

    /// Action category (swap, provide_liquidity, stake, transfer, rebalance, parameter_change)
    #[arg(short, long, value_name = "TYPE")]
    pub action: Option<String>,

    /// Proposal parameter as key=value (can be specified multiple times)
    #[arg(long = "data", value_name = "KEY=VALUE")]
    pub data: Vec<String>,

    /// Load the proposal from a JSON or TOML file
    #[arg(short, long, value_name = "PATH")]
    pub proposal: Option<PathBuf>,

    /// Debate rounds before voting
    #[arg(short, long)]
    pub rounds: Option<usize>,

    /// Minimum votes for a decision
    #[arg(long)]
    pub quorum: Option<usize>,

    /// Weighted share (percent) needed to decide
    #[arg(long)]
    pub majority: Option<f64>,

    /// Seed for reproducible fallback generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Never call the reasoner; use templates only
    #[arg(long)]
    pub no_reasoner: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "full")]
    pub output: OutputFormat,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Append deliberation events to this JSONL file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
