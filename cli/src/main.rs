//! CLI entrypoint for Agent Parliament
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, anyhow, bail};
use clap::Parser;
use parliament_application::{
    FallbackRng, NullReasoner, ParliamentService, Reasoner, RunDeliberationInput,
    RunDeliberationUseCase,
};
use parliament_infrastructure::{
    ConfigLoader, FileConfig, JsonlDeliberationLogger, build_reasoner,
};
use parliament_presentation::{
    Cli, ConsoleFormatter, OutputFormat, ProgressReporter, SimpleProgress, build_context,
};
use std::io::IsTerminal;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    // stderr keeps stdout clean for --output json
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    info!("Starting Agent Parliament");

    // === Configuration ===
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))?
    };
    apply_overrides(&mut config, &cli);

    let issues = config.validate();
    if !issues.is_empty() {
        for issue in &issues {
            error!("{}", issue);
        }
        bail!("Invalid configuration ({} issue(s))", issues.len());
    }

    let parliament_config = config.parliament.to_parliament_config();
    let registry = config.to_registry()?;
    let context = build_context(&cli)?;

    // === Dependency Injection ===
    let reasoner: Arc<dyn Reasoner> = if cli.no_reasoner {
        Arc::new(NullReasoner)
    } else {
        build_reasoner(&config.reasoner)
    };

    let service = ParliamentService::new(
        registry,
        reasoner,
        FallbackRng::from_seed(parliament_config.seed),
    )
    .with_history_window(parliament_config.history_window);

    let cancellation = CancellationToken::new();
    let mut use_case =
        RunDeliberationUseCase::new(Arc::new(service)).with_cancellation(cancellation.clone());

    let log_path = cli
        .log_file
        .clone()
        .or_else(|| config.log.deliberation_log.as_ref().map(Into::into));
    if let Some(path) = log_path {
        match JsonlDeliberationLogger::new(&path) {
            Some(logger) => {
                info!("Deliberation log: {}", logger.path().display());
                use_case = use_case.with_logger(Arc::new(logger));
            }
            None => warn!("Continuing without deliberation log"),
        }
    }

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted; finishing the current phase");
            cancellation.cancel();
        }
    });

    let input = RunDeliberationInput::new(context, parliament_config);

    // Execute with or without progress reporting
    let result = if cli.quiet {
        use_case.execute(input).await?
    } else if std::io::stderr().is_terminal() {
        let progress = ProgressReporter::new();
        use_case.execute_with_progress(input, &progress).await?
    } else {
        use_case.execute_with_progress(input, &SimpleProgress).await?
    };

    info!(
        "Deliberation finished: {} after {} pass(es)",
        result.outcome, result.deliberations
    );

    // Output results
    let output = match cli.output {
        OutputFormat::Full => ConsoleFormatter::format(&result),
        OutputFormat::Summary => ConsoleFormatter::format_summary(&result),
        OutputFormat::Json => ConsoleFormatter::format_json(&result),
    };

    println!("{}", output);

    Ok(())
}

/// Command-line values take priority over every config layer
fn apply_overrides(config: &mut FileConfig, cli: &Cli) {
    let parliament = &mut config.parliament;
    if let Some(rounds) = cli.rounds {
        parliament.debate_rounds = rounds;
    }
    if let Some(quorum) = cli.quorum {
        parliament.quorum = quorum;
    }
    if let Some(majority) = cli.majority {
        parliament.required_majority = majority;
    }
    if cli.seed.is_some() {
        parliament.seed = cli.seed;
    }
}
