//! Console chess
//!
//! Play against the greedy capture policy, pass-and-play, or watch it play itself.

use std::io;
use std::process::ExitCode;

use chess_console::{Cli, ConsoleConfig, ConsoleError, Session, SessionEnd};
use clap::Parser;
use greedy_engine::GreedyEvaluator;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = init_logging(cli.log_level.as_deref()) {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr; stdout belongs to the board.
fn init_logging(level: Option<&str>) -> Result<(), ConsoleError> {
    let filter = match level {
        Some(level) => EnvFilter::try_new(level)?,
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
    Ok(())
}

fn run(cli: &Cli) -> Result<(), ConsoleError> {
    let mut config = match &cli.config {
        Some(path) => ConsoleConfig::load(path)?,
        None => ConsoleConfig::default(),
    };
    cli.apply_to(&mut config);
    info!(?config, "configuration");

    let policy = match config.seed {
        Some(seed) => GreedyEvaluator::with_seed(seed),
        None => GreedyEvaluator::new(),
    };
    let mut session = Session::new(config.clone(), Box::new(policy));

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let end = session.run(stdin.lock(), &mut stdout)?;
    if !matches!(end, SessionEnd::GameOver(_)) {
        println!("{}", end.describe());
    }

    if let Some(path) = &config.record {
        session.record(end).save(path)?;
        info!(path = %path.display(), "game record written");
    }
    Ok(())
}
