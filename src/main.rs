//! Tic-Tac-Toe match - command-line entry point.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::path::PathBuf;
use tictactoe_match::presenter::{Session, TerminalPresenter};
use tictactoe_match::{AppConfig, CONFIG_ENV_VAR, MatchEngine, PacingConfig};
use tokio::io::AsyncWriteExt;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config, cli.winning_score)?;

    match cli.command {
        Command::Play {
            name,
            no_pace,
            no_color,
        } => run_play(config, name, no_pace, no_color).await,
        Command::Replay { name, moves } => run_replay(config, name, moves).await,
    }
}

/// Resolves the config file and applies command-line overrides.
#[instrument]
fn load_config(path: Option<PathBuf>, winning_score: Option<u32>) -> Result<AppConfig> {
    let path = path.or_else(|| std::env::var_os(CONFIG_ENV_VAR).map(PathBuf::from));
    let config = match path {
        Some(path) => AppConfig::from_file(&path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => AppConfig::default(),
    };

    let Some(winning_score) = winning_score else {
        return Ok(config);
    };
    let rules = config.rules().clone().with_winning_score(winning_score);
    let config = config.with_rules(rules);
    config.validate().context("Invalid --winning-score")?;
    Ok(config)
}

/// Runs the interactive terminal session.
#[instrument(skip(config))]
async fn run_play(
    config: AppConfig,
    name: Option<String>,
    no_pace: bool,
    no_color: bool,
) -> Result<()> {
    let config = if no_pace {
        config.with_pacing(PacingConfig::instant())
    } else {
        config
    };
    let stdout = tokio::io::stdout();
    let terminal = if no_color {
        TerminalPresenter::plain(stdout)
    } else {
        TerminalPresenter::new(stdout)
    };

    info!("Starting interactive session");
    let report = Session::new(&config, tokio::io::stdin(), terminal)
        .run(name)
        .await?;
    info!(matches = report.winners.len(), "Goodbye");
    Ok(())
}

/// Plays scripted moves and prints each event as JSON.
#[instrument(skip(config))]
async fn run_replay(config: AppConfig, name: String, moves: Vec<usize>) -> Result<()> {
    let mut engine = MatchEngine::with_settings(config.rules().clone());
    let mut stdout = tokio::io::stdout();

    let mut events = engine.start_match(&name).context("Failed to start match")?;
    for (turn, index) in moves.into_iter().enumerate() {
        for event in events.drain(..) {
            let line = serde_json::to_string(&event)?;
            stdout.write_all(format!("{}\n", line).as_bytes()).await?;
        }
        events = engine
            .play(index)
            .with_context(|| format!("Move #{} (index {}) rejected", turn + 1, index))?;
    }
    for event in events {
        let line = serde_json::to_string(&event)?;
        stdout.write_all(format!("{}\n", line).as_bytes()).await?;
    }
    stdout.flush().await?;
    Ok(())
}
