//! Tic-tac-toe - terminal game and self-play runner.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_tui::{Cli, Command, PlayArgs, selfplay, tui};
use tracing::info;
use tracing_subscriber::EnvFilter;

const LOG_FILE: &str = "tictactoe.log";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (RUST_LOG and friends)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Play(PlayArgs::default())) {
        Command::Play(args) => run_play(args).await,
        Command::Selfplay { games, seed } => run_selfplay(games, seed),
    }
}

/// Interactive game; logs go to a file so they don't tear the screen.
async fn run_play(args: PlayArgs) -> Result<()> {
    let log_file = std::fs::File::create(LOG_FILE)
        .with_context(|| format!("Failed to create log file {LOG_FILE}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    let settings = args.settings()?;
    info!(?settings, "Settings resolved");
    tui::run(settings).await
}

fn run_selfplay(games: u32, seed: Option<u64>) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .init();

    let tally = selfplay::run(games, seed)?;
    println!("{tally}");
    Ok(())
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}
