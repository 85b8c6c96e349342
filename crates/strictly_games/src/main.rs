//! Strictly Games - Unified CLI

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;
use strictly_games::cli::{Cli, Command};
use strictly_games::{AppConfig, suggest, tui};
use strictly_tictactoe::Board;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command.unwrap_or_default() {
        Command::Play { config } => run_play(&config),
        Command::Suggest { board } => run_suggest(&board),
    }
}

/// Run the terminal UI
fn run_play(config_path: &Path) -> Result<()> {
    let config = AppConfig::load_or_default(config_path)
        .with_context(|| format!("Failed to load {}", config_path.display()))?;
    tui::run_tui(&config)
}

/// Print the computer's move for a board given on the command line
fn run_suggest(board: &str) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let board: Board = board
        .parse()
        .with_context(|| format!("Invalid board {board:?}"))?;
    info!(%board, "Suggesting move");
    println!("{}", suggest::describe(&board));
    Ok(())
}
