//! Strictly Rewind - unified CLI

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use strictly_rewind::{init_stderr_logging, render_text, replay, run_tui, ReplayReport, TuiConfig};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config } => run_play(config),
        Command::Replay {
            moves,
            jump,
            json,
            config,
        } => run_replay(moves, jump, json, config),
    }
}

/// Run the interactive terminal game.
fn run_play(config: Option<std::path::PathBuf>) -> Result<()> {
    let config = TuiConfig::load(config.as_deref()).context("Failed to load TUI config")?;
    run_tui(&config)
}

/// Replay moves and print the shown board.
fn run_replay(
    moves: Vec<String>,
    jump: Option<usize>,
    json: bool,
    config: Option<std::path::PathBuf>,
) -> Result<()> {
    let config = TuiConfig::load(config.as_deref()).context("Failed to load config")?;
    init_stderr_logging(config.log_filter());

    let session = replay(&moves, jump).context("Replay failed")?;
    info!(len = session.game().len(), step = session.game().step(), "Replay complete");

    if json {
        let report = serde_json::to_string_pretty(&ReplayReport::new(&session))
            .context("Failed to serialize game")?;
        println!("{}", report);
    } else {
        print!("{}", render_text(&session));
    }
    Ok(())
}
