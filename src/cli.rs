//! Command-line interface for strictly_rewind.

use clap::{Parser, Subcommand};

/// Strictly Rewind - tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "strictly_rewind")]
#[command(about = "Tic-tac-toe with move history and time travel", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Path to the TOML config file
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },

    /// Replay a move script and print the result
    Replay {
        /// Moves as 1-9 keys or position labels (e.g. 5 or center)
        #[arg(required = true)]
        moves: Vec<String>,

        /// History step to show after the moves
        #[arg(short, long)]
        jump: Option<usize>,

        /// Print the game as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Path to the TOML config file (for the log filter)
        #[arg(short, long)]
        config: Option<std::path::PathBuf>,
    },
}
