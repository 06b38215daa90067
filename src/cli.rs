//! Command-line interface for tictactoe_match.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-Tac-Toe - best-of-N matches in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe_match")]
#[command(about = "Two-player tic-tac-toe, first to N round wins", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (falls back to $TICTACTOE_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Round wins needed to take the match (overrides the config file)
    #[arg(long, global = true)]
    pub winning_score: Option<u32>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Name of player A (asked at the menu when omitted)
        #[arg(short, long)]
        name: Option<String>,

        /// Skip the pauses between messages
        #[arg(long)]
        no_pace: bool,

        /// Disable coloured output
        #[arg(long)]
        no_color: bool,
    },

    /// Play a scripted list of moves and print every event as a JSON line
    Replay {
        /// Name of player A
        #[arg(short, long)]
        name: String,

        /// Board indices (0-8), comma separated, in play order
        #[arg(short, long, value_delimiter = ',', num_args = 1..)]
        moves: Vec<usize>,
    },
}
