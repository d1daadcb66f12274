//! Command-line interface for the tictactoe binary.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML game config (board size, markers, default names)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a game on this terminal, reading moves from stdin
    Play {
        /// Name of the first player (plays X)
        #[arg(long, default_value = "")]
        first: String,

        /// Name of the second player (plays O)
        #[arg(long, default_value = "")]
        second: String,

        /// Seed for choosing the starting player
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Let both players pick random cells until the game ends
    Auto {
        /// Number of games to play
        #[arg(short, long, default_value = "1")]
        games: usize,

        /// Seed for the starting player and the random moves
        #[arg(long)]
        seed: Option<u64>,

        /// Print view events as JSON lines instead of rendering the board
        #[arg(long)]
        json: bool,
    },
}
