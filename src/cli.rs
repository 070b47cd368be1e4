//! Command-line interface for tictactoe.

use crate::games::tictactoe::Position;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal UI
    Play {
        /// Path to the config file
        #[arg(short, long, default_value = "tictactoe.toml")]
        config: PathBuf,

        /// Name for the first player (plays X)
        #[arg(long)]
        player1: Option<String>,

        /// Name for the second player (plays O)
        #[arg(long)]
        player2: Option<String>,
    },

    /// Play a scripted game without a terminal UI
    Replay {
        /// Comma-separated cell indices (0-8), alternating players
        #[arg(short, long, value_delimiter = ',', required = true)]
        moves: Vec<Position>,

        /// Name for the first player (plays X)
        #[arg(long, default_value = "")]
        player1: String,

        /// Name for the second player (plays O)
        #[arg(long, default_value = "")]
        player2: String,

        /// Print the final game state as JSON
        #[arg(long)]
        json: bool,
    },
}
