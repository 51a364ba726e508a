//! Command-line interface for noughts.

use clap::{Parser, Subcommand, ValueEnum};
use noughts_tictactoe::{Board, Player};
use std::path::PathBuf;

/// Noughts - tic-tac-toe against a computer with an optional hard mode
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe against the computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log decisions at debug level (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play {
        /// Start with hard mode enabled
        #[arg(long)]
        hard: bool,

        /// Marker for the human; crosses move first
        #[arg(long, value_enum)]
        human_plays: Option<Marker>,

        /// Settings file (defaults to noughts.toml if present)
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Print the move the computer would make on a board
    Suggest {
        /// Nine cells of X, O and . in row-major order, e.g. "XX..O...."
        #[arg(long)]
        board: Board,

        /// Use the easy strategy instead of hard mode
        #[arg(long)]
        easy: bool,

        /// Print the full evaluation as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Marker choice on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Marker {
    /// Crosses (X)
    Cross,
    /// Noughts (O)
    Nought,
}

impl From<Marker> for Player {
    fn from(marker: Marker) -> Self {
        match marker {
            Marker::Cross => Player::Cross,
            Marker::Nought => Player::Nought,
        }
    }
}
