//! Noughts - terminal tic-tac-toe.

#![warn(missing_docs)]

mod cli;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use noughts::{GameSession, Settings, Suggestion, terminal};
use noughts_tictactoe::{Board, Player, Strategy};
use std::path::PathBuf;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Command::Play {
            hard,
            human_plays,
            config,
        } => run_play(hard, human_plays.map(Into::into), config),
        Command::Suggest { board, easy, json } => run_suggest(board, easy, json),
    }
}

/// Logs to stderr so game output on stdout stays clean.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

/// Run the interactive terminal game
#[instrument]
fn run_play(
    hard: bool,
    human_plays: Option<Player>,
    config: Option<PathBuf>,
) -> Result<()> {
    let settings = Settings::load(config.as_deref())?.with_overrides(hard, human_plays);
    info!(?settings, "Starting game");

    let mut session = GameSession::new(&settings)?;
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    terminal::run(&mut session, stdin.lock(), &mut stdout)
}

/// Print the computer's choice for a board snapshot
#[instrument(skip(board), fields(board = %board))]
fn run_suggest(board: Board, easy: bool, json: bool) -> Result<()> {
    let strategy = if easy { Strategy::Easy } else { Strategy::Hard };
    let suggestion = Suggestion::for_board(&board, strategy)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&suggestion)?);
    } else {
        println!("{suggestion}");
    }
    Ok(())
}
