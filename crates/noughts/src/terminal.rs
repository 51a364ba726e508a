//! Line-oriented terminal front end.

use crate::render;
use crate::session::{GameSession, SessionError};
use anyhow::Result;
use noughts_tictactoe::{MoveError, Position};
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{info, instrument, warn};

const HELP: &str = "\
Commands:
  1-9, a-i, or a label   place your mark (e.g. `5`, `e`, `center`)
  hard                   toggle hard mode (shown in the settings panel)
  settings               show or hide the settings panel
  new                    start a new game
  help                   show this message
  quit                   leave";

/// A line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the human's mark.
    Move(Position),
    /// Toggle hard mode.
    ToggleHard,
    /// Show or hide the settings panel.
    ToggleSettings,
    /// Start over.
    New,
    /// Print the command list.
    Help,
    /// Leave the game.
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hard" => Ok(Self::ToggleHard),
            "settings" => Ok(Self::ToggleSettings),
            "new" | "restart" => Ok(Self::New),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            other => Position::from_label_or_number(other)
                .map(Self::Move)
                .ok_or_else(|| {
                    format!(
                        "Unrecognised input {:?}. Type `help` for commands.",
                        s.trim()
                    )
                }),
        }
    }
}

/// Runs the game until `quit` or end of input.
#[instrument(skip_all)]
pub fn run<R: BufRead, W: Write>(
    session: &mut GameSession,
    input: R,
    output: &mut W,
) -> Result<()> {
    info!("Terminal session started");
    writeln!(output, "You play {}. Type `help` for commands.", session.human())?;
    if let Some(pos) = session.game().history().first().copied() {
        writeln!(output, "Computer opens at {pos}.")?;
    }
    draw(session, output)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(hint) => {
                warn!(input = %line, "Rejected input");
                writeln!(output, "{hint}")?;
                continue;
            }
        };

        match command {
            Command::Move(pos) => play(session, pos, output)?,
            Command::ToggleHard => {
                let enabled = session.toggle_hard_mode();
                let state = if enabled { "on" } else { "off" };
                writeln!(output, "Hard mode {state}.")?;
                panel(session, output)?;
            }
            Command::ToggleSettings => {
                if session.toggle_settings_panel() {
                    panel(session, output)?;
                } else {
                    writeln!(output, "Settings hidden.")?;
                }
            }
            Command::New => {
                if let Some(pos) = session.restart()? {
                    writeln!(output, "Computer opens at {pos}.")?;
                }
                draw(session, output)?;
            }
            Command::Help => writeln!(output, "{HELP}")?,
            Command::Quit => break,
        }
    }

    info!("Terminal session finished");
    writeln!(output, "Goodbye.")?;
    Ok(())
}

fn play<W: Write>(session: &mut GameSession, pos: Position, output: &mut W) -> Result<()> {
    match session.play_human(pos) {
        Ok(turn) => {
            if let Some(reply) = turn.computer {
                writeln!(output, "Computer plays {reply}.")?;
            }
            draw(session, output)?;
            if turn.status.is_over() {
                writeln!(output, "Type `new` to play again.")?;
            }
            Ok(())
        }
        Err(SessionError::Move(err @ (MoveError::SquareOccupied(_) | MoveError::GameOver))) => {
            warn!(%err, "Move rejected");
            writeln!(output, "{err}.")?;
            Ok(())
        }
        Err(err) => Err(err.into()),
    }
}

fn draw<W: Write>(session: &GameSession, output: &mut W) -> Result<()> {
    writeln!(output, "{}", render::board(session.game().board()))?;
    panel(session, output)?;
    writeln!(output, "{}", render::status(session.game().status(), session.human()))?;
    Ok(())
}

fn panel<W: Write>(session: &GameSession, output: &mut W) -> Result<()> {
    if let Some(panel) = render::settings_panel(session.mode()) {
        writeln!(output, "{panel}")?;
    }
    Ok(())
}
