//! A single game between the human and the computer.

use crate::config::Settings;
use derive_more::{Display, Error, From};
use noughts_tictactoe::{
    Game, GameStatus, HardModeState, MoveError, Player, Position, SelectError, Strategy,
};
use tracing::{debug, info, instrument};

/// Error raised while driving a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum SessionError {
    /// The human's move was rejected.
    #[display("{}", _0)]
    Move(MoveError),

    /// The computer could not find a move.
    #[display("{}", _0)]
    Select(SelectError),
}

/// Outcome of one human move plus the computer's reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    /// Where the human played.
    pub human: Position,
    /// Where the computer answered, if the game was still going.
    pub computer: Option<Position>,
    /// Status after both moves.
    pub status: GameStatus,
}

/// Game session: owns the board, the hard-mode flags and the seating.
///
/// The session is the only writer of the board. The computer's strategy is
/// read from the hard-mode flag at every reply, so toggling mid-game takes
/// effect on the next move.
#[derive(Debug, Clone)]
pub struct GameSession {
    game: Game,
    mode: HardModeState,
    human: Player,
}

impl GameSession {
    /// Starts a session; the computer opens if the human plays noughts.
    #[instrument]
    pub fn new(settings: &Settings) -> Result<Self, SessionError> {
        let mut mode = HardModeState::new();
        if *settings.hard_mode() {
            mode.toggle_enabled();
        }
        if *settings.show_settings() {
            mode.toggle_visibility();
        }

        let mut session = Self {
            game: Game::new(),
            mode,
            human: *settings.human_plays(),
        };
        info!(human = %session.human, hard_mode = mode.is_enabled(), "Session started");
        session.open()?;
        Ok(session)
    }

    /// The current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// The hard-mode flags.
    pub fn mode(&self) -> &HardModeState {
        &self.mode
    }

    /// The marker the human plays.
    pub fn human(&self) -> Player {
        self.human
    }

    /// The strategy the computer will use for its next move.
    pub fn strategy(&self) -> Strategy {
        Strategy::from_hard_mode(self.mode.is_enabled())
    }

    /// Plays the human's move and, if the game goes on, the computer's reply.
    #[instrument(skip(self))]
    pub fn play_human(&mut self, pos: Position) -> Result<Turn, SessionError> {
        let status = self.game.make_move(pos)?;

        let computer = if status.is_over() {
            None
        } else {
            Some(self.play_computer()?)
        };

        Ok(Turn {
            human: pos,
            computer,
            status: self.game.status(),
        })
    }

    /// Flips hard mode; returns the new value.
    pub fn toggle_hard_mode(&mut self) -> bool {
        self.mode.toggle_enabled()
    }

    /// Shows or hides the settings panel; returns the new visibility.
    pub fn toggle_settings_panel(&mut self) -> bool {
        self.mode.toggle_visibility()
    }

    /// Starts a fresh game with the same seating and flags.
    ///
    /// Returns the computer's opening move when it plays crosses.
    #[instrument(skip(self))]
    pub fn restart(&mut self) -> Result<Option<Position>, SessionError> {
        info!("Restarting game");
        self.game = Game::new();
        self.open()
    }

    fn open(&mut self) -> Result<Option<Position>, SessionError> {
        if self.game.to_move() == self.human {
            return Ok(None);
        }
        self.play_computer().map(Some)
    }

    fn play_computer(&mut self) -> Result<Position, SessionError> {
        let strategy = self.strategy();
        let pos = strategy.pick_move(self.game.board())?;
        self.game.make_move(pos)?;
        debug!(%strategy, %pos, "Computer moved");
        Ok(pos)
    }
}
