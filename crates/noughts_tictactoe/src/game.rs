//! Game engine for tic-tac-toe.

use crate::rules::{check_winner, is_full};
use crate::{Board, GameStatus, Player, Position, Square};
use derive_more::{Display, Error};
use tracing::{debug, info, instrument};

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("{} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The game is already over.
    #[display("Game is already over")]
    GameOver,
}

/// Tic-tac-toe game: board, turn order, status and move history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Player,
    status: GameStatus,
    history: Vec<Position>,
}

impl Game {
    /// Creates a new game with crosses to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::Cross,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the positions played so far, oldest first.
    pub fn history(&self) -> &[Position] {
        &self.history
    }

    /// Places the current player's mark and advances the turn.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn make_move(&mut self, pos: Position) -> Result<GameStatus, MoveError> {
        if self.status.is_over() {
            return Err(MoveError::GameOver);
        }

        if !self.board.is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.to_move;
        self.board.set(pos, Square::Occupied(player));
        self.history.push(pos);
        self.to_move = player.opponent();
        debug!(%pos, %player, "Move applied");

        self.update_status();
        Ok(self.status)
    }

    fn update_status(&mut self) {
        if let Some(winner) = check_winner(&self.board) {
            info!(%winner, "Game won");
            self.status = GameStatus::Won(winner);
        } else if is_full(&self.board) {
            info!("Game drawn");
            self.status = GameStatus::Draw;
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternating_players() {
        let mut game = Game::new();
        assert_eq!(game.to_move(), Player::Cross);
        game.make_move(Position::Center).unwrap();
        assert_eq!(game.to_move(), Player::Nought);
        assert_eq!(game.history(), [Position::Center]);
    }

    #[test]
    fn test_occupied_square_rejected() {
        let mut game = Game::new();
        game.make_move(Position::Center).unwrap();
        assert_eq!(
            game.make_move(Position::Center),
            Err(MoveError::SquareOccupied(Position::Center))
        );
        assert_eq!(game.to_move(), Player::Nought);
    }

    #[test]
    fn test_win_ends_game() {
        let mut game = Game::new();
        for pos in [
            Position::TopLeft,
            Position::Center,
            Position::TopCenter,
            Position::BottomRight,
        ] {
            game.make_move(pos).unwrap();
        }
        assert_eq!(
            game.make_move(Position::TopRight),
            Ok(GameStatus::Won(Player::Cross))
        );
        assert_eq!(
            game.make_move(Position::BottomLeft),
            Err(MoveError::GameOver)
        );
    }

    #[test]
    fn test_draw() {
        let mut game = Game::new();
        // X O X / X O O / O X X
        for idx in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            game.make_move(Position::from_index(idx).unwrap()).unwrap();
        }
        assert_eq!(game.status(), GameStatus::Draw);
    }
}
