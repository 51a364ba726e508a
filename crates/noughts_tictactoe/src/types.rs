//! Core domain types for tic-tac-toe.

use super::position::Position;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    /// Crosses (goes first).
    #[display("X")]
    Cross,
    /// Noughts (goes second).
    #[display("O")]
    Nought,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::Cross => Player::Nought,
            Player::Nought => Player::Cross,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }

    fn symbol(self) -> char {
        match self {
            Square::Empty => '.',
            Square::Occupied(Player::Cross) => 'X',
            Square::Occupied(Player::Nought) => 'O',
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Empty positions in canonical (row-major) order.
    pub fn empty_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL.into_iter().filter(|&pos| self.is_empty(pos))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for square in &self.squares {
            write!(f, "{}", square.symbol())?;
        }
        Ok(())
    }
}

/// Error parsing a board snapshot from text.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum BoardParseError {
    /// The snapshot did not contain exactly nine cells.
    #[display("Board must have 9 cells, found {}", _0)]
    WrongLength(#[error(not(source))] usize),

    /// A cell used a character that is not a marker.
    #[display("Invalid marker {:?} (expected X, O or .)", _0)]
    InvalidMarker(#[error(not(source))] char),
}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cells from `X`, `O` and `.` (also `-`/`_` for empty).
    ///
    /// Whitespace and `|` separators are ignored so pretty-printed rows
    /// like `X|O|.` parse too.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .map(|c| match c {
                'X' | 'x' => Ok(Square::Occupied(Player::Cross)),
                'O' | 'o' => Ok(Square::Occupied(Player::Nought)),
                '.' | '-' | '_' => Ok(Square::Empty),
                other => Err(BoardParseError::InvalidMarker(other)),
            })
            .collect::<Result<Vec<_>, _>>()?;

        let squares: [Square; 9] = cells
            .try_into()
            .map_err(|cells: Vec<Square>| BoardParseError::WrongLength(cells.len()))?;
        Ok(Self { squares })
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has been won or drawn.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_board() {
        let board: Board = "XX.O.....".parse().unwrap();
        assert_eq!(
            board.get(Position::TopLeft),
            Square::Occupied(Player::Cross)
        );
        assert_eq!(
            board.get(Position::MiddleLeft),
            Square::Occupied(Player::Nought)
        );
        assert!(board.is_empty(Position::TopRight));
        assert_eq!(board.to_string(), "XX.O.....");
    }

    #[test]
    fn test_parse_board_with_separators() {
        let board: Board = "x|o|-\n.|x|.\n_|_|o".parse().unwrap();
        assert_eq!(board.to_string(), "XO..X...O");
    }

    #[test]
    fn test_parse_board_wrong_length() {
        assert_eq!("XO".parse::<Board>(), Err(BoardParseError::WrongLength(2)));
    }

    #[test]
    fn test_parse_board_invalid_marker() {
        assert_eq!(
            "XO?......".parse::<Board>(),
            Err(BoardParseError::InvalidMarker('?'))
        );
    }

    #[test]
    fn test_empty_positions_in_order() {
        let board: Board = "XOXOXO.X.".parse().unwrap();
        let empty: Vec<_> = board.empty_positions().collect();
        assert_eq!(empty, [Position::BottomLeft, Position::BottomRight]);
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Player::Cross.opponent(), Player::Nought);
        assert_eq!(Player::Nought.opponent(), Player::Cross);
    }
}
