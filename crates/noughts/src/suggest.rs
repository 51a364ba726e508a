//! One-shot move suggestions for a board snapshot.

use noughts_tictactoe::{Board, Position, SelectError, Strategy, find_decisive_cell};
use serde::Serialize;
use tracing::instrument;

/// What the computer would do on a given board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// The snapshot in `X`/`O`/`.` notation.
    pub board: String,
    /// Strategy used for `choice`.
    pub strategy: Strategy,
    /// Cell that wins or blocks, if any line is one move from completion.
    pub decisive: Option<Position>,
    /// Cell the computer would mark.
    pub choice: Position,
}

impl Suggestion {
    /// Evaluates the snapshot; fails only on a full board.
    #[instrument(skip(board), fields(board = %board))]
    pub fn for_board(board: &Board, strategy: Strategy) -> Result<Self, SelectError> {
        Ok(Self {
            board: board.to_string(),
            strategy,
            decisive: find_decisive_cell(board),
            choice: strategy.pick_move(board)?,
        })
    }
}

impl std::fmt::Display for Suggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.choice, self.choice.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let board: Board = "XX..O....".parse().unwrap();
        let suggestion = Suggestion::for_board(&board, Strategy::Hard).unwrap();
        let json = serde_json::to_value(&suggestion).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "board": "XX..O....",
                "strategy": "hard",
                "decisive": "TopRight",
                "choice": "TopRight",
            })
        );
        assert_eq!(suggestion.to_string(), "Top-right (c)");
    }

    #[test]
    fn test_easy_ignores_threats() {
        let board: Board = "......OO.".parse().unwrap();
        let suggestion = Suggestion::for_board(&board, Strategy::Easy).unwrap();
        assert_eq!(suggestion.decisive, Some(Position::BottomRight));
        assert_eq!(suggestion.choice, Position::TopLeft);
    }
}
