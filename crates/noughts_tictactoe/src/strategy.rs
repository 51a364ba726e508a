//! Computer strategies.

use crate::hard_mode::{SelectError, select_computer_move};
use crate::{Board, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// How the computer picks its moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// First empty square in row-major order.
    #[display("easy")]
    Easy,
    /// Win, block, center, corner, then anything.
    #[display("hard")]
    Hard,
}

impl Strategy {
    /// Maps the hard-mode switch to a strategy.
    pub fn from_hard_mode(enabled: bool) -> Self {
        if enabled { Self::Hard } else { Self::Easy }
    }

    /// Picks a move for the given board.
    #[instrument(skip(board), fields(board = %board))]
    pub fn pick_move(self, board: &Board) -> Result<Position, SelectError> {
        let pos = match self {
            Strategy::Easy => board.empty_positions().next().ok_or(SelectError::NoEmptyCell)?,
            Strategy::Hard => select_computer_move(board)?,
        };
        debug!(strategy = %self, %pos, "Computer chose position");
        Ok(pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easy_takes_first_empty() {
        let board: Board = "X........".parse().unwrap();
        assert_eq!(Strategy::Easy.pick_move(&board), Ok(Position::TopCenter));
    }

    #[test]
    fn test_hard_blocks_where_easy_does_not() {
        let board: Board = "......XX.".parse().unwrap();
        assert_eq!(Strategy::Easy.pick_move(&board), Ok(Position::TopLeft));
        assert_eq!(Strategy::Hard.pick_move(&board), Ok(Position::BottomRight));
    }

    #[test]
    fn test_from_hard_mode() {
        assert_eq!(Strategy::from_hard_mode(false), Strategy::Easy);
        assert_eq!(Strategy::from_hard_mode(true), Strategy::Hard);
    }
}
