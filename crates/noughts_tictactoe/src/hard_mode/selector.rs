//! Move selection for the hard-mode computer player.
//!
//! Priority, each tier consulted only when the previous yields nothing:
//!
//! 1. A decisive cell (wins for, or blocks, whoever owns the other two cells
//!    of a line)
//! 2. The center
//! 3. The first empty corner
//! 4. The first empty cell in canonical order
//!
//! Every scan runs over a fixed array so ties always resolve the same way.

use crate::rules::LINES;
use crate::{Board, Position, Square};
use derive_more::{Display, Error};
use tracing::{debug, instrument};

/// Failure to choose a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SelectError {
    /// The board has no empty cell; the game should already be over.
    #[display("No empty cell available on a full board")]
    NoEmptyCell,
}

/// Finds the empty cell that completes a line for either player.
///
/// Lines are checked rows first, then columns, then diagonals. A line is
/// decisive when exactly one of its cells is empty and the other two hold the
/// same marker. The first decisive line wins, regardless of whose marker it
/// holds, so a block may be chosen over a win that appears later in the order.
#[instrument(skip(board), fields(board = %board))]
pub fn find_decisive_cell(board: &Board) -> Option<Position> {
    LINES.iter().find_map(|line| {
        let mut empty = None;
        let mut marker = None;

        for &pos in line {
            match board.get(pos) {
                Square::Empty if empty.is_some() => return None,
                Square::Empty => empty = Some(pos),
                Square::Occupied(player) => match marker {
                    None => marker = Some(player),
                    Some(first) if first != player => return None,
                    Some(_) => {}
                },
            }
        }

        let cell = empty?;
        debug!(?line, ?cell, ?marker, "Decisive cell found");
        Some(cell)
    })
}

/// Chooses the computer's next move.
///
/// Returns [`SelectError::NoEmptyCell`] when called on a full board.
#[instrument(skip(board), fields(board = %board))]
pub fn select_computer_move(board: &Board) -> Result<Position, SelectError> {
    if let Some(cell) = find_decisive_cell(board) {
        return Ok(cell);
    }

    if board.is_empty(Position::Center) {
        debug!("Taking center");
        return Ok(Position::Center);
    }

    if let Some(corner) = Position::CORNERS
        .into_iter()
        .find(|&pos| board.is_empty(pos))
    {
        debug!(?corner, "Taking corner");
        return Ok(corner);
    }

    let fallback = board.empty_positions().next().ok_or(SelectError::NoEmptyCell)?;
    debug!(?fallback, "Taking first open cell");
    Ok(fallback)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_completes_row() {
        assert_eq!(
            find_decisive_cell(&board("XX.......")),
            Some(Position::TopRight)
        );
    }

    #[test]
    fn test_gap_in_middle_of_line() {
        assert_eq!(
            find_decisive_cell(&board("O.O......")),
            Some(Position::TopCenter)
        );
    }

    #[test]
    fn test_mixed_markers_not_decisive() {
        assert_eq!(find_decisive_cell(&board("XO.......")), None);
        assert_eq!(find_decisive_cell(&board(".XO......")), None);
    }

    #[test]
    fn test_two_empty_cells_not_decisive() {
        assert_eq!(find_decisive_cell(&board("X........")), None);
    }

    #[test]
    fn test_full_line_skipped() {
        // Top row is full; the middle column is the only open threat.
        assert_eq!(
            find_decisive_cell(&board("XOX.O....")),
            Some(Position::BottomCenter)
        );
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Nought threatens the middle row, cross the bottom row.
        assert_eq!(
            find_decisive_cell(&board("...OO.XX.")),
            Some(Position::MiddleRight)
        );
    }

    #[test]
    fn test_anti_diagonal() {
        assert_eq!(
            find_decisive_cell(&board("..X.X....")),
            Some(Position::BottomLeft)
        );
    }

    #[test]
    fn test_empty_board_takes_center() {
        let b = Board::new();
        assert_eq!(find_decisive_cell(&b), None);
        assert_eq!(select_computer_move(&b), Ok(Position::Center));
    }

    #[test]
    fn test_full_board_is_an_error() {
        assert_eq!(
            select_computer_move(&board("XOXOXXOXO")),
            Err(SelectError::NoEmptyCell)
        );
    }
}
