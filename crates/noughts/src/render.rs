//! Text rendering of the board and session panels.

use noughts_tictactoe::{Board, GameStatus, HardModeState, Player, Position, Square};

/// Formats the board as a grid, numbering empty squares 1-9.
pub fn board(board: &Board) -> String {
    let mut result = String::new();
    for row in 0..3 {
        for col in 0..3 {
            let pos = Position::ALL[row * 3 + col];
            let symbol = match board.get(pos) {
                Square::Empty => (pos.to_index() + 1).to_string(),
                Square::Occupied(player) => player.to_string(),
            };
            result.push_str(&symbol);
            if col < 2 {
                result.push('|');
            }
        }
        if row < 2 {
            result.push_str("\n-+-+-\n");
        }
    }
    result
}

/// Settings panel, or `None` while it is hidden.
pub fn settings_panel(mode: &HardModeState) -> Option<String> {
    mode.is_panel_visible().then(|| {
        let state = if mode.is_enabled() { "ON" } else { "off" };
        format!("[settings] hard mode: {state} (type `hard` to toggle)")
    })
}

/// One-line description of the game status from the human's point of view.
pub fn status(status: GameStatus, human: Player) -> String {
    match status {
        GameStatus::InProgress => "Your move.".to_string(),
        GameStatus::Won(winner) if winner == human => "You win!".to_string(),
        GameStatus::Won(winner) => format!("{winner} wins. Better luck next time."),
        GameStatus::Draw => "It's a draw.".to_string(),
    }
}
