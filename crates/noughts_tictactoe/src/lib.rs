//! Noughts and crosses game logic.
//!
//! Pure, I/O-free building blocks for a 3x3 tic-tac-toe game:
//!
//! - **Types**: [`Board`], [`Square`], [`Player`], [`Position`]
//! - **Rules**: win and draw detection over the eight fixed lines
//! - **Game**: turn order and move validation
//! - **Hard mode**: the deterministic move selector and its on/off switch
//!
//! # Example
//!
//! ```
//! use noughts_tictactoe::{Board, Position, find_decisive_cell, select_computer_move};
//!
//! let board: Board = "XX.......".parse().unwrap();
//! assert_eq!(find_decisive_cell(&board), Some(Position::TopRight));
//! assert_eq!(select_computer_move(&Board::new()), Ok(Position::Center));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod game;
mod hard_mode;
mod position;
pub mod rules;
mod strategy;
mod types;

pub use game::{Game, MoveError};
pub use hard_mode::{HardModeState, SelectError, find_decisive_cell, select_computer_move};
pub use position::{Position, PositionParseError};
pub use strategy::Strategy;
pub use types::{Board, BoardParseError, GameStatus, Player, Square};
