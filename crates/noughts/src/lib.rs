//! Terminal noughts and crosses against a computer opponent.
//!
//! # Architecture
//!
//! - **Config**: [`Settings`] from an optional TOML file plus CLI overrides
//! - **Session**: [`GameSession`] owns the board and the hard-mode flags and
//!   asks the active strategy for the computer's replies
//! - **Terminal**: a line-oriented loop over any reader/writer pair
//! - **Suggest**: one-shot evaluation of a board snapshot
//!
//! Game rules and the move selector live in `noughts_tictactoe`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
pub mod render;
mod session;
mod suggest;
pub mod terminal;

pub use config::{ConfigError, DEFAULT_CONFIG_FILE, Settings};
pub use session::{GameSession, SessionError, Turn};
pub use suggest::Suggestion;
