//! Hard-mode opponent: deterministic move selection and its on/off switch.

mod selector;
mod toggle;

pub use selector::{SelectError, find_decisive_cell, select_computer_move};
pub use toggle::HardModeState;
