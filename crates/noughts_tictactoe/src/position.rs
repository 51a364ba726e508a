//! Named cells of the tic-tac-toe board.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use tracing::instrument;

/// A position on the tic-tac-toe board (0-8, row-major).
///
/// Cells are also addressable by the letters `a` through `i`, read left to
/// right and top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter)]
pub enum Position {
    /// Top-left (position 0, `a`)
    TopLeft,
    /// Top-center (position 1, `b`)
    TopCenter,
    /// Top-right (position 2, `c`)
    TopRight,
    /// Middle-left (position 3, `d`)
    MiddleLeft,
    /// Center (position 4, `e`)
    Center,
    /// Middle-right (position 5, `f`)
    MiddleRight,
    /// Bottom-left (position 6, `g`)
    BottomLeft,
    /// Bottom-center (position 7, `h`)
    BottomCenter,
    /// Bottom-right (position 8, `i`)
    BottomRight,
}

impl Position {
    /// All 9 positions in canonical scan order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// The four corners in scan order.
    pub const CORNERS: [Position; 4] = [
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Letter identifier (`a`..`i`).
    pub fn letter(self) -> char {
        (b'a' + self.to_u8()) as char
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Converts position to u8 (0-8).
    pub fn to_u8(self) -> u8 {
        self as u8
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from its letter identifier.
    pub fn from_letter(letter: char) -> Option<Self> {
        let letter = letter.to_ascii_lowercase();
        if letter.is_ascii_lowercase() {
            Self::from_index((letter as u8 - b'a') as usize)
        } else {
            None
        }
    }

    /// Parse from a 1-based number, a letter, or a label.
    #[instrument]
    pub fn from_label_or_number(s: &str) -> Option<Position> {
        let s = s.trim();

        if let Ok(num) = s.parse::<usize>() {
            return num.checked_sub(1).and_then(Self::from_index);
        }

        let mut chars = s.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Self::from_letter(c);
        }

        let s_lower = s.to_lowercase();
        Position::iter().find(|pos| pos.label().to_lowercase() == s_lower)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Input did not name a board cell.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unknown position {:?} (use 1-9, a-i, or a label like \"center\")", input)]
pub struct PositionParseError {
    /// The rejected input.
    #[error(not(source))]
    pub input: String,
}

impl FromStr for Position {
    type Err = PositionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label_or_number(s).ok_or_else(|| PositionParseError {
            input: s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip() {
        for (i, pos) in Position::ALL.iter().enumerate() {
            assert_eq!(pos.to_index(), i);
        }
        assert_eq!(Position::from_index(9), None);
    }

    #[test]
    fn test_letters() {
        assert_eq!(Position::TopLeft.letter(), 'a');
        assert_eq!(Position::Center.letter(), 'e');
        assert_eq!(Position::from_letter('I'), Some(Position::BottomRight));
        assert_eq!(Position::from_letter('j'), None);
    }

    #[test]
    fn test_from_label_or_number() {
        assert_eq!(Position::from_label_or_number("5"), Some(Position::Center));
        assert_eq!(Position::from_label_or_number("0"), None);
        assert_eq!(
            Position::from_label_or_number("c"),
            Some(Position::TopRight)
        );
        assert_eq!(
            Position::from_label_or_number("bottom-left"),
            Some(Position::BottomLeft)
        );
        assert_eq!(Position::from_label_or_number("middle"), None);
    }
}
