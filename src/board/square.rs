//! Board squares.

use serde::{Deserialize, Serialize};

use crate::error::TopologyError;

/// A cell on the 100-square board, numbered 1 (start) to 100 (goal).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Square(u8);

impl Square {
    /// Where every token starts.
    pub const START: Square = Square(1);

    /// The only winning square. Must be reached exactly.
    pub const GOAL: Square = Square(100);

    /// Number of squares on the board.
    pub const COUNT: u8 = 100;

    /// Create a square, or `None` if `n` is outside 1-100.
    #[must_use]
    pub const fn new(n: u8) -> Option<Self> {
        if n >= 1 && n <= Self::COUNT {
            Some(Self(n))
        } else {
            None
        }
    }

    /// Get the raw square number.
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// The square `steps` ahead, or `None` if that overshoots the goal.
    #[must_use]
    pub fn offset(self, steps: u8) -> Option<Self> {
        self.0.checked_add(steps).and_then(Self::new)
    }

    /// Iterate over every square from 1 to 100.
    pub fn all() -> impl Iterator<Item = Square> {
        (1..=Self::COUNT).map(Square)
    }
}

impl TryFrom<u8> for Square {
    type Error = TopologyError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        Self::new(n).ok_or(TopologyError::OffBoard(n))
    }
}

impl From<Square> for u8 {
    fn from(square: Square) -> u8 {
        square.0
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.0, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds() {
        assert_eq!(Square::new(0), None);
        assert_eq!(Square::new(1), Some(Square::START));
        assert_eq!(Square::new(100), Some(Square::GOAL));
        assert_eq!(Square::new(101), None);
    }

    #[test]
    fn test_offset() {
        let sq = Square::new(95).unwrap();
        assert_eq!(sq.offset(5), Some(Square::GOAL));
        assert_eq!(sq.offset(6), None);
        assert_eq!(Square::GOAL.offset(255), None);
    }

    #[test]
    fn test_all() {
        let squares: Vec<_> = Square::all().collect();
        assert_eq!(squares.len(), 100);
        assert_eq!(squares[0], Square::START);
        assert_eq!(squares[99], Square::GOAL);
    }

    #[test]
    fn test_display_honors_width() {
        assert_eq!(format!("{:>3}|{:<3}|", Square::START, Square::GOAL), "  1|100|");
    }

    #[test]
    fn test_serde_rejects_off_board() {
        assert_eq!(serde_json::from_str::<Square>("42").unwrap().get(), 42);
        assert!(serde_json::from_str::<Square>("0").is_err());
        assert!(serde_json::from_str::<Square>("101").is_err());
    }
}
