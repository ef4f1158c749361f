//! Serpentine grid layout.
//!
//! Square 1 is bottom-left. Rows alternate direction, so square 11 sits
//! directly above square 10. Row 0 is the top of the board when drawn.

use super::square::Square;

/// Rows and columns on the board.
pub const GRID_SIZE: u8 = 10;

/// Square drawn at grid `(row, col)`, or `None` outside the grid.
#[must_use]
pub fn square_at(row: u8, col: u8) -> Option<Square> {
    if row >= GRID_SIZE || col >= GRID_SIZE {
        return None;
    }
    let band = GRID_SIZE - 1 - row;
    let offset = if band % 2 == 0 { col } else { GRID_SIZE - 1 - col };
    Square::new(band * GRID_SIZE + offset + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(row: u8, col: u8) -> u8 {
        square_at(row, col).unwrap().get()
    }

    #[test]
    fn test_corners() {
        assert_eq!(at(9, 0), 1);
        assert_eq!(at(9, 9), 10);
        assert_eq!(at(8, 9), 11);
        assert_eq!(at(0, 0), 100);
        assert_eq!(at(0, 9), 91);
    }

    #[test]
    fn test_every_square_drawn_once() {
        let mut seen: Vec<u8> = (0..GRID_SIZE)
            .flat_map(|row| (0..GRID_SIZE).map(move |col| at(row, col)))
            .collect();
        seen.sort_unstable();
        assert_eq!(seen, (1..=100).collect::<Vec<_>>());
    }

    #[test]
    fn test_outside_grid() {
        assert_eq!(square_at(10, 0), None);
        assert_eq!(square_at(0, 10), None);
    }
}
