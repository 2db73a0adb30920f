use std::fmt;

use serde::Serialize;

use crate::error::{BoardError, BoardResult};

pub const BOARD_SIZE: usize = 8;

/// A validated board coordinate. Row 0 is Black's back rank (rank 8),
/// column 0 is the a-file.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Debug)]
pub struct Square {
    row: usize,
    col: usize,
}

impl Square {
    pub fn new(row: usize, col: usize) -> BoardResult<Square> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Square { row, col })
        } else {
            Err(BoardError::OutOfRange { row, col })
        }
    }

    pub fn row(self) -> usize {
        self.row
    }

    pub fn col(self) -> usize {
        self.col
    }

    pub fn is_light(self) -> bool {
        (self.row + self.col) % 2 == 0
    }

    /// All 64 squares, row by row.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col as u8) as char;
        let rank = (b'8' - self.row as u8) as char;
        write!(f, "{file}{rank}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_off_board_coordinates() {
        assert!(Square::new(7, 7).is_ok());
        assert_eq!(Square::new(8, 0), Err(BoardError::OutOfRange { row: 8, col: 0 }));
        assert_eq!(Square::new(0, 8), Err(BoardError::OutOfRange { row: 0, col: 8 }));
        assert!(Square::new(usize::MAX, 3).is_err());
    }

    #[test]
    fn algebraic_names() {
        assert_eq!(Square::new(0, 0).unwrap().to_string(), "a8");
        assert_eq!(Square::new(6, 4).unwrap().to_string(), "e2");
        assert_eq!(Square::new(7, 7).unwrap().to_string(), "h1");
    }

    #[test]
    fn colouring_alternates() {
        assert!(Square::new(0, 0).unwrap().is_light());
        assert!(!Square::new(0, 1).unwrap().is_light());
        assert!(!Square::new(7, 0).unwrap().is_light());
    }

    #[test]
    fn all_yields_64_in_row_major_order() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Square::new(0, 0).unwrap());
        assert_eq!(squares[9], Square::new(1, 1).unwrap());
        assert_eq!(squares[63], Square::new(7, 7).unwrap());
    }
}
