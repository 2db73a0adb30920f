use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{BoardError, BoardResult};
use crate::piece::Piece;
use crate::square::{Square, BOARD_SIZE};

/// Contents of one square.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Cell {
    pub fn piece(self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(piece) => Some(piece),
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

impl From<Option<Piece>> for Cell {
    fn from(piece: Option<Piece>) -> Self {
        match piece {
            Some(piece) => Cell::Occupied(piece),
            None => Cell::Empty,
        }
    }
}

/// Starting position in piece codes, row 0 first. `.` is an empty square.
const INITIAL_LAYOUT: [&str; BOARD_SIZE] = [
    "RNBQKBNR",
    "PPPPPPPP",
    "........",
    "........",
    "........",
    "........",
    "pppppppp",
    "rnbqkbnr",
];

/// What a completed move changed, enough for a renderer to patch two
/// squares instead of redrawing the board.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Debug)]
pub struct MoveOutcome {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Self::initialize()
    }
}

impl Board {
    /// Create an empty board with no pieces. Useful for setting up test positions.
    pub fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// A fresh board in the standard starting position.
    pub fn initialize() -> Self {
        let mut board = Board::empty();
        for (row, rank) in INITIAL_LAYOUT.iter().enumerate() {
            for (col, code) in rank.chars().enumerate() {
                board.cells[row][col] = Piece::from_code(code).into();
            }
        }
        board
    }

    pub fn get(&self, square: Square) -> Cell {
        self.cells[square.row()][square.col()]
    }

    pub fn get_at(&self, row: usize, col: usize) -> BoardResult<Cell> {
        Ok(self.get(Square::new(row, col)?))
    }

    /// Overwrite a square. Setup helper; play goes through `move_piece`.
    pub fn place(&mut self, square: Square, cell: Cell) {
        self.cells[square.row()][square.col()] = cell;
    }

    /// Move whatever stands on `from` to `to`, replacing anything already on
    /// `to`. There are no rules: any destination is accepted, including one
    /// holding a piece of the same side.
    pub fn move_piece(&mut self, from: Square, to: Square) -> BoardResult<MoveOutcome> {
        let piece = match self.get(from) {
            Cell::Occupied(piece) => piece,
            Cell::Empty => return Err(BoardError::EmptySource { square: from }),
        };

        if from == to {
            return Ok(MoveOutcome {
                from,
                to,
                piece,
                captured: None,
            });
        }

        let captured = self.get(to).piece();
        self.place(to, Cell::Occupied(piece));
        self.place(from, Cell::Empty);

        match captured {
            Some(victim) => debug!(%from, %to, piece = %piece.code(), captured = %victim.code(), "capture"),
            None => debug!(%from, %to, piece = %piece.code(), "move"),
        }

        Ok(MoveOutcome {
            from,
            to,
            piece,
            captured,
        })
    }

    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    /// One line per row in piece codes, `.` for empty squares.
    pub fn to_codes(&self) -> Vec<String> {
        self.cells
            .iter()
            .map(|row| {
                row.iter()
                    .map(|cell| cell.piece().map_or('.', Piece::code))
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::{Color, PieceType};

    fn sq(row: usize, col: usize) -> Square {
        Square::new(row, col).unwrap()
    }

    fn piece(pt: PieceType, color: Color) -> Cell {
        Cell::Occupied(Piece::new(pt, color))
    }

    #[test]
    fn initial_layout_has_back_ranks_pawns_and_empty_middle() {
        let board = Board::initialize();
        assert_eq!(board.piece_count(), 32);

        assert_eq!(board.get(sq(0, 4)), piece(PieceType::King, Color::Black));
        assert_eq!(board.get(sq(0, 3)), piece(PieceType::Queen, Color::Black));
        assert_eq!(board.get(sq(7, 4)), piece(PieceType::King, Color::White));
        assert_eq!(board.get(sq(7, 0)), piece(PieceType::Rook, Color::White));
        for col in 0..8 {
            assert_eq!(board.get(sq(1, col)), piece(PieceType::Pawn, Color::Black));
            assert_eq!(board.get(sq(6, col)), piece(PieceType::Pawn, Color::White));
            for row in 2..6 {
                assert!(board.get(sq(row, col)).is_empty());
            }
        }
        assert_eq!(board.to_codes()[0], "RNBQKBNR");
        assert_eq!(board.to_codes()[7], "rnbqkbnr");
    }

    #[test]
    fn initialized_boards_are_independent() {
        let mut a = Board::initialize();
        let b = Board::initialize();
        a.move_piece(sq(6, 4), sq(4, 4)).unwrap();
        assert_ne!(a, b);
        assert_eq!(b, Board::initialize());
        assert!(Board::initialize().get(sq(4, 4)).is_empty());
    }

    #[test]
    fn get_at_rejects_out_of_range() {
        let board = Board::initialize();
        assert_eq!(
            board.get_at(8, 0),
            Err(BoardError::OutOfRange { row: 8, col: 0 })
        );
        assert_eq!(
            board.get_at(3, 9),
            Err(BoardError::OutOfRange { row: 3, col: 9 })
        );
        assert_eq!(board.get_at(1, 0), Ok(piece(PieceType::Pawn, Color::Black)));
    }

    #[test]
    fn move_to_empty_square() {
        let mut board = Board::initialize();
        let outcome = board.move_piece(sq(1, 0), sq(3, 0)).unwrap();
        assert_eq!(board.get(sq(3, 0)), piece(PieceType::Pawn, Color::Black));
        assert!(board.get(sq(1, 0)).is_empty());
        assert_eq!(outcome.captured, None);
        assert_eq!(board.piece_count(), 32);
    }

    #[test]
    fn move_overwrites_occupant() {
        let mut board = Board::initialize();
        let outcome = board.move_piece(sq(0, 0), sq(1, 1)).unwrap();
        assert_eq!(board.get(sq(1, 1)), piece(PieceType::Rook, Color::Black));
        assert!(board.get(sq(0, 0)).is_empty());
        assert_eq!(
            outcome.captured,
            Some(Piece::new(PieceType::Pawn, Color::Black))
        );
        assert_eq!(board.piece_count(), 31);
    }

    #[test]
    fn move_ignores_distance_and_blockers() {
        let mut board = Board::initialize();
        board.move_piece(sq(7, 3), sq(0, 3)).unwrap();
        assert_eq!(board.get(sq(0, 3)), piece(PieceType::Queen, Color::White));
        assert!(board.get(sq(7, 3)).is_empty());
    }

    #[test]
    fn empty_source_is_rejected_without_side_effects() {
        let mut board = Board::initialize();
        let before = board.clone();
        assert_eq!(
            board.move_piece(sq(4, 4), sq(0, 0)),
            Err(BoardError::EmptySource { square: sq(4, 4) })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn move_onto_itself_changes_nothing() {
        let mut board = Board::empty();
        board.place(sq(2, 2), piece(PieceType::Knight, Color::White));
        let outcome = board.move_piece(sq(2, 2), sq(2, 2)).unwrap();
        assert_eq!(outcome.captured, None);
        assert_eq!(board.get(sq(2, 2)), piece(PieceType::Knight, Color::White));
        assert_eq!(board.piece_count(), 1);
    }
}
