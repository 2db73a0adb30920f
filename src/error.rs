//! Error types for board and selection operations.

use crate::square::Square;

/// Errors the core reports to its callers. A failed call never changes the
/// board or the selection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// Row or column outside `0..8`
    #[error("square ({row}, {col}) is off the board")]
    OutOfRange { row: usize, col: usize },

    /// `move_piece` called on a square with nothing to move
    #[error("no piece on {square} to move")]
    EmptySource { square: Square },
}

pub type BoardResult<T> = Result<T, BoardError>;
