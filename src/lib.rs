pub mod board;
pub mod error;
pub mod piece;
pub mod selection;
pub mod session;
pub mod square;
pub mod view;

#[cfg(target_arch = "wasm32")]
mod wasm_api;

pub use board::{Board, Cell, MoveOutcome};
pub use error::{BoardError, BoardResult};
pub use piece::{Color, Piece, PieceType};
pub use selection::{ClickOutcome, Selection, SelectionController};
pub use session::{BoardSnapshot, GameSession, SquareView};
pub use square::Square;
