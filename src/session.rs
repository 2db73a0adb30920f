use serde::Serialize;
use tracing::warn;

use crate::board::Board;
use crate::error::BoardResult;
use crate::piece::Piece;
use crate::selection::{ClickOutcome, Selection, SelectionController};
use crate::square::{Square, BOARD_SIZE};

/// Everything a renderer needs to draw one square.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Debug)]
pub struct SquareView {
    pub row: usize,
    pub col: usize,
    pub piece: Option<Piece>,
    pub selected: bool,
    pub light: bool,
}

/// Read-only picture of the session: all 64 squares in row-major order.
#[derive(Clone, PartialEq, Eq, Serialize, Debug)]
pub struct BoardSnapshot {
    pub squares: Vec<SquareView>,
    pub selected: Option<Square>,
}

impl BoardSnapshot {
    pub fn square(&self, square: Square) -> &SquareView {
        &self.squares[square.row() * BOARD_SIZE + square.col()]
    }
}

/// The board plus the pending selection. Built once and handed by reference
/// to whatever draws it and whatever feeds it clicks.
#[derive(Clone, Debug, Default)]
pub struct GameSession {
    board: Board,
    controller: SelectionController,
}

impl GameSession {
    pub fn new() -> Self {
        Self::with_board(Board::initialize())
    }

    pub fn with_board(board: Board) -> Self {
        GameSession {
            board,
            controller: SelectionController::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn selection(&self) -> Selection {
        self.controller.selection()
    }

    /// The only mutating entry point. Off-board coordinates fail this call
    /// and leave the session untouched.
    pub fn on_square_clicked(&mut self, row: usize, col: usize) -> BoardResult<ClickOutcome> {
        let square = Square::new(row, col).inspect_err(|err| warn!(%err, "click rejected"))?;
        Ok(self.controller.on_square_clicked(&mut self.board, square))
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let selected = self.selection().square();
        let squares = Square::all()
            .map(|square| SquareView {
                row: square.row(),
                col: square.col(),
                piece: self.board.get(square).piece(),
                selected: selected == Some(square),
                light: square.is_light(),
            })
            .collect();
        BoardSnapshot { squares, selected }
    }

    pub fn reset(&mut self) {
        self.board = Board::initialize();
        self.controller.clear();
    }
}
