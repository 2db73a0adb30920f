// =============================================================================
// Selection controller
//
// Turns a stream of square clicks into selections and moves. A click either
// starts a selection (on an occupied square), cancels it (same square again)
// or resolves it by moving the selected piece to the clicked square. Every
// resolution returns the controller to Idle.
// =============================================================================

use serde::Serialize;
use tracing::{debug, warn};

use crate::board::{Board, Cell, MoveOutcome};
use crate::square::Square;

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Debug, Default)]
pub enum Selection {
    #[default]
    Idle,
    Selected(Square),
}

impl Selection {
    pub fn square(self) -> Option<Square> {
        match self {
            Selection::Idle => None,
            Selection::Selected(square) => Some(square),
        }
    }
}

/// What a click did, from the renderer's point of view.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Debug)]
pub enum ClickOutcome {
    /// Nothing changed.
    Ignored,
    /// Highlight this square.
    Selected(Square),
    /// Remove the highlight from this square.
    Deselected(Square),
    /// Remove the highlight from `from` and redraw.
    Moved(MoveOutcome),
}

#[derive(Clone, Debug, Default)]
pub struct SelectionController {
    selection: Selection,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn clear(&mut self) {
        self.selection = Selection::Idle;
    }

    pub fn on_square_clicked(&mut self, board: &mut Board, clicked: Square) -> ClickOutcome {
        match self.selection {
            Selection::Idle => match board.get(clicked) {
                Cell::Empty => ClickOutcome::Ignored,
                Cell::Occupied(piece) => {
                    debug!(square = %clicked, piece = %piece.code(), "selected");
                    self.selection = Selection::Selected(clicked);
                    ClickOutcome::Selected(clicked)
                }
            },
            Selection::Selected(from) if from == clicked => {
                debug!(square = %from, "deselected");
                self.selection = Selection::Idle;
                ClickOutcome::Deselected(from)
            }
            Selection::Selected(from) => {
                self.selection = Selection::Idle;
                match board.move_piece(from, clicked) {
                    Ok(outcome) => ClickOutcome::Moved(outcome),
                    Err(err) => {
                        // Selection outlived its piece; drop it and leave the board alone.
                        warn!(%err, "stale selection cleared");
                        ClickOutcome::Ignored
                    }
                }
            }
        }
    }
}
