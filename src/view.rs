//! JSON shapes handed to the browser renderer. Struct-shaped only: no
//! `#[serde(flatten)]`, which would turn a response into a JS `Map`.

use serde::Serialize;

use crate::selection::ClickOutcome;
use crate::session::GameSession;
use crate::square::{Square, BOARD_SIZE};

#[derive(Serialize, Debug)]
pub struct SquareJson {
    pub row: usize,
    pub col: usize,
    pub glyph: Option<String>,
    pub color: Option<String>,
    pub selected: bool,
    pub light: bool,
}

#[derive(Serialize, Debug)]
pub struct BoardState {
    pub squares: Vec<Vec<SquareJson>>,
    pub selected: Option<[usize; 2]>,
}

#[derive(Serialize, Debug)]
pub struct ClickJson {
    pub kind: &'static str,
    pub from: Option<[usize; 2]>,
    pub to: Option<[usize; 2]>,
    pub captured: bool,
    pub board_state: BoardState,
}

fn coords(square: Square) -> Option<[usize; 2]> {
    Some([square.row(), square.col()])
}

pub fn build_board_state(session: &GameSession) -> BoardState {
    let snapshot = session.snapshot();
    let squares = snapshot
        .squares
        .chunks(BOARD_SIZE)
        .map(|row| {
            row.iter()
                .map(|view| SquareJson {
                    row: view.row,
                    col: view.col,
                    glyph: view.piece.map(|p| p.glyph().to_string()),
                    color: view.piece.map(|p| format!("{:?}", p.color)),
                    selected: view.selected,
                    light: view.light,
                })
                .collect()
        })
        .collect();

    BoardState {
        squares,
        selected: snapshot.selected.and_then(coords),
    }
}

pub fn build_click_json(outcome: ClickOutcome, session: &GameSession) -> ClickJson {
    let (kind, from, to, captured) = match outcome {
        ClickOutcome::Ignored => ("ignored", None, None, false),
        ClickOutcome::Selected(s) => ("selected", coords(s), None, false),
        ClickOutcome::Deselected(s) => ("deselected", coords(s), None, false),
        ClickOutcome::Moved(m) => ("moved", coords(m.from), coords(m.to), m.captured.is_some()),
    };
    ClickJson {
        kind,
        from,
        to,
        captured,
        board_state: build_board_state(session),
    }
}
