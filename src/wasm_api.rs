use crate::error::BoardError;
use crate::session::GameSession;
use crate::view::{build_board_state, build_click_json};
use serde::Serialize;
use wasm_bindgen::prelude::*;

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    let serializer = serde_wasm_bindgen::Serializer::new().serialize_maps_as_objects(true);
    value.serialize(&serializer).map_err(JsValue::from)
}

fn to_js_error(err: BoardError) -> JsValue {
    js_sys::Error::new(&err.to_string()).into()
}

#[wasm_bindgen]
pub struct Game {
    session: GameSession,
}

#[wasm_bindgen]
impl Game {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Game {
        Game {
            session: GameSession::new(),
        }
    }

    pub fn get_board_state(&self) -> JsValue {
        to_js(&build_board_state(&self.session)).unwrap_or(JsValue::NULL)
    }

    /// Forward a click. Off-board coordinates throw and change nothing.
    pub fn click(&mut self, row: usize, col: usize) -> Result<JsValue, JsValue> {
        let outcome = self.session.on_square_clicked(row, col).map_err(to_js_error)?;
        to_js(&build_click_json(outcome, &self.session))
    }

    pub fn reset(&mut self) -> JsValue {
        self.session.reset();
        self.get_board_state()
    }

    pub fn build_info() -> String {
        format!(
            "{} {}",
            env!("CARGO_PKG_VERSION"),
            env!("BUILD_TIMESTAMP")
        )
    }
}
