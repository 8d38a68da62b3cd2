//! Thin wasm boundary over [`GameInstance`]: one request in, one
//! response out, no game logic beyond delegation.

use wasm_bindgen::prelude::*;

use crate::game::GameInstance;

#[wasm_bindgen]
pub struct Game {
    inner: GameInstance,
}

#[wasm_bindgen]
impl Game {
    /// Creates a game with the engine searching `depth` plies.
    #[wasm_bindgen(constructor)]
    pub fn new(depth: u8) -> Game {
        Game {
            inner: GameInstance::new_with_search_selector(depth),
        }
    }

    /// Applies the external player's (black) move.
    pub fn player_move(&mut self, row: u8, col: u8) -> Result<(), JsError> {
        self.inner.place(row, col).map_err(|e| JsError::new(&e))
    }

    /// Computes and applies the engine's (white) move.
    pub fn ai_move(&mut self) -> Result<(), JsError> {
        self.inner.do_ai_move().map_err(|e| JsError::new(&e))
    }

    pub fn has_legal_moves(&self) -> bool {
        self.inner.has_legal_moves_for_current()
    }

    pub fn pass_turn(&mut self) {
        self.inner.pass();
    }

    pub fn end_game(&mut self) {
        self.inner.end_game();
    }

    /// Legal moves for the side to move, as a list of `Position`s.
    pub fn current_legal_moves(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.inner.get_legal_moves()).map_err(JsError::from)
    }

    pub fn game_state(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.inner.to_game_state()).map_err(JsError::from)
    }

    pub fn game_result(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.inner.to_game_result()).map_err(JsError::from)
    }
}
