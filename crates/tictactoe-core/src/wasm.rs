//! WebAssembly bindings for the Tic-Tac-Toe engine.
//!
//! This module exposes the engine to the JavaScript rendering layer
//! through wasm-bindgen. State crosses the boundary as JSON strings built
//! from the JSON-friendly snapshot types.

#[cfg(feature = "wasm")]
use wasm_bindgen::prelude::*;

#[cfg(feature = "wasm")]
use crate::actions::GameAction;
#[cfg(feature = "wasm")]
use crate::game::GameState;
#[cfg(feature = "wasm")]
use thiserror::Error;

/// Errors at the JS boundary.
///
/// Game-rule violations never appear here; those are no-ops by contract.
/// The only way the embedder can fail is by handing over a payload the
/// engine cannot decode.
#[cfg(feature = "wasm")]
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid action payload: {0}")]
    MalformedAction(#[from] serde_json::Error),
}

#[cfg(feature = "wasm")]
impl From<ApiError> for JsValue {
    fn from(err: ApiError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Initialize panic hook for better error messages in the browser console
#[cfg(feature = "wasm")]
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}

/// WASM-exposed game wrapper
#[cfg(feature = "wasm")]
#[wasm_bindgen]
pub struct WasmGame {
    state: GameState,
}

#[cfg(feature = "wasm")]
#[wasm_bindgen]
impl WasmGame {
    /// Create a new game: empty board, X to move
    #[wasm_bindgen(constructor)]
    pub fn new() -> WasmGame {
        WasmGame {
            state: GameState::new(),
        }
    }

    /// Get the current game state as JSON
    #[wasm_bindgen(js_name = getState)]
    pub fn get_state(&self) -> String {
        serde_json::to_string(&self.state.to_json_friendly()).unwrap_or_else(|_| "{}".to_string())
    }

    /// Get the board (marked cells only) as JSON
    #[wasm_bindgen(js_name = getBoard)]
    pub fn get_board(&self) -> String {
        serde_json::to_string(&self.state.board.to_json_friendly())
            .unwrap_or_else(|_| "{}".to_string())
    }

    /// Get the glyph of the player to move
    #[wasm_bindgen(js_name = getCurrentPlayer)]
    pub fn get_current_player(&self) -> char {
        self.state.current_player.glyph()
    }

    /// Get the current status as JSON
    #[wasm_bindgen(js_name = getStatus)]
    pub fn get_status(&self) -> String {
        serde_json::to_string(&self.state.status).unwrap_or_else(|_| "\"Unknown\"".to_string())
    }

    /// Check if the game is finished
    #[wasm_bindgen(js_name = isFinished)]
    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Get the winner's glyph (if the game ended in a win)
    #[wasm_bindgen(js_name = getWinner)]
    pub fn get_winner(&self) -> Option<char> {
        self.state.winner().map(|mark| mark.glyph())
    }

    /// Number of marks placed since the last reset
    #[wasm_bindgen(js_name = getMoveCount)]
    pub fn get_move_count(&self) -> u32 {
        self.state.move_count
    }

    /// Whether a tap on this cell would place a mark (drives cell disabling)
    #[wasm_bindgen(js_name = canPlace)]
    pub fn can_place(&self, row: usize, col: usize) -> bool {
        match crate::grid::Coord::from_indices(row, col) {
            Some(coord) => self.state.can_place(coord),
            None => false,
        }
    }

    /// Get valid actions for the current state as a JSON array
    #[wasm_bindgen(js_name = getValidActions)]
    pub fn get_valid_actions(&self) -> String {
        serde_json::to_string(&self.state.valid_actions()).unwrap_or_else(|_| "[]".to_string())
    }

    /// Place the current player's mark, returning the resulting events as
    /// a JSON array (empty array when the tap was ignored)
    #[wasm_bindgen(js_name = applyMove)]
    pub fn apply_move(&mut self, row: usize, col: usize) -> String {
        let events = self.state.apply_move(row, col);
        serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string())
    }

    /// Apply an action from JSON, returning the resulting events as JSON
    #[wasm_bindgen(js_name = applyAction)]
    pub fn apply_action(&mut self, action_json: &str) -> Result<String, JsValue> {
        let action: GameAction =
            serde_json::from_str(action_json).map_err(ApiError::MalformedAction)?;

        let events = self.state.apply_action(action);
        Ok(serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string()))
    }

    /// Reset to the empty board with X to move
    #[wasm_bindgen(js_name = reset)]
    pub fn reset(&mut self) -> String {
        let events = self.state.reset();
        serde_json::to_string(&events).unwrap_or_else(|_| "[]".to_string())
    }
}

#[cfg(feature = "wasm")]
impl Default for WasmGame {
    fn default() -> Self {
        Self::new()
    }
}
