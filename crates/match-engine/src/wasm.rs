//! WASM bindings for the browser front end

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::{status_line, EngineConfig, EngineError, MatchEngine, Move, Resolution, Ticket};

/// Seed from the browser's own randomness and clock
fn entropy_seed() -> u64 {
    let noise = (js_sys::Math::random() * u32::MAX as f64) as u64;
    let now = js_sys::Date::now() as u64;
    (noise << 32) ^ now
}

#[derive(serde::Serialize)]
struct PendingInfo {
    ticket: u64,
    delay_ms: u64,
}

#[derive(serde::Serialize)]
struct MoveInfo {
    id: &'static str,
    label: &'static str,
    /// Tag of the move this one defeats
    beats: &'static str,
}

/// Engine handle owned by the page
#[wasm_bindgen]
pub struct WasmMatch {
    engine: MatchEngine,
}

#[wasm_bindgen]
impl WasmMatch {
    /// Standard pacing and history length
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WasmMatch, JsError> {
        let engine = MatchEngine::new(EngineConfig::standard(), entropy_seed())
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Self { engine })
    }

    /// Build from a JSON config, e.g. `{"history_limit": 10}`
    pub fn with_config(config_json: &str) -> Result<WasmMatch, JsError> {
        let config = EngineConfig::from_json(config_json)
            .map_err(|e| JsError::new(&e.to_string()))?;
        let engine = MatchEngine::new(config, entropy_seed())
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(Self { engine })
    }

    /// Start a round. Returns `{ticket, delay_ms}` to pass to `setTimeout`,
    /// or `null` when a round is already resolving.
    pub fn submit_move(&mut self, tag: &str) -> Result<JsValue, JsError> {
        let player: Move = tag.parse().map_err(|e: EngineError| JsError::new(&e.to_string()))?;
        self.start(player)
    }

    /// Same as `submit_move`, by button position (0 rock, 1 paper, 2 scissors)
    pub fn submit_index(&mut self, index: u8) -> Result<JsValue, JsError> {
        let player = Move::try_from(index).map_err(|e| JsError::new(&e.to_string()))?;
        self.start(player)
    }

    /// Timer callback. Returns false when the ticket was cancelled by a reset.
    pub fn resolve(&mut self, ticket: f64) -> bool {
        matches!(self.engine.resolve(Ticket(ticket as u64)), Resolution::Applied(_))
    }

    pub fn reset(&mut self) {
        self.engine.reset();
    }

    /// Current session: phase, moves, verdict, score, history
    pub fn snapshot(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(self.engine.session())
            .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
    }

    /// Text for the result chip
    pub fn status(&self) -> String {
        status_line(self.engine.session()).to_string()
    }
}

impl WasmMatch {
    fn start(&mut self, player: Move) -> Result<JsValue, JsError> {
        match self.engine.submit_move(player) {
            Some(pending) => {
                let info = PendingInfo {
                    ticket: pending.ticket.0,
                    delay_ms: pending.delay.as_millis() as u64,
                };
                serde_wasm_bindgen::to_value(&info)
                    .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
            }
            None => Ok(JsValue::NULL),
        }
    }
}

/// The three moves with their button labels
#[wasm_bindgen]
pub fn get_moves() -> Result<JsValue, JsError> {
    let moves: Vec<MoveInfo> = Move::ALL
        .iter()
        .map(|m| MoveInfo {
            id: m.as_str(),
            label: m.label(),
            beats: Move::ALL
                .iter()
                .find(|other| m.beats(**other))
                .map_or("", |other| other.as_str()),
        })
        .collect();

    serde_wasm_bindgen::to_value(&moves)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}
