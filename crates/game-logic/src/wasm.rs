//! WASM bindings for the browser frontend

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::{Match, MatchSummary, SeededRng, Weapon};

fn parse_weapon(name: &str) -> Result<Weapon, JsError> {
    match name {
        "scissors" => Ok(Weapon::Scissors),
        "paper" => Ok(Weapon::Paper),
        "stone" => Ok(Weapon::Stone),
        _ => Err(JsError::new(&format!("Unknown weapon: {}", name))),
    }
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// One running match, owned by the frontend
#[wasm_bindgen]
pub struct GameHandle {
    game: Match,
}

#[wasm_bindgen]
impl GameHandle {
    /// Start a new match from a caller-supplied seed
    ///
    /// The frontend provides the entropy (e.g. `Date.now()`); the core stays
    /// deterministic so a match can be replayed from its seed.
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u64) -> GameHandle {
        GameHandle {
            game: Match::new(SeededRng::new(seed)),
        }
    }

    /// Play the current round with the named weapon
    ///
    /// Accepts "scissors", "paper" or "stone". Returns the updated snapshot.
    pub fn play_round(&mut self, weapon: &str) -> Result<JsValue, JsError> {
        let weapon = parse_weapon(weapon)?;
        self.game
            .play_round(weapon)
            .map_err(|e| JsError::new(&e.to_string()))?;
        self.snapshot()
    }

    /// Leave the current round
    ///
    /// Returns `"InProgress"` or a `Complete` object carrying the final
    /// summary.
    pub fn advance_round(&mut self) -> Result<JsValue, JsError> {
        let status = self
            .game
            .advance_round()
            .map_err(|e| JsError::new(&e.to_string()))?;
        to_js(&status)
    }

    /// Read-only view of the match for rendering
    pub fn snapshot(&self) -> Result<JsValue, JsError> {
        to_js(&self.game.snapshot())
    }

    /// Reset to round one with zeroed scores ("Play again!")
    pub fn restart(&mut self) {
        self.game.restart();
    }
}

/// Weapon names in presentation order, for building the choice buttons
#[wasm_bindgen]
pub fn weapon_choices() -> Result<JsValue, JsError> {
    let names: Vec<&str> = Weapon::ALL.iter().map(|w| w.name()).collect();
    to_js(&names)
}

#[derive(serde::Serialize)]
struct AlertCopy {
    headline: &'static str,
    detail: String,
}

/// Game-over dialog copy for a serialized `MatchSummary`
#[wasm_bindgen]
pub fn summary_copy(summary_json: &str) -> Result<JsValue, JsError> {
    let summary: MatchSummary = serde_json::from_str(summary_json)
        .map_err(|e| JsError::new(&format!("Invalid summary: {}", e)))?;

    to_js(&AlertCopy {
        headline: summary.headline(),
        detail: summary.detail(),
    })
}
