//! WASM bindings for the browser client

#![cfg(feature = "wasm")]

use std::collections::BTreeMap;

use wasm_bindgen::prelude::*;

use crate::{
    arrange, resolve, settle, Answer, Arrangement, BetSlip, ChipWallet, PlayerId, Slot, SLOT_ORDER,
};

fn parse<T: serde::de::DeserializeOwned>(json: &str, what: &str) -> Result<T, JsError> {
    serde_json::from_str(json).map_err(|e| JsError::new(&format!("Invalid {}: {}", what, e)))
}

fn to_js<T: serde::Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Lay out the round's guesses on the mat
///
/// # Arguments
/// * `answers_json` - JSON array of `{player, value, submitted_at}`
///
/// # Returns
/// Arrangement with every slot in board order and the player -> slot index
#[wasm_bindgen]
pub fn arrange_answers(answers_json: &str) -> Result<JsValue, JsError> {
    let answers: Vec<Answer> = parse(answers_json, "answers")?;
    to_js(&arrange(&answers))
}

/// Resolve the winning slot and author
///
/// # Arguments
/// * `answers_json` - JSON array of answers
/// * `correct_answer` - The question's answer
/// * `arrangement_json` - Arrangement previously returned by `arrange_answers`
#[wasm_bindgen]
pub fn compute_winning(
    answers_json: &str,
    correct_answer: i64,
    arrangement_json: &str,
) -> Result<JsValue, JsError> {
    let answers: Vec<Answer> = parse(answers_json, "answers")?;
    let arrangement: Arrangement = parse(arrangement_json, "arrangement")?;
    to_js(&resolve(&answers, correct_answer, &arrangement))
}

/// Settle all bets for a round
///
/// # Arguments
/// * `wallets_json` - JSON object of player id -> `{red, blue, green}`
/// * `bets_json` - JSON array of `{player, markers}`
/// * `winning_slot` - Board label such as `"P3L"` or `"ALL_TOO_HIGH"`
/// * `winning_author` - Author of the winning guess, if any
/// * `round_index` - 0-based round
///
/// # Returns
/// `{wallets, deltas}`
#[wasm_bindgen]
pub fn apply_payout(
    wallets_json: &str,
    bets_json: &str,
    winning_slot: &str,
    winning_author: Option<String>,
    round_index: u32,
) -> Result<JsValue, JsError> {
    let wallets: BTreeMap<PlayerId, ChipWallet> = parse(wallets_json, "wallets")?;
    let bets: Vec<BetSlip> = parse(bets_json, "bets")?;
    let slot = Slot::from_label(winning_slot)
        .ok_or_else(|| JsError::new(&format!("Unknown slot: {}", winning_slot)))?;

    to_js(&settle(&wallets, &bets, slot, winning_author.as_deref(), round_index))
}

#[derive(serde::Serialize)]
struct SlotInfo {
    id: &'static str,
    odds: u32,
    label: String,
}

/// Slot ids with their odds, in board order
#[wasm_bindgen]
pub fn slot_odds() -> Result<JsValue, JsError> {
    let slots: Vec<SlotInfo> = SLOT_ORDER
        .iter()
        .map(|s| SlotInfo {
            id: s.label(),
            odds: s.odds(),
            label: match s {
                Slot::AllTooHigh => "All too high".to_string(),
                _ => format!("{}:1", s.odds()),
            },
        })
        .collect();
    to_js(&slots)
}

/// Slot ids in board order as a plain JS array
#[wasm_bindgen]
pub fn slot_order() -> js_sys::Array {
    SLOT_ORDER.iter().map(|s| JsValue::from_str(s.label())).collect()
}

/// Point value of a wallet
#[wasm_bindgen]
pub fn wallet_points(red: i64, blue: i64, green: i64) -> i64 {
    ChipWallet::new(red, blue, green).points()
}
