//! WASM bindings for slot-engine.
//!
//! Exposes slot computation to the booking dashboard via `wasm-bindgen`. Configs
//! and results cross the boundary as JSON strings using the dashboard's
//! camelCase keys (`lunchStart`, `lunchEnd`, `durationMinutes`).
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/slot-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```

use serde::Serialize;
use slot_engine::{ReservedInterval, ScheduleConfig, SlotError, TimeOfDay};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReservedRunDto {
    start: String,
    end: String,
    duration_minutes: i64,
}

impl From<&ReservedInterval> for ReservedRunDto {
    fn from(run: &ReservedInterval) -> Self {
        Self {
            start: run.start_label(),
            end: run.end_label(),
            duration_minutes: run.duration_minutes(),
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers: JSON in, JSON out, errors as strings
// ---------------------------------------------------------------------------

fn js_err(e: SlotError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

fn parse_config(config_json: &str) -> Result<ScheduleConfig, JsValue> {
    ScheduleConfig::from_json_str(config_json).map_err(js_err)
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Compute every bookable start time for a working-hours config.
///
/// `config_json` is `{start, end, lunchStart?, lunchEnd?, reserved?}` with
/// `"HH:MM"` strings. Returns a JSON array of `"HH:MM"` strings, ascending.
/// An empty array means no slot fits.
#[wasm_bindgen(js_name = "computeAvailableSlots")]
pub fn compute_available_slots(
    config_json: &str,
    duration_minutes: i32,
    step_minutes: i32,
) -> Result<String, JsValue> {
    let config = parse_config(config_json)?;
    let slots = slot_engine::compute_available_slots(
        &config,
        i64::from(duration_minutes),
        i64::from(step_minutes),
    )
    .map_err(js_err)?;

    to_json(&slots)
}

/// The earliest bookable start time as a JSON string, or `null` if none fits.
#[wasm_bindgen(js_name = "findFirstAvailableSlot")]
pub fn find_first_available_slot(
    config_json: &str,
    duration_minutes: i32,
    step_minutes: i32,
) -> Result<String, JsValue> {
    let config = parse_config(config_json)?;
    let first = slot_engine::find_first_available_slot(
        &config,
        i64::from(duration_minutes),
        i64::from(step_minutes),
    )
    .map_err(js_err)?;

    to_json(&first)
}

/// Merge reserved start times into occupied runs.
///
/// `reserved_json` is a JSON array of `"HH:MM"` strings. Returns a JSON array of
/// `{start, end, durationMinutes}` objects; `end` may read `24:xx` when a run
/// reaches past midnight.
#[wasm_bindgen(js_name = "mergeReserved")]
pub fn merge_reserved(reserved_json: &str, step_minutes: i32) -> Result<String, JsValue> {
    let raw: Vec<String> = serde_json::from_str(reserved_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid reserved JSON: {}", e)))?;

    let reserved = raw
        .iter()
        .map(|r| r.parse::<TimeOfDay>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(js_err)?;

    let runs = slot_engine::merge_reserved(&reserved, i64::from(step_minutes)).map_err(js_err)?;
    let dtos: Vec<ReservedRunDto> = runs.iter().map(ReservedRunDto::from).collect();

    to_json(&dtos)
}
