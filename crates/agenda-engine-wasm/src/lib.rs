//! WASM bindings for agenda-engine.
//!
//! Exposes the conflict check, the picker slot-disable rule, and free-slot
//! derivation to JavaScript via `wasm-bindgen`, so the booking UI runs the
//! same arithmetic the tests pin down instead of a hand-copied port. All
//! complex values cross the boundary as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p agenda-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir pkg/ \
//!   target/wasm32-unknown-unknown/release/agenda_engine_wasm.wasm
//! ```

use agenda_engine::catalog::SlotCatalog;
use agenda_engine::picker::SlotRole;
use agenda_engine::time::Interval;
use agenda_engine::Reservation;
use chrono::NaiveDate;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Helpers: parse boundary inputs into engine types
// ---------------------------------------------------------------------------

fn parse_date(label: &str) -> Result<NaiveDate, JsValue> {
    agenda_engine::parse_date(label).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Parse a JSON array of reservation records as served by the agenda API.
fn parse_reservations(json: &str) -> Result<Vec<Reservation>, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid reservations JSON: {}", e)))
}

fn parse_role(role: &str) -> Result<SlotRole, JsValue> {
    match role {
        "start" => Ok(SlotRole::Start),
        "end" => Ok(SlotRole::End),
        other => Err(JsValue::from_str(&format!(
            "Invalid role: '{}' (expected \"start\" or \"end\")",
            other
        ))),
    }
}

fn catalog_for(grid: u32) -> Result<SlotCatalog, JsValue> {
    match grid {
        30 => Ok(SlotCatalog::booking()),
        60 => Ok(SlotCatalog::public_hourly()),
        other => Err(JsValue::from_str(&format!(
            "Unsupported grid: {} (expected 30 or 60)",
            other
        ))),
    }
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Would a candidate booking overlap an existing reservation on `date`?
///
/// `reservations_json` must be a JSON array of reservation records. Pass the
/// reservation's own id as `exclude` when re-checking an edit, so the
/// booking never conflicts with its prior span.
#[wasm_bindgen(js_name = "hasConflict")]
pub fn has_conflict(
    date: &str,
    start: &str,
    end: &str,
    reservations_json: &str,
    exclude: Option<String>,
) -> Result<bool, JsValue> {
    let date = parse_date(date)?;
    let candidate =
        Interval::from_labels(start, end).map_err(|e| JsValue::from_str(&e.to_string()))?;
    let snapshot = parse_reservations(reservations_json)?;

    let result = match exclude.as_deref() {
        Some(id) => agenda_engine::has_conflict_excluding(date, candidate, &snapshot, id),
        None => agenda_engine::has_conflict(date, candidate, &snapshot),
    };
    result.map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Should a picker option be grayed out for the given role?
///
/// `role` is `"start"` or `"end"`. The rule is advisory; re-run
/// [`has_conflict`] at submit time against a fresh snapshot.
#[wasm_bindgen(js_name = "isOptionDisabled")]
pub fn is_option_disabled(
    option: &str,
    role: &str,
    date: &str,
    reservations_json: &str,
    exclude: Option<String>,
) -> Result<bool, JsValue> {
    let role = parse_role(role)?;
    let date = parse_date(date)?;
    let snapshot = parse_reservations(reservations_json)?;

    agenda_engine::is_option_disabled(option, role, date, &snapshot, exclude.as_deref())
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// The open catalog slots on `date`, as a JSON array of "HH:MM" labels in
/// ascending order. `grid` selects the catalog: 30 for the booking grid,
/// 60 for the public hourly grid.
#[wasm_bindgen(js_name = "freeSlots")]
pub fn free_slots(date: &str, reservations_json: &str, grid: u32) -> Result<String, JsValue> {
    let date = parse_date(date)?;
    let snapshot = parse_reservations(reservations_json)?;
    let catalog = catalog_for(grid)?;

    let labels: Vec<String> = agenda_engine::free_slots(&catalog, date, &snapshot)
        .map_err(|e| JsValue::from_str(&e.to_string()))?
        .collect();

    serde_json::to_string(&labels)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

/// The full label menu for a catalog, as a JSON array — what a picker
/// renders before any disabling is applied.
#[wasm_bindgen(js_name = "slotLabels")]
pub fn slot_labels(grid: u32) -> Result<String, JsValue> {
    let labels: Vec<String> = catalog_for(grid)?.labels().collect();
    serde_json::to_string(&labels)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}
