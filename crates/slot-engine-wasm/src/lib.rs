//! WASM bindings for slot-engine.
//!
//! Exposes free-slot computation, duration formatting, timetable extraction,
//! and planner prompt construction to the JavaScript app via `wasm-bindgen`.
//! Export names match the app's existing service functions (`getFreeSlots`,
//! `formatDuration`, ...) so the engine drops in without renaming call
//! sites. All complex types are passed as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/slot-engine-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! # Rename .js -> .cjs for ESM compatibility
//! mv packages/slot-engine-js/wasm/slot_engine_wasm.js \
//!    packages/slot-engine-js/wasm/slot_engine_wasm.cjs
//! ```

use serde::Deserialize;
use slot_engine::freeslot::{DayWindow, FreeSlot};
use slot_engine::prompt::{DailyPlanRequest, StudyPlanRequest};
use slot_engine::timetable::ClassEntry;
use slot_engine::ClockTime;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Boundary DTOs: planner params arrive camelCase, as the app sends them
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DailyPlanParams {
    today: String,
    classes: Vec<ClassEntry>,
    free_slots: Vec<FreeSlot>,
    goals: String,
    day_start: Option<String>,
    day_end: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StudyPlanParams {
    exam_name: String,
    subjects: String,
    exam_date: String,
    daily_hours: String,
}

// ---------------------------------------------------------------------------
// Helpers: parse boundary JSON and window bounds
// ---------------------------------------------------------------------------

fn to_js<E: std::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn parse_time(s: &str) -> Result<ClockTime, JsValue> {
    s.parse().map_err(to_js)
}

/// Build the day window from optional `HH:MM` bounds, falling back to the
/// app default of 06:00-23:00 for whichever side is absent.
fn parse_window(day_start: Option<&str>, day_end: Option<&str>) -> Result<DayWindow, JsValue> {
    let default = DayWindow::default();
    let start = match day_start {
        Some(s) => parse_time(s)?,
        None => default.start(),
    };
    let end = match day_end {
        Some(s) => parse_time(s)?,
        None => default.end(),
    };
    DayWindow::new(start, end).map_err(to_js)
}

/// Convert a JSON array of `{start, end, subject}` objects into classes.
fn parse_classes_json(json: &str) -> Result<Vec<ClassEntry>, JsValue> {
    serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("Invalid classes JSON: {e}")))
}

/// Convert a JSON array of `{start, end}` objects into free slots.
fn parse_slots_json(json: &str) -> Result<Vec<FreeSlot>, JsValue> {
    serde_json::from_str(json).map_err(|e| JsValue::from_str(&format!("Invalid slots JSON: {e}")))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&format!("Serialization error: {e}")))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Compute the free slots a day's classes leave inside the day window.
///
/// `classes_json` must be a JSON array of `{start, end, subject}` objects
/// with `HH:MM` times. `day_start` and `day_end` default to "06:00" and
/// "23:00". Returns a JSON string containing an array of
/// `{start, end, duration_minutes}` objects.
#[wasm_bindgen(js_name = "getFreeSlots")]
pub fn get_free_slots(
    classes_json: &str,
    day_start: Option<String>,
    day_end: Option<String>,
) -> Result<String, JsValue> {
    let classes = parse_classes_json(classes_json)?;
    let window = parse_window(day_start.as_deref(), day_end.as_deref())?;

    let slots = slot_engine::free_slots(&classes, window);

    to_json(&slots)
}

/// Sum the lengths of the given free slots, in minutes.
///
/// `slots_json` must be a JSON array of `{start, end}` objects; a
/// `duration_minutes` field is allowed but ignored in favour of the
/// endpoints.
#[wasm_bindgen(js_name = "getTotalFreeMinutes")]
pub fn get_total_free_minutes(slots_json: &str) -> Result<u32, JsValue> {
    let slots = parse_slots_json(slots_json)?;
    Ok(slot_engine::total_free_minutes(&slots))
}

/// Render a minute count as a compact human string ("45m", "2h", "1h 30m").
#[wasm_bindgen(js_name = "formatDuration")]
pub fn format_duration(minutes: u32) -> String {
    slot_engine::format_duration(minutes)
}

/// Extract the weekly timetable from a raw model reply.
///
/// Strips markdown fences and surrounding prose, parses the embedded JSON
/// object, and returns it re-serialized as clean timetable JSON.
#[wasm_bindgen(js_name = "parseTimetableReply")]
pub fn parse_timetable_reply(reply: &str) -> Result<String, JsValue> {
    let table = slot_engine::timetable_from_reply(reply).map_err(to_js)?;
    to_json(&table)
}

/// Build the daily planner prompt.
///
/// `params_json` must be a JSON object of the shape
/// `{today, classes, freeSlots, goals, dayStart?, dayEnd?}`.
#[wasm_bindgen(js_name = "dailyPlanPrompt")]
pub fn daily_plan_prompt(params_json: &str) -> Result<String, JsValue> {
    let params: DailyPlanParams = serde_json::from_str(params_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid planner params: {e}")))?;
    let window = parse_window(params.day_start.as_deref(), params.day_end.as_deref())?;

    let request = DailyPlanRequest {
        today: &params.today,
        classes: &params.classes,
        free_slots: &params.free_slots,
        goals: &params.goals,
        window,
    };

    Ok(slot_engine::daily_plan_prompt(&request))
}

/// Build the exam study-planner prompt.
///
/// `params_json` must be a JSON object of the shape
/// `{examName, subjects, examDate, dailyHours}`.
#[wasm_bindgen(js_name = "studyPlanPrompt")]
pub fn study_plan_prompt(params_json: &str) -> Result<String, JsValue> {
    let params: StudyPlanParams = serde_json::from_str(params_json)
        .map_err(|e| JsValue::from_str(&format!("Invalid planner params: {e}")))?;

    let request = StudyPlanRequest {
        exam_name: &params.exam_name,
        subjects: &params.subjects,
        exam_date: &params.exam_date,
        daily_hours: &params.daily_hours,
    };

    Ok(slot_engine::study_plan_prompt(&request))
}

/// Split a generated day plan into tasks, one per non-empty line.
///
/// Returns a JSON string containing an array of `{text, done}` objects with
/// `done` always false.
#[wasm_bindgen(js_name = "tasksFromPlan")]
pub fn tasks_from_plan(plan: &str) -> Result<String, JsValue> {
    to_json(&slot_engine::tasks_from_plan(plan))
}
