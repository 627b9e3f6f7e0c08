//! # slot-engine
//!
//! Deterministic free-slot and timetable math for AI student planners.
//!
//! A student-assistant app keeps a weekly class timetable and asks a
//! language model to plan the day around it. The model cannot reliably do
//! interval arithmetic, so everything deterministic lives here: clock
//! times, the timetable model, free-slot computation, duration formatting,
//! timetable extraction from model replies, planner prompt construction,
//! and splitting a generated plan into tasks.
//!
//! ## Modules
//!
//! - [`clock`] — strict `HH:MM` clock times
//! - [`timetable`] — class entries and the day-keyed weekly timetable
//! - [`freeslot`] — free slots between classes within a day window
//! - [`duration`] — free-time totals and human-readable durations
//! - [`extract`] — model reply → timetable
//! - [`prompt`] — planner prompt construction
//! - [`plan`] — generated plan → task list
//! - [`summary`] — per-day and per-week rollups
//! - [`error`] — error types

pub mod clock;
pub mod duration;
pub mod error;
pub mod extract;
pub mod freeslot;
pub mod plan;
pub mod prompt;
pub mod summary;
pub mod timetable;

pub use clock::ClockTime;
pub use duration::{format_duration, total_free_minutes};
pub use error::SlotError;
pub use extract::timetable_from_reply;
pub use freeslot::{
    first_free_slot, free_slots, free_slots_with, DayWindow, FreeSlot, OverlapPolicy, SlotOptions,
    DEFAULT_MIN_GAP_MINUTES,
};
pub use plan::{tasks_from_plan, PlanTask};
pub use prompt::{daily_plan_prompt, study_plan_prompt, DailyPlanRequest, StudyPlanRequest};
pub use summary::{day_summary, week_summary, DaySummary};
pub use timetable::{day_name, ClassEntry, WeeklyTimetable};
