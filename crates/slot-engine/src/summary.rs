//! Per-day and per-week rollups of a timetable.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::duration::total_free_minutes;
use crate::freeslot::{free_slots, DayWindow, FreeSlot};
use crate::timetable::{day_name, ClassEntry, WeeklyTimetable};

/// Monday-first week order used by [`week_summary`].
const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Everything a day view needs: the day's classes, its free slots, and the
/// free-time total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySummary {
    pub day: String,
    pub classes: Vec<ClassEntry>,
    pub free: Vec<FreeSlot>,
    pub total_free_minutes: u32,
}

/// Summarize one day of the timetable, using lenient free-slot computation
/// at the default threshold.
pub fn day_summary(table: &WeeklyTimetable, day: Weekday, window: DayWindow) -> DaySummary {
    let classes = table.classes_for(day).to_vec();
    let free = free_slots(&classes, window);
    let total_free_minutes = total_free_minutes(&free);
    DaySummary {
        day: day_name(day).to_string(),
        classes,
        free,
        total_free_minutes,
    }
}

/// Summarize the whole week in Monday-to-Sunday order, independent of the
/// order days are stored in.
pub fn week_summary(table: &WeeklyTimetable, window: DayWindow) -> Vec<DaySummary> {
    WEEK.iter()
        .map(|&day| day_summary(table, day, window))
        .collect()
}
