//! Compute free study slots from a day's classes.
//!
//! Clips classes to the day window, sorts them by start time, merges
//! overlapping busy periods, then collects the gaps between merged periods.
//! Gaps shorter than the minimum-gap threshold are too small to study in and
//! are omitted.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::clock::ClockTime;
use crate::error::{Result, SlotError};
use crate::timetable::ClassEntry;

/// Gaps shorter than this many minutes are omitted from results.
pub const DEFAULT_MIN_GAP_MINUTES: u32 = 30;

/// How the calculator treats malformed or overlapping class entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlapPolicy {
    /// Clip entries to the window, drop inverted entries and entries
    /// entirely outside, and merge overlapping busy time before computing
    /// gaps. Never fails.
    #[default]
    Merge,
    /// Reject input containing any inverted, out-of-window, or overlapping
    /// entry.
    Reject,
}

/// Knobs for [`free_slots_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotOptions {
    /// Minimum gap length, in minutes, for a gap to count as free time.
    pub min_gap_minutes: u32,
    /// Lenient or strict treatment of malformed input.
    pub overlap: OverlapPolicy,
}

impl Default for SlotOptions {
    fn default() -> Self {
        Self {
            min_gap_minutes: DEFAULT_MIN_GAP_MINUTES,
            overlap: OverlapPolicy::Merge,
        }
    }
}

/// The bounds of a scheduling day.
///
/// Start is strictly before end; [`DayWindow::new`] rejects anything else,
/// so a window in hand is always well-formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    start: ClockTime,
    end: ClockTime,
}

impl DayWindow {
    pub fn new(start: ClockTime, end: ClockTime) -> Result<Self> {
        if end <= start {
            return Err(SlotError::InvalidWindow { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(self) -> ClockTime {
        self.start
    }

    pub fn end(self) -> ClockTime {
        self.end
    }

    /// Window length in minutes.
    pub fn span_minutes(self) -> u32 {
        u32::from(self.end.minutes() - self.start.minutes())
    }
}

impl Default for DayWindow {
    /// The app's standard scheduling day, 06:00 to 23:00.
    fn default() -> Self {
        Self {
            start: ClockTime(6 * 60),
            end: ClockTime(23 * 60),
        }
    }
}

impl fmt::Display for DayWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// A maximal unoccupied interval within the day window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FreeSlot {
    pub start: ClockTime,
    pub end: ClockTime,
    /// Slot length in minutes. Engine output always carries the real
    /// length; on input the field may be omitted and defaults to zero.
    #[serde(default)]
    pub duration_minutes: u32,
}

/// Compute the free slots a day's classes leave inside the window, with the
/// default 30-minute threshold and lenient input handling.
///
/// When nothing busy overlaps the window, in particular when `classes` is
/// empty, the whole window comes back as a single slot regardless of the
/// threshold.
pub fn free_slots(classes: &[ClassEntry], window: DayWindow) -> Vec<FreeSlot> {
    compute_slots(classes, window, DEFAULT_MIN_GAP_MINUTES)
}

/// Compute free slots with explicit options.
///
/// Under [`OverlapPolicy::Reject`] the entries are validated first: each
/// must have `start < end`, lie inside the window, and not overlap any
/// other entry. The first violation found is returned as an error. Under
/// [`OverlapPolicy::Merge`] this function cannot fail.
pub fn free_slots_with(
    classes: &[ClassEntry],
    window: DayWindow,
    options: SlotOptions,
) -> Result<Vec<FreeSlot>> {
    if options.overlap == OverlapPolicy::Reject {
        check_entries(classes, window)?;
    }
    Ok(compute_slots(classes, window, options.min_gap_minutes))
}

/// Find the first free interval of at least `min_duration_minutes`.
///
/// The usability threshold of [`free_slots`] does not apply here: a caller
/// asking for a 10-minute slot can be handed a 10-minute gap.
pub fn first_free_slot(
    classes: &[ClassEntry],
    window: DayWindow,
    min_duration_minutes: u32,
) -> Option<FreeSlot> {
    compute_slots(classes, window, 0)
        .into_iter()
        .find(|slot| slot.duration_minutes >= min_duration_minutes)
}

/// Validate entries for [`OverlapPolicy::Reject`]: well-formed, inside the
/// window, pairwise non-overlapping.
fn check_entries(classes: &[ClassEntry], window: DayWindow) -> Result<()> {
    for entry in classes {
        if entry.end <= entry.start {
            return Err(SlotError::InvalidEntry {
                entry: entry.clone(),
            });
        }
        if entry.start < window.start || entry.end > window.end {
            return Err(SlotError::OutOfWindow {
                entry: entry.clone(),
                window,
            });
        }
    }

    let mut sorted = classes.to_vec();
    sorted.sort_by_key(|entry| (entry.start, entry.end));
    for pair in sorted.windows(2) {
        // Sorted by start time, so overlap reduces to the previous end
        // reaching past the next start.
        if pair[0].end > pair[1].start {
            return Err(SlotError::OverlappingClasses {
                first: pair[0].clone(),
                second: pair[1].clone(),
            });
        }
    }

    Ok(())
}

/// Merge the classes that touch the window into sorted, non-overlapping
/// busy intervals, clipped to the window.
///
/// Inverted entries and entries entirely outside the window are dropped.
/// Returns minute offsets rather than clock times.
fn merge_busy_periods(classes: &[ClassEntry], window: DayWindow) -> Vec<(u16, u16)> {
    let mut intervals: Vec<(u16, u16)> = classes
        .iter()
        .filter(|e| e.start < e.end && e.start < window.end && e.end > window.start)
        .map(|e| {
            (
                e.start.minutes().max(window.start.minutes()),
                e.end.minutes().min(window.end.minutes()),
            )
        })
        .collect();

    // Sort by start time (then by end time for stability).
    intervals.sort_by_key(|&(start, end)| (start, end));

    let mut merged: Vec<(u16, u16)> = Vec::new();
    for (start, end) in intervals {
        if let Some(last) = merged.last_mut() {
            if start <= last.1 {
                // Overlapping or adjacent -- extend the current interval.
                last.1 = last.1.max(end);
                continue;
            }
        }
        merged.push((start, end));
    }

    merged
}

fn compute_slots(classes: &[ClassEntry], window: DayWindow, min_gap_minutes: u32) -> Vec<FreeSlot> {
    let merged = merge_busy_periods(classes, window);

    // Nothing busy in the window: the whole day is one free slot, kept even
    // when the window itself is shorter than the threshold.
    if merged.is_empty() {
        return vec![make_slot(window.start.minutes(), window.end.minutes())];
    }

    let mut slots = Vec::new();
    let mut cursor = window.start.minutes();

    for (busy_start, busy_end) in merged {
        if cursor < busy_start && u32::from(busy_start - cursor) >= min_gap_minutes {
            slots.push(make_slot(cursor, busy_start));
        }
        cursor = cursor.max(busy_end);
    }

    // Trailing free slot after the last busy period.
    let day_end = window.end.minutes();
    if cursor < day_end && u32::from(day_end - cursor) >= min_gap_minutes {
        slots.push(make_slot(cursor, day_end));
    }

    slots
}

/// Build a slot from minute offsets already known to lie inside one day.
fn make_slot(start: u16, end: u16) -> FreeSlot {
    FreeSlot {
        start: ClockTime(start),
        end: ClockTime(end),
        duration_minutes: u32::from(end - start),
    }
}
