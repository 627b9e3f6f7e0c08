//! Duration totals and human-readable formatting.

use crate::freeslot::FreeSlot;

/// Total length of the given slots in minutes.
///
/// Lengths are derived from the endpoints rather than the stored
/// `duration_minutes`, so slices deserialized from bare `{start, end}`
/// pairs sum correctly. A malformed slot whose end precedes its start
/// contributes zero instead of wrapping.
pub fn total_free_minutes(slots: &[FreeSlot]) -> u32 {
    slots
        .iter()
        .map(|slot| u32::from(slot.end.minutes().saturating_sub(slot.start.minutes())))
        .sum()
}

/// Render a minute count as a compact human string.
///
/// Under an hour the minutes stand alone (`"45m"`, and zero is `"0m"`).
/// Exact hours drop the minute part (`"2h"`). Everything else shows both
/// (`"1h 30m"`).
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;

    if hours == 0 {
        return format!("{mins}m");
    }
    if mins == 0 {
        return format!("{hours}h");
    }
    format!("{hours}h {mins}m")
}
