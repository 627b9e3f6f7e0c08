//! Error types for slot-engine operations.

use thiserror::Error;

use crate::clock::ClockTime;
use crate::freeslot::DayWindow;
use crate::timetable::ClassEntry;

#[derive(Error, Debug)]
pub enum SlotError {
    /// The input string is not a well-formed `HH:MM` clock time.
    #[error("Invalid time '{0}': expected HH:MM between 00:00 and 23:59")]
    InvalidTime(String),

    /// A minute offset that does not name a time of day.
    #[error("Minute offset {0} is out of range (0..=1439)")]
    MinutesOutOfRange(u16),

    /// A day window whose start is not strictly before its end.
    #[error("Invalid day window {start}-{end}: start must be before end")]
    InvalidWindow { start: ClockTime, end: ClockTime },

    /// A class entry whose start is not strictly before its end.
    #[error("Invalid class interval {entry}: start must be before end")]
    InvalidEntry { entry: ClassEntry },

    /// A class entry lying at least partly outside the day window.
    #[error("Class {entry} falls outside the day window {window}")]
    OutOfWindow { entry: ClassEntry, window: DayWindow },

    /// Two classes occupying overlapping time ranges.
    #[error("Overlapping classes: {first} and {second}")]
    OverlappingClasses { first: ClassEntry, second: ClassEntry },

    /// The model reply contained nothing at all.
    #[error("Model reply is empty")]
    EmptyReply,

    /// The model reply contained no JSON object to extract.
    #[error("Model reply contains no JSON object")]
    MissingJson,

    /// The extracted JSON did not parse as a weekly timetable.
    #[error("Timetable JSON parse error: {0}")]
    ReplyParse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SlotError>;
