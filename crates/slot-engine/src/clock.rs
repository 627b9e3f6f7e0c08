//! Wall-clock times of day with minute precision.
//!
//! [`ClockTime`] is the engine's unit of time: minutes since midnight in
//! `0..=1439`, with no date and no timezone attached. The canonical text
//! form is a strict two-digit `HH:MM`; parsing anything looser fails, so
//! malformed times are caught where data enters the engine rather than deep
//! inside gap arithmetic.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::error::{Result, SlotError};

/// Minutes in a full day. `ClockTime` values are strictly below this.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A wall-clock time of day, stored as minutes since midnight.
///
/// Ordering follows the clock: `"09:00" < "14:30"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime(pub(crate) u16);

impl ClockTime {
    /// Build a time from hour and minute components.
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(SlotError::InvalidTime(format!("{hour:02}:{minute:02}")));
        }
        Ok(Self(u16::from(hour) * 60 + u16::from(minute)))
    }

    /// Build a time from a minute offset since midnight.
    ///
    /// Offsets of 1440 and above do not name a time of day and are
    /// rejected; a naive formatter would render 1440 as "24:00".
    pub fn from_minutes(minutes: u16) -> Result<Self> {
        if minutes >= MINUTES_PER_DAY {
            return Err(SlotError::MinutesOutOfRange(minutes));
        }
        Ok(Self(minutes))
    }

    /// Minutes since midnight, `0..=1439`.
    pub fn minutes(self) -> u16 {
        self.0
    }

    /// Hour component, `0..=23`.
    pub fn hour(self) -> u8 {
        (self.0 / 60) as u8
    }

    /// Minute component, `0..=59`.
    pub fn minute(self) -> u8 {
        (self.0 % 60) as u8
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for ClockTime {
    type Err = SlotError;

    /// Parse the strict `HH:MM` form: two digits, a colon, two digits.
    ///
    /// Byte-wise digit checks keep out the looser shapes `str::parse` on
    /// integers would accept, such as `"+9:30"` or `" 9:30"`.
    fn from_str(s: &str) -> Result<Self> {
        let b = s.as_bytes();
        let well_formed = b.len() == 5
            && b[0].is_ascii_digit()
            && b[1].is_ascii_digit()
            && b[2] == b':'
            && b[3].is_ascii_digit()
            && b[4].is_ascii_digit();
        if !well_formed {
            return Err(SlotError::InvalidTime(s.to_string()));
        }

        let hour = u16::from(b[0] - b'0') * 10 + u16::from(b[1] - b'0');
        let minute = u16::from(b[3] - b'0') * 10 + u16::from(b[4] - b'0');
        if hour > 23 || minute > 59 {
            return Err(SlotError::InvalidTime(s.to_string()));
        }

        Ok(Self(hour * 60 + minute))
    }
}

impl Serialize for ClockTime {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ClockTime {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
