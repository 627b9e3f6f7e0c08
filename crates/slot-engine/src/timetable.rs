//! The weekly timetable model the app stores and the vision model emits.
//!
//! On the wire a timetable is a JSON object keyed by English day names:
//!
//! ```json
//! {
//!   "Monday": [{"start": "10:00", "end": "11:00", "subject": "IoT"}],
//!   "Tuesday": []
//! }
//! ```
//!
//! Day order is preserved across a deserialize/serialize round trip, so a
//! timetable written back to storage keeps the order the model produced.

use std::fmt;

use chrono::Weekday;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

use crate::clock::ClockTime;

/// One fixed commitment in the timetable: a class with a subject label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassEntry {
    pub start: ClockTime,
    pub end: ClockTime,
    pub subject: String,
}

impl fmt::Display for ClassEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' {}-{}", self.subject, self.start, self.end)
    }
}

/// Canonical English name for a weekday, matching the timetable's JSON keys.
pub fn day_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// A week's class schedule, keyed by day name.
///
/// Stored as ordered `(day, classes)` pairs rather than a sorted map so
/// JSON key order survives a round trip. Lookups ignore ASCII case,
/// tolerating replies that say `"monday"`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeeklyTimetable {
    days: Vec<(String, Vec<ClassEntry>)>,
}

impl WeeklyTimetable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classes recorded for the given weekday; empty if the day is absent.
    pub fn classes_for(&self, day: Weekday) -> &[ClassEntry] {
        let name = day_name(day);
        self.days
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, classes)| classes.as_slice())
            .unwrap_or(&[])
    }

    /// Replace the day's classes, or append the day if it is not present.
    pub fn set_classes(&mut self, day: Weekday, classes: Vec<ClassEntry>) {
        let name = day_name(day);
        match self
            .days
            .iter_mut()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
        {
            Some((_, existing)) => *existing = classes,
            None => self.days.push((name.to_string(), classes)),
        }
    }

    /// Stored `(day, classes)` pairs in on-wire order.
    pub fn days(&self) -> impl Iterator<Item = (&str, &[ClassEntry])> {
        self.days
            .iter()
            .map(|(name, classes)| (name.as_str(), classes.as_slice()))
    }

    /// True when no days are recorded at all.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl Serialize for WeeklyTimetable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.days.len()))?;
        for (day, classes) in &self.days {
            map.serialize_entry(day, classes)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for WeeklyTimetable {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct TimetableVisitor;

        impl<'de> Visitor<'de> for TimetableVisitor {
            type Value = WeeklyTimetable;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of day names to class lists")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Self::Value, A::Error> {
                let mut days: Vec<(String, Vec<ClassEntry>)> =
                    Vec::with_capacity(access.size_hint().unwrap_or(7));
                while let Some((day, classes)) = access.next_entry::<String, Vec<ClassEntry>>()? {
                    // A duplicate day key takes the last value while keeping
                    // the first occurrence's position.
                    match days.iter_mut().find(|(key, _)| *key == day) {
                        Some((_, existing)) => *existing = classes,
                        None => days.push((day, classes)),
                    }
                }
                Ok(WeeklyTimetable { days })
            }
        }

        deserializer.deserialize_map(TimetableVisitor)
    }
}
