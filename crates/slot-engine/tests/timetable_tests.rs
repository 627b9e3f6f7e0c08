//! Tests for the weekly timetable model and model-reply extraction.

use chrono::Weekday;
use slot_engine::{day_name, timetable_from_reply, ClassEntry, SlotError, WeeklyTimetable};

fn class(start: &str, end: &str, subject: &str) -> ClassEntry {
    ClassEntry {
        start: start.parse().unwrap(),
        end: end.parse().unwrap(),
        subject: subject.to_string(),
    }
}

// ---------------------------------------------------------------------------
// Timetable model
// ---------------------------------------------------------------------------

#[test]
fn deserializes_the_app_storage_shape() {
    let json = r#"{
        "Monday": [
            {"start": "10:00", "end": "11:00", "subject": "IoT"},
            {"start": "11:00", "end": "12:00", "subject": "ES"}
        ],
        "Tuesday": [
            {"start": "10:00", "end": "11:00", "subject": "W&A"}
        ]
    }"#;

    let table: WeeklyTimetable = serde_json::from_str(json).unwrap();

    let monday = table.classes_for(Weekday::Mon);
    assert_eq!(monday.len(), 2);
    assert_eq!(monday[0], class("10:00", "11:00", "IoT"));
    assert_eq!(monday[1], class("11:00", "12:00", "ES"));
    assert_eq!(table.classes_for(Weekday::Tue).len(), 1);
}

#[test]
fn missing_days_read_as_empty() {
    let json = r#"{"Monday": []}"#;
    let table: WeeklyTimetable = serde_json::from_str(json).unwrap();

    assert!(table.classes_for(Weekday::Sun).is_empty());
    assert!(table.classes_for(Weekday::Mon).is_empty());
    assert!(!table.is_empty());
}

#[test]
fn preserves_day_order_through_a_round_trip() {
    // The model emitted Wednesday before Monday; writing the table back to
    // storage must not reorder it.
    let json = r#"{"Wednesday":[],"Monday":[{"start":"10:00","end":"11:00","subject":"EE"}]}"#;

    let table: WeeklyTimetable = serde_json::from_str(json).unwrap();
    let out = serde_json::to_string(&table).unwrap();

    assert_eq!(out, json);
}

#[test]
fn duplicate_day_keys_take_the_last_value() {
    let json = r#"{
        "Monday": [{"start": "09:00", "end": "10:00", "subject": "Old"}],
        "Tuesday": [],
        "Monday": [{"start": "10:00", "end": "11:00", "subject": "New"}]
    }"#;

    let table: WeeklyTimetable = serde_json::from_str(json).unwrap();

    let monday = table.classes_for(Weekday::Mon);
    assert_eq!(monday.len(), 1);
    assert_eq!(monday[0].subject, "New");

    // The day count does not grow and Monday keeps its original position.
    let days: Vec<&str> = table.days().map(|(name, _)| name).collect();
    assert_eq!(days, vec!["Monday", "Tuesday"]);
}

#[test]
fn lookup_ignores_key_case() {
    let json = r#"{"monday": [{"start": "10:00", "end": "11:00", "subject": "IoT"}]}"#;
    let table: WeeklyTimetable = serde_json::from_str(json).unwrap();

    assert_eq!(table.classes_for(Weekday::Mon).len(), 1);
}

#[test]
fn set_classes_replaces_in_place_and_appends_new_days() {
    let mut table = WeeklyTimetable::new();
    assert!(table.is_empty());

    table.set_classes(Weekday::Mon, vec![class("09:00", "10:00", "Old")]);
    table.set_classes(Weekday::Tue, vec![class("10:00", "11:00", "W&A")]);
    table.set_classes(Weekday::Mon, vec![class("10:00", "11:00", "New")]);

    assert_eq!(table.classes_for(Weekday::Mon)[0].subject, "New");
    let days: Vec<&str> = table.days().map(|(name, _)| name).collect();
    assert_eq!(days, vec!["Monday", "Tuesday"]);
}

#[test]
fn rejects_malformed_times_inside_entries() {
    let json = r#"{"Monday": [{"start": "9:00", "end": "10:00", "subject": "Maths"}]}"#;
    assert!(serde_json::from_str::<WeeklyTimetable>(json).is_err());
}

#[test]
fn class_entry_displays_subject_and_range() {
    let entry = class("09:00", "10:00", "Maths");
    assert_eq!(entry.to_string(), "'Maths' 09:00-10:00");
}

#[test]
fn day_names_match_storage_keys() {
    assert_eq!(day_name(Weekday::Mon), "Monday");
    assert_eq!(day_name(Weekday::Sun), "Sunday");
}

// ---------------------------------------------------------------------------
// Model-reply extraction
// ---------------------------------------------------------------------------

#[test]
fn extracts_from_a_fenced_reply() {
    let reply = "Here is the extracted timetable:\n\n```json\n{\n  \"Monday\": [\n    {\"start\": \"10:00\", \"end\": \"11:00\", \"subject\": \"IoT\"}\n  ]\n}\n```\n\nLet me know if you need anything else!";

    let table = timetable_from_reply(reply).unwrap();

    assert_eq!(table.classes_for(Weekday::Mon).len(), 1);
    assert_eq!(table.classes_for(Weekday::Mon)[0].subject, "IoT");
}

#[test]
fn extracts_from_a_fence_without_a_language_tag() {
    let reply = "```\n{\"Monday\": []}\n```";
    let table = timetable_from_reply(reply).unwrap();
    assert!(table.classes_for(Weekday::Mon).is_empty());
}

#[test]
fn extracts_bare_json() {
    let reply = r#"{"Friday": [{"start": "14:00", "end": "15:00", "subject": "WCOM"}]}"#;
    let table = timetable_from_reply(reply).unwrap();
    assert_eq!(table.classes_for(Weekday::Fri).len(), 1);
}

#[test]
fn extracts_json_wrapped_in_prose() {
    let reply = "Sure! {\"Monday\": []} Hope that helps.";
    let table = timetable_from_reply(reply).unwrap();
    assert!(!table.is_empty());
}

#[test]
fn empty_reply_is_an_error() {
    for reply in ["", "   ", "\n\t\n"] {
        let err = timetable_from_reply(reply).unwrap_err();
        assert!(
            matches!(err, SlotError::EmptyReply),
            "{reply:?} should be EmptyReply"
        );
    }
}

#[test]
fn reply_without_json_is_an_error() {
    let err = timetable_from_reply("I could not read the image, sorry.").unwrap_err();
    assert!(matches!(err, SlotError::MissingJson));
}

#[test]
fn reply_with_reversed_braces_is_an_error() {
    let err = timetable_from_reply("} nothing here {").unwrap_err();
    assert!(matches!(err, SlotError::MissingJson));
}

#[test]
fn reply_with_broken_json_is_an_error() {
    let err = timetable_from_reply("{\"Monday\": [oops]}").unwrap_err();
    assert!(matches!(err, SlotError::ReplyParse(_)));
}

#[test]
fn reply_with_malformed_times_is_an_error() {
    // The object parses as JSON but "25:00" is not a clock time.
    let reply = r#"{"Monday": [{"start": "25:00", "end": "26:00", "subject": "Ghost"}]}"#;
    let err = timetable_from_reply(reply).unwrap_err();
    assert!(matches!(err, SlotError::ReplyParse(_)));
}
