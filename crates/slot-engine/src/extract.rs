//! Extract a weekly timetable from a vision-model reply.
//!
//! The model is instructed to answer with bare JSON, but replies routinely
//! arrive wrapped in markdown code fences or surrounded by prose. Extraction
//! trims that wrapping away, takes the outermost `{...}` span, and parses it
//! as a [`WeeklyTimetable`].

use std::borrow::Cow;

use crate::error::{Result, SlotError};
use crate::timetable::WeeklyTimetable;

/// Parse a model reply into a timetable.
///
/// # Errors
///
/// - [`SlotError::EmptyReply`] when the reply is blank.
/// - [`SlotError::MissingJson`] when no `{...}` object is present.
/// - [`SlotError::ReplyParse`] when the extracted text is not a valid
///   timetable, including malformed `HH:MM` strings inside it.
pub fn timetable_from_reply(reply: &str) -> Result<WeeklyTimetable> {
    let text = reply.trim();
    if text.is_empty() {
        return Err(SlotError::EmptyReply);
    }

    let cleaned = strip_code_fences(text);

    let open = cleaned.find('{').ok_or(SlotError::MissingJson)?;
    let close = cleaned.rfind('}').ok_or(SlotError::MissingJson)?;
    if close < open {
        return Err(SlotError::MissingJson);
    }

    Ok(serde_json::from_str(&cleaned[open..=close])?)
}

/// Remove markdown fence markers when the reply starts with one.
fn strip_code_fences(text: &str) -> Cow<'_, str> {
    if !text.starts_with("```") {
        return Cow::Borrowed(text);
    }
    // "```json" first so a plain "```" pass cannot leave "json" behind.
    Cow::Owned(
        text.replace("```json", "")
            .replace("```", "")
            .trim()
            .to_string(),
    )
}
