//! Planner prompt construction.
//!
//! The app delegates plan wording to a language model but keeps the prompt
//! deterministic: the timetable facts, the free slots, and the scheduling
//! rules are assembled here so every device sends the model the same text
//! for the same inputs.

use crate::freeslot::{DayWindow, FreeSlot};
use crate::timetable::ClassEntry;

/// Inputs for the daily planner prompt.
#[derive(Debug, Clone)]
pub struct DailyPlanRequest<'a> {
    /// Day name shown to the model, e.g. `"Monday"`.
    pub today: &'a str,
    /// The day's fixed classes.
    pub classes: &'a [ClassEntry],
    /// Free slots the plan may schedule work into.
    pub free_slots: &'a [FreeSlot],
    /// The student's free-text goals for the day.
    pub goals: &'a str,
    /// The scheduling day the plan must cover.
    pub window: DayWindow,
}

/// Inputs for the exam study-planner prompt.
#[derive(Debug, Clone)]
pub struct StudyPlanRequest<'a> {
    pub exam_name: &'a str,
    /// Free-text subject or chapter list.
    pub subjects: &'a str,
    pub exam_date: &'a str,
    /// Free-text hours per day, e.g. `"3"` or `"Not specified"`.
    pub daily_hours: &'a str,
}

/// Build the prompt asking the model for a complete one-day schedule.
///
/// Classes and free slots are rendered as bullet lists, with fixed fallback
/// lines when either is empty, so the model always sees both sections.
pub fn daily_plan_prompt(request: &DailyPlanRequest<'_>) -> String {
    let classes = if request.classes.is_empty() {
        "No classes scheduled".to_string()
    } else {
        request
            .classes
            .iter()
            .map(|c| format!("- {}-{}: {}", c.start, c.end, c.subject))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let slots = if request.free_slots.is_empty() {
        "No free time available".to_string()
    } else {
        request
            .free_slots
            .iter()
            .map(|s| format!("- {} to {}", s.start, s.end))
            .collect::<Vec<_>>()
            .join("\n")
    };

    let start = request.window.start();
    let end = request.window.end();

    format!(
        "You are a smart student daily planner creating a complete day schedule.

Today is: {today}
Day time range: {start} to {end}

My classes today:
{classes}

My available free time slots:
{slots}

My goals for today:
{goals}

Your task:
- Create a COMPLETE day plan from {start} to {end}
- Include morning routine, study sessions, breaks, meals, and evening wind-down
- Use ONLY the free slots listed above for study/work tasks
- Do NOT schedule anything during class times
- Allocate time for:
  * Morning routine (if time before first class)
  * Study sessions for the goals mentioned
  * Lunch break (around 12:00-14:00 if free)
  * Dinner break (around 19:00-21:00 if free)
  * Short breaks between study sessions (10-15 min every 1-2 hours)
  * Evening relaxation/wind-down before {end}
- Be realistic - don't overload free slots
- Prioritize important goals in longer free slots
- Format output as a clean timeline with emojis

Example format:
⏰ 06:00-07:00 - Morning routine & breakfast
📚 07:00-09:00 - [Your scheduled class]
...

Generate the complete day plan now.",
        today = request.today,
        start = start,
        end = end,
        classes = classes,
        slots = slots,
        goals = request.goals,
    )
}

/// Build the prompt asking the model for a day-wise study plan before an
/// exam.
pub fn study_plan_prompt(request: &StudyPlanRequest<'_>) -> String {
    format!(
        "You are a smart study planner for a student.

Create a realistic, day-wise study plan.

Rules:
- Distribute subjects properly
- Include revision days
- Keep workload balanced
- Be practical and motivating
- Output in a clean day-wise list format

Exam name: {exam_name}
Subjects/chapters: {subjects}
Exam date: {exam_date}
Daily study hours: {daily_hours}

Generate the plan now.",
        exam_name = request.exam_name,
        subjects = request.subjects,
        exam_date = request.exam_date,
        daily_hours = request.daily_hours,
    )
}
