//! Parse a generated day plan into actionable tasks.
//!
//! The planner model answers with a timeline, one entry per line, usually
//! prefixed with a list bullet or one of the emoji its example format uses.
//! Each non-empty line becomes one not-yet-done task.

use serde::{Deserialize, Serialize};

/// One actionable line of a generated plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanTask {
    pub text: String,
    pub done: bool,
}

/// Leading markers stripped from plan lines: list bullets plus the timeline
/// emoji the planner prompt's example format uses.
const LINE_MARKERS: [char; 9] = ['-', '•', '*', '⏰', '📚', '🍽', '💪', '🎯', '✨'];

/// Split a generated plan into tasks, one per non-empty line.
///
/// Strips at most one leading marker per line, then a stray variation
/// selector left behind by emoji like 🍽️, trims, and drops lines with
/// nothing left.
pub fn tasks_from_plan(plan: &str) -> Vec<PlanTask> {
    plan.lines()
        .filter_map(|line| {
            let mut text = line.trim();
            if let Some(rest) = text.strip_prefix(LINE_MARKERS) {
                text = rest.strip_prefix('\u{fe0f}').unwrap_or(rest);
            }
            let text = text.trim();
            if text.is_empty() {
                None
            } else {
                Some(PlanTask {
                    text: text.to_string(),
                    done: false,
                })
            }
        })
        .collect()
}
