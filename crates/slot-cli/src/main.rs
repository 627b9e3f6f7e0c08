//! `slots` CLI — inspect timetables and compute free study slots.
//!
//! ## Usage
//!
//! ```sh
//! # Free slots for today from a stored timetable
//! slots free -i timetable.json
//!
//! # Free slots for a specific day with a custom window
//! slots free -i timetable.json --day Friday --day-start 08:00 --day-end 20:00
//!
//! # Keep gaps of 15 minutes and up, reject overlapping classes
//! slots free -i timetable.json --day Monday --min-gap 15 --strict
//!
//! # Machine-readable output
//! slots free -i timetable.json --day Monday --json
//!
//! # Whole-week overview
//! slots week -i timetable.json
//!
//! # Clean up a raw model reply into timetable JSON
//! slots parse -i reply.txt -o timetable.json
//! ```

use std::io::{self, Read};

use anyhow::{Context, Result};
use chrono::{Datelike, Local, Weekday};
use clap::{Parser, Subcommand};
use slot_engine::freeslot::{DayWindow, OverlapPolicy, SlotOptions, DEFAULT_MIN_GAP_MINUTES};
use slot_engine::summary::DaySummary;
use slot_engine::{
    day_name, format_duration, timetable_from_reply, total_free_minutes, week_summary,
    WeeklyTimetable,
};

#[derive(Parser)]
#[command(name = "slots", version, about = "Timetable free-slot calculator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute free slots for one day of a timetable
    Free {
        /// Timetable JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Day of week (defaults to today)
        #[arg(long)]
        day: Option<String>,
        /// Start of the scheduling day
        #[arg(long, default_value = "06:00")]
        day_start: String,
        /// End of the scheduling day
        #[arg(long, default_value = "23:00")]
        day_end: String,
        /// Minimum gap length in minutes for a gap to count as free
        #[arg(long, default_value_t = DEFAULT_MIN_GAP_MINUTES)]
        min_gap: u32,
        /// Reject overlapping or out-of-window classes instead of merging
        #[arg(long)]
        strict: bool,
        /// Emit the day summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show class counts and free totals for the whole week
    Week {
        /// Timetable JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Start of the scheduling day
        #[arg(long, default_value = "06:00")]
        day_start: String,
        /// End of the scheduling day
        #[arg(long, default_value = "23:00")]
        day_end: String,
        /// Emit the summaries as JSON
        #[arg(long)]
        json: bool,
    },
    /// Extract clean timetable JSON from a raw model reply
    Parse {
        /// Reply text file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Free {
            input,
            day,
            day_start,
            day_end,
            min_gap,
            strict,
            json,
        } => {
            let table = read_timetable(input.as_deref())?;
            let day = resolve_day(day.as_deref())?;
            let window = parse_window(&day_start, &day_end)?;

            let options = SlotOptions {
                min_gap_minutes: min_gap,
                overlap: if strict {
                    OverlapPolicy::Reject
                } else {
                    OverlapPolicy::Merge
                },
            };

            let classes = table.classes_for(day).to_vec();
            let free = slot_engine::free_slots_with(&classes, window, options)
                .context("Timetable failed strict validation")?;
            let total_free_minutes = total_free_minutes(&free);

            let summary = DaySummary {
                day: day_name(day).to_string(),
                classes,
                free,
                total_free_minutes,
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                print_day(&summary, window);
            }
        }
        Commands::Week {
            input,
            day_start,
            day_end,
            json,
        } => {
            let table = read_timetable(input.as_deref())?;
            let window = parse_window(&day_start, &day_end)?;

            let week = week_summary(&table, window);

            if json {
                println!("{}", serde_json::to_string_pretty(&week)?);
            } else {
                print_week(&week, window);
            }
        }
        Commands::Parse { input, output } => {
            let reply = read_input(input.as_deref())?;
            let table = timetable_from_reply(&reply)
                .context("Failed to extract a timetable from the reply")?;
            let pretty = serde_json::to_string_pretty(&table)?;
            write_output(output.as_deref(), &pretty)?;
        }
    }

    Ok(())
}

/// Resolve the --day argument, defaulting to the current weekday.
fn resolve_day(day: Option<&str>) -> Result<Weekday> {
    match day {
        Some(raw) => raw
            .parse::<Weekday>()
            .map_err(|_| anyhow::anyhow!("Unknown day: '{}'. Use names like Monday or Fri.", raw)),
        None => Ok(Local::now().weekday()),
    }
}

fn parse_window(start: &str, end: &str) -> Result<DayWindow> {
    let start = start
        .parse()
        .with_context(|| format!("Invalid --day-start '{}'", start))?;
    let end = end
        .parse()
        .with_context(|| format!("Invalid --day-end '{}'", end))?;
    DayWindow::new(start, end).context("Invalid day window")
}

fn read_timetable(path: Option<&str>) -> Result<WeeklyTimetable> {
    let json = read_input(path)?;
    serde_json::from_str(&json).context("Failed to parse timetable JSON")
}

fn print_day(summary: &DaySummary, window: DayWindow) {
    println!("{} ({})", summary.day, window);

    println!();
    println!("Classes:");
    if summary.classes.is_empty() {
        println!("  (none)");
    } else {
        for class in &summary.classes {
            println!("  {}-{}  {}", class.start, class.end, class.subject);
        }
    }

    println!();
    println!("Free slots:");
    if summary.free.is_empty() {
        println!("  (none)");
    } else {
        for slot in &summary.free {
            println!(
                "  {}-{}  {}",
                slot.start,
                slot.end,
                format_duration(slot.duration_minutes)
            );
        }
    }

    println!();
    println!(
        "Total free: {}",
        format_duration(summary.total_free_minutes)
    );
}

fn print_week(week: &[DaySummary], window: DayWindow) {
    println!("Week overview ({})", window);
    println!();

    for day in week {
        let classes = match day.classes.len() {
            1 => "1 class".to_string(),
            n => format!("{} classes", n),
        };
        println!(
            "{:<10} {:<11} free {}",
            day.day,
            classes,
            format_duration(day.total_free_minutes)
        );
    }

    let total: u32 = week.iter().map(|day| day.total_free_minutes).sum();
    println!();
    println!("Week free total: {}", format_duration(total));
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
