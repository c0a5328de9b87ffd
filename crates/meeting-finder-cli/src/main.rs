//! `meetfind` CLI — find meeting slots in a day of calendar events.
//!
//! ## Usage
//!
//! ```sh
//! # Find slots for the request in day.json
//! meetfind find -i day.json
//!
//! # Read from stdin, override the duration, print JSON
//! cat day.json | meetfind find --duration 45 --json
//!
//! # Show the merged busy periods of two people
//! meetfind busy -i day.json --attendee alice --attendee bob
//!
//! # Log the fallback decision (-vv for per-run counts)
//! meetfind -v find -i day.json
//! ```
//!
//! ## Input
//!
//! ```json
//! {
//!   "events": [
//!     { "title": "Standup", "start": "09:00", "end": "09:15", "attendees": ["alice", "bob"] }
//!   ],
//!   "request": { "attendees": ["alice"], "optional_attendees": ["bob"], "duration": 30 }
//! }
//! ```

use std::collections::BTreeSet;
use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use meeting_finder::busy::busy_periods;
use meeting_finder::time_range::{format_clock, parse_clock};
use meeting_finder::{
    find_available_slots_with_report, AttendeeScope, Availability, Event, MeetingRequest,
    TimeRange,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "meetfind",
    version,
    about = "Find free meeting slots in a day of calendar events"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace). Overrides RUST_LOG.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Find slots when every attendee of the request is free
    Find {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Override the request's duration, in minutes
        #[arg(short, long)]
        duration: Option<u32>,
        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show merged busy periods for a set of attendees
    Busy {
        /// Input JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Attendee to include (repeatable; defaults to everyone in the request)
        #[arg(short, long = "attendee")]
        attendees: Vec<String>,
    },
}

// ---------------------------------------------------------------------------
// Input and output documents
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct InputDocument {
    #[serde(default)]
    events: Vec<EventInput>,
    request: MeetingRequest,
}

#[derive(Deserialize)]
struct EventInput {
    #[serde(default)]
    title: String,
    start: String,
    end: String,
    #[serde(default)]
    attendees: Vec<String>,
}

impl EventInput {
    fn into_event(self) -> Result<Event> {
        let start = parse_clock(&self.start)
            .with_context(|| format!("Invalid start time for event '{}'", self.title))?;
        let end = parse_clock(&self.end)
            .with_context(|| format!("Invalid end time for event '{}'", self.title))?;
        let when = TimeRange::try_from_start_end(start, end)
            .with_context(|| format!("Invalid time range for event '{}'", self.title))?;
        Ok(Event::new(self.title, when, self.attendees))
    }
}

#[derive(Serialize)]
struct SlotOutput {
    start: String,
    end: String,
    duration_minutes: u32,
}

impl From<&TimeRange> for SlotOutput {
    fn from(range: &TimeRange) -> Self {
        Self {
            start: format_clock(range.start()),
            end: format_clock(range.end()),
            duration_minutes: range.duration(),
        }
    }
}

#[derive(Serialize)]
struct ReportOutput {
    scope: AttendeeScope,
    slots: Vec<SlotOutput>,
}

impl From<&Availability> for ReportOutput {
    fn from(report: &Availability) -> Self {
        Self {
            scope: report.scope,
            slots: report.slots.iter().map(SlotOutput::from).collect(),
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Find {
            input,
            duration,
            json,
        } => {
            let (events, request) = load_input(input.as_deref())?;
            let request = match duration {
                Some(minutes) => request.with_duration(minutes),
                None => request,
            };

            let report = find_available_slots_with_report(&events, &request);

            if json {
                let out = serde_json::to_string_pretty(&ReportOutput::from(&report))?;
                println!("{}", out);
            } else {
                if report.scope == AttendeeScope::RequiredOnly {
                    eprintln!(
                        "note: no slot suits the optional attendees; showing required attendees only"
                    );
                }
                if report.slots.is_empty() {
                    println!("No available slots.");
                }
                for slot in &report.slots {
                    print_range(slot);
                }
            }
        }
        Commands::Busy { input, attendees } => {
            let (events, request) = load_input(input.as_deref())?;
            let people: BTreeSet<String> = if attendees.is_empty() {
                request.all_attendees()
            } else {
                attendees.into_iter().collect()
            };

            for range in &busy_periods(&events, &people) {
                print_range(range);
            }
        }
    }

    Ok(())
}

/// Install a stderr subscriber. `-v` flags win over `RUST_LOG`, which wins
/// over the `warn` default.
fn init_tracing(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_input(path: Option<&str>) -> Result<(Vec<Event>, MeetingRequest)> {
    let raw = read_input(path)?;
    let doc: InputDocument =
        serde_json::from_str(&raw).context("Failed to parse input document")?;
    let events = doc
        .events
        .into_iter()
        .map(EventInput::into_event)
        .collect::<Result<Vec<_>>>()?;
    debug!(events = events.len(), "loaded input document");
    Ok((events, doc.request))
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

fn print_range(range: &TimeRange) {
    println!(
        "{}-{} ({} min)",
        format_clock(range.start()),
        format_clock(range.end()),
        range.duration()
    );
}
