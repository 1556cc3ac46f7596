//! `roombook` CLI — inspect room availability, timelines, and booking
//! requests from a day-snapshot file.
//!
//! ## Usage
//!
//! ```sh
//! # Which rooms are free for 09:10-09:20? (day snapshot from file or stdin)
//! roombook availability -i day.json --start 09:10 --end 09:20
//!
//! # Project one room's day onto the normalized timeline
//! roombook timeline -i day.json --room Tennis --start 12:00 --end 13:00
//!
//! # Validate a booking request and print the POST body
//! roombook validate -i day.json --room Tennis --start 12:00 --end 13:00 \
//!     --room-number 1204 --reason "study group"
//! ```
//!
//! The snapshot document mirrors what `GET /api/bookings-by-date` returns,
//! wrapped with the date and room list:
//! `{"date": "2026-03-01", "rooms": ["Tennis"], "bookings": [...]}`.

use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use chrono_tz::Tz;
use clap::{Parser, Subcommand};
use serde::Deserialize;
use std::io::{self, Read};

use roombook_core::api::BookingRecord;
use roombook_core::clock::candidate_instants;
use roombook_core::interval::minute_of_day;
use roombook_core::{
    classify_rooms, project, validate, DaySnapshot, PartialInterval, RoomStatus, SegmentKind,
    Selection,
};

#[derive(Parser)]
#[command(
    name = "roombook",
    version,
    about = "Room-availability and booking-request inspector"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify every room as free or busy for a candidate time range
    Availability {
        /// Day snapshot JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Candidate start time, HH:MM local
        #[arg(long)]
        start: Option<String>,
        /// Candidate end time, HH:MM local
        #[arg(long)]
        end: Option<String>,
        /// IANA timezone of the local wall clock
        #[arg(long, default_value = "UTC")]
        timezone: String,
    },
    /// Project one room's bookings onto the normalized day track
    Timeline {
        /// Day snapshot JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Room to project
        #[arg(long)]
        room: String,
        /// Candidate start time, HH:MM local
        #[arg(long)]
        start: Option<String>,
        /// Candidate end time, HH:MM local
        #[arg(long)]
        end: Option<String>,
        /// IANA timezone of the local wall clock
        #[arg(long, default_value = "UTC")]
        timezone: String,
    },
    /// Validate a booking request and print the POST /api/book body
    Validate {
        /// Day snapshot JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Room to book
        #[arg(long)]
        room: String,
        /// Start time, HH:MM local
        #[arg(long)]
        start: String,
        /// End time, HH:MM local
        #[arg(long)]
        end: String,
        /// Your room number (3-4 digits)
        #[arg(long)]
        room_number: String,
        /// Optional booking reason
        #[arg(long)]
        reason: Option<String>,
        /// IANA timezone of the local wall clock
        #[arg(long, default_value = "UTC")]
        timezone: String,
    },
}

/// The on-disk day snapshot: the `bookings-by-date` response plus the date
/// it was fetched for and the room list from `/api/rooms`.
#[derive(Deserialize)]
struct DayFile {
    date: NaiveDate,
    rooms: Vec<String>,
    bookings: Vec<BookingRecord>,
}

impl DayFile {
    fn snapshot(&self) -> DaySnapshot {
        DaySnapshot::new(
            self.date,
            self.bookings.iter().cloned().map(|b| b.into_booking()).collect(),
        )
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Availability {
            input,
            start,
            end,
            timezone,
        } => {
            let day = read_day_file(input.as_deref())?;
            let tz = parse_timezone(&timezone)?;
            let candidate = parse_partial(start.as_deref(), end.as_deref())?;

            let instants = candidate
                .complete()
                .map(|interval| candidate_instants(day.date, interval, tz));
            let map = classify_rooms(&day.rooms, &day.snapshot(), instants);

            for (room, status) in map.iter() {
                let label = match status {
                    RoomStatus::Free => "free",
                    RoomStatus::Busy => "busy",
                    RoomStatus::Unknown => "unknown",
                };
                println!("{room}: {label}");
            }
        }
        Commands::Timeline {
            input,
            room,
            start,
            end,
            timezone,
        } => {
            let day = read_day_file(input.as_deref())?;
            let tz = parse_timezone(&timezone)?;
            let candidate = parse_partial(start.as_deref(), end.as_deref())?;

            let selection = Selection::Selected(room);
            let segments = project(&selection, Some(day.date), &day.snapshot(), candidate, tz);

            for segment in &segments {
                let offset = segment.offset_fraction * 100.0;
                let width = segment.width_fraction * 100.0;
                match &segment.kind {
                    SegmentKind::Booking(info) => {
                        let mut line = format!(
                            "{offset:6.2}% +{width:5.2}%  {}  @{} (room {})",
                            info.time_range_label(),
                            info.owner_username,
                            info.owner_room_number
                        );
                        if let Some(reason) = &info.reason {
                            line.push_str(&format!(" — {reason}"));
                        }
                        println!("{line}");
                    }
                    SegmentKind::Candidate => {
                        println!("{offset:6.2}% +{width:5.2}%  your selection");
                    }
                }
            }
        }
        Commands::Validate {
            input,
            room,
            start,
            end,
            room_number,
            reason,
            timezone,
        } => {
            let day = read_day_file(input.as_deref())?;
            let tz = parse_timezone(&timezone)?;
            let interval = roombook_core::TimeInterval::from_clock_strings(&start, &end)
                .context("Invalid time range")?;

            let candidate = candidate_instants(day.date, interval, tz);
            let busy = classify_rooms(&day.rooms, &day.snapshot(), Some(candidate));
            // Behave like a stale UI selection: claim the room and let the
            // validator's busy re-check decide.
            let selection = Selection::Selected(room);

            match validate(
                &selection,
                &busy,
                interval,
                day.date,
                tz,
                &room_number,
                reason.as_deref(),
            ) {
                Ok(request) => {
                    let body = roombook_core::api::BookingCreate::from(request);
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
                Err(reason) => bail!("Rejected: {reason}"),
            }
        }
    }

    Ok(())
}

fn parse_timezone(timezone: &str) -> Result<Tz> {
    timezone
        .parse()
        .map_err(|_| anyhow::anyhow!("Unknown timezone: {timezone}"))
}

fn parse_partial(start: Option<&str>, end: Option<&str>) -> Result<PartialInterval> {
    let start = start
        .map(minute_of_day)
        .transpose()
        .context("Invalid --start time")?;
    let end = end
        .map(minute_of_day)
        .transpose()
        .context("Invalid --end time")?;
    Ok(PartialInterval::new(start, end))
}

fn read_day_file(path: Option<&str>) -> Result<DayFile> {
    let raw = match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            buf
        }
    };
    serde_json::from_str(&raw).context("Failed to parse day snapshot JSON")
}
