//! Projects one room's day onto a normalized horizontal track.
//!
//! Every segment is placed at `start_minute / 1440` with width
//! `(end - start) / 1440`, in local wall-clock minutes. Output is pure
//! data; a presentation layer binds it to visuals. Nothing here persists:
//! the whole list is recomputed on every relevant change.

use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::clock::instant_to_local_minute;
use crate::interval::{clock_label, PartialInterval, MINUTES_PER_DAY};
use crate::selection::Selection;
use crate::snapshot::DaySnapshot;

/// Disclosure metadata for a booked segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentInfo {
    /// Owner's messaging handle; doubles as the contact-link identity.
    pub owner_username: String,
    pub owner_room_number: String,
    pub start_minute: u16,
    pub end_minute: u16,
    pub reason: Option<String>,
}

impl SegmentInfo {
    /// `HH:MM – HH:MM` label for hover/tap disclosure.
    pub fn time_range_label(&self) -> String {
        format!(
            "{} – {}",
            clock_label(self.start_minute),
            clock_label(self.end_minute)
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SegmentKind {
    /// An existing booking on the selected room.
    Booking(SegmentInfo),
    /// The user's own pending interval, rendered distinctly.
    Candidate,
}

/// One renderable span on the track, positioned in `[0, 1]` fractions.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub offset_fraction: f64,
    pub width_fraction: f64,
    pub kind: SegmentKind,
}

fn fractions(start_minute: u16, end_minute: u16) -> (f64, f64) {
    let day = f64::from(MINUTES_PER_DAY);
    (
        f64::from(start_minute) / day,
        f64::from(end_minute.saturating_sub(start_minute)) / day,
    )
}

/// Project the selected room's bookings plus the candidate interval.
///
/// Existing bookings have their UTC instants converted to local minutes of
/// day for placement. The candidate overlay appears only when both its
/// endpoints are set. With no room selected or no date chosen, the
/// projection is empty.
pub fn project(
    selection: &Selection,
    date: Option<NaiveDate>,
    snapshot: &DaySnapshot,
    candidate: PartialInterval,
    tz: Tz,
) -> Vec<Segment> {
    let Some(room) = selection.selected_room() else {
        return Vec::new();
    };
    if date.is_none() {
        return Vec::new();
    }

    let mut segments: Vec<Segment> = snapshot
        .for_room(room)
        .map(|booking| {
            let start_minute = instant_to_local_minute(booking.start, tz);
            let end_minute = instant_to_local_minute(booking.end, tz);
            let (offset_fraction, width_fraction) = fractions(start_minute, end_minute);
            Segment {
                offset_fraction,
                width_fraction,
                kind: SegmentKind::Booking(SegmentInfo {
                    owner_username: booking.owner_username.clone(),
                    owner_room_number: booking.owner_room_number.clone(),
                    start_minute,
                    end_minute,
                    reason: booking.reason.clone(),
                }),
            }
        })
        .collect();

    if let (Some(start), Some(end)) = (candidate.start, candidate.end) {
        let (offset_fraction, width_fraction) = fractions(start, end);
        segments.push(Segment {
            offset_fraction,
            width_fraction,
            kind: SegmentKind::Candidate,
        });
    }

    segments
}
