//! The pre-submission gate for a booking request.
//!
//! Pure: no network, no storage. A passing result is still only advisory —
//! the remote store re-checks conflicts authoritatively.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;
use thiserror::Error;

use crate::availability::BusyMap;
use crate::clock::candidate_instants;
use crate::interval::{TimeInterval, MIN_BOOKING_MINUTES};
use crate::selection::Selection;

/// Why a booking request was rejected, in the order the checks run.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    #[error("Please pick a free room first.")]
    NoRoomSelected,

    #[error("The chosen room is taken at this time. Pick another time or room.")]
    RoomBusy,

    #[error("Bookings must be at least {MIN_BOOKING_MINUTES} minutes long.")]
    TooShort,

    #[error("Enter a valid room number (3 or 4 digits).")]
    BadRoomNumber,
}

/// A validated booking request, ready to be sent to the remote store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub room: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub owner_room_number: String,
    pub reason: Option<String>,
}

fn valid_room_number(room_number: &str) -> bool {
    (3..=4).contains(&room_number.len()) && room_number.bytes().all(|b| b.is_ascii_digit())
}

/// Gate a submission. Checks run in a fixed order and stop at the first
/// failure; identical inputs always produce the identical result.
///
/// The busy re-check runs even though selection already excludes busy
/// rooms: the selection may be stale by submission time.
pub fn validate(
    selection: &Selection,
    busy: &BusyMap,
    interval: TimeInterval,
    date: NaiveDate,
    tz: Tz,
    owner_room_number: &str,
    reason: Option<&str>,
) -> Result<BookingRequest, RejectionReason> {
    let Some(room) = selection.selected_room() else {
        return Err(RejectionReason::NoRoomSelected);
    };
    if busy.is_busy(room) {
        return Err(RejectionReason::RoomBusy);
    }
    if interval.duration_minutes() < MIN_BOOKING_MINUTES {
        return Err(RejectionReason::TooShort);
    }
    if !valid_room_number(owner_room_number) {
        return Err(RejectionReason::BadRoomNumber);
    }

    let (start, end) = candidate_instants(date, interval, tz);
    let reason = reason
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(str::to_string);

    Ok(BookingRequest {
        room: room.to_string(),
        start,
        end,
        owner_room_number: owner_room_number.to_string(),
        reason,
    })
}
