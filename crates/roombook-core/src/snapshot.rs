//! The read-only view of one day's bookings.
//!
//! A [`DaySnapshot`] is rebuilt wholesale from the remote store on every
//! date change or mutation; the engine never patches it incrementally.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// One booking row, as held by the remote store. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub id: i64,
    /// Room name; the opaque identity rooms are keyed by.
    pub room: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    /// Messaging handle of whoever holds the booking.
    pub owner_username: String,
    /// Dorm room of the owner, 3–4 digits.
    pub owner_room_number: String,
    pub reason: Option<String>,
}

/// All bookings fetched for one calendar day, any room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySnapshot {
    pub date: NaiveDate,
    bookings: Vec<Booking>,
}

impl DaySnapshot {
    /// Build a snapshot, ordering bookings by room then start time.
    pub fn new(date: NaiveDate, mut bookings: Vec<Booking>) -> Self {
        bookings.sort_by(|a, b| a.room.cmp(&b.room).then(a.start.cmp(&b.start)));
        Self { date, bookings }
    }

    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            bookings: Vec::new(),
        }
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// The day's bookings for one room, in start order.
    pub fn for_room<'a>(&'a self, room: &'a str) -> impl Iterator<Item = &'a Booking> {
        self.bookings.iter().filter(move |b| b.room == room)
    }
}
