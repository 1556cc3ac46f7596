//! Wire types for the booking store's REST surface.
//!
//! Serialization shapes only — the HTTP transport and the credential
//! header live with the host, not here.
//!
//! Endpoints these types map onto:
//!
//! - `GET /api/rooms` → `Vec<String>`
//! - `GET /api/my-bookings` → `Vec<BookingRecord>`
//! - `GET /api/bookings-by-date?date=YYYY-MM-DD` → `Vec<BookingRecord>`
//! - `POST /api/book` with a [`BookingCreate`] body
//! - `DELETE /api/booking/{id}`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::snapshot::Booking;
use crate::validate::BookingRequest;

/// Request body for `POST /api/book`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingCreate {
    pub room: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub user_room_number: String,
    pub reason: Option<String>,
}

impl From<BookingRequest> for BookingCreate {
    fn from(request: BookingRequest) -> Self {
        Self {
            room: request.room,
            start_time: request.start,
            end_time: request.end,
            user_room_number: request.owner_room_number,
            reason: request.reason,
        }
    }
}

/// The `user` object nested in booking responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingOwner {
    pub username: String,
}

/// One booking row as returned by the list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingRecord {
    pub id: i64,
    pub room: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub user_room_number: String,
    #[serde(default)]
    pub reason: Option<String>,
    pub user: BookingOwner,
}

impl BookingRecord {
    /// Convert a wire row into the snapshot's booking shape.
    pub fn into_booking(self) -> Booking {
        Booking {
            id: self.id,
            room: self.room,
            start: self.start_time,
            end: self.end_time,
            owner_username: self.user.username,
            owner_room_number: self.user_room_number,
            reason: self.reason,
        }
    }
}

/// Error payload the store returns on failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

/// Human-readable message for a failed call: the server's `detail` verbatim,
/// or a generic status line when the body carries none.
pub fn error_message(status: u16, body: &ErrorBody) -> String {
    match &body.detail {
        Some(detail) if !detail.is_empty() => detail.clone(),
        _ => format!("Error: status {status}"),
    }
}
