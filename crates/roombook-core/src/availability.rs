//! Per-room busy/free classification for a day and a candidate interval.
//!
//! Pure function over a [`DaySnapshot`]: no state, recomputed on every
//! change to the date or either time input. The result is advisory — the
//! remote store is the authority and re-checks on submission.

use chrono::{DateTime, Utc};

use crate::conflict::conflicts;
use crate::snapshot::DaySnapshot;

/// Classification of one room against the current candidate interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoomStatus {
    Free,
    Busy,
    /// The candidate interval is incomplete; no classification possible.
    Unknown,
}

/// Room-name → status map for one classification pass.
///
/// Preserves the room order it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusyMap {
    statuses: Vec<(String, RoomStatus)>,
}

impl BusyMap {
    /// Status of a room, `Unknown` for rooms that were not classified.
    pub fn status_of(&self, room: &str) -> RoomStatus {
        self.statuses
            .iter()
            .find(|(name, _)| name == room)
            .map(|(_, status)| *status)
            .unwrap_or(RoomStatus::Unknown)
    }

    pub fn is_busy(&self, room: &str) -> bool {
        self.status_of(room) == RoomStatus::Busy
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, RoomStatus)> {
        self.statuses
            .iter()
            .map(|(name, status)| (name.as_str(), *status))
    }
}

/// Classify every room as busy or free for a candidate instant range.
///
/// A room is busy iff any of its bookings in the snapshot conflicts with
/// the candidate. When `candidate` is `None` (start or end not yet set),
/// every room is `Unknown` rather than free.
pub fn classify_rooms(
    rooms: &[String],
    snapshot: &DaySnapshot,
    candidate: Option<(DateTime<Utc>, DateTime<Utc>)>,
) -> BusyMap {
    let statuses = rooms
        .iter()
        .map(|room| {
            let status = match candidate {
                None => RoomStatus::Unknown,
                Some((start, end)) => {
                    let busy = snapshot
                        .for_room(room)
                        .any(|b| conflicts(start, end, b.start, b.end));
                    if busy {
                        RoomStatus::Busy
                    } else {
                        RoomStatus::Free
                    }
                }
            };
            (room.clone(), status)
        })
        .collect();

    BusyMap { statuses }
}
