//! # roombook-core
//!
//! Room-availability and time-selection engine for a shared-space booking
//! client. Given a date, a set of rooms, and the day's existing bookings,
//! it determines which rooms are free for a candidate time range, keeps the
//! room selection consistent as times change, projects a room's day onto a
//! normalized timeline, and gates a booking request before submission.
//!
//! Everything here is pure data-in/data-out; the HTTP transport, the
//! authentication header, and the presentation layer are the host's
//! problem. Client-side availability is advisory only — the remote store
//! is the authority on conflicts.
//!
//! ## Modules
//!
//! - [`interval`] — day-local minute ranges and the form's time arithmetic
//! - [`clock`] — wall-clock minute ↔ UTC instant mapping
//! - [`conflict`] — the strict half-open overlap predicate
//! - [`snapshot`] — the read-only view of one day's bookings
//! - [`availability`] — per-room busy/free classification
//! - [`selection`] — the chosen-room state machine
//! - [`timeline`] — normalized `[0, 1]` segment projection
//! - [`validate`] — the pre-submission booking gate
//! - [`api`] — wire types for the booking store's REST surface
//! - [`session`] — deletion confirmation and the post-mutation refresh barrier
//! - [`error`] — error types

pub mod api;
pub mod availability;
pub mod clock;
pub mod conflict;
pub mod error;
pub mod interval;
pub mod selection;
pub mod session;
pub mod snapshot;
pub mod timeline;
pub mod validate;

pub use availability::{classify_rooms, BusyMap, RoomStatus};
pub use conflict::{conflicts, overlaps};
pub use error::BookingError;
pub use interval::{PartialInterval, TimeInterval};
pub use selection::{Feedback, Selection, SelectionSignal};
pub use snapshot::{Booking, DaySnapshot};
pub use timeline::{project, Segment, SegmentInfo, SegmentKind};
pub use validate::{validate, BookingRequest, RejectionReason};
