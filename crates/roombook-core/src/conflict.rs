//! The overlap predicate every availability decision reduces to.
//!
//! Intervals are half-open: two bookings where one ends exactly when the
//! other starts do NOT conflict, so back-to-back bookings with zero gap
//! are allowed.

use chrono::{DateTime, Utc};

use crate::interval::TimeInterval;

/// Do two instant ranges conflict?
///
/// Defined as `a.start < b.end && b.start < a.end` — strict on both ends,
/// which excludes the adjacent (touching) case.
pub fn conflicts(
    a_start: DateTime<Utc>,
    a_end: DateTime<Utc>,
    b_start: DateTime<Utc>,
    b_end: DateTime<Utc>,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// The same predicate on day-local minute intervals.
pub fn overlaps(a: TimeInterval, b: TimeInterval) -> bool {
    a.start_minute() < b.end_minute() && b.start_minute() < a.end_minute()
}
