//! Day-local minute intervals and the arithmetic the booking form needs.
//!
//! All times here are integer minutes of a local day (`0..1440`); intervals
//! are half-open `[start, end)`. Conversion between wall-clock minutes and
//! UTC instants lives in [`crate::clock`], not here.

use crate::error::{BookingError, Result};

/// Minutes in a civil day.
pub const MINUTES_PER_DAY: u16 = 1440;

/// The last representable minute of a day (23:59).
pub const LAST_MINUTE: u16 = 1439;

/// Shortest bookable duration, enforced at submission.
pub const MIN_BOOKING_MINUTES: u16 = 15;

/// Longest duration the booking form offers. A soft guide only: the
/// validator does not reject longer intervals, the remote store does.
pub const MAX_BOOKING_MINUTES: u16 = 240;

/// A half-open `[start, end)` range of minutes within one local day.
///
/// Construction guarantees `start < end` and `end <= 1440`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeInterval {
    start_minute: u16,
    end_minute: u16,
}

impl TimeInterval {
    /// Build an interval from start/end minutes of day.
    ///
    /// # Errors
    /// Returns `BookingError::InvalidInterval` if `start >= end`, and
    /// `BookingError::MinuteOutOfRange` if `end` exceeds 1440.
    pub fn new(start_minute: u16, end_minute: u16) -> Result<Self> {
        if end_minute > MINUTES_PER_DAY {
            return Err(BookingError::MinuteOutOfRange(end_minute as u32));
        }
        if start_minute >= end_minute {
            return Err(BookingError::InvalidInterval {
                start: start_minute,
                end: end_minute,
            });
        }
        Ok(Self {
            start_minute,
            end_minute,
        })
    }

    /// Build an interval from two `HH:MM` wall-clock strings.
    pub fn from_clock_strings(start: &str, end: &str) -> Result<Self> {
        Self::new(minute_of_day(start)?, minute_of_day(end)?)
    }

    pub fn start_minute(&self) -> u16 {
        self.start_minute
    }

    pub fn end_minute(&self) -> u16 {
        self.end_minute
    }

    pub fn duration_minutes(&self) -> u16 {
        self.end_minute - self.start_minute
    }
}

/// Parse an `HH:MM` wall-clock string into a minute of day.
///
/// # Errors
/// Returns `BookingError::InvalidClockTime` for anything that is not a
/// two-field `HH:MM` with hours `0..24` and minutes `0..60`.
pub fn minute_of_day(clock: &str) -> Result<u16> {
    let invalid = || BookingError::InvalidClockTime(clock.to_string());
    let (hours, minutes) = clock.split_once(':').ok_or_else(invalid)?;
    let hours: u16 = hours.parse().map_err(|_| invalid())?;
    let minutes: u16 = minutes.parse().map_err(|_| invalid())?;
    if hours >= 24 || minutes >= 60 {
        return Err(invalid());
    }
    Ok(hours * 60 + minutes)
}

/// Format a minute of day back to `HH:MM`.
pub fn clock_label(minute: u16) -> String {
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

/// Clamp a minute count to the last minute of the day (23:59).
pub fn clamp_to_day(minute: u16) -> u16 {
    minute.min(LAST_MINUTE)
}

/// Default end time the form pre-fills when only a start is chosen:
/// start plus the minimum duration, capped at 23:59.
pub fn default_end(start_minute: u16) -> u16 {
    clamp_to_day(start_minute.saturating_add(MIN_BOOKING_MINUTES))
}

/// Latest end time the form offers for a given start: start plus the
/// four-hour guide, capped at 23:59.
pub fn latest_end(start_minute: u16) -> u16 {
    clamp_to_day(start_minute.saturating_add(MAX_BOOKING_MINUTES))
}

/// The time range the user is still configuring; either field may be unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartialInterval {
    pub start: Option<u16>,
    pub end: Option<u16>,
}

impl PartialInterval {
    pub fn new(start: Option<u16>, end: Option<u16>) -> Self {
        Self { start, end }
    }

    /// The finalized interval, if both endpoints are set and ordered.
    pub fn complete(&self) -> Option<TimeInterval> {
        match (self.start, self.end) {
            (Some(start), Some(end)) => TimeInterval::new(start, end).ok(),
            _ => None,
        }
    }
}
