//! Wall-clock ↔ UTC instant mapping for one local day.
//!
//! Bookings are stored as UTC instants; the form and the timeline work in
//! local minutes of day. This module is the only place the two meet.
//! No handling beyond that mapping: a DST-ambiguous local time resolves to
//! the earliest valid instant, and a time in a spring-forward gap shifts to
//! the first instant after it.

use chrono::{DateTime, NaiveDate, TimeDelta, TimeZone, Timelike, Utc};
use chrono_tz::Tz;

use crate::interval::{clamp_to_day, TimeInterval, MINUTES_PER_DAY};

/// Convert a `(date, minute-of-day)` local wall-clock pair to a UTC instant.
///
/// Minute 1440 (an interval ending exactly at midnight) maps to 00:00 of
/// the following day; anything beyond that saturates at 23:59 of the
/// following day.
pub fn local_minute_to_instant(date: NaiveDate, minute: u16, tz: Tz) -> DateTime<Utc> {
    let (date, minute) = if minute >= MINUTES_PER_DAY {
        (
            date.succ_opt().unwrap_or(date),
            clamp_to_day(minute - MINUTES_PER_DAY),
        )
    } else {
        (date, minute)
    };
    let naive = date
        .and_hms_opt(u32::from(minute / 60), u32::from(minute % 60), 0)
        .expect("minute of day is always a valid wall-clock time");
    let local = match tz.from_local_datetime(&naive) {
        chrono::LocalResult::Single(dt) => dt,
        chrono::LocalResult::Ambiguous(earliest, _) => earliest,
        // Spring-forward gap: step past it minute by minute.
        chrono::LocalResult::None => {
            let mut probe = naive;
            loop {
                probe += TimeDelta::minutes(1);
                if let Some(dt) = tz.from_local_datetime(&probe).earliest() {
                    break dt;
                }
            }
        }
    };
    local.with_timezone(&Utc)
}

/// The local minute of day at which a UTC instant falls on the wall clock.
pub fn instant_to_local_minute(instant: DateTime<Utc>, tz: Tz) -> u16 {
    let local = instant.with_timezone(&tz);
    (local.hour() * 60 + local.minute()) as u16
}

/// Express a candidate interval for a given date as a pair of UTC instants.
pub fn candidate_instants(
    date: NaiveDate,
    interval: TimeInterval,
    tz: Tz,
) -> (DateTime<Utc>, DateTime<Utc>) {
    (
        local_minute_to_instant(date, interval.start_minute(), tz),
        local_minute_to_instant(date, interval.end_minute(), tz),
    )
}
