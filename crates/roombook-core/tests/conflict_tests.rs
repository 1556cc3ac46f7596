//! Tests for the overlap predicate on both instants and minute intervals.

use chrono::{DateTime, TimeZone, Utc};
use roombook_core::interval::TimeInterval;
use roombook_core::{conflicts, overlaps};

/// Helper: a UTC instant at hour:minute on a fixed day.
fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 1, hour, minute, 0).unwrap()
}

fn iv(start: u16, end: u16) -> TimeInterval {
    TimeInterval::new(start, end).unwrap()
}

#[test]
fn overlapping_instants_conflict() {
    // A: 09:00-10:00, B: 09:30-10:30 → conflict
    assert!(conflicts(at(9, 0), at(10, 0), at(9, 30), at(10, 30)));
}

#[test]
fn disjoint_instants_do_not_conflict() {
    // A: 09:00-10:00, B: 11:00-12:00 → no conflict
    assert!(!conflicts(at(9, 0), at(10, 0), at(11, 0), at(12, 0)));
}

#[test]
fn touching_instants_do_not_conflict() {
    // One ends exactly when the other starts — back-to-back is allowed.
    assert!(!conflicts(at(9, 0), at(10, 0), at(10, 0), at(11, 0)));
    assert!(!conflicts(at(10, 0), at(11, 0), at(9, 0), at(10, 0)));
}

#[test]
fn contained_instants_conflict() {
    // B fully inside A.
    assert!(conflicts(at(9, 0), at(12, 0), at(10, 0), at(11, 0)));
}

#[test]
fn adjacent_minute_intervals_do_not_overlap() {
    // [0,60) and [60,120) share only the boundary minute.
    assert!(!overlaps(iv(0, 60), iv(60, 120)));
}

#[test]
fn overlapping_minute_intervals_overlap() {
    // [0,60) and [30,90) share [30,60).
    assert!(overlaps(iv(0, 60), iv(30, 90)));
}

#[test]
fn predicate_is_symmetric() {
    let cases = [
        (iv(0, 60), iv(30, 90)),
        (iv(0, 60), iv(60, 120)),
        (iv(540, 600), iv(550, 560)),
        (iv(100, 200), iv(300, 400)),
    ];
    for (a, b) in cases {
        assert_eq!(overlaps(a, b), overlaps(b, a), "{a:?} vs {b:?}");
    }
}
