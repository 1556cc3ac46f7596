//! Tests for minute-of-day parsing and the form's time arithmetic.

use roombook_core::interval::{
    clamp_to_day, clock_label, default_end, latest_end, minute_of_day, PartialInterval,
    TimeInterval,
};
use roombook_core::BookingError;

#[test]
fn clock_strings_parse_to_minutes() {
    assert_eq!(minute_of_day("00:00").unwrap(), 0);
    assert_eq!(minute_of_day("09:00").unwrap(), 540);
    assert_eq!(minute_of_day("23:59").unwrap(), 1439);
}

#[test]
fn bad_clock_strings_are_rejected() {
    for input in ["", "9", "24:00", "12:60", "ab:cd", "12:34:56"] {
        assert!(
            matches!(minute_of_day(input), Err(BookingError::InvalidClockTime(_))),
            "{input:?} should not parse"
        );
    }
}

#[test]
fn intervals_are_built_from_clock_strings() {
    let interval = TimeInterval::from_clock_strings("09:00", "10:30").unwrap();
    assert_eq!(interval.start_minute(), 540);
    assert_eq!(interval.end_minute(), 630);
    assert_eq!(interval.duration_minutes(), 90);
}

#[test]
fn inverted_or_empty_intervals_are_rejected() {
    assert!(matches!(
        TimeInterval::new(600, 600),
        Err(BookingError::InvalidInterval { .. })
    ));
    assert!(matches!(
        TimeInterval::new(600, 540),
        Err(BookingError::InvalidInterval { .. })
    ));
}

#[test]
fn clamping_caps_at_the_last_minute() {
    assert_eq!(clamp_to_day(100), 100);
    assert_eq!(clamp_to_day(1439), 1439);
    assert_eq!(clamp_to_day(1440), 1439);
}

#[test]
fn default_end_is_start_plus_minimum() {
    assert_eq!(default_end(540), 555);
    // Late start: clamp to 23:59 rather than roll into the next day.
    assert_eq!(default_end(1430), 1439);
}

#[test]
fn latest_end_is_the_four_hour_guide() {
    assert_eq!(latest_end(540), 780);
    // A start after 20:00 clamps at 23:59.
    assert_eq!(latest_end(1260), 1439);
}

#[test]
fn partial_interval_completes_only_when_ordered() {
    assert_eq!(PartialInterval::new(None, None).complete(), None);
    assert_eq!(PartialInterval::new(Some(540), None).complete(), None);
    assert_eq!(PartialInterval::new(None, Some(600)).complete(), None);
    // End before start never finalizes.
    assert_eq!(PartialInterval::new(Some(600), Some(540)).complete(), None);

    let complete = PartialInterval::new(Some(540), Some(600)).complete().unwrap();
    assert_eq!(complete.duration_minutes(), 60);
}

#[test]
fn clock_labels_round_trip() {
    assert_eq!(clock_label(0), "00:00");
    assert_eq!(clock_label(555), "09:15");
    assert_eq!(clock_label(1439), "23:59");
}
