//! Tests for the REST wire types and error-detail fallback.

use chrono::{NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use roombook_core::api::{error_message, BookingCreate, BookingRecord, ErrorBody};
use roombook_core::clock::candidate_instants;
use roombook_core::interval::TimeInterval;
use roombook_core::{classify_rooms, validate, DaySnapshot, Selection};

const TZ: Tz = chrono_tz::UTC;

#[test]
fn booking_rows_deserialize_from_the_store_shape() {
    let json = r#"{
        "id": 12,
        "room": "Tennis",
        "start_time": "2026-03-01T09:00:00Z",
        "end_time": "2026-03-01T10:00:00Z",
        "user_room_number": "1204",
        "reason": null,
        "user": {"username": "sasha"}
    }"#;

    let record: BookingRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.id, 12);
    assert_eq!(record.user.username, "sasha");

    let booking = record.into_booking();
    assert_eq!(booking.room, "Tennis");
    assert_eq!(booking.owner_username, "sasha");
    assert_eq!(booking.start, Utc.with_ymd_and_hms(2026, 3, 1, 9, 0, 0).unwrap());
    assert_eq!(booking.reason, None);
}

#[test]
fn a_validated_request_becomes_the_post_body() {
    let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    let interval = TimeInterval::new(600, 660).unwrap();
    let candidate = candidate_instants(date, interval, TZ);
    let busy = classify_rooms(
        &["Tennis".to_string()],
        &DaySnapshot::empty(date),
        Some(candidate),
    );
    let selection = Selection::Selected("Tennis".to_string());

    let request = validate(&selection, &busy, interval, date, TZ, "1204", Some("study"))
        .unwrap();
    let body = BookingCreate::from(request);

    let json = serde_json::to_value(&body).unwrap();
    assert_eq!(json["room"], "Tennis");
    assert_eq!(json["user_room_number"], "1204");
    assert_eq!(json["reason"], "study");
    assert_eq!(json["start_time"], "2026-03-01T10:00:00Z");
    assert_eq!(json["end_time"], "2026-03-01T11:00:00Z");
}

#[test]
fn server_detail_is_surfaced_verbatim() {
    let body: ErrorBody =
        serde_json::from_str(r#"{"detail": "Room already booked for this time"}"#).unwrap();
    assert_eq!(
        error_message(400, &body),
        "Room already booked for this time"
    );
}

#[test]
fn missing_detail_falls_back_to_the_status_line() {
    let body: ErrorBody = serde_json::from_str("{}").unwrap();
    assert_eq!(error_message(502, &body), "Error: status 502");

    let body = ErrorBody {
        detail: Some(String::new()),
    };
    assert_eq!(error_message(403, &body), "Error: status 403");
}
