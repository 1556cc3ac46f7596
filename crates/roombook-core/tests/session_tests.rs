//! Tests for the deletion protocol and the post-mutation refresh barrier.

use roombook_core::session::{PendingConfirmation, RefreshBarrier, RefreshKind};

#[test]
fn confirming_a_deletion_yields_the_booking_id() {
    let pending = PendingConfirmation::request(42);
    assert_eq!(pending.booking_id(), 42);
    assert_eq!(pending.confirm(), 42);
}

#[test]
fn cancelling_a_deletion_has_no_effect() {
    // Consumes the pending value; there is nothing left to confirm.
    PendingConfirmation::request(42).cancel();
}

#[test]
fn barrier_settles_only_after_both_legs() {
    let mut barrier = RefreshBarrier::new();
    assert!(!barrier.is_settled());

    assert!(!barrier.complete(RefreshKind::OwnBookings));
    assert!(!barrier.is_settled(), "one leg is not enough");

    assert!(barrier.complete(RefreshKind::DayBookings));
    assert!(barrier.is_settled());
}

#[test]
fn barrier_order_does_not_matter() {
    let mut barrier = RefreshBarrier::new();
    barrier.complete(RefreshKind::DayBookings);
    assert!(!barrier.is_settled());
    barrier.complete(RefreshKind::OwnBookings);
    assert!(barrier.is_settled());
}

#[test]
fn repeated_completion_stays_latched() {
    let mut barrier = RefreshBarrier::new();
    barrier.complete(RefreshKind::OwnBookings);
    barrier.complete(RefreshKind::OwnBookings);
    assert!(!barrier.is_settled(), "same leg twice is still one leg");

    barrier.complete(RefreshKind::DayBookings);
    assert!(barrier.complete(RefreshKind::DayBookings));
}
