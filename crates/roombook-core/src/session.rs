//! Multi-step protocols the host drives between network calls.
//!
//! Two pieces of pure orchestration state:
//!
//! - [`PendingConfirmation`]: deletion is a two-step protocol. The host asks
//!   its confirm dialog asynchronously; the delete effect is only produced
//!   by an explicit [`PendingConfirmation::confirm`].
//! - [`RefreshBarrier`]: after a successful submission or deletion, the two
//!   refresh fetches (own bookings, day bookings) run concurrently, and the
//!   UI only settles once BOTH have completed.

/// A deletion awaiting the user's confirmation.
///
/// Dropping the value (or calling [`cancel`](Self::cancel)) abandons the
/// deletion with no effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingConfirmation {
    booking_id: i64,
}

impl PendingConfirmation {
    /// First step: the user tapped delete on a booking.
    pub fn request(booking_id: i64) -> Self {
        Self { booking_id }
    }

    pub fn booking_id(&self) -> i64 {
        self.booking_id
    }

    /// Second step: the user confirmed. Yields the id to delete remotely.
    pub fn confirm(self) -> i64 {
        self.booking_id
    }

    /// The user backed out; nothing happens.
    pub fn cancel(self) {}
}

/// Which of the two post-mutation refresh fetches completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshKind {
    OwnBookings,
    DayBookings,
}

/// Combined-completion barrier over the two refresh fetches.
///
/// Not a race: the settled state is reached only after both legs report in.
/// A leg completing twice stays latched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RefreshBarrier {
    own_done: bool,
    day_done: bool,
}

impl RefreshBarrier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one leg's completion; returns whether the barrier is now down.
    pub fn complete(&mut self, kind: RefreshKind) -> bool {
        match kind {
            RefreshKind::OwnBookings => self.own_done = true,
            RefreshKind::DayBookings => self.day_done = true,
        }
        self.is_settled()
    }

    pub fn is_settled(&self) -> bool {
        self.own_done && self.day_done
    }
}
