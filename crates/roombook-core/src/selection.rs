//! Which room is currently chosen, and when that choice must be dropped.
//!
//! A small state machine: `Unselected` or `Selected(room)`. Transitions
//! consume the current state and return the next one plus an optional
//! [`SelectionSignal`] for the host to surface. No other component writes
//! selection state.

use crate::availability::{BusyMap, RoomStatus};

/// Tactile feedback kind, passed through to the host's haptic capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Success,
    Warning,
    Error,
}

/// A user-facing notice paired with its feedback kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionSignal {
    pub notice: String,
    pub feedback: Feedback,
}

/// The current room choice.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Unselected,
    Selected(String),
}

impl Selection {
    pub fn selected_room(&self) -> Option<&str> {
        match self {
            Selection::Unselected => None,
            Selection::Selected(room) => Some(room),
        }
    }

    /// React to the user tapping a room.
    ///
    /// A room currently classified busy is an ignored click. Free (or
    /// not-yet-classified) rooms become the selection; re-selecting the
    /// already-chosen room is idempotent.
    pub fn select(self, room: &str, busy: &BusyMap) -> Self {
        if busy.status_of(room) == RoomStatus::Busy {
            return self;
        }
        Selection::Selected(room.to_string())
    }

    /// Re-check the selection after a time or date change.
    ///
    /// If the chosen room is now busy for the new candidate interval, the
    /// selection is cleared and a warning signal is emitted — exactly once,
    /// since the next call starts from `Unselected`.
    pub fn revalidate(self, busy: &BusyMap) -> (Self, Option<SelectionSignal>) {
        match self {
            Selection::Selected(room) if busy.is_busy(&room) => {
                let signal = SelectionSignal {
                    notice: "The room is no longer available for the new time. Pick another one."
                        .to_string(),
                    feedback: Feedback::Warning,
                };
                (Selection::Unselected, Some(signal))
            }
            other => (other, None),
        }
    }

    /// Explicit cancel, or the form reset after a successful submission.
    pub fn reset(self) -> Self {
        Selection::Unselected
    }
}
