//! Error types for roombook-core operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookingError {
    /// The input was not a valid `HH:MM` wall-clock string.
    #[error("Invalid clock time: {0}")]
    InvalidClockTime(String),

    /// A minute-of-day value outside `0..1440`.
    #[error("Minute of day out of range: {0}")]
    MinuteOutOfRange(u32),

    /// An interval whose end does not come after its start.
    #[error("Invalid interval: start {start} must be before end {end}")]
    InvalidInterval { start: u16, end: u16 },
}

pub type Result<T> = std::result::Result<T, BookingError>;
