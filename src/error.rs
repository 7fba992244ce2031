//! Error types for calspan.

use crate::Date;
use crate::prelude::*;

/// Failure to turn text into a [`Date`].
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ParseError {
    #[display(fmt = "Empty date string")]
    EmptyInput,
    #[display(fmt = "Date '{input}' does not match format '{format}'")]
    FormatMismatch { input: String, format: String },
    #[display(fmt = "Date '{input}' is not a valid calendar date")]
    InvalidDate { input: String },
    #[display(fmt = "Invalid date format string: '{_0}'")]
    InvalidFormat(String),
}

impl std::error::Error for ParseError {}

/// Error type for all fallible calendar operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CalendarError {
    /// Input text could not be parsed as a date.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Weekday name outside the seven recognized English names.
    #[error("Unknown weekday: '{0}'")]
    UnknownWeekday(String),

    /// Sunday-first weekday ordinal outside `0..=6`.
    #[error("Invalid weekday ordinal: {0} (must be 0-6)")]
    InvalidWeekdayOrdinal(u8),

    /// Period kind other than week or month.
    #[error("Unknown period kind: '{0}' (expected 'week' or 'month')")]
    UnknownPeriod(String),

    /// Start date is after end date.
    #[error("Invalid date range: start ({start}) is after end ({end})")]
    InvalidRange { start: Date, end: Date },

    /// Shifting a date left the representable calendar.
    #[error("Date {date} shifted by {days} days is out of range")]
    OutOfRange { date: Date, days: i64 },
}

impl CalendarError {
    /// Whether the error was caused by an unrecognized argument value
    /// (weekday name or ordinal, period kind).
    pub const fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::UnknownWeekday(_) | Self::InvalidWeekdayOrdinal(_) | Self::UnknownPeriod(_)
        )
    }
}
