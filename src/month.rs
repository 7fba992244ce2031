//! Calendar month ranges.

use crate::{CalendarError, Date, DateRange};

/// First and last day of the month containing `date`.
///
/// # Errors
/// Never fails for a valid date; the `Result` keeps the resolvers interchangeable.
pub fn current_month_range(date: Date) -> Result<DateRange, CalendarError> {
    DateRange::new(date.first_of_month()?, date.last_of_month()?)
}

/// First and last day of the month before the one containing `date`.
///
/// # Errors
/// Returns `CalendarError::OutOfRange` if `date` is in the earliest representable month.
pub fn previous_month_range(date: Date) -> Result<DateRange, CalendarError> {
    let last = date.first_of_month()?.shift(-1)?;
    DateRange::new(last.first_of_month()?, last)
}

/// First and last day of the month after the one containing `date`.
///
/// # Errors
/// Returns `CalendarError::OutOfRange` if `date` is in the latest representable month.
pub fn next_month_range(date: Date) -> Result<DateRange, CalendarError> {
    let remaining = date.days_in_month()? - date.day() + 1;
    let first = date.shift(i64::from(remaining))?;
    DateRange::new(first, first.last_of_month()?)
}
