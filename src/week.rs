//! Weekday lookups and Sunday..Saturday week ranges.

use crate::{CalendarError, DAYS_PER_WEEK, Date, DateRange, WEEK_SPAN_DAYS, Weekday};

/// The first date strictly after `from` that falls on `target`.
///
/// When `from` already falls on `target` the result is one week later.
///
/// # Errors
/// Returns `CalendarError::OutOfRange` if the result is not representable.
pub fn next_weekday(target: Weekday, from: Date) -> Result<Date, CalendarError> {
    let start = from.weekday().sunday_ordinal();
    let days_ahead = DAYS_PER_WEEK - ((start + (DAYS_PER_WEEK - target.sunday_ordinal())) % DAYS_PER_WEEK);
    from.shift(i64::from(days_ahead))
}

/// The last date strictly before `from` that falls on `target`.
///
/// When `from` already falls on `target` the result is one week earlier.
///
/// # Errors
/// Returns `CalendarError::OutOfRange` if the result is not representable.
pub fn previous_weekday(target: Weekday, from: Date) -> Result<Date, CalendarError> {
    let start = from.weekday().sunday_ordinal();
    let days_back = DAYS_PER_WEEK - ((target.sunday_ordinal() + (DAYS_PER_WEEK - start)) % DAYS_PER_WEEK);
    from.shift(-i64::from(days_back))
}

/// The Sunday..Saturday week containing `date`. A Sunday starts its own week.
///
/// # Errors
/// Returns `CalendarError::OutOfRange` if the week is not representable.
pub fn current_week_range(date: Date) -> Result<DateRange, CalendarError> {
    let start = if date.weekday() == Weekday::Sunday {
        date
    } else {
        previous_weekday(Weekday::Sunday, date)?
    };
    week_from(start)
}

/// The full Sunday..Saturday week before the one containing `date`.
///
/// # Errors
/// Returns `CalendarError::OutOfRange` if the week is not representable.
pub fn previous_week_range(date: Date) -> Result<DateRange, CalendarError> {
    // Monday-first: Saturday is two days before this week's Monday.
    let days_since_saturday = match date.weekday() {
        Weekday::Sunday => 1,
        day => i64::from(day.monday_ordinal()) + 2,
    };
    let saturday = date.shift(-days_since_saturday)?;
    let sunday = saturday.shift(-WEEK_SPAN_DAYS)?;
    DateRange::new(sunday, saturday)
}

/// The Sunday..Saturday week starting on the first Sunday strictly after `date`.
///
/// Unlike [`current_week_range`], a Sunday input skips to the following week.
///
/// # Errors
/// Returns `CalendarError::OutOfRange` if the week is not representable.
pub fn next_week_range(date: Date) -> Result<DateRange, CalendarError> {
    let dow = date.weekday().sunday_ordinal();
    let days_until_sunday = DAYS_PER_WEEK - ((dow + DAYS_PER_WEEK) % DAYS_PER_WEEK);
    week_from(date.shift(i64::from(days_until_sunday))?)
}

fn week_from(sunday: Date) -> Result<DateRange, CalendarError> {
    DateRange::new(sunday, sunday.shift(WEEK_SPAN_DAYS)?)
}
