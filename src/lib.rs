//! Sunday-first week and month boundary arithmetic.
//!
//! Every operation is a pure function of a reference [`Date`]: locate the
//! next or previous occurrence of a weekday, resolve the week or month that
//! contains a date (or the one before or after it), and walk consecutive
//! periods between two dates.
//!
//! ```
//! use calspan::{Date, Period, Weekday, next_weekday, period_range};
//!
//! let monday = Date::new(2010, 7, 5)?;
//! assert_eq!(next_weekday(Weekday::Monday, monday)?, Date::new(2010, 7, 12)?);
//!
//! let months = period_range(Period::Month, "2010-07-05", "2010-11-05")?;
//! assert_eq!(months.len(), 5);
//! # Ok::<(), calspan::CalendarError>(())
//! ```

mod consts;
mod error;
mod month;
mod offset;
mod period;
mod prelude;
mod range;
#[cfg(test)]
mod test_utils;
mod week;
mod weekday;

pub use consts::*;
pub use error::{CalendarError, ParseError};
pub use month::{current_month_range, next_month_range, previous_month_range};
pub use offset::{days_ago, days_ahead, parse_date, parse_iso_date};
pub use period::{IntoDate, Period, period_range, period_range_named};
pub use range::DateRange;
pub use week::{
    current_week_range, next_week_range, next_weekday, previous_week_range, previous_weekday,
};
pub use weekday::Weekday;

use crate::prelude::*;
use chrono::{Datelike, Days, NaiveDate};
use std::fmt::Write;
use std::str::FromStr;

/// A calendar date (year, month, day) at midnight, with no time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, From, Into)]
#[display(fmt = "{}", "_0.format(ISO_DATE_FORMAT)")]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a date from its calendar components.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidDate` if the components do not name a real day
    /// (month 13, February 30, ...).
    pub fn new(year: i32, month: u32, day: u32) -> Result<Self, ParseError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| ParseError::InvalidDate {
                input: format!("{year:04}-{month:02}-{day:02}"),
            })
    }

    /// Wraps an existing chrono date
    pub const fn from_naive(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Returns the underlying chrono date
    pub const fn naive(self) -> NaiveDate {
        self.0
    }

    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Month of the year (1..=12)
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Day of the month (1..=31)
    pub fn day(self) -> u32 {
        self.0.day()
    }

    pub fn weekday(self) -> Weekday {
        self.0.weekday().into()
    }

    pub fn is_leap_year(self) -> bool {
        NaiveDate::from_ymd_opt(self.year(), FEBRUARY, FEBRUARY_DAYS_LEAP).is_some()
    }

    /// Number of days in this date's month, accounting for leap years.
    ///
    /// # Errors
    /// Propagates [`days_in_month`] failures; none occur for a constructed date.
    pub fn days_in_month(self) -> Result<u32, CalendarError> {
        Ok(days_in_month(self.year(), self.month())?)
    }

    /// First day of this date's month.
    ///
    /// # Errors
    /// Returns `CalendarError::Parse` if the day cannot be built.
    pub fn first_of_month(self) -> Result<Self, CalendarError> {
        Ok(Self::new(self.year(), self.month(), MIN_DAY)?)
    }

    /// Last day of this date's month.
    ///
    /// # Errors
    /// Returns `CalendarError::Parse` if the day cannot be built.
    pub fn last_of_month(self) -> Result<Self, CalendarError> {
        Ok(Self::new(self.year(), self.month(), self.days_in_month()?)?)
    }

    /// Moves the date by a signed number of days.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the result falls outside chrono's
    /// representable calendar.
    pub fn shift(self, days: i64) -> Result<Self, CalendarError> {
        let step = Days::new(days.unsigned_abs());
        let shifted = if days < 0 {
            self.0.checked_sub_days(step)
        } else {
            self.0.checked_add_days(step)
        };
        shifted.map(Self).ok_or(CalendarError::OutOfRange { date: self, days })
    }

    /// Signed number of days from `self` to `other`
    pub fn days_until(self, other: Self) -> i64 {
        other.0.signed_duration_since(self.0).num_days()
    }

    /// Renders the date with a strftime-style format string.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidFormat` if the format string contains an
    /// unknown specifier.
    pub fn format_with(self, fmt: &str) -> Result<String, ParseError> {
        let mut out = String::new();
        write!(out, "{}", self.0.format(fmt)).map_err(|_| ParseError::InvalidFormat(fmt.to_owned()))?;
        Ok(out)
    }
}

impl FromStr for Date {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_iso_date(s)
    }
}

impl serde::Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// Helper functions

/// Number of days in `month` of `year`, taken from chrono's calendar.
///
/// # Errors
/// Returns `ParseError::InvalidDate` if `month` is outside `1..=12` or the
/// month is not representable.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, ParseError> {
    let invalid = || ParseError::InvalidDate {
        input: format!("{year:04}-{month:02}"),
    };
    let first = NaiveDate::from_ymd_opt(year, month, MIN_DAY).ok_or_else(invalid)?;
    (SHORTEST_MONTH_DAYS..=LONGEST_MONTH_DAYS)
        .rev()
        .find(|&day| first.with_day(day).is_some())
        .ok_or_else(invalid)
}
