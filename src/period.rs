use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
    CalendarError, Date, DateRange, ParseError, current_month_range, current_week_range,
    next_month_range, next_week_range, parse_iso_date, prelude::*, previous_month_range,
    previous_week_range,
};

/// Granularity of a period: a Sunday..Saturday week or a calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[display(fmt = "week")]
    Week,
    #[display(fmt = "month")]
    Month,
}

impl Period {
    /// The period of this kind that contains `date`.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the period is not representable.
    pub fn containing(self, date: Date) -> Result<DateRange, CalendarError> {
        match self {
            Self::Week => current_week_range(date),
            Self::Month => current_month_range(date),
        }
    }

    /// The period of this kind that follows the one containing `date`.
    ///
    /// For weeks this is the week starting on the first Sunday strictly after
    /// `date`, so a Sunday input skips the week it starts.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the period is not representable.
    pub fn following(self, date: Date) -> Result<DateRange, CalendarError> {
        match self {
            Self::Week => next_week_range(date),
            Self::Month => next_month_range(date),
        }
    }

    /// The period of this kind that precedes the one containing `date`.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the period is not representable.
    pub fn preceding(self, date: Date) -> Result<DateRange, CalendarError> {
        match self {
            Self::Week => previous_week_range(date),
            Self::Month => previous_month_range(date),
        }
    }
}

impl FromStr for Period {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            kind if kind.eq_ignore_ascii_case("week") => Ok(Self::Week),
            kind if kind.eq_ignore_ascii_case("month") => Ok(Self::Month),
            _ => Err(CalendarError::UnknownPeriod(s.to_owned())),
        }
    }
}

impl<'de> Deserialize<'de> for Period {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A value that can stand in for a [`Date`]: the date itself, or ISO
/// `YYYY-MM-DD` text that is parsed on demand.
pub trait IntoDate {
    /// Converts `self` into a date.
    ///
    /// # Errors
    /// Returns a `ParseError` when text does not hold a valid ISO date.
    fn into_date(self) -> Result<Date, ParseError>;
}

impl IntoDate for Date {
    fn into_date(self) -> Result<Date, ParseError> {
        Ok(self)
    }
}

impl IntoDate for NaiveDate {
    fn into_date(self) -> Result<Date, ParseError> {
        Ok(Date::from(self))
    }
}

impl IntoDate for &str {
    fn into_date(self) -> Result<Date, ParseError> {
        parse_iso_date(self)
    }
}

impl IntoDate for String {
    fn into_date(self) -> Result<Date, ParseError> {
        parse_iso_date(&self)
    }
}

impl IntoDate for &String {
    fn into_date(self) -> Result<Date, ParseError> {
        parse_iso_date(self)
    }
}

/// Consecutive periods of one kind covering `start` through `end`.
///
/// The first entry is the period containing `start`. Further periods are
/// appended while the last entry ends strictly before `end`, so the result is
/// never empty and its last entry always reaches `end`. If `start` is after
/// `end` only the period containing `start` is returned.
///
/// # Errors
/// - `CalendarError::Parse` if `start` or `end` is malformed text
/// - `CalendarError::OutOfRange` if a period is not representable
pub fn period_range<S, E>(period: Period, start: S, end: E) -> Result<Vec<DateRange>, CalendarError>
where
    S: IntoDate,
    E: IntoDate,
{
    let start = start.into_date()?;
    let end = end.into_date()?;
    tracing::debug!(%period, %start, %end, "Building period range");

    let mut current = period.containing(start)?;
    let mut periods = vec![current];
    while current.end() < end {
        current = period.following(current.end())?;
        tracing::trace!(%current, "Appended period");
        periods.push(current);
    }

    tracing::debug!("Built {} {} periods", periods.len(), period);
    Ok(periods)
}

/// Same as [`period_range`], with the period kind given by name (`week` or `month`).
///
/// # Errors
/// Returns `CalendarError::UnknownPeriod` for any other name, otherwise the
/// errors of [`period_range`].
pub fn period_range_named<S, E>(kind: &str, start: S, end: E) -> Result<Vec<DateRange>, CalendarError>
where
    S: IntoDate,
    E: IntoDate,
{
    period_range(kind.parse()?, start, end)
}
