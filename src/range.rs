use std::{cmp::Ordering, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{CalendarError, Date, ParseError, RANGE_SEPARATOR, prelude::*};

/// Inclusive span between two dates, bounding a week or a month.
/// The start date is always less than or equal to the end date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{start}/{end}")]
pub struct DateRange {
    start: Date,
    end:   Date,
}

impl DateRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidRange` if start > end.
    pub fn new(start: Date, end: Date) -> Result<Self, CalendarError> {
        if start > end {
            return Err(CalendarError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// First day of the range
    pub const fn start(&self) -> Date {
        self.start
    }

    /// Last day of the range (inclusive)
    pub const fn end(&self) -> Date {
        self.end
    }

    /// Returns both start and end dates as a tuple
    pub const fn dates(&self) -> (Date, Date) {
        (self.start, self.end)
    }

    /// Number of days covered, counting both ends
    pub fn num_days(&self) -> i64 {
        self.start.days_until(self.end) + 1
    }

    /// Checks if the range contains a given date
    pub fn contains(&self, date: Date) -> bool {
        self.start <= date && date <= self.end
    }

    /// Checks if this range shares at least one day with another range
    pub fn overlaps(&self, other: &Self) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Checks if this range is completely contained within another range
    pub fn is_within(&self, other: &Self) -> bool {
        other.start <= self.start && self.end <= other.end
    }

    /// Renders both ends with a strftime-style format string.
    ///
    /// # Errors
    /// Returns `ParseError::InvalidFormat` if the format string is malformed.
    pub fn format_with(&self, fmt: &str) -> Result<(String, String), ParseError> {
        Ok((self.start.format_with(fmt)?, self.end.format_with(fmt)?))
    }
}

impl From<DateRange> for (Date, Date) {
    fn from(range: DateRange) -> Self {
        range.dates()
    }
}

impl TryFrom<(Date, Date)> for DateRange {
    type Error = CalendarError;

    fn try_from((start, end): (Date, Date)) -> Result<Self, Self::Error> {
        Self::new(start, end)
    }
}

impl FromStr for DateRange {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(RANGE_SEPARATOR);

        match (parts.next(), parts.next(), parts.next()) {
            (Some(start), Some(end), None) => {
                let start = start.parse::<Date>()?;
                let end = end.parse::<Date>()?;
                Self::new(start, end)
            },
            _ => Err(ParseError::FormatMismatch {
                input:  s.to_owned(),
                format: format!("start{RANGE_SEPARATOR}end"),
            }
            .into()),
        }
    }
}

impl PartialOrd for DateRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DateRange {
    fn cmp(&self, other: &Self) -> Ordering {
        // Compare start dates first, then end dates
        match self.start.cmp(&other.start) {
            Ordering::Equal => self.end.cmp(&other.end),
            ord => ord,
        }
    }
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
