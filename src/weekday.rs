use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{CalendarError, DAYS_PER_WEEK, WEEKDAYS, prelude::*};

/// Day of the week, numbered Sunday-first: Sunday is 0, Saturday is 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, Serialize)]
#[repr(u8)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    /// Ordinal with Sunday as 0 through Saturday as 6
    #[inline]
    pub const fn sunday_ordinal(self) -> u8 {
        self as u8
    }

    /// Ordinal with Monday as 0 through Sunday as 6
    #[inline]
    pub const fn monday_ordinal(self) -> u8 {
        (self as u8 + DAYS_PER_WEEK - 1) % DAYS_PER_WEEK
    }

    /// Looks up the weekday for a Sunday-first ordinal.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidWeekdayOrdinal` if `ordinal` is not in `0..=6`.
    pub fn from_sunday_ordinal(ordinal: u8) -> Result<Self, CalendarError> {
        WEEKDAYS
            .get(usize::from(ordinal))
            .copied()
            .ok_or(CalendarError::InvalidWeekdayOrdinal(ordinal))
    }

    /// English name of the weekday
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }
}

impl FromStr for Weekday {
    type Err = CalendarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WEEKDAYS
            .iter()
            .copied()
            .find(|day| day.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CalendarError::UnknownWeekday(s.to_owned()))
    }
}

impl<'de> Deserialize<'de> for Weekday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl TryFrom<u8> for Weekday {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_sunday_ordinal(value)
    }
}

impl From<Weekday> for u8 {
    fn from(day: Weekday) -> Self {
        day.sunday_ordinal()
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Sun => Self::Sunday,
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
        }
    }
}

impl From<Weekday> for chrono::Weekday {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Sunday => Self::Sun,
            Weekday::Monday => Self::Mon,
            Weekday::Tuesday => Self::Tue,
            Weekday::Wednesday => Self::Wed,
            Weekday::Thursday => Self::Thu,
            Weekday::Friday => Self::Fri,
            Weekday::Saturday => Self::Sat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sunday_first_ordinals() {
        for (index, day) in WEEKDAYS.iter().enumerate() {
            assert_eq!(usize::from(day.sunday_ordinal()), index, "{day} has wrong ordinal");
        }
        assert_eq!(Weekday::Sunday.sunday_ordinal(), 0);
        assert_eq!(Weekday::Saturday.sunday_ordinal(), 6);
    }

    #[test]
    fn test_monday_first_ordinals() {
        struct TestCase {
            day:     Weekday,
            ordinal: u8,
        }

        let cases = [
            TestCase { day: Weekday::Monday, ordinal: 0 },
            TestCase { day: Weekday::Tuesday, ordinal: 1 },
            TestCase { day: Weekday::Wednesday, ordinal: 2 },
            TestCase { day: Weekday::Thursday, ordinal: 3 },
            TestCase { day: Weekday::Friday, ordinal: 4 },
            TestCase { day: Weekday::Saturday, ordinal: 5 },
            TestCase { day: Weekday::Sunday, ordinal: 6 },
        ];

        for case in &cases {
            assert_eq!(case.day.monday_ordinal(), case.ordinal, "{}", case.day);
        }
    }

    #[test]
    fn test_from_sunday_ordinal() {
        for ordinal in 0..7 {
            let day = Weekday::from_sunday_ordinal(ordinal).expect("ordinal in range");
            assert_eq!(day.sunday_ordinal(), ordinal);
        }
        assert_eq!(
            Weekday::from_sunday_ordinal(7),
            Err(CalendarError::InvalidWeekdayOrdinal(7))
        );

        let result: Result<Weekday, _> = 255u8.try_into();
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("Monday".parse::<Weekday>(), Ok(Weekday::Monday));
        assert_eq!("sunday".parse::<Weekday>(), Ok(Weekday::Sunday));
        assert_eq!("SATURDAY".parse::<Weekday>(), Ok(Weekday::Saturday));
    }

    #[test]
    fn test_parse_rejects_unknown_names() {
        for input in ["Mon", "Funday", "", "Sundays", " Monday", "Friday\n"] {
            let err = input.parse::<Weekday>().expect_err("unknown weekday should be rejected");
            assert!(err.is_invalid_argument(), "'{input}' should be an invalid argument");
            assert_eq!(err, CalendarError::UnknownWeekday(input.to_owned()));
        }
    }

    #[test]
    fn test_display_matches_name() {
        for day in WEEKDAYS {
            assert_eq!(day.to_string(), day.name());
        }
    }

    #[test]
    fn test_chrono_conversions() {
        assert_eq!(Weekday::from(chrono::Weekday::Sun), Weekday::Sunday);
        assert_eq!(chrono::Weekday::from(Weekday::Wednesday), chrono::Weekday::Wed);

        for day in WEEKDAYS {
            let chrono_day = chrono::Weekday::from(day);
            assert_eq!(u32::from(day.sunday_ordinal()), chrono_day.num_days_from_sunday());
            assert_eq!(u32::from(day.monday_ordinal()), chrono_day.num_days_from_monday());
            assert_eq!(Weekday::from(chrono_day), day);
        }
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Weekday::Thursday).expect("serialize weekday");
        assert_eq!(json, r#""Thursday""#);

        let parsed: Weekday = serde_json::from_str(&json).expect("deserialize weekday");
        assert_eq!(parsed, Weekday::Thursday);
    }

    #[test]
    fn test_serde_accepts_what_from_str_accepts() {
        for input in ["thursday", "THURSDAY", "Thursday"] {
            let json = format!("\"{input}\"");
            let parsed: Weekday = serde_json::from_str(&json).expect("deserialize weekday in any case");
            assert_eq!(parsed, input.parse::<Weekday>().expect("parse weekday"));
        }

        let unknown: Result<Weekday, _> = serde_json::from_str(r#""Funday""#);
        let err = unknown.expect_err("unknown weekday should not deserialize");
        assert!(err.to_string().contains("Unknown weekday: 'Funday'"));
    }
}
