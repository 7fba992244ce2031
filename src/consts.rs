use crate::Weekday;

/// Number of days in a week
pub const DAYS_PER_WEEK: u8 = 7;

/// Offset from the first to the last day of a week (Sunday to Saturday)
pub const WEEK_SPAN_DAYS: i64 = 6;

/// ISO 8601 calendar date format (`YYYY-MM-DD`), in chrono strftime syntax
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Maximum valid month (December)
pub const MAX_MONTH: u32 = 12;

/// First day of month
pub const MIN_DAY: u32 = 1;

/// Month number for February
pub const FEBRUARY: u32 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u32 = 29;

/// Length of the shortest month (February in a common year)
pub const SHORTEST_MONTH_DAYS: u32 = 28;

/// Length of the longest months
pub const LONGEST_MONTH_DAYS: u32 = 31;

/// Weekdays in Sunday-first order; the index of each entry is its ordinal
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sunday,
    Weekday::Monday,
    Weekday::Tuesday,
    Weekday::Wednesday,
    Weekday::Thursday,
    Weekday::Friday,
    Weekday::Saturday,
];

/// Range separator (ISO 8601 interval notation)
pub const RANGE_SEPARATOR: char = '/';
