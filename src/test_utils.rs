use crate::{Date, DateRange};

pub fn date(year: i32, month: u32, day: u32) -> Date {
    Date::new(year, month, day).expect("test date must be valid")
}

pub fn range(start: (i32, u32, u32), end: (i32, u32, u32)) -> DateRange {
    DateRange::new(date(start.0, start.1, start.2), date(end.0, end.1, end.2))
        .expect("test range must be ordered")
}

/// Every date from `start` through `end`, inclusive
pub fn each_day(start: Date, end: Date) -> impl Iterator<Item = Date> {
    let span = start.days_until(end);
    (0..=span).map(move |offset| start.shift(offset).expect("test span stays in range"))
}
