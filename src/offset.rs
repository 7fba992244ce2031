use chrono::NaiveDate;
use chrono::format::ParseErrorKind;

use crate::{CalendarError, Date, ISO_DATE_FORMAT, ParseError};

/// The date `n` days before `date`.
///
/// # Errors
/// Returns `CalendarError::OutOfRange` if the result is not representable.
pub fn days_ago(date: Date, n: u32) -> Result<Date, CalendarError> {
    date.shift(-i64::from(n))
}

/// The date `n` days after `date`.
///
/// # Errors
/// Returns `CalendarError::OutOfRange` if the result is not representable.
pub fn days_ahead(date: Date, n: u32) -> Result<Date, CalendarError> {
    date.shift(i64::from(n))
}

/// Parses `text` with a strftime-style `format` (`%Y`, `%m`, `%d`, ...).
///
/// Nothing is coerced: text that matches the format but names an impossible
/// day is rejected, as is any text that does not match the format exactly,
/// including leading or trailing whitespace the format does not spell out.
///
/// # Errors
/// - `ParseError::EmptyInput` if `text` is blank
/// - `ParseError::InvalidDate` if the fields are out of range (month 13, February 30)
/// - `ParseError::InvalidFormat` if `format` itself is malformed
/// - `ParseError::FormatMismatch` for any other mismatch
pub fn parse_date(text: &str, format: &str) -> Result<Date, ParseError> {
    if text.trim().is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mismatch = || ParseError::FormatMismatch {
        input:  text.to_owned(),
        format: format.to_owned(),
    };

    // chrono skips whitespace before numeric fields
    if has_unformatted_padding(text, format) {
        return Err(mismatch());
    }

    NaiveDate::parse_from_str(text, format)
        .map(Date::from)
        .map_err(|err| match err.kind() {
            ParseErrorKind::OutOfRange | ParseErrorKind::Impossible => ParseError::InvalidDate {
                input: text.to_owned(),
            },
            ParseErrorKind::BadFormat => ParseError::InvalidFormat(format.to_owned()),
            _ => mismatch(),
        })
}

fn has_unformatted_padding(text: &str, format: &str) -> bool {
    (text.starts_with(char::is_whitespace) && !format.starts_with(char::is_whitespace))
        || (text.ends_with(char::is_whitespace) && !format.ends_with(char::is_whitespace))
}

/// Parses an ISO 8601 `YYYY-MM-DD` date.
///
/// # Errors
/// Same as [`parse_date`].
pub fn parse_iso_date(text: &str) -> Result<Date, ParseError> {
    parse_date(text, ISO_DATE_FORMAT)
}
