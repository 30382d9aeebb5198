//! `YYYY-MM-DD(HH:MM-HH:MM)` time-window tokens.

use chrono::{NaiveDate, NaiveDateTime};

use super::clock::parse_clock_range;
use super::error::{FormatError, FormatErrorKind, FormatResult};

/// ## Summary
/// Parses a dated time window into its start and end, both on the same date.
///
/// The token is split on the parenthesis characters, empty fragments are
/// discarded, and the bracketed part is read as a clock range.
///
/// ## Errors
/// Returns `MissingParenthesis` when the token is not exactly a date followed
/// by a bracketed range, `InvalidDate` or `InvalidClockTime` for bad parts.
pub fn parse_time_range(token: &str) -> FormatResult<(NaiveDateTime, NaiveDateTime)> {
    let fragments: Vec<&str> = token
        .split(['(', ')'])
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .collect();

    let [date, clock] = fragments.as_slice() else {
        return Err(FormatError::new(FormatErrorKind::MissingParenthesis, token));
    };
    if !token.contains('(') {
        return Err(FormatError::new(FormatErrorKind::MissingParenthesis, token));
    }

    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|err| {
        FormatError::new(FormatErrorKind::InvalidDate, token).with_context(err.to_string())
    })?;
    let clock = parse_clock_range(clock).map_err(|err| FormatError {
        input: token.to_string(),
        ..err
    })?;

    Ok((date.and_time(clock.start), date.and_time(clock.end)))
}
