//! `HH:MM` clock times and `HH:MM-HH:MM` clock ranges.

use chrono::NaiveTime;

use super::error::{FormatError, FormatErrorKind, FormatResult};

/// A wall-clock interval within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockRange {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

/// ## Summary
/// Parses an `HH:MM` clock time.
///
/// ## Errors
/// Returns `InvalidClockTime` if the text is not a valid 24-hour time.
pub fn parse_clock_time(text: &str) -> FormatResult<NaiveTime> {
    NaiveTime::parse_from_str(text.trim(), "%H:%M").map_err(|err| {
        FormatError::new(FormatErrorKind::InvalidClockTime, text).with_context(err.to_string())
    })
}

/// ## Summary
/// Parses an `HH:MM-HH:MM` clock range.
///
/// ## Errors
/// Returns `InvalidClockTime` if there is no single `-` separator or either
/// side is not a valid time.
pub fn parse_clock_range(text: &str) -> FormatResult<ClockRange> {
    let Some((start, end)) = text.split_once('-') else {
        return Err(FormatError::new(FormatErrorKind::InvalidClockTime, text)
            .with_context("expected HH:MM-HH:MM"));
    };

    let start = parse_clock_time(start).map_err(|err| FormatError { input: text.to_string(), ..err })?;
    let end = parse_clock_time(end).map_err(|err| FormatError { input: text.to_string(), ..err })?;

    Ok(ClockRange { start, end })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hm(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    #[test]
    fn parses_clock_range() {
        let range = parse_clock_range("08:00-09:40").unwrap();
        assert_eq!(range.start, hm(8, 0));
        assert_eq!(range.end, hm(9, 40));
    }

    #[test]
    fn rejects_missing_separator() {
        let err = parse_clock_range("08:00").unwrap_err();
        assert_eq!(err.kind, FormatErrorKind::InvalidClockTime);
    }

    #[test]
    fn rejects_out_of_range_time() {
        let err = parse_clock_range("08:00-25:10").unwrap_err();
        assert_eq!(err.kind, FormatErrorKind::InvalidClockTime);
        assert_eq!(err.input, "08:00-25:10");
    }
}
