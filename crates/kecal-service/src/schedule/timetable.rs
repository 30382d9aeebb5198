//! Period timetable: period index to `HH:MM-HH:MM` clock range.

use std::collections::BTreeMap;

use serde::Deserialize;

use super::clock::{ClockRange, parse_clock_range};
use super::error::{FormatError, FormatErrorKind, FormatResult};

/// Period slots loaded once per run from `{"timetable": {"1": "08:00-08:45", ...}}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PeriodTimetable {
    #[serde(rename = "timetable")]
    slots: BTreeMap<String, String>,
}

impl PeriodTimetable {
    #[must_use]
    pub fn from_slots(slots: BTreeMap<String, String>) -> Self {
        Self { slots }
    }

    /// Returns the raw clock range for a period, if configured.
    #[must_use]
    pub fn slot(&self, period: u32) -> Option<&str> {
        self.slots.get(&period.to_string()).map(String::as_str)
    }

    /// ## Summary
    /// Returns the parsed clock range for a period.
    ///
    /// `Ok(None)` means the period is not configured.
    ///
    /// ## Errors
    /// Returns `InvalidClockTime` if the configured value is not `HH:MM-HH:MM`.
    pub fn clock_range(&self, period: u32) -> FormatResult<Option<ClockRange>> {
        self.slot(period).map(parse_clock_range).transpose()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// The first and last period of a class, e.g. `3-5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PeriodSpan {
    pub first: u32,
    pub last: u32,
}

/// ## Summary
/// Parses a period token: `"<n>"` or `"<first>-<last>"`.
///
/// ## Errors
/// Returns `InvalidPeriod` for non-numeric or extra components and
/// `DescendingRange` when the last period precedes the first.
pub fn parse_period_span(token: &str) -> FormatResult<PeriodSpan> {
    let numbers = token
        .split('-')
        .map(|part| parse_period(part.trim(), token))
        .collect::<FormatResult<Vec<u32>>>()?;

    match numbers.as_slice() {
        [single] => Ok(PeriodSpan {
            first: *single,
            last: *single,
        }),
        [first, last] if first <= last => Ok(PeriodSpan {
            first: *first,
            last: *last,
        }),
        [_, _] => Err(FormatError::new(FormatErrorKind::DescendingRange, token)),
        _ => Err(FormatError::new(FormatErrorKind::InvalidPeriod, token)
            .with_context("expected <n> or <first>-<last>")),
    }
}

fn parse_period(part: &str, token: &str) -> FormatResult<u32> {
    if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatError::new(FormatErrorKind::InvalidPeriod, token));
    }
    part.parse::<u32>().map_err(|err| {
        FormatError::new(FormatErrorKind::InvalidPeriod, token).with_context(err.to_string())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveTime;

    fn timetable() -> PeriodTimetable {
        serde_json::from_str(
            r#"{"timetable": {"1": "08:00-08:45", "2": "08:55-09:40", "3": "bad"}}"#,
        )
        .unwrap()
    }

    #[test]
    fn deserializes_slots() {
        let timetable = timetable();
        assert_eq!(timetable.len(), 3);
        assert_eq!(timetable.slot(2), Some("08:55-09:40"));
        assert_eq!(timetable.slot(9), None);
    }

    #[test]
    fn clock_range_resolves_configured_slot() {
        let range = timetable().clock_range(1).unwrap().unwrap();
        assert_eq!(range.start, NaiveTime::from_hms_opt(8, 0, 0).unwrap());
        assert_eq!(range.end, NaiveTime::from_hms_opt(8, 45, 0).unwrap());

        assert!(timetable().clock_range(9).unwrap().is_none());
        assert_eq!(
            timetable().clock_range(3).unwrap_err().kind,
            FormatErrorKind::InvalidClockTime
        );
    }

    #[test]
    fn parses_period_spans() {
        assert_eq!(
            parse_period_span("3-5").unwrap(),
            PeriodSpan { first: 3, last: 5 }
        );
        assert_eq!(
            parse_period_span("7").unwrap(),
            PeriodSpan { first: 7, last: 7 }
        );
    }

    #[test]
    fn rejects_bad_period_tokens() {
        for token in ["", "a-b", "1-2-3", "1-", "-2"] {
            assert_eq!(
                parse_period_span(token).unwrap_err().kind,
                FormatErrorKind::InvalidPeriod,
                "token {token:?}"
            );
        }
        assert_eq!(
            parse_period_span("5-3").unwrap_err().kind,
            FormatErrorKind::DescendingRange
        );
    }
}
