//! Projection of (week, weekday, clock time) onto the semester calendar.
//!
//! All week and weekday arithmetic goes through [`SemesterAnchor`] so that
//! event starts and exception dates agree on what "week 3, Friday" means.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Weekday};

use super::error::{FormatError, FormatErrorKind, FormatResult};

/// The Monday of week 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SemesterAnchor(NaiveDateTime);

impl SemesterAnchor {
    #[must_use]
    pub fn new(anchor: NaiveDateTime) -> Self {
        Self(anchor)
    }

    /// Anchors the semester at midnight of `date`.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::MIN))
    }

    #[must_use]
    pub fn datetime(&self) -> NaiveDateTime {
        self.0
    }

    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.0.date()
    }

    #[must_use]
    pub fn is_monday(&self) -> bool {
        self.0.weekday() == Weekday::Mon
    }

    /// ## Summary
    /// Returns `anchor + (week - 1) weeks + (weekday - 1) days + clock`.
    ///
    /// `week` and `weekday` are 1-based; weekday 1 is Monday.
    ///
    /// ## Errors
    /// Returns `OutOfRange` if the result does not fit the calendar.
    pub fn datetime_for(&self, week: u32, weekday: u32, clock: NaiveTime) -> FormatResult<NaiveDateTime> {
        let day = self.day_start(week, weekday)?;
        day.checked_add_signed(clock.signed_duration_since(NaiveTime::MIN))
            .ok_or_else(|| out_of_range(week, weekday))
    }

    /// ## Summary
    /// Date-only form of [`Self::datetime_for`].
    ///
    /// ## Errors
    /// Returns `OutOfRange` if the result does not fit the calendar.
    pub fn date_for(&self, week: u32, weekday: u32) -> FormatResult<NaiveDate> {
        Ok(self.day_start(week, weekday)?.date())
    }

    fn day_start(&self, week: u32, weekday: u32) -> FormatResult<NaiveDateTime> {
        let days = (i64::from(week) - 1) * 7 + (i64::from(weekday) - 1);
        TimeDelta::try_days(days)
            .and_then(|offset| self.0.checked_add_signed(offset))
            .ok_or_else(|| out_of_range(week, weekday))
    }
}

fn out_of_range(week: u32, weekday: u32) -> FormatError {
    FormatError::new(FormatErrorKind::OutOfRange, format!("week {week}, weekday {weekday}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn anchor() -> SemesterAnchor {
        SemesterAnchor::from_date(NaiveDate::from_ymd_opt(2024, 2, 26).unwrap())
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn first_monday_morning() {
        let eight = NaiveTime::from_hms_opt(8, 0, 0).unwrap();
        assert_eq!(
            anchor().datetime_for(1, 1, eight).unwrap(),
            date(2024, 2, 26).and_time(eight)
        );
    }

    #[test]
    fn week_three_friday() {
        assert_eq!(anchor().date_for(3, 5).unwrap(), date(2024, 3, 15));
    }

    #[test]
    fn sunday_is_weekday_seven() {
        assert_eq!(anchor().date_for(1, 7).unwrap(), date(2024, 3, 3));
    }

    #[test]
    fn datetime_and_date_agree() {
        let clock = NaiveTime::from_hms_opt(14, 30, 0).unwrap();
        for week in 1..=20 {
            for weekday in 1..=7 {
                let dt = anchor().datetime_for(week, weekday, clock).unwrap();
                assert_eq!(dt.date(), anchor().date_for(week, weekday).unwrap());
                assert_eq!(dt.time(), clock);
            }
        }
    }

    #[test]
    fn far_future_week_is_out_of_range() {
        let err = anchor().date_for(u32::MAX, 1).unwrap_err();
        assert_eq!(err.kind, FormatErrorKind::OutOfRange);
    }

    #[test]
    fn detects_monday_anchor() {
        assert!(anchor().is_monday());
        assert!(!SemesterAnchor::from_date(date(2024, 2, 27)).is_monday());
    }
}
