//! iCalendar DATE-TIME value type (RFC 5545 §3.3.5).

use std::fmt;

use chrono::{Datelike, NaiveDateTime, Timelike};

use crate::error::{RfcError, RfcResult};

/// Form of DATE-TIME value (RFC 5545 §3.3.5).
///
/// iCalendar DATE-TIME values come in three mutually exclusive forms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateTimeForm {
    /// Floating time - same wall-clock time in any timezone.
    ///
    /// Example: `19980118T230000`
    Floating,

    /// UTC time - absolute instant, indicated by 'Z' suffix.
    ///
    /// Example: `19980119T070000Z`
    Utc,

    /// Zoned time - local time with TZID reference.
    ///
    /// Example: `TZID=Asia/Shanghai:19980119T020000`
    Zoned {
        /// The IANA timezone identifier.
        tzid: String,
    },
}

/// DATE-TIME value (RFC 5545 §3.3.5).
///
/// A specific point in time, which may be floating, UTC, or zoned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTime {
    /// Year (e.g., 2026).
    pub year: u16,
    /// Month (1-12).
    pub month: u8,
    /// Day of month (1-31).
    pub day: u8,
    /// Hour (0-23).
    pub hour: u8,
    /// Minute (0-59).
    pub minute: u8,
    /// Second (0-60, allowing for leap seconds).
    pub second: u8,
    /// The form of this DATE-TIME (floating, UTC, or zoned).
    pub form: DateTimeForm,
}

impl DateTime {
    /// Creates a floating DATE-TIME.
    #[must_use]
    pub fn floating(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            form: DateTimeForm::Floating,
        }
    }

    /// Creates a UTC DATE-TIME.
    #[must_use]
    pub fn utc(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            form: DateTimeForm::Utc,
        }
    }

    /// Creates a zoned DATE-TIME.
    #[must_use]
    #[expect(
        clippy::too_many_arguments,
        reason = "Constructor mirrors RFC 5545 DATE-TIME components plus TZID"
    )]
    pub fn zoned(
        year: u16,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        tzid: impl Into<String>,
    ) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            form: DateTimeForm::Zoned { tzid: tzid.into() },
        }
    }

    /// ## Summary
    /// Builds a DATE-TIME from a chrono wall-clock value in the given form.
    ///
    /// ## Errors
    /// Returns `RfcError::OutOfRange` if the year cannot be represented
    /// (RFC 5545 years are four digits).
    pub fn from_naive(naive: NaiveDateTime, form: DateTimeForm) -> RfcResult<Self> {
        let year = u16::try_from(naive.year())
            .ok()
            .filter(|y| *y <= 9999)
            .ok_or_else(|| RfcError::OutOfRange(format!("year {} in {naive}", naive.year())))?;
        Ok(Self {
            year,
            month: narrow(naive.month()),
            day: narrow(naive.day()),
            hour: narrow(naive.hour()),
            minute: narrow(naive.minute()),
            second: narrow(naive.second()),
            form,
        })
    }

    /// Returns whether this is a UTC time.
    #[must_use]
    pub fn is_utc(&self) -> bool {
        matches!(self.form, DateTimeForm::Utc)
    }

    /// Returns whether this is a floating time.
    #[must_use]
    pub fn is_floating(&self) -> bool {
        matches!(self.form, DateTimeForm::Floating)
    }

    /// Returns the timezone ID if this is a zoned time.
    #[must_use]
    pub fn tzid(&self) -> Option<&str> {
        match &self.form {
            DateTimeForm::Zoned { tzid } => Some(tzid),
            _ => None,
        }
    }

    /// Returns the wall-clock components as a sortable tuple.
    #[must_use]
    pub fn wall_clock(&self) -> (u16, u8, u8, u8, u8, u8) {
        (
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
        )
    }
}

/// Narrows a chrono calendar field (always < 61) to `u8`.
pub(super) fn narrow(value: u32) -> u8 {
    u8::try_from(value).unwrap_or(u8::MAX)
}

impl fmt::Display for DateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:04}{:02}{:02}T{:02}{:02}{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )?;
        if self.is_utc() {
            write!(f, "Z")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn datetime_display() {
        let dt = DateTime::utc(2026, 1, 23, 12, 0, 0);
        assert_eq!(dt.to_string(), "20260123T120000Z");

        let dt = DateTime::floating(2026, 1, 23, 12, 0, 0);
        assert_eq!(dt.to_string(), "20260123T120000");

        let dt = DateTime::zoned(2026, 1, 23, 12, 0, 0, "Asia/Shanghai");
        assert_eq!(dt.to_string(), "20260123T120000");
        assert_eq!(dt.tzid(), Some("Asia/Shanghai"));
    }

    #[test]
    fn from_naive_copies_wall_clock() {
        let naive = NaiveDate::from_ymd_opt(2024, 2, 26)
            .unwrap()
            .and_hms_opt(8, 5, 0)
            .unwrap();
        let dt = DateTime::from_naive(naive, DateTimeForm::Floating).unwrap();
        assert_eq!(dt.wall_clock(), (2024, 2, 26, 8, 5, 0));
        assert!(dt.is_floating());
    }

    #[test]
    fn from_naive_rejects_negative_years() {
        let naive = NaiveDate::from_ymd_opt(-5, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert!(matches!(
            DateTime::from_naive(naive, DateTimeForm::Utc),
            Err(RfcError::OutOfRange(_))
        ));
    }
}
