//! iCalendar DATE value type and typed property values (RFC 5545 §3.3).

use std::fmt;

use chrono::{Datelike, NaiveDate};

use super::datetime::narrow;
use super::{DateTime, RRule};
use crate::error::{RfcError, RfcResult};

/// DATE value (RFC 5545 §3.3.4).
///
/// A calendar date without time component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date {
    /// Year (e.g., 2026).
    pub year: u16,
    /// Month (1-12).
    pub month: u8,
    /// Day of month (1-31).
    pub day: u8,
}

impl Date {
    /// Creates a new date.
    #[must_use]
    pub const fn new(year: u16, month: u8, day: u8) -> Self {
        Self { year, month, day }
    }

    /// ## Summary
    /// Builds a DATE from a chrono calendar date.
    ///
    /// ## Errors
    /// Returns `RfcError::OutOfRange` if the year is not a four-digit year.
    pub fn from_naive(date: NaiveDate) -> RfcResult<Self> {
        let year = u16::try_from(date.year())
            .ok()
            .filter(|y| *y <= 9999)
            .ok_or_else(|| RfcError::OutOfRange(format!("year {} in {date}", date.year())))?;
        Ok(Self::new(year, narrow(date.month()), narrow(date.day())))
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}{:02}{:02}", self.year, self.month, self.day)
    }
}

/// Value types (RFC 5545 §3.3).
///
/// This enum represents the typed value of a property. The serialized
/// string is kept separately on the property.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Comma-separated DATE values (EXDATE/RDATE with VALUE=DATE).
    DateList(Vec<Date>),
    /// DATE-TIME value.
    DateTime(DateTime),
    /// RECUR value (recurrence rule).
    Recur(Box<RRule>),
    /// TEXT value (unescaped).
    Text(String),
}

impl Value {
    /// Returns this value as text, if it is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Returns this value as a date-time, if it is a date-time value.
    #[must_use]
    pub fn as_datetime(&self) -> Option<&DateTime> {
        match self {
            Self::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    /// Returns this value as a list of dates, if it is a date list value.
    #[must_use]
    pub fn as_dates(&self) -> Option<&[Date]> {
        match self {
            Self::DateList(list) => Some(list),
            _ => None,
        }
    }

    /// Returns this value as a recurrence rule, if it is a recur value.
    #[must_use]
    pub fn as_recur(&self) -> Option<&RRule> {
        match self {
            Self::Recur(rrule) => Some(rrule),
            _ => None,
        }
    }
}
