//! A translated class as one recurring calendar event.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use chrono_tz::Tz;
use kecal_core::config::CalendarConfig;
use kecal_core::constants::DEFAULT_PRODID;
use kecal_rfc::rfc::ical::core::{
    Component, Date, DateTime as IcalDateTime, DateTimeForm, Property, names,
};
use uuid::Uuid;

use crate::error::ServiceResult;
use crate::schedule::{Recurrence, expand_meetings};

/// One class: the first meeting plus a weekly rule and its exception dates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEvent {
    pub uid: Uuid,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub summary: String,
    pub description: String,
    pub location: String,
    pub recurrence: Recurrence,
}

/// Calendar-wide output options.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarOptions {
    pub prodid: String,
    /// When set, event times carry this TZID; otherwise they are floating.
    pub timezone: Option<Tz>,
    /// DTSTAMP for every event, normally the moment the calendar was generated.
    pub dtstamp: DateTime<Utc>,
}

impl CalendarOptions {
    #[must_use]
    pub fn new(prodid: impl Into<String>) -> Self {
        Self {
            prodid: prodid.into(),
            timezone: None,
            dtstamp: Utc::now(),
        }
    }

    /// ## Summary
    /// Builds options from the `[calendar]` settings section.
    ///
    /// ## Errors
    /// Returns a `CoreError` if the configured timezone is unknown.
    pub fn from_config(config: &CalendarConfig) -> ServiceResult<Self> {
        Ok(Self::new(config.prodid.clone()).with_timezone(config.tz()?))
    }

    #[must_use]
    pub fn with_timezone(mut self, timezone: Option<Tz>) -> Self {
        self.timezone = timezone;
        self
    }

    #[must_use]
    pub fn with_dtstamp(mut self, dtstamp: DateTime<Utc>) -> Self {
        self.dtstamp = dtstamp;
        self
    }

    fn form(&self) -> DateTimeForm {
        match self.timezone {
            Some(tz) => DateTimeForm::Zoned {
                tzid: tz.name().to_string(),
            },
            None => DateTimeForm::Floating,
        }
    }
}

impl Default for CalendarOptions {
    fn default() -> Self {
        Self::new(DEFAULT_PRODID)
    }
}

impl CalendarEvent {
    #[must_use]
    pub fn exception_dates(&self) -> &[NaiveDate] {
        &self.recurrence.exception_dates
    }

    /// ## Summary
    /// Expands the event into its actual class meetings.
    ///
    /// ## Errors
    /// Returns `ServiceError::Recurrence` if the rule cannot be expanded.
    pub fn meetings(&self) -> ServiceResult<Vec<NaiveDateTime>> {
        expand_meetings(self.start, &self.recurrence)
    }

    /// ## Summary
    /// Builds the VEVENT for this class.
    ///
    /// ## Errors
    /// Returns an `RfcError` if a date falls outside the four-digit year range.
    pub fn to_component(&self, options: &CalendarOptions) -> ServiceResult<Component> {
        let form = options.form();
        let mut event = Component::event();

        event.add_property(Property::text(names::UID, self.uid.to_string()));
        event.add_property(Property::datetime(
            names::DTSTAMP,
            IcalDateTime::from_naive(options.dtstamp.naive_utc(), DateTimeForm::Utc)?,
        ));
        event.add_property(Property::datetime(
            names::DTSTART,
            IcalDateTime::from_naive(self.start, form.clone())?,
        ));
        event.add_property(Property::datetime(
            names::DTEND,
            IcalDateTime::from_naive(self.end, form)?,
        ));
        event.add_property(Property::recur(
            names::RRULE,
            self.recurrence.rule.to_rrule(),
        ));

        if !self.recurrence.exception_dates.is_empty() {
            let dates = self
                .recurrence
                .exception_dates
                .iter()
                .map(|date| Date::from_naive(*date))
                .collect::<Result<Vec<_>, _>>()?;
            event.add_property(Property::date_list(names::EXDATE, dates));
        }

        event.add_property(Property::text(names::SUMMARY, &self.summary));
        event.add_property(Property::text(names::DESCRIPTION, &self.description));
        event.add_property(Property::text(names::LOCATION, &self.location));

        Ok(event)
    }
}
