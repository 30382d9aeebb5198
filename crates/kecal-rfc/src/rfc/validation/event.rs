//! ## Summary
//! VEVENT validation (RFC 5545 §3.6.1).
//!
//! Every VEVENT must carry exactly one UID and DTSTAMP. DTSTART is required
//! when the calendar has no METHOD, which is always the case for kecal output.
//! DTEND, when present, must be strictly later than DTSTART.

use crate::error::{RfcError, RfcResult};
use crate::rfc::ical::core::{Component, ICalendar, names};

/// ## Summary
/// Result of validating a single VEVENT.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventValidationResult {
    /// All checks passed
    Valid,
    /// A required property is absent
    MissingProperty(&'static str),
    /// A property that may occur once occurs more than once
    DuplicateProperty(&'static str),
    /// DTEND is not after DTSTART
    EndNotAfterStart,
    /// DTSTART and DTEND use different date-time forms
    MixedForms,
}

impl EventValidationResult {
    /// Returns true if the event is valid
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Returns error message if invalid
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        match self {
            Self::Valid => None,
            Self::MissingProperty(name) => Some(format!("VEVENT is missing required {name}")),
            Self::DuplicateProperty(name) => Some(format!("VEVENT has more than one {name}")),
            Self::EndNotAfterStart => Some("VEVENT DTEND must be after DTSTART".to_string()),
            Self::MixedForms => {
                Some("VEVENT DTSTART and DTEND must share the same time form".to_string())
            }
        }
    }
}

const SINGLE_OCCURRENCE: &[&str] = &[
    names::UID,
    names::DTSTAMP,
    names::DTSTART,
    names::DTEND,
    names::RRULE,
    names::SUMMARY,
    names::DESCRIPTION,
    names::LOCATION,
];

/// ## Summary
/// Checks one VEVENT component.
#[must_use]
pub fn check_event(event: &Component) -> EventValidationResult {
    for required in [names::UID, names::DTSTAMP, names::DTSTART] {
        if event.get_property(required).is_none() {
            return EventValidationResult::MissingProperty(required);
        }
    }

    if let Some(duplicate) = SINGLE_OCCURRENCE
        .iter()
        .find(|name| event.get_properties(name).len() > 1)
    {
        return EventValidationResult::DuplicateProperty(*duplicate);
    }

    let start = event.get_property(names::DTSTART).and_then(|p| p.as_datetime());
    let end = event.get_property(names::DTEND).and_then(|p| p.as_datetime());

    if let (Some(start), Some(end)) = (start, end) {
        if start.form != end.form {
            return EventValidationResult::MixedForms;
        }
        if end.wall_clock() <= start.wall_clock() {
            return EventValidationResult::EndNotAfterStart;
        }
    }

    EventValidationResult::Valid
}

/// ## Summary
/// Validates one VEVENT component.
///
/// ## Errors
/// Returns `RfcError::ValidationError` naming the event UID (when known) and
/// the failed rule.
pub fn validate_event(event: &Component) -> RfcResult<()> {
    let result = check_event(event);
    match result.error_message() {
        None => Ok(()),
        Some(message) => {
            let uid = event.uid().unwrap_or("<no uid>");
            tracing::debug!(uid, %message, "Event failed validation");
            Err(RfcError::ValidationError(format!("{uid}: {message}")))
        }
    }
}

/// ## Summary
/// Validates every VEVENT of a calendar and the calendar's own required properties.
///
/// ## Errors
/// Returns `RfcError::ValidationError` for the first failure found.
pub fn validate_calendar(ical: &ICalendar) -> RfcResult<()> {
    for required in [names::VERSION, names::PRODID] {
        if ical.root.get_property(required).is_none() {
            return Err(RfcError::ValidationError(format!(
                "VCALENDAR is missing required {required}"
            )));
        }
    }

    for event in ical.events() {
        validate_event(event)?;
    }

    tracing::trace!(events = ical.events().len(), "Calendar validated");
    Ok(())
}
