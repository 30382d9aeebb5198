//! iCalendar property types (RFC 5545 §3.1, §3.8).

use super::{Date, DateTime, Parameter, RRule, Value};

/// A fully typed iCalendar property.
///
/// Contains the typed value along with its serialized text form.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Property name (normalized to uppercase).
    pub name: String,
    /// Parameters in order of insertion.
    pub params: Vec<Parameter>,
    /// Typed value.
    pub value: Value,
    /// Value string as it is written to the content line.
    pub raw_value: String,
}

impl Property {
    /// Creates a property with a text value.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        let value_str = value.into();
        Self {
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            value: Value::Text(value_str.clone()),
            raw_value: value_str,
        }
    }

    /// Creates a property with a datetime value.
    ///
    /// Zoned values get a matching TZID parameter.
    #[must_use]
    pub fn datetime(name: impl Into<String>, dt: DateTime) -> Self {
        let raw = dt.to_string();
        let params = dt.tzid().map(Parameter::tzid).into_iter().collect();
        Self {
            name: name.into().to_ascii_uppercase(),
            params,
            value: Value::DateTime(dt),
            raw_value: raw,
        }
    }

    /// Creates a property with a comma-separated list of dates (e.g. EXDATE).
    #[must_use]
    pub fn date_list(name: impl Into<String>, dates: Vec<Date>) -> Self {
        let raw = dates
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        Self {
            name: name.into().to_ascii_uppercase(),
            params: vec![Parameter::value_type("DATE")],
            value: Value::DateList(dates),
            raw_value: raw,
        }
    }

    /// Creates a property with a recurrence rule value.
    #[must_use]
    pub fn recur(name: impl Into<String>, rrule: RRule) -> Self {
        let raw = rrule.to_string();
        Self {
            name: name.into().to_ascii_uppercase(),
            params: Vec::new(),
            value: Value::Recur(Box::new(rrule)),
            raw_value: raw,
        }
    }

    /// Returns the parameter with the given name.
    #[must_use]
    pub fn get_param(&self, name: &str) -> Option<&Parameter> {
        let name_upper = name.to_ascii_uppercase();
        self.params.iter().find(|p| p.name == name_upper)
    }

    /// Returns the value of a parameter.
    #[must_use]
    pub fn get_param_value(&self, name: &str) -> Option<&str> {
        let p = self.get_param(name)?;
        p.value()
    }

    /// Returns the value as text if it is a text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        self.value.as_text()
    }

    /// Returns the value as a datetime if it is a datetime value.
    #[must_use]
    pub fn as_datetime(&self) -> Option<&DateTime> {
        self.value.as_datetime()
    }

    /// Returns the value as a date list if it is a date list value.
    #[must_use]
    pub fn as_dates(&self) -> Option<&[Date]> {
        self.value.as_dates()
    }

    /// Returns the value as a recurrence rule if it is a recur value.
    #[must_use]
    pub fn as_recur(&self) -> Option<&RRule> {
        self.value.as_recur()
    }
}

/// Property names used by kecal.
pub mod names {
    // Calendar properties
    pub const CALSCALE: &str = "CALSCALE";
    pub const PRODID: &str = "PRODID";
    pub const VERSION: &str = "VERSION";

    // Descriptive component properties
    pub const DESCRIPTION: &str = "DESCRIPTION";
    pub const LOCATION: &str = "LOCATION";
    pub const SUMMARY: &str = "SUMMARY";

    // Date and time properties
    pub const DTEND: &str = "DTEND";
    pub const DTSTART: &str = "DTSTART";

    // Relationship properties
    pub const UID: &str = "UID";

    // Recurrence properties
    pub const EXDATE: &str = "EXDATE";
    pub const RRULE: &str = "RRULE";

    // Change management properties
    pub const DTSTAMP: &str = "DTSTAMP";
}
