//! Source schedule document (`{"kbList": [...]}`) and its entries.

use std::fmt;

use serde::Deserialize;

use super::error::{FormatError, FormatErrorKind, FormatResult};

/// The schedule document exported by the student information system.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScheduleDocument {
    #[serde(rename = "kbList")]
    pub entries: Vec<ScheduleEntry>,
}

/// One weekly class.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScheduleEntry {
    /// Course name (`kcmc`).
    #[serde(rename = "kcmc")]
    pub course: String,
    /// Instructor (`xm`).
    #[serde(rename = "xm", default)]
    pub instructor: String,
    /// Weekday, 1 = Monday (`xqj`).
    #[serde(rename = "xqj")]
    pub weekday: WeekdayField,
    /// Period token such as `1-2` (`jcor`).
    #[serde(rename = "jcor")]
    pub periods: String,
    /// Week-range token such as `1-4周,6-8周` (`zcd`).
    #[serde(rename = "zcd")]
    pub weeks: String,
    /// Campus name (`xqmc`).
    #[serde(rename = "xqmc", default)]
    pub campus: String,
    /// Room name (`cdmc`).
    #[serde(rename = "cdmc", default)]
    pub room: String,
}

impl ScheduleEntry {
    /// `<campus without its two-character suffix> <room>`.
    #[must_use]
    pub fn location(&self) -> String {
        format!("{} {}", strip_campus_suffix(&self.campus), self.room)
    }
}

/// Weekday as exported: either a JSON number or a numeric string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum WeekdayField {
    Number(u32),
    Text(String),
}

impl WeekdayField {
    /// ## Summary
    /// Resolves the weekday index, 1 (Monday) to 7 (Sunday).
    ///
    /// ## Errors
    /// Returns `InvalidWeekday` for anything else.
    pub fn resolve(&self) -> FormatResult<u32> {
        let weekday = match self {
            Self::Number(n) => Some(*n),
            Self::Text(text) => text.trim().parse::<u32>().ok(),
        };
        weekday
            .filter(|day| (1..=7).contains(day))
            .ok_or_else(|| FormatError::new(FormatErrorKind::InvalidWeekday, self.to_string()))
    }
}

impl fmt::Display for WeekdayField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(text) => write!(f, "{text}"),
        }
    }
}

/// ## Summary
/// Drops the fixed two-character suffix of an exported campus name.
///
/// Campus names are exported with a two-character suffix (e.g. `南湖校区`
/// becomes `南湖`). Names shorter than the suffix become empty.
#[must_use]
pub fn strip_campus_suffix(campus: &str) -> &str {
    match campus.char_indices().rev().nth(1) {
        Some((index, _)) => &campus[..index],
        None => "",
    }
}
