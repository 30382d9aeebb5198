//! Class schedule to iCalendar translation for kecal.
//!
//! - `schedule`: week/period token parsers, date projection, recurrence derivation
//!   and the per-entry translator
//! - `calendar`: conversion of translated events into RFC 5545 components
//! - `convert`: the file-to-file conversion run

pub mod calendar;
pub mod convert;
pub mod error;
pub mod schedule;
