//! Schedule parsing and translation.
//!
//! - `week_range`, `time_range`, `clock`: token parsers with typed errors
//! - `projector`: week/weekday/clock projection onto the semester calendar
//! - `recurrence`: weekly rule and exception dates
//! - `entry`, `timetable`: source documents
//! - `translator`: one [`crate::calendar::CalendarEvent`] per entry

pub mod clock;
pub mod entry;
pub mod error;
pub mod projector;
pub mod recurrence;
pub mod time_range;
pub mod timetable;
pub mod translator;
pub mod week_range;

pub use entry::{ScheduleDocument, ScheduleEntry, WeekdayField, strip_campus_suffix};
pub use error::{FormatError, FormatErrorKind, FormatResult};
pub use projector::SemesterAnchor;
pub use recurrence::{Recurrence, WeeklyRule, derive_recurrence, expand_meetings};
pub use time_range::parse_time_range;
pub use timetable::{PeriodSpan, PeriodTimetable, parse_period_span};
pub use translator::{EntryField, ScheduleTranslator};
pub use week_range::{WeekRange, format_week_ranges, parse_week_ranges};
