//! Per-entry translation of schedule entries into calendar events.

use std::fmt;

use kecal_core::constants::PRODUCT_NAME;
use uuid::Uuid;

use super::clock::ClockRange;
use super::entry::ScheduleEntry;
use super::error::{FormatError, FormatErrorKind};
use super::projector::SemesterAnchor;
use super::recurrence::derive_recurrence;
use super::timetable::{PeriodTimetable, parse_period_span};
use super::week_range::parse_week_ranges;
use crate::calendar::CalendarEvent;
use crate::error::{ServiceError, ServiceResult};

/// Source field an entry-level error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    /// Week ranges (`zcd`).
    Weeks,
    /// Period token (`jcor`).
    Periods,
    /// Weekday (`xqj`).
    Weekday,
    /// The timetable slot a period resolves to.
    Timetable,
}

impl EntryField {
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Weeks => "zcd",
            Self::Periods => "jcor",
            Self::Weekday => "xqj",
            Self::Timetable => "timetable",
        }
    }
}

impl fmt::Display for EntryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Translates entries against one semester anchor and one timetable.
#[derive(Debug, Clone, Copy)]
pub struct ScheduleTranslator<'a> {
    anchor: SemesterAnchor,
    timetable: &'a PeriodTimetable,
}

impl<'a> ScheduleTranslator<'a> {
    #[must_use]
    pub fn new(anchor: SemesterAnchor, timetable: &'a PeriodTimetable) -> Self {
        Self { anchor, timetable }
    }

    /// ## Summary
    /// Translates every entry, in order, stopping at the first failure.
    ///
    /// ## Errors
    /// Returns the first entry-level error; no events are returned in that case.
    #[tracing::instrument(skip_all, fields(entries = entries.len()))]
    pub fn translate(&self, entries: &[ScheduleEntry]) -> ServiceResult<Vec<CalendarEvent>> {
        entries
            .iter()
            .enumerate()
            .map(|(index, entry)| self.translate_entry(index, entry))
            .collect()
    }

    /// ## Summary
    /// Translates one entry into a weekly recurring event.
    ///
    /// The event starts in the first week of the first range, at the start of
    /// the first period, and ends at the end of the last period. Subsequent
    /// weeks are carried by the recurrence rule.
    ///
    /// ## Errors
    /// Returns `ServiceError::Format` naming the course and field for a
    /// malformed token or for timetable slots that end at or before the class
    /// starts, and `ServiceError::MissingKey` for a period the timetable does
    /// not define.
    pub fn translate_entry(&self, index: usize, entry: &ScheduleEntry) -> ServiceResult<CalendarEvent> {
        let course = entry.course.as_str();
        let in_field = |field| move |source| ServiceError::format(course, field, source);

        let ranges = parse_week_ranges(&entry.weeks).map_err(in_field(EntryField::Weeks))?;
        let weekday = entry.weekday.resolve().map_err(in_field(EntryField::Weekday))?;
        let span = parse_period_span(&entry.periods).map_err(in_field(EntryField::Periods))?;

        let resolve = |period: u32| -> ServiceResult<ClockRange> {
            self.timetable
                .clock_range(period)
                .map_err(in_field(EntryField::Timetable))?
                .ok_or_else(|| ServiceError::MissingKey {
                    course: course.to_string(),
                    period: period.to_string(),
                })
        };
        let start_clock = resolve(span.first)?.start;
        let end_clock = resolve(span.last)?.end;
        if end_clock <= start_clock {
            let context = format!(
                "class ends at {} which is not after its {} start",
                end_clock.format("%H:%M"),
                start_clock.format("%H:%M")
            );
            return Err(ServiceError::format(
                course,
                EntryField::Timetable,
                FormatError::new(FormatErrorKind::DescendingRange, &entry.periods).with_context(context),
            ));
        }

        // Ranges are non-empty after a successful parse
        let first_week = ranges.first().map_or(1, |range| range.start);
        let start = self
            .anchor
            .datetime_for(first_week, weekday, start_clock)
            .map_err(in_field(EntryField::Weeks))?;
        let end = self
            .anchor
            .datetime_for(first_week, weekday, end_clock)
            .map_err(in_field(EntryField::Weeks))?;

        let recurrence =
            derive_recurrence(&ranges, weekday, &self.anchor).map_err(in_field(EntryField::Weeks))?;

        tracing::debug!(
            index,
            course,
            %start,
            %end,
            count = recurrence.rule.count,
            exceptions = recurrence.exception_dates.len(),
            "Translated schedule entry"
        );

        Ok(CalendarEvent {
            uid: entry_uid(index, entry),
            start,
            end,
            summary: entry.course.clone(),
            description: entry.instructor.clone(),
            location: entry.location(),
            recurrence,
        })
    }
}

/// Stable UID for an entry: UUIDv5 over its position and source fields.
fn entry_uid(index: usize, entry: &ScheduleEntry) -> Uuid {
    let name = format!(
        "urn:{PRODUCT_NAME}:{index}:{}:{}:{}:{}:{}:{}",
        entry.course, entry.weekday, entry.periods, entry.weeks, entry.campus, entry.room
    );
    Uuid::new_v5(&Uuid::NAMESPACE_URL, name.as_bytes())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use chrono::NaiveDate;

    use super::*;
    use crate::schedule::{FormatErrorKind, WeekdayField};

    fn anchor() -> SemesterAnchor {
        SemesterAnchor::from_date(NaiveDate::from_ymd_opt(2024, 2, 26).unwrap())
    }

    fn timetable() -> PeriodTimetable {
        PeriodTimetable::from_slots(BTreeMap::from([
            ("1".to_string(), "08:00-08:45".to_string()),
            ("2".to_string(), "08:55-09:40".to_string()),
            ("3".to_string(), "10:00-10:45".to_string()),
            ("4".to_string(), "10:55-11:40".to_string()),
        ]))
    }

    fn entry(weeks: &str, periods: &str, weekday: u32) -> ScheduleEntry {
        ScheduleEntry {
            course: "Linear Algebra".to_string(),
            instructor: "Dr. Li".to_string(),
            weekday: WeekdayField::Number(weekday),
            periods: periods.to_string(),
            weeks: weeks.to_string(),
            campus: "East Campus".to_string(),
            room: "B204".to_string(),
        }
    }

    #[test_log::test]
    fn single_range_entry() {
        let timetable = timetable();
        let translator = ScheduleTranslator::new(anchor(), &timetable);

        let events = translator.translate(&[entry("1-16周", "1-2", 2)]).unwrap();

        assert_eq!(events.len(), 1);
        let event = &events[0];
        assert_eq!(event.start.to_string(), "2024-02-27 08:00:00");
        assert_eq!(event.end.to_string(), "2024-02-27 09:40:00");
        assert_eq!(event.recurrence.rule.count, 16);
        assert!(event.recurrence.exception_dates.is_empty());
        assert_eq!(event.summary, "Linear Algebra");
        assert_eq!(event.description, "Dr. Li");
        assert_eq!(event.location, "East Camp B204");
    }

    #[test]
    fn starts_in_first_week_of_first_range() {
        let timetable = timetable();
        let translator = ScheduleTranslator::new(anchor(), &timetable);

        let event = translator
            .translate_entry(0, &entry("3-4周,6-9周", "3-4", 5))
            .unwrap();

        assert_eq!(event.start.to_string(), "2024-03-15 10:00:00");
        assert_eq!(event.end.to_string(), "2024-03-15 11:40:00");
        assert_eq!(event.recurrence.rule.count, 7);
        assert_eq!(
            event.recurrence.exception_dates,
            vec![NaiveDate::from_ymd_opt(2024, 3, 29).unwrap()]
        );
    }

    #[test]
    fn malformed_weeks_name_course_and_field() {
        let timetable = timetable();
        let translator = ScheduleTranslator::new(anchor(), &timetable);

        let err = translator
            .translate(&[entry("1-16周", "1-2", 1), entry("abc周", "1-2", 1)])
            .unwrap_err();

        match err {
            ServiceError::Format { course, field, source } => {
                assert_eq!(course, "Linear Algebra");
                assert_eq!(field, EntryField::Weeks);
                assert_eq!(source.kind, FormatErrorKind::NonNumeric);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_period_is_missing_key() {
        let timetable = timetable();
        let translator = ScheduleTranslator::new(anchor(), &timetable);

        let err = translator
            .translate_entry(0, &entry("1-2周", "3-5", 1))
            .unwrap_err();

        assert!(matches!(
            err,
            ServiceError::MissingKey { ref period, .. } if period == "5"
        ));
        assert!(err.to_string().contains("Linear Algebra"));
    }

    #[test]
    fn invalid_weekday_and_periods_are_reported() {
        let timetable = timetable();
        let translator = ScheduleTranslator::new(anchor(), &timetable);

        let err = translator
            .translate_entry(0, &entry("1-2周", "1-2", 9))
            .unwrap_err();
        assert!(matches!(err, ServiceError::Format { field: EntryField::Weekday, .. }));

        let err = translator
            .translate_entry(0, &entry("1-2周", "x", 1))
            .unwrap_err();
        assert!(matches!(err, ServiceError::Format { field: EntryField::Periods, .. }));
    }

    #[test]
    fn reversed_timetable_slot_names_course_and_field() {
        let timetable = PeriodTimetable::from_slots(BTreeMap::from([(
            "1".to_string(),
            "09:00-08:00".to_string(),
        )]));
        let translator = ScheduleTranslator::new(anchor(), &timetable);

        let err = translator
            .translate_entry(0, &entry("1-16周", "1", 1))
            .unwrap_err();

        assert!(err.to_string().contains("Linear Algebra"));
        match err {
            ServiceError::Format { field, source, .. } => {
                assert_eq!(field, EntryField::Timetable);
                assert_eq!(source.kind, FormatErrorKind::DescendingRange);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn zero_length_class_is_rejected() {
        let timetable = PeriodTimetable::from_slots(BTreeMap::from([(
            "1".to_string(),
            "08:00-08:00".to_string(),
        )]));
        let translator = ScheduleTranslator::new(anchor(), &timetable);

        let err = translator
            .translate_entry(0, &entry("1-2周", "1", 1))
            .unwrap_err();

        assert!(matches!(err, ServiceError::Format { field: EntryField::Timetable, .. }));
    }

    #[test]
    fn uids_are_stable_and_distinct() {
        let first = entry_uid(0, &entry("1-16周", "1-2", 2));
        assert_eq!(first, entry_uid(0, &entry("1-16周", "1-2", 2)));
        assert_ne!(first, entry_uid(1, &entry("1-16周", "1-2", 2)));
        assert_ne!(first, entry_uid(0, &entry("1-16周", "3-4", 2)));
    }
}
