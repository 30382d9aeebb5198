//! Weekly recurrence rule and exception dates for one schedule entry.

use chrono::{NaiveDate, NaiveDateTime};
use kecal_rfc::rfc::ical::core::RRule as IcalRRule;
use rrule::{RRule, Tz, Unvalidated};

use super::error::{FormatError, FormatErrorKind, FormatResult};
use super::projector::SemesterAnchor;
use super::week_range::WeekRange;
use crate::error::{ServiceError, ServiceResult};

/// `FREQ=WEEKLY` with an interval and a total occurrence count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeeklyRule {
    pub interval: u32,
    pub count: u32,
}

impl WeeklyRule {
    #[must_use]
    pub fn to_rrule(self) -> IcalRRule {
        IcalRRule::weekly()
            .with_interval(self.interval)
            .with_count(self.count)
    }
}

/// Recurrence derived from an entry's week ranges.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Recurrence {
    pub rule: WeeklyRule,
    pub first_week: u32,
    pub last_week: u32,
    /// Weeks inside the span with no class, ascending.
    pub exception_weeks: Vec<u32>,
    /// The dates of `exception_weeks` on the entry's weekday.
    pub exception_dates: Vec<NaiveDate>,
}

/// ## Summary
/// Derives the weekly rule and exception dates for ordered week ranges.
///
/// The rule spans from the start of the first range to the end of the last
/// range, so `count = last - first + 1`. Exception weeks are swept over
/// `first..last` (the last week is not tested) and are the weeks no range covers.
///
/// ## Errors
/// Returns `EmptySequence` for no ranges, `OutOfOrder` when the last range ends
/// before the first starts, and `OutOfRange` when the span is too long or an
/// exception date cannot be projected.
pub fn derive_recurrence(
    ranges: &[WeekRange],
    weekday: u32,
    anchor: &SemesterAnchor,
) -> FormatResult<Recurrence> {
    let (Some(first), Some(last)) = (ranges.first(), ranges.last()) else {
        return Err(FormatError::new(FormatErrorKind::EmptySequence, ""));
    };
    let (first_week, last_week) = (first.start, last.end);

    if last_week < first_week {
        return Err(FormatError::new(
            FormatErrorKind::OutOfOrder,
            format!("{first_week}..{last_week}"),
        ));
    }

    // Bounded by the expansion limit of the `rrule` crate
    let max_occurrences = u32::from(u16::MAX);
    let count = last_week - first_week + 1;
    if count > max_occurrences {
        return Err(FormatError::new(FormatErrorKind::OutOfRange, format!("{count} weeks"))
            .with_context(format!("at most {max_occurrences} weekly occurrences")));
    }

    let exception_weeks: Vec<u32> = (first_week..last_week)
        .filter(|week| !ranges.iter().any(|range| range.contains(*week)))
        .collect();
    tracing::trace!(first_week, last_week, ?exception_weeks, "Derived exception weeks");

    let exception_dates = exception_weeks
        .iter()
        .map(|&week| anchor.date_for(week, weekday))
        .collect::<FormatResult<Vec<_>>>()?;

    Ok(Recurrence {
        rule: WeeklyRule { interval: 1, count },
        first_week,
        last_week,
        exception_weeks,
        exception_dates,
    })
}

/// ## Summary
/// Expands the rule from `start` with the `rrule` crate and drops exception dates.
///
/// Exception dates match an occurrence on the same calendar day.
///
/// ## Errors
/// Returns `ServiceError::Recurrence` if the rule is rejected by the `rrule` crate.
pub fn expand_meetings(
    start: NaiveDateTime,
    recurrence: &Recurrence,
) -> ServiceResult<Vec<NaiveDateTime>> {
    let rrule_text = recurrence.rule.to_rrule().to_string();
    let rrule = rrule_text
        .parse::<RRule<Unvalidated>>()
        .map_err(|err| ServiceError::Recurrence(err.to_string()))?;
    let dt_start = start.and_utc().with_timezone(&Tz::UTC);
    let mut rrule_set = rrule
        .build(dt_start)
        .map_err(|err| ServiceError::Recurrence(err.to_string()))?;

    if !recurrence.exception_dates.is_empty() {
        let exdates_tz: Vec<chrono::DateTime<Tz>> = recurrence
            .exception_dates
            .iter()
            .map(|date| date.and_time(start.time()).and_utc().with_timezone(&Tz::UTC))
            .collect();
        rrule_set = rrule_set.set_exdates(exdates_tz);
    }

    let occurrences: Vec<chrono::DateTime<Tz>> = rrule_set.all(u16::MAX).dates;
    Ok(occurrences.iter().map(chrono::DateTime::naive_utc).collect())
}
