//! Assembly of translated events into one validated VCALENDAR.

use kecal_rfc::rfc::ical::build::serialize;
use kecal_rfc::rfc::ical::core::{ICalendar, Property};
use kecal_rfc::rfc::validation::validate_calendar;

use super::event::{CalendarEvent, CalendarOptions};
use crate::error::ServiceResult;

/// Non-standard calendar property understood by common clients as the default zone.
const WR_TIMEZONE: &str = "X-WR-TIMEZONE";

/// ## Summary
/// Builds a VCALENDAR holding one VEVENT per event, in order, and validates it.
///
/// ## Errors
/// Returns an `RfcError` if an event cannot be represented or fails validation.
#[tracing::instrument(skip_all, fields(events = events.len()))]
pub fn build_calendar(events: &[CalendarEvent], options: &CalendarOptions) -> ServiceResult<ICalendar> {
    let mut ical = ICalendar::new(options.prodid.clone());

    if let Some(tz) = options.timezone {
        ical.root.add_property(Property::text(WR_TIMEZONE, tz.name()));
    }

    for event in events {
        ical.add_event(event.to_component(options)?);
    }

    validate_calendar(&ical)?;
    Ok(ical)
}

/// ## Summary
/// Builds and serializes the calendar to RFC 5545 text.
///
/// ## Errors
/// Returns an `RfcError` if the calendar cannot be built.
pub fn render_calendar(events: &[CalendarEvent], options: &CalendarOptions) -> ServiceResult<String> {
    Ok(serialize(&build_calendar(events, options)?))
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime, TimeDelta, TimeZone, Utc};
    use uuid::Uuid;

    use super::*;
    use crate::error::ServiceError;
    use crate::schedule::{SemesterAnchor, WeekRange, derive_recurrence};

    fn event(uid: u128, summary: &str, minutes: i64) -> CalendarEvent {
        let anchor = SemesterAnchor::from_date(NaiveDate::from_ymd_opt(2024, 2, 26).unwrap());
        let start = anchor
            .datetime_for(1, 3, NaiveTime::from_hms_opt(14, 0, 0).unwrap())
            .unwrap();
        CalendarEvent {
            uid: Uuid::from_u128(uid),
            start,
            end: start + TimeDelta::minutes(minutes),
            summary: summary.to_string(),
            description: String::new(),
            location: " ".to_string(),
            recurrence: derive_recurrence(&[WeekRange::new(1, 8).unwrap()], 3, &anchor).unwrap(),
        }
    }

    fn options() -> CalendarOptions {
        CalendarOptions::default()
            .with_dtstamp(Utc.with_ymd_and_hms(2024, 2, 20, 0, 0, 0).unwrap())
    }

    #[test_log::test]
    fn renders_events_in_order() {
        let text = render_calendar(
            &[event(2, "Zoology", 90), event(1, "Algebra", 90)],
            &options(),
        )
        .unwrap();

        assert!(text.starts_with("BEGIN:VCALENDAR\r\nVERSION:2.0\r\n"));
        assert_eq!(text.matches("BEGIN:VEVENT").count(), 2);
        assert!(text.find("SUMMARY:Zoology").unwrap() < text.find("SUMMARY:Algebra").unwrap());
        assert!(!text.contains(WR_TIMEZONE));
    }

    #[test]
    fn timezone_is_announced_on_calendar() {
        let options = options().with_timezone(Some(chrono_tz::Asia::Shanghai));
        let ical = build_calendar(&[event(1, "Algebra", 90)], &options).unwrap();
        assert_eq!(
            ical.root.get_property(WR_TIMEZONE).and_then(|p| p.as_text()),
            Some("Asia/Shanghai")
        );
    }

    #[test]
    fn inverted_event_fails_validation() {
        let err = build_calendar(&[event(1, "Algebra", -30)], &options()).unwrap_err();
        assert!(matches!(err, ServiceError::RfcError(_)));
    }

    #[test]
    fn empty_schedule_is_an_empty_calendar() {
        let text = render_calendar(&[], &options()).unwrap();
        assert!(!text.contains("BEGIN:VEVENT"));
        assert!(text.ends_with("END:VCALENDAR\r\n"));
    }
}
