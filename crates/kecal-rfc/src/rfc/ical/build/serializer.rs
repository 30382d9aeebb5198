//! iCalendar serializer (RFC 5545).
//!
//! Serializes iCalendar structures to compliant text format.

use super::escape::escape_text;
use super::fold::fold_line;
use crate::rfc::ical::core::{Component, ComponentKind, ICalendar, Parameter, Property, Value};

/// Serializes an iCalendar document to a string.
#[must_use]
#[tracing::instrument(skip(ical), fields(events = ical.root.children.len()))]
pub fn serialize(ical: &ICalendar) -> String {
    let output = serialize_component(&ical.root);
    tracing::debug!(octets = output.len(), "Serialized iCalendar document");
    output
}

/// Serializes a component to a string.
#[must_use]
pub fn serialize_component(component: &Component) -> String {
    let mut result = String::new();

    result.push_str(&fold_line(&format!("BEGIN:{}", component.name)));

    for prop in canonical_property_order(&component.properties, component.kind) {
        result.push_str(&serialize_property(prop));
    }

    // Children keep their insertion order so the calendar mirrors the source schedule
    for child in &component.children {
        result.push_str(&serialize_component(child));
    }

    result.push_str(&fold_line(&format!("END:{}", component.name)));

    result
}

/// Serializes a property to a folded, CRLF-terminated content line.
#[must_use]
pub fn serialize_property(prop: &Property) -> String {
    let mut line = prop.name.clone();

    for param in canonical_param_order(&prop.params) {
        line.push(';');
        line.push_str(&param.to_string());
    }

    line.push(':');
    line.push_str(&serialize_value(&prop.value, &prop.raw_value));

    fold_line(&line)
}

/// Text values are escaped; every other value type is written from its raw form.
fn serialize_value(value: &Value, raw_value: &str) -> String {
    match value {
        Value::Text(s) => escape_text(s),
        _ => raw_value.to_string(),
    }
}

/// Returns properties in canonical order for deterministic output.
fn canonical_property_order(props: &[Property], kind: Option<ComponentKind>) -> Vec<&Property> {
    let order: &[&str] = match kind {
        Some(ComponentKind::Calendar) => &["VERSION", "PRODID", "CALSCALE", "METHOD"],
        Some(ComponentKind::Event) => &[
            "UID",
            "DTSTAMP",
            "DTSTART",
            "DTEND",
            "DURATION",
            "RRULE",
            "RDATE",
            "EXDATE",
            "SUMMARY",
            "DESCRIPTION",
            "LOCATION",
        ],
        _ => &[],
    };

    let mut ordered: Vec<&Property> = Vec::with_capacity(props.len());

    for &name in order {
        ordered.extend(props.iter().filter(|p| p.name.eq_ignore_ascii_case(name)));
    }

    // Remaining properties (including X-properties) keep their insertion order
    ordered.extend(
        props
            .iter()
            .filter(|p| !order.iter().any(|&n| p.name.eq_ignore_ascii_case(n))),
    );

    ordered
}

fn canonical_param_order(params: &[Parameter]) -> Vec<&Parameter> {
    const ORDER: [&str; 2] = ["VALUE", "TZID"];

    let mut ordered: Vec<&Parameter> = Vec::with_capacity(params.len());
    for name in ORDER {
        ordered.extend(params.iter().filter(|p| p.name.eq_ignore_ascii_case(name)));
    }
    ordered.extend(
        params
            .iter()
            .filter(|p| !ORDER.iter().any(|n| p.name.eq_ignore_ascii_case(n))),
    );
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::ical::core::{Date, DateTime, RRule};

    #[test_log::test]
    fn serialize_simple_vevent() {
        let mut ical = ICalendar::new("-//Test//Test//EN");
        let mut event = Component::event();
        event.add_property(Property::text("UID", "test-uid-123"));
        event.add_property(Property::text("SUMMARY", "Test Event"));
        ical.add_event(event);

        let output = serialize(&ical);

        assert!(output.starts_with("BEGIN:VCALENDAR\r\n"));
        assert!(output.ends_with("END:VCALENDAR\r\n"));
        assert!(output.contains("VERSION:2.0\r\n"));
        assert!(output.contains("CALSCALE:GREGORIAN\r\n"));
        assert!(output.contains("BEGIN:VEVENT\r\nUID:test-uid-123\r\nSUMMARY:Test Event\r\nEND:VEVENT\r\n"));
    }

    #[test_log::test]
    fn serialize_escapes_text() {
        let mut event = Component::event();
        event.add_property(Property::text("SUMMARY", "Lab, section 2"));
        event.add_property(Property::text("DESCRIPTION", "Line 1\nLine 2"));

        let output = serialize_component(&event);

        assert!(output.contains("SUMMARY:Lab\\, section 2\r\n"));
        assert!(output.contains("DESCRIPTION:Line 1\\nLine 2\r\n"));
    }

    #[test_log::test]
    fn serialize_recurrence_properties() {
        let mut event = Component::event();
        event.add_property(Property::date_list(
            "EXDATE",
            vec![Date::new(2024, 3, 25), Date::new(2024, 4, 8)],
        ));
        event.add_property(Property::recur("RRULE", RRule::weekly().with_count(8)));
        event.add_property(Property::datetime(
            "DTSTART",
            DateTime::zoned(2024, 2, 26, 8, 0, 0, "Asia/Shanghai"),
        ));

        let output = serialize_component(&event);

        assert!(output.contains("DTSTART;TZID=Asia/Shanghai:20240226T080000\r\n"));
        assert!(output.contains("RRULE:FREQ=WEEKLY;COUNT=8\r\n"));
        assert!(output.contains("EXDATE;VALUE=DATE:20240325,20240408\r\n"));

        let dtstart = output.find("DTSTART").unwrap();
        let rrule = output.find("RRULE").unwrap();
        let exdate = output.find("EXDATE").unwrap();
        assert!(dtstart < rrule && rrule < exdate);
    }

    #[test_log::test]
    fn serialize_folds_long_lines() {
        let mut event = Component::event();
        let long_summary = "A".repeat(100);
        event.add_property(Property::text("SUMMARY", &long_summary));

        let output = serialize_component(&event);

        assert!(output.contains("\r\n "));
        let unfolded = output.replace("\r\n ", "");
        assert!(unfolded.contains(&format!("SUMMARY:{long_summary}\r\n")));
    }

    #[test_log::test]
    fn events_keep_insertion_order() {
        let mut ical = ICalendar::default();
        for uid in ["zeta", "alpha", "mu"] {
            let mut event = Component::event();
            event.add_property(Property::text("UID", uid));
            ical.add_event(event);
        }

        let output = serialize(&ical);
        let zeta = output.find("UID:zeta").unwrap();
        let alpha = output.find("UID:alpha").unwrap();
        let mu = output.find("UID:mu").unwrap();
        assert!(zeta < alpha && alpha < mu);
    }

    #[test_log::test]
    fn canonical_order_preserved() {
        let mut event = Component::event();
        event.add_property(Property::text("X-COURSE-CODE", "MATH101"));
        event.add_property(Property::text("SUMMARY", "Summary"));
        event.add_property(Property::text("UID", "uid"));

        let output = serialize_component(&event);

        let uid_pos = output.find("UID:").unwrap();
        let summary_pos = output.find("SUMMARY:").unwrap();
        let x_pos = output.find("X-COURSE-CODE:").unwrap();
        assert!(uid_pos < summary_pos && summary_pos < x_pos);
    }
}
