//! iCalendar RRULE (Recurrence Rule) value type (RFC 5545 §3.3.10, §3.8.5.3).

use std::fmt;

/// Recurrence rule (RFC 5545 §3.3.10, §3.8.5.3).
///
/// Only the weekly count-bounded form is modelled; class schedules never use
/// other frequencies, UNTIL or the BYxxx rule parts.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RRule {
    /// Recurrence interval (default: 1).
    pub interval: Option<u32>,

    /// Number of occurrences.
    pub count: Option<u32>,
}

impl RRule {
    /// Creates a weekly recurrence rule.
    #[must_use]
    pub fn weekly() -> Self {
        Self::default()
    }

    /// Sets the interval.
    #[must_use]
    pub fn with_interval(mut self, interval: u32) -> Self {
        self.interval = Some(interval);
        self
    }

    /// Sets the count.
    #[must_use]
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }
}

impl fmt::Display for RRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = vec!["FREQ=WEEKLY".to_string()];

        // INTERVAL=1 is the RFC default and is left implicit
        if let Some(interval) = self.interval
            && interval != 1
        {
            parts.push(format!("INTERVAL={interval}"));
        }

        if let Some(count) = self.count {
            parts.push(format!("COUNT={count}"));
        }

        write!(f, "{}", parts.join(";"))
    }
}
