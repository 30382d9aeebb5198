//! Calendar events and their RFC 5545 rendering.

pub mod event;
pub mod export;

pub use event::{CalendarEvent, CalendarOptions};
pub use export::{build_calendar, render_calendar};
