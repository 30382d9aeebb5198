//! iCalendar RFC 5545 implementation.
//!
//! - `core`: Type definitions for iCalendar structures
//! - `build`: Serializers for iCalendar content
//!
//! ## Example
//!
//! ```rust
//! use kecal_rfc::rfc::ical::{build, core::*};
//!
//! let mut ical = ICalendar::new("-//My App//EN");
//! let mut event = Component::event();
//! event.add_property(Property::text("UID", "my-event-1"));
//! event.add_property(Property::text("SUMMARY", "Linear Algebra"));
//! ical.add_event(event);
//!
//! let output = build::serialize(&ical);
//! assert!(output.contains("SUMMARY:Linear Algebra\r\n"));
//! ```

pub mod build;
pub mod core;

pub use build::serialize;
pub use self::core::{Component, ComponentKind, ICalendar, Parameter, Property};
