//! Validation logic for RFC compliance.
//!
//! This module checks assembled components against the RFC 5545 rules that
//! matter for generated calendars before they are serialized.

pub mod event;

pub use event::{EventValidationResult, validate_calendar, validate_event};
