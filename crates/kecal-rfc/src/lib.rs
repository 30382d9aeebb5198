//! iCalendar (RFC 5545) object model, validation and serialization for kecal.

pub mod error;
pub mod rfc;
