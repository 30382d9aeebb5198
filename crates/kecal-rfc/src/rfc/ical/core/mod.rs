//! iCalendar core models (RFC 5545).
//!
//! This module defines the data structures used to assemble iCalendar
//! content before serialization:
//! - Deterministic serialization: canonical property ordering
//! - Type safety: leveraging Rust's type system for value validation

mod component;
mod datetime;
mod parameter;
mod property;
mod rrule;
mod value;

pub use component::{Component, ComponentKind, ICalendar};
pub use datetime::{DateTime, DateTimeForm};
pub use parameter::Parameter;
pub use property::{Property, names};
pub use rrule::RRule;
pub use value::{Date, Value};
