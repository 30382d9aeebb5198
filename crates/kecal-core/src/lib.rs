//! Shared settings, constants and error types for kecal.

pub mod config;
pub mod constants;
pub mod error;
