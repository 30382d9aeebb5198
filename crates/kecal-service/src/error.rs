use std::path::PathBuf;

use thiserror::Error;

use crate::schedule::{EntryField, FormatError};

/// Service layer errors - combines all error types
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("{course}: invalid {field} value: {source}")]
    Format {
        course: String,
        field: EntryField,
        #[source]
        source: FormatError,
    },

    #[error("{course}: period {period} is missing from the timetable")]
    MissingKey { course: String, period: String },

    #[error("Failed to {action} {}: {source}", .path.display())]
    File {
        path: PathBuf,
        action: &'static str,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid document {}: {source}", .path.display())]
    Document {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Recurrence error: {0}")]
    Recurrence(String),

    #[error(transparent)]
    RfcError(#[from] kecal_rfc::error::RfcError),

    #[error(transparent)]
    CoreError(#[from] kecal_core::error::CoreError),
}

impl ServiceError {
    /// Wraps a token-level format error with the entry and field it came from.
    #[must_use]
    pub fn format(course: &str, field: EntryField, source: FormatError) -> Self {
        Self::Format {
            course: course.to_string(),
            field,
            source,
        }
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
