//! The file-to-file conversion run: schedule JSON + timetable JSON to `.ics`.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::Datelike;
use serde::de::DeserializeOwned;
use tempfile::NamedTempFile;

use crate::calendar::{CalendarEvent, CalendarOptions, render_calendar};
use crate::error::{ServiceError, ServiceResult};
use crate::schedule::{PeriodTimetable, ScheduleDocument, ScheduleTranslator, SemesterAnchor};

/// Inputs of one conversion run.
#[derive(Debug, Clone)]
pub struct ConversionRequest {
    pub anchor: SemesterAnchor,
    /// Schedule document (`{"kbList": [...]}`).
    pub input: PathBuf,
    /// Destination `.ics` file.
    pub output: PathBuf,
    /// Timetable document (`{"timetable": {...}}`).
    pub timetable: PathBuf,
    pub options: CalendarOptions,
}

/// What a successful run produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    /// Recurring events written, one per schedule entry.
    pub events: usize,
    /// EXDATE values across all events.
    pub exception_dates: usize,
    /// Actual class meetings after exceptions.
    pub meetings: usize,
}

/// ## Summary
/// Converts a schedule file into a calendar file.
///
/// Both documents are read and fully translated before anything is written.
/// The calendar is written to a temporary file beside `output` and renamed
/// into place only once complete, so a failed run leaves any existing
/// `output` untouched and never creates a partial one.
///
/// ## Errors
/// Returns `ServiceError::File` for unreadable or unwritable paths,
/// `ServiceError::Document` for malformed JSON, and the first entry-level
/// error raised during translation.
#[tracing::instrument(skip(request), fields(
    input = %request.input.display(),
    output = %request.output.display(),
))]
pub fn convert_schedule_file(request: &ConversionRequest) -> ServiceResult<ConversionSummary> {
    let timetable: PeriodTimetable = read_document(&request.timetable)?;
    let document: ScheduleDocument = read_document(&request.input)?;
    tracing::debug!(
        periods = timetable.len(),
        entries = document.entries.len(),
        "Loaded schedule and timetable"
    );

    let (calendar, summary) = convert_schedule(&document, &timetable, request.anchor, &request.options)?;
    write_atomically(&request.output, &calendar)?;

    tracing::info!(
        events = summary.events,
        exception_dates = summary.exception_dates,
        meetings = summary.meetings,
        "Calendar written"
    );
    Ok(summary)
}

/// ## Summary
/// Translates an in-memory schedule and renders the calendar text.
///
/// ## Errors
/// Returns the first entry-level error, or an error from building the calendar.
pub fn convert_schedule(
    document: &ScheduleDocument,
    timetable: &PeriodTimetable,
    anchor: SemesterAnchor,
    options: &CalendarOptions,
) -> ServiceResult<(String, ConversionSummary)> {
    if !anchor.is_monday() {
        tracing::warn!(
            anchor = %anchor.date(),
            weekday = %anchor.date().weekday(),
            "Semester anchor is not a Monday; weeks will start on this weekday"
        );
    }

    let events = ScheduleTranslator::new(anchor, timetable).translate(&document.entries)?;
    let summary = summarize(&events)?;
    let calendar = render_calendar(&events, options)?;

    Ok((calendar, summary))
}

fn summarize(events: &[CalendarEvent]) -> ServiceResult<ConversionSummary> {
    let mut summary = ConversionSummary {
        events: events.len(),
        ..ConversionSummary::default()
    };
    for event in events {
        summary.exception_dates += event.exception_dates().len();
        summary.meetings += event.meetings()?.len();
    }
    Ok(summary)
}

fn read_document<T: DeserializeOwned>(path: &Path) -> ServiceResult<T> {
    let text = fs::read_to_string(path).map_err(|source| ServiceError::File {
        path: path.to_path_buf(),
        action: "read",
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| ServiceError::Document {
        path: path.to_path_buf(),
        source,
    })
}

fn write_atomically(path: &Path, contents: &str) -> ServiceResult<()> {
    let file_error = |action: &'static str| {
        move |source: std::io::Error| ServiceError::File {
            path: path.to_path_buf(),
            action,
            source,
        }
    };

    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(parent).map_err(file_error("create a temporary file for"))?;
    temp.write_all(contents.as_bytes())
        .map_err(file_error("write"))?;
    temp.as_file().sync_all().map_err(file_error("sync"))?;
    temp.persist(path)
        .map_err(|err| file_error("replace")(err.error))?;

    tracing::trace!(path = %path.display(), bytes = contents.len(), "Persisted calendar file");
    Ok(())
}
