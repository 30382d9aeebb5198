use std::path::PathBuf;

use anyhow::Result;
use chrono::NaiveDate;
use clap::Parser;
use kecal_core::config::{Settings, parse_timezone};
use kecal_service::calendar::CalendarOptions;
use kecal_service::convert::ConversionRequest;
use kecal_service::schedule::SemesterAnchor;

/// Convert a class schedule export into an iCalendar file.
#[derive(Debug, Clone, Parser)]
#[command(name = "kecal", version, about)]
pub struct Cli {
    /// Monday of the first teaching week
    #[arg(short = 'f', long = "first-monday", value_name = "YYYY-MM-DD")]
    pub first_monday: NaiveDate,

    /// Schedule JSON (`{"kbList": [...]}`)
    #[arg(short, long, value_name = "PATH")]
    pub input: PathBuf,

    /// Calendar file to write
    #[arg(short, long, value_name = "PATH")]
    pub output: PathBuf,

    /// Timetable JSON mapping periods to clock times [default: paths.timetable setting]
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// IANA timezone for event times; floating local time when unset
    #[arg(long, value_name = "IANA")]
    pub timezone: Option<String>,
}

impl Cli {
    /// ## Summary
    /// Resolves the conversion request, letting flags override settings.
    ///
    /// ## Errors
    /// Returns an error if the configured or requested timezone is unknown.
    pub fn into_request(self, settings: &Settings) -> Result<ConversionRequest> {
        let mut options = CalendarOptions::from_config(&settings.calendar)?;
        if let Some(name) = self.timezone.as_deref() {
            options = options.with_timezone(Some(parse_timezone(name)?));
        }

        Ok(ConversionRequest {
            anchor: SemesterAnchor::from_date(self.first_monday),
            input: self.input,
            output: self.output,
            timetable: self
                .config
                .unwrap_or_else(|| PathBuf::from(&settings.paths.timetable)),
            options,
        })
    }
}
