//! Week-range tokens such as `1-4周,6-8周`.

use std::fmt;
use std::ops::RangeInclusive;

use kecal_core::constants::WEEK_SUFFIX;

use super::error::{FormatError, FormatErrorKind, FormatResult};

/// An inclusive span of teaching weeks, 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekRange {
    pub start: u32,
    pub end: u32,
}

impl WeekRange {
    /// ## Summary
    /// Creates a range after checking `1 <= start <= end`.
    ///
    /// ## Errors
    /// Returns `ZeroWeek` or `DescendingRange` when the bounds are invalid.
    pub fn new(start: u32, end: u32) -> FormatResult<Self> {
        if start == 0 {
            return Err(FormatError::new(
                FormatErrorKind::ZeroWeek,
                format!("{start}-{end}"),
            ));
        }
        if start > end {
            return Err(FormatError::new(
                FormatErrorKind::DescendingRange,
                format!("{start}-{end}"),
            ));
        }
        Ok(Self { start, end })
    }

    /// ## Summary
    /// Creates the one-week range `[week, week]`.
    ///
    /// ## Errors
    /// Returns `ZeroWeek` for week 0.
    pub fn single(week: u32) -> FormatResult<Self> {
        Self::new(week, week)
    }

    #[must_use]
    pub fn weeks(self) -> RangeInclusive<u32> {
        self.start..=self.end
    }

    #[must_use]
    pub fn contains(self, week: u32) -> bool {
        self.weeks().contains(&week)
    }
}

impl fmt::Display for WeekRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}{WEEK_SUFFIX}", self.start, self.end)
    }
}

/// ## Summary
/// Parses a comma-separated week-range token into ranges, preserving source order.
///
/// Each comma-separated piece is split on `-` and the week suffix, and empty
/// fragments are discarded. One number `n` is the range `[n, n]`, two numbers
/// are `[start, end]`.
///
/// ## Errors
/// Returns a `FormatError` naming the piece that failed: no numbers, a
/// non-numeric component, more than two bounds, or invalid bounds.
pub fn parse_week_ranges(token: &str) -> FormatResult<Vec<WeekRange>> {
    if token.trim().is_empty() {
        return Err(FormatError::new(FormatErrorKind::EmptySequence, token));
    }

    token.split(',').map(parse_week_piece).collect()
}

fn parse_week_piece(piece: &str) -> FormatResult<WeekRange> {
    let bounds = piece
        .split(['-', WEEK_SUFFIX])
        .map(str::trim)
        .filter(|fragment| !fragment.is_empty())
        .map(|fragment| parse_week_number(fragment, piece))
        .collect::<FormatResult<Vec<u32>>>()?;

    let range = match bounds.as_slice() {
        [] => return Err(FormatError::new(FormatErrorKind::EmptyToken, piece)),
        [week] => WeekRange::single(*week),
        [start, end] => WeekRange::new(*start, *end),
        _ => return Err(FormatError::new(FormatErrorKind::TooManyBounds, piece)),
    };

    range.map_err(|err| FormatError::new(err.kind, piece))
}

fn parse_week_number(fragment: &str, piece: &str) -> FormatResult<u32> {
    if !fragment.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatError::new(FormatErrorKind::NonNumeric, piece)
            .with_context(format!("'{fragment}' is not a week number")));
    }
    fragment.parse::<u32>().map_err(|err| {
        FormatError::new(FormatErrorKind::OutOfRange, piece).with_context(err.to_string())
    })
}

/// Writes ranges back in `<start>-<end>周` form, comma-joined.
#[must_use]
pub fn format_week_ranges(ranges: &[WeekRange]) -> String {
    ranges
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}
