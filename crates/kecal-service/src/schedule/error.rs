//! Schedule token error types.

use std::fmt;

/// Result type for schedule token parsing.
pub type FormatResult<T> = Result<T, FormatError>;

/// Error type for malformed schedule tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatError {
    /// Kind of error.
    pub kind: FormatErrorKind,
    /// The offending token as written in the source document.
    pub input: String,
    /// Additional context about the error.
    pub context: Option<String>,
}

impl FormatError {
    /// Creates a new format error.
    #[must_use]
    pub fn new(kind: FormatErrorKind, input: impl Into<String>) -> Self {
        Self {
            kind,
            input: input.into(),
            context: None,
        }
    }

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in '{}'", self.kind, self.input)?;
        if let Some(ref ctx) = self.context {
            write!(f, ": {ctx}")?;
        }
        Ok(())
    }
}

impl std::error::Error for FormatError {}

/// Kinds of format errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatErrorKind {
    /// A comma-separated token has no numeric component.
    EmptyToken,
    /// A component is not a decimal number.
    NonNumeric,
    /// A range has more than a start and an end.
    TooManyBounds,
    /// A range ends before it starts.
    DescendingRange,
    /// Week numbers start at 1.
    ZeroWeek,
    /// A time-range token lacks its parenthesised clock range.
    MissingParenthesis,
    /// Invalid calendar date.
    InvalidDate,
    /// Invalid `HH:MM` clock time.
    InvalidClockTime,
    /// No ranges at all.
    EmptySequence,
    /// The last range ends before the first one starts.
    OutOfOrder,
    /// Weekday outside 1 (Monday) to 7 (Sunday).
    InvalidWeekday,
    /// Invalid period token.
    InvalidPeriod,
    /// A week lies outside the representable calendar span.
    OutOfRange,
}

impl fmt::Display for FormatErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyToken => write!(f, "empty token"),
            Self::NonNumeric => write!(f, "non-numeric component"),
            Self::TooManyBounds => write!(f, "too many range bounds"),
            Self::DescendingRange => write!(f, "range ends before it starts"),
            Self::ZeroWeek => write!(f, "week numbers start at 1"),
            Self::MissingParenthesis => write!(f, "missing parenthesised time range"),
            Self::InvalidDate => write!(f, "invalid date"),
            Self::InvalidClockTime => write!(f, "invalid clock time"),
            Self::EmptySequence => write!(f, "no week ranges"),
            Self::OutOfOrder => write!(f, "last range ends before the first starts"),
            Self::InvalidWeekday => write!(f, "weekday must be 1-7"),
            Self::InvalidPeriod => write!(f, "invalid period token"),
            Self::OutOfRange => write!(f, "week out of supported range"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_input_and_context() {
        let err = FormatError::new(FormatErrorKind::NonNumeric, "abc周").with_context("token 'abc'");
        assert_eq!(err.to_string(), "non-numeric component in 'abc周': token 'abc'");
    }
}
