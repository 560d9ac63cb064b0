//! Result types pairing a parse result with its collected warnings
//!
//! A fatal error discards the partially built value but never the warnings
//! recorded before it, so callers can always report both.

use super::{parse_error::ParseError, warning::Warnings};

/// Result type for operations that fail with a fatal [`ParseError`]
pub type ParseResult<T> = Result<T, ParseError>;

/// Parse result together with every warning recorded along the way
#[derive(Debug, Clone)]
pub struct ParseOutcome<'a, T> {
    /// The parsed value or the fatal error that aborted parsing
    pub result: ParseResult<T>,

    /// Warnings recorded before success or failure, in order
    pub warnings: Warnings<'a>,
}

impl<'a, T> ParseOutcome<'a, T> {
    /// Successful outcome with no warnings
    pub const fn ok(value: T) -> Self {
        Self {
            result: Ok(value),
            warnings: Warnings::new(),
        }
    }

    /// Failed outcome with no warnings
    #[must_use]
    pub const fn err(error: ParseError) -> Self {
        Self {
            result: Err(error),
            warnings: Warnings::new(),
        }
    }

    /// Outcome with pre-collected warnings
    pub const fn with_warnings(result: ParseResult<T>, warnings: Warnings<'a>) -> Self {
        Self { result, warnings }
    }

    /// Check if parsing succeeded, ignoring warnings
    pub const fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// Check if parsing failed
    pub const fn is_err(&self) -> bool {
        self.result.is_err()
    }

    /// The fatal error, if any
    pub const fn error(&self) -> Option<&ParseError> {
        match &self.result {
            Ok(_) => None,
            Err(error) => Some(error),
        }
    }

    /// Transform the successful value, keeping the warnings
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ParseOutcome<'a, U> {
        ParseOutcome {
            result: self.result.map(f),
            warnings: self.warnings,
        }
    }

    /// Split into the result and the warnings
    pub fn into_parts(self) -> (ParseResult<T>, Warnings<'a>) {
        (self.result, self.warnings)
    }
}

impl<T> From<ParseResult<T>> for ParseOutcome<'_, T> {
    fn from(result: ParseResult<T>) -> Self {
        Self::with_warnings(result, Warnings::new())
    }
}
