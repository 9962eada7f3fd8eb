//! Error types for civil time construction.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from civil date/time validation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// A date or time component is out of range.
    InvalidDate(&'static str),
    /// Text could not be parsed as a timestamp.
    Parse(String),
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDate(msg) => write!(f, "invalid date: {msg}"),
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl Error for TimeError {}
