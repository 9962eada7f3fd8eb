//! Error types for sexagenary lookups.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from name parsing in the base tables.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum BaseError {
    /// Name does not match any stem, branch, pillar or gender.
    UnknownName(String),
    /// A stem/branch pair outside the 60 valid combinations.
    InvalidPair(&'static str),
}

impl Display for BaseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownName(name) => write!(f, "unknown name: {name}"),
            Self::InvalidPair(msg) => write!(f, "invalid stem/branch pair: {msg}"),
        }
    }
}

impl Error for BaseError {}
