//! Error types for solar-term search and chart decomposition.

use std::error::Error;
use std::fmt::{Display, Formatter};

use bazi_base::BaseError;
use bazi_time::TimeError;

/// Errors from search or pillar derivation.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// Invalid civil timestamp.
    Time(TimeError),
    /// Table lookup failure.
    Base(BaseError),
    /// Iterative solver did not converge.
    NoConvergence(&'static str),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::Base(e) => write!(f, "table error: {e}"),
            Self::NoConvergence(msg) => write!(f, "no convergence: {msg}"),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::Base(e) => Some(e),
            Self::NoConvergence(_) => None,
        }
    }
}

impl From<TimeError> for SearchError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<BaseError> for SearchError {
    fn from(e: BaseError) -> Self {
        Self::Base(e)
    }
}
