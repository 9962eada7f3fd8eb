//! Error type for the convenience layer.

use std::error::Error;
use std::fmt::{Display, Formatter};

use bazi_base::BaseError;
use bazi_search::SearchError;
use bazi_time::TimeError;

/// Errors from chart and luck-calendar requests.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum BaziError {
    /// Birth date/time rejected before reaching the engine.
    Time(TimeError),
    /// Gender or pillar name not recognised.
    Base(BaseError),
    /// Solar-term search or pillar derivation failed.
    Search(SearchError),
}

impl Display for BaziError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "invalid birth time: {e}"),
            Self::Base(e) => write!(f, "{e}"),
            Self::Search(e) => write!(f, "chart computation failed: {e}"),
        }
    }
}

impl Error for BaziError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::Base(e) => Some(e),
            Self::Search(e) => Some(e),
        }
    }
}

impl From<TimeError> for BaziError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<BaseError> for BaziError {
    fn from(e: BaseError) -> Self {
        Self::Base(e)
    }
}

impl From<SearchError> for BaziError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::Time(t) => Self::Time(t),
            other => Self::Search(other),
        }
    }
}
