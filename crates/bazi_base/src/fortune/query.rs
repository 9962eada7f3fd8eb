//! Selection and active-period lookup over an expanded calendar.

use serde::Serialize;

use super::types::{DecadeFortuneData, FlowYearInfo};

/// An expanded luck calendar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FortuneCalendar {
    pub decades: Vec<DecadeFortuneData>,
}

impl FortuneCalendar {
    pub fn new(decades: Vec<DecadeFortuneData>) -> Self {
        Self { decades }
    }

    pub fn is_empty(&self) -> bool {
        self.decades.is_empty()
    }

    pub fn len(&self) -> usize {
        self.decades.len()
    }

    /// Decade by 0-based index.
    pub fn decade(&self, index: usize) -> Option<&DecadeFortuneData> {
        self.decades.get(index)
    }

    /// Flow year `year_index` of decade `decade_index`.
    pub fn year(&self, decade_index: usize, year_index: usize) -> Option<&FlowYearInfo> {
        self.decade(decade_index)?.years.get(year_index)
    }

    /// Decade whose flow years include Gregorian `year`.
    ///
    /// Falls back to the declared start/end span when no flow year matches.
    pub fn active_decade(&self, year: i32) -> Option<&DecadeFortuneData> {
        self.decades
            .iter()
            .find(|d| d.years.iter().any(|y| y.year == year))
            .or_else(|| self.decades.iter().find(|d| d.contains_year(year)))
    }

    /// Flow year record for Gregorian `year`.
    pub fn active_year(&self, year: i32) -> Option<&FlowYearInfo> {
        self.decades
            .iter()
            .flat_map(|d| d.years.iter())
            .find(|y| y.year == year)
    }

    /// Iterate every flow year in order.
    pub fn years(&self) -> impl Iterator<Item = &FlowYearInfo> {
        self.decades.iter().flat_map(|d| d.years.iter())
    }
}

impl From<Vec<DecadeFortuneData>> for FortuneCalendar {
    fn from(decades: Vec<DecadeFortuneData>) -> Self {
        Self::new(decades)
    }
}
