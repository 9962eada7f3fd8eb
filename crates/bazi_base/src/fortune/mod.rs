//! Luck calendar (da yun / liu nian / liu yue).
//!
//! A provider supplies the first decade cursor through [`LuckSource`]; the
//! expander walks at most 8 decades of 10 years of 12 months each, annotating
//! every node against the day master. Output order is always the cursor order.

pub mod cursor;
pub mod expand;
pub mod query;
pub mod types;

pub use cursor::{DecadeCursor, LuckSource, YearCursor};
pub use expand::{expand_decade, expand_fortunes, expand_year};
pub use query::FortuneCalendar;
pub use types::{
    DECADE_COUNT, DecadeFortuneData, FlowMonthInfo, FlowYearInfo, FortuneBaseInfo,
    MONTHS_PER_YEAR, YEARS_PER_DECADE,
};
