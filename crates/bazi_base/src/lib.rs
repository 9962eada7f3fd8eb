//! Sexagenary tables and luck-calendar derivation.
//!
//! This crate provides:
//! - Stems, branches, the 60-cycle, NaYin, ten stars and life stages as
//!   closed enums with const lookup tables
//! - Chart pillar formatting against the day master
//! - The Five Tigers month generator and hidden-stem / void-branch helpers
//! - The Decade → Year → Month luck expander over provider cursors
//!
//! Everything here is pure arithmetic; no solar positions are computed.

pub mod branch;
pub mod eight_char;
pub mod element;
pub mod error;
pub mod five_tigers;
pub mod fortune;
pub mod hidden;
pub mod nayin;
pub mod pillar;
pub mod sixty_cycle;
pub mod stem;
pub mod ten_star;
pub mod terrain;

pub use branch::{ALL_BRANCHES, ALL_ZODIACS, EarthBranch, Zodiac};
pub use eight_char::{
    DAY_CYCLE_OFFSET, EightChar, day_pillar_from_jdn, hour_pillar, month_pillar, year_pillar,
};
pub use element::{ALL_ELEMENTS, Element, Gender, Polarity};
pub use error::BaseError;
pub use five_tigers::{FIRST_MONTH_BRANCH, first_month_stem, five_tigers_months, flow_months};
pub use fortune::{
    DECADE_COUNT, DecadeCursor, DecadeFortuneData, FlowMonthInfo, FlowYearInfo, FortuneBaseInfo,
    FortuneCalendar, LuckSource, MONTHS_PER_YEAR, YEARS_PER_DECADE, YearCursor, expand_fortunes,
};
pub use hidden::{HiddenStemInfo, KONG_WANG_SEPARATOR, annotate, annotate_pillar, hidden_stems, kong_wang};
pub use nayin::{ALL_NAYIN, NaYin};
pub use pillar::{PillarInfo, format_pillar};
pub use sixty_cycle::{CYCLE_LEN, SixtyCycle};
pub use stem::{ALL_STEMS, HeavenStem};
pub use ten_star::{ALL_TEN_STARS, TEN_STAR_TABLE, TenStar, TenStarLabel, ten_star};
pub use terrain::{ALL_TERRAINS, Terrain, terrain};
