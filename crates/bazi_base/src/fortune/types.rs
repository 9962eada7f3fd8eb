//! Records of the Decade → Year → Month luck calendar.

use serde::Serialize;

use crate::branch::EarthBranch;
use crate::hidden::HiddenStemInfo;
use crate::nayin::NaYin;
use crate::stem::HeavenStem;
use crate::ten_star::TenStar;
use crate::terrain::Terrain;

/// Decades expanded per calendar.
pub const DECADE_COUNT: usize = 8;

/// Flow years per decade.
pub const YEARS_PER_DECADE: usize = 10;

/// Flow months per year.
pub const MONTHS_PER_YEAR: usize = 12;

/// Annotations shared by every luck-calendar node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FortuneBaseInfo {
    /// Display name ("乙丑", "2031 辛亥", ...).
    pub name: String,
    /// Hanzi pillar name.
    pub gan_zhi: String,
    pub stem: HeavenStem,
    pub branch: EarthBranch,
    /// Stem relation to the day master.
    pub ten_star: TenStar,
    /// Day master's life stage on this branch.
    pub di_shi: Terrain,
    /// This stem's life stage on its own branch.
    pub zi_zuo: Terrain,
    /// `None` when the stem/branch pair is not a valid pillar.
    pub na_yin: Option<NaYin>,
    pub hidden_stems: Vec<HiddenStemInfo>,
    /// Void branches joined by "、"; empty when unavailable.
    pub kong_wang: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowMonthInfo {
    #[serde(flatten)]
    pub base: FortuneBaseInfo,
    /// 1-based, month 1 = Tiger month.
    pub month_index: u8,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlowYearInfo {
    #[serde(flatten)]
    pub base: FortuneBaseInfo,
    /// Gregorian year (birth year + age).
    pub year: i32,
    /// Nominal age (sui) reached in this year.
    pub age: i32,
    pub months: Vec<FlowMonthInfo>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DecadeFortuneData {
    #[serde(flatten)]
    pub base: FortuneBaseInfo,
    /// 0-based position in the calendar.
    pub index: usize,
    pub start_age: i32,
    pub end_age: i32,
    pub start_year: i32,
    pub end_year: i32,
    pub years: Vec<FlowYearInfo>,
}

impl DecadeFortuneData {
    /// Whether `year` falls within this decade's calendar span.
    pub fn contains_year(&self, year: i32) -> bool {
        (self.start_year..=self.end_year).contains(&year)
    }
}
