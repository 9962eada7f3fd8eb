//! Five Tigers (wu hu dun) month generator for luck-flow years.
//!
//! The year stem fixes the stem of the Tiger month; the other eleven follow
//! in order. Month 1 is always the Tiger branch. The birth chart's own month
//! pillar is solar-term based and does not come from here.

use crate::branch::EarthBranch;
use crate::fortune::types::{FlowMonthInfo, MONTHS_PER_YEAR};
use crate::hidden::annotate;
use crate::stem::HeavenStem;

/// Branch of month 1.
pub const FIRST_MONTH_BRANCH: EarthBranch = EarthBranch::Yin;

/// Stem of the Tiger month for a year stem: ((g mod 5) * 2 + 2) mod 10.
pub const fn first_month_stem(year_stem: HeavenStem) -> HeavenStem {
    HeavenStem::from_index(((year_stem.index() % 5) * 2 + 2) as usize)
}

/// The 12 month stem/branch pairs of a year, month 1 first.
pub fn five_tigers_months(year_stem: HeavenStem) -> [(HeavenStem, EarthBranch); 12] {
    let first = first_month_stem(year_stem);
    std::array::from_fn(|k| (first.next(k as i32), FIRST_MONTH_BRANCH.next(k as i32)))
}

/// Annotated flow months of a year relative to `day_master`.
pub fn flow_months(year_stem: HeavenStem, day_master: HeavenStem) -> Vec<FlowMonthInfo> {
    let mut months = Vec::with_capacity(MONTHS_PER_YEAR);
    for (k, (stem, branch)) in five_tigers_months(year_stem).into_iter().enumerate() {
        let name = format!("{}{}", stem.chinese(), branch.chinese());
        months.push(FlowMonthInfo {
            base: annotate(stem, branch, day_master, name),
            month_index: (k + 1) as u8,
        });
    }
    months
}
