//! Four Pillars (ba zi) container and the pure pillar rules.
//!
//! Finding the solar-term month offset and the LiChun year needs the Sun's
//! position; that lives in the search crate. Once those are known the
//! pillars follow from fixed cycle arithmetic here.

use serde::Serialize;

use crate::branch::EarthBranch;
use crate::sixty_cycle::SixtyCycle;
use crate::stem::HeavenStem;

/// Cycle index of the day pillar is `(JDN + DAY_CYCLE_OFFSET) mod 60`.
pub const DAY_CYCLE_OFFSET: i64 = 49;

/// Year pillar of a LiChun-based year (甲子 = 4 CE, 1984, ...).
pub const fn year_pillar(lichun_year: i32) -> SixtyCycle {
    SixtyCycle::from_index((lichun_year - 4).rem_euclid(60) as usize)
}

/// Month pillar `month_offset` months after the Tiger month (0 = 寅).
pub const fn month_pillar(year_stem: HeavenStem, month_offset: u8) -> SixtyCycle {
    // Tiger-month pillar of each stem pair is 丙寅, 戊寅, 庚寅, 壬寅, 甲寅.
    let tiger = (year_stem.index() % 5) as usize * 12 + 2;
    SixtyCycle::from_index(tiger).next((month_offset % 12) as i32)
}

/// Day pillar of a Julian day number.
pub const fn day_pillar_from_jdn(jdn: i64) -> SixtyCycle {
    SixtyCycle::from_index((jdn + DAY_CYCLE_OFFSET).rem_euclid(60) as usize)
}

/// Hour pillar from the (already late-Zi adjusted) day pillar and clock hour.
pub const fn hour_pillar(day: SixtyCycle, hour: u32) -> SixtyCycle {
    let zi = (day.stem().index() % 5) as usize * 12;
    SixtyCycle::from_index(zi).next(EarthBranch::from_hour(hour).index() as i32)
}

/// The four pillars of a birth moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct EightChar {
    pub year: SixtyCycle,
    pub month: SixtyCycle,
    pub day: SixtyCycle,
    pub hour: SixtyCycle,
}

impl EightChar {
    pub const fn new(year: SixtyCycle, month: SixtyCycle, day: SixtyCycle, hour: SixtyCycle) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    /// Stem of the day pillar.
    pub const fn day_master(&self) -> HeavenStem {
        self.day.stem()
    }

    /// Pillars in year, month, day, hour order.
    pub const fn pillars(&self) -> [SixtyCycle; 4] {
        [self.year, self.month, self.day, self.hour]
    }
}

impl std::fmt::Display for EightChar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bazi_time::jdn_from_ymd;

    #[test]
    fn known_year_pillars() {
        assert_eq!(year_pillar(1984).name(), "甲子");
        assert_eq!(year_pillar(1999).name(), "己卯");
        assert_eq!(year_pillar(2024).name(), "甲辰");
        assert_eq!(year_pillar(4).index(), 0);
    }

    #[test]
    fn known_day_pillars() {
        assert_eq!(day_pillar_from_jdn(jdn_from_ymd(2000, 1, 1)).name(), "戊午");
        assert_eq!(day_pillar_from_jdn(jdn_from_ymd(2024, 2, 10)).name(), "甲辰");
        assert_eq!(day_pillar_from_jdn(jdn_from_ymd(2024, 6, 15)).name(), "庚戌");
    }

    #[test]
    fn month_pillar_matches_five_tigers() {
        // 己卯 year, Zi month (offset 10) is 丙子.
        let m = month_pillar(HeavenStem::Ji, 10);
        assert_eq!(m.name(), "丙子");
        assert_eq!(month_pillar(HeavenStem::Jia, 0).name(), "丙寅");
        assert_eq!(month_pillar(HeavenStem::Gui, 0).name(), "甲寅");
    }

    #[test]
    fn hour_pillars() {
        let wu_wu = SixtyCycle::from_index(54);
        assert_eq!(hour_pillar(wu_wu, 12).name(), "戊午");
        assert_eq!(hour_pillar(wu_wu, 0).name(), "壬子");
        let jia_zi = SixtyCycle::from_index(0);
        assert_eq!(hour_pillar(jia_zi, 23).name(), "甲子");
        assert_eq!(hour_pillar(jia_zi, 1).name(), "乙丑");
    }

    #[test]
    fn display_joins_with_spaces() {
        let ec = EightChar::new(
            year_pillar(1999),
            month_pillar(HeavenStem::Ji, 10),
            SixtyCycle::from_index(54),
            SixtyCycle::from_index(54),
        );
        assert_eq!(ec.to_string(), "己卯 丙子 戊午 戊午");
        assert_eq!(ec.day_master(), HeavenStem::Wu);
    }
}
