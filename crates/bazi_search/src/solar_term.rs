//! The 24 solar terms (jie qi) and their instants.
//!
//! A term occurs when the Sun's apparent longitude reaches a multiple of 15°.
//! Terms are numbered from the winter solstice: index 0 (冬至, 270°) of
//! term-year `Y` falls in December of `Y - 1`, index 23 (大雪) in December
//! of `Y`. Odd indices are the "jie" terms that open a solar month.
//!
//! Instants are found by Newton iteration on the longitude, starting from
//! the mean position of the term in the tropical year.

use serde::Serialize;
use tracing::trace;

use bazi_time::{
    CHINA_UTC_OFFSET_HOURS, CivilTime, calendar_to_jd, local_jd_to_tt, tt_to_local_jd,
};

use crate::error::SearchError;
use crate::sun::{apparent_solar_longitude, wrap_180};

/// Mean tropical year in days.
pub const TROPICAL_YEAR_DAYS: f64 = 365.242_2;

/// Newton iteration cap.
const MAX_ITER: u32 = 50;

/// Longitude tolerance in degrees (~0.1 s of solar motion).
const TOLERANCE_DEG: f64 = 1e-6;

/// The 24 solar terms from the winter solstice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SolarTerm {
    DongZhi,
    XiaoHan,
    DaHan,
    LiChun,
    YuShui,
    JingZhe,
    ChunFen,
    QingMing,
    GuYu,
    LiXia,
    XiaoMan,
    MangZhong,
    XiaZhi,
    XiaoShu,
    DaShu,
    LiQiu,
    ChuShu,
    BaiLu,
    QiuFen,
    HanLu,
    ShuangJiang,
    LiDong,
    XiaoXue,
    DaXue,
}

pub const ALL_SOLAR_TERMS: [SolarTerm; 24] = [
    SolarTerm::DongZhi,
    SolarTerm::XiaoHan,
    SolarTerm::DaHan,
    SolarTerm::LiChun,
    SolarTerm::YuShui,
    SolarTerm::JingZhe,
    SolarTerm::ChunFen,
    SolarTerm::QingMing,
    SolarTerm::GuYu,
    SolarTerm::LiXia,
    SolarTerm::XiaoMan,
    SolarTerm::MangZhong,
    SolarTerm::XiaZhi,
    SolarTerm::XiaoShu,
    SolarTerm::DaShu,
    SolarTerm::LiQiu,
    SolarTerm::ChuShu,
    SolarTerm::BaiLu,
    SolarTerm::QiuFen,
    SolarTerm::HanLu,
    SolarTerm::ShuangJiang,
    SolarTerm::LiDong,
    SolarTerm::XiaoXue,
    SolarTerm::DaXue,
];

const TERM_HANZI: [&str; 24] = [
    "冬至", "小寒", "大寒", "立春", "雨水", "惊蛰", "春分", "清明", "谷雨", "立夏", "小满", "芒种",
    "夏至", "小暑", "大暑", "立秋", "处暑", "白露", "秋分", "寒露", "霜降", "立冬", "小雪", "大雪",
];

impl SolarTerm {
    pub const fn from_index(index: usize) -> Self {
        ALL_SOLAR_TERMS[index % 24]
    }

    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Hanzi name.
    pub const fn chinese(self) -> &'static str {
        TERM_HANZI[self as usize]
    }

    /// Pinyin name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::DongZhi => "DongZhi",
            Self::XiaoHan => "XiaoHan",
            Self::DaHan => "DaHan",
            Self::LiChun => "LiChun",
            Self::YuShui => "YuShui",
            Self::JingZhe => "JingZhe",
            Self::ChunFen => "ChunFen",
            Self::QingMing => "QingMing",
            Self::GuYu => "GuYu",
            Self::LiXia => "LiXia",
            Self::XiaoMan => "XiaoMan",
            Self::MangZhong => "MangZhong",
            Self::XiaZhi => "XiaZhi",
            Self::XiaoShu => "XiaoShu",
            Self::DaShu => "DaShu",
            Self::LiQiu => "LiQiu",
            Self::ChuShu => "ChuShu",
            Self::BaiLu => "BaiLu",
            Self::QiuFen => "QiuFen",
            Self::HanLu => "HanLu",
            Self::ShuangJiang => "ShuangJiang",
            Self::LiDong => "LiDong",
            Self::XiaoXue => "XiaoXue",
            Self::DaXue => "DaXue",
        }
    }

    /// Target apparent solar longitude in degrees.
    pub const fn longitude_deg(self) -> f64 {
        ((270 + 15 * self as u32) % 360) as f64
    }

    /// Whether this term opens a solar month (立春, 惊蛰, ...).
    pub const fn is_jie(self) -> bool {
        self as u8 % 2 == 1
    }
}

impl std::fmt::Display for SolarTerm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.chinese())
    }
}

/// A solar term located in time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SolarTermEvent {
    /// Term-year (see module docs).
    pub year: i32,
    pub term: SolarTerm,
    /// Instant in TT.
    pub jd_tt: f64,
    /// Instant in China Standard Time, nearest second.
    pub time: CivilTime,
}

impl SolarTermEvent {
    /// Locate `term` in term-year `year`.
    pub fn find(year: i32, term: SolarTerm) -> Result<Self, SearchError> {
        let jd_tt = solar_term_jd_tt(year, term)?;
        let time = CivilTime::from_jd(tt_to_local_jd(jd_tt, CHINA_UTC_OFFSET_HOURS));
        Ok(Self {
            year,
            term,
            jd_tt,
            time,
        })
    }

    /// The term `n` steps away (negative steps go back), crossing term-years.
    pub fn step(&self, n: i32) -> Result<Self, SearchError> {
        let flat = self.year * 24 + self.term.index() as i32 + n;
        Self::find(
            flat.div_euclid(24),
            SolarTerm::from_index(flat.rem_euclid(24) as usize),
        )
    }

    pub fn next(&self) -> Result<Self, SearchError> {
        self.step(1)
    }

    pub fn prev(&self) -> Result<Self, SearchError> {
        self.step(-1)
    }
}

/// TT instant of `term` in term-year `year`.
pub fn solar_term_jd_tt(year: i32, term: SolarTerm) -> Result<f64, SearchError> {
    let target = term.longitude_deg();
    // Mean solstice of the previous December plus the term's share of the year.
    let mut jd = calendar_to_jd(year - 1, 12, 22.0) + term.index() as f64 * TROPICAL_YEAR_DAYS / 24.0;
    for iter in 0..MAX_ITER {
        let diff = wrap_180(target - apparent_solar_longitude(jd));
        if diff.abs() < TOLERANCE_DEG {
            trace!(year, term = term.name(), iter, jd, "solar term converged");
            return Ok(jd);
        }
        jd += diff / 360.0 * TROPICAL_YEAR_DAYS;
    }
    Err(SearchError::NoConvergence("solar term longitude"))
}

/// The most recent term at or before a China Standard Time instant.
pub fn term_at_or_before(time: &CivilTime) -> Result<SolarTermEvent, SearchError> {
    let jd_tt = local_jd_to_tt(time.to_jd(), CHINA_UTC_OFFSET_HOURS);
    let lon = apparent_solar_longitude(jd_tt);
    let index = (((lon - 270.0).rem_euclid(360.0)) / 15.0).floor() as usize % 24;
    // A winter solstice seen in December belongs to the next term-year.
    let year = if index == 0 && time.month == 12 {
        time.year + 1
    } else {
        time.year
    };
    let mut event = SolarTermEvent::find(year, SolarTerm::from_index(index))?;
    // Longitude rounding can land a hair past the instant in either direction.
    while event.jd_tt > jd_tt {
        event = event.prev()?;
    }
    loop {
        let next = event.next()?;
        if next.jd_tt > jd_tt {
            return Ok(event);
        }
        event = next;
    }
}

/// All 24 terms falling in Gregorian `year`, 小寒 first, 冬至 last.
pub fn terms_for_year(year: i32) -> Result<Vec<SolarTermEvent>, SearchError> {
    let mut terms = Vec::with_capacity(24);
    for i in 1..24 {
        terms.push(SolarTermEvent::find(year, SolarTerm::from_index(i))?);
    }
    terms.push(SolarTermEvent::find(year + 1, SolarTerm::DongZhi)?);
    Ok(terms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn longitudes() {
        assert_eq!(SolarTerm::DongZhi.longitude_deg(), 270.0);
        assert_eq!(SolarTerm::LiChun.longitude_deg(), 315.0);
        assert_eq!(SolarTerm::ChunFen.longitude_deg(), 0.0);
        assert_eq!(SolarTerm::DaXue.longitude_deg(), 255.0);
    }

    #[test]
    fn jie_are_odd() {
        assert!(SolarTerm::LiChun.is_jie());
        assert!(SolarTerm::XiaoHan.is_jie());
        assert!(!SolarTerm::DongZhi.is_jie());
        assert!(!SolarTerm::YuShui.is_jie());
    }

    #[test]
    fn step_crosses_term_year() {
        let dz = SolarTermEvent::find(2024, SolarTerm::DongZhi).unwrap();
        let prev = dz.prev().unwrap();
        assert_eq!(prev.term, SolarTerm::DaXue);
        assert_eq!(prev.year, 2023);
        assert_eq!(prev.next().unwrap().term, SolarTerm::DongZhi);
    }

    #[test]
    fn year_listing_is_ordered() {
        let terms = terms_for_year(2024).unwrap();
        assert_eq!(terms.len(), 24);
        assert_eq!(terms[0].term, SolarTerm::XiaoHan);
        assert_eq!(terms[23].term, SolarTerm::DongZhi);
        for w in terms.windows(2) {
            assert!(w[0].jd_tt < w[1].jd_tt);
        }
        assert!(terms.iter().all(|t| t.time.year == 2024));
    }
}
