//! New moons and the lunar (Spring Festival) year.
//!
//! New-moon instants follow Meeus, Astronomical Algorithms, ch. 49: mean
//! lunation plus periodic terms in the Sun's and Moon's anomalies, the
//! Moon's argument of latitude and the node, plus the planetary arguments.
//! Accuracy is well under a minute, so the China Standard Time date of a new
//! moon is reliable except within seconds of midnight.
//!
//! The first lunar month is the one containing 雨水 (330°). Its first day,
//! the date of the new moon on or before the 雨水 date, is the Spring
//! Festival.

use bazi_time::{CHINA_UTC_OFFSET_HOURS, CivilTime, tt_to_local_jd, ymd_from_jdn};

use crate::error::SearchError;
use crate::solar_term::{SolarTerm, SolarTermEvent};

/// Mean synodic month in days.
pub const SYNODIC_MONTH_DAYS: f64 = 29.530_588_861;

/// Mean new moon of lunation 0 (2000 Jan 6), JDE.
const LUNATION_EPOCH_JDE: f64 = 2_451_550.097_66;

/// Planetary arguments A1..A14: (constant, rate per lunation, coefficient).
const PLANETARY_TERMS: [(f64, f64, f64); 14] = [
    (299.77, 0.107_408, 0.000_325),
    (251.88, 0.016_321, 0.000_165),
    (251.83, 26.651_886, 0.000_164),
    (349.42, 36.412_478, 0.000_126),
    (84.66, 18.206_239, 0.000_110),
    (141.74, 53.303_771, 0.000_062),
    (207.14, 2.453_732, 0.000_060),
    (154.84, 7.306_860, 0.000_056),
    (34.52, 27.261_239, 0.000_047),
    (207.19, 0.121_824, 0.000_042),
    (291.34, 1.844_379, 0.000_040),
    (161.72, 24.198_154, 0.000_037),
    (239.56, 25.513_099, 0.000_035),
    (331.55, 3.592_518, 0.000_023),
];

/// JDE (TT) of the new moon of lunation `k` (0 = 2000 Jan 6).
pub fn new_moon_jd_tt(k: i64) -> f64 {
    let k = k as f64;
    let t = k / 1_236.85;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let mean = LUNATION_EPOCH_JDE + SYNODIC_MONTH_DAYS * k + 0.000_154_37 * t2
        - 0.000_000_150 * t3
        + 0.000_000_000_73 * t4;

    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t2;
    let m = (2.5534 + 29.105_356_70 * k - 0.000_001_4 * t2 - 0.000_000_11 * t3).to_radians();
    let mp = (201.5643 + 385.816_935_28 * k + 0.010_758_2 * t2 + 0.000_012_38 * t3
        - 0.000_000_058 * t4)
        .to_radians();
    let f = (160.7108 + 390.670_502_84 * k - 0.001_611_8 * t2 - 0.000_002_27 * t3
        + 0.000_000_011 * t4)
        .to_radians();
    let om = (124.7746 - 1.563_755_88 * k + 0.002_067_2 * t2 + 0.000_002_15 * t3).to_radians();

    let periodic = -0.40720 * mp.sin()
        + 0.17241 * e * m.sin()
        + 0.01608 * (2.0 * mp).sin()
        + 0.01039 * (2.0 * f).sin()
        + 0.00739 * e * (mp - m).sin()
        - 0.00514 * e * (mp + m).sin()
        + 0.00208 * e * e * (2.0 * m).sin()
        - 0.00111 * (mp - 2.0 * f).sin()
        - 0.00057 * (mp + 2.0 * f).sin()
        + 0.00056 * e * (2.0 * mp + m).sin()
        - 0.00042 * (3.0 * mp).sin()
        + 0.00042 * e * (m + 2.0 * f).sin()
        + 0.00038 * e * (m - 2.0 * f).sin()
        - 0.00024 * e * (2.0 * mp - m).sin()
        - 0.00017 * om.sin()
        - 0.00007 * (mp + 2.0 * m).sin()
        + 0.00004 * (2.0 * mp - 2.0 * f).sin()
        + 0.00004 * (3.0 * m).sin()
        + 0.00003 * (mp + m - 2.0 * f).sin()
        + 0.00003 * (2.0 * mp + 2.0 * f).sin()
        - 0.00003 * (mp + m + 2.0 * f).sin()
        + 0.00003 * (mp - m + 2.0 * f).sin()
        - 0.00002 * (mp - m - 2.0 * f).sin()
        - 0.00002 * (3.0 * mp + m).sin()
        + 0.00002 * (4.0 * mp).sin();

    let planetary: f64 = PLANETARY_TERMS
        .iter()
        .enumerate()
        .map(|(i, &(a0, rate, coeff))| {
            // A1 carries a small T² term.
            let a = a0 + rate * k - if i == 0 { 0.009_173 * t2 } else { 0.0 };
            coeff * a.to_radians().sin()
        })
        .sum();

    mean + periodic + planetary
}

/// China Standard Time day number (JDN) of a TT instant.
fn cst_jdn(jd_tt: f64) -> i64 {
    CivilTime::from_jd(tt_to_local_jd(jd_tt, CHINA_UTC_OFFSET_HOURS)).jdn()
}

/// Lunation whose new moon falls on or before the CST day `jdn`.
pub fn lunation_on_or_before(jdn: i64) -> i64 {
    let mut k = ((jdn as f64 - LUNATION_EPOCH_JDE) / SYNODIC_MONTH_DAYS).floor() as i64;
    while cst_jdn(new_moon_jd_tt(k)) > jdn {
        k -= 1;
    }
    while cst_jdn(new_moon_jd_tt(k + 1)) <= jdn {
        k += 1;
    }
    k
}

/// Spring Festival (first day of the first lunar month) in Gregorian `year`,
/// as a CST midnight.
pub fn spring_festival(year: i32) -> Result<CivilTime, SearchError> {
    let yu_shui = SolarTermEvent::find(year, SolarTerm::YuShui)?;
    let k = lunation_on_or_before(yu_shui.time.jdn());
    let (y, m, d) = ymd_from_jdn(cst_jdn(new_moon_jd_tt(k)));
    Ok(CivilTime::new(y, m, d, 0, 0, 0))
}

/// Lunar year of a civil date: the Gregorian year, or the previous one
/// before that year's Spring Festival.
pub fn lunar_year_at(time: &CivilTime) -> Result<i32, SearchError> {
    let festival = spring_festival(time.year)?;
    Ok(if time.jdn() >= festival.jdn() {
        time.year
    } else {
        time.year - 1
    })
}
