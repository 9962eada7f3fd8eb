//! Four Pillars of a China Standard Time (or true solar time) instant.
//!
//! Year and month pillars change at the jie terms: the year at 立春 (315°),
//! each month when the Sun enters the next 30° sector from 立春.

use tracing::debug;

use bazi_base::{EightChar, day_pillar_from_jdn, hour_pillar, month_pillar, year_pillar};
use bazi_time::{CHINA_UTC_OFFSET_HOURS, CivilTime, local_jd_to_tt};

use crate::error::SearchError;
use crate::sun::apparent_solar_longitude;

/// Longitude of 立春, the start of the solar year.
pub const LICHUN_LONGITUDE_DEG: f64 = 315.0;

/// Solar month position of an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolarMonth {
    /// Year whose 立春 most recently passed.
    pub lichun_year: i32,
    /// Months since the Tiger month, 0..=11.
    pub offset: u8,
}

/// Solar month containing a CST instant.
pub fn solar_month_at(time: &CivilTime) -> SolarMonth {
    let jd_tt = local_jd_to_tt(time.to_jd(), CHINA_UTC_OFFSET_HOURS);
    let lon = apparent_solar_longitude(jd_tt);
    let offset = (((lon - LICHUN_LONGITUDE_DEG).rem_euclid(360.0)) / 30.0).floor() as u8 % 12;
    // Zi and Chou months in January/February still belong to the old year.
    let lichun_year = if time.month <= 2 && offset >= 10 {
        time.year - 1
    } else {
        time.year
    };
    SolarMonth {
        lichun_year,
        offset,
    }
}

/// Four Pillars of `time`.
///
/// Hours from 23:00 belong to the next day's Zi hour, so they take the next
/// day's day pillar.
pub fn eight_char_at(time: &CivilTime) -> Result<EightChar, SearchError> {
    let time = CivilTime::try_new(
        time.year,
        time.month,
        time.day,
        time.hour,
        time.minute,
        time.second,
    )?;
    let solar = solar_month_at(&time);
    let year = year_pillar(solar.lichun_year);
    let month = month_pillar(year.stem(), solar.offset);
    let jdn = if time.hour >= 23 {
        time.jdn() + 1
    } else {
        time.jdn()
    };
    let day = day_pillar_from_jdn(jdn);
    let hour = hour_pillar(day, time.hour);
    let chart = EightChar::new(year, month, day, hour);
    debug!(%time, %chart, lichun_year = solar.lichun_year, "four pillars");
    Ok(chart)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn millennium_noon() {
        let ec = eight_char_at(&CivilTime::new(2000, 1, 1, 12, 0, 0)).unwrap();
        assert_eq!(ec.to_string(), "己卯 丙子 戊午 戊午");
    }

    #[test]
    fn late_zi_takes_next_day() {
        let before = eight_char_at(&CivilTime::new(2000, 1, 1, 22, 59, 0)).unwrap();
        let late = eight_char_at(&CivilTime::new(2000, 1, 1, 23, 10, 0)).unwrap();
        assert_eq!(before.day.name(), "戊午");
        assert_eq!(late.day.name(), "己未");
        assert_eq!(late.hour.branch().chinese(), "子");
        assert_eq!(late.hour.name(), "甲子");
    }

    #[test]
    fn invalid_time_rejected() {
        assert!(eight_char_at(&CivilTime::new(2023, 2, 29, 0, 0, 0)).is_err());
    }

    #[test]
    fn solar_month_mid_year() {
        // Mid-June sits in the Wu (horse) month, offset 4.
        let m = solar_month_at(&CivilTime::new(2024, 6, 15, 12, 0, 0));
        assert_eq!(m.offset, 4);
        assert_eq!(m.lichun_year, 2024);
    }
}
