//! Civil calendar date/time at one-second resolution.
//!
//! `CivilTime` carries no time zone: the engine treats every timestamp as
//! China Standard Time (UTC+8) civil time, or as the true solar time derived
//! from it. Arithmetic works on Julian Day Numbers so dates roll correctly
//! across month, year and leap-day boundaries.

use std::str::FromStr;

use serde::Serialize;

use crate::error::TimeError;
use crate::julian::{SECONDS_PER_DAY, days_in_month, jdn_from_ymd, ymd_from_jdn};

/// Civil calendar date with whole-second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct CivilTime {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
}

impl CivilTime {
    /// Build without validation. Callers must pass in-range components.
    pub const fn new(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Self {
        Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
        }
    }

    /// Build with range checks on every component.
    pub fn try_new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, TimeError> {
        if !(1..=9999).contains(&year) {
            return Err(TimeError::InvalidDate("year must be in 1..=9999"));
        }
        if !(1..=12).contains(&month) {
            return Err(TimeError::InvalidDate("month must be in 1..=12"));
        }
        if day == 0 || day > days_in_month(year, month) {
            return Err(TimeError::InvalidDate("day out of range for month"));
        }
        if hour > 23 {
            return Err(TimeError::InvalidDate("hour must be in 0..=23"));
        }
        if minute > 59 {
            return Err(TimeError::InvalidDate("minute must be in 0..=59"));
        }
        if second > 59 {
            return Err(TimeError::InvalidDate("second must be in 0..=59"));
        }
        Ok(Self::new(year, month, day, hour, minute, second))
    }

    /// Julian Day Number of the calendar date.
    pub fn jdn(&self) -> i64 {
        jdn_from_ymd(self.year, self.month, self.day)
    }

    /// Seconds elapsed since local midnight.
    pub fn seconds_of_day(&self) -> i64 {
        self.hour as i64 * 3600 + self.minute as i64 * 60 + self.second as i64
    }

    /// Shift by a signed number of seconds, rolling the date as needed.
    pub fn add_seconds(&self, seconds: i64) -> Self {
        let total = self.seconds_of_day() + seconds;
        let day_shift = total.div_euclid(SECONDS_PER_DAY);
        let sod = total.rem_euclid(SECONDS_PER_DAY);
        let (year, month, day) = ymd_from_jdn(self.jdn() + day_shift);
        Self::new(
            year,
            month,
            day,
            (sod / 3600) as u32,
            ((sod % 3600) / 60) as u32,
            (sod % 60) as u32,
        )
    }

    /// Shift by a signed number of minutes.
    pub fn add_minutes(&self, minutes: i64) -> Self {
        self.add_seconds(minutes * 60)
    }

    /// Shift by a signed number of days, keeping the time of day.
    pub fn add_days(&self, days: i64) -> Self {
        self.add_seconds(days * SECONDS_PER_DAY)
    }

    /// Signed seconds from `self` to `other` (positive when `other` is later).
    pub fn seconds_until(&self, other: &CivilTime) -> i64 {
        (other.jdn() - self.jdn()) * SECONDS_PER_DAY + other.seconds_of_day()
            - self.seconds_of_day()
    }

    /// Julian Date of this local civil instant (no zone offset applied).
    pub fn to_jd(&self) -> f64 {
        self.jdn() as f64 - 0.5 + self.seconds_of_day() as f64 / SECONDS_PER_DAY as f64
    }

    /// Inverse of [`to_jd`](Self::to_jd), rounded to the nearest second.
    pub fn from_jd(jd: f64) -> Self {
        let shifted = jd + 0.5;
        let jdn = shifted.floor() as i64;
        let sod = ((shifted - jdn as f64) * SECONDS_PER_DAY as f64).round() as i64;
        let (year, month, day) = ymd_from_jdn(jdn);
        Self::new(year, month, day, 0, 0, 0).add_seconds(sod)
    }

    /// Short chart label, `Y-M-D HH:MM` with unpadded date parts.
    pub fn chart_label(&self) -> String {
        format!(
            "{}-{}-{} {:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute
        )
    }
}

impl std::fmt::Display for CivilTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            self.year, self.month, self.day, self.hour, self.minute, self.second
        )
    }
}

/// Parses `YYYY-MM-DD HH:MM[:SS]`; a `T` may replace the space.
impl FromStr for CivilTime {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (date, time) = s
            .split_once(['T', ' '])
            .ok_or_else(|| TimeError::Parse(format!("expected 'YYYY-MM-DD HH:MM', got '{s}'")))?;

        let date_parts: Vec<&str> = date.split('-').collect();
        if date_parts.len() != 3 {
            return Err(TimeError::Parse(format!("bad date '{date}'")));
        }
        let time_parts: Vec<&str> = time.trim().split(':').collect();
        if !(2..=3).contains(&time_parts.len()) {
            return Err(TimeError::Parse(format!("bad time '{time}'")));
        }

        let num = |p: &str| -> Result<u32, TimeError> {
            p.parse::<u32>()
                .map_err(|_| TimeError::Parse(format!("'{p}' is not a number")))
        };
        let year = date_parts[0]
            .parse::<i32>()
            .map_err(|_| TimeError::Parse(format!("'{}' is not a year", date_parts[0])))?;
        let second = match time_parts.get(2) {
            Some(p) => num(p)?,
            None => 0,
        };

        Self::try_new(
            year,
            num(date_parts[1])?,
            num(date_parts[2])?,
            num(time_parts[0])?,
            num(time_parts[1])?,
            second,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_padded() {
        let t = CivilTime::new(2024, 1, 5, 7, 3, 9);
        assert_eq!(t.to_string(), "2024-01-05 07:03:09");
    }

    #[test]
    fn chart_label_unpadded_date() {
        let t = CivilTime::new(2024, 1, 5, 7, 3, 0);
        assert_eq!(t.chart_label(), "2024-1-5 07:03");
    }

    #[test]
    fn add_minutes_rolls_year_forward() {
        let t = CivilTime::new(2023, 12, 31, 23, 50, 0);
        assert_eq!(t.add_minutes(15), CivilTime::new(2024, 1, 1, 0, 5, 0));
    }

    #[test]
    fn add_minutes_rolls_back_over_leap_day() {
        let t = CivilTime::new(2024, 3, 1, 0, 10, 0);
        assert_eq!(t.add_minutes(-20), CivilTime::new(2024, 2, 29, 23, 50, 0));
    }

    #[test]
    fn seconds_until_is_signed() {
        let a = CivilTime::new(2024, 2, 28, 12, 0, 0);
        let b = CivilTime::new(2024, 3, 1, 12, 0, 30);
        assert_eq!(a.seconds_until(&b), 2 * 86_400 + 30);
        assert_eq!(b.seconds_until(&a), -(2 * 86_400 + 30));
    }

    #[test]
    fn jd_roundtrip() {
        let t = CivilTime::new(1990, 7, 14, 18, 45, 12);
        assert_eq!(CivilTime::from_jd(t.to_jd()), t);
    }

    #[test]
    fn try_new_rejects_feb_30() {
        assert!(CivilTime::try_new(2023, 2, 29, 0, 0, 0).is_err());
        assert!(CivilTime::try_new(2024, 2, 29, 0, 0, 0).is_ok());
        assert!(CivilTime::try_new(2024, 4, 1, 24, 0, 0).is_err());
    }

    #[test]
    fn parse_with_and_without_seconds() {
        let a: CivilTime = "1988-08-08 08:08".parse().unwrap();
        assert_eq!(a, CivilTime::new(1988, 8, 8, 8, 8, 0));
        let b: CivilTime = "1988-08-08T08:08:30".parse().unwrap();
        assert_eq!(b.second, 30);
        assert!("1988/08/08 08:08".parse::<CivilTime>().is_err());
    }

    #[test]
    fn ordering_is_chronological() {
        let a = CivilTime::new(2024, 1, 31, 23, 59, 59);
        let b = CivilTime::new(2024, 2, 1, 0, 0, 0);
        assert!(a < b);
    }
}
