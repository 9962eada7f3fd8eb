//! Child limit (qi yun): when the first decade luck period starts, and the
//! decade / flow-year cursors walked from it.
//!
//! Direction: Yang year stem with a male chart, or Yin with a female chart,
//! runs forward to the next jie term; the other two combinations run back to
//! the previous one. The gap to that term is scaled 3 days → 1 year,
//! 1 day → 4 months, 1 hour → 5 days, 1 minute → 2 hours, 1 second →
//! 2 minutes, and added to the birth time.
//!
//! Calendar years of the decades count from the lunar year of the birth,
//! which turns at the Spring Festival rather than at 立春.

use serde::Serialize;
use tracing::{debug, warn};

use bazi_base::{DecadeCursor, EightChar, Gender, LuckSource, Polarity, SixtyCycle, YearCursor};
use bazi_time::{CivilTime, days_in_month};

use crate::error::SearchError;
use crate::four_pillars::eight_char_at;
use crate::moon::lunar_year_at;
use crate::solar_term::{SolarTermEvent, term_at_or_before};

/// Seconds of real time per year of luck (3 days).
const SECONDS_PER_YEAR: i64 = 259_200;
/// Seconds of real time per month of luck.
const SECONDS_PER_MONTH: i64 = 21_600;
/// Seconds of real time per day of luck.
const SECONDS_PER_DAY: i64 = 720;
/// Seconds of real time per hour of luck.
const SECONDS_PER_HOUR: i64 = 30;

/// Last year a cursor may reach.
const MAX_CURSOR_YEAR: i32 = 9999;

/// Start of luck for one birth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildLimit {
    pub birth: CivilTime,
    /// Moment the first decade begins.
    pub end: CivilTime,
    pub eight_char: EightChar,
    pub gender: Gender,
    pub forward: bool,
    /// The jie term the gap was measured to.
    pub term: SolarTermEvent,
    pub year_count: i32,
    pub month_count: i32,
    pub day_count: i32,
    pub hour_count: i32,
    pub minute_count: i32,
    /// Lunar (Spring Festival) year of the birth date.
    pub birth_lunar_year: i32,
}

impl ChildLimit {
    /// Compute the child limit of a true-solar-time birth.
    pub fn from_birth(birth: &CivilTime, gender: Gender) -> Result<Self, SearchError> {
        let eight_char = eight_char_at(birth)?;
        let yang = eight_char.year.stem().polarity() == Polarity::Yang;
        let forward = yang == (gender == Gender::Male);

        let mut term = term_at_or_before(birth)?;
        if !term.term.is_jie() {
            term = term.prev()?;
        }
        if forward {
            term = term.step(2)?;
        }

        let mut rem = birth.seconds_until(&term.time).abs();
        let year_count = (rem / SECONDS_PER_YEAR) as i32;
        rem %= SECONDS_PER_YEAR;
        let month_count = (rem / SECONDS_PER_MONTH) as i32;
        rem %= SECONDS_PER_MONTH;
        let day_count = (rem / SECONDS_PER_DAY) as i32;
        rem %= SECONDS_PER_DAY;
        let hour_count = (rem / SECONDS_PER_HOUR) as i32;
        rem %= SECONDS_PER_HOUR;
        let minute_count = (rem * 2) as i32;

        let end = add_luck_span(birth, year_count, month_count, day_count, hour_count, minute_count);
        let limit = Self {
            birth: *birth,
            end,
            eight_char,
            gender,
            forward,
            term,
            year_count,
            month_count,
            day_count,
            hour_count,
            minute_count,
            birth_lunar_year: lunar_year_at(birth)?,
        };
        debug!(
            birth = %birth,
            term = term.term.name(),
            forward,
            years = year_count,
            months = month_count,
            days = day_count,
            end = %end,
            "child limit"
        );
        Ok(limit)
    }

    /// Nominal age at which luck starts.
    pub fn start_age(&self) -> i32 {
        self.end.year - self.birth.year + 1
    }

    /// Lunar year in which luck starts.
    pub fn start_year(&self) -> i32 {
        self.birth_lunar_year + self.end.year - self.birth.year
    }

    /// Cycle direction, +1 forward or -1 backward.
    pub fn step_sign(&self) -> i32 {
        if self.forward { 1 } else { -1 }
    }

    pub fn first_decade(&self) -> DecadeFortune {
        DecadeFortune {
            limit: *self,
            index: 0,
        }
    }
}

/// Add a luck span to the birth time, carrying minutes into hours into days,
/// then months, then overflowing days into following months.
fn add_luck_span(
    birth: &CivilTime,
    years: i32,
    months: i32,
    days: i32,
    hours: i32,
    minutes: i32,
) -> CivilTime {
    let mut second = birth.second as i32;
    let mut minute = birth.minute as i32 + minutes + second / 60;
    second %= 60;
    let mut hour = birth.hour as i32 + hours + minute / 60;
    minute %= 60;
    let mut day = birth.day as i32 + days + hour / 24;
    hour %= 24;

    let flat_month = (birth.year + years) * 12 + birth.month as i32 - 1 + months;
    let mut year = flat_month.div_euclid(12);
    let mut month = flat_month.rem_euclid(12) as u32 + 1;
    let mut count = days_in_month(year, month) as i32;
    while day > count {
        day -= count;
        month += 1;
        if month > 12 {
            month = 1;
            year += 1;
        }
        count = days_in_month(year, month) as i32;
    }
    CivilTime::new(
        year,
        month,
        day as u32,
        hour as u32,
        minute as u32,
        second as u32,
    )
}

/// A decade luck period (da yun), `index` decades after the first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecadeFortune {
    limit: ChildLimit,
    index: i32,
}

impl DecadeFortune {
    pub fn index(&self) -> i32 {
        self.index
    }

    pub fn child_limit(&self) -> &ChildLimit {
        &self.limit
    }
}

impl DecadeCursor for DecadeFortune {
    type Year = Fortune;

    /// Month pillar stepped one place per decade in the luck direction.
    fn sixty_cycle(&self) -> SixtyCycle {
        self.limit
            .eight_char
            .month
            .next(self.limit.step_sign() * (self.index + 1))
    }

    fn start_age(&self) -> i32 {
        self.limit.start_age() + self.index * 10
    }

    fn end_age(&self) -> i32 {
        self.start_age() + 9
    }

    fn start_year(&self) -> i32 {
        self.limit.start_year() + self.index * 10
    }

    fn end_year(&self) -> i32 {
        self.start_year() + 9
    }

    fn first_year(&self) -> Fortune {
        Fortune {
            limit: self.limit,
            index: self.index * 10,
        }
    }

    fn next(&self) -> Option<Self> {
        let next = Self {
            limit: self.limit,
            index: self.index + 1,
        };
        (next.end_year() <= MAX_CURSOR_YEAR).then_some(next)
    }
}

/// A flow year (xiao yun), `index` years after luck starts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fortune {
    limit: ChildLimit,
    index: i32,
}

impl YearCursor for Fortune {
    /// Hour pillar stepped by the age in the luck direction.
    fn sixty_cycle(&self) -> SixtyCycle {
        self.limit.eight_char.hour.next(self.limit.step_sign() * self.age())
    }

    fn age(&self) -> i32 {
        self.limit.start_age() + self.index
    }

    fn next(&self) -> Self {
        Self {
            limit: self.limit,
            index: self.index + 1,
        }
    }
}

/// [`LuckSource`] backed by the solar-term child limit.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChildLimitSource;

impl LuckSource for ChildLimitSource {
    type Decade = DecadeFortune;

    fn first_decade(&self, birth: &CivilTime, gender: Gender) -> Option<DecadeFortune> {
        match ChildLimit::from_birth(birth, gender) {
            Ok(limit) => Some(limit.first_decade()),
            Err(e) => {
                warn!(birth = %birth, error = %e, "no child limit, luck calendar empty");
                None
            }
        }
    }
}
