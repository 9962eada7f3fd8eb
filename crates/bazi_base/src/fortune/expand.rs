//! Decade → Year → Month expansion.

use bazi_time::CivilTime;

use super::cursor::{DecadeCursor, LuckSource, YearCursor};
use super::types::{DECADE_COUNT, DecadeFortuneData, FlowYearInfo, YEARS_PER_DECADE};
use crate::element::Gender;
use crate::five_tigers::flow_months;
use crate::hidden::annotate_pillar;
use crate::stem::HeavenStem;

/// Expand up to [`DECADE_COUNT`] decades from the source's first decade.
///
/// Returns an empty vector when the source has no first decade, and fewer
/// decades when the cursor chain ends early.
pub fn expand_fortunes<S: LuckSource>(
    source: &S,
    birth: &CivilTime,
    gender: Gender,
    day_master: HeavenStem,
) -> Vec<DecadeFortuneData> {
    let mut decades = Vec::with_capacity(DECADE_COUNT);
    let mut cursor = source.first_decade(birth, gender);
    for index in 0..DECADE_COUNT {
        let Some(decade) = cursor else {
            break;
        };
        decades.push(expand_decade(&decade, index, birth.year, day_master));
        cursor = decade.next();
    }
    decades
}

/// One decade with its ten flow years.
pub fn expand_decade<D: DecadeCursor>(
    decade: &D,
    index: usize,
    birth_year: i32,
    day_master: HeavenStem,
) -> DecadeFortuneData {
    let pillar = decade.sixty_cycle();
    let mut years = Vec::with_capacity(YEARS_PER_DECADE);
    let mut year = decade.first_year();
    for _ in 0..YEARS_PER_DECADE {
        years.push(expand_year(&year, birth_year, day_master));
        year = year.next();
    }
    DecadeFortuneData {
        base: annotate_pillar(pillar, day_master, pillar.name()),
        index,
        start_age: decade.start_age(),
        end_age: decade.end_age(),
        start_year: decade.start_year(),
        end_year: decade.end_year(),
        years,
    }
}

/// One flow year with its twelve Five-Tigers months.
pub fn expand_year<Y: YearCursor>(year: &Y, birth_year: i32, day_master: HeavenStem) -> FlowYearInfo {
    let pillar = year.sixty_cycle();
    let age = year.age();
    let value = birth_year + age;
    FlowYearInfo {
        base: annotate_pillar(pillar, day_master, format!("{value} {}", pillar.name())),
        year: value,
        age,
        months: flow_months(pillar.stem(), day_master),
    }
}
