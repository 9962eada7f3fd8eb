//! Spring Festival dates against the published calendar, and the lunar
//! year that decade start years count from.

use bazi_base::{DecadeCursor, Gender};
use bazi_search::{ChildLimit, lunar_year_at, solar_month_at, spring_festival};
use bazi_time::CivilTime;

#[test]
fn spring_festival_dates() {
    let cases = [
        (1990, 1, 27),
        (2000, 2, 5),
        (2020, 1, 25),
        (2021, 2, 12),
        (2022, 2, 1),
        (2023, 1, 22),
        (2024, 2, 10),
        (2025, 1, 29),
        (2026, 2, 17),
        (2033, 1, 31),
    ];
    for (year, month, day) in cases {
        let got = spring_festival(year).unwrap();
        assert_eq!(
            (got.year, got.month, got.day),
            (year, month, day),
            "Spring Festival {year}"
        );
    }
}

#[test]
fn lunar_year_lags_lichun_year_between_the_two() {
    // 2024-02-06: past 立春 (Feb 4) but before the Spring Festival (Feb 10).
    let birth = CivilTime::new(2024, 2, 6, 12, 0, 0);
    assert_eq!(solar_month_at(&birth).lichun_year, 2024);
    assert_eq!(lunar_year_at(&birth).unwrap(), 2023);
}

#[test]
fn decade_years_count_from_lunar_year() {
    let birth = CivilTime::new(2024, 2, 6, 12, 0, 0);
    let limit = ChildLimit::from_birth(&birth, Gender::Male).unwrap();
    assert_eq!(limit.birth_lunar_year, 2023);
    // 甲辰 male runs forward to 惊蛰 (Mar 5): about 28 days, nine years and change.
    assert_eq!(limit.end.year, 2033);
    assert_eq!(limit.start_year(), 2032);
    let first = limit.first_decade();
    assert_eq!(first.start_year(), 2032);
    assert_eq!(first.end_year(), 2041);
}

#[test]
fn after_festival_lunar_and_civil_years_agree() {
    let birth = CivilTime::new(2024, 5, 1, 9, 0, 0);
    let limit = ChildLimit::from_birth(&birth, Gender::Female).unwrap();
    assert_eq!(limit.birth_lunar_year, 2024);
    assert_eq!(limit.start_year(), limit.end.year);
}
