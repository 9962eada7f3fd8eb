//! Four Pillars golden values and year/month boundaries at 立春.

use bazi_search::eight_char_at;
use bazi_time::CivilTime;

fn chart(y: i32, m: u32, d: u32, h: u32, mi: u32) -> String {
    eight_char_at(&CivilTime::new(y, m, d, h, mi, 0))
        .unwrap()
        .to_string()
}

#[test]
fn millennium_noon() {
    assert_eq!(chart(2000, 1, 1, 12, 0), "己卯 丙子 戊午 戊午");
}

#[test]
fn day_pillar_golden() {
    let ec = eight_char_at(&CivilTime::new(2024, 2, 10, 9, 0, 0)).unwrap();
    assert_eq!(ec.day.name(), "甲辰");
    let ec = eight_char_at(&CivilTime::new(2024, 6, 15, 9, 0, 0)).unwrap();
    assert_eq!(ec.day.name(), "庚戌");
}

#[test]
fn year_and_month_switch_at_lichun_2024() {
    let before = eight_char_at(&CivilTime::new(2024, 2, 4, 15, 0, 0)).unwrap();
    assert_eq!(before.year.name(), "癸卯");
    assert_eq!(before.month.name(), "乙丑");
    let after = eight_char_at(&CivilTime::new(2024, 2, 4, 18, 0, 0)).unwrap();
    assert_eq!(after.year.name(), "甲辰");
    assert_eq!(after.month.name(), "丙寅");
}

#[test]
fn mid_june_2024() {
    let ec = eight_char_at(&CivilTime::new(2024, 6, 15, 9, 0, 0)).unwrap();
    assert_eq!(ec.year.name(), "甲辰");
    assert_eq!(ec.month.name(), "庚午");
    assert_eq!(ec.hour.branch().chinese(), "巳");
}

#[test]
fn hour_stem_follows_day_stem() {
    for h in 0..23 {
        let ec = eight_char_at(&CivilTime::new(2024, 2, 10, h, 30, 0)).unwrap();
        let zi_stem = (ec.day.stem().index() % 5) * 2;
        let expected = (zi_stem + ec.hour.branch().index()) % 10;
        assert_eq!(ec.hour.stem().index(), expected, "hour {h}");
    }
}
