//! Golden-value tests for solar-term instants against published almanac
//! times (China Standard Time, minute precision).
//!
//! The low-precision solar theory is good to ~0.01°, so a 30 minute
//! tolerance is used.

use bazi_search::{SolarTerm, SolarTermEvent, term_at_or_before, terms_for_year};
use bazi_time::CivilTime;

const TOLERANCE_SECONDS: i64 = 30 * 60;

fn assert_near(event: &SolarTermEvent, expected: CivilTime) {
    let off = expected.seconds_until(&event.time).abs();
    assert!(
        off <= TOLERANCE_SECONDS,
        "{} computed {}, expected {expected} (off by {off}s)",
        event.term.chinese(),
        event.time
    );
}

#[test]
fn lichun_2024() {
    let e = SolarTermEvent::find(2024, SolarTerm::LiChun).unwrap();
    assert_near(&e, CivilTime::new(2024, 2, 4, 16, 27, 0));
}

#[test]
fn dongzhi_2023() {
    // Winter solstice of December 2023 opens term-year 2024.
    let e = SolarTermEvent::find(2024, SolarTerm::DongZhi).unwrap();
    assert_near(&e, CivilTime::new(2023, 12, 22, 11, 27, 0));
}

#[test]
fn chunfen_2024() {
    let e = SolarTermEvent::find(2024, SolarTerm::ChunFen).unwrap();
    assert_near(&e, CivilTime::new(2024, 3, 20, 11, 6, 0));
}

#[test]
fn xiazhi_2024() {
    let e = SolarTermEvent::find(2024, SolarTerm::XiaZhi).unwrap();
    assert_near(&e, CivilTime::new(2024, 6, 21, 4, 51, 0));
}

#[test]
fn term_at_or_before_brackets_instant() {
    let t = CivilTime::new(2024, 2, 4, 18, 0, 0);
    let e = term_at_or_before(&t).unwrap();
    assert_eq!(e.term, SolarTerm::LiChun);
    let t = CivilTime::new(2024, 2, 4, 15, 0, 0);
    let e = term_at_or_before(&t).unwrap();
    assert_eq!(e.term, SolarTerm::DaHan);
}

#[test]
fn term_at_or_before_early_january() {
    // Before 小寒 (Jan 6): still the December solstice.
    let e = term_at_or_before(&CivilTime::new(2024, 1, 2, 0, 0, 0)).unwrap();
    assert_eq!(e.term, SolarTerm::DongZhi);
    assert_eq!(e.time.year, 2023);
}

#[test]
fn term_at_or_before_late_december() {
    let e = term_at_or_before(&CivilTime::new(2023, 12, 30, 0, 0, 0)).unwrap();
    assert_eq!(e.term, SolarTerm::DongZhi);
    assert_eq!(e.year, 2024);
}

#[test]
fn terms_spaced_about_fifteen_days() {
    let terms = terms_for_year(1990).unwrap();
    for w in terms.windows(2) {
        let gap = w[1].jd_tt - w[0].jd_tt;
        assert!((14.5..16.0).contains(&gap), "{} -> {}: {gap}", w[0].term, w[1].term);
    }
}
