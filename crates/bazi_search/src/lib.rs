//! Calendrical primitives for the bazi engine.
//!
//! This crate provides:
//! - Apparent solar longitude (low-precision solar theory)
//! - Solar-term search and per-year term listings
//! - New moons and the lunar (Spring Festival) year
//! - Four Pillars decomposition of a birth instant
//! - Child limit and the decade / flow-year cursors consumed by the
//!   luck-calendar expander in `bazi_base`
//!
//! All civil inputs are China Standard Time, or true solar time derived
//! from it.

pub mod child_limit;
pub mod error;
pub mod four_pillars;
pub mod moon;
pub mod solar_term;
pub mod sun;

pub use child_limit::{ChildLimit, ChildLimitSource, DecadeFortune, Fortune};
pub use error::SearchError;
pub use four_pillars::{LICHUN_LONGITUDE_DEG, SolarMonth, eight_char_at, solar_month_at};
pub use moon::{SYNODIC_MONTH_DAYS, lunar_year_at, new_moon_jd_tt, spring_festival};
pub use solar_term::{
    ALL_SOLAR_TERMS, SolarTerm, SolarTermEvent, TROPICAL_YEAR_DAYS, solar_term_jd_tt,
    term_at_or_before, terms_for_year,
};
pub use sun::{apparent_solar_longitude, jd_tt_to_centuries};
