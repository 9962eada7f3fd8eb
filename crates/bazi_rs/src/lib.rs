//! Convenience layer for the bazi engine.
//!
//! Takes a raw birth input (China Standard Time, gender, optional place),
//! resolves the place to a longitude, shifts to true solar time and returns
//! the annotated chart and the Decade → Year → Month luck calendar.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use bazi_rs::*;
//!
//! let input = BirthInput::new(1990, 5, 20, 8, 30, Gender::Male).with_place("39.9,116.4");
//! let (chart, calendar) = calculate_all(&input, &NumericResolver).unwrap();
//! println!("{}", chart.eight_char);
//! println!("first decade: {}", calendar.decade(0).unwrap().base.gan_zhi);
//! ```

pub mod chart;
pub mod error;
pub mod input;
pub mod location;

pub use chart::{
    BaziContext, BaziResult, bazi_context, calculate_all, calculate_bazi, calculate_fortunes,
    calculate_fortunes_with, format_chart,
};
pub use error::BaziError;
pub use input::BirthInput;
pub use location::{
    ChainResolver, CoordinateResolver, Coordinates, Gazetteer, NoResolver, NumericResolver,
    resolve_longitude,
};

// Re-export the types callers need so they don't depend on the lower crates.
pub use bazi_base::{
    DecadeFortuneData, EarthBranch, EightChar, FlowMonthInfo, FlowYearInfo, FortuneBaseInfo,
    FortuneCalendar, Gender, HeavenStem, HiddenStemInfo, NaYin, PillarInfo, SixtyCycle, TenStar,
    TenStarLabel, Terrain, Zodiac,
};
pub use bazi_search::{ChildLimit, SolarTerm, SolarTermEvent, terms_for_year};
pub use bazi_time::CivilTime;
