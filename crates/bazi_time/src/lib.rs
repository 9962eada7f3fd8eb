//! Civil time handling for the bazi engine.
//!
//! This crate provides:
//! - `CivilTime`, a second-resolution proleptic Gregorian timestamp
//! - Julian Date / Julian Day Number conversions
//! - ΔT (TT − UT) for converting local civil time to Terrestrial Time
//! - True solar time correction from longitude (reference meridian 120°E)

pub mod civil_time;
pub mod error;
pub mod julian;
pub mod scales;
pub mod solar_time;

pub use civil_time::CivilTime;
pub use error::TimeError;
pub use julian::{
    J2000_JD, SECONDS_PER_DAY, calendar_to_jd, days_in_month, is_leap_year, jd_to_calendar,
    jdn_from_ymd, ymd_from_jdn,
};
pub use scales::{CHINA_UTC_OFFSET_HOURS, delta_t_seconds, local_jd_to_tt, tt_to_local_jd};
pub use solar_time::{REFERENCE_MERIDIAN_DEG, offset_minutes, true_solar_time};
