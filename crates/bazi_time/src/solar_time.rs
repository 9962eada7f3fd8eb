//! True solar time from civil (China Standard) time and longitude.
//!
//! One degree of longitude is four minutes of time. China Standard Time is
//! referenced to the 120°E meridian, so a birth at longitude `L` is shifted
//! by `(L - 120) * 4` minutes. No equation-of-time term is applied.

use crate::civil_time::CivilTime;

/// Reference meridian of China Standard Time, degrees east.
pub const REFERENCE_MERIDIAN_DEG: f64 = 120.0;

/// Time correction in minutes for an east-positive longitude.
pub fn offset_minutes(longitude_deg: f64) -> f64 {
    (longitude_deg - REFERENCE_MERIDIAN_DEG) * 4.0
}

/// Shift a civil timestamp to true solar time at minute resolution.
///
/// The shifted minute is `trunc(minute + offset)` (toward zero) and seconds
/// are dropped. `None` longitude falls back to the reference meridian.
pub fn true_solar_time(civil: &CivilTime, longitude_deg: Option<f64>) -> CivilTime {
    let lon = longitude_deg.unwrap_or(REFERENCE_MERIDIAN_DEG);
    let minute = (civil.minute as f64 + offset_minutes(lon)).trunc() as i64;
    CivilTime::new(civil.year, civil.month, civil.day, civil.hour, 0, 0).add_minutes(minute)
}
