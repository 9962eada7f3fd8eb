//! Apparent geocentric longitude of the Sun.
//!
//! Low-precision solar theory (Meeus, Astronomical Algorithms, ch. 25):
//! mean longitude, equation of centre, then nutation and aberration folded
//! into a single Ω term. Accuracy is about 0.01°, i.e. a quarter hour in the
//! timing of a solar term.

use bazi_time::J2000_JD;

/// Julian centuries of TT since J2000.0.
pub fn jd_tt_to_centuries(jd_tt: f64) -> f64 {
    (jd_tt - J2000_JD) / 36_525.0
}

/// Normalize degrees to [0, 360).
pub fn normalize_deg(deg: f64) -> f64 {
    deg.rem_euclid(360.0)
}

/// Normalize degrees to (-180, 180].
pub fn wrap_180(deg: f64) -> f64 {
    let d = normalize_deg(deg);
    if d > 180.0 { d - 360.0 } else { d }
}

/// Apparent ecliptic longitude of the Sun in degrees, [0, 360).
pub fn apparent_solar_longitude(jd_tt: f64) -> f64 {
    let t = jd_tt_to_centuries(jd_tt);
    let l0 = 280.46646 + 36_000.76983 * t + 0.000_303_2 * t * t;
    let m = (357.52911 + 35_999.05029 * t - 0.000_153_7 * t * t).to_radians();
    let c = (1.914602 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();
    let omega = (125.04 - 1934.136 * t).to_radians();
    normalize_deg(l0 + c - 0.00569 - 0.00478 * omega.sin())
}
