//! Conversion between local civil Julian Dates and Terrestrial Time.
//!
//! ΔT = TT − UT from the Espenak–Meeus polynomial fits (NASA eclipse
//! website, 2006). Accuracy is a few seconds across 1900-2050, far below
//! what the solar-term search needs.

/// UTC offset of China Standard Time, the zone all civil inputs are taken in.
pub const CHINA_UTC_OFFSET_HOURS: f64 = 8.0;

/// ΔT in seconds for a decimal year.
pub fn delta_t_seconds(year: f64) -> f64 {
    let y = year;
    if y < 1900.0 {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    } else if y < 1920.0 {
        let t = y - 1900.0;
        -2.79 + 1.494119 * t - 0.0598939 * t.powi(2) + 0.0061966 * t.powi(3)
            - 0.000197 * t.powi(4)
    } else if y < 1941.0 {
        let t = y - 1920.0;
        21.20 + 0.84493 * t - 0.076100 * t.powi(2) + 0.0020936 * t.powi(3)
    } else if y < 1961.0 {
        let t = y - 1950.0;
        29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
    } else if y < 1986.0 {
        let t = y - 1975.0;
        45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
    } else if y < 2005.0 {
        let t = y - 2000.0;
        63.86 + 0.3345 * t - 0.060374 * t.powi(2)
            + 0.0017275 * t.powi(3)
            + 0.000651814 * t.powi(4)
            + 0.00002373599 * t.powi(5)
    } else if y < 2050.0 {
        let t = y - 2000.0;
        62.92 + 0.32217 * t + 0.005589 * t.powi(2)
    } else if y < 2150.0 {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u - 0.5628 * (2150.0 - y)
    } else {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    }
}

/// Decimal year of a Julian Date (good enough for ΔT lookup).
fn decimal_year(jd: f64) -> f64 {
    2000.0 + (jd - crate::julian::J2000_JD) / 365.25
}

/// Local civil JD (zone `utc_offset_hours`) to JD in TT.
pub fn local_jd_to_tt(jd_local: f64, utc_offset_hours: f64) -> f64 {
    let jd_ut = jd_local - utc_offset_hours / 24.0;
    jd_ut + delta_t_seconds(decimal_year(jd_ut)) / 86_400.0
}

/// JD in TT back to local civil JD (zone `utc_offset_hours`).
pub fn tt_to_local_jd(jd_tt: f64, utc_offset_hours: f64) -> f64 {
    let jd_ut = jd_tt - delta_t_seconds(decimal_year(jd_tt)) / 86_400.0;
    jd_ut + utc_offset_hours / 24.0
}
