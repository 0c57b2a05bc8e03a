//! Mean obliquity of the ecliptic.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Eq. 22.2 (IAU).

/// Mean obliquity of the ecliptic in degrees for Julian centuries `t`.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let arcsec = 21.448 - 46.8150 * t - 0.00059 * t * t + 0.001813 * t * t * t;
    23.0 + 26.0 / 60.0 + arcsec / 3600.0
}
