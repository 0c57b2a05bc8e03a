//! Greenwich Mean Sidereal Time and Local Sidereal Time.
//!
//! The Julian Day is treated as UT; the chart pipeline does not model the
//! UT1−UTC difference.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Eq. 12.4.

use crate::julian::{DAYS_PER_CENTURY, J2000_JD};

/// Greenwich Mean Sidereal Time in degrees, range [0, 360).
///
/// θ₀ = 280.46061837 + 360.98564736629·(JD − 2451545.0)
///      + 0.000387933·T² − T³/38710000
pub fn gmst_deg(jd: f64) -> f64 {
    let d = jd - J2000_JD;
    let t = d / DAYS_PER_CENTURY;
    let theta = 280.460_618_37 + 360.985_647_366_29 * d + 0.000_387_933 * t * t
        - t * t * t / 38_710_000.0;
    theta.rem_euclid(360.0)
}

/// Local Sidereal Time in degrees from JD and east-positive longitude.
///
/// Returns a value in [0, 360).
pub fn local_sidereal_time_deg(jd: f64, longitude_east_deg: f64) -> f64 {
    (gmst_deg(jd) + longitude_east_deg).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gmst_at_j2000_noon() {
        let g = gmst_deg(J2000_JD);
        assert!((g - 280.46061837).abs() < 1e-8, "GMST = {g}");
    }

    #[test]
    fn gmst_meeus_example_12a() {
        // 1987 Apr 10, 0h UT → 13h10m46.3668s = 197.693195°
        let g = gmst_deg(2_446_895.5);
        assert!((g - 197.693195).abs() < 1e-4, "GMST = {g}");
    }

    #[test]
    fn gmst_advances_per_day() {
        // One solar day moves GMST ~0.9856° beyond a full turn.
        let g1 = gmst_deg(2_451_545.0);
        let g2 = gmst_deg(2_451_546.0);
        let diff = (g2 - g1).rem_euclid(360.0);
        assert!((diff - 0.985647).abs() < 1e-4, "diff = {diff}");
    }

    #[test]
    fn lst_east_offset() {
        let jd = 2_460_000.5;
        let lst = local_sidereal_time_deg(jd, 90.0);
        let expected = (gmst_deg(jd) + 90.0).rem_euclid(360.0);
        assert!((lst - expected).abs() < 1e-12);
    }

    #[test]
    fn lst_range() {
        for &lon in &[-180.0, -75.5, 0.0, 75.7885, 180.0] {
            for &jd in &[2_440_000.5, 2_451_545.0, 2_460_000.25] {
                let lst = local_sidereal_time_deg(jd, lon);
                assert!((0.0..360.0).contains(&lst), "LST out of range: {lst}");
            }
        }
    }
}
