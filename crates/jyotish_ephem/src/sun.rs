//! Geometric longitude of the Sun.
//!
//! Low-order solar theory: mean longitude plus the equation of the centre.
//! Accurate to about 0.01° over several centuries around J2000.
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 25.

use crate::normalize_deg;

/// Sun's geometric mean longitude L₀ in degrees (not normalized).
pub fn sun_mean_longitude_deg(t: f64) -> f64 {
    280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t
}

/// Equation of the centre C in degrees.
///
/// Three sine terms in M, 2M and 3M, where M is the Sun's mean anomaly.
pub fn equation_of_center_deg(t: f64) -> f64 {
    let m = (357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t).to_radians();
    (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin()
}

/// Sun's true tropical longitude `L₀ + C` in degrees, [0, 360).
pub fn sun_longitude_deg(t: f64) -> f64 {
    normalize_deg(sun_mean_longitude_deg(t) + equation_of_center_deg(t))
}
