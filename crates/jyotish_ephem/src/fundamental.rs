//! Lunar fundamental arguments (Delaunay arguments).
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Eqs. 47.1–47.7.
//! All polynomials are in Julian centuries `t` since J2000.0.

use std::f64::consts::TAU;

/// Moon's mean longitude L′ in degrees (not normalized).
pub fn moon_mean_longitude_deg(t: f64) -> f64 {
    218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t * t + t * t * t / 538_841.0
        - t * t * t * t / 65_194_000.0
}

/// Moon's mean elongation from the Sun, D, in degrees.
pub fn mean_elongation_deg(t: f64) -> f64 {
    297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t * t + t * t * t / 545_868.0
        - t * t * t * t / 113_065_000.0
}

/// Sun's mean anomaly, M, in degrees.
pub fn sun_mean_anomaly_deg(t: f64) -> f64 {
    357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t * t + t * t * t / 24_490_000.0
}

/// Moon's mean anomaly, M′, in degrees.
pub fn moon_mean_anomaly_deg(t: f64) -> f64 {
    134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t * t + t * t * t / 69_699.0
        - t * t * t * t / 14_712_000.0
}

/// Moon's argument of latitude, F, in degrees.
pub fn argument_of_latitude_deg(t: f64) -> f64 {
    93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t * t - t * t * t / 3_526_000.0
        + t * t * t * t / 863_310_000.0
}

/// Longitude of the Moon's mean ascending node, Ω, in degrees.
pub fn mean_node_deg(t: f64) -> f64 {
    125.044_547_9 - 1_934.136_289_1 * t + 0.002_075_4 * t * t + t * t * t / 467_441.0
        - t * t * t * t / 60_616_000.0
}

/// Eccentricity damping factor E applied to terms containing M.
pub fn eccentricity_factor(t: f64) -> f64 {
    1.0 - 0.002_516 * t - 0.000_007_4 * t * t
}

/// The five Delaunay arguments `[l, l', F, D, Ω]` in radians, each in [0, 2π).
///
/// `l` = Moon's mean anomaly, `l'` = Sun's mean anomaly.
pub fn fundamental_arguments(t: f64) -> [f64; 5] {
    [
        moon_mean_anomaly_deg(t),
        sun_mean_anomaly_deg(t),
        argument_of_latitude_deg(t),
        mean_elongation_deg(t),
        mean_node_deg(t),
    ]
    .map(|deg| deg.to_radians().rem_euclid(TAU))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_47a() {
        // 1992 April 12, 0h TD: T = -0.077221081451
        let t = -0.077_221_081_451;
        let norm = |d: f64| d.rem_euclid(360.0);
        assert!((norm(moon_mean_longitude_deg(t)) - 134.290182).abs() < 1e-5);
        assert!((norm(mean_elongation_deg(t)) - 113.842304).abs() < 1e-5);
        assert!((norm(sun_mean_anomaly_deg(t)) - 97.643514).abs() < 1e-5);
        assert!((norm(moon_mean_anomaly_deg(t)) - 5.150833).abs() < 1e-5);
        assert!((norm(argument_of_latitude_deg(t)) - 219.889721).abs() < 1e-5);
        assert!((eccentricity_factor(t) - 1.000194).abs() < 1e-6);
    }

    #[test]
    fn node_at_j2000() {
        assert!((mean_node_deg(0.0) - 125.044548).abs() < 1e-6);
    }

    #[test]
    fn arguments_in_range() {
        for &t in &[-5.0, -0.1, 0.0, 0.24, 3.0] {
            for a in fundamental_arguments(t) {
                assert!((0.0..TAU).contains(&a), "t={t}: {a}");
            }
        }
    }
}
