//! Tropical longitude of the Moon from the ELP-2000/82 truncated series.
//!
//! The mean longitude L′ is corrected by a periodic series in the
//! fundamental arguments D, M, M′ and F. Terms containing the Sun's mean
//! anomaly M are damped by the eccentricity factor E (E² for 2M).
//!
//! Source: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 47,
//! Table 47.A (longitude column).

use crate::Precision;
use crate::fundamental::{
    argument_of_latitude_deg, eccentricity_factor, mean_elongation_deg, moon_mean_anomaly_deg,
    moon_mean_longitude_deg, sun_mean_anomaly_deg,
};
use crate::normalize_deg;

/// Number of leading terms evaluated at [`Precision::Fast`].
pub const FAST_TERM_COUNT: usize = 12;

/// Periodic longitude terms: `[D, M, M′, F, Σl]`, Σl in 1e-6 degrees.
///
/// Sorted by descending amplitude for the first twelve rows so that
/// truncation keeps the dominant terms.
#[rustfmt::skip]
static LONGITUDE_TERMS: [(i8, i8, i8, i8, i32); 59] = [
    ( 0,  0,  1,  0,  6_288_774),
    ( 2,  0, -1,  0,  1_274_027),
    ( 2,  0,  0,  0,    658_314),
    ( 0,  0,  2,  0,    213_618),
    ( 0,  1,  0,  0,   -185_116),
    ( 0,  0,  0,  2,   -114_332),
    ( 2,  0, -2,  0,     58_793),
    ( 2, -1, -1,  0,     57_066),
    ( 2,  0,  1,  0,     53_322),
    ( 2, -1,  0,  0,     45_758),
    ( 0,  1, -1,  0,    -40_923),
    ( 1,  0,  0,  0,    -34_720),
    ( 0,  1,  1,  0,    -30_383),
    ( 2,  0,  0, -2,     15_327),
    ( 0,  0,  1,  2,    -12_528),
    ( 0,  0,  1, -2,     10_980),
    ( 4,  0, -1,  0,     10_675),
    ( 0,  0,  3,  0,     10_034),
    ( 4,  0, -2,  0,      8_548),
    ( 2,  1, -1,  0,     -7_888),
    ( 2,  1,  0,  0,     -6_766),
    ( 1,  0, -1,  0,     -5_163),
    ( 1,  1,  0,  0,      4_987),
    ( 2, -1,  1,  0,      4_036),
    ( 2,  0,  2,  0,      3_994),
    ( 4,  0,  0,  0,      3_861),
    ( 2,  0, -3,  0,      3_665),
    ( 0,  1, -2,  0,     -2_689),
    ( 2,  0, -1,  2,     -2_602),
    ( 2, -1, -2,  0,      2_390),
    ( 1,  0,  1,  0,     -2_348),
    ( 2, -2,  0,  0,      2_236),
    ( 0,  1,  2,  0,     -2_120),
    ( 0,  2,  0,  0,     -2_069),
    ( 2, -2, -1,  0,      2_048),
    ( 2,  0,  1, -2,     -1_773),
    ( 2,  0,  0,  2,     -1_595),
    ( 4, -1, -1,  0,      1_215),
    ( 0,  0,  2,  2,     -1_110),
    ( 3,  0, -1,  0,       -892),
    ( 2,  1,  1,  0,       -810),
    ( 4, -1, -2,  0,        759),
    ( 0,  2, -1,  0,       -713),
    ( 2,  2, -1,  0,       -700),
    ( 2,  1, -2,  0,        691),
    ( 2, -1,  0, -2,        596),
    ( 4,  0,  1,  0,        549),
    ( 0,  0,  4,  0,        537),
    ( 4, -1,  0,  0,        520),
    ( 1,  0, -2,  0,       -487),
    ( 2,  1,  0, -2,       -399),
    ( 0,  0,  2, -2,       -381),
    ( 1,  1,  1,  0,        351),
    ( 3,  0, -2,  0,       -340),
    ( 4,  0, -3,  0,        330),
    ( 2, -1,  2,  0,        327),
    ( 0,  2,  1,  0,       -323),
    ( 1,  1, -1,  0,        299),
    ( 2,  0,  3,  0,        294),
];

/// Sum of the periodic longitude terms, in degrees.
fn periodic_longitude_deg(t: f64, term_count: usize) -> f64 {
    let d = mean_elongation_deg(t);
    let m = sun_mean_anomaly_deg(t);
    let m_prime = moon_mean_anomaly_deg(t);
    let f = argument_of_latitude_deg(t);
    let e = eccentricity_factor(t);

    let mut sum = 0.0_f64;
    for &(nd, nm, nmp, nf, coeff) in LONGITUDE_TERMS.iter().take(term_count) {
        let arg = (nd as f64 * d + nm as f64 * m + nmp as f64 * m_prime + nf as f64 * f)
            .to_radians();
        let damping = match nm.abs() {
            1 => e,
            2 => e * e,
            _ => 1.0,
        };
        sum += coeff as f64 * damping * arg.sin();
    }
    sum * 1e-6
}

/// Additive corrections for Venus (A1), Jupiter (A2) and the Earth's
/// flattening (L′ − F), in degrees.
fn additive_longitude_deg(t: f64) -> f64 {
    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    let l_minus_f = (moon_mean_longitude_deg(t) - argument_of_latitude_deg(t)).to_radians();
    (3958.0 * a1.sin() + 1962.0 * l_minus_f.sin() + 318.0 * a2.sin()) * 1e-6
}

/// Moon's tropical ecliptic longitude in degrees, [0, 360).
///
/// `Fast` keeps the twelve largest periodic terms; `Standard` evaluates
/// the full longitude table plus the additive planetary terms.
pub fn moon_longitude_deg(t: f64, precision: Precision) -> f64 {
    let correction = match precision {
        Precision::Fast => periodic_longitude_deg(t, FAST_TERM_COUNT),
        Precision::Standard => {
            periodic_longitude_deg(t, LONGITUDE_TERMS.len()) + additive_longitude_deg(t)
        }
    };
    normalize_deg(moon_mean_longitude_deg(t) + correction)
}
