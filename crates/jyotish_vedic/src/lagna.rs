//! Lagna (Ascendant) and MC (Midheaven) computation.
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), Chapters 12-13;
//! standard spherical astronomy (Montenbruck & Pfleger).
//!
//! Both points are tropical ecliptic longitudes. The obliquity is the mean
//! obliquity of date and the sidereal time is GMST plus east longitude.

use jyotish_ephem::{mean_obliquity_deg, normalize_deg};
use jyotish_time::{jd_to_centuries, local_sidereal_time_deg};

use crate::location::GeoLocation;

/// Ascendant longitude in degrees from local sidereal time, latitude and
/// obliquity (all degrees).
///
/// `Asc = atan2(cos LST, −(sin LST·cos ε + tan φ·sin ε))`
///
/// The two-argument arctangent places the result on the eastern horizon
/// for every LST; no quadrant patching is needed.
pub fn ascendant_from_lst_deg(lst_deg: f64, latitude_deg: f64, obliquity_deg: f64) -> f64 {
    let lst = lst_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    let phi = latitude_deg.to_radians();
    let asc = f64::atan2(lst.cos(), -(lst.sin() * eps.cos() + phi.tan() * eps.sin()));
    normalize_deg(asc.to_degrees())
}

/// MC longitude in degrees from local sidereal time and obliquity.
///
/// `MC = atan2(sin LST, cos LST·cos ε)`
pub fn mc_from_lst_deg(lst_deg: f64, obliquity_deg: f64) -> f64 {
    let lst = lst_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    normalize_deg(f64::atan2(lst.sin(), lst.cos() * eps.cos()).to_degrees())
}

/// Tropical longitude of the Lagna (Ascendant) in degrees, [0, 360).
pub fn lagna_longitude_deg(jd: f64, location: &GeoLocation) -> f64 {
    lagna_and_mc_deg(jd, location).0
}

/// Tropical longitude of the MC (Midheaven) in degrees, [0, 360).
pub fn mc_longitude_deg(jd: f64, location: &GeoLocation) -> f64 {
    lagna_and_mc_deg(jd, location).1
}

/// Compute both Lagna and MC (shares the LST and obliquity).
///
/// Returns `(lagna_deg, mc_deg)`, both tropical, in [0, 360).
pub fn lagna_and_mc_deg(jd: f64, location: &GeoLocation) -> (f64, f64) {
    let lst = local_sidereal_time_deg(jd, location.longitude_deg());
    let eps = mean_obliquity_deg(jd_to_centuries(jd));
    (
        ascendant_from_lst_deg(lst, location.latitude_deg(), eps),
        mc_from_lst_deg(lst, eps),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 23.439_291;

    fn arc_diff(a: f64, b: f64) -> f64 {
        let d = (a - b).rem_euclid(360.0);
        d.min(360.0 - d)
    }

    /// At the equator with the equinox on the meridian, 0 Cancer rises.
    #[test]
    fn equator_lst_zero() {
        let asc = ascendant_from_lst_deg(0.0, 0.0, EPS);
        assert!((asc - 90.0).abs() < 1e-10, "asc = {asc}");
    }

    #[test]
    fn equator_cardinal_points() {
        for (lst, expected) in [(90.0, 180.0), (180.0, 270.0)] {
            let asc = ascendant_from_lst_deg(lst, 0.0, EPS);
            assert!((asc - expected).abs() < 1e-10, "LST {lst}: asc = {asc}");
        }
        let asc = ascendant_from_lst_deg(270.0, 0.0, EPS);
        assert!(arc_diff(asc, 0.0) < 1e-10, "asc = {asc}");
    }

    #[test]
    fn mc_lst_zero() {
        assert!(mc_from_lst_deg(0.0, EPS).abs() < 1e-10);
        assert!((mc_from_lst_deg(180.0, EPS) - 180.0).abs() < 1e-10);
    }

    /// The ascendant must not jump when LST crosses 90 or 270 degrees.
    #[test]
    fn continuous_across_quadrant_edges() {
        for lat in [-45.0, 0.0, 23.1765, 51.5] {
            for lst in [90.0, 270.0] {
                let below = ascendant_from_lst_deg(lst - 1e-6, lat, EPS);
                let above = ascendant_from_lst_deg(lst + 1e-6, lat, EPS);
                assert!(
                    arc_diff(below, above) < 1e-3,
                    "lat {lat}, LST {lst}: {below} vs {above}"
                );
            }
        }
    }

    /// The ascendant advances through every sign over one sidereal day.
    #[test]
    fn sweep_is_monotonic_mod_360() {
        let lat = 28.6;
        let mut prev = ascendant_from_lst_deg(0.0, lat, EPS);
        for i in 1..=720 {
            let asc = ascendant_from_lst_deg(i as f64 * 0.5, lat, EPS);
            let step = (asc - prev).rem_euclid(360.0);
            assert!(step > 0.0 && step < 5.0, "step {step} at i={i}");
            prev = asc;
        }
    }

    /// The ascendant lies east of the MC by less than 180 degrees.
    #[test]
    fn ascendant_leads_mc() {
        for lst in [10.0, 100.0, 200.0, 300.0] {
            let asc = ascendant_from_lst_deg(lst, 10.0, EPS);
            let mc = mc_from_lst_deg(lst, EPS);
            let lead = (asc - mc).rem_euclid(360.0);
            assert!(lead > 60.0 && lead < 120.0, "LST {lst}: lead {lead}");
        }
    }

    #[test]
    fn high_latitude_finite() {
        let asc = ascendant_from_lst_deg(45.0, 89.99, EPS);
        assert!(asc.is_finite() && (0.0..360.0).contains(&asc));
    }

    #[test]
    fn combined_matches_parts() {
        let loc = GeoLocation::new(23.1765, 75.7885).unwrap();
        let jd = 2_447_906.770_833_333;
        let (asc, mc) = lagna_and_mc_deg(jd, &loc);
        assert_eq!(asc, lagna_longitude_deg(jd, &loc));
        assert_eq!(mc, mc_longitude_deg(jd, &loc));
    }
}
