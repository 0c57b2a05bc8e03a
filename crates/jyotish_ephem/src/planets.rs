//! Geocentric tropical longitudes of Mercury, Venus, Mars, Jupiter, Saturn.
//!
//! Two models share one element table:
//! - mean longitude `L₀ + L₁·T` (heliocentric, no perturbations), used at
//!   [`Precision::Fast`](crate::Precision::Fast)
//! - Keplerian orbits for the planet and the Earth–Moon barycentre, differenced
//!   to a geocentric J2000 ecliptic longitude, then precessed to the equinox
//!   of date
//!
//! Source: Standish, "Keplerian Elements for Approximate Positions of the
//! Major Planets" (JPL, Table 1, valid 1800–2050).

use crate::error::EphemError;
use crate::normalize_deg;
use crate::precession::general_precession_longitude_deg;

const KEPLER_TOLERANCE: f64 = 1e-12;
const KEPLER_MAX_ITER: usize = 30;

/// Mean orbital elements at J2000 and their rates per Julian century.
///
/// `[a (au), e, I (deg), L (deg), ϖ (deg), Ω (deg)]`
#[derive(Debug, Clone, Copy)]
struct OrbitalElements {
    at_epoch: [f64; 6],
    per_century: [f64; 6],
}

impl OrbitalElements {
    fn at(&self, t: f64) -> [f64; 6] {
        let mut out = self.at_epoch;
        for (value, rate) in out.iter_mut().zip(self.per_century) {
            *value += rate * t;
        }
        out
    }
}

#[rustfmt::skip]
const MERCURY: OrbitalElements = OrbitalElements {
    at_epoch:    [0.387_099_27, 0.205_635_93,  7.004_979_02, 252.250_323_50,  77.457_796_28,  48.330_765_93],
    per_century: [0.000_000_37, 0.000_019_06, -0.005_947_49, 149_472.674_111_75, 0.160_476_89, -0.125_340_81],
};

#[rustfmt::skip]
const VENUS: OrbitalElements = OrbitalElements {
    at_epoch:    [0.723_335_66,  0.006_776_72,  3.394_676_05, 181.979_099_50, 131.602_467_18,  76.679_842_55],
    per_century: [0.000_003_90, -0.000_041_07, -0.000_788_90, 58_517.815_387_29, 0.002_683_29, -0.277_694_18],
};

#[rustfmt::skip]
const EARTH_MOON_BARYCENTRE: OrbitalElements = OrbitalElements {
    at_epoch:    [1.000_002_61,  0.016_711_23, -0.000_015_31, 100.464_571_66, 102.937_681_93, 0.0],
    per_century: [0.000_005_62, -0.000_043_92, -0.012_946_68, 35_999.372_449_81, 0.323_273_64, 0.0],
};

#[rustfmt::skip]
const MARS: OrbitalElements = OrbitalElements {
    at_epoch:    [1.523_710_34, 0.093_394_10,  1.849_691_42,  -4.553_432_05, -23.943_629_59,  49.559_538_91],
    per_century: [0.000_018_47, 0.000_078_82, -0.008_131_31, 19_140.302_684_99, 0.444_410_88, -0.292_573_43],
};

#[rustfmt::skip]
const JUPITER: OrbitalElements = OrbitalElements {
    at_epoch:    [ 5.202_887_00,  0.048_386_24,  1.304_396_95, 34.396_440_51, 14.728_479_83, 100.473_909_09],
    per_century: [-0.000_116_07, -0.000_132_53, -0.001_837_14, 3_034.746_127_75, 0.212_526_68, 0.204_691_06],
};

#[rustfmt::skip]
const SATURN: OrbitalElements = OrbitalElements {
    at_epoch:    [ 9.536_675_94,  0.053_861_79, 2.485_991_87, 49.954_244_23, 92.598_878_31, 113.662_424_48],
    per_century: [-0.001_250_60, -0.000_509_91, 0.001_936_09, 1_222.493_622_01, -0.418_972_16, -0.288_677_94],
};

/// The five planets covered by this module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Planet {
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

impl Planet {
    fn elements(self) -> &'static OrbitalElements {
        match self {
            Self::Mercury => &MERCURY,
            Self::Venus => &VENUS,
            Self::Mars => &MARS,
            Self::Jupiter => &JUPITER,
            Self::Saturn => &SATURN,
        }
    }
}

/// Heliocentric mean longitude `L₀ + L₁·T` in degrees, [0, 360).
pub fn planet_mean_longitude_deg(planet: Planet, t: f64) -> f64 {
    let el = planet.elements();
    normalize_deg(el.at_epoch[3] + el.per_century[3] * t)
}

/// Solve Kepler's equation `E − e·sin E = M` (radians) by Newton iteration.
pub fn solve_kepler(mean_anomaly_rad: f64, e: f64) -> Result<f64, EphemError> {
    let mut ecc_anomaly = mean_anomaly_rad + e * mean_anomaly_rad.sin();
    for _ in 0..KEPLER_MAX_ITER {
        let delta = (ecc_anomaly - e * ecc_anomaly.sin() - mean_anomaly_rad)
            / (1.0 - e * ecc_anomaly.cos());
        ecc_anomaly -= delta;
        if delta.abs() < KEPLER_TOLERANCE {
            return Ok(ecc_anomaly);
        }
    }
    Err(EphemError::NoConvergence("kepler equation"))
}

/// Heliocentric ecliptic J2000 rectangular coordinates (au).
fn heliocentric_xyz(el: &OrbitalElements, t: f64) -> Result<[f64; 3], EphemError> {
    let [a, e, incl, mean_lon, peri_lon, node_lon] = el.at(t);

    let m = (mean_lon - peri_lon).rem_euclid(360.0).to_radians();
    let omega = (peri_lon - node_lon).to_radians();
    let node = node_lon.to_radians();
    let incl = incl.to_radians();

    let ecc_anomaly = solve_kepler(m, e)?;
    let xp = a * (ecc_anomaly.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ecc_anomaly.sin();

    let (so, co) = omega.sin_cos();
    let (sn, cn) = node.sin_cos();
    let (si, ci) = incl.sin_cos();

    let x = (co * cn - so * sn * ci) * xp + (-so * cn - co * sn * ci) * yp;
    let y = (co * sn + so * cn * ci) * xp + (-so * sn + co * cn * ci) * yp;
    let z = (so * si) * xp + (co * si) * yp;
    Ok([x, y, z])
}

/// Geocentric tropical longitude (equinox of date) in degrees, [0, 360).
pub fn planet_longitude_deg(planet: Planet, t: f64) -> Result<f64, EphemError> {
    let [px, py, _] = heliocentric_xyz(planet.elements(), t)?;
    let [ex, ey, _] = heliocentric_xyz(&EARTH_MOON_BARYCENTRE, t)?;
    let lon_j2000 = (py - ey).atan2(px - ex).to_degrees();
    Ok(normalize_deg(lon_j2000 + general_precession_longitude_deg(t)))
}
