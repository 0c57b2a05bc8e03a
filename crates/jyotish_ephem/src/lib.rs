//! Analytic tropical ecliptic longitudes for the Sun, Moon and the five
//! classical planets.
//!
//! This crate provides:
//! - Low-order solar theory (mean longitude + equation of the centre)
//! - Truncated ELP lunar series with selectable term count
//! - Mean-longitude and Keplerian planet models
//! - Delaunay arguments, mean obliquity and general precession
//!
//! Everything is a pure function of Julian centuries since J2000.0. The
//! accuracy target is astrological (tenths of a degree), not ephemeris
//! grade: no light-time, aberration, nutation, or ΔT is applied.

pub mod error;
pub mod fundamental;
pub mod moon;
pub mod obliquity;
pub mod planets;
pub mod precession;
pub mod sun;

use serde::{Deserialize, Serialize};

pub use error::EphemError;
pub use fundamental::{fundamental_arguments, mean_node_deg};
pub use moon::moon_longitude_deg;
pub use obliquity::mean_obliquity_deg;
pub use planets::{Planet, planet_longitude_deg, planet_mean_longitude_deg, solve_kepler};
pub use precession::{general_precession_longitude_arcsec, general_precession_longitude_deg};
pub use sun::sun_longitude_deg;

/// How much of each series to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Precision {
    /// Twelve lunar terms; planets by mean longitude only.
    Fast,
    /// Full lunar longitude table; planets from Keplerian orbits.
    #[default]
    Standard,
}

/// Bodies with an orbital series. The lunar nodes are not bodies here;
/// they are derived from the mean node polynomial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
}

/// All bodies in evaluation order.
pub const ALL_BODIES: [Body; 7] = [
    Body::Sun,
    Body::Moon,
    Body::Mercury,
    Body::Venus,
    Body::Mars,
    Body::Jupiter,
    Body::Saturn,
];

impl Body {
    /// The planet model backing this body, if it is one of the five planets.
    pub const fn planet(self) -> Option<Planet> {
        match self {
            Self::Mercury => Some(Planet::Mercury),
            Self::Venus => Some(Planet::Venus),
            Self::Mars => Some(Planet::Mars),
            Self::Jupiter => Some(Planet::Jupiter),
            Self::Saturn => Some(Planet::Saturn),
            Self::Sun | Self::Moon => None,
        }
    }
}

/// Tropical ecliptic longitude of `body` in degrees, [0, 360).
///
/// `t` = Julian centuries since J2000.0.
pub fn tropical_longitude_deg(body: Body, t: f64, precision: Precision) -> Result<f64, EphemError> {
    let Some(planet) = body.planet() else {
        return Ok(match body {
            Body::Moon => moon_longitude_deg(t, precision),
            _ => sun_longitude_deg(t),
        });
    };
    match precision {
        Precision::Fast => Ok(planet_mean_longitude_deg(planet, t)),
        Precision::Standard => planet_longitude_deg(planet, t),
    }
}

/// Normalize an angle to [0, 360) degrees.
///
/// Folds the `-0.0 → 360.0` rounding case of `rem_euclid` back to zero.
pub fn normalize_deg(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r >= 360.0 { 0.0 } else { r }
}
