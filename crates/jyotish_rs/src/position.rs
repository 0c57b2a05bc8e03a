//! Zodiacal positions: a tropical longitude with its sidereal classification.

use jyotish_vedic::{
    Dms, Graha, Nakshatra, Rashi, nakshatra_from_longitude, rashi_from_longitude,
};
use serde::{Deserialize, Serialize};

/// A point on the ecliptic in both zodiacs, classified by rashi and
/// nakshatra. Used for the ascendant and MC.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZodiacPoint {
    /// Tropical ecliptic longitude in degrees, [0, 360).
    pub tropical_deg: f64,
    /// Sidereal ecliptic longitude in degrees, [0, 360).
    pub sidereal_deg: f64,
    pub rashi: Rashi,
    /// 0-based rashi index (0 = Mesha).
    pub rashi_index: u8,
    /// Degrees within the rashi, [0, 30).
    pub degrees_in_rashi: f64,
    /// `degrees_in_rashi` as degrees-minutes-seconds.
    pub dms: Dms,
    pub nakshatra: Nakshatra,
    /// 0-based nakshatra index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Nakshatra quarter, 1-4.
    pub pada: u8,
}

impl ZodiacPoint {
    /// Classify a point whose tropical and sidereal longitudes are known.
    pub fn new(tropical_deg: f64, sidereal_deg: f64) -> Self {
        let rashi = rashi_from_longitude(sidereal_deg);
        let nakshatra = nakshatra_from_longitude(sidereal_deg);
        Self {
            tropical_deg,
            sidereal_deg,
            rashi: rashi.rashi,
            rashi_index: rashi.rashi_index,
            degrees_in_rashi: rashi.degrees_in_rashi,
            dms: rashi.dms,
            nakshatra: nakshatra.nakshatra,
            nakshatra_index: nakshatra.nakshatra_index,
            pada: nakshatra.pada,
        }
    }
}

/// A graha's position in a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    pub graha: Graha,
    #[serde(flatten)]
    pub point: ZodiacPoint,
}

impl BodyPosition {
    pub fn new(graha: Graha, tropical_deg: f64, sidereal_deg: f64) -> Self {
        Self {
            graha,
            point: ZodiacPoint::new(tropical_deg, sidereal_deg),
        }
    }

    pub fn sidereal_deg(&self) -> f64 {
        self.point.sidereal_deg
    }

    pub fn rashi(&self) -> Rashi {
        self.point.rashi
    }

    pub fn nakshatra(&self) -> Nakshatra {
        self.point.nakshatra
    }
}

impl std::fmt::Display for BodyPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let p = &self.point;
        write!(
            f,
            "{:<8} {:>9.4}°  {:<22} {}  {} pada {}",
            self.graha.english_name(),
            p.sidereal_deg,
            p.rashi.to_string(),
            p.dms,
            p.nakshatra.name(),
            p.pada
        )
    }
}
