//! Equal-house (bhava) layout from the ascendant.
//!
//! House N begins at `asc + (N−1)·30` on the sidereal ecliptic. Each cusp
//! is classified into its rashi, whose lord becomes the house lord.

use jyotish_ephem::normalize_deg;
use serde::{Deserialize, Serialize};

use crate::graha::{Graha, rashi_lord};
use crate::rashi::{Rashi, rashi_from_longitude};

/// Number of houses.
pub const HOUSE_COUNT: usize = 12;

/// One house of the chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct House {
    /// House number, 1-based (1 = lagna).
    pub number: u8,
    /// Sidereal longitude of the house cusp in degrees, [0, 360).
    pub longitude_deg: f64,
    /// Rashi containing the cusp.
    pub rashi: Rashi,
    /// Degrees of the cusp within its rashi, [0, 30).
    pub degrees_in_rashi: f64,
    /// Lord of the cusp rashi.
    pub lord: Graha,
}

/// Build all twelve houses from the sidereal ascendant.
pub fn equal_houses(ascendant_sidereal_deg: f64) -> [House; HOUSE_COUNT] {
    std::array::from_fn(|i| {
        let longitude_deg = normalize_deg(ascendant_sidereal_deg + i as f64 * 30.0);
        let info = rashi_from_longitude(longitude_deg);
        House {
            number: i as u8 + 1,
            longitude_deg,
            rashi: info.rashi,
            degrees_in_rashi: info.degrees_in_rashi,
            lord: rashi_lord(info.rashi),
        }
    })
}

/// House number (1..=12) occupied by a sidereal longitude, counting equal
/// 30-degree houses from the ascendant.
pub fn house_of(longitude_deg: f64, ascendant_sidereal_deg: f64) -> u8 {
    let offset = normalize_deg(longitude_deg - ascendant_sidereal_deg);
    ((offset / 30.0).floor() as u8).min(11) + 1
}
