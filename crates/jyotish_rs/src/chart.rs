//! Natal chart assembly.
//!
//! Pipeline: civil birth time → Julian Day → ayanamsha → per-graha
//! tropical and sidereal longitudes → ascendant and MC → equal houses →
//! dosha balance. Every stage is a pure function of the inputs, so a
//! chart is recomputed rather than mutated.

use std::collections::BTreeMap;

use jyotish_ephem::tropical_longitude_deg;
use jyotish_time::{CivilDateTime, jd_to_centuries};
use jyotish_vedic::{
    DoshaBalance, GeoLocation, Graha, House, SAPTA_GRAHAS, ayanamsha_deg, dosha_balance,
    equal_houses, house_of, ketu_from_rahu, lagna_and_mc_deg, rahu_deg, tropical_to_sidereal,
};
use serde::{Deserialize, Serialize};

use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::position::{BodyPosition, ZodiacPoint};

/// Birth data for a natal chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirthInput {
    /// Civil date and time of birth.
    pub datetime: CivilDateTime,
    /// Latitude in degrees, north positive.
    pub latitude_deg: f64,
    /// Longitude in degrees, east positive.
    pub longitude_deg: f64,
    /// Offset of `datetime` from UT in minutes, east positive. Zero means
    /// the civil time is used as UT.
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

impl BirthInput {
    pub fn new(datetime: CivilDateTime, latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            datetime,
            latitude_deg,
            longitude_deg,
            utc_offset_minutes: 0,
        }
    }

    /// Parse `YYYY-MM-DD` and `HH:MM[:SS]` strings.
    pub fn parse(
        date: &str,
        time: &str,
        latitude_deg: f64,
        longitude_deg: f64,
    ) -> Result<Self, ChartError> {
        let datetime = CivilDateTime::parse(date, time)?;
        Ok(Self::new(datetime, latitude_deg, longitude_deg))
    }

    /// Treat the civil time as local time at the given UTC offset.
    pub fn with_utc_offset(mut self, minutes: i32) -> Self {
        self.utc_offset_minutes = minutes;
        self
    }

    /// Julian Day (UT) of the birth instant.
    pub fn julian_day(&self) -> Result<f64, ChartError> {
        Ok(self.datetime.offset_jd(self.utc_offset_minutes)?)
    }
}

/// A computed natal chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NatalChart {
    pub birth: BirthInput,
    /// Julian Day (UT) of birth.
    pub julian_day: f64,
    pub ayanamsa_deg: f64,
    /// Lagna (rising point of the ecliptic).
    pub ascendant: ZodiacPoint,
    /// Midheaven.
    pub mc: ZodiacPoint,
    /// All nine grahas, keyed in traditional order.
    pub planets: BTreeMap<Graha, BodyPosition>,
    /// Equal houses from the ascendant.
    pub houses: [House; 12],
    /// Present when enabled in the config.
    pub doshas: Option<DoshaBalance>,
    pub config: ChartConfig,
}

impl NatalChart {
    /// Position of one graha.
    pub fn planet(&self, graha: Graha) -> Option<&BodyPosition> {
        self.planets.get(&graha)
    }

    /// House (1..=12) occupied by a graha.
    pub fn house_of(&self, graha: Graha) -> Option<u8> {
        self.planet(graha)
            .map(|p| house_of(p.sidereal_deg(), self.ascendant.sidereal_deg))
    }
}

/// Compute a natal chart from typed birth data.
pub fn natal_chart(birth: &BirthInput, config: &ChartConfig) -> Result<NatalChart, ChartError> {
    let location = GeoLocation::new(birth.latitude_deg, birth.longitude_deg)?;
    let jd = birth.julian_day()?;
    let t = jd_to_centuries(jd);
    let aya = ayanamsha_deg(config.ayanamsha, t);
    log::debug!(
        "chart for {} (offset {} min): jd={jd:.6} ayanamsha={aya:.6}",
        birth.datetime,
        birth.utc_offset_minutes
    );

    let mut planets = BTreeMap::new();
    for graha in SAPTA_GRAHAS {
        let Some(body) = graha.body() else {
            continue;
        };
        let tropical = tropical_longitude_deg(body, t, config.precision)?;
        let sidereal = tropical_to_sidereal(tropical, aya);
        log::debug!("{graha}: tropical={tropical:.4} sidereal={sidereal:.4}");
        planets.insert(graha, BodyPosition::new(graha, tropical, sidereal));
    }

    let rahu = rahu_deg(t, config.node_mode);
    let rahu_sidereal = tropical_to_sidereal(rahu, aya);
    planets.insert(Graha::Rahu, BodyPosition::new(Graha::Rahu, rahu, rahu_sidereal));
    planets.insert(
        Graha::Ketu,
        BodyPosition::new(
            Graha::Ketu,
            ketu_from_rahu(rahu),
            ketu_from_rahu(rahu_sidereal),
        ),
    );

    let (asc, mc) = lagna_and_mc_deg(jd, &location);
    let ascendant = ZodiacPoint::new(asc, tropical_to_sidereal(asc, aya));
    let mc = ZodiacPoint::new(mc, tropical_to_sidereal(mc, aya));
    log::debug!(
        "ascendant: tropical={asc:.4} sidereal={:.4} ({})",
        ascendant.sidereal_deg,
        ascendant.rashi
    );

    let houses = equal_houses(ascendant.sidereal_deg);

    let doshas = config.dosha.then(|| {
        let placements: Vec<_> = planets.values().map(|p| (p.graha, p.rashi())).collect();
        dosha_balance(ascendant.rashi, &placements, config.dosha_basis)
    });

    Ok(NatalChart {
        birth: *birth,
        julian_day: jd,
        ayanamsa_deg: aya,
        ascendant,
        mc,
        planets,
        houses,
        doshas,
        config: *config,
    })
}

/// Compute a natal chart from date and time strings with default settings.
///
/// `birth_date` is `YYYY-MM-DD`, `birth_time` is `HH:MM` or `HH:MM:SS`,
/// taken as UT.
pub fn compute_natal_chart(
    birth_date: &str,
    birth_time: &str,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<NatalChart, ChartError> {
    let birth = BirthInput::parse(birth_date, birth_time, latitude_deg, longitude_deg)?;
    natal_chart(&birth, &ChartConfig::default())
}
