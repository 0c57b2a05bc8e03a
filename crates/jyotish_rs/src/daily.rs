//! Location-free daily context: Sun, Moon and the panchang elements.

use jyotish_ephem::{Body, tropical_longitude_deg};
use jyotish_time::{CivilDateTime, jd_to_centuries};
use jyotish_vedic::{
    Graha, KaranaPosition, LunarPhaseInfo, TithiPosition, Vaar, YogaPosition, ayanamsha_deg,
    karana_from_elongation, lunar_elongation_deg, lunar_phase, tithi_from_elongation,
    tropical_to_sidereal, vaar_from_jd, yoga_from_longitudes,
};
use serde::{Deserialize, Serialize};

use crate::config::ChartConfig;
use crate::error::ChartError;
use crate::position::BodyPosition;

/// Sun, Moon and panchang for one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VedicDailyContext {
    pub date: CivilDateTime,
    pub julian_day: f64,
    pub ayanamsa_deg: f64,
    pub sun: BodyPosition,
    pub moon: BodyPosition,
    pub tithi: TithiPosition,
    pub yoga: YogaPosition,
    pub karana: KaranaPosition,
    pub vaar: Vaar,
    pub lunar_phase: LunarPhaseInfo,
}

/// Compute the daily context at a civil instant (taken as UT).
pub fn vedic_daily_context(
    date: &CivilDateTime,
    config: &ChartConfig,
) -> Result<VedicDailyContext, ChartError> {
    let jd = date.to_jd();
    let t = jd_to_centuries(jd);
    let aya = ayanamsha_deg(config.ayanamsha, t);

    let sun_tropical = tropical_longitude_deg(Body::Sun, t, config.precision)?;
    let moon_tropical = tropical_longitude_deg(Body::Moon, t, config.precision)?;
    let sun = BodyPosition::new(Graha::Surya, sun_tropical, tropical_to_sidereal(sun_tropical, aya));
    let moon = BodyPosition::new(
        Graha::Chandra,
        moon_tropical,
        tropical_to_sidereal(moon_tropical, aya),
    );

    let elongation = lunar_elongation_deg(sun.sidereal_deg(), moon.sidereal_deg());
    log::debug!("daily context for {date}: jd={jd:.6} elongation={elongation:.4}");

    Ok(VedicDailyContext {
        date: *date,
        julian_day: jd,
        ayanamsa_deg: aya,
        sun,
        moon,
        tithi: tithi_from_elongation(elongation),
        yoga: yoga_from_longitudes(sun.sidereal_deg(), moon.sidereal_deg()),
        karana: karana_from_elongation(elongation),
        vaar: vaar_from_jd(jd),
        lunar_phase: lunar_phase(sun.sidereal_deg(), moon.sidereal_deg()),
    })
}

/// Compute the daily context from a string with default settings.
///
/// Accepts `YYYY-MM-DD` (00:00) or `YYYY-MM-DDTHH:MM[:SS]`.
pub fn compute_vedic_daily_context(date: &str) -> Result<VedicDailyContext, ChartError> {
    let civil = match date.trim().split_once('T') {
        Some((day, time)) => CivilDateTime::parse(day, time)?,
        None => CivilDateTime::parse_date(date)?,
    };
    vedic_daily_context(&civil, &ChartConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use jyotish_vedic::{Paksha, Tithi};

    #[test]
    fn date_only_is_midnight() {
        let ctx = compute_vedic_daily_context("1990-01-15").unwrap();
        assert_eq!(ctx.julian_day, 2_447_906.5);
        assert_eq!(ctx.vaar, Vaar::Somvaar);
    }

    #[test]
    fn date_and_time() {
        let ctx = compute_vedic_daily_context("1990-01-15T06:30").unwrap();
        assert_eq!(ctx.tithi.tithi, Tithi::KrishnaPanchami);
        assert_eq!(ctx.tithi.paksha, Paksha::Krishna);
        assert_eq!(ctx.yoga.yoga_index, 3);
    }

    #[test]
    fn phase_angle_matches_tithi() {
        let ctx = compute_vedic_daily_context("2024-03-25T07:00").unwrap();
        let expected = (ctx.lunar_phase.phase_angle_deg / 12.0).floor() as u8;
        assert_eq!(ctx.tithi.tithi_index, expected);
    }

    #[test]
    fn rejects_bad_date() {
        assert!(matches!(
            compute_vedic_daily_context("2024-13-01"),
            Err(ChartError::Time(_))
        ));
        assert!(compute_vedic_daily_context("2024-01-01T99:00").is_err());
    }
}
