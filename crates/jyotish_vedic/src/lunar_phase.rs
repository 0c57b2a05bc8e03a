//! Lunar phase name and illuminated fraction from Sun and Moon longitudes.
//!
//! The phase angle is the Moon−Sun elongation, measured in the same
//! direction as the tithi. Eight named phases each cover 45 degrees,
//! starting with New at 0.

use jyotish_ephem::normalize_deg;
use serde::{Deserialize, Serialize};

use crate::panchang::lunar_elongation_deg;

/// Width of one named phase in degrees.
pub const PHASE_SPAN: f64 = 45.0;

/// The eight named lunar phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LunarPhase {
    New,
    WaxingCrescent,
    FirstQuarter,
    WaxingGibbous,
    Full,
    WaningGibbous,
    LastQuarter,
    WaningCrescent,
}

/// All phases in order of increasing elongation.
pub const ALL_PHASES: [LunarPhase; 8] = [
    LunarPhase::New,
    LunarPhase::WaxingCrescent,
    LunarPhase::FirstQuarter,
    LunarPhase::WaxingGibbous,
    LunarPhase::Full,
    LunarPhase::WaningGibbous,
    LunarPhase::LastQuarter,
    LunarPhase::WaningCrescent,
];

impl LunarPhase {
    pub const fn name(self) -> &'static str {
        match self {
            Self::New => "New Moon",
            Self::WaxingCrescent => "Waxing Crescent",
            Self::FirstQuarter => "First Quarter",
            Self::WaxingGibbous => "Waxing Gibbous",
            Self::Full => "Full Moon",
            Self::WaningGibbous => "Waning Gibbous",
            Self::LastQuarter => "Last Quarter",
            Self::WaningCrescent => "Waning Crescent",
        }
    }

    /// Phase bucket for a phase angle in degrees.
    pub fn from_angle(phase_angle_deg: f64) -> Self {
        let idx = (normalize_deg(phase_angle_deg) / PHASE_SPAN).floor() as usize;
        ALL_PHASES[idx.min(7)]
    }
}

impl std::fmt::Display for LunarPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Lunar phase at an instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LunarPhaseInfo {
    pub phase: LunarPhase,
    /// Illuminated fraction of the disc, [0, 1]: 0 at new, 1 at full.
    pub illumination: f64,
    /// Moon−Sun elongation in degrees, [0, 360).
    pub phase_angle_deg: f64,
}

/// Illuminated fraction for an elongation: `(1 − cos E) / 2`.
pub fn illuminated_fraction(phase_angle_deg: f64) -> f64 {
    ((1.0 - phase_angle_deg.to_radians().cos()) / 2.0).clamp(0.0, 1.0)
}

/// Lunar phase from Sun and Moon longitudes (same zodiac for both).
pub fn lunar_phase(sun_deg: f64, moon_deg: f64) -> LunarPhaseInfo {
    let angle = lunar_elongation_deg(sun_deg, moon_deg);
    LunarPhaseInfo {
        phase: LunarPhase::from_angle(angle),
        illumination: illuminated_fraction(angle),
        phase_angle_deg: angle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_and_full() {
        let new = lunar_phase(100.0, 100.0);
        assert_eq!(new.phase, LunarPhase::New);
        assert!(new.illumination.abs() < 1e-12);

        let full = lunar_phase(100.0, 280.0);
        assert_eq!(full.phase, LunarPhase::Full);
        assert!((full.illumination - 1.0).abs() < 1e-12);
    }

    #[test]
    fn quarters_half_lit() {
        let first = lunar_phase(0.0, 90.0);
        assert_eq!(first.phase, LunarPhase::FirstQuarter);
        assert!((first.illumination - 0.5).abs() < 1e-12);

        let last = lunar_phase(0.0, 270.0);
        assert_eq!(last.phase, LunarPhase::LastQuarter);
        assert!((last.illumination - 0.5).abs() < 1e-12);
    }

    #[test]
    fn buckets_partition_circle() {
        for (i, phase) in ALL_PHASES.iter().enumerate() {
            let start = i as f64 * PHASE_SPAN;
            assert_eq!(LunarPhase::from_angle(start), *phase);
            assert_eq!(LunarPhase::from_angle(start + PHASE_SPAN - 1e-9), *phase);
        }
        assert_eq!(LunarPhase::from_angle(360.0), LunarPhase::New);
    }

    #[test]
    fn waning_gibbous_example() {
        let info = lunar_phase(271.1407, 140.9082);
        assert_eq!(info.phase, LunarPhase::WaningGibbous);
        assert!((info.phase_angle_deg - 229.7675).abs() < 1e-6);
        assert!((info.illumination - 0.823).abs() < 1e-3);
    }

    #[test]
    fn illumination_bounded() {
        for i in 0..360 {
            let f = illuminated_fraction(i as f64);
            assert!((0.0..=1.0).contains(&f));
        }
    }
}
