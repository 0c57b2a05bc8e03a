//! Ayurvedic dosha balance derived from chart placements.
//!
//! Each classical planet contributes one point to the dosha of its element
//! and the ascendant contributes two. Fire feeds Pitta, Earth and Water
//! feed Kapha, Air and Ether feed Vata. The tally is reported as integer
//! percentages that always sum to 100.

use serde::{Deserialize, Serialize};

use crate::graha::Graha;
use crate::rashi::Rashi;

/// Weight of the ascendant relative to one planet.
pub const ASCENDANT_WEIGHT: u32 = 2;

/// The five classical elements (pancha mahabhuta).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Element {
    Fire,
    Earth,
    Air,
    Water,
    Ether,
}

impl Element {
    /// Dosha this element feeds.
    pub const fn dosha(self) -> Dosha {
        match self {
            Self::Fire => Dosha::Pitta,
            Self::Earth | Self::Water => Dosha::Kapha,
            Self::Air | Self::Ether => Dosha::Vata,
        }
    }
}

/// The three Ayurvedic doshas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dosha {
    Vata,
    Pitta,
    Kapha,
}

/// Which element a planet contributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoshaBasis {
    /// Element of the rashi the planet occupies.
    #[default]
    Rashi,
    /// The planet's own natural element.
    Graha,
}

/// Whether a balance was computed from placements or is the neutral default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DoshaSource {
    Computed,
    NeutralFallback,
}

/// Dosha percentages, summing to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoshaBalance {
    pub vata: u8,
    pub pitta: u8,
    pub kapha: u8,
    pub source: DoshaSource,
}

impl DoshaBalance {
    /// Neutral 33/33/34 balance used when there is nothing to tally.
    pub const NEUTRAL: DoshaBalance = DoshaBalance {
        vata: 33,
        pitta: 33,
        kapha: 34,
        source: DoshaSource::NeutralFallback,
    };

    /// The dosha with the largest share (ties resolve Vata, Pitta, Kapha).
    pub fn dominant(&self) -> Dosha {
        if self.vata >= self.pitta && self.vata >= self.kapha {
            Dosha::Vata
        } else if self.pitta >= self.kapha {
            Dosha::Pitta
        } else {
            Dosha::Kapha
        }
    }
}

/// Compute the dosha balance for an ascendant rashi and planet placements.
///
/// Rahu and Ketu are ignored. With no classical planet in `placements` the
/// neutral balance is returned and a warning is logged.
pub fn dosha_balance(
    ascendant: Rashi,
    placements: &[(Graha, Rashi)],
    basis: DoshaBasis,
) -> DoshaBalance {
    let mut tally = [0u32; 3];
    let mut planets = 0usize;
    for &(graha, rashi) in placements {
        if matches!(graha, Graha::Rahu | Graha::Ketu) {
            continue;
        }
        let element = match basis {
            DoshaBasis::Rashi => rashi.element(),
            DoshaBasis::Graha => graha.element(),
        };
        tally[slot(element.dosha())] += 1;
        planets += 1;
    }

    if planets == 0 {
        log::warn!("no planet placements for dosha balance, using neutral 33/33/34");
        return DoshaBalance::NEUTRAL;
    }

    tally[slot(ascendant.element().dosha())] += ASCENDANT_WEIGHT;
    let [vata, pitta, kapha] = to_percentages(tally);
    DoshaBalance {
        vata,
        pitta,
        kapha,
        source: DoshaSource::Computed,
    }
}

const fn slot(dosha: Dosha) -> usize {
    match dosha {
        Dosha::Vata => 0,
        Dosha::Pitta => 1,
        Dosha::Kapha => 2,
    }
}

/// Round counts to percentages and move any drift onto the largest share.
fn to_percentages(tally: [u32; 3]) -> [u8; 3] {
    let total: u32 = tally.iter().sum();
    let mut pct = tally.map(|n| (100.0 * n as f64 / total as f64).round() as i32);
    let drift = 100 - pct.iter().sum::<i32>();
    if drift != 0 {
        let largest = (0..3).fold(0, |best, i| if pct[i] > pct[best] { i } else { best });
        pct[largest] += drift;
    }
    pct.map(|p| p.clamp(0, 100) as u8)
}
