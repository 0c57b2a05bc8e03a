//! Panchang elements at an instant: tithi, karana, yoga and vaar.
//!
//! Tithi and karana divide the Moon−Sun elongation into 12 deg and 6 deg
//! steps. Yoga divides the sidereal Sun+Moon sum into 27 steps of
//! 13 deg 20'. Vaar is the civil weekday.

use jyotish_ephem::normalize_deg;
use serde::{Deserialize, Serialize};

use crate::graha::Graha;

/// Span of one tithi in degrees of elongation.
pub const TITHI_SPAN: f64 = 12.0;

/// Span of one karana in degrees of elongation.
pub const KARANA_SPAN: f64 = 6.0;

/// Span of one yoga in degrees of the Sun+Moon sum.
pub const YOGA_SPAN: f64 = 360.0 / 27.0;

/// Moon−Sun elongation in degrees, [0, 360).
pub fn lunar_elongation_deg(sun_deg: f64, moon_deg: f64) -> f64 {
    normalize_deg(moon_deg - sun_deg)
}

// ---------------------------------------------------------------------------
// Tithi
// ---------------------------------------------------------------------------

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Paksha {
    /// Waxing fortnight, elongation [0, 180).
    Shukla,
    /// Waning fortnight, elongation [180, 360).
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

/// The 30 tithis of a synodic month.
///
/// The two fortnights share names for their first fourteen tithis; the
/// fifteenth is Purnima (full moon) or Amavasya (new moon).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tithi {
    ShuklaPratipada,
    ShuklaDwitiya,
    ShuklaTritiya,
    ShuklaChaturthi,
    ShuklaPanchami,
    ShuklaShashthi,
    ShuklaSaptami,
    ShuklaAshtami,
    ShuklaNavami,
    ShuklaDashami,
    ShuklaEkadashi,
    ShuklaDwadashi,
    ShuklaTrayodashi,
    ShuklaChaturdashi,
    Purnima,
    KrishnaPratipada,
    KrishnaDwitiya,
    KrishnaTritiya,
    KrishnaChaturthi,
    KrishnaPanchami,
    KrishnaShashthi,
    KrishnaSaptami,
    KrishnaAshtami,
    KrishnaNavami,
    KrishnaDashami,
    KrishnaEkadashi,
    KrishnaDwadashi,
    KrishnaTrayodashi,
    KrishnaChaturdashi,
    Amavasya,
}

/// All 30 tithis in order (0 = Shukla Pratipada, 29 = Amavasya).
pub const ALL_TITHIS: [Tithi; 30] = [
    Tithi::ShuklaPratipada,
    Tithi::ShuklaDwitiya,
    Tithi::ShuklaTritiya,
    Tithi::ShuklaChaturthi,
    Tithi::ShuklaPanchami,
    Tithi::ShuklaShashthi,
    Tithi::ShuklaSaptami,
    Tithi::ShuklaAshtami,
    Tithi::ShuklaNavami,
    Tithi::ShuklaDashami,
    Tithi::ShuklaEkadashi,
    Tithi::ShuklaDwadashi,
    Tithi::ShuklaTrayodashi,
    Tithi::ShuklaChaturdashi,
    Tithi::Purnima,
    Tithi::KrishnaPratipada,
    Tithi::KrishnaDwitiya,
    Tithi::KrishnaTritiya,
    Tithi::KrishnaChaturthi,
    Tithi::KrishnaPanchami,
    Tithi::KrishnaShashthi,
    Tithi::KrishnaSaptami,
    Tithi::KrishnaAshtami,
    Tithi::KrishnaNavami,
    Tithi::KrishnaDashami,
    Tithi::KrishnaEkadashi,
    Tithi::KrishnaDwadashi,
    Tithi::KrishnaTrayodashi,
    Tithi::KrishnaChaturdashi,
    Tithi::Amavasya,
];

const TITHI_NAMES: [&str; 14] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
];

impl Tithi {
    /// 0-based index (0..29).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Fortnight this tithi belongs to.
    pub const fn paksha(self) -> Paksha {
        if self.index() < 15 {
            Paksha::Shukla
        } else {
            Paksha::Krishna
        }
    }

    /// 1-based number within the paksha (1..=15).
    pub const fn tithi_in_paksha(self) -> u8 {
        self.index() % 15 + 1
    }

    /// Traditional name, shared between the two fortnights.
    ///
    /// Indices 15..=28 reuse the names of 0..=13; index 14 is Purnima and
    /// index 29 is Amavasya, not a second Purnima.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Purnima => "Purnima",
            Self::Amavasya => "Amavasya",
            _ => TITHI_NAMES[(self.index() % 15) as usize],
        }
    }

    /// All 30 tithis in order.
    pub const fn all() -> &'static [Tithi; 30] {
        &ALL_TITHIS
    }
}

impl std::fmt::Display for Tithi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Purnima | Self::Amavasya => f.write_str(self.name()),
            _ => write!(f, "{} {}", self.paksha().name(), self.name()),
        }
    }
}

/// Tithi classification at an instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TithiPosition {
    /// The tithi.
    pub tithi: Tithi,
    /// 0-based tithi index (0..29).
    pub tithi_index: u8,
    /// Paksha (Shukla or Krishna).
    pub paksha: Paksha,
    /// 1-based tithi number within the paksha (1-15).
    pub tithi_in_paksha: u8,
    /// Degrees already elapsed within the tithi, [0, 12).
    pub degrees_in_tithi: f64,
}

/// Classify a Moon−Sun elongation into its tithi.
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiPosition {
    let elong = normalize_deg(elongation_deg);
    let idx = ((elong / TITHI_SPAN).floor() as u8).min(29);
    let tithi = ALL_TITHIS[idx as usize];
    TithiPosition {
        tithi,
        tithi_index: idx,
        paksha: tithi.paksha(),
        tithi_in_paksha: tithi.tithi_in_paksha(),
        degrees_in_tithi: elong - idx as f64 * TITHI_SPAN,
    }
}

// ---------------------------------------------------------------------------
// Karana
// ---------------------------------------------------------------------------

/// The 11 karanas: 7 movable (chara) and 4 fixed (sthira).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Karana {
    Bava,
    Balava,
    Kaulava,
    Taitila,
    Garaja,
    Vanija,
    Vishti,
    Shakuni,
    Chatushpada,
    Naga,
    Kimstughna,
}

const MOVABLE_KARANAS: [Karana; 7] = [
    Karana::Bava,
    Karana::Balava,
    Karana::Kaulava,
    Karana::Taitila,
    Karana::Garaja,
    Karana::Vanija,
    Karana::Vishti,
];

impl Karana {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bava => "Bava",
            Self::Balava => "Balava",
            Self::Kaulava => "Kaulava",
            Self::Taitila => "Taitila",
            Self::Garaja => "Garaja",
            Self::Vanija => "Vanija",
            Self::Vishti => "Vishti",
            Self::Shakuni => "Shakuni",
            Self::Chatushpada => "Chatushpada",
            Self::Naga => "Naga",
            Self::Kimstughna => "Kimstughna",
        }
    }

    /// Karana occupying slot `index` (0..59) of the synodic month.
    ///
    /// Slot 0 is Kimstughna, slots 1..=56 cycle the movable karanas eight
    /// times, and slots 57..=59 are Shakuni, Chatushpada and Naga.
    pub const fn from_sequence_index(index: u8) -> Karana {
        match index {
            0 => Self::Kimstughna,
            1..=56 => MOVABLE_KARANAS[((index - 1) % 7) as usize],
            57 => Self::Shakuni,
            58 => Self::Chatushpada,
            _ => Self::Naga,
        }
    }

    /// Whether the karana is one of the four fixed karanas.
    pub const fn is_fixed(self) -> bool {
        matches!(
            self,
            Self::Shakuni | Self::Chatushpada | Self::Naga | Self::Kimstughna
        )
    }
}

impl std::fmt::Display for Karana {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Karana classification at an instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct KaranaPosition {
    /// The karana name.
    pub karana: Karana,
    /// 0-based slot within the synodic month (0..59).
    pub karana_index: u8,
}

/// Classify a Moon−Sun elongation into its karana.
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaPosition {
    let elong = normalize_deg(elongation_deg);
    let idx = ((elong / KARANA_SPAN).floor() as u8).min(59);
    KaranaPosition {
        karana: Karana::from_sequence_index(idx),
        karana_index: idx,
    }
}

// ---------------------------------------------------------------------------
// Yoga
// ---------------------------------------------------------------------------

/// The 27 luni-solar yogas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Yoga {
    Vishkambha,
    Priti,
    Ayushman,
    Saubhagya,
    Shobhana,
    Atiganda,
    Sukarma,
    Dhriti,
    Shula,
    Ganda,
    Vriddhi,
    Dhruva,
    Vyaghata,
    Harshana,
    Vajra,
    Siddhi,
    Vyatipata,
    Variyana,
    Parigha,
    Shiva,
    Siddha,
    Sadhya,
    Shubha,
    Shukla,
    Brahma,
    Indra,
    Vaidhriti,
}

/// All 27 yogas in order (0 = Vishkambha).
pub const ALL_YOGAS: [Yoga; 27] = [
    Yoga::Vishkambha,
    Yoga::Priti,
    Yoga::Ayushman,
    Yoga::Saubhagya,
    Yoga::Shobhana,
    Yoga::Atiganda,
    Yoga::Sukarma,
    Yoga::Dhriti,
    Yoga::Shula,
    Yoga::Ganda,
    Yoga::Vriddhi,
    Yoga::Dhruva,
    Yoga::Vyaghata,
    Yoga::Harshana,
    Yoga::Vajra,
    Yoga::Siddhi,
    Yoga::Vyatipata,
    Yoga::Variyana,
    Yoga::Parigha,
    Yoga::Shiva,
    Yoga::Siddha,
    Yoga::Sadhya,
    Yoga::Shubha,
    Yoga::Shukla,
    Yoga::Brahma,
    Yoga::Indra,
    Yoga::Vaidhriti,
];

impl Yoga {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vishkambha => "Vishkambha",
            Self::Priti => "Priti",
            Self::Ayushman => "Ayushman",
            Self::Saubhagya => "Saubhagya",
            Self::Shobhana => "Shobhana",
            Self::Atiganda => "Atiganda",
            Self::Sukarma => "Sukarma",
            Self::Dhriti => "Dhriti",
            Self::Shula => "Shula",
            Self::Ganda => "Ganda",
            Self::Vriddhi => "Vriddhi",
            Self::Dhruva => "Dhruva",
            Self::Vyaghata => "Vyaghata",
            Self::Harshana => "Harshana",
            Self::Vajra => "Vajra",
            Self::Siddhi => "Siddhi",
            Self::Vyatipata => "Vyatipata",
            Self::Variyana => "Variyana",
            Self::Parigha => "Parigha",
            Self::Shiva => "Shiva",
            Self::Siddha => "Siddha",
            Self::Sadhya => "Sadhya",
            Self::Shubha => "Shubha",
            Self::Shukla => "Shukla",
            Self::Brahma => "Brahma",
            Self::Indra => "Indra",
            Self::Vaidhriti => "Vaidhriti",
        }
    }

    /// 0-based index (0..26).
    pub const fn index(self) -> u8 {
        self as u8
    }
}

impl std::fmt::Display for Yoga {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Yoga classification at an instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YogaPosition {
    /// The yoga.
    pub yoga: Yoga,
    /// 0-based yoga index (0..26).
    pub yoga_index: u8,
}

/// Classify a sidereal Sun+Moon sum into its yoga.
pub fn yoga_from_sum(sum_deg: f64) -> YogaPosition {
    let sum = normalize_deg(sum_deg);
    let idx = ((sum / YOGA_SPAN).floor() as u8).min(26);
    YogaPosition {
        yoga: ALL_YOGAS[idx as usize],
        yoga_index: idx,
    }
}

/// Classify sidereal Sun and Moon longitudes into their yoga.
pub fn yoga_from_longitudes(sun_sidereal_deg: f64, moon_sidereal_deg: f64) -> YogaPosition {
    yoga_from_sum(sun_sidereal_deg + moon_sidereal_deg)
}

// ---------------------------------------------------------------------------
// Vaar
// ---------------------------------------------------------------------------

/// The seven weekdays, each ruled by a graha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Vaar {
    Ravivaar,
    Somvaar,
    Mangalvaar,
    Budhvaar,
    Guruvaar,
    Shukravaar,
    Shanivaar,
}

/// All weekdays starting from Sunday.
pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivaar,
    Vaar::Somvaar,
    Vaar::Mangalvaar,
    Vaar::Budhvaar,
    Vaar::Guruvaar,
    Vaar::Shukravaar,
    Vaar::Shanivaar,
];

impl Vaar {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Ravivaar",
            Self::Somvaar => "Somvaar",
            Self::Mangalvaar => "Mangalvaar",
            Self::Budhvaar => "Budhvaar",
            Self::Guruvaar => "Guruvaar",
            Self::Shukravaar => "Shukravaar",
            Self::Shanivaar => "Shanivaar",
        }
    }

    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Ravivaar => "Sunday",
            Self::Somvaar => "Monday",
            Self::Mangalvaar => "Tuesday",
            Self::Budhvaar => "Wednesday",
            Self::Guruvaar => "Thursday",
            Self::Shukravaar => "Friday",
            Self::Shanivaar => "Saturday",
        }
    }

    /// Ruling graha of the day.
    pub const fn lord(self) -> Graha {
        match self {
            Self::Ravivaar => Graha::Surya,
            Self::Somvaar => Graha::Chandra,
            Self::Mangalvaar => Graha::Mangal,
            Self::Budhvaar => Graha::Buddh,
            Self::Guruvaar => Graha::Guru,
            Self::Shukravaar => Graha::Shukra,
            Self::Shanivaar => Graha::Shani,
        }
    }
}

impl std::fmt::Display for Vaar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Civil weekday of a Julian Day (midnight-to-midnight day boundary).
pub fn vaar_from_jd(jd: f64) -> Vaar {
    let day = (jd + 1.5).floor().rem_euclid(7.0) as usize;
    ALL_VAARS[day.min(6)]
}
