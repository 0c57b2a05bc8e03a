//! Vedic classification built on the tropical longitude series.
//!
//! This crate provides:
//! - Ayanamsha for four sidereal reference systems
//! - Rashi and nakshatra classification with DMS breakdown
//! - Grahas, rashi lordship and lunar nodes (mean and true)
//! - Lagna (ascendant), MC and equal-house bhava layout
//! - Tithi, karana, yoga, vaar and lunar phase
//! - Dosha balance from chart placements

pub mod ayanamsha;
pub mod bhava;
pub mod dosha;
pub mod error;
pub mod graha;
pub mod lagna;
pub mod location;
pub mod lunar_nodes;
pub mod lunar_phase;
pub mod nakshatra;
pub mod panchang;
pub mod rashi;

pub use ayanamsha::{
    AyanamshaSystem, ayanamsha_deg, lahiri_ayanamsha_for_jd, tropical_to_sidereal,
};
pub use bhava::{House, equal_houses, house_of};
pub use dosha::{Dosha, DoshaBalance, DoshaBasis, DoshaSource, Element, dosha_balance};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS, rashi_lord, rashi_lord_by_index};
pub use lagna::{
    ascendant_from_lst_deg, lagna_and_mc_deg, lagna_longitude_deg, mc_from_lst_deg,
    mc_longitude_deg,
};
pub use location::GeoLocation;
pub use lunar_nodes::{
    LunarNode, NodeMode, ketu_from_rahu, lunar_node_deg, mean_rahu_deg, rahu_deg, true_rahu_deg,
};
pub use lunar_phase::{LunarPhase, LunarPhaseInfo, illuminated_fraction, lunar_phase};
pub use nakshatra::{
    ALL_NAKSHATRAS, Nakshatra, NakshatraInfo, nakshatra_from_longitude, nakshatra_from_tropical,
};
pub use panchang::{
    Karana, KaranaPosition, Paksha, Tithi, TithiPosition, Vaar, Yoga, YogaPosition,
    karana_from_elongation, lunar_elongation_deg, tithi_from_elongation, vaar_from_jd,
    yoga_from_longitudes, yoga_from_sum,
};
pub use rashi::{
    ALL_RASHIS, Dms, Rashi, RashiInfo, deg_to_dms, dms_to_deg, rashi_from_longitude,
    rashi_from_tropical,
};
