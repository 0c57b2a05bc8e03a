//! High-level chart API.
//!
//! Wraps the time, longitude and classification crates into two entry
//! points:
//! - [`natal_chart`] / [`compute_natal_chart`]: nine grahas, ascendant, MC,
//!   equal houses and dosha balance for a birth instant and place
//! - [`vedic_daily_context`] / [`compute_vedic_daily_context`]: Sun, Moon
//!   and the panchang for an instant
//!
//! [`ChartConfig`] selects precision, ayanamsha, node model and dosha
//! basis, and can be read from TOML. [`ChartCache`] memoizes charts.

pub mod cache;
pub mod chart;
pub mod config;
pub mod daily;
pub mod error;
pub mod position;

pub use cache::{CacheStats, ChartCache};
pub use chart::{BirthInput, NatalChart, compute_natal_chart, natal_chart};
pub use config::ChartConfig;
pub use daily::{VedicDailyContext, compute_vedic_daily_context, vedic_daily_context};
pub use error::ChartError;
pub use position::{BodyPosition, ZodiacPoint};

// Re-export the types that appear in chart output.
pub use jyotish_ephem::Precision;
pub use jyotish_time::CivilDateTime;
pub use jyotish_vedic::{
    AyanamshaSystem, Dms, Dosha, DoshaBalance, DoshaBasis, DoshaSource, Graha, House, Karana,
    KaranaPosition, LunarPhase, LunarPhaseInfo, Nakshatra, NodeMode, Paksha, Rashi, Tithi,
    TithiPosition, Vaar, Yoga, YogaPosition,
};
