//! Error types for Vedic calculations.

use jyotish_ephem::EphemError;
use jyotish_time::TimeError;
use thiserror::Error;

/// Errors from Vedic base calculations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// Error from civil time handling.
    #[error("time error: {0}")]
    Time(#[from] TimeError),
    /// Error from the longitude series.
    #[error("ephemeris error: {0}")]
    Ephem(#[from] EphemError),
    /// Invalid geographic location parameter.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// Body identifier that is not one of the nine grahas.
    #[error("unknown graha: {0:?}")]
    UnknownGraha(String),
}
