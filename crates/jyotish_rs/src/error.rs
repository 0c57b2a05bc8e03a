//! Error type for chart assembly.

use std::path::PathBuf;

use jyotish_ephem::EphemError;
use jyotish_time::TimeError;
use jyotish_vedic::VedicError;
use thiserror::Error;

/// Errors from chart and daily-context computation.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Invalid or unparseable civil date/time.
    #[error(transparent)]
    Time(#[from] TimeError),
    /// Invalid location or body identifier.
    #[error(transparent)]
    Vedic(#[from] VedicError),
    /// Longitude series failure.
    #[error(transparent)]
    Ephem(#[from] EphemError),
    /// Malformed configuration text.
    #[error("invalid chart config: {0}")]
    Config(#[from] toml::de::Error),
    /// Configuration file could not be read.
    #[error("cannot read config {}: {source}", path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
