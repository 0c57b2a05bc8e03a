//! Error types for civil time handling.

use thiserror::Error;

/// Errors from civil date/time validation and parsing.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Year/month/day do not form a proleptic Gregorian date.
    #[error("invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },
    /// Hour/minute/second out of range.
    #[error("invalid time: {hour:02}:{minute:02}:{second}")]
    InvalidTime { hour: u32, minute: u32, second: f64 },
    /// UTC offset outside ±18 hours.
    #[error("invalid UTC offset: {0} minutes")]
    InvalidOffset(i32),
    /// Text could not be parsed as a date or time.
    #[error("cannot parse {what} from {input:?}")]
    Parse { what: &'static str, input: String },
}
