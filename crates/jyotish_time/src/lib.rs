//! Time handling for the chart pipeline.
//!
//! This crate provides:
//! - `CivilDateTime`, a validated proleptic-Gregorian date and time
//! - Julian Day ↔ calendar conversions and Julian centuries since J2000.0
//! - Greenwich mean and local sidereal time

pub mod civil;
pub mod error;
pub mod julian;
pub mod sidereal;

pub use civil::CivilDateTime;
pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, calendar_to_jd, jd_to_calendar, jd_to_centuries,
};
pub use sidereal::{gmst_deg, local_sidereal_time_deg};
