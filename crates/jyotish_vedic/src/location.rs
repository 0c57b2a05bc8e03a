//! Validated geographic location.

use serde::Serialize;

use crate::error::VedicError;

/// Geographic location of an observer.
///
/// Latitude lies strictly inside (-90, 90) because the ascendant needs
/// `tan(latitude)`; longitude lies in [-180, 180], east positive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoLocation {
    latitude_deg: f64,
    longitude_deg: f64,
}

impl GeoLocation {
    /// Create a location, rejecting out-of-range or non-finite coordinates.
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, VedicError> {
        if !latitude_deg.is_finite() || latitude_deg.abs() >= 90.0 {
            return Err(VedicError::InvalidLocation(
                "latitude must lie strictly between -90 and 90 degrees",
            ));
        }
        if !longitude_deg.is_finite() || longitude_deg.abs() > 180.0 {
            return Err(VedicError::InvalidLocation(
                "longitude must lie within -180 and 180 degrees",
            ));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }

    /// Geodetic latitude in degrees, north positive.
    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    /// Longitude in degrees, east positive.
    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }
}
