//! IAU 2006 general precession in ecliptic longitude.
//!
//! The general precession p_A measures the accumulated westward motion of
//! the vernal equinox along the ecliptic since J2000.0. It carries J2000
//! ecliptic longitudes to the equinox of date and supplies the secular
//! rate of the ayanamsha.
//!
//! Source: Capitaine, Wallace & Chapront 2003, A&A 412, 567-586 (Table 1).

/// Linear rate of general precession, arcseconds per Julian century.
pub const PRECESSION_RATE_ARCSEC: f64 = 5028.796195;

/// IAU 2006 general precession in ecliptic longitude, in arcseconds.
///
/// `t` is Julian centuries since J2000.0. Positive for later epochs.
pub fn general_precession_longitude_arcsec(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    PRECESSION_RATE_ARCSEC * t + 1.1054348 * t2 + 0.00007964 * t3 - 0.000023857 * t4
        - 0.0000000383 * t5
}

/// General precession in ecliptic longitude, in degrees.
pub fn general_precession_longitude_deg(t: f64) -> f64 {
    general_precession_longitude_arcsec(t) / 3600.0
}
