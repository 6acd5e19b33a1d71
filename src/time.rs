use hifitime::Epoch;
use std::str::FromStr;

use crate::constants::{
    Degree, JulianDay, Radian, DAYS_PER_CENTURY, DAYS_PER_MILLENNIUM, DPI, JDTOMJD, RADEG, RADSEC,
    T2000,
};
use crate::ref_system::{nutation, obleq};

/// Julian centuries elapsed since J2000.0 (TT scale).
pub fn julian_centuries(jde: JulianDay) -> f64 {
    (jde - T2000) / DAYS_PER_CENTURY
}

/// Julian millennia elapsed since J2000.0 (TT scale).
///
/// This is the time argument of the VSOP-style heliocentric series; every
/// periodic model in the crate derives its argument from the same Julian
/// Ephemeris Day through this function or [`julian_centuries`].
pub fn julian_millennia(jde: JulianDay) -> f64 {
    (jde - T2000) / DAYS_PER_MILLENNIUM
}

/// Transformation from a date in the format YYYY-MM-ddTHH:mm:ss (UTC) to a
/// Julian Ephemeris Day in the TT frame.
///
/// Argument
/// --------
/// * `date`: a date string in the format YYYY-MM-ddTHH:mm:ss
///
/// Return
/// ------
/// * the Julian Ephemeris Day (TT) of the input date, or `None` if the
///   string does not parse
pub fn date_to_jde(date: &str) -> Option<JulianDay> {
    Epoch::from_str(date)
        .ok()
        .map(|epoch| epoch.to_mjd_tt_days() + JDTOMJD)
}

/// Transformation from Julian Date to Modified Julian Date.
pub fn jd_to_mjd(jd: JulianDay) -> f64 {
    jd - JDTOMJD
}

/// Transformation from Modified Julian Date to Julian Date.
pub fn mjd_to_jd(mjd: f64) -> JulianDay {
    mjd + JDTOMJD
}

/// Compute the Greenwich Mean Sidereal Time (GMST) in radians for a given
/// Julian Date (UT1 time scale).
///
/// This function implements the IAU 1982/2000 polynomial formula for the
/// mean sidereal time at 0h UT1, plus the fractional-day correction term due
/// to Earth's rotation rate.
///
/// # Arguments
/// * `jd_ut` - Julian Date (UT1 time scale)
///
/// # Returns
/// * GMST angle in radians, normalized to the interval [0, 2π).
///
/// # Details
/// The GMST is computed in two steps:
/// 1. Use a cubic polynomial (coefficients C0–C3) to get GMST at 0h UT1 in
///    seconds for the given date.
/// 2. Add the contribution of Earth's rotation during the fractional day
///    using the factor `RAP`, which converts solar days to sidereal days.
pub fn gmst(jd_ut: JulianDay) -> Radian {
    // Polynomial coefficients for GMST at 0h UT1 (in seconds)
    const C0: f64 = 24110.54841;
    const C1: f64 = 8640184.812866;
    const C2: f64 = 9.3104e-2;
    const C3: f64 = -6.2e-6;

    // Ratio of sidereal day to solar day
    const RAP: f64 = 1.00273790934;

    // A Julian day starts at noon; the civil day containing `jd_ut` starts
    // at the preceding .5 boundary.
    let jd0 = (jd_ut - 0.5).floor() + 0.5;
    let t = (jd0 - T2000) / DAYS_PER_CENTURY;

    // Step 1: GMST at 0h UT1 using the polynomial expression
    let mut gmst0 = ((C3 * t + C2) * t + C1) * t + C0;

    // Convert GMST from seconds to radians (86400 seconds per day)
    gmst0 *= DPI / 86400.0;

    // Step 2: contribution from the fraction of the day, scaled by the
    // faster rotation of sidereal time.
    let h = (jd_ut - jd0) * DPI;
    let gmst = gmst0 + h * RAP;

    gmst.rem_euclid(DPI)
}

/// Equation of the equinoxes: the difference between apparent and mean
/// sidereal time, `Δψ · cos ε`, in radians.
pub fn equation_of_equinoxes(jde: JulianDay) -> Radian {
    let (dpsi, _) = nutation(jde);
    dpsi * RADSEC * obleq(jde).cos()
}

/// Local apparent sidereal time in radians for an observer at the given
/// east longitude.
///
/// Arguments
/// ---------
/// * `jd_ut`: Julian Date, UT1 scale (drives Earth rotation).
/// * `jde`: Julian Ephemeris Day, TT scale (drives the nutation term).
/// * `longitude`: geographic longitude in degrees, east positive.
pub fn local_apparent_sidereal(jd_ut: JulianDay, jde: JulianDay, longitude: Degree) -> Radian {
    (gmst(jd_ut) + equation_of_equinoxes(jde) + longitude * RADEG).rem_euclid(DPI)
}
