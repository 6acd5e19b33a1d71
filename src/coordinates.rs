//! Frame-tagged coordinate types.
//!
//! Every angular coordinate pair in the engine carries the frame it is
//! expressed in, so that mean-of-date and J2000 values cannot be mixed by
//! accident. The tags are data, not phantom types: the engine moves a single
//! value through several frames in sequence and the host selects the output
//! frame at query time.

use serde::{Deserialize, Serialize};

use crate::constants::{AstronomicalUnit, Radian};

/// Frame of an ecliptic coordinate triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EclipticFrame {
    /// Instantaneous mean ecliptic and equinox of date.
    OfDate,
    /// Mean ecliptic and equinox of J2000.0.
    J2000,
}

/// Ecliptic spherical coordinates, heliocentric or geocentric depending on
/// context.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipticCoord {
    /// Ecliptic longitude in radians, [0, 2π).
    pub longitude: Radian,
    /// Ecliptic latitude in radians.
    pub latitude: Radian,
    /// Radius vector in AU.
    pub radius: AstronomicalUnit,
    pub frame: EclipticFrame,
}

/// Frame of an equatorial coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EquatorialFrame {
    /// Apparent place: precessed, nutated and (where the body's pipeline
    /// says so) aberrated.
    Apparent,
    /// Astrometric place referred to the mean equator and equinox of J2000.0.
    J2000,
}

/// Equatorial coordinates (right ascension, declination) in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquatorialCoord {
    /// Right ascension in radians, [0, 2π).
    pub ra: Radian,
    /// Declination in radians, [−π/2, +π/2].
    pub dec: Radian,
    pub frame: EquatorialFrame,
}

impl EquatorialCoord {
    pub fn new(ra: Radian, dec: Radian, frame: EquatorialFrame) -> Self {
        Self { ra, dec, frame }
    }
}
