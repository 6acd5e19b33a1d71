//! Observer location and parallax geometry.
//!
//! A [`Location`] is the host-supplied geographic position. The engine
//! derives a [`ParallaxGeometry`] from it — the geocentric-latitude factors
//! `ρ·sinφ′` / `ρ·cosφ′` and the local apparent sidereal time — whenever
//! the cached instant or location changes; those are the only observer
//! quantities the diurnal-parallax correction needs.
//!
//! Locations are handed to the engine as `Arc<Location>` because the cache
//! compares them **by reference** ([`std::sync::Arc::ptr_eq`]): handing in
//! the same `Arc` keeps the cache warm, a freshly built `Arc` with equal
//! values forces a recomputation.

use serde::{Deserialize, Serialize};

use crate::constants::{Degree, JulianDay, Radian, EARTH_MAJOR_AXIS, EARTH_MINOR_AXIS};
use crate::time::local_apparent_sidereal;

/// Geographic observer location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    /// Geodetic longitude in degrees, east positive.
    pub longitude: Degree,
    /// Geodetic latitude in degrees.
    pub latitude: Degree,
    /// Height above the reference ellipsoid in kilometers.
    pub elevation_km: f64,
}

impl Location {
    pub fn new(longitude: Degree, latitude: Degree, elevation_km: f64) -> Self {
        Self {
            longitude,
            latitude,
            elevation_km,
        }
    }
}

/// Derived per-instant observer state used by the parallax correction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParallaxGeometry {
    /// ρ·sinφ′ (geocentric latitude φ′), in Earth radii.
    pub rho_sin_phi: f64,
    /// ρ·cosφ′, in Earth radii.
    pub rho_cos_phi: f64,
    /// Local apparent sidereal time, radians.
    pub local_sidereal: Radian,
}

impl ParallaxGeometry {
    /// Build the parallax geometry for `location` at the given instant.
    ///
    /// `jd_ut` drives Earth rotation (sidereal time), `jde` the nutation
    /// term of the apparent sidereal time.
    pub fn new(location: &Location, jd_ut: JulianDay, jde: JulianDay) -> Self {
        let (rho_cos_phi, rho_sin_phi) =
            geodetic_to_parallax(location.latitude, location.elevation_km);
        Self {
            rho_sin_phi,
            rho_cos_phi,
            local_sidereal: local_apparent_sidereal(jd_ut, jde, location.longitude),
        }
    }
}

/// Convert geodetic latitude and elevation to normalized geocentric
/// parallax coordinates.
///
/// Arguments
/// ---------
/// * `lat`: geodetic latitude in degrees.
/// * `height`: elevation above the reference ellipsoid in kilometers.
///
/// Return
/// ------
/// * `(ρ·cosφ′, ρ·sinφ′)` where ρ is the geocentric distance in Earth
///   (equatorial) radii and φ′ the geocentric latitude.
///
/// The computation accounts for Earth oblateness through the ratio of the
/// polar to the equatorial axis.
pub fn geodetic_to_parallax(lat: Degree, height: f64) -> (f64, f64) {
    let axis_ratio = EARTH_MINOR_AXIS / EARTH_MAJOR_AXIS;
    let embda = lat.to_radians();

    // Geocentric auxiliary angle u.
    let u = (axis_ratio * embda.tan()).atan();
    let equatorial_radius_km = EARTH_MAJOR_AXIS / 1000.0;

    let rho_cos_phi = u.cos() + (height / equatorial_radius_km) * embda.cos();
    let rho_sin_phi = axis_ratio * u.sin() + (height / equatorial_radius_km) * embda.sin();

    (rho_cos_phi, rho_sin_phi)
}

#[cfg(test)]
mod observer_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parallax_at_equator_and_pole() {
        let (c, s) = geodetic_to_parallax(0.0, 0.0);
        assert_eq!(c, 1.0);
        assert_eq!(s, 0.0);

        let (c, s) = geodetic_to_parallax(90.0, 0.0);
        assert_relative_eq!(c, 0.0, epsilon = 1e-12);
        assert_relative_eq!(s, EARTH_MINOR_AXIS / EARTH_MAJOR_AXIS, epsilon = 1e-12);
    }

    #[test]
    fn test_parallax_meeus_example() {
        // Meeus example 11.a: Palomar, φ = +33°21'22", h = 1706 m:
        // ρ·sinφ′ = +0.546861, ρ·cosφ′ = +0.836339.
        let lat = 33.0 + 21.0 / 60.0 + 22.0 / 3600.0;
        let (rho_cos, rho_sin) = geodetic_to_parallax(lat, 1.706);
        assert_relative_eq!(rho_sin, 0.546861, epsilon = 2e-6);
        assert_relative_eq!(rho_cos, 0.836339, epsilon = 2e-6);
    }

    #[test]
    fn test_geometry_tracks_location() {
        let palomar = Location::new(-116.863, 33.356, 1.706);
        let geom = ParallaxGeometry::new(&palomar, 2448976.5, 2448976.5);
        assert!((0.0..crate::constants::DPI).contains(&geom.local_sidereal));
        assert!(geom.rho_sin_phi > 0.0);
        assert!(geom.rho_cos_phi > 0.0);
    }
}
