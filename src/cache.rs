//! Per-instant memoization of the quantities every body query shares.
//!
//! When several bodies are queried for the same instant — the normal case
//! for a sky view refreshing all ten targets per frame — Earth's
//! heliocentric state, the Sun's coordinates and the observer's parallax
//! geometry must not be re-derived per body. The cache recomputes them only
//! when the Julian day changes or the observer location changes **by
//! reference** (`Arc::ptr_eq`): handing in the same `Arc` keeps the cache
//! warm, an equal-valued clone does not.
//!
//! Mutation happens in place and is not internally synchronized: the
//! surrounding engine takes `&mut self` on every query, which restricts use
//! to one writer at a time by construction.

use std::sync::Arc;

use nalgebra::Vector3;

use crate::constants::{AstronomicalUnit, JulianDay, SECONDS_PER_DAY};
use crate::coordinates::{EclipticCoord, EclipticFrame, EquatorialCoord, EquatorialFrame};
use crate::observer::{Location, ParallaxGeometry};
use crate::ref_system::{
    convert_to_fk5, ecliptic_aberration, ecliptic_to_equatorial, unit_vector, unprecess_nutate,
};
use crate::series::normalize_two_pi;
use crate::time::julian_millennia;
use crate::vsop87;

#[derive(Debug)]
pub(crate) struct EphemerisCache {
    jde: JulianDay,
    delta_t: f64,
    location: Option<Arc<Location>>,

    /// Earth's heliocentric ecliptic coordinates of date.
    pub(crate) earth: EclipticCoord,
    /// Apparent place of the Sun (aberrated, nutated), for the Moon-phase
    /// and Saturn-ring geometry.
    pub(crate) sun_apparent: EquatorialCoord,
    /// Astrometric J2000 place of the Sun.
    pub(crate) sun_j2000: EquatorialCoord,
    /// Geocentric distance of the Sun, AU.
    pub(crate) sun_distance: AstronomicalUnit,
    /// The Sun's geocentric rectangular equatorial J2000 position, AU
    /// (consumed by the Pluto model).
    pub(crate) sun_rect_j2000: Vector3<f64>,
    /// Parallax geometry; `None` in pure-geocentric mode.
    pub(crate) parallax: Option<ParallaxGeometry>,

    recomputations: u64,
}

impl EphemerisCache {
    pub(crate) fn new() -> Self {
        Self {
            jde: f64::NAN,
            delta_t: 0.0,
            location: None,
            earth: EclipticCoord {
                longitude: 0.0,
                latitude: 0.0,
                radius: 0.0,
                frame: EclipticFrame::OfDate,
            },
            sun_apparent: EquatorialCoord::new(0.0, 0.0, EquatorialFrame::Apparent),
            sun_j2000: EquatorialCoord::new(0.0, 0.0, EquatorialFrame::J2000),
            sun_distance: 0.0,
            sun_rect_j2000: Vector3::zeros(),
            parallax: None,
            recomputations: 0,
        }
    }

    /// Number of full recomputations performed so far (instrumentation for
    /// the idempotence contract).
    pub(crate) fn recomputations(&self) -> u64 {
        self.recomputations
    }

    /// Bring the cache up to date for `(jde, delta_t, observer)`. A no-op
    /// when the instant matches and the observer is the same `Arc`.
    pub(crate) fn ensure_current(
        &mut self,
        jde: JulianDay,
        delta_t: f64,
        observer: Option<&Arc<Location>>,
    ) {
        let same_location = match (&self.location, observer) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        };
        if self.jde == jde && self.delta_t == delta_t && same_location {
            return;
        }

        self.jde = jde;
        self.delta_t = delta_t;
        self.location = observer.cloned();
        self.recomputations += 1;

        let t = julian_millennia(jde);
        self.earth = vsop87::earth().heliocentric(t);

        // The Sun is the reverse of Earth: add π to the longitude, negate
        // the latitude.
        let sun_lon = normalize_two_pi(self.earth.longitude + std::f64::consts::PI);
        let sun_lat = -self.earth.latitude;
        self.sun_distance = self.earth.radius;

        let (lon_fk5, lat_fk5) = convert_to_fk5(jde, sun_lon, sun_lat);

        // Apparent place: aberration, then the nutated equatorial rotation.
        let (lon_ab, lat_ab) = ecliptic_aberration(jde, lon_fk5, lat_fk5);
        let (ra_app, dec_app) = ecliptic_to_equatorial(jde, lon_ab, lat_ab);
        self.sun_apparent = EquatorialCoord::new(ra_app, dec_app, EquatorialFrame::Apparent);

        // Astrometric J2000 place (no aberration) and its rectangular form.
        let (ra_geo, dec_geo) = ecliptic_to_equatorial(jde, lon_fk5, lat_fk5);
        self.sun_j2000 = unprecess_nutate(
            jde,
            EquatorialCoord::new(ra_geo, dec_geo, EquatorialFrame::Apparent),
        );
        self.sun_rect_j2000 =
            unit_vector(self.sun_j2000.ra, self.sun_j2000.dec) * self.sun_distance;

        self.parallax = self
            .location
            .as_deref()
            .map(|loc| ParallaxGeometry::new(loc, jde - delta_t / SECONDS_PER_DAY, jde));
    }
}

#[cfg(test)]
mod cache_test {
    use super::*;

    #[test]
    fn test_idempotent_for_same_key() {
        let mut cache = EphemerisCache::new();
        cache.ensure_current(2448976.5, 0.0, None);
        let first = cache.recomputations();
        let earth = cache.earth;
        cache.ensure_current(2448976.5, 0.0, None);
        assert_eq!(cache.recomputations(), first);
        assert_eq!(cache.earth, earth);
    }

    #[test]
    fn test_recomputes_on_time_change() {
        let mut cache = EphemerisCache::new();
        cache.ensure_current(2448976.5, 0.0, None);
        cache.ensure_current(2448977.5, 0.0, None);
        assert_eq!(cache.recomputations(), 2);
    }

    #[test]
    fn test_location_compared_by_reference() {
        let mut cache = EphemerisCache::new();
        let here = Arc::new(Location::new(2.35, 48.85, 0.035));
        cache.ensure_current(2448976.5, 0.0, Some(&here));
        cache.ensure_current(2448976.5, 0.0, Some(&here));
        assert_eq!(cache.recomputations(), 1);

        // An identical location behind a different Arc is a different key.
        let twin = Arc::new(Location::new(2.35, 48.85, 0.035));
        cache.ensure_current(2448976.5, 0.0, Some(&twin));
        assert_eq!(cache.recomputations(), 2);
    }

    #[test]
    fn test_geocentric_mode_has_no_parallax() {
        let mut cache = EphemerisCache::new();
        cache.ensure_current(2448976.5, 0.0, None);
        assert!(cache.parallax.is_none());
    }
}
