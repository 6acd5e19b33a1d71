//! # The ephemeris engine
//!
//! [`NearSky`] is the narrow interface the host drives: one instance owns
//! the per-instant cache and the per-body orbital-element slots, and every
//! query routes through the per-body-class transform composition:
//!
//! * **Planets (Mercury–Neptune)** — heliocentric series for Earth and the
//!   body, rectangular subtraction, light-time recompute of the body only,
//!   \[aberration if apparent\], FK5, ecliptic→equatorial with nutation,
//!   parallax, \[unprecess if J2000 requested\].
//! * **Pluto** — its own J2000 series with two-pass light-time, then
//!   precess+nutate, \[aberration if apparent\], parallax, \[unprecess\].
//! * **Sun** — reverse of Earth's heliocentric coordinates, FK5,
//!   \[aberration\], ecliptic→equatorial with nutation, parallax,
//!   \[unprecess\].
//! * **Moon** — lunar theory, ecliptic→equatorial with nutation, parallax,
//!   \[unprecess\]. No FK5, no aberration, no light-time.
//!
//! All querying methods take `&mut self`: the engine is built to live
//! behind a single computation thread, and the cache is deliberately not
//! internally synchronized.

use std::sync::Arc;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::bodies::{Body, PipelineKind};
use crate::cache::EphemerisCache;
use crate::constants::{
    ArcSec, AstronomicalUnit, JulianDay, Radian, DPI, GAUSS_GRAV, LIGHT_TIME_PER_AU,
    SECONDS_PER_DAY, SUN_EARTH_MOON_MASS_RATIO,
};
use crate::coordinates::{EclipticCoord, EquatorialCoord, EquatorialFrame};
use crate::lunar;
use crate::magnitude;
use crate::nearsky_errors::NearskyError;
use crate::observer::Location;
use crate::orbit_determination::{OrbitCatalog, OrbitalElements};
use crate::pluto;
use crate::ref_system::{
    convert_to_fk5, ecliptic_aberration, ecliptic_to_equatorial, equatorial_aberration,
    adjust_for_parallax, precess_nutate, unprecess_nutate,
};
use crate::series::normalize_two_pi;
use crate::time::julian_millennia;
use crate::vsop87;

/// A requested instant: Julian Ephemeris Day (TT) plus the ΔT = TT − UT
/// offset the time-service collaborator supplies. Pass `delta_t = 0.0` to
/// ignore ΔT.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Instant {
    /// Julian Ephemeris Day, TT scale.
    pub jde: JulianDay,
    /// TT − UT in seconds.
    pub delta_t: f64,
}

impl Instant {
    pub fn new(jde: JulianDay, delta_t: f64) -> Self {
        Self { jde, delta_t }
    }

    /// The corresponding Julian Date on the UT scale (drives Earth
    /// rotation).
    pub fn jd_ut(&self) -> JulianDay {
        self.jde - self.delta_t / SECONDS_PER_DAY
    }
}

/// Result of a position query. Field order mirrors the engine's output
/// contract: right ascension, declination, distance from Earth, distance
/// from the Sun.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    /// Right ascension, radians, [0, 2π).
    pub ra: Radian,
    /// Declination, radians.
    pub dec: Radian,
    /// Distance from Earth (topocentric when an observer is set), AU.
    pub earth_distance: AstronomicalUnit,
    /// Distance from the Sun, AU (zero for the Sun itself).
    pub sun_distance: AstronomicalUnit,
    /// Frame of `ra`/`dec`.
    pub frame: EquatorialFrame,
    /// Sun–body–Earth phase angle; `None` for the Sun and the Moon (the
    /// Moon's comes from [`NearSky::moon_illumination`]).
    pub phase_angle: Option<Radian>,
}

impl BodyPosition {
    fn zeroed(frame: EquatorialFrame) -> Self {
        Self {
            ra: 0.0,
            dec: 0.0,
            earth_distance: 0.0,
            sun_distance: 0.0,
            frame,
            phase_angle: None,
        }
    }
}

/// Moon illumination outputs for the phase display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoonIllumination {
    /// Illuminated fraction of the disk, 0–1.
    pub fraction: f64,
    /// Position angle of the bright limb, radians from celestial north,
    /// counterclockwise.
    pub bright_limb_angle: Radian,
}

/// The celestial-position engine.
pub struct NearSky {
    cache: EphemerisCache,
    orbits: OrbitCatalog,
}

impl Default for NearSky {
    fn default() -> Self {
        Self::new()
    }
}

impl NearSky {
    pub fn new() -> Self {
        Self {
            cache: EphemerisCache::new(),
            orbits: OrbitCatalog::new(),
        }
    }

    /// Equatorial position of `body` at `instant`.
    ///
    /// Arguments
    /// ---------
    /// * `observer`: topocentric corrections are applied when set; `None`
    ///   is the pure geocentric mode (parallax skipped). The cache compares
    ///   observers by `Arc` identity.
    /// * `frame`: apparent place or astrometric J2000.
    pub fn position(
        &mut self,
        body: Body,
        instant: Instant,
        observer: Option<&Arc<Location>>,
        frame: EquatorialFrame,
    ) -> BodyPosition {
        self.cache
            .ensure_current(instant.jde, instant.delta_t, observer);

        match body.pipeline() {
            PipelineKind::VsopPlanet => self.planet_position(body, instant.jde, frame),
            PipelineKind::Pluto => self.pluto_position(instant.jde, frame),
            PipelineKind::Sun => self.sun_position(instant.jde, frame),
            PipelineKind::Moon => self.moon_position(instant.jde, frame),
        }
    }

    /// Index-based variant of [`NearSky::position`]. A body index outside
    /// 0–9 is a defensive no-op returning zeroed coordinates — callers must
    /// not rely on it for control flow.
    pub fn position_by_index(
        &mut self,
        index: usize,
        instant: Instant,
        observer: Option<&Arc<Location>>,
        frame: EquatorialFrame,
    ) -> BodyPosition {
        match Body::from_index(index) {
            Some(body) => self.position(body, instant, observer, frame),
            None => BodyPosition::zeroed(frame),
        }
    }

    /// Illuminated fraction and bright-limb position angle of the Moon.
    pub fn moon_illumination(
        &mut self,
        instant: Instant,
        observer: Option<&Arc<Location>>,
    ) -> MoonIllumination {
        let moon = self.position(Body::Moon, instant, observer, EquatorialFrame::Apparent);
        let sun = self.cache.sun_apparent;

        let delta_ra = sun.ra - moon.ra;
        let cos_psi = (sun.dec.sin() * moon.dec.sin()
            + sun.dec.cos() * moon.dec.cos() * delta_ra.cos())
        .clamp(-1.0, 1.0);

        let bright_limb_angle = (sun.dec.cos() * delta_ra.sin()).atan2(
            sun.dec.sin() * moon.dec.cos() - sun.dec.cos() * moon.dec.sin() * delta_ra.cos(),
        );

        MoonIllumination {
            fraction: (1.0 - cos_psi) / 2.0,
            bright_limb_angle,
        }
    }

    /// Apparent visual magnitude; `None` for the Sun and the Moon.
    pub fn visual_magnitude(&mut self, body: Body, instant: Instant) -> Option<f64> {
        self.cache.ensure_current(instant.jde, instant.delta_t, None);

        match body.pipeline() {
            PipelineKind::VsopPlanet => {
                let (lon, lat, edist, sdist) = self.planet_geocentric_ecliptic(body, instant.jde);
                let phase = phase_angle(sdist, edist, self.cache.earth.radius);
                let ring = (body == Body::Saturn)
                    .then(|| magnitude::ring_geometry(instant.jde, lon, lat));
                magnitude::visual_magnitude(body, phase, sdist, edist, ring)
            }
            PipelineKind::Pluto => {
                let (_, _, edist, sdist) = pluto::geocentric(instant.jde, self.cache.sun_rect_j2000);
                let phase = phase_angle(sdist, edist, self.cache.earth.radius);
                magnitude::visual_magnitude(body, phase, sdist, edist, None)
            }
            PipelineKind::Sun | PipelineKind::Moon => None,
        }
    }

    /// Apparent angular diameter in arcseconds (topocentric when an
    /// observer is set).
    pub fn angular_diameter(
        &mut self,
        body: Body,
        instant: Instant,
        observer: Option<&Arc<Location>>,
    ) -> ArcSec {
        let position = self.position(body, instant, observer, EquatorialFrame::Apparent);
        magnitude::angular_diameter(body, position.earth_distance)
    }

    /// Orbital elements of `body` for orbit visualization, refreshed per
    /// the period/20 staleness policy.
    ///
    /// Planetary orbits are heliocentric (ecliptic of date); the Moon's is
    /// geocentric with the canonical time unit rescaled to the Earth+Moon
    /// gravitational parameter; the Sun's is the reverse of Earth's orbit.
    pub fn orbital_elements(
        &mut self,
        body: Body,
        instant: Instant,
    ) -> Result<OrbitalElements, NearskyError> {
        let heliocentric_rate = GAUSS_GRAV;
        let geocentric_rate = GAUSS_GRAV / SUN_EARTH_MOON_MASS_RATIO.sqrt();

        match body.pipeline() {
            PipelineKind::VsopPlanet => {
                self.orbits
                    .current(body, instant.jde, heliocentric_rate, |jd| {
                        ecliptic_rect(vsop87::model(body).heliocentric(julian_millennia(jd)))
                    })
            }
            PipelineKind::Pluto => self
                .orbits
                .current(body, instant.jde, heliocentric_rate, |jd| {
                    ecliptic_rect(pluto::heliocentric_for_orbit_view(jd))
                }),
            PipelineKind::Sun => self
                .orbits
                .current(body, instant.jde, heliocentric_rate, |jd| {
                    let earth = vsop87::earth().heliocentric(julian_millennia(jd));
                    let sun = EclipticCoord {
                        longitude: normalize_two_pi(earth.longitude + std::f64::consts::PI),
                        latitude: -earth.latitude,
                        radius: earth.radius,
                        frame: earth.frame,
                    };
                    ecliptic_rect(sun)
                }),
            PipelineKind::Moon => self
                .orbits
                .current(body, instant.jde, geocentric_rate, |jd| {
                    let (lon, lat, dist) = lunar::coordinates(jd);
                    spherical_rect(lon, lat, dist)
                }),
        }
    }

    /// Number of times the shared Earth/Sun/parallax state has been
    /// recomputed. Instrumentation for the cache contract: repeated queries
    /// at the same (instant, observer) key must not increase it.
    pub fn earth_cache_recomputations(&self) -> u64 {
        self.cache.recomputations()
    }

    // ---------------------------------------------------------------------
    // Per-body-class pipelines
    // ---------------------------------------------------------------------

    /// Geocentric ecliptic-of-date coordinates of a VSOP planet with the
    /// one-step light-time recompute of the body (Earth stays at `jde`).
    fn planet_geocentric_ecliptic(
        &self,
        body: Body,
        jde: JulianDay,
    ) -> (Radian, Radian, AstronomicalUnit, AstronomicalUnit) {
        let model = vsop87::model(body);
        let earth_rect = ecliptic_rect(self.cache.earth);

        let first = model.heliocentric(julian_millennia(jde));
        let geo = ecliptic_rect(first) - earth_rect;
        let distance = geo.norm();

        // Recompute the body at the instant the observed light left it.
        let retarded = model.heliocentric(julian_millennia(jde - distance * LIGHT_TIME_PER_AU));
        let geo = ecliptic_rect(retarded) - earth_rect;
        let distance = geo.norm();

        let lon = normalize_two_pi(geo.y.atan2(geo.x));
        let lat = (geo.z / (geo.x * geo.x + geo.y * geo.y).sqrt()).atan();
        (lon, lat, distance, retarded.radius)
    }

    fn planet_position(&self, body: Body, jde: JulianDay, frame: EquatorialFrame) -> BodyPosition {
        let (lon, lat, distance, sun_distance) = self.planet_geocentric_ecliptic(body, jde);

        let (lon, lat) = if frame == EquatorialFrame::Apparent {
            ecliptic_aberration(jde, lon, lat)
        } else {
            (lon, lat)
        };
        let (lon, lat) = convert_to_fk5(jde, lon, lat);
        let (ra, dec) = ecliptic_to_equatorial(jde, lon, lat);
        let (ra, dec, distance) = self.apply_parallax(ra, dec, distance);
        let (ra, dec) = self.finish_frame(jde, ra, dec, frame);

        BodyPosition {
            ra,
            dec,
            earth_distance: distance,
            sun_distance,
            frame,
            phase_angle: Some(phase_angle(sun_distance, distance, self.cache.earth.radius)),
        }
    }

    fn sun_position(&self, jde: JulianDay, frame: EquatorialFrame) -> BodyPosition {
        let earth = self.cache.earth;
        let lon = normalize_two_pi(earth.longitude + std::f64::consts::PI);
        let lat = -earth.latitude;
        let distance = earth.radius;

        let (lon, lat) = convert_to_fk5(jde, lon, lat);
        let (lon, lat) = if frame == EquatorialFrame::Apparent {
            ecliptic_aberration(jde, lon, lat)
        } else {
            (lon, lat)
        };
        let (ra, dec) = ecliptic_to_equatorial(jde, lon, lat);
        let (ra, dec, distance) = self.apply_parallax(ra, dec, distance);
        let (ra, dec) = self.finish_frame(jde, ra, dec, frame);

        BodyPosition {
            ra,
            dec,
            earth_distance: distance,
            sun_distance: 0.0,
            frame,
            phase_angle: None,
        }
    }

    fn moon_position(&self, jde: JulianDay, frame: EquatorialFrame) -> BodyPosition {
        let (lon, lat, distance) = lunar::coordinates(jde);
        let (ra, dec) = ecliptic_to_equatorial(jde, lon, lat);
        let (ra, dec, distance) = self.apply_parallax(ra, dec, distance);
        let (ra, dec) = self.finish_frame(jde, ra, dec, frame);

        BodyPosition {
            ra,
            dec,
            earth_distance: distance,
            // The Moon rides with Earth; its solar distance is Earth's to
            // the precision anyone uses it at.
            sun_distance: self.cache.earth.radius,
            frame,
            phase_angle: None,
        }
    }

    fn pluto_position(&self, jde: JulianDay, frame: EquatorialFrame) -> BodyPosition {
        let (ra, dec, distance, sun_distance) =
            pluto::geocentric(jde, self.cache.sun_rect_j2000);

        let apparent = precess_nutate(jde, EquatorialCoord::new(ra, dec, EquatorialFrame::J2000));
        let (ra, dec) = if frame == EquatorialFrame::Apparent {
            equatorial_aberration(jde, apparent.ra, apparent.dec)
        } else {
            (apparent.ra, apparent.dec)
        };
        let (ra, dec, distance) = self.apply_parallax(ra, dec, distance);
        let (ra, dec) = self.finish_frame(jde, ra, dec, frame);

        BodyPosition {
            ra,
            dec,
            earth_distance: distance,
            sun_distance,
            frame,
            phase_angle: Some(phase_angle(sun_distance, distance, self.cache.earth.radius)),
        }
    }

    /// Diurnal parallax against the cached observer geometry; identity in
    /// pure geocentric mode.
    fn apply_parallax(
        &self,
        ra: Radian,
        dec: Radian,
        distance: AstronomicalUnit,
    ) -> (Radian, Radian, AstronomicalUnit) {
        match &self.cache.parallax {
            Some(geometry) => {
                let hour_angle = (geometry.local_sidereal - ra).rem_euclid(DPI);
                adjust_for_parallax(
                    ra,
                    dec,
                    distance,
                    geometry.rho_sin_phi,
                    geometry.rho_cos_phi,
                    hour_angle,
                )
            }
            None => (ra, dec, distance),
        }
    }

    /// Undo precession+nutation when the J2000 frame was requested; the
    /// pipelines above all produce true-of-date angles at this point.
    fn finish_frame(
        &self,
        jde: JulianDay,
        ra: Radian,
        dec: Radian,
        frame: EquatorialFrame,
    ) -> (Radian, Radian) {
        match frame {
            EquatorialFrame::Apparent => (ra, dec),
            EquatorialFrame::J2000 => {
                let coord = unprecess_nutate(
                    jde,
                    EquatorialCoord::new(ra, dec, EquatorialFrame::Apparent),
                );
                (coord.ra, coord.dec)
            }
        }
    }
}

/// Sun–body–Earth phase angle from the triangle of distances, clamped
/// against round-off before the inverse cosine.
fn phase_angle(
    sun_distance: AstronomicalUnit,
    earth_distance: AstronomicalUnit,
    earth_sun_distance: AstronomicalUnit,
) -> Radian {
    let cos_i = (sun_distance * sun_distance + earth_distance * earth_distance
        - earth_sun_distance * earth_sun_distance)
        / (2.0 * sun_distance * earth_distance);
    cos_i.clamp(-1.0, 1.0).acos()
}

/// Ecliptic spherical → rectangular, AU.
fn ecliptic_rect(coord: EclipticCoord) -> Vector3<f64> {
    spherical_rect(coord.longitude, coord.latitude, coord.radius)
}

fn spherical_rect(lon: Radian, lat: Radian, radius: f64) -> Vector3<f64> {
    let (sin_l, cos_l) = lon.sin_cos();
    let (sin_b, cos_b) = lat.sin_cos();
    Vector3::new(radius * cos_b * cos_l, radius * cos_b * sin_l, radius * sin_b)
}

#[cfg(test)]
mod engine_test {
    use super::*;
    use approx::assert_relative_eq;

    const JDE: f64 = 2448976.5;

    #[test]
    fn test_idempotent_queries() {
        let mut sky = NearSky::new();
        let instant = Instant::new(JDE, 0.0);
        let first = sky.position(Body::Venus, instant, None, EquatorialFrame::Apparent);
        let recomputes = sky.earth_cache_recomputations();
        let second = sky.position(Body::Venus, instant, None, EquatorialFrame::Apparent);
        assert_eq!(first, second);
        assert_eq!(sky.earth_cache_recomputations(), recomputes);
    }

    #[test]
    fn test_all_bodies_return_positions() {
        let mut sky = NearSky::new();
        let instant = Instant::new(JDE, 0.0);
        for body in crate::bodies::ALL_BODIES {
            let position = sky.position(body, instant, None, EquatorialFrame::Apparent);
            assert!((0.0..DPI).contains(&position.ra), "{body}: ra");
            assert!(position.dec.abs() <= std::f64::consts::FRAC_PI_2, "{body}: dec");
            assert!(position.earth_distance > 0.0, "{body}: distance");
        }
        // One instant, ten bodies, one cache fill.
        assert_eq!(sky.earth_cache_recomputations(), 1);
    }

    #[test]
    fn test_out_of_range_index_is_noop() {
        let mut sky = NearSky::new();
        let instant = Instant::new(JDE, 0.0);
        let ghost = sky.position_by_index(42, instant, None, EquatorialFrame::Apparent);
        assert_eq!(ghost, BodyPosition::zeroed(EquatorialFrame::Apparent));
    }

    #[test]
    fn test_parallax_shifts_moon_most() {
        let mut sky = NearSky::new();
        let instant = Instant::new(JDE, 0.0);
        let geo = sky.position(Body::Moon, instant, None, EquatorialFrame::Apparent);

        let observer = Arc::new(Location::new(-116.863, 33.356, 1.706));
        let topo = sky.position(Body::Moon, instant, Some(&observer), EquatorialFrame::Apparent);

        // The lunar parallax can reach ~1°; it must be visible here and
        // far larger than any planetary parallax.
        let moon_shift = angular_separation(geo.ra, geo.dec, topo.ra, topo.dec);
        assert!(moon_shift > 1e-4, "moon parallax {moon_shift}");

        let geo_mars = sky.position(Body::Mars, instant, None, EquatorialFrame::Apparent);
        let topo_mars =
            sky.position(Body::Mars, instant, Some(&observer), EquatorialFrame::Apparent);
        let mars_shift =
            angular_separation(geo_mars.ra, geo_mars.dec, topo_mars.ra, topo_mars.dec);
        assert!(mars_shift < moon_shift / 10.0);
    }

    #[test]
    fn test_moon_illumination_in_range() {
        let mut sky = NearSky::new();
        for k in 0..30 {
            let instant = Instant::new(JDE + k as f64, 0.0);
            let illum = sky.moon_illumination(instant, None);
            assert!((0.0..=1.0).contains(&illum.fraction));
        }
    }

    #[test]
    fn test_phase_angle_clamped() {
        // A degenerate triangle (body between Sun and Earth on a line)
        // must clamp instead of producing NaN.
        let i = phase_angle(0.5, 0.5, 1.0);
        assert_relative_eq!(i, std::f64::consts::PI, epsilon = 1e-9);
        assert!(!phase_angle(1.0, 1.0, 2.0).is_nan());
    }

    fn angular_separation(ra1: f64, dec1: f64, ra2: f64, dec2: f64) -> f64 {
        let cos_sep =
            dec1.sin() * dec2.sin() + dec1.cos() * dec2.cos() * (ra1 - ra2).cos();
        cos_sep.clamp(-1.0, 1.0).acos()
    }
}
