//! # Heliocentric body models (VSOP87D, truncated)
//!
//! One model per body, each wrapping the body's coefficient tables and the
//! shared time-scaling convention: the time argument is **Julian millennia
//! from J2000.0** and the tables produce heliocentric ecliptic longitude,
//! latitude (radians, dynamical ecliptic and equinox of date) and radius
//! vector (AU).
//!
//! The tables are the published truncations of the full VSOP87D solution:
//! complete term lists for Mercury–Mars and Earth (arcsecond-level over
//! several millennia around J2000), leading terms for Jupiter–Neptune. They
//! are compiled-in constant data; nothing is parsed at run time.
//!
//! There are no error conditions here: a model always returns a value, and
//! epochs far outside the fitted range degrade smoothly in accuracy rather
//! than failing.

mod earth;
mod jupiter;
mod mars;
mod mercury;
mod neptune;
mod saturn;
mod uranus;
mod venus;

use crate::bodies::Body;
use crate::coordinates::{EclipticCoord, EclipticFrame};
use crate::series::{normalize_two_pi, PeriodicSeries};

/// A named body's coefficient tables for the three spherical coordinates.
#[derive(Debug, Clone, Copy)]
pub struct VsopModel {
    pub name: &'static str,
    longitude: PeriodicSeries,
    latitude: PeriodicSeries,
    radius: PeriodicSeries,
}

impl VsopModel {
    /// Heliocentric ecliptic coordinates of the body at time argument `t`
    /// (Julian millennia from J2000.0).
    ///
    /// Longitude is wrapped into [0, 2π); latitude and radius are used as
    /// the series produce them.
    pub fn heliocentric(&self, t: f64) -> EclipticCoord {
        EclipticCoord {
            longitude: normalize_two_pi(self.longitude.evaluate(t)),
            latitude: self.latitude.evaluate(t),
            radius: self.radius.evaluate(t),
            frame: EclipticFrame::OfDate,
        }
    }
}

/// Earth's own model, used for the observer's heliocentric state and,
/// reversed, for the Sun.
pub fn earth() -> &'static VsopModel {
    &earth::MODEL
}

/// Model for a VSOP planet. Panics if called for a body without a VSOP
/// table (Sun, Moon, Pluto) — the engine's dispatch keeps that from
/// happening.
pub fn model(body: Body) -> &'static VsopModel {
    match body {
        Body::Mercury => &mercury::MODEL,
        Body::Venus => &venus::MODEL,
        Body::Mars => &mars::MODEL,
        Body::Jupiter => &jupiter::MODEL,
        Body::Saturn => &saturn::MODEL,
        Body::Uranus => &uranus::MODEL,
        Body::Neptune => &neptune::MODEL,
        _ => panic!("{} has no VSOP model", body.name()),
    }
}
