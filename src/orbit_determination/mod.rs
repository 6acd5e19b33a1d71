//! # Orbit determination for orbit visualization
//!
//! Independent of the pointwise ephemeris path, the host's orbit renderer
//! needs classical Keplerian elements per body. They are recovered from two
//! time-separated position samples of the same body models: a short-way
//! Lambert–Gauss solve ([`lambert::lambert_gauss`]) turns the two positions
//! into a velocity, and an ELORB-style conversion
//! ([`elements::cartesian_to_keplerian`]) turns position+velocity into
//! elements.
//!
//! Everything here works in canonical units with μ = 1: the caller converts
//! real time intervals into canonical time units before calling (for
//! heliocentric orbits one day is `GAUSS_GRAV` canonical units).
//!
//! ## Recompute policy
//!
//! Elements are regenerated only when the requested epoch has drifted more
//! than 1/20 of the body's sidereal period away from the elements' epoch.
//! That bounds the Lambert–Gauss sampling interval to a regime where the
//! short-way assumption is well conditioned, and it bounds the
//! recomputation cost during continuous animation.

pub mod elements;
pub mod lambert;

use nalgebra::Vector3;

pub use elements::{cartesian_to_keplerian, OrbitalElements};
pub use lambert::lambert_gauss;

use crate::bodies::Body;
use crate::constants::JulianDay;
use crate::nearsky_errors::NearskyError;

/// Fraction of the sidereal period the elements may age before they are
/// considered stale.
const STALENESS_FRACTION: f64 = 1.0 / 20.0;

/// Fraction of the sidereal period separating the two position samples.
const SAMPLE_FRACTION: f64 = 1.0 / 40.0;

/// Per-body cache of derived orbital elements.
#[derive(Debug, Default)]
pub struct OrbitCatalog {
    slots: [Option<OrbitalElements>; 10],
}

impl OrbitCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return elements for `body` valid around `jde`, recomputing them via
    /// `sample` only when the cached ones are stale.
    ///
    /// Arguments
    /// ---------
    /// * `body`: the target body.
    /// * `jde`: the requested epoch.
    /// * `canonical_rate`: canonical time units per day for the body's
    ///   central mass (`GAUSS_GRAV` for heliocentric orbits).
    /// * `sample`: position of the body at a Julian day, in the frame the
    ///   elements should describe (AU).
    pub fn current(
        &mut self,
        body: Body,
        jde: JulianDay,
        canonical_rate: f64,
        sample: impl Fn(JulianDay) -> Vector3<f64>,
    ) -> Result<OrbitalElements, NearskyError> {
        let period = body.sidereal_period_days();
        if let Some(cached) = &self.slots[body.index()] {
            if (jde - cached.epoch).abs() <= period * STALENESS_FRACTION {
                return Ok(*cached);
            }
        }

        let dt_days = period * SAMPLE_FRACTION;
        let pos1 = sample(jde);
        let pos2 = sample(jde + dt_days);
        let vel1 = lambert_gauss(pos1, pos2, dt_days * canonical_rate);
        let mut elements = cartesian_to_keplerian(pos1, vel1)?;
        elements.epoch = jde;

        self.slots[body.index()] = Some(elements);
        Ok(elements)
    }
}

#[cfg(test)]
mod orbit_catalog_test {
    use super::*;
    use crate::constants::GAUSS_GRAV;

    /// Analytic ellipse (a = 1 AU, e = 0.1) traversed at the canonical
    /// rate; Kepler's equation solved by Newton.
    fn elliptic(jde: JulianDay) -> Vector3<f64> {
        let (a, e) = (1.0, 0.1);
        let mean_anomaly = (jde - 2451545.0) * GAUSS_GRAV;
        let mut ecc_anomaly = mean_anomaly;
        for _ in 0..20 {
            ecc_anomaly -=
                (ecc_anomaly - e * ecc_anomaly.sin() - mean_anomaly) / (1.0 - e * ecc_anomaly.cos());
        }
        Vector3::new(
            a * (ecc_anomaly.cos() - e),
            a * (1.0f64 - e * e).sqrt() * ecc_anomaly.sin(),
            0.0,
        )
    }

    #[test]
    fn test_staleness_policy() {
        let mut catalog = OrbitCatalog::new();
        let first = catalog
            .current(Body::Mars, 2451545.0, GAUSS_GRAV, elliptic)
            .unwrap();

        // Within period/20 the cached elements come back unchanged.
        let near = catalog
            .current(Body::Mars, 2451545.0 + 10.0, GAUSS_GRAV, elliptic)
            .unwrap();
        assert_eq!(first.epoch, near.epoch);

        // Beyond period/20 (Mars: ~34 days) the epoch advances.
        let far = catalog
            .current(Body::Mars, 2451545.0 + 60.0, GAUSS_GRAV, elliptic)
            .unwrap();
        assert_eq!(far.epoch, 2451545.0 + 60.0);
    }
}
