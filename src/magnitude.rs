//! Apparent visual magnitudes and angular sizes.
//!
//! Magnitudes follow the empirical phase-angle polynomials of the
//! Astronomical Almanac plus the `5·log₁₀(r·Δ)` distance term. Saturn gets
//! a ring-brightness correction driven by the Saturnicentric latitude of
//! Earth; the ring geometry uses the secular formulas for the ring plane's
//! inclination and ascending node.

use crate::bodies::Body;
use crate::constants::{ArcSec, AstronomicalUnit, JulianDay, Radian, RADEG};
use crate::time::julian_centuries;

/// Saturn ring aspect as seen from Earth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    /// Sine of the Saturnicentric latitude of Earth.
    pub sin_b: f64,
}

/// Compute the Saturn ring geometry.
///
/// Arguments
/// ---------
/// * `jde`: Julian Ephemeris Day.
/// * `lon`, `lat`: Saturn's **geocentric** ecliptic longitude/latitude of
///   date, radians.
pub fn ring_geometry(jde: JulianDay, lon: Radian, lat: Radian) -> RingGeometry {
    let t = julian_centuries(jde);

    // Inclination and ascending node of the ring plane (secular formulas).
    let incl = (28.075216 - 0.012998 * t + 0.000004 * t * t) * RADEG;
    let node = (169.508470 + 1.394681 * t + 0.000412 * t * t) * RADEG;

    let sin_b =
        -incl.sin() * lat.cos() * (lon - node).sin() - incl.cos() * lat.sin();
    RingGeometry { sin_b }
}

/// Ring-brightness magnitude correction.
///
/// Since B is well within ±90°, assume |B| positive: the correction uses
/// `|sin B|` so that a ring tilted toward either hemisphere brightens the
/// planet identically.
fn ring_magnitude_correction(ring: RingGeometry) -> f64 {
    let sin_b = ring.sin_b.abs();
    -2.60 * sin_b + 1.25 * sin_b * sin_b
}

/// Apparent visual magnitude of a planet.
///
/// Arguments
/// ---------
/// * `body`: the planet (Sun and Moon return `None`).
/// * `phase_angle`: Sun–body–Earth angle, radians.
/// * `sun_distance`: body→Sun distance r, AU.
/// * `earth_distance`: body→Earth distance Δ, AU.
/// * `ring`: Saturn's ring geometry; ignored for every other body.
pub fn visual_magnitude(
    body: Body,
    phase_angle: Radian,
    sun_distance: AstronomicalUnit,
    earth_distance: AstronomicalUnit,
    ring: Option<RingGeometry>,
) -> Option<f64> {
    let i = phase_angle.to_degrees();
    let base = match body {
        Body::Mercury => -0.42 + 0.0380 * i - 0.000273 * i * i + 0.000002 * i * i * i,
        Body::Venus => -4.40 + 0.0009 * i + 0.000239 * i * i - 0.00000065 * i * i * i,
        Body::Mars => -1.52 + 0.016 * i,
        Body::Jupiter => -9.40 + 0.005 * i,
        Body::Saturn => -8.88 + ring.map(ring_magnitude_correction).unwrap_or(0.0),
        Body::Uranus => -7.19,
        Body::Neptune => -6.87,
        Body::Pluto => -1.00,
        Body::Sun | Body::Moon => return None,
    };

    Some(base + 5.0 * (sun_distance * earth_distance).log10())
}

/// Apparent angular diameter in arcseconds: twice the 1-AU semidiameter
/// scaled by distance.
pub fn angular_diameter(body: Body, distance: AstronomicalUnit) -> ArcSec {
    2.0 * body.semidiameter_at_one_au() / distance
}
