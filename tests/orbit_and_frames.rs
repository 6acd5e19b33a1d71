//! Frame round-trips, the Lambert–Gauss → Keplerian chain, and the model
//! characterizations (Pluto light-time convergence, Saturn ring term).

use nalgebra::Vector3;
use nearsky::bodies::Body;
use nearsky::constants::T2000;
use nearsky::coordinates::{EquatorialCoord, EquatorialFrame};
use nearsky::engine::{Instant, NearSky};
use nearsky::orbit_determination::{cartesian_to_keplerian, lambert_gauss};
use nearsky::pluto;
use nearsky::ref_system::{precess_nutate, unprecess_nutate};

/// Position on an a = 1 AU, e = 0.1 ellipse (μ = 1 canonical units),
/// Kepler's equation solved by Newton.
fn elliptic_position(mean_anomaly: f64) -> Vector3<f64> {
    let e = 0.1;
    let mut ecc_anomaly = mean_anomaly;
    for _ in 0..30 {
        ecc_anomaly -=
            (ecc_anomaly - e * ecc_anomaly.sin() - mean_anomaly) / (1.0 - e * ecc_anomaly.cos());
    }
    Vector3::new(
        ecc_anomaly.cos() - e,
        (1.0f64 - e * e).sqrt() * ecc_anomaly.sin(),
        0.0,
    )
}

#[test]
fn lambert_gauss_keplerian_round_trip() {
    // Two samples a small arc apart on a known e = 0.1, p = 0.99 orbit:
    // the recovered elements must match analytically.
    let m0 = 0.7;
    let dt = 0.12; // canonical time units ≈ 7 days
    let pos1 = elliptic_position(m0);
    let pos2 = elliptic_position(m0 + dt);

    let vel1 = lambert_gauss(pos1, pos2, dt);
    let elements = cartesian_to_keplerian(pos1, vel1).unwrap();

    let p_expected = 1.0 - 0.1f64 * 0.1;
    assert!(
        (elements.semiparameter - p_expected).abs() / p_expected < 1e-4,
        "p = {} vs {}",
        elements.semiparameter,
        p_expected
    );
    assert!(
        (elements.eccentricity - 0.1).abs() / 0.1 < 1e-4,
        "e = {}",
        elements.eccentricity
    );
}

#[test]
fn precession_round_trip_over_three_millennia() {
    let coord = EquatorialCoord::new(4.321, 0.987, EquatorialFrame::J2000);
    // ±3000 years around J2000 in ~220-year steps.
    for k in -5..=5 {
        let jde = T2000 + k as f64 * 219_000.0;
        let there = precess_nutate(jde, coord);
        let back = unprecess_nutate(jde, there);
        assert!(
            (back.ra - coord.ra).abs() < 1e-9,
            "jde {jde}: ra drift {}",
            (back.ra - coord.ra).abs()
        );
        assert!((back.dec - coord.dec).abs() < 1e-9);
    }
}

#[test]
fn pluto_third_light_time_pass_is_negligible() {
    let jde = 2448908.5;
    // A representative mid-October Sun position (geocentric equatorial
    // J2000, AU); convergence of the iteration does not depend on it.
    let sun = Vector3::new(0.9833, 0.1699, 0.0737);
    let (ra2, dec2, _, _) = pluto::geocentric_with_passes(jde, sun, 2);
    let (ra3, dec3, _, _) = pluto::geocentric_with_passes(jde, sun, 3);
    assert!((ra3 - ra2).abs() < 1e-6, "ra moved {}", (ra3 - ra2).abs());
    assert!((dec3 - dec2).abs() < 1e-6);

    // One pass, by contrast, is visibly short of converged.
    let (ra1, _, _, _) = pluto::geocentric_with_passes(jde, sun, 1);
    assert!((ra1 - ra2).abs() < 1e-4);
}

#[test]
fn saturn_magnitude_is_finite_and_bright() {
    let mut sky = NearSky::new();
    let m = sky
        .visual_magnitude(Body::Saturn, Instant::new(2448976.5, 0.0))
        .unwrap();
    // Saturn stays within roughly -0.5..+1.5 visual magnitude.
    assert!((-1.0..2.0).contains(&m), "Saturn magnitude {m}");
}

#[test]
fn orbital_elements_match_the_planet() {
    let mut sky = NearSky::new();
    let elements = sky
        .orbital_elements(Body::Mars, Instant::new(2448976.5, 0.0))
        .unwrap();

    // Mars: a ≈ 1.5237 AU, e ≈ 0.0934, i ≈ 1.85°.
    let a = elements.semiparameter / (1.0 - elements.eccentricity * elements.eccentricity);
    assert!((a - 1.5237).abs() < 0.01, "a = {a}");
    assert!((elements.eccentricity - 0.0934).abs() < 0.01);
    assert!((elements.inclination.to_degrees() - 1.85).abs() < 0.2);
}

#[test]
fn moon_orbital_elements_are_geocentric() {
    let mut sky = NearSky::new();
    let elements = sky
        .orbital_elements(Body::Moon, Instant::new(2448976.5, 0.0))
        .unwrap();

    // a ≈ 384400 km ≈ 0.00257 AU, e ≈ 0.055, i ≈ 5.1° to the ecliptic.
    let a = elements.semiparameter / (1.0 - elements.eccentricity * elements.eccentricity);
    assert!((0.0023..0.0029).contains(&a), "a = {a}");
    assert!((0.02..0.09).contains(&elements.eccentricity), "e = {}", elements.eccentricity);
    assert!(
        (4.0..6.5).contains(&elements.inclination.to_degrees()),
        "i = {}°",
        elements.inclination.to_degrees()
    );
}

#[test]
fn elements_are_reused_until_stale() {
    let mut sky = NearSky::new();
    let first = sky
        .orbital_elements(Body::Jupiter, Instant::new(2448976.5, 0.0))
        .unwrap();
    // Jupiter's period/20 is ~217 days; a month later nothing changes.
    let later = sky
        .orbital_elements(Body::Jupiter, Instant::new(2448976.5 + 30.0, 0.0))
        .unwrap();
    assert_eq!(first, later);

    let much_later = sky
        .orbital_elements(Body::Jupiter, Instant::new(2448976.5 + 400.0, 0.0))
        .unwrap();
    assert_eq!(much_later.epoch, 2448976.5 + 400.0);
}
