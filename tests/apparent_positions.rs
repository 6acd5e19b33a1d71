//! End-to-end checks of the apparent-position pipeline against reference
//! coordinates for 1992-12-20 00:00 TT (JDE 2448976.5), geocentric mode,
//! ΔT = 0.

use nearsky::bodies::Body;
use nearsky::constants::{AU, RADEG, RADSEC};
use nearsky::coordinates::EquatorialFrame;
use nearsky::engine::{Instant, NearSky};

const JDE: f64 = 2448976.5;

fn hms(h: f64, m: f64, s: f64) -> f64 {
    (h + m / 60.0 + s / 3600.0) * 15.0 * RADEG
}

fn dms(sign: f64, d: f64, m: f64, s: f64) -> f64 {
    sign * (d + m / 60.0 + s / 3600.0) * RADEG
}

/// Great-circle separation in arcseconds.
fn separation_arcsec(ra1: f64, dec1: f64, ra2: f64, dec2: f64) -> f64 {
    let cos_sep = dec1.sin() * dec2.sin() + dec1.cos() * dec2.cos() * (ra1 - ra2).cos();
    cos_sep.clamp(-1.0, 1.0).acos() / RADSEC
}

fn assert_close(body: Body, ra_ref: f64, dec_ref: f64, tol_arcsec: f64) {
    let mut sky = NearSky::new();
    let position = sky.position(body, Instant::new(JDE, 0.0), None, EquatorialFrame::Apparent);
    let sep = separation_arcsec(position.ra, position.dec, ra_ref, dec_ref);
    assert!(
        sep < tol_arcsec,
        "{body}: {sep:.1}\" from reference (ra {:.6} vs {:.6}, dec {:.6} vs {:.6})",
        position.ra,
        ra_ref,
        position.dec,
        dec_ref
    );
}

#[test]
fn mercury_apparent_place() {
    assert_close(Body::Mercury, hms(16.0, 33.0, 59.3), dms(-1.0, 20.0, 53.0, 32.0), 15.0);
}

#[test]
fn venus_apparent_place() {
    assert_close(Body::Venus, hms(21.0, 4.0, 41.5), dms(-1.0, 18.0, 53.0, 17.0), 15.0);
}

#[test]
fn mars_apparent_place() {
    assert_close(Body::Mars, hms(7.0, 48.0, 35.3), dms(1.0, 24.0, 35.0, 35.0), 15.0);
}

#[test]
fn sun_apparent_place() {
    assert_close(Body::Sun, hms(17.0, 52.0, 49.9), dms(-1.0, 23.0, 25.0, 46.0), 10.0);
}

#[test]
fn moon_apparent_place_and_distance() {
    assert_close(Body::Moon, hms(14.0, 23.0, 33.2), dms(-1.0, 18.0, 0.0, 20.0), 20.0);

    let mut sky = NearSky::new();
    let moon = sky.position(Body::Moon, Instant::new(JDE, 0.0), None, EquatorialFrame::Apparent);
    let km = moon.earth_distance * AU;
    assert!(
        (km - 378_437.0).abs() < 100.0,
        "moon distance {km:.0} km, expected ≈378437 km"
    );
}

#[test]
fn repeated_queries_do_not_refill_the_cache() {
    let mut sky = NearSky::new();
    let instant = Instant::new(JDE, 0.0);

    let first = sky.position(Body::Mercury, instant, None, EquatorialFrame::Apparent);
    let fills = sky.earth_cache_recomputations();
    assert_eq!(fills, 1);

    // Different bodies at the same instant share the cached Earth state…
    for body in [Body::Venus, Body::Mars, Body::Sun, Body::Moon, Body::Pluto] {
        sky.position(body, instant, None, EquatorialFrame::Apparent);
    }
    assert_eq!(sky.earth_cache_recomputations(), fills);

    // …and an identical repeat is bit-identical.
    let again = sky.position(Body::Mercury, instant, None, EquatorialFrame::Apparent);
    assert_eq!(first, again);
    assert_eq!(sky.earth_cache_recomputations(), fills);
}

#[test]
fn j2000_and_apparent_frames_differ_by_precession() {
    let mut sky = NearSky::new();
    let instant = Instant::new(JDE, 0.0);
    let apparent = sky.position(Body::Venus, instant, None, EquatorialFrame::Apparent);
    let j2000 = sky.position(Body::Venus, instant, None, EquatorialFrame::J2000);

    // Seven years of precession plus aberration: a few arcminutes.
    let sep = separation_arcsec(apparent.ra, apparent.dec, j2000.ra, j2000.dec);
    assert!((60.0..1200.0).contains(&sep), "frame separation {sep:.0}\"");
}

#[test]
fn moon_illumination_matches_phase() {
    let mut sky = NearSky::new();
    // 1992-12-20 was a waning crescent a few days before new moon
    // (new moon: 1992-12-24).
    let illum = sky.moon_illumination(Instant::new(JDE, 0.0), None);
    assert!(
        illum.fraction < 0.35,
        "expected a waning crescent, got {}",
        illum.fraction
    );
    assert!(illum.fraction > 0.05);
}
