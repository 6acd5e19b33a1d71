//! # Reference systems and frame corrections
//!
//! The stateless pure functions the per-body pipelines are composed from:
//! mean obliquity, nutation (IAU 1980), precession (IAU 1976), the FK5 frame
//! correction, annual aberration in both the ecliptic and the equatorial
//! frame, the ecliptic→equatorial rotation that encodes nutation, the
//! combined `precess_nutate`/`unprecess_nutate` pair, and diurnal parallax.
//!
//! All angles are radians unless a function says otherwise; time arguments
//! are Julian Ephemeris Days (TT).

use nalgebra::{Matrix3, Rotation3, Vector3};

use crate::constants::{
    ArcSec, AstronomicalUnit, JulianDay, Radian, DPI, PARALLAX_AT_ONE_AU, RADEG, RADSEC,
};
use crate::coordinates::{EquatorialCoord, EquatorialFrame};
use crate::time::julian_centuries;

/// Compute the mean obliquity of the ecliptic at a given epoch (IAU 1976
/// model).
///
/// Arguments
/// ---------
/// * `jde`: Julian Ephemeris Day (TT scale).
///
/// Returns
/// --------
/// * Mean obliquity of the ecliptic in radians.
///
/// The obliquity is a cubic polynomial in Julian centuries since J2000,
/// evaluated with Horner's method; the coefficients are in arcseconds and
/// converted to radians.
pub fn obleq(jde: JulianDay) -> Radian {
    // Obliquity coefficients
    let ob0 = ((23.0 * 3600.0 + 26.0 * 60.0) + 21.448) * RADSEC;
    let ob1 = -46.815 * RADSEC;
    let ob2 = -0.0006 * RADSEC;
    let ob3 = 0.00181 * RADSEC;

    let t = julian_centuries(jde);

    ((ob3 * t + ob2) * t + ob1) * t + ob0
}

/// True obliquity: mean obliquity plus the nutation in obliquity.
pub fn true_obliquity(jde: JulianDay) -> Radian {
    let (_, deps) = nutation(jde);
    obleq(jde) + deps * RADSEC
}

/// One row of the IAU 1980 nutation series: argument
/// `d·D + m·M + mp·M' + f·F + om·Ω`, coefficients in 0.0001 arcsecond
/// (constant and per-century parts).
struct NutationTerm {
    d: i8,
    m: i8,
    mp: i8,
    f: i8,
    om: i8,
    psi: f64,
    psi_t: f64,
    eps: f64,
    eps_t: f64,
}

const fn nut(
    d: i8,
    m: i8,
    mp: i8,
    f: i8,
    om: i8,
    psi: f64,
    psi_t: f64,
    eps: f64,
    eps_t: f64,
) -> NutationTerm {
    NutationTerm {
        d,
        m,
        mp,
        f,
        om,
        psi,
        psi_t,
        eps,
        eps_t,
    }
}

#[rustfmt::skip]
const NUTATION_TERMS: &[NutationTerm] = &[
    nut(0, 0, 0, 0, 1, -171996.0, -174.2, 92025.0, 8.9),
    nut(-2, 0, 0, 2, 2, -13187.0, -1.6, 5736.0, -3.1),
    nut(0, 0, 0, 2, 2, -2274.0, -0.2, 977.0, -0.5),
    nut(0, 0, 0, 0, 2, 2062.0, 0.2, -895.0, 0.5),
    nut(0, 1, 0, 0, 0, 1426.0, -3.4, 54.0, -0.1),
    nut(0, 0, 1, 0, 0, 712.0, 0.1, -7.0, 0.0),
    nut(-2, 1, 0, 2, 2, -517.0, 1.2, 224.0, -0.6),
    nut(0, 0, 0, 2, 1, -386.0, -0.4, 200.0, 0.0),
    nut(0, 0, 1, 2, 2, -301.0, 0.0, 129.0, -0.1),
    nut(-2, -1, 0, 2, 2, 217.0, -0.5, -95.0, 0.3),
    nut(-2, 0, 1, 0, 0, -158.0, 0.0, 0.0, 0.0),
    nut(-2, 0, 0, 2, 1, 129.0, 0.1, -70.0, 0.0),
    nut(0, 0, -1, 2, 2, 123.0, 0.0, -53.0, 0.0),
    nut(2, 0, 0, 0, 0, 63.0, 0.0, 0.0, 0.0),
    nut(0, 0, 1, 0, 1, 63.0, 0.1, -33.0, 0.0),
    nut(2, 0, -1, 2, 2, -59.0, 0.0, 26.0, 0.0),
    nut(0, 0, -1, 0, 1, -58.0, -0.1, 32.0, 0.0),
    nut(0, 0, 1, 2, 1, -51.0, 0.0, 27.0, 0.0),
    nut(-2, 0, 2, 0, 0, 48.0, 0.0, 0.0, 0.0),
    nut(0, 0, -2, 2, 1, 46.0, 0.0, -24.0, 0.0),
    nut(2, 0, 0, 2, 2, -38.0, 0.0, 16.0, 0.0),
    nut(0, 0, 2, 2, 2, -31.0, 0.0, 13.0, 0.0),
    nut(0, 0, 2, 0, 0, 29.0, 0.0, 0.0, 0.0),
    nut(-2, 0, 1, 2, 2, 29.0, 0.0, -12.0, 0.0),
    nut(0, 0, 0, 2, 0, 26.0, 0.0, 0.0, 0.0),
    nut(-2, 0, 0, 2, 0, -22.0, 0.0, 0.0, 0.0),
    nut(0, 0, -1, 2, 1, 21.0, 0.0, -10.0, 0.0),
    nut(0, 2, 0, 0, 0, 17.0, -0.1, 0.0, 0.0),
    nut(2, 0, -1, 0, 1, 16.0, 0.0, -8.0, 0.0),
    nut(-2, 2, 0, 2, 2, -16.0, 0.1, 7.0, 0.0),
    nut(0, 1, 0, 0, 1, -15.0, 0.0, 9.0, 0.0),
    nut(-2, 0, 1, 0, 1, -13.0, 0.0, 7.0, 0.0),
    nut(0, -1, 0, 0, 1, -12.0, 0.0, 6.0, 0.0),
    nut(0, 0, 2, -2, 0, 11.0, 0.0, 0.0, 0.0),
    nut(2, 0, -1, 2, 1, -10.0, 0.0, 5.0, 0.0),
    nut(2, 0, 1, 2, 2, -8.0, 0.0, 3.0, 0.0),
    nut(0, 1, 0, 2, 2, 7.0, 0.0, -3.0, 0.0),
    nut(-2, 1, 1, 0, 0, -7.0, 0.0, 0.0, 0.0),
    nut(0, -1, 0, 2, 2, -7.0, 0.0, 3.0, 0.0),
    nut(2, 0, 0, 2, 1, -7.0, 0.0, 3.0, 0.0),
    nut(2, 0, 1, 0, 0, 6.0, 0.0, 0.0, 0.0),
    nut(-2, 0, 2, 2, 2, 6.0, 0.0, -3.0, 0.0),
    nut(-2, 0, 1, 2, 1, 6.0, 0.0, -3.0, 0.0),
    nut(2, 0, -2, 0, 1, -6.0, 0.0, 3.0, 0.0),
    nut(2, 0, 0, 0, 1, -6.0, 0.0, 3.0, 0.0),
    nut(0, -1, 1, 0, 0, 5.0, 0.0, 0.0, 0.0),
    nut(-2, -1, 0, 2, 1, -5.0, 0.0, 3.0, 0.0),
    nut(-2, 0, 0, 0, 1, -5.0, 0.0, 3.0, 0.0),
    nut(0, 0, 2, 2, 1, -5.0, 0.0, 3.0, 0.0),
];

/// Compute the nutation angles in longitude and obliquity using the IAU
/// 1980 (Wahr) model.
///
/// Arguments
/// ---------
/// * `jde`: Julian Ephemeris Day (TT scale).
///
/// Returns
/// --------
/// * A tuple `(Δψ, Δε)`:
///     - `Δψ`: nutation in longitude \[arcseconds\]
///     - `Δε`: nutation in obliquity \[arcseconds\]
///
/// The five fundamental lunar/solar arguments are cubic polynomials in
/// Julian centuries from J2000; the series keeps every IAU 1980 term with an
/// amplitude above 0.0005″, good to a few milliarcseconds.
pub fn nutation(jde: JulianDay) -> (ArcSec, ArcSec) {
    let t = julian_centuries(jde);
    let t2 = t * t;
    let t3 = t2 * t;

    // Mean elongation of the Moon from the Sun.
    let d = (297.85036 + 445267.111480 * t - 0.0019142 * t2 + t3 / 189474.0).rem_euclid(360.0)
        * RADEG;
    // Mean anomaly of the Sun.
    let m =
        (357.52772 + 35999.050340 * t - 0.0001603 * t2 - t3 / 300000.0).rem_euclid(360.0) * RADEG;
    // Mean anomaly of the Moon.
    let mp =
        (134.96298 + 477198.867398 * t + 0.0086972 * t2 + t3 / 56250.0).rem_euclid(360.0) * RADEG;
    // Argument of latitude of the Moon.
    let f =
        (93.27191 + 483202.017538 * t - 0.0036825 * t2 + t3 / 327270.0).rem_euclid(360.0) * RADEG;
    // Longitude of the ascending node of the Moon's mean orbit.
    let om =
        (125.04452 - 1934.136261 * t + 0.0020708 * t2 + t3 / 450000.0).rem_euclid(360.0) * RADEG;

    let mut dpsi = 0.0;
    let mut deps = 0.0;
    for row in NUTATION_TERMS {
        let arg = row.d as f64 * d
            + row.m as f64 * m
            + row.mp as f64 * mp
            + row.f as f64 * f
            + row.om as f64 * om;
        let (sin_a, cos_a) = arg.sin_cos();
        dpsi += (row.psi + row.psi_t * t) * sin_a;
        deps += (row.eps + row.eps_t * t) * cos_a;
    }

    // Convert from 0.0001 arcseconds to arcseconds.
    (dpsi * 1e-4, deps * 1e-4)
}

/// Construct a right-handed 3×3 rotation matrix around one of the principal
/// axes (X, Y, or Z).
///
/// `alpha` is the rotation angle in radians (positive = direct sense), `k`
/// the axis index (0 → X, 1 → Y, 2 → Z). The rotation is **active**: the
/// returned matrix rotates a vector in a fixed frame, `x' = R · x`.
///
/// # Panics
///
/// Panics if `k > 2`, as only axes 0–2 are valid.
pub fn rotmt(alpha: Radian, k: usize) -> Matrix3<f64> {
    let axis = match k {
        0 => Vector3::x_axis(),
        1 => Vector3::y_axis(),
        2 => Vector3::z_axis(),
        _ => panic!("**** ROTMT: invalid axis index {k} (must be 0,1,2) ****"),
    };

    Rotation3::from_axis_angle(&axis, alpha).into()
}

/// Precession matrix from the mean equator and equinox of J2000.0 to that of
/// `jde` (IAU 1976 model).
///
/// The three precession angles ζ, z, θ are time polynomials in Julian
/// centuries; the returned matrix satisfies `x_date = P · x_J2000`.
pub fn prec(jde: JulianDay) -> Matrix3<f64> {
    // Precession polynomial coefficients (degrees per century powers)
    let zed = 0.6406161 * RADEG;
    let zd = 0.6406161 * RADEG;
    let thd = 0.5567530 * RADEG;

    let zedd = 0.0000839 * RADEG;
    let zdd = 0.0003041 * RADEG;
    let thdd = -0.0001185 * RADEG;

    let zeddd = 0.0000050 * RADEG;
    let zddd = 0.0000051 * RADEG;
    let thddd = -0.0000116 * RADEG;

    let t = julian_centuries(jde);

    let zeta = ((zeddd * t + zedd) * t + zed) * t;
    let z = ((zddd * t + zdd) * t + zd) * t;
    let theta = ((thddd * t + thdd) * t + thd) * t;

    rotmt(z, 2) * rotmt(-theta, 1) * rotmt(zeta, 2)
}

/// Nutation matrix from the mean to the true equator and equinox of date
/// (IAU 1980): rotate into the ecliptic by the mean obliquity, advance the
/// longitude by Δψ, rotate back by the true obliquity.
pub fn rnut80(jde: JulianDay) -> Matrix3<f64> {
    let epsm = obleq(jde);
    let (dpsi, deps) = nutation(jde);
    let epst = epsm + deps * RADSEC;

    rotmt(epst, 0) * rotmt(dpsi * RADSEC, 2) * rotmt(-epsm, 0)
}

/// Apply precession and nutation: J2000 mean coordinates → apparent
/// coordinates of date.
pub fn precess_nutate(jde: JulianDay, coord: EquatorialCoord) -> EquatorialCoord {
    let v = unit_vector(coord.ra, coord.dec);
    let (ra, dec, _) = cartesian_to_radec((rnut80(jde) * prec(jde)) * v);
    EquatorialCoord::new(ra, dec, EquatorialFrame::Apparent)
}

/// Inverse of [`precess_nutate`]: apparent coordinates of date → J2000 mean
/// coordinates. Implemented as the transposed rotation, so the round trip
/// is exact to machine precision.
pub fn unprecess_nutate(jde: JulianDay, coord: EquatorialCoord) -> EquatorialCoord {
    let v = unit_vector(coord.ra, coord.dec);
    let (ra, dec, _) = cartesian_to_radec((rnut80(jde) * prec(jde)).transpose() * v);
    EquatorialCoord::new(ra, dec, EquatorialFrame::J2000)
}

/// Ecliptic → equatorial conversion **with nutation**: the longitude is
/// advanced by Δψ and the rotation uses the true obliquity, so the result
/// is referred to the true equator and equinox of date. This is the step
/// that encodes nutation in the planet/Sun/Moon pipelines.
pub fn ecliptic_to_equatorial(jde: JulianDay, lon: Radian, lat: Radian) -> (Radian, Radian) {
    let (dpsi, _) = nutation(jde);
    let eps = true_obliquity(jde);
    let lambda = lon + dpsi * RADSEC;

    let (sin_l, cos_l) = lambda.sin_cos();
    let (sin_e, cos_e) = eps.sin_cos();
    let (sin_b, cos_b) = lat.sin_cos();

    let ra = (sin_l * cos_e - (sin_b / cos_b) * sin_e).atan2(cos_l);
    let dec = (sin_b * cos_e + cos_b * sin_e * sin_l).clamp(-1.0, 1.0).asin();
    (ra.rem_euclid(DPI), dec)
}

/// FK5 frame correction.
///
/// Rotates VSOP dynamical-frame ecliptic longitude/latitude onto the FK5
/// equatorial frame; a sub-arcsecond, slowly time-dependent offset. Applied
/// to the planets and the Sun, never to the Moon or Pluto.
pub fn convert_to_fk5(jde: JulianDay, lon: Radian, lat: Radian) -> (Radian, Radian) {
    let t = julian_centuries(jde);
    let lp = lon - (1.397 + 0.00031 * t) * t * RADEG;
    let (sin_lp, cos_lp) = lp.sin_cos();

    let dlon = -0.09033 * RADSEC + 0.03916 * RADSEC * (cos_lp + sin_lp) * lat.tan();
    let dlat = 0.03916 * RADSEC * (cos_lp - sin_lp);
    (lon + dlon, lat + dlat)
}

/// True longitude of the Sun, low precision — only used to orient the
/// aberration displacement, where a few arcseconds of error in the Sun's
/// longitude are irrelevant.
fn sun_true_longitude(t: f64) -> Radian {
    let l0 = (280.46646 + 36000.76983 * t + 0.0003032 * t * t).rem_euclid(360.0) * RADEG;
    let m = (357.52911 + 35999.05029 * t - 0.0001537 * t * t).rem_euclid(360.0) * RADEG;
    let c = ((1.914602 - 0.004817 * t - 0.000014 * t * t) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin())
        * RADEG;
    l0 + c
}

/// Constant of aberration, arcseconds.
const KAPPA: f64 = 20.49552;

/// Annual aberration in the ecliptic frame.
///
/// Adds the first-order displacement due to Earth's orbital velocity,
/// including the eccentricity terms. Applied only when apparent (not
/// J2000/astrometric) coordinates are requested.
pub fn ecliptic_aberration(jde: JulianDay, lon: Radian, lat: Radian) -> (Radian, Radian) {
    let t = julian_centuries(jde);
    let sun = sun_true_longitude(t);
    let e = 0.016708634 - 0.000042037 * t - 0.0000001267 * t * t;
    let pi = (102.93735 + 1.71946 * t + 0.00046 * t * t) * RADEG;
    let k = KAPPA * RADSEC;

    let dlon = (-k * (sun - lon).cos() + e * k * (pi - lon).cos()) / lat.cos();
    let dlat = -k * lat.sin() * ((sun - lon).sin() - e * (pi - lon).sin());
    (lon + dlon, lat + dlat)
}

/// Annual aberration in the equatorial frame (classical first-order
/// formulas), for bodies whose pipeline works directly in right ascension
/// and declination.
pub fn equatorial_aberration(jde: JulianDay, ra: Radian, dec: Radian) -> (Radian, Radian) {
    let t = julian_centuries(jde);
    let sun = sun_true_longitude(t);
    let e = 0.016708634 - 0.000042037 * t - 0.0000001267 * t * t;
    let pi = (102.93735 + 1.71946 * t + 0.00046 * t * t) * RADEG;
    let eps = obleq(jde);
    let k = KAPPA * RADSEC;

    let (sin_a, cos_a) = ra.sin_cos();
    let (sin_d, cos_d) = dec.sin_cos();
    let (sin_s, cos_s) = sun.sin_cos();
    let (sin_p, cos_p) = pi.sin_cos();
    let (sin_e, cos_e) = (eps.sin(), eps.cos());
    let tan_e = sin_e / cos_e;

    let dra = -k * (cos_a * cos_s * cos_e + sin_a * sin_s) / cos_d
        + e * k * (cos_a * cos_p * cos_e + sin_a * sin_p) / cos_d;
    let ddec = -k * (cos_s * cos_e * (tan_e * cos_d - sin_a * sin_d) + cos_a * sin_d * sin_s)
        + e * k * (cos_p * cos_e * (tan_e * cos_d - sin_a * sin_d) + cos_a * sin_d * sin_p);
    ((ra + dra).rem_euclid(DPI), dec + ddec)
}

/// Diurnal parallax correction.
///
/// Arguments
/// ---------
/// * `ra`, `dec`: geocentric apparent coordinates, radians.
/// * `distance`: geocentric distance in AU.
/// * `rho_sin_phi`, `rho_cos_phi`: the observer's geocentric-latitude
///   parallax factors, Earth radii.
/// * `hour_angle`: the body's local hour angle, radians.
///
/// Return
/// ------
/// * `(ra, dec, distance)` topocentric; the distance is rescaled by the
///   geometric factor `q = √(A² + B² + C²)`.
pub fn adjust_for_parallax(
    ra: Radian,
    dec: Radian,
    distance: AstronomicalUnit,
    rho_sin_phi: f64,
    rho_cos_phi: f64,
    hour_angle: Radian,
) -> (Radian, Radian, AstronomicalUnit) {
    // Equatorial horizontal parallax: sin π = sin(8.794″) / Δ.
    let sin_par = (PARALLAX_AT_ONE_AU * RADSEC).sin() / distance;

    let (sin_h, cos_h) = hour_angle.sin_cos();
    let (sin_d, cos_d) = dec.sin_cos();

    let delta_ra = (-rho_cos_phi * sin_par * sin_h).atan2(cos_d - rho_cos_phi * sin_par * cos_h);
    let topo_dec = ((sin_d - rho_sin_phi * sin_par) * delta_ra.cos())
        .atan2(cos_d - rho_cos_phi * sin_par * cos_h);

    let a = cos_d * sin_h;
    let b = cos_d * cos_h - rho_cos_phi * sin_par;
    let c = sin_d - rho_sin_phi * sin_par;
    let q = (a * a + b * b + c * c).sqrt();

    ((ra + delta_ra).rem_euclid(DPI), topo_dec, distance * q)
}

/// Convert a 3D Cartesian position vector to right ascension and
/// declination.
///
/// Return
/// ------
/// * Tuple `(α, δ, ρ)`:
///     - `α`: right ascension in radians, in the range [0, 2π).
///     - `δ`: declination in radians, in the range [−π/2, +π/2].
///     - `ρ`: Euclidean norm of the vector.
///
/// If the input vector has zero norm the result is `(0.0, 0.0, 0.0)`.
pub fn cartesian_to_radec(cartesian_position: Vector3<f64>) -> (Radian, Radian, f64) {
    let pos_norm = cartesian_position.norm();
    if pos_norm == 0. {
        return (0.0, 0.0, pos_norm);
    }

    let delta = (cartesian_position.z / pos_norm).clamp(-1.0, 1.0).asin();

    let cos_delta = delta.cos();
    if cos_delta == 0.0 {
        return (0.0, delta, pos_norm);
    }

    let cos_alpha = cartesian_position.x / (pos_norm * cos_delta);
    let sin_alpha = cartesian_position.y / (pos_norm * cos_delta);
    let alpha = sin_alpha.atan2(cos_alpha);
    let alpha = if alpha < 0.0 { alpha + DPI } else { alpha };
    (alpha, delta, pos_norm)
}

/// Unit vector of an (α, δ) direction.
pub fn unit_vector(ra: Radian, dec: Radian) -> Vector3<f64> {
    let (sin_a, cos_a) = ra.sin_cos();
    let (sin_d, cos_d) = dec.sin_cos();
    Vector3::new(cos_a * cos_d, sin_a * cos_d, sin_d)
}

#[cfg(test)]
mod ref_system_test {
    use super::*;
    use crate::constants::T2000;
    use approx::assert_relative_eq;

    #[test]
    fn test_obliquity() {
        assert_eq!(obleq(T2000), 0.40909280422232897);
    }

    #[test]
    fn test_nutation_meeus_example() {
        // Meeus example 22.a: 1987 April 10.0 TD (JDE 2446895.5):
        // Δψ = -3.788″, Δε = +9.443″.
        let (dpsi, deps) = nutation(2446895.5);
        assert_relative_eq!(dpsi, -3.788, epsilon = 0.01);
        assert_relative_eq!(deps, 9.443, epsilon = 0.01);
    }

    #[test]
    fn test_precession_matrix_orthonormal() {
        let p = prec(T2000 + 15000.0);
        let prod = p * p.transpose();
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!((prod[(i, j)] - expected).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_precession_meeus_example() {
        // Meeus example 21.b: θ Persei precessed from J2000 to 2028 Nov
        // 13.19 TD (JDE 2462088.69). Start from the proper-motion-corrected
        // place α 2h44m12.975s, δ +49°13'39.90"; expect α 2h46m11.331s,
        // δ +49°20'54.54".
        let ra0 = (2.0 + 44.0 / 60.0 + 12.975 / 3600.0) * 15.0 * RADEG;
        let dec0 = (49.0 + 13.0 / 60.0 + 39.90 / 3600.0) * RADEG;
        let v = prec(2462088.69) * unit_vector(ra0, dec0);
        let (ra, dec, _) = cartesian_to_radec(v);
        let ra_ref = (2.0 + 46.0 / 60.0 + 11.331 / 3600.0) * 15.0 * RADEG;
        let dec_ref = (49.0 + 20.0 / 60.0 + 54.54 / 3600.0) * RADEG;
        assert_relative_eq!(ra, ra_ref, epsilon = 0.05 * RADSEC);
        assert_relative_eq!(dec, dec_ref, epsilon = 0.05 * RADSEC);
    }

    #[test]
    fn test_precess_nutate_round_trip() {
        let coord = EquatorialCoord::new(1.2345, -0.5432, EquatorialFrame::J2000);
        for jde in [T2000 - 1_000_000.0, T2000 - 40_000.0, T2000 + 40_000.0, T2000 + 1_000_000.0] {
            let apparent = precess_nutate(jde, coord);
            let back = unprecess_nutate(jde, apparent);
            assert_relative_eq!(back.ra, coord.ra, epsilon = 1e-9);
            assert_relative_eq!(back.dec, coord.dec, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_ecliptic_to_equatorial_pole() {
        // A body at the ecliptic pole lands at δ = 90° − ε.
        let jde = T2000;
        let (_, dec) = ecliptic_to_equatorial(jde, 0.0, std::f64::consts::FRAC_PI_2);
        assert_relative_eq!(
            dec,
            std::f64::consts::FRAC_PI_2 - true_obliquity(jde),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_fk5_correction_is_small() {
        let (lon, lat) = convert_to_fk5(T2000, 1.0, 0.3);
        assert!((lon - 1.0).abs() < 0.3 * RADSEC);
        assert!((lat - 0.3).abs() < 0.1 * RADSEC);
    }

    #[test]
    fn test_aberration_magnitude() {
        // The aberration displacement never exceeds the aberration constant
        // (plus the small eccentricity term) along either axis.
        for k in 0..12 {
            let lon = k as f64 * 0.5;
            let (lon2, lat2) = ecliptic_aberration(T2000, lon, 0.1);
            assert!(((lon2 - lon) * 0.1f64.cos()).abs() < 21.5 * RADSEC);
            assert!((lat2 - 0.1).abs() < 21.5 * RADSEC);
        }
    }

    #[test]
    fn test_parallax_geocentric_observer_is_identity() {
        // An observer at the geocenter (ρ = 0) sees no parallax.
        let (ra, dec, dist) = adjust_for_parallax(2.0, 0.5, 0.00257, 0.0, 0.0, 1.0);
        assert_eq!(ra, 2.0);
        assert_relative_eq!(dec, 0.5, epsilon = 1e-15);
        assert_relative_eq!(dist, 0.00257, epsilon = 1e-15);
    }

    #[test]
    fn test_parallax_moon_scale() {
        // At the Moon's distance the horizontal parallax is ~57'; an
        // observer at the equator with the Moon on the horizon (H = 90°)
        // sees most of it in right ascension.
        let dist = 0.002569;
        let (ra, _, _) =
            adjust_for_parallax(0.0, 0.0, dist, 0.0, 1.0, std::f64::consts::FRAC_PI_2);
        let shift = (ra - DPI).abs();
        assert!((0.9..1.01).contains(&(shift / ((PARALLAX_AT_ONE_AU * RADSEC) / dist))));
    }

    #[test]
    fn test_cartesian_to_radec() {
        let (ra, dec, r) = cartesian_to_radec(Vector3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(ra, std::f64::consts::FRAC_PI_2, epsilon = 1e-15);
        assert_eq!(dec, 0.0);
        assert_eq!(r, 1.0);

        let (ra, dec, r) = cartesian_to_radec(Vector3::zeros());
        assert_eq!((ra, dec, r), (0.0, 0.0, 0.0));
    }
}
