//! Classical orbital elements and the Cartesian → Keplerian conversion.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::constants::{AstronomicalUnit, JulianDay, Radian, DPI};
use crate::nearsky_errors::NearskyError;

/// Threshold below which the node vector is treated as degenerate
/// (equatorial orbit).
const NODE_EPS: f64 = 1e-12;

/// Classical Keplerian elements at an epoch.
///
/// Units:
/// * `semiparameter`: AU
/// * `eccentricity`: unitless (assumed non-zero; all bodies served here
///   have measurably eccentric orbits)
/// * `inclination`, `ascending_node_longitude`, `periapsis_argument`,
///   `true_anomaly`: radians
/// * `epoch`: Julian Ephemeris Day the elements were derived at
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalElements {
    pub semiparameter: AstronomicalUnit,
    pub eccentricity: f64,
    pub inclination: Radian,
    pub ascending_node_longitude: Radian,
    pub periapsis_argument: Radian,
    pub true_anomaly: Radian,
    pub epoch: JulianDay,
}

/// Convert a position/velocity state into classical Keplerian elements
/// (ELORB-style), canonical units with μ = 1.
///
/// Arguments
/// ---------
/// * `pos`: position in AU.
/// * `vel`: velocity in AU per canonical time unit.
///
/// Return
/// ------
/// * [`OrbitalElements`] with `epoch = 0` (the caller stamps the epoch).
///
/// Quadrant corrections: Ω flips when the node vector's y component is
/// negative, ω when the eccentricity vector points below the reference
/// plane, ν when the body moves toward periapsis (`pos·vel < 0`). Every
/// inverse-cosine argument is clamped to [−1, 1] against floating-point
/// round-off.
///
/// Errors
/// ------
/// * [`NearskyError::DegenerateOrbitGeometry`] when position and velocity
///   are collinear (zero angular momentum).
pub fn cartesian_to_keplerian(
    pos: Vector3<f64>,
    vel: Vector3<f64>,
) -> Result<OrbitalElements, NearskyError> {
    let h = pos.cross(&vel);
    let h_norm = h.norm();
    if h_norm == 0.0 {
        return Err(NearskyError::DegenerateOrbitGeometry);
    }

    let r = pos.norm();
    let v2 = vel.norm_squared();

    // Node vector ẑ × h and eccentricity vector ((v² − μ/r)·pos − (pos·vel)·vel)/μ.
    let n = Vector3::z().cross(&h);
    let rv = pos.dot(&vel);
    let e_vec = (v2 - 1.0 / r) * pos - rv * vel;
    let ecc = e_vec.norm();

    // Semiparameter from the specific orbital energy.
    let energy = v2 / 2.0 - 1.0 / r;
    let semi_major = -1.0 / (2.0 * energy);
    let semiparameter = semi_major * (1.0 - ecc * ecc);

    let inclination = (h.z / h_norm).clamp(-1.0, 1.0).acos();

    let n_norm = n.norm();
    let (ascending_node_longitude, periapsis_argument) = if n_norm > NODE_EPS {
        let mut raan = (n.x / n_norm).clamp(-1.0, 1.0).acos();
        if n.y < 0.0 {
            raan = DPI - raan;
        }
        let mut argp = (n.dot(&e_vec) / (n_norm * ecc)).clamp(-1.0, 1.0).acos();
        if e_vec.z < 0.0 {
            argp = DPI - argp;
        }
        (raan, argp)
    } else {
        // Equatorial orbit: the node is undefined; measure the periapsis
        // from the +X axis instead.
        let mut argp = (e_vec.x / ecc).clamp(-1.0, 1.0).acos();
        if e_vec.y < 0.0 {
            argp = DPI - argp;
        }
        (0.0, argp)
    };

    let mut true_anomaly = (e_vec.dot(&pos) / (ecc * r)).clamp(-1.0, 1.0).acos();
    if rv < 0.0 {
        true_anomaly = DPI - true_anomaly;
    }

    Ok(OrbitalElements {
        semiparameter,
        eccentricity: ecc,
        inclination,
        ascending_node_longitude,
        periapsis_argument,
        true_anomaly,
        epoch: 0.0,
    })
}
