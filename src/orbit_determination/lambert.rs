//! Short-way Lambert–Gauss velocity recovery.

use nalgebra::Vector3;

/// Relative convergence threshold on the `y` iterate.
const CONVERGENCE: f64 = 1e-14;

/// Safety bound on the fixed-point iteration; not expected to trigger in
/// normal use (see [`lambert_gauss`]).
const MAX_ITERATIONS: usize = 100;

/// Recover the velocity at the first of two sampled positions
/// (Gauss's solution of Lambert's problem, short way).
///
/// Arguments
/// ---------
/// * `pos1`, `pos2`: position vectors in AU (any inertial frame), separated
///   by less than half a revolution.
/// * `dt`: time from `pos1` to `pos2` in **canonical time units** (μ = 1).
///
/// Return
/// ------
/// * The velocity vector at `pos1`, AU per canonical time unit.
///
/// Method
/// ------
/// The chord angle Δν comes from the dot product of the two positions. With
/// the auxiliary quantities
/// ```text
/// l = (r₁+r₂) / (4·√(r₁r₂)·cos(Δν/2)) − 1/2
/// m = dt² / (2·√(r₁r₂)·cos(Δν/2))³
/// ```
/// the scalar iteration `x₁ = m/y² − l`, `y = 1 + x₂·(l + x₁)` runs until
/// `|Δy/y| < 1e-14`, where `x₂` is a fixed truncated continued-fraction-like
/// series in `x₁`. The semiparameter follows from `cos(ΔE/2) = 1 − 2·x₁`,
/// and the Lagrange coefficients f and g give
/// `v₁ = (pos2 − f·pos1) / g`.
///
/// If the iteration has not converged after 100 rounds the best available
/// `y` is used silently; this is a known imprecision boundary, not an error.
pub fn lambert_gauss(pos1: Vector3<f64>, pos2: Vector3<f64>, dt: f64) -> Vector3<f64> {
    let r1 = pos1.norm();
    let r2 = pos2.norm();

    let cos_dnu = (pos1.dot(&pos2) / (r1 * r2)).clamp(-1.0, 1.0);
    let dnu = cos_dnu.acos();
    let cos_half = (dnu / 2.0).cos();

    let sqrt_r1r2 = (r1 * r2).sqrt();
    let l = (r1 + r2) / (4.0 * sqrt_r1r2 * cos_half) - 0.5;
    let m = dt * dt / (2.0 * sqrt_r1r2 * cos_half).powi(3);

    let mut y = 1.0;
    let mut x1 = 0.0;
    for _ in 0..MAX_ITERATIONS {
        x1 = m / (y * y) - l;
        let x2 = x2_series(x1);
        let y_next = 1.0 + x2 * (l + x1);
        let converged = ((y_next - y) / y_next).abs() < CONVERGENCE;
        y = y_next;
        if converged {
            break;
        }
    }

    let cos_half_de = 1.0 - 2.0 * x1;
    let p = r1 * r2 * (1.0 - cos_dnu) / (r1 + r2 - 2.0 * sqrt_r1r2 * cos_half * cos_half_de);

    let f = 1.0 - (r2 / p) * (1.0 - cos_dnu);
    let g = r1 * r2 * dnu.sin() / p.sqrt();

    (pos2 - f * pos1) / g
}

/// The truncated series for x₂, six nested terms deep.
fn x2_series(x: f64) -> f64 {
    (4.0 / 3.0)
        * (1.0
            + (6.0 * x / 5.0)
                * (1.0
                    + (8.0 * x / 7.0)
                        * (1.0
                            + (10.0 * x / 9.0)
                                * (1.0
                                    + (12.0 * x / 11.0)
                                        * (1.0
                                            + (14.0 * x / 13.0) * (1.0 + 16.0 * x / 15.0))))))
}

#[cfg(test)]
mod lambert_test {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_x2_series_at_zero() {
        // Every nested factor collapses, leaving 4/3.
        assert_eq!(x2_series(0.0), 4.0 / 3.0);
    }

    #[test]
    fn test_circular_orbit_velocity() {
        // On a unit circular orbit (μ = 1) the speed is 1 and the velocity
        // is tangential.
        let step: f64 = 0.05;
        let pos1 = Vector3::new(1.0, 0.0, 0.0);
        let pos2 = Vector3::new(step.cos(), step.sin(), 0.0);
        let vel = lambert_gauss(pos1, pos2, step);
        assert_relative_eq!(vel.norm(), 1.0, epsilon = 1e-9);
        assert_relative_eq!(vel.dot(&pos1), 0.0, epsilon = 1e-9);
        assert!(vel.y > 0.0);
    }

    #[test]
    fn test_velocity_scales_with_radius() {
        // v = 1/√r for circular motion: at r = 4 the speed is 1/2.
        let r = 4.0;
        let speed = (1.0f64 / r).sqrt();
        let angle = 0.03;
        let dt = angle * r / speed;
        let pos1 = Vector3::new(r, 0.0, 0.0);
        let pos2 = Vector3::new(r * angle.cos(), r * angle.sin(), 0.0);
        let vel = lambert_gauss(pos1, pos2, dt);
        assert_relative_eq!(vel.norm(), speed, epsilon = 1e-6);
    }
}
