use thiserror::Error;

/// Errors surfaced by the nearsky engine.
///
/// The engine is a pure-computation core: most numeric-domain hazards
/// (inverse-trigonometric arguments drifting outside [-1, 1], the
/// Lambert–Gauss iteration hitting its cap) are handled by clamping or by a
/// silent best-effort result rather than by failing. The variants below only
/// cover the defensive boundaries a host can actually trip.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NearskyError {
    #[error("body index {0} is outside the supported range 0..=9")]
    InvalidBodyIndex(usize),

    #[error("position samples are collinear with the origin; orbit cannot be determined")]
    DegenerateOrbitGeometry,
}
