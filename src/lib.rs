//! # nearsky
//!
//! Solar-system ephemeris and orbit-geometry engine.
//!
//! `nearsky` computes, for any Julian Ephemeris Day, the geocentric or
//! topocentric direction and distance of the Sun, the Moon, the eight planets
//! (Earth excluded — it is the observer) and Pluto, together with the derived
//! quantities a sky-visualization host needs: phase angles, visual
//! magnitudes, angular sizes, the Moon's illuminated fraction and bright-limb
//! angle, and classical Keplerian elements recovered from two sampled
//! positions (Lambert–Gauss) for drawing orbit arcs.
//!
//! The crate is a pure-computation core: no I/O, no blocking, no internal
//! locking. A [`engine::NearSky`] instance is meant to be owned and driven by
//! a single computation thread; every query takes `&mut self`, which makes
//! the single-writer cache discipline a compile-time fact.
//!
//! ## Quick start
//!
//! ```rust
//! use nearsky::bodies::Body;
//! use nearsky::coordinates::EquatorialFrame;
//! use nearsky::engine::{Instant, NearSky};
//!
//! let mut sky = NearSky::new();
//! let instant = Instant::new(2448976.5, 0.0); // 1992-12-20 00:00 TT
//! let mars = sky.position(Body::Mars, instant, None, EquatorialFrame::Apparent);
//! assert!(mars.earth_distance > 0.0);
//! ```

pub mod bodies;
mod cache;
pub mod constants;
pub mod coordinates;
pub mod engine;
pub mod lunar;
pub mod magnitude;
pub mod nearsky_errors;
pub mod observer;
pub mod orbit_determination;
pub mod pluto;
pub mod ref_system;
pub mod series;
pub mod time;
pub mod vsop87;
