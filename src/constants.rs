//! # Constants and type definitions for nearsky
//!
//! This module centralizes the **physical constants**, **conversion factors**
//! and **common type definitions** used throughout the crate.
//!
//! ## Overview
//!
//! - Astronomical and geophysical constants
//! - Unit conversions (degrees ↔ radians, days ↔ seconds, AU ↔ km)
//! - Core type aliases used across the crate
//!
//! These definitions are shared by the body models, the reference-system
//! transformations and the orbit-determination routines.

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Number of seconds in a Julian day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Astronomical Unit in kilometers (IAU 2012)
pub const AU: f64 = 149_597_870.7;

/// Julian Ephemeris Day of the J2000.0 epoch (2000-01-01 12:00:00 TT)
pub const T2000: f64 = 2_451_545.0;

/// Conversion factor between Julian Date and Modified Julian Date
pub const JDTOMJD: f64 = 2_400_000.5;

/// Days per Julian century
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Days per Julian millennium
pub const DAYS_PER_MILLENNIUM: f64 = 365_250.0;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Arcseconds → radians
pub const RADSEC: f64 = std::f64::consts::PI / 648_000.0;

/// Hours → radians
pub const RADH: f64 = DPI / 24.0;

/// Earth equatorial radius in meters (GRS1980/WGS84)
pub const EARTH_MAJOR_AXIS: f64 = 6_378_137.0;

/// Earth polar radius in meters (GRS1980/WGS84)
pub const EARTH_MINOR_AXIS: f64 = 6_356_752.3;

/// Earth radius expressed in astronomical units
pub const ERAU: f64 = (EARTH_MAJOR_AXIS / 1000.) / AU;

/// Gaussian gravitational constant k (used in classical orbit dynamics)
pub const GAUSS_GRAV: f64 = 0.01720209895;

/// k², often used in Kepler's third law
pub const GAUSS_GRAV_SQUARED: f64 = GAUSS_GRAV * GAUSS_GRAV;

/// Ratio of the Sun's mass to the combined Earth+Moon mass
pub const SUN_EARTH_MOON_MASS_RATIO: f64 = 328_900.5614;

/// Speed of light in km/s
pub const VLIGHT: f64 = 2.99792458e5;

/// Speed of light in astronomical units per day
pub const VLIGHT_AU: f64 = VLIGHT / AU * SECONDS_PER_DAY;

/// Light travel time across one astronomical unit, in days
pub const LIGHT_TIME_PER_AU: f64 = 0.0057755183;

/// Equatorial horizontal parallax at 1 AU (solar parallax), in arcseconds
pub const PARALLAX_AT_ONE_AU: f64 = 8.794;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in arcseconds
pub type ArcSec = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Julian Ephemeris Day (TT scale)
pub type JulianDay = f64;
