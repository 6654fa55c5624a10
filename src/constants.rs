//! # Constants and type definitions for heliopos
//!
//! This module centralizes the **time-scale anchors**, **conversion factors**, and
//! **common type aliases** shared by the ephemeris pipeline.
//!
//! ## Overview
//!
//! - Julian Date anchors (J2000.0, Unix epoch)
//! - Unit conversions (degrees ↔ radians, milliseconds ↔ days, days ↔ centuries)
//! - Core type aliases used across the crate

// -------------------------------------------------------------------------------------------------
// Time anchors and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Julian Date of the J2000.0 reference epoch (2000-01-01 12:00:00)
pub const J2000_JD: f64 = 2_451_545.0;

/// Julian Date of the Unix epoch (1970-01-01 00:00:00 UTC)
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Number of milliseconds in a day
pub const MS_PER_DAY: f64 = 86_400_000.0;

/// Number of days in a Julian century
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Full turn in degrees
pub const DEG_PER_TURN: f64 = 360.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Continuous Julian Date (days)
pub type JulianDate = f64;
/// Julian centuries elapsed since J2000.0
pub type JulianCentury = f64;

/// Heliocentric ecliptic Cartesian position, in AU.
pub type Position3D = nalgebra::Vector3<f64>;
