//! # Constants and type definitions for neo_orbit
//!
//! This module centralizes the **physical constants**, **visual constants** and **unit type
//! aliases** used throughout the crate.
//!
//! ## Overview
//!
//! - Angular constants (2π, radians → degrees)
//! - Earth-referenced orbital speed used to scale the vis-viva equation
//! - The scene scale shared by the static orbit path and the live asteroid position
//! - Animation cadence of the [`OrbitClock`](crate::orbit_clock::OrbitClock)
//! - Sampling resolution of the generated [`OrbitPath`](crate::orbit_path::OrbitPath)s

// -------------------------------------------------------------------------------------------------
// Angles
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Radians → degrees
pub const DEGRAD: f64 = 180.0 / std::f64::consts::PI;

// -------------------------------------------------------------------------------------------------
// Physical constants
// -------------------------------------------------------------------------------------------------

/// Mean orbital speed of the Earth in km/s.
///
/// A body on a circular orbit of radius `a` AU moves at `EARTH_MEAN_ORBITAL_SPEED / sqrt(a)`.
pub const EARTH_MEAN_ORBITAL_SPEED: f64 = 29.78;

// -------------------------------------------------------------------------------------------------
// Scene constants
// -------------------------------------------------------------------------------------------------

/// Scene units per astronomical unit.
///
/// Applied to both the static asteroid path and the live asteroid position so that the two
/// always coincide; every scene distance is divided by it to get back to AU.
pub const VISUAL_SCALE: f64 = 3.0;

/// Radius of Earth's reference circle, in scene units.
pub const EARTH_ORBIT_RADIUS: f64 = 4.0;

/// Number of segments of the asteroid orbit polyline.
pub const ASTEROID_PATH_SEGMENTS: usize = 128;

/// Number of segments of Earth's reference circle polyline.
pub const EARTH_PATH_SEGMENTS: usize = 64;

// -------------------------------------------------------------------------------------------------
// Animation cadence
// -------------------------------------------------------------------------------------------------

/// Asteroid phase increment per tick at unit speed (radians).
pub const ASTEROID_RATE: Radian = 0.005;

/// Earth phase increment per tick at unit speed (radians).
pub const EARTH_RATE: Radian = 0.003;

/// Lower bound of the speed multiplier
pub const MIN_SPEED: f64 = 0.1;

/// Upper bound of the speed multiplier
pub const MAX_SPEED: f64 = 5.0;

/// Speed multiplier change per unit of `delta` passed to
/// [`OrbitClock::set_speed`](crate::orbit_clock::OrbitClock::set_speed)
pub const SPEED_STEP: f64 = 0.5;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Speed in kilometers per second
pub type KmPerSecond = f64;
/// Duration in days
pub type Day = f64;
/// Distance in scene units ([`VISUAL_SCALE`] scene units per AU)
pub type SceneUnit = f64;
