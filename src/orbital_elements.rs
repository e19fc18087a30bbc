//! # Orbital elements of a displayed body
//!
//! This module defines [`OrbitalElements`](crate::orbital_elements::OrbitalElements), the
//! reduced, planar element set driving the orbit visualization:
//!
//! 1. **a** – Semi-major axis (AU)
//! 2. **e** – Eccentricity (unitless, `0 ≤ e < 1`)
//! 3. **P** – Orbital period (days)
//!
//! Inclination, node and periapsis orientation are not modelled: the orbit is drawn in the
//! ecliptic plane with the perihelion on the `+x` axis.
//!
//! ## Validation
//!
//! Elements are validated once, at construction. Only closed orbits are accepted, so every
//! downstream computation can rely on `1 + e·cos θ > 0`.
//!
//! ## Derived quantity
//!
//! The base velocity `29.78 / sqrt(a)` km/s is derived from `a` on demand and never stored,
//! so it cannot drift away from the semi-major axis it belongs to.
//!
//! ## Example
//!
//! ```rust
//! use neo_orbit::orbital_elements::OrbitalElements;
//!
//! let eros = OrbitalElements::new("433 Eros", 1.458, 0.223, 643.0).unwrap();
//! assert!((eros.base_velocity() - 29.78 / 1.458_f64.sqrt()).abs() < 1e-12);
//! ```

use std::fmt;

use crate::{
    constants::{AstronomicalUnit, Day, KmPerSecond, EARTH_MEAN_ORBITAL_SPEED},
    orbit_errors::OrbitError,
};

/// Planar Keplerian elements of one body.
///
/// Units
/// -----
/// * `semi_major_axis`: Astronomical Units (AU).
/// * `eccentricity`: unitless, in `[0, 1)`.
/// * `period_days`: days.
///
/// Fields are private: an instance can only be obtained through
/// [`OrbitalElements::new`], which enforces the closed-orbit invariant.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitalElements {
    name: String,
    semi_major_axis: AstronomicalUnit,
    eccentricity: f64,
    period_days: Day,
}

impl OrbitalElements {
    /// Build a validated element set.
    ///
    /// Arguments
    /// ---------
    /// * `name` – Display name, must not be blank.
    /// * `semi_major_axis` – `a` in AU, finite and strictly positive.
    /// * `eccentricity` – `e`, finite and in `[0, 1)`.
    /// * `period_days` – Orbital period in days, finite and strictly positive.
    ///
    /// Return
    /// ------
    /// * The element set, or the [`OrbitError`] naming the first invalid field.
    pub fn new(
        name: impl Into<String>,
        semi_major_axis: AstronomicalUnit,
        eccentricity: f64,
        period_days: Day,
    ) -> Result<Self, OrbitError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(OrbitError::EmptyName);
        }
        if !(semi_major_axis.is_finite() && semi_major_axis > 0.0) {
            return Err(OrbitError::InvalidSemiMajorAxis(semi_major_axis));
        }
        if !(eccentricity.is_finite() && (0.0..1.0).contains(&eccentricity)) {
            return Err(OrbitError::InvalidEccentricity(eccentricity));
        }
        if !(period_days.is_finite() && period_days > 0.0) {
            return Err(OrbitError::InvalidPeriod(period_days));
        }

        Ok(OrbitalElements {
            name,
            semi_major_axis,
            eccentricity,
            period_days,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn semi_major_axis(&self) -> AstronomicalUnit {
        self.semi_major_axis
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    pub fn period_days(&self) -> Day {
        self.period_days
    }

    /// Mean orbital speed scaling for this orbit, `29.78 / sqrt(a)` km/s.
    pub fn base_velocity(&self) -> KmPerSecond {
        EARTH_MEAN_ORBITAL_SPEED / self.semi_major_axis.sqrt()
    }

    /// Distance between the ellipse center and the focus occupied by the Sun (`c = a·e`, AU).
    pub fn focal_offset(&self) -> AstronomicalUnit {
        self.semi_major_axis * self.eccentricity
    }

    /// Perihelion distance `a(1 − e)` in AU.
    pub fn perihelion(&self) -> AstronomicalUnit {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Aphelion distance `a(1 + e)` in AU.
    pub fn aphelion(&self) -> AstronomicalUnit {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }
}

impl fmt::Display for OrbitalElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Orbital Elements: {}", self.name)?;
        writeln!(f, "-------------------------------------------")?;
        writeln!(
            f,
            "  a   (semi-major axis)       = {:.6} AU",
            self.semi_major_axis
        )?;
        writeln!(
            f,
            "  e   (eccentricity)          = {:.6}",
            self.eccentricity
        )?;
        writeln!(
            f,
            "  P   (period)                = {} days",
            self.period_days.round()
        )?;
        writeln!(
            f,
            "  v0  (base velocity)         = {:.2} km/s",
            self.base_velocity()
        )
    }
}
