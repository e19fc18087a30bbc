//! # Keplerian position model
//!
//! Closed-form position of a body on a planar ellipse, with the Sun at one focus, as a
//! function of its phase angle θ measured from perihelion.
//!
//! ```text
//! r(θ) = a (1 − e²) / (1 + e cos θ)
//! x    = r cos θ − c        c = a e
//! y    = 0
//! z    = r sin θ
//! ```
//!
//! Scene positions are expressed in scene units: every AU length is multiplied by the scale
//! passed by the caller (normally [`VISUAL_SCALE`]). The per-frame scalars of
//! [`FrameState`] are reported back in AU, km/s and degrees.

use nalgebra::Vector3;

use crate::{
    constants::{
        AstronomicalUnit, Degree, KmPerSecond, Radian, SceneUnit, DEGRAD, DPI,
        EARTH_ORBIT_RADIUS, VISUAL_SCALE,
    },
    orbital_elements::OrbitalElements,
};

/// Return the principal value of an angle in radians, in `[0, 2π)`.
pub fn principal_angle(a: Radian) -> Radian {
    a.rem_euclid(DPI)
}

/// Phase angle reported in degrees, always in `[0, 360)`.
///
/// The clock angles grow without bound, so the reduction is done here and only here.
pub fn phase_degrees(theta: Radian) -> Degree {
    let deg = principal_angle(theta) * DEGRAD;
    // rem_euclid can round up to exactly 2π for tiny negative inputs
    if deg >= 360.0 {
        0.0
    } else {
        deg
    }
}

/// Distance from the occupied focus to the body, conic equation in polar form.
///
/// Arguments
/// ---------
/// * `semi_major_axis` – `a`, in any length unit.
/// * `eccentricity` – `e` in `[0, 1)`, which keeps the denominator strictly positive.
/// * `theta` – Phase angle from perihelion (radians).
///
/// Return
/// ------
/// * `r(θ)` in the unit of `semi_major_axis`.
pub fn focal_radius(semi_major_axis: f64, eccentricity: f64, theta: Radian) -> f64 {
    semi_major_axis * (1.0 - eccentricity * eccentricity) / (1.0 + eccentricity * theta.cos())
}

/// Scene position of a body on the ellipse described by `elements`.
///
/// The focus-relative point `(r cos θ, r sin θ)` is shifted along `−x` by the focal offset
/// `c = a·e`, in scene units.
///
/// Arguments
/// ---------
/// * `elements` – Orbit of the body.
/// * `theta` – Phase angle from perihelion (radians, unbounded).
/// * `scale` – Scene units per AU.
pub fn asteroid_position(elements: &OrbitalElements, theta: Radian, scale: f64) -> Vector3<f64> {
    let a = elements.semi_major_axis() * scale;
    let e = elements.eccentricity();
    let c = a * e;
    let r = focal_radius(a, e, theta);

    Vector3::new(r * theta.cos() - c, 0.0, r * theta.sin())
}

/// Scene position of the Earth on its reference circle.
pub fn earth_position(earth_angle: Radian) -> Vector3<f64> {
    circle_position(EARTH_ORBIT_RADIUS, earth_angle)
}

pub(crate) fn circle_position(radius: SceneUnit, angle: Radian) -> Vector3<f64> {
    Vector3::new(radius * angle.cos(), 0.0, radius * angle.sin())
}

/// Instantaneous orbital speed from the vis-viva equation.
///
/// `v = v0 · sqrt(2/r − 1/a)` with `v0` the base velocity of `elements`, `r` and `a` in AU.
pub fn vis_viva_speed(elements: &OrbitalElements, radius: AstronomicalUnit) -> KmPerSecond {
    let factor = 2.0 / radius - 1.0 / elements.semi_major_axis();
    elements.base_velocity() * factor.max(0.0).sqrt()
}

/// Everything a renderer needs to draw one frame.
///
/// Positions are in scene units, scalars in AU, km/s and degrees.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameState {
    pub asteroid: Vector3<f64>,
    pub earth: Vector3<f64>,
    pub distance_au: AstronomicalUnit,
    pub distance_from_earth_au: AstronomicalUnit,
    pub speed_km_s: KmPerSecond,
    pub phase_degrees: Degree,
}

impl FrameState {
    /// Evaluate the model for the given phase angles, at the default [`VISUAL_SCALE`].
    pub fn evaluate(
        elements: &OrbitalElements,
        asteroid_angle: Radian,
        earth_angle: Radian,
    ) -> Self {
        Self::evaluate_scaled(elements, asteroid_angle, earth_angle, VISUAL_SCALE)
    }

    /// Evaluate the model for the given phase angles.
    ///
    /// Arguments
    /// ---------
    /// * `elements` – Orbit of the displayed body.
    /// * `asteroid_angle` – Phase of the asteroid from perihelion (radians).
    /// * `earth_angle` – Phase of the Earth on its reference circle (radians).
    /// * `scale` – Scene units per AU, the same one used to build the asteroid path.
    pub fn evaluate_scaled(
        elements: &OrbitalElements,
        asteroid_angle: Radian,
        earth_angle: Radian,
        scale: f64,
    ) -> Self {
        let asteroid = asteroid_position(elements, asteroid_angle, scale);
        let earth = earth_position(earth_angle);

        let distance_au = focal_radius(
            elements.semi_major_axis(),
            elements.eccentricity(),
            asteroid_angle,
        );

        FrameState {
            asteroid,
            earth,
            distance_au,
            distance_from_earth_au: (asteroid - earth).norm() / scale,
            speed_km_s: vis_viva_speed(elements, distance_au),
            phase_degrees: phase_degrees(asteroid_angle),
        }
    }
}
