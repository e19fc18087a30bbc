//! # Closed orbit polylines
//!
//! An [`OrbitPath`] is the static line strip drawn under a moving body. It samples one full
//! revolution at `N` uniform steps, endpoints included, so it holds `N + 1` points and the last
//! point lands back on the first one.

use std::{ops::Index, sync::Arc};

use nalgebra::Vector3;

use crate::{
    constants::{
        SceneUnit, ASTEROID_PATH_SEGMENTS, DPI, EARTH_ORBIT_RADIUS, EARTH_PATH_SEGMENTS,
        VISUAL_SCALE,
    },
    kepler::{asteroid_position, circle_position},
    orbital_elements::OrbitalElements,
};

/// Immutable, cheaply cloneable sequence of scene points forming a closed loop.
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitPath {
    points: Arc<[Vector3<f64>]>,
}

impl OrbitPath {
    /// Sample the asteroid ellipse at [`ASTEROID_PATH_SEGMENTS`] steps and [`VISUAL_SCALE`].
    pub fn asteroid(elements: &OrbitalElements) -> Self {
        Self::ellipse(elements, ASTEROID_PATH_SEGMENTS, VISUAL_SCALE)
    }

    /// Sample Earth's reference circle at [`EARTH_PATH_SEGMENTS`] steps.
    pub fn earth() -> Self {
        Self::circle(EARTH_ORBIT_RADIUS, EARTH_PATH_SEGMENTS)
    }

    /// Sample an ellipse with the same model as the live position.
    ///
    /// Arguments
    /// ---------
    /// * `elements` – Orbit to draw.
    /// * `segments` – Number of uniform steps over one revolution (at least 1).
    /// * `scale` – Scene units per AU, identical to the one used for the moving body.
    ///
    /// Return
    /// ------
    /// * A path of `segments + 1` points.
    pub fn ellipse(elements: &OrbitalElements, segments: usize, scale: f64) -> Self {
        Self::sample(segments, |theta| asteroid_position(elements, theta, scale))
    }

    /// Sample a circle of `radius` scene units centered on the origin.
    pub fn circle(radius: SceneUnit, segments: usize) -> Self {
        Self::sample(segments, |theta| circle_position(radius, theta))
    }

    fn sample(segments: usize, position: impl Fn(f64) -> Vector3<f64>) -> Self {
        let segments = segments.max(1);
        let points = (0..=segments)
            .map(|i| position(i as f64 / segments as f64 * DPI))
            .collect();

        OrbitPath { points }
    }

    pub fn points(&self) -> &[Vector3<f64>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Flat `[x0, y0, z0, x1, ...]` buffer, the layout expected by GPU vertex attributes.
    pub fn to_flat_f32(&self) -> Vec<f32> {
        self.points
            .iter()
            .flat_map(|p| [p.x as f32, p.y as f32, p.z as f32])
            .collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vector3<f64>> {
        self.points.iter()
    }
}

impl Index<usize> for OrbitPath {
    type Output = Vector3<f64>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.points[index]
    }
}

impl<'a> IntoIterator for &'a OrbitPath {
    type Item = &'a Vector3<f64>;
    type IntoIter = std::slice::Iter<'a, Vector3<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
