//! Animation clock driving the asteroid and Earth phase angles

use crate::constants::{Radian, ASTEROID_RATE, EARTH_RATE, MAX_SPEED, MIN_SPEED, SPEED_STEP};

/// Phase angles advanced once per rendered frame.
///
/// The cadence is a fixed visual one (`0.005` and `0.003` rad per tick at unit speed), not tied
/// to the real period of either body. Angles are never wrapped; consumers only feed them to
/// periodic functions or to [`phase_degrees`](crate::kepler::phase_degrees).
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitClock {
    asteroid_angle: Radian,
    earth_angle: Radian,
    /// Multiplier applied to both rates, kept in `[MIN_SPEED, MAX_SPEED]`
    speed: f64,
    paused: bool,
}

impl OrbitClock {
    pub fn new() -> Self {
        Self {
            asteroid_angle: 0.0,
            earth_angle: 0.0,
            speed: 1.0,
            paused: false,
        }
    }

    pub fn asteroid_angle(&self) -> Radian {
        self.asteroid_angle
    }

    pub fn earth_angle(&self) -> Radian {
        self.earth_angle
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Change the speed multiplier by `delta · 0.5`, clamped to `[0.1, 5.0]`.
    ///
    /// A non-finite `delta` leaves the speed unchanged.
    pub fn set_speed(&mut self, delta: f64) {
        if !delta.is_finite() {
            return;
        }
        self.speed = (self.speed + delta * SPEED_STEP).clamp(MIN_SPEED, MAX_SPEED);
    }

    /// Pause simulation
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Resume simulation
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Toggle pause state
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Is paused?
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Advance both angles by one tick.
    ///
    /// Return
    /// ------
    /// * `true` if the angles moved, `false` while paused.
    pub fn advance(&mut self) -> bool {
        if self.paused {
            return false;
        }

        self.asteroid_angle += ASTEROID_RATE * self.speed;
        self.earth_angle += EARTH_RATE * self.speed;
        true
    }

    /// Put the asteroid back at perihelion. Earth keeps its own phase.
    pub fn reset_asteroid(&mut self) {
        self.asteroid_angle = 0.0;
    }
}

impl Default for OrbitClock {
    fn default() -> Self {
        Self::new()
    }
}
