//! Planar state vectors.
//!
//! A [`StateVector`] is one `(x, y, vx, vy)` sample of a body's motion in
//! the orbital plane, in meters and m/s. Samples are immutable once
//! produced by the integrator; the derived scalars here (radius, specific
//! orbital energy, specific angular momentum) are the quantities the
//! conservation checks and the perihelion analysis read off.

use crate::units::{Position2D, Velocity2D};
use serde::{Deserialize, Serialize};

/// Position and velocity of one body at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateVector {
    /// Position in the orbital plane (m).
    pub position: Position2D,
    /// Velocity in the orbital plane (m/s).
    pub velocity: Velocity2D,
}

impl StateVector {
    /// Create a new state vector.
    #[must_use]
    pub const fn new(position: Position2D, velocity: Velocity2D) -> Self {
        Self { position, velocity }
    }

    /// Create a state vector from raw `(x, y, vx, vy)` components.
    #[must_use]
    pub fn from_components(x: f64, y: f64, vx: f64, vy: f64) -> Self {
        Self {
            position: Position2D::from_meters(x, y),
            velocity: Velocity2D::from_mps(vx, vy),
        }
    }

    /// Distance from the central mass at the origin (m).
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.position.magnitude_squared().sqrt()
    }

    /// Speed (m/s).
    #[must_use]
    pub fn speed(&self) -> f64 {
        self.velocity.magnitude_squared().sqrt()
    }

    /// Specific orbital energy `E = v²/2 − μ/R` (J/kg).
    ///
    /// Constant along a two-body trajectory; the velocity-rotation
    /// perturbation does no work (it is always orthogonal to `v`), so `E`
    /// remains a valid conservation oracle for perturbed bodies too.
    #[must_use]
    pub fn specific_orbital_energy(&self, mu: f64) -> f64 {
        self.velocity.magnitude_squared() / 2.0 - mu / self.radius()
    }

    /// Specific angular momentum `h = x·vy − y·vx` (m²/s, z-component).
    #[must_use]
    pub fn specific_angular_momentum(&self) -> f64 {
        let (x, y) = self.position.as_meters();
        let (vx, vy) = self.velocity.as_mps();
        x * vy - y * vx
    }

    /// Polar angle of the position vector (radians, in `(-π, π]`).
    #[must_use]
    pub fn position_angle(&self) -> f64 {
        let (x, y) = self.position.as_meters();
        y.atan2(x)
    }

    /// Check if all four components are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.velocity.is_finite()
    }

    /// Get raw `(x, y, vx, vy)` components as a tuple.
    #[must_use]
    pub fn as_components(&self) -> (f64, f64, f64, f64) {
        let (x, y) = self.position.as_meters();
        let (vx, vy) = self.velocity.as_mps();
        (x, y, vx, vy)
    }
}
