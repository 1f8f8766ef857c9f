//! Equation of motion for a body around a fixed central mass.
//!
//! The vector field is `d/dt (x, y, vx, vy) = (vx, vy, ax, ay)` with the
//! Newtonian central-field acceleration
//!
//! ```text
//! R  = sqrt(x² + y²)
//! ax = -μ·x / R³
//! ay = -μ·y / R³
//! ```
//!
//! plus an optional per-body perturbation. Perturbations are attached as
//! data ([`Perturbation`]) rather than by branching on body identity inside
//! the field, so additional bodies can be given custom terms without
//! touching the equations.

use crate::error::{OrreryError, OrreryResult};
use crate::state::StateVector;
use serde::{Deserialize, Serialize};

/// Per-body perturbation descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Perturbation {
    /// Rotate the velocity vector at a fixed rate:
    /// `ax += k·vy`, `ay += -k·vx`.
    ///
    /// An empirical torque producing secular perihelion precession without
    /// deriving it from relativistic first principles. The term is always
    /// orthogonal to the velocity, so it does no work and preserves the
    /// specific orbital energy.
    VelocityRotation {
        /// Rotation coefficient `k` (1/s).
        coefficient: f64,
    },
}

impl Perturbation {
    /// Acceleration contribution `(ax, ay)` for the current velocity.
    #[must_use]
    pub fn contribution(&self, vx: f64, vy: f64) -> (f64, f64) {
        match self {
            Self::VelocityRotation { coefficient } => (coefficient * vy, -coefficient * vx),
        }
    }
}

/// Time derivative of a state vector: `(vx, vy, ax, ay)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Derivative {
    pub dx: f64,
    pub dy: f64,
    pub dvx: f64,
    pub dvy: f64,
}

impl Derivative {
    /// Euler sub-step: advance `state` by `h` along this derivative.
    ///
    /// Used by the Runge-Kutta stages; not an integration method on its own.
    #[must_use]
    pub fn apply(&self, state: &StateVector, h: f64) -> StateVector {
        let (x, y, vx, vy) = state.as_components();
        StateVector::from_components(
            x + self.dx * h,
            y + self.dy * h,
            vx + self.dvx * h,
            vy + self.dvy * h,
        )
    }
}

/// The gravitational vector field for one body.
#[derive(Debug, Clone, Copy)]
pub struct EquationOfMotion {
    /// Gravitational parameter `μ = G·M` of the fixed central mass (m³/s²).
    mu: f64,
    /// Optional perturbation term for this body.
    perturbation: Option<Perturbation>,
}

impl EquationOfMotion {
    /// Create the vector field for a body.
    #[must_use]
    pub const fn new(mu: f64, perturbation: Option<Perturbation>) -> Self {
        Self { mu, perturbation }
    }

    /// Gravitational parameter.
    #[must_use]
    pub const fn mu(&self) -> f64 {
        self.mu
    }

    /// Evaluate the derivative at time `t`.
    ///
    /// The field is autonomous; `t` is carried only for fault reporting.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::DegenerateRadius`] when the orbital radius is
    /// zero or non-finite, a collision/escape condition outside the
    /// model's validity, surfaced instead of silently propagating NaN.
    pub fn derivative(&self, t: f64, state: &StateVector) -> OrreryResult<Derivative> {
        let (x, y, vx, vy) = state.as_components();
        let radius = (x * x + y * y).sqrt();

        if !radius.is_finite() || radius <= 0.0 {
            return Err(OrreryError::DegenerateRadius { radius, time: t });
        }

        let r3 = radius * radius * radius;
        let mut ax = -self.mu * x / r3;
        let mut ay = -self.mu * y / r3;

        if let Some(perturbation) = self.perturbation {
            let (px, py) = perturbation.contribution(vx, vy);
            ax += px;
            ay += py;
        }

        Ok(Derivative {
            dx: vx,
            dy: vy,
            dvx: ax,
            dvy: ay,
        })
    }
}
