//! Fixed-step trajectory integration.
//!
//! Classical 4th-order Runge-Kutta over the shared time grid. The method
//! is deliberately fixed-step: downstream consumers index samples by grid
//! position, so the integrator must produce a value at exactly every
//! requested grid time (dense output), and identical inputs must produce
//! bit-identical sample sequences.
//!
//! # References
//!
//! [8] Hairer, Lubich, Wanner, "Geometric Numerical Integration," 2006.

use crate::dynamics::{Derivative, EquationOfMotion};
use crate::error::{OrreryError, OrreryResult};
use crate::grid::TimeGrid;
use crate::state::StateVector;

/// Classical 4th-order Runge-Kutta integrator.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rk4Integrator;

impl Rk4Integrator {
    /// Create a new integrator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Get integrator order.
    #[must_use]
    pub const fn order(&self) -> u32 {
        4
    }

    /// Advance `state` by one step of size `dt` starting at time `t`.
    ///
    /// # Errors
    ///
    /// Propagates degenerate-radius faults from any of the four stages and
    /// rejects a non-finite result state.
    pub fn step(
        &self,
        eom: &EquationOfMotion,
        t: f64,
        state: &StateVector,
        dt: f64,
    ) -> OrreryResult<StateVector> {
        let half = 0.5 * dt;

        let k1 = eom.derivative(t, state)?;
        let k2 = eom.derivative(t + half, &k1.apply(state, half))?;
        let k3 = eom.derivative(t + half, &k2.apply(state, half))?;
        let k4 = eom.derivative(t + dt, &k3.apply(state, dt))?;

        let blended = Derivative {
            dx: (k1.dx + 2.0 * k2.dx + 2.0 * k3.dx + k4.dx) / 6.0,
            dy: (k1.dy + 2.0 * k2.dy + 2.0 * k3.dy + k4.dy) / 6.0,
            dvx: (k1.dvx + 2.0 * k2.dvx + 2.0 * k3.dvx + k4.dvx) / 6.0,
            dvy: (k1.dvy + 2.0 * k2.dvy + 2.0 * k3.dvy + k4.dvy) / 6.0,
        };

        Ok(blended.apply(state, dt))
    }

    /// Produce the state at every grid point, starting from `initial`.
    ///
    /// The first sample is the initial state verbatim; the result always
    /// has exactly `grid.len()` entries. Integration is deterministic:
    /// no randomness, so identical inputs give identical output bits.
    ///
    /// # Errors
    ///
    /// Fails (never silently) if the equation of motion faults or any
    /// produced state contains a non-finite number, with the offending
    /// grid step attached.
    pub fn propagate(
        &self,
        eom: &EquationOfMotion,
        initial: &StateVector,
        grid: &TimeGrid,
    ) -> OrreryResult<Vec<StateVector>> {
        if !initial.is_finite() {
            return Err(OrreryError::NonFiniteState { step: 0, time: 0.0 });
        }

        let dt = grid.step();
        let mut samples = Vec::with_capacity(grid.len());
        samples.push(*initial);

        for i in 1..grid.len() {
            let t = grid.time_at(i - 1)?;
            let next = self.step(eom, t, &samples[i - 1], dt)?;
            if !next.is_finite() {
                return Err(OrreryError::NonFiniteState {
                    step: i,
                    time: grid.time_at(i)?,
                });
            }
            samples.push(next);
        }

        Ok(samples)
    }
}
