//! Conservation monitoring with graceful degradation.
//!
//! The guard watches a body's samples for the two failure signals the
//! model can produce: non-finite values (fatal: stop and surface) and
//! drift of the specific orbital energy beyond tolerance (a quality
//! warning, counted but never aborting, since the fixed-step Runge-Kutta
//! method is not symplectic and accumulates small secular drift).
//!
//! The velocity-rotation perturbation does no work, so energy remains a
//! valid oracle for perturbed bodies as well.

use crate::state::StateVector;
use serde::{Deserialize, Serialize};

/// Guard configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardConfig {
    /// Check for non-finite values.
    pub check_finite: bool,
    /// Check specific-orbital-energy conservation.
    pub check_energy: bool,
    /// Relative energy drift tolerance.
    pub energy_tolerance: f64,
}

impl Default for GuardConfig {
    fn default() -> Self {
        Self {
            check_finite: true,
            check_energy: true,
            energy_tolerance: 1e-4,
        }
    }
}

/// Guard response for one checked sample.
#[derive(Debug, Clone, PartialEq)]
pub enum GuardResponse {
    /// All checks passed.
    Continue,
    /// Energy drift beyond tolerance; integration continues.
    Warning {
        /// Measured relative drift.
        drift: f64,
        /// Configured tolerance.
        tolerance: f64,
    },
    /// Non-finite value; the trajectory is invalid from here on.
    Halt,
}

impl GuardResponse {
    /// Check if this response allows continuation.
    #[must_use]
    pub const fn can_continue(&self) -> bool {
        matches!(self, Self::Continue | Self::Warning { .. })
    }
}

/// Per-body conservation guard.
#[derive(Debug, Clone)]
pub struct ConservationGuard {
    config: GuardConfig,
    mu: f64,
    reference_energy: Option<f64>,
    warning_count: usize,
}

impl ConservationGuard {
    /// Create a new guard for a body orbiting a central mass with
    /// gravitational parameter `mu`.
    #[must_use]
    pub const fn new(config: GuardConfig, mu: f64) -> Self {
        Self {
            config,
            mu,
            reference_energy: None,
            warning_count: 0,
        }
    }

    /// Record the reference energy from the initial sample.
    pub fn initialize(&mut self, initial: &StateVector) {
        self.reference_energy = Some(initial.specific_orbital_energy(self.mu));
        self.warning_count = 0;
    }

    /// Number of energy warnings recorded so far.
    #[must_use]
    pub const fn warning_count(&self) -> usize {
        self.warning_count
    }

    /// Check one sample.
    pub fn check(&mut self, sample: &StateVector) -> GuardResponse {
        if self.config.check_finite && !sample.is_finite() {
            return GuardResponse::Halt;
        }

        if self.config.check_energy {
            if let Some(reference) = self.reference_energy {
                let current = sample.specific_orbital_energy(self.mu);
                let drift = if reference.abs() > f64::EPSILON {
                    (current - reference).abs() / reference.abs()
                } else {
                    (current - reference).abs()
                };

                if drift > self.config.energy_tolerance {
                    self.warning_count += 1;
                    return GuardResponse::Warning {
                        drift,
                        tolerance: self.config.energy_tolerance,
                    };
                }
            }
        }

        GuardResponse::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{G, AU, SOLAR_MASS};

    const MU: f64 = G * SOLAR_MASS;

    fn circular_sample() -> StateVector {
        let v = (MU / AU).sqrt();
        StateVector::from_components(AU, 0.0, 0.0, v)
    }

    #[test]
    fn test_unchanged_state_continues() {
        let mut guard = ConservationGuard::new(GuardConfig::default(), MU);
        let sample = circular_sample();
        guard.initialize(&sample);

        assert_eq!(guard.check(&sample), GuardResponse::Continue);
        assert_eq!(guard.warning_count(), 0);
    }

    #[test]
    fn test_energy_drift_warns_but_continues() {
        let mut guard = ConservationGuard::new(GuardConfig::default(), MU);
        guard.initialize(&circular_sample());

        // Same radius, 1% faster: energy visibly off the reference
        let v = (MU / AU).sqrt() * 1.01;
        let drifted = StateVector::from_components(AU, 0.0, 0.0, v);

        let response = guard.check(&drifted);
        assert!(matches!(response, GuardResponse::Warning { .. }));
        assert!(response.can_continue());
        assert_eq!(guard.warning_count(), 1);
    }

    #[test]
    fn test_non_finite_halts() {
        let mut guard = ConservationGuard::new(GuardConfig::default(), MU);
        guard.initialize(&circular_sample());

        let bad = StateVector::from_components(f64::NAN, 0.0, 0.0, 0.0);
        let response = guard.check(&bad);
        assert_eq!(response, GuardResponse::Halt);
        assert!(!response.can_continue());
    }

    #[test]
    fn test_disabled_checks() {
        let config = GuardConfig {
            check_finite: false,
            check_energy: false,
            energy_tolerance: 1e-12,
        };
        let mut guard = ConservationGuard::new(config, MU);
        guard.initialize(&circular_sample());

        let bad = StateVector::from_components(f64::NAN, 0.0, 0.0, 0.0);
        assert_eq!(guard.check(&bad), GuardResponse::Continue);
    }
}
