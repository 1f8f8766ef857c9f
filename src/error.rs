//! Error types for orrery.
//!
//! All fallible operations return `Result<T, OrreryError>` instead of
//! panicking. The variants fall into three classes:
//!
//! 1. Configuration errors: invalid elements or settings, detected before
//!    any integration starts; always fatal for the whole run.
//! 2. Integration faults: a degenerate or non-finite state produced while
//!    propagating one body; isolated per body under the default fault
//!    policy so they never corrupt other bodies' results.
//! 3. Domain input errors: out-of-range sample indices or unknown body
//!    names on dataset access.

use thiserror::Error;

/// Result type alias for orrery operations.
pub type OrreryResult<T> = Result<T, OrreryError>;

/// Unified error type for all orrery operations.
#[derive(Debug, Error)]
pub enum OrreryError {
    // ===== Integration faults =====
    /// Numerical instability detected (NaN or Inf) while integrating.
    #[error("non-finite state at step {step} (t = {time:.3e} s)")]
    NonFiniteState {
        /// Grid index at which the non-finite value was produced.
        step: usize,
        /// Simulation time of the offending sample.
        time: f64,
    },

    /// Orbital radius collapsed to zero or became non-finite.
    ///
    /// Indicates a collision/escape condition outside the model's validity.
    #[error("degenerate radius {radius:.3e} m at t = {time:.3e} s")]
    DegenerateRadius {
        /// The offending radius value.
        radius: f64,
        /// Simulation time at which it was evaluated.
        time: f64,
    },

    // ===== Configuration errors =====
    /// Invalid orbital elements for a specific body.
    #[error("invalid orbital elements for {body}: {message}")]
    InvalidElements {
        /// Body whose elements failed validation.
        body: String,
        /// Description of the violated constraint.
        message: String,
    },

    /// Invalid configuration parameter.
    #[error("configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    /// YAML parsing error.
    #[error("YAML parsing error: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    /// Validation error.
    #[error("validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    // ===== Domain input errors =====
    /// Sample index outside the time grid's range.
    #[error("sample index {index} out of range (grid length {len})")]
    SampleOutOfRange {
        /// Requested index.
        index: usize,
        /// Length of the grid.
        len: usize,
    },

    /// Body name not present in the dataset or element table.
    #[error("unknown body '{name}'")]
    UnknownBody {
        /// The name that failed to resolve.
        name: String,
    },
}

impl OrreryError {
    /// Create a configuration error with a message.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Check if this error is an integration fault.
    ///
    /// Faults of this class are recoverable at the dataset level: the
    /// faulted body is excluded and recorded, other bodies continue.
    #[must_use]
    pub const fn is_integration_fault(&self) -> bool {
        matches!(
            self,
            Self::NonFiniteState { .. } | Self::DegenerateRadius { .. }
        )
    }

    /// Check if this error is a configuration error (fatal, pre-integration).
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::InvalidElements { .. }
                | Self::Config { .. }
                | Self::YamlParse(_)
                | Self::Validation(_)
                | Self::Io(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integration_fault_detection() {
        let non_finite = OrreryError::NonFiniteState { step: 3, time: 3e5 };
        assert!(non_finite.is_integration_fault());
        assert!(!non_finite.is_configuration());

        let degenerate = OrreryError::DegenerateRadius {
            radius: 0.0,
            time: 0.0,
        };
        assert!(degenerate.is_integration_fault());
    }

    #[test]
    fn test_configuration_detection() {
        let config = OrreryError::config("bad timestep");
        assert!(config.is_configuration());
        assert!(!config.is_integration_fault());

        let elements = OrreryError::InvalidElements {
            body: "Mercury".to_string(),
            message: "eccentricity must be < 1".to_string(),
        };
        assert!(elements.is_configuration());
    }

    #[test]
    fn test_domain_errors_are_neither() {
        let oob = OrreryError::SampleOutOfRange { index: 10, len: 5 };
        assert!(!oob.is_integration_fault());
        assert!(!oob.is_configuration());
    }

    #[test]
    fn test_error_display() {
        let err = OrreryError::SampleOutOfRange { index: 10, len: 5 };
        let msg = err.to_string();
        assert!(msg.contains("10"));
        assert!(msg.contains('5'));
    }
}
