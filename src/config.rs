//! Simulation configuration with YAML schema and validation.
//!
//! Mistake-proofing happens in three layers: type-safe structs, schema
//! validation via serde (`deny_unknown_fields`), and a semantic pass for
//! constraints the schema cannot express. All failures are fatal and
//! surface before any integration starts.
//!
//! Defaults reproduce the reference scenario: solar central mass, a
//! 1e5-second step spanning one Neptune period, and the velocity-rotation
//! perturbation with `k = 1e-7` on Mercury. The perturbation coefficient
//! is an empirical knob tuned for visible precession; it is configuration,
//! not a physical constant.

use crate::error::{OrreryError, OrreryResult};
use crate::guard::GuardConfig;
use crate::units::{G, SOLAR_MASS};
use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

fn default_schema_version() -> String {
    "1.0".to_string()
}

fn default_central_mass() -> f64 {
    SOLAR_MASS
}

fn default_time_step() -> f64 {
    1e5
}

fn default_span_periods() -> f64 {
    1.0
}

fn default_perturbations() -> Vec<PerturbationConfig> {
    vec![PerturbationConfig {
        body: "Mercury".to_string(),
        coefficient: 1e-7,
    }]
}

/// Top-level simulation configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct SimConfig {
    /// Schema version for forward compatibility.
    #[validate(length(min = 1))]
    #[serde(default = "default_schema_version")]
    pub schema_version: String,

    /// Central body mass (kg). The Sun stays fixed at the origin.
    #[serde(default = "default_central_mass")]
    pub central_mass: f64,

    /// Time grid parameters.
    #[validate(nested)]
    #[serde(default)]
    pub grid: GridConfig,

    /// Per-body velocity-rotation perturbations.
    #[serde(default = "default_perturbations")]
    pub perturbations: Vec<PerturbationConfig>,

    /// How per-body integration faults are handled.
    #[serde(default)]
    pub fault_policy: FaultPolicy,

    /// Conservation guard settings.
    #[serde(default)]
    pub guard: GuardConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            central_mass: default_central_mass(),
            grid: GridConfig::default(),
            perturbations: default_perturbations(),
            fault_policy: FaultPolicy::default(),
            guard: GuardConfig::default(),
        }
    }
}

impl SimConfig {
    /// Load configuration from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read, YAML parsing fails, or
    /// validation fails.
    pub fn load<P: AsRef<Path>>(path: P) -> OrreryResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns error if parsing or validation fails.
    pub fn from_yaml(yaml: &str) -> OrreryResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate_all()?;
        Ok(config)
    }

    /// Create a builder for programmatic construction.
    #[must_use]
    pub fn builder() -> SimConfigBuilder {
        SimConfigBuilder::default()
    }

    /// Gravitational parameter `μ = G·M` (m³/s²).
    #[must_use]
    pub fn mu(&self) -> f64 {
        G * self.central_mass
    }

    /// Run schema validation plus the semantic pass.
    ///
    /// # Errors
    ///
    /// Configuration-class errors only; nothing here is recoverable.
    pub fn validate_all(&self) -> OrreryResult<()> {
        self.validate()?;
        self.validate_semantic()
    }

    /// Validate semantic constraints beyond the schema.
    fn validate_semantic(&self) -> OrreryResult<()> {
        if !self.central_mass.is_finite() || self.central_mass <= 0.0 {
            return Err(OrreryError::config(format!(
                "central mass must be positive, got {:e}",
                self.central_mass
            )));
        }
        if !self.grid.dt.is_finite() || self.grid.dt <= 0.0 {
            return Err(OrreryError::config(format!(
                "time step must be positive, got {:e}",
                self.grid.dt
            )));
        }
        if !self.grid.span_periods.is_finite() || self.grid.span_periods <= 0.0 {
            return Err(OrreryError::config(format!(
                "span must be a positive multiple of the longest period, got {}",
                self.grid.span_periods
            )));
        }
        for p in &self.perturbations {
            if p.body.is_empty() {
                return Err(OrreryError::config("perturbation body name is empty"));
            }
            if !p.coefficient.is_finite() {
                return Err(OrreryError::config(format!(
                    "perturbation coefficient for '{}' must be finite",
                    p.body
                )));
            }
        }
        Ok(())
    }
}

/// Time grid parameters.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(deny_unknown_fields)]
pub struct GridConfig {
    /// Fixed sampling interval Δt (s).
    #[serde(default = "default_time_step")]
    pub dt: f64,

    /// Grid span as a multiple of the longest orbital period in the table.
    #[serde(default = "default_span_periods")]
    pub span_periods: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            dt: default_time_step(),
            span_periods: default_span_periods(),
        }
    }
}

/// One per-body perturbation entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PerturbationConfig {
    /// Body the perturbation applies to (must exist in the element table).
    pub body: String,
    /// Velocity-rotation coefficient `k` (1/s).
    pub coefficient: f64,
}

/// Handling of per-body integration faults.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FaultPolicy {
    /// Record the fault, omit the body, continue with the rest.
    #[default]
    Isolate,
    /// Propagate the first fault and abort the whole run.
    Abort,
}

/// Configuration builder for programmatic construction.
#[derive(Debug, Default)]
pub struct SimConfigBuilder {
    central_mass: Option<f64>,
    dt: Option<f64>,
    span_periods: Option<f64>,
    perturbations: Option<Vec<PerturbationConfig>>,
    fault_policy: Option<FaultPolicy>,
    guard: Option<GuardConfig>,
}

impl SimConfigBuilder {
    /// Set the central body mass (kg).
    #[must_use]
    pub const fn central_mass(mut self, mass: f64) -> Self {
        self.central_mass = Some(mass);
        self
    }

    /// Set the sampling interval (s).
    #[must_use]
    pub const fn time_step(mut self, dt: f64) -> Self {
        self.dt = Some(dt);
        self
    }

    /// Set the grid span as a multiple of the longest period.
    #[must_use]
    pub const fn span_periods(mut self, periods: f64) -> Self {
        self.span_periods = Some(periods);
        self
    }

    /// Replace the perturbation list with a single entry.
    #[must_use]
    pub fn perturbation(mut self, body: impl Into<String>, coefficient: f64) -> Self {
        self.perturbations = Some(vec![PerturbationConfig {
            body: body.into(),
            coefficient,
        }]);
        self
    }

    /// Remove all perturbations.
    #[must_use]
    pub fn no_perturbations(mut self) -> Self {
        self.perturbations = Some(Vec::new());
        self
    }

    /// Set the fault policy.
    #[must_use]
    pub const fn fault_policy(mut self, policy: FaultPolicy) -> Self {
        self.fault_policy = Some(policy);
        self
    }

    /// Set the guard configuration.
    #[must_use]
    pub fn guard(mut self, guard: GuardConfig) -> Self {
        self.guard = Some(guard);
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> SimConfig {
        let mut config = SimConfig::default();
        if let Some(mass) = self.central_mass {
            config.central_mass = mass;
        }
        if let Some(dt) = self.dt {
            config.grid.dt = dt;
        }
        if let Some(periods) = self.span_periods {
            config.grid.span_periods = periods;
        }
        if let Some(perturbations) = self.perturbations {
            config.perturbations = perturbations;
        }
        if let Some(policy) = self.fault_policy {
            config.fault_policy = policy;
        }
        if let Some(guard) = self.guard {
            config.guard = guard;
        }
        config
    }
}
