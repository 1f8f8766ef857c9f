//! # orrery
//!
//! Planar trajectory engine for the solar system's planets.
//!
//! Each planet is integrated independently under a fixed central mass
//! (no planet-planet interaction), on a shared fixed-step time grid, with
//! an optional velocity-rotation perturbation that reproduces Mercury's
//! perihelion precession as a configurable empirical effect. The output
//! is a [`TrajectoryDataset`](dataset::TrajectoryDataset): one dense
//! sample sequence per body plus the grid, consumed by the rendering and
//! animation layer.
//!
//! ## Example
//!
//! ```rust
//! use orrery::prelude::*;
//!
//! let config = SimConfig::builder()
//!     .time_step(1e5)
//!     .span_periods(0.01)
//!     .build();
//! let table = PlanetTable::solar_system();
//!
//! let dataset = orrery::generate_dataset(&config, &table).expect("generation failed");
//! assert_eq!(dataset.num_bodies(), 8);
//!
//! let earth_start = dataset.sample("Earth", 0).expect("sample");
//! assert!(earth_start.radius() > 0.0);
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(
    clippy::module_name_repetitions,
    clippy::similar_names,
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::suboptimal_flops,  // Numerical code choices are intentional
    clippy::imprecise_flops,
    clippy::missing_const_for_fn,  // Many functions can't be const in stable Rust
)]

pub mod analysis;
pub mod config;
pub mod dataset;
pub mod dynamics;
pub mod elements;
pub mod error;
pub mod grid;
pub mod guard;
pub mod integrator;
pub mod state;
pub mod units;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::{FaultPolicy, SimConfig, SimConfigBuilder};
    pub use crate::dataset::{Trajectory, TrajectoryDataset};
    pub use crate::dynamics::{EquationOfMotion, Perturbation};
    pub use crate::elements::{OrbitalElements, PlanetTable};
    pub use crate::error::{OrreryError, OrreryResult};
    pub use crate::grid::TimeGrid;
    pub use crate::guard::{ConservationGuard, GuardConfig};
    pub use crate::integrator::Rk4Integrator;
    pub use crate::state::StateVector;
    pub use crate::units::{Position2D, Velocity2D, AU, G, SOLAR_MASS};
}

/// Re-export for public API.
pub use error::{OrreryError, OrreryResult};

use config::{FaultPolicy, SimConfig};
use dataset::{Trajectory, TrajectoryDataset};
use dynamics::{EquationOfMotion, Perturbation};
use elements::PlanetTable;
use grid::TimeGrid;
use guard::ConservationGuard;
use indexmap::IndexMap;
use integrator::Rk4Integrator;

/// Integrate every body in the table over a shared time grid.
///
/// Configuration and element validation run first and abort the whole run
/// on failure. The grid spans `span_periods` times the longest orbital
/// period, so the slowest body completes the configured number of
/// revolutions. Bodies integrate independently: they share nothing but
/// the read-only grid and constants, so the sequential fan-out below could
/// run one task per body with no change to observable results.
///
/// Per-body faults follow the configured policy: `Isolate` records the
/// fault and continues with the remaining bodies, `Abort` propagates the
/// first fault.
///
/// # Errors
///
/// Configuration-class errors always; integration faults only under
/// [`FaultPolicy::Abort`].
pub fn generate_dataset(config: &SimConfig, table: &PlanetTable) -> OrreryResult<TrajectoryDataset> {
    config.validate_all()?;
    table.validate()?;

    let mu = config.mu();

    let mut perturbations: IndexMap<String, Perturbation> = IndexMap::new();
    for entry in &config.perturbations {
        if table.get(&entry.body).is_none() {
            return Err(OrreryError::UnknownBody {
                name: entry.body.clone(),
            });
        }
        perturbations.insert(
            entry.body.clone(),
            Perturbation::VelocityRotation {
                coefficient: entry.coefficient,
            },
        );
    }

    let span = config.grid.span_periods * table.longest_period(mu);
    let grid = TimeGrid::from_span(config.grid.dt, span)?;
    let integrator = Rk4Integrator::new();
    let mut dataset = TrajectoryDataset::new(grid.clone());

    for body in table.iter() {
        let eom = EquationOfMotion::new(mu, perturbations.get(&body.name).copied());
        let initial = body.perihelion_state(mu);

        match integrator.propagate(&eom, &initial, &grid) {
            Ok(samples) => {
                let mut guard = ConservationGuard::new(config.guard.clone(), mu);
                if let Some(first) = samples.first() {
                    guard.initialize(first);
                }
                for sample in samples.iter().skip(1) {
                    let _ = guard.check(sample);
                }
                dataset.record_warnings(&body.name, guard.warning_count());
                dataset.insert(body.name.clone(), Trajectory::new(samples))?;
            }
            Err(fault)
                if fault.is_integration_fault() && config.fault_policy == FaultPolicy::Isolate =>
            {
                dataset.record_fault(body.name.clone(), &fault);
            }
            Err(fault) => return Err(fault),
        }
    }

    Ok(dataset)
}
