//! Aggregated trajectory output.
//!
//! The [`TrajectoryDataset`] is the core's sole contract with the
//! rendering/animation collaborator: one ordered sample sequence per body
//! plus the shared time grid that produced them. It is built once per run
//! and read-only afterwards; for any time index every body's position and
//! velocity are retrievable in O(1).

use crate::error::{OrreryError, OrreryResult};
use crate::grid::TimeGrid;
use crate::state::StateVector;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered sample sequence for one body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Trajectory {
    samples: Vec<StateVector>,
}

impl Trajectory {
    /// Create a trajectory from its samples.
    #[must_use]
    pub fn new(samples: Vec<StateVector>) -> Self {
        Self { samples }
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Check if the trajectory is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Sample at a grid index.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::SampleOutOfRange`] for an index beyond the
    /// grid, never a wrapped or clamped value.
    pub fn sample(&self, index: usize) -> OrreryResult<&StateVector> {
        self.samples.get(index).ok_or(OrreryError::SampleOutOfRange {
            index,
            len: self.samples.len(),
        })
    }

    /// All samples in grid order.
    #[must_use]
    pub fn samples(&self) -> &[StateVector] {
        &self.samples
    }
}

/// Recorded cause of a failed per-body integration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FaultRecord {
    /// Human-readable fault description, including step and time.
    pub message: String,
}

/// The full integration output: per-body trajectories over a shared grid.
///
/// Faulted bodies are omitted from `bodies` and recorded in `faults`
/// (resilience policy: isolate; one body's fault never corrupts the
/// others). Energy-drift warning counts from the conservation guard are
/// kept per body for quality inspection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrajectoryDataset {
    grid: TimeGrid,
    bodies: IndexMap<String, Trajectory>,
    faults: IndexMap<String, FaultRecord>,
    warnings: IndexMap<String, usize>,
}

impl TrajectoryDataset {
    /// Create an empty dataset over a grid.
    #[must_use]
    pub fn new(grid: TimeGrid) -> Self {
        Self {
            grid,
            bodies: IndexMap::new(),
            faults: IndexMap::new(),
            warnings: IndexMap::new(),
        }
    }

    /// The shared time grid.
    #[must_use]
    pub const fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    /// Insert a body's trajectory.
    ///
    /// # Errors
    ///
    /// Rejects trajectories whose length differs from the grid length:
    /// every stored sequence is dense over the shared grid.
    pub fn insert(&mut self, name: String, trajectory: Trajectory) -> OrreryResult<()> {
        if trajectory.len() != self.grid.len() {
            return Err(OrreryError::config(format!(
                "trajectory for '{}' has {} samples, grid has {}",
                name,
                trajectory.len(),
                self.grid.len()
            )));
        }
        self.bodies.insert(name, trajectory);
        Ok(())
    }

    /// Record an integration fault for a body.
    pub fn record_fault(&mut self, name: String, fault: &OrreryError) {
        self.faults.insert(
            name,
            FaultRecord {
                message: fault.to_string(),
            },
        );
    }

    /// Record the guard's energy-warning count for a body.
    pub fn record_warnings(&mut self, name: &str, count: usize) {
        if count > 0 {
            self.warnings.insert(name.to_string(), count);
        }
    }

    /// Number of successfully integrated bodies.
    #[must_use]
    pub fn num_bodies(&self) -> usize {
        self.bodies.len()
    }

    /// Check that no body faulted.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.faults.is_empty()
    }

    /// Iterate over `(name, trajectory)` in element-table order.
    pub fn bodies(&self) -> impl Iterator<Item = (&str, &Trajectory)> {
        self.bodies.iter().map(|(name, t)| (name.as_str(), t))
    }

    /// Recorded faults, keyed by body name.
    #[must_use]
    pub const fn faults(&self) -> &IndexMap<String, FaultRecord> {
        &self.faults
    }

    /// Recorded warning counts, keyed by body name.
    #[must_use]
    pub const fn warnings(&self) -> &IndexMap<String, usize> {
        &self.warnings
    }

    /// Trajectory of one body.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::UnknownBody`] for names not in the dataset
    /// (including faulted bodies, which are omitted).
    pub fn body(&self, name: &str) -> OrreryResult<&Trajectory> {
        self.bodies.get(name).ok_or_else(|| OrreryError::UnknownBody {
            name: name.to_string(),
        })
    }

    /// Sample of one body at a grid index, in O(1).
    ///
    /// # Errors
    ///
    /// Unknown body or out-of-range index.
    pub fn sample(&self, name: &str, index: usize) -> OrreryResult<&StateVector> {
        self.body(name)?.sample(index)
    }

    /// Every body's state at a grid index, in table order.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::SampleOutOfRange`] for an index beyond the
    /// grid.
    pub fn snapshot(&self, index: usize) -> OrreryResult<Vec<(&str, &StateVector)>> {
        if index >= self.grid.len() {
            return Err(OrreryError::SampleOutOfRange {
                index,
                len: self.grid.len(),
            });
        }
        self.bodies
            .iter()
            .map(|(name, t)| Ok((name.as_str(), t.sample(index)?)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn constant_trajectory(len: usize, x: f64) -> Trajectory {
        Trajectory::new(vec![StateVector::from_components(x, 0.0, 0.0, 1.0); len])
    }

    fn small_grid() -> TimeGrid {
        TimeGrid::new(1.0, 4).expect("grid")
    }

    #[test]
    fn test_insert_enforces_grid_length() {
        let mut dataset = TrajectoryDataset::new(small_grid());

        assert!(dataset
            .insert("Earth".to_string(), constant_trajectory(4, 1.0))
            .is_ok());
        assert!(dataset
            .insert("Mars".to_string(), constant_trajectory(3, 1.0))
            .is_err());
        assert_eq!(dataset.num_bodies(), 1);
    }

    #[test]
    fn test_sample_and_snapshot_bounds() {
        let mut dataset = TrajectoryDataset::new(small_grid());
        dataset
            .insert("Earth".to_string(), constant_trajectory(4, 1.0))
            .expect("insert");

        assert!(dataset.sample("Earth", 3).is_ok());
        assert!(matches!(
            dataset.sample("Earth", 4),
            Err(OrreryError::SampleOutOfRange { index: 4, len: 4 })
        ));
        assert!(matches!(
            dataset.sample("Vulcan", 0),
            Err(OrreryError::UnknownBody { .. })
        ));

        assert_eq!(dataset.snapshot(0).expect("snapshot").len(), 1);
        assert!(dataset.snapshot(4).is_err());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut dataset = TrajectoryDataset::new(small_grid());
        for name in ["Mercury", "Venus", "Earth"] {
            dataset
                .insert(name.to_string(), constant_trajectory(4, 1.0))
                .expect("insert");
        }

        let names: Vec<&str> = dataset.bodies().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Mercury", "Venus", "Earth"]);
    }

    #[test]
    fn test_fault_recording() {
        let mut dataset = TrajectoryDataset::new(small_grid());
        assert!(dataset.is_complete());

        let fault = OrreryError::NonFiniteState { step: 2, time: 2.0 };
        dataset.record_fault("Icarus".to_string(), &fault);

        assert!(!dataset.is_complete());
        assert!(dataset.faults().contains_key("Icarus"));
        assert!(dataset.body("Icarus").is_err());
    }

    #[test]
    fn test_warning_recording_skips_zero() {
        let mut dataset = TrajectoryDataset::new(small_grid());
        dataset.record_warnings("Earth", 0);
        dataset.record_warnings("Mercury", 3);

        assert!(!dataset.warnings().contains_key("Earth"));
        assert_eq!(dataset.warnings().get("Mercury"), Some(&3));
    }
}
