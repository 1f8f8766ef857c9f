//! Shared fixed-step time grid.
//!
//! All bodies are sampled on the same strictly increasing grid
//! `t_i = i·Δt`, so cross-body comparisons at a given sample index are
//! time-aligned. The grid is half-open over its configured span: the last
//! sample time is strictly below `span`, matching the sampling of the
//! upstream animation pipeline this engine feeds.

use crate::error::{OrreryError, OrreryResult};
use serde::{Deserialize, Serialize};

/// Fixed-step sequence of sample times `t_0 = 0, Δt, 2Δt, …`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeGrid {
    /// Step size Δt (s).
    dt: f64,
    /// Number of grid points.
    len: usize,
}

impl TimeGrid {
    /// Create a grid with an explicit number of points.
    ///
    /// # Errors
    ///
    /// Rejects non-positive or non-finite `dt` and grids shorter than two
    /// points (nothing to integrate).
    pub fn new(dt: f64, len: usize) -> OrreryResult<Self> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(OrreryError::config(format!(
                "time step must be positive and finite, got {dt:e}"
            )));
        }
        if len < 2 {
            return Err(OrreryError::config(format!(
                "time grid needs at least 2 points, got {len}"
            )));
        }
        Ok(Self { dt, len })
    }

    /// Create a grid covering `[0, span)` with step `dt`.
    ///
    /// # Errors
    ///
    /// Rejects non-positive or non-finite `dt`/`span`, and spans shorter
    /// than one step.
    pub fn from_span(dt: f64, span: f64) -> OrreryResult<Self> {
        if !span.is_finite() || span <= 0.0 {
            return Err(OrreryError::config(format!(
                "time span must be positive and finite, got {span:e}"
            )));
        }
        if !dt.is_finite() || dt <= 0.0 {
            return Err(OrreryError::config(format!(
                "time step must be positive and finite, got {dt:e}"
            )));
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let len = (span / dt).ceil() as usize;
        Self::new(dt, len.max(2))
    }

    /// Number of grid points.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Check if the grid is empty (never true for a constructed grid).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Step size Δt (s).
    #[must_use]
    pub const fn step(&self) -> f64 {
        self.dt
    }

    /// Total half-open span `len·Δt` (s).
    #[must_use]
    pub fn span(&self) -> f64 {
        self.dt * self.len as f64
    }

    /// Sample time at grid index `i`.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::SampleOutOfRange`] for `i ≥ len`, never a
    /// wrapped or clamped value.
    pub fn time_at(&self, index: usize) -> OrreryResult<f64> {
        if index >= self.len {
            return Err(OrreryError::SampleOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(index as f64 * self.dt)
    }

    /// Iterate over all sample times in order.
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len).map(move |i| i as f64 * self.dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = TimeGrid::new(1e5, 100).expect("grid");
        assert_eq!(grid.len(), 100);
        assert_eq!(grid.step(), 1e5);
        assert_eq!(grid.span(), 1e7);
    }

    #[test]
    fn test_grid_rejects_bad_step() {
        assert!(TimeGrid::new(0.0, 10).is_err());
        assert!(TimeGrid::new(-1.0, 10).is_err());
        assert!(TimeGrid::new(f64::NAN, 10).is_err());
        assert!(TimeGrid::new(f64::INFINITY, 10).is_err());
    }

    #[test]
    fn test_grid_rejects_short_grids() {
        assert!(TimeGrid::new(1.0, 0).is_err());
        assert!(TimeGrid::new(1.0, 1).is_err());
        assert!(TimeGrid::new(1.0, 2).is_ok());
    }

    #[test]
    fn test_from_span_half_open() {
        // span = 10 steps exactly
        let grid = TimeGrid::from_span(1e5, 1e6).expect("grid");
        assert_eq!(grid.len(), 10);

        // Partial step rounds up
        let grid = TimeGrid::from_span(1e5, 1.05e6).expect("grid");
        assert_eq!(grid.len(), 11);

        // Last sample time stays below the span
        let last = grid.time_at(grid.len() - 1).expect("last");
        assert!(last < 1.05e6);
    }

    #[test]
    fn test_from_span_rejects_bad_span() {
        assert!(TimeGrid::from_span(1.0, 0.0).is_err());
        assert!(TimeGrid::from_span(1.0, -5.0).is_err());
        assert!(TimeGrid::from_span(1.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_time_at_bounds() {
        let grid = TimeGrid::new(2.0, 5).expect("grid");
        assert_eq!(grid.time_at(0).expect("t0"), 0.0);
        assert_eq!(grid.time_at(4).expect("t4"), 8.0);

        let err = grid.time_at(5).expect_err("out of range");
        assert!(matches!(
            err,
            OrreryError::SampleOutOfRange { index: 5, len: 5 }
        ));
    }

    #[test]
    fn test_times_iterator() {
        let grid = TimeGrid::new(0.5, 4).expect("grid");
        let times: Vec<f64> = grid.times().collect();
        assert_eq!(times, vec![0.0, 0.5, 1.0, 1.5]);
    }
}
