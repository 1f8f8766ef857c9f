//! Trajectory analysis: perihelion passages and conservation metrics.
//!
//! The two-body problem has no closed-form time-domain trajectory to
//! compare against, so correctness is read off invariants instead:
//! specific orbital energy must stay constant, and for a perturbed body
//! the perihelion direction must drift secularly, not randomly. This
//! module extracts those observables from a finished trajectory.

use crate::dataset::Trajectory;
use crate::error::OrreryResult;
use crate::grid::TimeGrid;
use crate::units::SECONDS_PER_YEAR;
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

/// One detected perihelion passage (local radial minimum).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PerihelionPassage {
    /// Grid index of the passage.
    pub index: usize,
    /// Sample time of the passage (s).
    pub time: f64,
    /// Orbital radius at the passage (m).
    pub radius: f64,
    /// Polar angle of the position vector at the passage (radians).
    pub angle: f64,
}

/// Detect perihelion passages as interior local minima of the radius.
///
/// The initial sample is at perihelion by construction but is not an
/// interior minimum, so the first detected passage is the first *return*
/// to perihelion.
///
/// # Errors
///
/// Propagates grid bounds errors (cannot occur for a trajectory produced
/// over the same grid).
pub fn perihelion_passages(
    trajectory: &Trajectory,
    grid: &TimeGrid,
) -> OrreryResult<Vec<PerihelionPassage>> {
    let radii: Vec<f64> = trajectory.samples().iter().map(|s| s.radius()).collect();
    let mut passages = Vec::new();

    for i in 1..radii.len().saturating_sub(1) {
        if radii[i] < radii[i - 1] && radii[i] <= radii[i + 1] {
            passages.push(PerihelionPassage {
                index: i,
                time: grid.time_at(i)?,
                radius: radii[i],
                angle: trajectory.sample(i)?.position_angle(),
            });
        }
    }

    Ok(passages)
}

/// Wrap an angle difference into `(-π, π]`.
#[must_use]
pub fn wrap_angle(delta: f64) -> f64 {
    let mut wrapped = delta % TAU;
    if wrapped > PI {
        wrapped -= TAU;
    } else if wrapped <= -PI {
        wrapped += TAU;
    }
    wrapped
}

/// Successive perihelion-angle differences, wrapped into `(-π, π]`.
///
/// A secular precession shows up as deltas of one consistent sign; an
/// unperturbed orbit gives deltas at the numerical noise floor.
#[must_use]
pub fn precession_deltas(passages: &[PerihelionPassage]) -> Vec<f64> {
    passages
        .windows(2)
        .map(|pair| wrap_angle(pair[1].angle - pair[0].angle))
        .collect()
}

/// Maximum relative drift of the specific orbital energy across a
/// trajectory; the primary correctness oracle.
#[must_use]
pub fn max_energy_drift(trajectory: &Trajectory, mu: f64) -> f64 {
    let samples = trajectory.samples();
    let Some(first) = samples.first() else {
        return 0.0;
    };
    let reference = first.specific_orbital_energy(mu);

    samples
        .iter()
        .map(|s| {
            let drift = (s.specific_orbital_energy(mu) - reference).abs();
            if reference.abs() > f64::EPSILON {
                drift / reference.abs()
            } else {
                drift
            }
        })
        .fold(0.0, f64::max)
}

/// Maximum relative drift of the specific angular momentum.
///
/// Conserved for unperturbed bodies; the velocity-rotation perturbation
/// changes it within an orbit, so only apply this to unperturbed ones.
#[must_use]
pub fn max_angular_momentum_drift(trajectory: &Trajectory) -> f64 {
    let samples = trajectory.samples();
    let Some(first) = samples.first() else {
        return 0.0;
    };
    let reference = first.specific_angular_momentum();

    samples
        .iter()
        .map(|s| {
            let drift = (s.specific_angular_momentum() - reference).abs();
            if reference.abs() > f64::EPSILON {
                drift / reference.abs()
            } else {
                drift
            }
        })
        .fold(0.0, f64::max)
}

/// Convert a sample time to elapsed years, for display overlays.
#[must_use]
pub fn elapsed_years(seconds: f64) -> f64 {
    seconds / SECONDS_PER_YEAR
}
