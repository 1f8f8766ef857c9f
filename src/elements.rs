//! Orbital element table and Kepler-derived quantities.
//!
//! Each planet is described by its semi-major axis, eccentricity and mass,
//! plus presentation metadata (color, display scale) that the trajectory
//! core carries through untouched for the rendering collaborator. From the
//! elements and the gravitational parameter this module derives the
//! orbital period (Kepler's third law) and the perihelion state vector
//! used as the initial condition for integration.
//!
//! # References
//!
//! [6] Bate, Mueller, White, "Fundamentals of Astrodynamics," 1971.

use crate::error::{OrreryError, OrreryResult};
use crate::state::StateVector;
use crate::units::{Position2D, Velocity2D};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

fn default_display_scale() -> f64 {
    1.0
}

/// Static physical and orbital parameters of one body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrbitalElements {
    /// Body name (unique within a table).
    pub name: String,
    /// Semi-major axis `a` (m).
    pub semi_major_axis: f64,
    /// Eccentricity `e` (dimensionless, `0 ≤ e < 1`).
    pub eccentricity: f64,
    /// Body mass (kg). Not used by the central-mass equations of motion,
    /// but part of the physical record.
    pub mass: f64,
    /// Display color for the rendering collaborator. Ignored by the core.
    #[serde(default)]
    pub color: String,
    /// Display size factor for the rendering collaborator. Ignored by the core.
    #[serde(default = "default_display_scale")]
    pub display_scale: f64,
}

impl OrbitalElements {
    /// Validate the elements.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::InvalidElements`] when `a ≤ 0`, `e ∉ [0, 1)`,
    /// `mass ≤ 0`, or any of them is non-finite.
    pub fn validate(&self) -> OrreryResult<()> {
        let invalid = |message: String| OrreryError::InvalidElements {
            body: self.name.clone(),
            message,
        };

        if !self.semi_major_axis.is_finite() || self.semi_major_axis <= 0.0 {
            return Err(invalid(format!(
                "semi-major axis must be positive, got {:e}",
                self.semi_major_axis
            )));
        }
        if !self.eccentricity.is_finite() || !(0.0..1.0).contains(&self.eccentricity) {
            return Err(invalid(format!(
                "eccentricity must be in [0, 1), got {}",
                self.eccentricity
            )));
        }
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(invalid(format!("mass must be positive, got {:e}", self.mass)));
        }
        Ok(())
    }

    /// Orbital period `T = 2π·sqrt(a³/μ)` (s), Kepler's third law.
    #[must_use]
    pub fn period(&self, mu: f64) -> f64 {
        TAU * (self.semi_major_axis.powi(3) / mu).sqrt()
    }

    /// Mean circular-equivalent orbital speed `2πa/T` (m/s).
    #[must_use]
    pub fn mean_orbital_speed(&self, mu: f64) -> f64 {
        TAU * self.semi_major_axis / self.period(mu)
    }

    /// Perihelion distance `a(1−e)` (m).
    #[must_use]
    pub fn perihelion_distance(&self) -> f64 {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    /// Speed at perihelion under the vis-viva relation (m/s).
    ///
    /// `v_peri = (2πa/T) · sqrt((1+e)/(1−e))`: the true ellipse speed at
    /// closest approach, so the initial state lies exactly on the nominal
    /// orbit and the first perihelion return lands at `T`.
    #[must_use]
    pub fn perihelion_speed(&self, mu: f64) -> f64 {
        let e = self.eccentricity;
        self.mean_orbital_speed(mu) * ((1.0 + e) / (1.0 - e)).sqrt()
    }

    /// Initial state vector at perihelion: `(a(1−e), 0, 0, v_peri)`.
    ///
    /// Every body starts at perihelion on the positive x-axis with velocity
    /// purely in +y. This fixes the orbital phase so all bodies start
    /// aligned, a deliberate simplification rather than astronomically accurate
    /// relative phasing.
    #[must_use]
    pub fn perihelion_state(&self, mu: f64) -> StateVector {
        StateVector::new(
            Position2D::from_meters(self.perihelion_distance(), 0.0),
            Velocity2D::from_mps(0.0, self.perihelion_speed(mu)),
        )
    }
}

/// Immutable table of orbital elements, ordered by distance from the Sun.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanetTable {
    planets: Vec<OrbitalElements>,
}

impl PlanetTable {
    /// Create a table from a list of elements.
    #[must_use]
    pub fn new(planets: Vec<OrbitalElements>) -> Self {
        Self { planets }
    }

    /// The eight planets of the solar system.
    ///
    /// Semi-major axes and eccentricities are the standard osculating
    /// values; colors and size factors are the presentation metadata the
    /// animation layer uses.
    #[must_use]
    pub fn solar_system() -> Self {
        let planet = |name: &str, a: f64, e: f64, mass: f64, color: &str, scale: f64| {
            OrbitalElements {
                name: name.to_string(),
                semi_major_axis: a,
                eccentricity: e,
                mass,
                color: color.to_string(),
                display_scale: scale,
            }
        };

        Self::new(vec![
            planet("Mercury", 57.91e9, 0.2056, 3.301e23, "gray", 0.13),
            planet("Venus", 108.2e9, 0.0068, 4.867e24, "yellow", 0.5),
            planet("Earth", 1.496e11, 0.0167, 5.972e24, "royalblue", 0.5),
            planet("Mars", 227.9e9, 0.0934, 6.417e23, "red", 0.4),
            planet("Jupiter", 778.3e9, 0.049, 1.898e27, "orange", 1.5),
            planet("Saturn", 1.42e12, 0.056, 5.683e26, "gold", 1.3),
            planet("Uranus", 2.87e12, 0.046, 8.681e25, "lightseagreen", 0.8),
            planet("Neptune", 4.5e12, 0.010, 1.024e26, "blue", 0.8),
        ])
    }

    /// Number of bodies in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.planets.len()
    }

    /// Check if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.planets.is_empty()
    }

    /// Look up a body by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&OrbitalElements> {
        self.planets.iter().find(|p| p.name == name)
    }

    /// Iterate over the bodies in table order.
    pub fn iter(&self) -> impl Iterator<Item = &OrbitalElements> {
        self.planets.iter()
    }

    /// Longest orbital period in the table (s).
    ///
    /// Used to size the shared time grid so the slowest body completes the
    /// configured number of revolutions.
    #[must_use]
    pub fn longest_period(&self, mu: f64) -> f64 {
        self.planets
            .iter()
            .map(|p| p.period(mu))
            .fold(0.0, f64::max)
    }

    /// Validate every row and reject empty tables and duplicate names.
    ///
    /// # Errors
    ///
    /// Returns a configuration-class error before any integration starts.
    pub fn validate(&self) -> OrreryResult<()> {
        if self.planets.is_empty() {
            return Err(OrreryError::config("element table is empty"));
        }
        for (i, planet) in self.planets.iter().enumerate() {
            planet.validate()?;
            if self.planets[..i].iter().any(|p| p.name == planet.name) {
                return Err(OrreryError::config(format!(
                    "duplicate body name '{}'",
                    planet.name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::units::{G, SOLAR_MASS};

    fn earth() -> OrbitalElements {
        OrbitalElements {
            name: "Earth".to_string(),
            semi_major_axis: 1.496e11,
            eccentricity: 0.0167,
            mass: 5.972e24,
            color: "royalblue".to_string(),
            display_scale: 0.5,
        }
    }

    #[test]
    fn test_earth_period_kepler_third_law() {
        let mu = G * SOLAR_MASS;
        let period = earth().period(mu);

        // ~365.25 days
        let expected = 3.156e7;
        assert!((period - expected).abs() / expected < 0.01, "T = {period}");
    }

    #[test]
    fn test_perihelion_state_invariants() {
        let mu = G * SOLAR_MASS;
        let body = earth();
        let state = body.perihelion_state(mu);

        let (x, y, vx, vy) = state.as_components();
        assert_eq!(x, body.semi_major_axis * (1.0 - body.eccentricity));
        assert_eq!(y, 0.0);
        assert_eq!(vx, 0.0);
        assert_eq!(vy, body.perihelion_speed(mu));
        assert!(vy > 0.0);
    }

    #[test]
    fn test_perihelion_speed_vis_viva() {
        // v_peri must satisfy vis-viva at r = a(1-e):
        // v² = mu (2/r - 1/a)
        let mu = G * SOLAR_MASS;
        let body = earth();
        let v = body.perihelion_speed(mu);
        let r = body.perihelion_distance();
        let expected_sq = mu * (2.0 / r - 1.0 / body.semi_major_axis);
        assert!((v * v - expected_sq).abs() / expected_sq < 1e-9);
    }

    #[test]
    fn test_validation_rejects_bad_elements() {
        let mut bad = earth();
        bad.eccentricity = 1.0;
        assert!(bad.validate().is_err());

        let mut bad = earth();
        bad.eccentricity = -0.1;
        assert!(bad.validate().is_err());

        let mut bad = earth();
        bad.semi_major_axis = 0.0;
        assert!(bad.validate().is_err());

        let mut bad = earth();
        bad.mass = -1.0;
        assert!(bad.validate().is_err());

        let mut bad = earth();
        bad.semi_major_axis = f64::NAN;
        assert!(bad.validate().is_err());

        assert!(earth().validate().is_ok());
    }

    #[test]
    fn test_solar_system_table() {
        let table = PlanetTable::solar_system();
        assert_eq!(table.len(), 8);
        assert!(table.validate().is_ok());

        // Ordered Mercury -> Neptune
        let names: Vec<&str> = table.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names.first(), Some(&"Mercury"));
        assert_eq!(names.last(), Some(&"Neptune"));

        assert!(table.get("Earth").is_some());
        assert!(table.get("Pluto").is_none());
    }

    #[test]
    fn test_longest_period_is_neptune() {
        let mu = G * SOLAR_MASS;
        let table = PlanetTable::solar_system();
        let longest = table.longest_period(mu);
        let neptune = table.get("Neptune").map(|p| p.period(mu)).unwrap_or(0.0);
        assert_eq!(longest, neptune);

        // ~165 years
        assert!(longest > 5.0e9 && longest < 5.5e9, "T = {longest}");
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let table = PlanetTable::new(vec![earth(), earth()]);
        assert!(table.validate().is_err());
    }

    #[test]
    fn test_empty_table_rejected() {
        let table = PlanetTable::new(Vec::new());
        assert!(table.validate().is_err());
    }
}
