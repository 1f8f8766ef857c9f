//! Type-safe planar physical quantities (Poka-Yoke).
//!
//! All positions, velocities and accelerations are newtype wrappers over
//! `uom` quantities, so mixing a position with a velocity is a compile
//! error rather than a silent unit bug. The model is planar: every vector
//! carries exactly the `(x, y)` components of the orbital plane.
//!
//! # References
//!
//! [28] A. J. Kennedy, "Dimension Types," ESOP '94, LNCS vol. 788, pp. 348-362, 1994.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Neg, Sub};
use uom::si::acceleration::meter_per_second_squared;
use uom::si::f64::{Acceleration, Length, Velocity};
use uom::si::length::meter;
use uom::si::velocity::meter_per_second;

/// Gravitational constant (m³ kg⁻¹ s⁻²).
pub const G: f64 = 6.674_30e-11;

/// Astronomical unit in meters.
pub const AU: f64 = 1.495_978_707e11;

/// Solar mass in kilograms.
pub const SOLAR_MASS: f64 = 1.989e30;

/// Seconds per day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Seconds per Julian year.
pub const SECONDS_PER_YEAR: f64 = 365.25 * SECONDS_PER_DAY;

/// Planar position vector with dimensional safety.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position2D {
    pub x: Length,
    pub y: Length,
}

impl Position2D {
    /// Create a new position vector from meter values.
    #[must_use]
    pub fn from_meters(x: f64, y: f64) -> Self {
        Self {
            x: Length::new::<meter>(x),
            y: Length::new::<meter>(y),
        }
    }

    /// Create a new position vector from AU values.
    #[must_use]
    pub fn from_au(x: f64, y: f64) -> Self {
        Self::from_meters(x * AU, y * AU)
    }

    /// Get the zero position.
    #[must_use]
    pub fn zero() -> Self {
        Self::from_meters(0.0, 0.0)
    }

    /// Calculate the magnitude (distance from origin).
    #[must_use]
    pub fn magnitude(&self) -> Length {
        let (x, y) = self.as_meters();
        Length::new::<meter>((x * x + y * y).sqrt())
    }

    /// Calculate squared magnitude (avoids sqrt).
    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        let (x, y) = self.as_meters();
        x * x + y * y
    }

    /// Scale by a dimensionless factor.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Check if both components are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        let (x, y) = self.as_meters();
        x.is_finite() && y.is_finite()
    }

    /// Get raw meter values as tuple.
    #[must_use]
    pub fn as_meters(&self) -> (f64, f64) {
        (self.x.get::<meter>(), self.y.get::<meter>())
    }
}

impl Add for Position2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Position2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Neg for Position2D {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

/// Planar velocity vector with dimensional safety.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Velocity2D {
    pub x: Velocity,
    pub y: Velocity,
}

impl Velocity2D {
    /// Create a new velocity vector from m/s values.
    #[must_use]
    pub fn from_mps(x: f64, y: f64) -> Self {
        Self {
            x: Velocity::new::<meter_per_second>(x),
            y: Velocity::new::<meter_per_second>(y),
        }
    }

    /// Get the zero velocity.
    #[must_use]
    pub fn zero() -> Self {
        Self::from_mps(0.0, 0.0)
    }

    /// Calculate the magnitude (speed).
    #[must_use]
    pub fn magnitude(&self) -> Velocity {
        let (x, y) = self.as_mps();
        Velocity::new::<meter_per_second>((x * x + y * y).sqrt())
    }

    /// Calculate squared magnitude (avoids sqrt).
    #[must_use]
    pub fn magnitude_squared(&self) -> f64 {
        let (x, y) = self.as_mps();
        x * x + y * y
    }

    /// Scale by a dimensionless factor.
    #[must_use]
    pub fn scale(&self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }

    /// Check if both components are finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        let (x, y) = self.as_mps();
        x.is_finite() && y.is_finite()
    }

    /// Get raw m/s values as tuple.
    #[must_use]
    pub fn as_mps(&self) -> (f64, f64) {
        (
            self.x.get::<meter_per_second>(),
            self.y.get::<meter_per_second>(),
        )
    }
}

impl Add for Velocity2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub for Velocity2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl Neg for Velocity2D {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}

/// Planar acceleration vector with dimensional safety.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Acceleration2D {
    pub x: Acceleration,
    pub y: Acceleration,
}

impl Acceleration2D {
    /// Create a new acceleration vector from m/s² values.
    #[must_use]
    pub fn from_mps2(x: f64, y: f64) -> Self {
        Self {
            x: Acceleration::new::<meter_per_second_squared>(x),
            y: Acceleration::new::<meter_per_second_squared>(y),
        }
    }

    /// Get the zero acceleration.
    #[must_use]
    pub fn zero() -> Self {
        Self::from_mps2(0.0, 0.0)
    }

    /// Calculate the magnitude.
    #[must_use]
    pub fn magnitude(&self) -> Acceleration {
        let (x, y) = self.as_mps2();
        Acceleration::new::<meter_per_second_squared>((x * x + y * y).sqrt())
    }

    /// Get raw m/s² values as tuple.
    #[must_use]
    pub fn as_mps2(&self) -> (f64, f64) {
        (
            self.x.get::<meter_per_second_squared>(),
            self.y.get::<meter_per_second_squared>(),
        )
    }
}

impl Add for Acceleration2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Neg for Acceleration2D {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}
