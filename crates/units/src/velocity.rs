use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::length::KM_TO_CM;

/// A signed velocity using f64 precision.
///
/// The base unit is cm/s. Radial velocities follow the infall convention:
/// gas moving toward the planet has a negative velocity.
///
/// # Examples
///
/// ```rust
/// use units::Velocity;
///
/// let infall = Velocity::from_km_per_sec(-40.0);
/// assert!(infall.is_infall());
/// assert_eq!(infall.to_cm_per_sec(), -4.0e6);
/// assert_eq!(infall.speed().to_km_per_sec(), 40.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Velocity(f64); // Base unit: cm/s

impl Velocity {
    pub const fn zero() -> Self {
        Self(0.0)
    }

    pub const fn from_cm_per_sec(value: f64) -> Self {
        Self(value)
    }

    pub fn from_km_per_sec(value: f64) -> Self {
        Self(value * KM_TO_CM)
    }

    pub fn to_cm_per_sec(&self) -> f64 {
        self.0
    }

    pub fn to_km_per_sec(&self) -> f64 {
        self.0 / KM_TO_CM
    }

    /// Magnitude of the velocity, always non-negative
    pub fn speed(&self) -> Velocity {
        Velocity(self.0.abs())
    }

    /// True for motion toward the planet (negative radial velocity)
    pub fn is_infall(&self) -> bool {
        self.0 < 0.0
    }
}

impl Add for Velocity {
    type Output = Velocity;

    fn add(self, rhs: Velocity) -> Velocity {
        Velocity(self.0 + rhs.0)
    }
}

impl Sub for Velocity {
    type Output = Velocity;

    fn sub(self, rhs: Velocity) -> Velocity {
        Velocity(self.0 - rhs.0)
    }
}

impl Mul<f64> for Velocity {
    type Output = Velocity;

    fn mul(self, rhs: f64) -> Velocity {
        Velocity(self.0 * rhs)
    }
}

impl Div<f64> for Velocity {
    type Output = Velocity;

    fn div(self, rhs: f64) -> Velocity {
        Velocity(self.0 / rhs)
    }
}

impl Neg for Velocity {
    type Output = Velocity;

    fn neg(self) -> Velocity {
        Velocity(-self.0)
    }
}
