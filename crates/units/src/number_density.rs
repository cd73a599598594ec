use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// A particle number density using f64 precision.
///
/// The `NumberDensity` struct represents particles per cubic centimeter, the
/// CGS convention of shock and radiative-transfer models. Preshock densities
/// of accreting gas giants typically lie between 1e10 and 1e15 cm⁻³.
///
/// # Examples
///
/// ```rust
/// use units::NumberDensity;
///
/// let preshock = NumberDensity::from_per_cm3(1e12);
/// assert_eq!(preshock.to_per_cm3(), 1e12);
/// assert!((preshock.log10() - 12.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct NumberDensity(f64); // Base unit: cm⁻³

impl NumberDensity {
    /// Creates a new `NumberDensity` from a value in particles per cubic centimeter.
    ///
    /// # Arguments
    ///
    /// * `value` - The number density in cm⁻³
    pub const fn from_per_cm3(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `NumberDensity` from a value in particles per cubic meter.
    pub fn from_per_m3(value: f64) -> Self {
        Self(value * 1e-6)
    }

    /// Returns the number density in particles per cubic centimeter.
    pub fn to_per_cm3(&self) -> f64 {
        self.0
    }

    /// Converts the number density to particles per cubic meter.
    pub fn to_per_m3(&self) -> f64 {
        self.0 * 1e6
    }

    /// Decimal logarithm of the density in cm⁻³.
    pub fn log10(&self) -> f64 {
        self.0.log10()
    }
}

impl Add for NumberDensity {
    type Output = NumberDensity;

    fn add(self, rhs: NumberDensity) -> NumberDensity {
        NumberDensity(self.0 + rhs.0)
    }
}

impl Sub for NumberDensity {
    type Output = NumberDensity;

    fn sub(self, rhs: NumberDensity) -> NumberDensity {
        NumberDensity(self.0 - rhs.0)
    }
}

impl Mul<f64> for NumberDensity {
    type Output = NumberDensity;

    fn mul(self, rhs: f64) -> NumberDensity {
        NumberDensity(self.0 * rhs)
    }
}

impl Div<f64> for NumberDensity {
    type Output = NumberDensity;

    fn div(self, rhs: f64) -> NumberDensity {
        NumberDensity(self.0 / rhs)
    }
}

/// Allow f64 * NumberDensity (commutative multiplication)
impl Mul<NumberDensity> for f64 {
    type Output = NumberDensity;

    fn mul(self, rhs: NumberDensity) -> NumberDensity {
        rhs * self
    }
}
