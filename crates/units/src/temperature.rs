use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// A physical temperature quantity using f64 precision.
///
/// The `Temperature` struct represents temperature with Kelvin as the base unit.
/// Radiative energy balances are written in terms of `T⁴`, so the type exposes
/// [`Temperature::powi`] and the inverse [`Temperature::from_fourth_power`].
///
/// # Examples
///
/// ```rust
/// use units::Temperature;
///
/// let intrinsic = Temperature::from_kelvin(1000.0);
/// assert_eq!(intrinsic.powi(4), 1e12);
///
/// let recovered = Temperature::from_fourth_power(1e12);
/// assert!((recovered.to_kelvin() - 1000.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Temperature(f64); // Base unit: Kelvin

impl Temperature {
    /// Absolute zero
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Temperature` from a value in Kelvin.
    ///
    /// # Arguments
    ///
    /// * `value` - The temperature in Kelvin
    pub const fn from_kelvin(value: f64) -> Self {
        Self(value)
    }

    /// Creates a temperature from `T⁴` (in K⁴) by taking the fourth root.
    ///
    /// The root is computed as `powf(0.25)`; negative input yields NaN.
    pub fn from_fourth_power(value: f64) -> Self {
        Self(value.powf(0.25))
    }

    /// Returns the temperature value in Kelvin.
    pub fn to_kelvin(&self) -> f64 {
        self.0
    }

    /// Raise to integer power
    pub fn powi(&self, n: i32) -> f64 {
        self.0.powi(n)
    }

    /// Power function
    pub fn powf(&self, n: f64) -> f64 {
        self.0.powf(n)
    }
}

impl Add for Temperature {
    type Output = Temperature;

    fn add(self, rhs: Temperature) -> Temperature {
        Temperature(self.0 + rhs.0)
    }
}

impl Sub for Temperature {
    type Output = Temperature;

    fn sub(self, rhs: Temperature) -> Temperature {
        Temperature(self.0 - rhs.0)
    }
}

impl Mul<f64> for Temperature {
    type Output = Temperature;

    fn mul(self, rhs: f64) -> Temperature {
        Temperature(self.0 * rhs)
    }
}

impl Div<f64> for Temperature {
    type Output = Temperature;

    fn div(self, rhs: f64) -> Temperature {
        Temperature(self.0 / rhs)
    }
}

/// Allow f64 * Temperature (commutative multiplication)
impl Mul<Temperature> for f64 {
    type Output = Temperature;

    fn mul(self, rhs: Temperature) -> Temperature {
        rhs * self
    }
}
