use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Jupiter radius in centimeters: 1 R_J = 7.15e9 cm
pub const JUPITER_RADIUS_CM: f64 = 7.15e9;
pub const KM_TO_CM: f64 = 1e5;

/// A planetary radius or length using f64 precision.
///
/// The `Length` struct stores lengths in Jupiter radii, the unit the radius
/// fit returns. CGS formulas read the value back through [`Length::to_cm`].
///
/// # Examples
///
/// ```rust
/// use units::Length;
///
/// let radius = Length::from_jupiter_radii(2.0);
/// assert_eq!(radius.to_cm(), 2.0 * 7.15e9);
/// assert!((Length::from_cm(7.15e9).to_jupiter_radii() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Length(f64); // Base unit: Jupiter radii

impl Length {
    /// Creates a zero length value
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Creates a new `Length` from a value in Jupiter radii.
    pub const fn from_jupiter_radii(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Length` from a value in kilometers.
    pub fn from_km(value: f64) -> Self {
        Self::from_cm(value * KM_TO_CM)
    }

    /// Creates a new `Length` from a value in centimeters.
    pub fn from_cm(value: f64) -> Self {
        Self(value / JUPITER_RADIUS_CM)
    }

    /// Get value in Jupiter radii
    pub fn to_jupiter_radii(&self) -> f64 {
        self.0
    }

    /// Get value in kilometers
    pub fn to_km(&self) -> f64 {
        self.to_cm() / KM_TO_CM
    }

    /// Get value in centimeters
    pub fn to_cm(&self) -> f64 {
        self.0 * JUPITER_RADIUS_CM
    }

    /// Raise to integer power (in Jupiter radii)
    pub fn powi(&self, n: i32) -> f64 {
        self.0.powi(n)
    }
}

impl Add for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Length {
        Length(self.0 + rhs.0)
    }
}

impl Sub for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Length {
        Length(self.0 - rhs.0)
    }
}

impl Mul<f64> for Length {
    type Output = Length;

    fn mul(self, rhs: f64) -> Length {
        Length(self.0 * rhs)
    }
}

impl Div<f64> for Length {
    type Output = Length;

    fn div(self, rhs: f64) -> Length {
        Length(self.0 / rhs)
    }
}

impl Div for Length {
    type Output = f64;

    fn div(self, rhs: Length) -> f64 {
        self.0 / rhs.0
    }
}

impl Mul<Length> for f64 {
    type Output = Length;

    fn mul(self, rhs: Length) -> Length {
        rhs * self
    }
}
