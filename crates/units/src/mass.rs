use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

/// Mass of Jupiter in grams (1.898 × 10³⁰ g)
pub const JUPITER_MASS_G: f64 = 1.898e30;

/// Mass of the Earth in grams (5.972 × 10²⁷ g)
pub const EARTH_MASS_G: f64 = 5.972e27;

/// A planetary mass using f64 precision.
///
/// The `Mass` struct stores masses in Jupiter masses, the unit in which the
/// accretion fits are calibrated. Gram values are produced by a single
/// multiplication so that CGS formulas see the same numbers as the published fit.
///
/// # Examples
///
/// ```rust
/// use units::Mass;
///
/// let proto_jupiter = Mass::from_jupiter_masses(1.0);
/// let super_jupiter = Mass::from_grams(10.0 * 1.898e30);
///
/// assert_eq!(proto_jupiter.to_grams(), 1.898e30);
/// assert!((super_jupiter.to_jupiter_masses() - 10.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct Mass(f64); // Base unit: Jupiter masses

impl Mass {
    /// Creates a new `Mass` from a value in Jupiter masses.
    ///
    /// This is the most direct constructor since Jupiter masses are the base unit.
    ///
    /// # Arguments
    ///
    /// * `value` - The mass value in Jupiter masses
    ///
    /// # Examples
    ///
    /// ```rust
    /// use units::Mass;
    ///
    /// let jupiter = Mass::from_jupiter_masses(1.0);
    /// let brown_dwarf_boundary = Mass::from_jupiter_masses(13.0);
    /// ```
    pub const fn from_jupiter_masses(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `Mass` from a value in Earth masses.
    ///
    /// One Jupiter mass is approximately 317.8 Earth masses.
    pub fn from_earth_masses(value: f64) -> Self {
        Self(value * EARTH_MASS_G / JUPITER_MASS_G)
    }

    /// Creates a new `Mass` from a value in grams.
    pub fn from_grams(value: f64) -> Self {
        Self(value / JUPITER_MASS_G)
    }

    /// Returns the mass value in Jupiter masses.
    pub fn to_jupiter_masses(&self) -> f64 {
        self.0
    }

    /// Converts the mass to Earth masses.
    pub fn to_earth_masses(&self) -> f64 {
        self.0 * JUPITER_MASS_G / EARTH_MASS_G
    }

    /// Converts the mass to grams.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use units::Mass;
    ///
    /// let mass = Mass::from_jupiter_masses(2.0);
    /// assert_eq!(mass.to_grams(), 2.0 * 1.898e30);
    /// ```
    pub fn to_grams(&self) -> f64 {
        self.0 * JUPITER_MASS_G
    }
}

impl Add for Mass {
    type Output = Mass;

    fn add(self, rhs: Mass) -> Mass {
        Mass(self.0 + rhs.0)
    }
}

impl Sub for Mass {
    type Output = Mass;

    fn sub(self, rhs: Mass) -> Mass {
        Mass(self.0 - rhs.0)
    }
}

impl Mul<f64> for Mass {
    type Output = Mass;

    fn mul(self, rhs: f64) -> Mass {
        Mass(self.0 * rhs)
    }
}

impl Div<f64> for Mass {
    type Output = Mass;

    fn div(self, rhs: f64) -> Mass {
        Mass(self.0 / rhs)
    }
}

/// Dividing two masses yields a dimensionless ratio
impl Div for Mass {
    type Output = f64;

    fn div(self, rhs: Mass) -> f64 {
        self.0 / rhs.0
    }
}

/// Allow f64 * Mass (commutative multiplication)
impl Mul<Mass> for f64 {
    type Output = Mass;

    fn mul(self, rhs: Mass) -> Mass {
        rhs * self
    }
}
