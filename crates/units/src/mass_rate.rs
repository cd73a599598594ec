use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

use crate::mass::{EARTH_MASS_G, JUPITER_MASS_G};

/// One Earth mass per year expressed in grams per second.
///
/// The accretion fits fold the Earth mass and the length of the year into this
/// single factor, so it is kept as published instead of being derived.
pub const EARTH_MASS_PER_YEAR_G_S: f64 = 1.893e20;

/// A mass accretion rate using f64 precision.
///
/// The `MassRate` struct represents mass flow rates with Earth masses per year
/// as the base unit. Gas accretion onto forming giant planets typically spans
/// 1e-5 to 1e-2 M⊕/yr during runaway growth.
///
/// # Examples
///
/// ```rust
/// use units::MassRate;
///
/// let runaway = MassRate::from_earth_masses_per_year(1e-2);
/// let late_stage = MassRate::from_earth_masses_per_year(1e-5);
///
/// assert_eq!(runaway.to_grams_per_second(), 1e-2 * 1.893e20);
/// assert!(late_stage < runaway);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Deserialize, Serialize)]
#[serde(transparent)]
pub struct MassRate(f64); // Base unit: Earth masses per year

impl MassRate {
    /// Creates a new `MassRate` from a value in Earth masses per year.
    ///
    /// This is the most direct constructor since M⊕/yr is the base unit.
    ///
    /// # Arguments
    ///
    /// * `value` - The mass rate in Earth masses per year
    pub const fn from_earth_masses_per_year(value: f64) -> Self {
        Self(value)
    }

    /// Creates a new `MassRate` from a value in Jupiter masses per year.
    pub fn from_jupiter_masses_per_year(value: f64) -> Self {
        Self(value * JUPITER_MASS_G / EARTH_MASS_G)
    }

    /// Creates a new `MassRate` from a value in grams per second.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use units::MassRate;
    ///
    /// let rate = MassRate::from_grams_per_second(1.893e20);
    /// assert!((rate.to_earth_masses_per_year() - 1.0).abs() < 1e-12);
    /// ```
    pub fn from_grams_per_second(value: f64) -> Self {
        Self(value / EARTH_MASS_PER_YEAR_G_S)
    }

    /// Returns the mass rate value in Earth masses per year.
    pub fn to_earth_masses_per_year(&self) -> f64 {
        self.0
    }

    /// Converts the mass rate to Jupiter masses per year.
    pub fn to_jupiter_masses_per_year(&self) -> f64 {
        self.0 * EARTH_MASS_G / JUPITER_MASS_G
    }

    /// Converts the mass rate to grams per second.
    pub fn to_grams_per_second(&self) -> f64 {
        self.0 * EARTH_MASS_PER_YEAR_G_S
    }

    /// Decimal logarithm of this rate relative to a reference rate.
    ///
    /// Non-positive rates give `-inf` or NaN, following `f64::log10`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use units::MassRate;
    ///
    /// let pivot = MassRate::from_earth_masses_per_year(1e-2);
    /// let rate = MassRate::from_earth_masses_per_year(1e-4);
    /// assert!((rate.log10_relative_to(pivot) + 2.0).abs() < 1e-12);
    /// ```
    pub fn log10_relative_to(&self, reference: MassRate) -> f64 {
        (self.0 / reference.0).log10()
    }
}

impl Add for MassRate {
    type Output = MassRate;

    fn add(self, rhs: MassRate) -> MassRate {
        MassRate(self.0 + rhs.0)
    }
}

impl Sub for MassRate {
    type Output = MassRate;

    fn sub(self, rhs: MassRate) -> MassRate {
        MassRate(self.0 - rhs.0)
    }
}

impl Mul<f64> for MassRate {
    type Output = MassRate;

    fn mul(self, rhs: f64) -> MassRate {
        MassRate(self.0 * rhs)
    }
}

impl Div<f64> for MassRate {
    type Output = MassRate;

    fn div(self, rhs: f64) -> MassRate {
        MassRate(self.0 / rhs)
    }
}

/// Allow f64 * MassRate (commutative multiplication)
impl Mul<MassRate> for f64 {
    type Output = MassRate;

    fn mul(self, rhs: MassRate) -> MassRate {
        rhs * self
    }
}
