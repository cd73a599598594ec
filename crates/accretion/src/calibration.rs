//! Range of validity of the fits
//!
//! Purely advisory. No fit checks these bounds or changes its output outside them.

use serde::{Deserialize, Serialize};
use units::{Mass, MassRate};

/// Box in (Mdot, Mp) over which the fits were calibrated
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationRange {
    pub min_accretion_rate: MassRate,
    pub max_accretion_rate: MassRate,
    pub min_mass: Mass,
    pub max_mass: Mass,
}

impl CalibrationRange {
    /// 1e-5 < Mdot < 2e-2 M⊕/yr and 1 < Mp < 30 M_J (Aoyama et al. 2020)
    pub const PUBLISHED: CalibrationRange = CalibrationRange {
        min_accretion_rate: MassRate::from_earth_masses_per_year(1e-5),
        max_accretion_rate: MassRate::from_earth_masses_per_year(2e-2),
        min_mass: Mass::from_jupiter_masses(1.0),
        max_mass: Mass::from_jupiter_masses(30.0),
    };

    /// Whether the point lies inside the range, bounds included
    ///
    /// # Examples
    /// ```
    /// use accretion::CalibrationRange;
    /// use units::{Mass, MassRate};
    ///
    /// let range = CalibrationRange::PUBLISHED;
    /// assert!(range.contains(MassRate::from_earth_masses_per_year(1e-3), Mass::from_jupiter_masses(5.0)));
    /// assert!(!range.contains(MassRate::from_earth_masses_per_year(1e-1), Mass::from_jupiter_masses(5.0)));
    /// ```
    pub fn contains(&self, mdot: MassRate, mass: Mass) -> bool {
        mdot >= self.min_accretion_rate
            && mdot <= self.max_accretion_rate
            && mass >= self.min_mass
            && mass <= self.max_mass
    }
}

impl Default for CalibrationRange {
    fn default() -> Self {
        Self::PUBLISHED
    }
}
