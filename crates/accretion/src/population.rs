//! Formation-history selector for the radius fit
//!
//! The radius fit was calibrated separately on the warm-start and cold-start
//! populations of Mordasini et al. (2012). A runtime string is validated once,
//! in [`FromStr`], after which every fit is total.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AccretionError;

/// Planet population whose structure models the radius fit follows
///
/// | Population | Entropy after formation | Radius at 1e-2 M⊕/yr, 1 M_J |
/// |------------|-------------------------|------------------------------|
/// | Warm       | high (hot start)        | 3.861 R_J                    |
/// | Cold       | low (cold start)        | 2.59 R_J                     |
///
/// `Warm` is the default; it is considered the more realistic of the two.
///
/// # Examples
/// ```
/// use accretion::Population;
///
/// let pop: Population = "cold".parse().unwrap();
/// assert_eq!(pop, Population::Cold);
/// assert!("hot".parse::<Population>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Population {
    /// Warm-start (hot-start-like) population
    #[default]
    Warm,

    /// Cold-start population
    Cold,
}

impl Population {
    /// Both populations, in fit order
    pub const ALL: [Population; 2] = [Population::Warm, Population::Cold];

    /// Selector string as used in file names and configuration
    pub fn name(&self) -> &'static str {
        match self {
            Self::Warm => "warm",
            Self::Cold => "cold",
        }
    }
}

impl fmt::Display for Population {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Population {
    type Err = AccretionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "warm" => Ok(Self::Warm),
            "cold" => Ok(Self::Cold),
            other => Err(AccretionError::InvalidPopulation {
                given: other.to_string(),
            }),
        }
    }
}
