//! Radius and accretion-shock temperature fits for forming gas giants
//!
//! Closed-form fits of Aoyama, Marleau, Mordasini & Ikoma (2020) giving the
//! radius of an accreting planet and the effective temperature of the
//! photosphere heated by its accretion shock, as functions of the gas
//! accretion rate and planet mass:
//!
//! radius fit → free-fall velocity → preshock density → downward flux
//! fraction → effective temperature.
//!
//! The scalar functions take typed quantities from the `units` crate; the
//! [`array`] module evaluates the same fits element-wise over `ndarray` arrays.

pub mod array;
pub mod calibration;
pub mod constants;
pub mod error;
pub mod flux_fraction;
pub mod population;
pub mod radius;
pub mod shock;
pub mod spot;
pub mod sweep;
pub mod temperature;

// Re-export key types at crate root
pub use calibration::CalibrationRange;
pub use error::{AccretionError, AccretionResult};
pub use flux_fraction::{downward_flux_fraction, downward_flux_fraction_at, raw_downward_flux_fraction};
pub use population::Population;
pub use radius::{radius_fit, FitTerm, RadiusFitCoefficients};
pub use shock::{freefall_velocity, freefall_velocity_from_accretion, preshock_density};
pub use spot::AccretionSpot;
pub use sweep::{SweepConfig, SweepMode, SweepRow};
pub use temperature::{accretion_temperature, effective_temperature};

#[cfg(test)]
mod population_test;
#[cfg(test)]
mod shock_test;
#[cfg(test)]
mod spot_test;
