//! Typed CGS quantities for planetary accretion fits
//!
//! Every quantity stores its value in the unit the accretion fits are
//! calibrated in (M⊕/yr, M_J, R_J, cm/s, cm⁻³, K) and converts to CGS with a
//! single multiplication by the published factor.

pub mod length;
pub mod mass;
pub mod mass_rate;
pub mod number_density;
pub mod temperature;
pub mod velocity;

#[cfg(test)]
mod mass_rate_test;
#[cfg(test)]
mod velocity_test;

pub use length::{Length, JUPITER_RADIUS_CM};
pub use mass::{Mass, EARTH_MASS_G, JUPITER_MASS_G};
pub use mass_rate::{MassRate, EARTH_MASS_PER_YEAR_G_S};
pub use number_density::NumberDensity;
pub use temperature::Temperature;
pub use velocity::Velocity;
