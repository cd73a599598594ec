//! Physical constants of the accretion fits (CGS)
//!
//! These are the values the fits were calibrated with and are not configurable.
//! Unit conversion factors (M⊕/yr, M_J, R_J) live with the quantities in `units`.

/// Gravitational constant (cm³ g⁻¹ s⁻²)
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67e-8;

/// Stefan-Boltzmann constant (erg cm⁻² s⁻¹ K⁻⁴)
pub const STEFAN_BOLTZMANN: f64 = 5.67e-5;

/// Hydrogen atom mass (g)
pub const HYDROGEN_MASS_G: f64 = 1.673e-24;

/// Hydrogen mass fraction of the infalling gas
pub const HYDROGEN_MASS_FRACTION: f64 = 0.738;

/// Accretion rate at which the radius fit is pivoted (M⊕/yr)
pub const RADIUS_FIT_PIVOT_MDOT: f64 = 1e-2;

/// Planet mass at which the radius fit is pivoted (M_J)
pub const RADIUS_FIT_PIVOT_MASS: f64 = 1.0;

/// log10 of the preshock number density (cm⁻³) at which the fdown fit is pivoted
pub const FLUX_FIT_PIVOT_LOG_DENSITY: f64 = 12.0;

/// Preshock velocity (km/s) at which the fdown fit is pivoted
pub const FLUX_FIT_PIVOT_VELOCITY_KM_S: f64 = 100.0;
