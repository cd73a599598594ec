//! Fraction of the shock luminosity radiated into the planet
//!
//! Fit of Aoyama et al. (2020) to the radiative-transfer shock models of
//! Aoyama et al. (2018). With `x = log10(n0 / cm⁻³) - 12` and `y = v0/(km/s) - 100`:
//!
//! ```text
//! fdown = 0.703752 - 0.0967987 x - 0.0254579 x²
//!       + (-0.00527886 - 0.00146833 x - 0.000321504 x²) y
//!       - 9.91492e-6 y²
//! ```
//!
//! The polynomial leaves [0, 1] outside its calibration envelope, so callers
//! should use the clamped [`downward_flux_fraction`].

use units::{NumberDensity, Velocity};

use crate::constants::{FLUX_FIT_PIVOT_LOG_DENSITY, FLUX_FIT_PIVOT_VELOCITY_KM_S};

/// Unclamped downward flux fraction
///
/// # Arguments
/// * `log_density` - log10 of the preshock number density in cm⁻³
/// * `speed_km_s` - Preshock speed in km/s, positive for infall
pub fn raw_downward_flux_fraction(log_density: f64, speed_km_s: f64) -> f64 {
    let x = log_density - FLUX_FIT_PIVOT_LOG_DENSITY;
    let y = speed_km_s - FLUX_FIT_PIVOT_VELOCITY_KM_S;

    0.703752 - 0.0967987 * x - 0.0254579 * x.powi(2)
        + (-0.00527886 - 0.00146833 * x - 0.000321504 * x.powi(2)) * y
        - 9.91492e-06 * y.powi(2)
}

/// Downward flux fraction limited to [0, 1]
///
/// NaN from the polynomial collapses to the upper bound, as `min`/`max` return
/// the non-NaN operand.
///
/// # Examples
/// ```
/// use accretion::downward_flux_fraction;
///
/// assert!((downward_flux_fraction(12.0, 100.0) - 0.703752).abs() < 1e-12);
/// assert_eq!(downward_flux_fraction(30.0, 500.0), 0.0);
/// assert_eq!(downward_flux_fraction(0.0, 10.0), 1.0);
/// ```
pub fn downward_flux_fraction(log_density: f64, speed_km_s: f64) -> f64 {
    raw_downward_flux_fraction(log_density, speed_km_s)
        .min(1.0)
        .max(0.0)
}

/// Downward flux fraction for typed preshock conditions
///
/// Converts the signed infall velocity to a positive speed in km/s before
/// evaluating the fit.
pub fn downward_flux_fraction_at(density: NumberDensity, velocity: Velocity) -> f64 {
    downward_flux_fraction(density.log10(), -velocity.to_km_per_sec())
}
