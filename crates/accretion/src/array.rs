//! Element-wise evaluation of the fits over arrays
//!
//! Inputs and outputs are plain `f64` arrays in the units the fits are quoted
//! in: Mdot in M⊕/yr, Mp in M_J, Tint in K, velocities in cm/s, densities in
//! cm⁻³ and radii in R_J. All inputs of a call must have the same shape, which
//! is checked before anything is evaluated. Each output element equals the
//! scalar function applied to the corresponding input elements.

use ndarray::{Array, ArrayBase, Data, Dimension, Zip};
use tracing::debug;
use units::{Mass, MassRate, Temperature};

use crate::error::{AccretionError, AccretionResult};
use crate::population::Population;
use crate::{flux_fraction, radius, shock, temperature};

fn ensure_same_shape(expected: &[usize], found: &[usize]) -> AccretionResult<()> {
    if expected == found {
        return Ok(());
    }
    debug!(?expected, ?found, "rejecting arrays of different shapes");
    Err(AccretionError::ShapeMismatch {
        expected: expected.to_vec(),
        found: found.to_vec(),
    })
}

/// Planet radius in R_J for every (Mdot, Mp) pair
///
/// # Examples
/// ```
/// use accretion::Population;
/// use ndarray::array;
///
/// let mdot = array![1e-2, 1e-3];
/// let mp = array![1.0, 5.0];
/// let rp = accretion::array::radius_fit(&mdot, &mp, Population::Warm).unwrap();
/// assert_eq!(rp.len(), 2);
/// assert!((rp[0] - 3.861).abs() < 1e-12);
/// ```
pub fn radius_fit<S1, S2, D>(
    mdot: &ArrayBase<S1, D>,
    mass: &ArrayBase<S2, D>,
    pop: Population,
) -> AccretionResult<Array<f64, D>>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D: Dimension,
{
    ensure_same_shape(mdot.shape(), mass.shape())?;

    Ok(Zip::from(mdot).and(mass).map_collect(|&mdot, &mass| {
        radius::radius_fit(
            MassRate::from_earth_masses_per_year(mdot),
            Mass::from_jupiter_masses(mass),
            pop,
        )
        .to_jupiter_radii()
    }))
}

/// Free-fall velocity in cm/s (negative) at the fitted radius
pub fn freefall_velocity_from_accretion<S1, S2, D>(
    mdot: &ArrayBase<S1, D>,
    mass: &ArrayBase<S2, D>,
    pop: Population,
) -> AccretionResult<Array<f64, D>>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D: Dimension,
{
    ensure_same_shape(mdot.shape(), mass.shape())?;

    Ok(Zip::from(mdot).and(mass).map_collect(|&mdot, &mass| {
        shock::freefall_velocity_from_accretion(
            MassRate::from_earth_masses_per_year(mdot),
            Mass::from_jupiter_masses(mass),
            pop,
        )
        .to_cm_per_sec()
    }))
}

/// Preshock number density in cm⁻³
pub fn preshock_density<S1, S2, S3, D>(
    mdot: &ArrayBase<S1, D>,
    mass: &ArrayBase<S2, D>,
    pop: Population,
    filling_factor: &ArrayBase<S3, D>,
) -> AccretionResult<Array<f64, D>>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    S3: Data<Elem = f64>,
    D: Dimension,
{
    ensure_same_shape(mdot.shape(), mass.shape())?;
    ensure_same_shape(mdot.shape(), filling_factor.shape())?;

    Ok(Zip::from(mdot)
        .and(mass)
        .and(filling_factor)
        .map_collect(|&mdot, &mass, &ffill| {
            shock::preshock_density(
                MassRate::from_earth_masses_per_year(mdot),
                Mass::from_jupiter_masses(mass),
                pop,
                ffill,
            )
            .to_per_cm3()
        }))
}

/// Clamped downward flux fraction from log10(n / cm⁻³) and the infall speed in km/s
pub fn downward_flux_fraction<S1, S2, D>(
    log_density: &ArrayBase<S1, D>,
    speed_km_s: &ArrayBase<S2, D>,
) -> AccretionResult<Array<f64, D>>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    D: Dimension,
{
    ensure_same_shape(log_density.shape(), speed_km_s.shape())?;

    Ok(Zip::from(log_density)
        .and(speed_km_s)
        .map_collect(|&lgn, &v0| flux_fraction::downward_flux_fraction(lgn, v0)))
}

/// Accretion temperature in K
pub fn accretion_temperature<S1, S2, S3, D>(
    mdot: &ArrayBase<S1, D>,
    mass: &ArrayBase<S2, D>,
    pop: Population,
    filling_factor: &ArrayBase<S3, D>,
) -> AccretionResult<Array<f64, D>>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    S3: Data<Elem = f64>,
    D: Dimension,
{
    ensure_same_shape(mdot.shape(), mass.shape())?;
    ensure_same_shape(mdot.shape(), filling_factor.shape())?;

    Ok(Zip::from(mdot)
        .and(mass)
        .and(filling_factor)
        .map_collect(|&mdot, &mass, &ffill| {
            temperature::accretion_temperature(
                MassRate::from_earth_masses_per_year(mdot),
                Mass::from_jupiter_masses(mass),
                pop,
                ffill,
            )
            .to_kelvin()
        }))
}

/// Effective temperature of the accretion spot in K
pub fn effective_temperature<S1, S2, S3, S4, D>(
    mdot: &ArrayBase<S1, D>,
    mass: &ArrayBase<S2, D>,
    intrinsic: &ArrayBase<S3, D>,
    pop: Population,
    filling_factor: &ArrayBase<S4, D>,
) -> AccretionResult<Array<f64, D>>
where
    S1: Data<Elem = f64>,
    S2: Data<Elem = f64>,
    S3: Data<Elem = f64>,
    S4: Data<Elem = f64>,
    D: Dimension,
{
    ensure_same_shape(mdot.shape(), mass.shape())?;
    ensure_same_shape(mdot.shape(), intrinsic.shape())?;
    ensure_same_shape(mdot.shape(), filling_factor.shape())?;

    Ok(Zip::from(mdot)
        .and(mass)
        .and(intrinsic)
        .and(filling_factor)
        .map_collect(|&mdot, &mass, &tint, &ffill| {
            temperature::effective_temperature(
                MassRate::from_earth_masses_per_year(mdot),
                Mass::from_jupiter_masses(mass),
                Temperature::from_kelvin(tint),
                pop,
                ffill,
            )
            .to_kelvin()
        }))
}
