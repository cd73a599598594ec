//! Accretion and effective temperature of the accretion spot
//!
//! The accretion temperature is the black-body temperature of the full
//! accretion luminosity `G Mp Mdot / Rp` spread over the spot area. The
//! effective temperature adds the intrinsic flux to the part of that luminosity
//! which is radiated downward into the planet:
//!
//! ```text
//! Teff⁴ = Tint⁴ + fdown · Tacc⁴
//! ```
//!
//! The non-accreting part of the surface radiates at `Tint` and is not modelled.
//!
//! # References
//! - Aoyama, Marleau, Mordasini & Ikoma (2020), §2.2.2
//! - Marleau et al. (2019) for the σ (not 4σ) normalisation

use std::f64::consts::PI;

use units::{Length, Mass, MassRate, Temperature};

use crate::constants::{GRAVITATIONAL_CONSTANT, STEFAN_BOLTZMANN};
use crate::flux_fraction::downward_flux_fraction;
use crate::population::Population;
use crate::radius::radius_fit;
use crate::shock::{freefall_velocity_from_accretion, preshock_density};

/// Accretion temperature of the spot
///
/// `Tacc = (G Mp Mdot / (ffill 4π Rp³ σ))^(1/4)`, an effective temperature,
/// hence σ and not `a c / 4`.
///
/// # Arguments
/// * `mdot` - Gas accretion rate
/// * `mass` - Planet mass
/// * `pop` - Population for the radius fit
/// * `filling_factor` - Fraction of the surface covered by the accretion spot
pub fn accretion_temperature(
    mdot: MassRate,
    mass: Mass,
    pop: Population,
    filling_factor: f64,
) -> Temperature {
    accretion_temperature_at(mdot, mass, radius_fit(mdot, mass, pop), filling_factor)
}

pub(crate) fn accretion_temperature_at(
    mdot: MassRate,
    mass: Mass,
    radius: Length,
    filling_factor: f64,
) -> Temperature {
    let luminosity = GRAVITATIONAL_CONSTANT * mass.to_grams() * mdot.to_grams_per_second();
    let emitting = filling_factor * 4.0 * PI * radius.to_cm().powi(3) * STEFAN_BOLTZMANN;

    Temperature::from_fourth_power(luminosity / emitting)
}

/// Combine intrinsic and accretion heating: `(Tint⁴ + fdown · Tacc⁴)^(1/4)`
pub fn blend(intrinsic: Temperature, downward_fraction: f64, accretion: Temperature) -> Temperature {
    Temperature::from_fourth_power(intrinsic.powi(4) + downward_fraction * accretion.powi(4))
}

/// Effective temperature of the heated photosphere below the accretion shock
///
/// Numeric problems are not guarded: a zero filling factor or a non-positive
/// accretion rate produce NaN or infinities.
///
/// # Arguments
/// * `mdot` - Gas accretion rate
/// * `mass` - Planet mass
/// * `intrinsic` - Intrinsic temperature of the planet without accretion
/// * `pop` - Population for the radius fit
/// * `filling_factor` - Fraction of the surface covered by the accretion spot
///
/// # Examples
/// ```
/// use accretion::{effective_temperature, Population};
/// use units::{Mass, MassRate, Temperature};
///
/// let teff = effective_temperature(
///     MassRate::from_earth_masses_per_year(1e-3),
///     Mass::from_jupiter_masses(5.0),
///     Temperature::from_kelvin(1000.0),
///     Population::Cold,
///     1.0,
/// );
/// assert!((teff.to_kelvin() - 2827.4).abs() < 0.1);
/// ```
pub fn effective_temperature(
    mdot: MassRate,
    mass: Mass,
    intrinsic: Temperature,
    pop: Population,
    filling_factor: f64,
) -> Temperature {
    let density = preshock_density(mdot, mass, pop, filling_factor);
    let speed_km_s = -freefall_velocity_from_accretion(mdot, mass, pop).to_km_per_sec();
    let downward_fraction = downward_flux_fraction(density.log10(), speed_km_s);

    blend(
        intrinsic,
        downward_fraction,
        accretion_temperature(mdot, mass, pop, filling_factor),
    )
}
