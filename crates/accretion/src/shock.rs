//! Preshock conditions of gas falling onto the planet surface
//!
//! The gas is assumed to fall freely from infinity onto a point mass, so the
//! preshock velocity depends only on the planet mass and radius. Mass-flux
//! conservation over the accreting fraction of the surface then gives the
//! preshock number density of hydrogen-dominated gas.

use std::f64::consts::PI;

use units::{Length, Mass, MassRate, NumberDensity, Velocity};

use crate::constants::{GRAVITATIONAL_CONSTANT, HYDROGEN_MASS_FRACTION, HYDROGEN_MASS_G};
use crate::population::Population;
use crate::radius::radius_fit;

/// Free-fall velocity from infinity onto a point mass
///
/// `v = -sqrt(2 G Mp / Rp)`. The result is negative (infall) for any positive
/// mass and radius.
///
/// # Examples
/// ```
/// use accretion::freefall_velocity;
/// use units::{Length, Mass};
///
/// let v = freefall_velocity(Mass::from_jupiter_masses(1.0), Length::from_jupiter_radii(1.0));
/// assert!(v.is_infall());
/// assert!((v.to_km_per_sec() + 59.5).abs() < 0.5);
/// ```
pub fn freefall_velocity(mass: Mass, radius: Length) -> Velocity {
    Velocity::from_cm_per_sec(
        -(2.0 * GRAVITATIONAL_CONSTANT * mass.to_grams() / radius.to_cm()).sqrt(),
    )
}

/// Free-fall velocity at the fitted radius of the planet
pub fn freefall_velocity_from_accretion(mdot: MassRate, mass: Mass, pop: Population) -> Velocity {
    freefall_velocity(mass, radius_fit(mdot, mass, pop))
}

/// Preshock number density at the fitted radius
///
/// `n = Mdot / (4π Rp² ffill |v| m_H / X_H)`. A zero filling factor is not
/// rejected and yields an infinite density.
///
/// # Arguments
/// * `mdot` - Gas accretion rate
/// * `mass` - Planet mass
/// * `pop` - Population for the radius fit
/// * `filling_factor` - Fraction of the surface covered by the accretion spot
pub fn preshock_density(
    mdot: MassRate,
    mass: Mass,
    pop: Population,
    filling_factor: f64,
) -> NumberDensity {
    let radius = radius_fit(mdot, mass, pop);
    let velocity = freefall_velocity(mass, radius);
    preshock_density_at(mdot, radius, velocity, filling_factor)
}

/// Preshock number density for an already known radius and infall velocity
pub(crate) fn preshock_density_at(
    mdot: MassRate,
    radius: Length,
    velocity: Velocity,
    filling_factor: f64,
) -> NumberDensity {
    let flux_area = 4.0 * PI * radius.to_cm().powi(2) * filling_factor;
    let mean_particle_mass = HYDROGEN_MASS_G / HYDROGEN_MASS_FRACTION;

    NumberDensity::from_per_cm3(
        mdot.to_grams_per_second()
            / (flux_area * -velocity.to_cm_per_sec() * mean_particle_mass),
    )
}
