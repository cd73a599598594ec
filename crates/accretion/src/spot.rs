//! Full evaluation of one accretion spot, keeping every intermediate quantity

use serde::{Deserialize, Serialize};
use units::{Length, Mass, MassRate, NumberDensity, Temperature, Velocity};

use crate::constants::GRAVITATIONAL_CONSTANT;
use crate::flux_fraction::downward_flux_fraction_at;
use crate::population::Population;
use crate::radius::radius_fit;
use crate::shock::{freefall_velocity, preshock_density_at};
use crate::temperature::{accretion_temperature_at, blend};

/// Radius, preshock state and temperatures of an accreting planet's hot spot
///
/// The radius fit is evaluated once and reused along the chain. Every field is
/// identical to what the corresponding standalone function returns.
///
/// # Examples
/// ```
/// use accretion::{AccretionSpot, Population};
/// use units::{Mass, MassRate, Temperature};
///
/// let spot = AccretionSpot::evaluate(
///     MassRate::from_earth_masses_per_year(1e-2),
///     Mass::from_jupiter_masses(1.0),
///     Temperature::from_kelvin(1000.0),
///     Population::Cold,
///     1.0,
/// );
/// assert!((spot.radius.to_jupiter_radii() - 2.59).abs() < 1e-12);
/// assert!(spot.infall_velocity.is_infall());
/// assert!(spot.effective_temperature > Temperature::from_kelvin(1000.0));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AccretionSpot {
    pub population: Population,
    pub filling_factor: f64,
    pub accretion_rate: MassRate,
    pub mass: Mass,
    pub intrinsic_temperature: Temperature,
    /// Fitted planet radius
    pub radius: Length,
    /// Free-fall velocity at the radius (negative)
    pub infall_velocity: Velocity,
    pub preshock_density: NumberDensity,
    /// Clamped fraction of the shock luminosity radiated into the planet
    pub downward_fraction: f64,
    pub accretion_temperature: Temperature,
    pub effective_temperature: Temperature,
}

impl AccretionSpot {
    pub fn evaluate(
        mdot: MassRate,
        mass: Mass,
        intrinsic: Temperature,
        pop: Population,
        filling_factor: f64,
    ) -> Self {
        let radius = radius_fit(mdot, mass, pop);
        let infall_velocity = freefall_velocity(mass, radius);
        let preshock_density = preshock_density_at(mdot, radius, infall_velocity, filling_factor);
        let downward_fraction = downward_flux_fraction_at(preshock_density, infall_velocity);
        let accretion_temperature = accretion_temperature_at(mdot, mass, radius, filling_factor);

        Self {
            population: pop,
            filling_factor,
            accretion_rate: mdot,
            mass,
            intrinsic_temperature: intrinsic,
            radius,
            infall_velocity,
            preshock_density,
            downward_fraction,
            accretion_temperature,
            effective_temperature: blend(intrinsic, downward_fraction, accretion_temperature),
        }
    }

    /// Accretion luminosity `G Mp Mdot / Rp` in erg/s
    pub fn accretion_luminosity(&self) -> f64 {
        GRAVITATIONAL_CONSTANT * self.mass.to_grams() * self.accretion_rate.to_grams_per_second()
            / self.radius.to_cm()
    }
}
