//! Tests for the full accretion-spot evaluation

use approx::assert_relative_eq;
use units::{Mass, MassRate, Temperature};

use crate::flux_fraction::downward_flux_fraction;
use crate::population::Population;
use crate::radius::radius_fit;
use crate::shock::{freefall_velocity_from_accretion, preshock_density};
use crate::spot::AccretionSpot;
use crate::temperature::{accretion_temperature, effective_temperature};

#[test]
fn test_spot_matches_standalone_functions() {
    let cases = [
        (1e-2, 1.0, 1000.0, Population::Warm, 1.0),
        (1e-3, 5.0, 500.0, Population::Cold, 0.1),
        (2e-5, 25.0, 0.0, Population::Warm, 0.01),
    ];

    for (mdot, mp, tint, pop, ffill) in cases {
        let mdot = MassRate::from_earth_masses_per_year(mdot);
        let mass = Mass::from_jupiter_masses(mp);
        let tint = Temperature::from_kelvin(tint);
        let spot = AccretionSpot::evaluate(mdot, mass, tint, pop, ffill);

        assert_eq!(spot.radius, radius_fit(mdot, mass, pop));
        assert_eq!(spot.infall_velocity, freefall_velocity_from_accretion(mdot, mass, pop));
        assert_eq!(spot.preshock_density, preshock_density(mdot, mass, pop, ffill));
        assert_eq!(
            spot.downward_fraction,
            downward_flux_fraction(
                spot.preshock_density.log10(),
                -spot.infall_velocity.to_km_per_sec()
            )
        );
        assert_eq!(spot.accretion_temperature, accretion_temperature(mdot, mass, pop, ffill));
        assert_eq!(
            spot.effective_temperature,
            effective_temperature(mdot, mass, tint, pop, ffill)
        );
    }
}

#[test]
fn test_spot_records_inputs() {
    let spot = AccretionSpot::evaluate(
        MassRate::from_earth_masses_per_year(1e-3),
        Mass::from_jupiter_masses(5.0),
        Temperature::from_kelvin(1000.0),
        Population::Cold,
        0.5,
    );

    assert_eq!(spot.population, Population::Cold);
    assert_eq!(spot.filling_factor, 0.5);
    assert_eq!(spot.accretion_rate.to_earth_masses_per_year(), 1e-3);
    assert_eq!(spot.mass.to_jupiter_masses(), 5.0);
    assert_eq!(spot.intrinsic_temperature.to_kelvin(), 1000.0);
}

#[test]
fn test_spot_reference_chain() {
    let spot = AccretionSpot::evaluate(
        MassRate::from_earth_masses_per_year(1e-2),
        Mass::from_jupiter_masses(1.0),
        Temperature::from_kelvin(1000.0),
        Population::Warm,
        1.0,
    );

    assert_relative_eq!(spot.radius.to_jupiter_radii(), 3.861, max_relative = 1e-14);
    assert_relative_eq!(spot.infall_velocity.to_cm_per_sec(), -3028468.753314917, max_relative = 1e-12);
    assert_relative_eq!(spot.preshock_density.to_per_cm3(), 28791638899980.61, max_relative = 1e-10);
    // The raw fit exceeds 1 here
    assert_eq!(spot.downward_fraction, 1.0);
    assert_relative_eq!(spot.accretion_temperature.to_kelvin(), 1999.588133111381, max_relative = 1e-10);
    assert_relative_eq!(spot.effective_temperature.to_kelvin(), 2030.1496327265052, max_relative = 1e-10);
}

#[test]
fn test_accretion_luminosity_matches_spot_temperature() {
    // L = ffill 4π R² σ Tacc⁴ for the full-surface spot
    let spot = AccretionSpot::evaluate(
        MassRate::from_earth_masses_per_year(1e-3),
        Mass::from_jupiter_masses(5.0),
        Temperature::from_kelvin(1000.0),
        Population::Warm,
        1.0,
    );
    let radius_cm = spot.radius.to_cm();
    let emitted = 4.0 * std::f64::consts::PI * radius_cm * radius_cm * 5.67e-5
        * spot.accretion_temperature.powi(4);

    assert_relative_eq!(spot.accretion_luminosity(), emitted, max_relative = 1e-10);
}

#[test]
fn test_spot_serializes() {
    let spot = AccretionSpot::evaluate(
        MassRate::from_earth_masses_per_year(1e-3),
        Mass::from_jupiter_masses(5.0),
        Temperature::from_kelvin(1000.0),
        Population::Warm,
        1.0,
    );
    let json = serde_json::to_string(&spot).unwrap();
    assert!(json.contains("\"population\":\"warm\""));

    let restored: AccretionSpot = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.population, spot.population);
    assert_relative_eq!(
        restored.effective_temperature.to_kelvin(),
        spot.effective_temperature.to_kelvin(),
        max_relative = 1e-12
    );
}
