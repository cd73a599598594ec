//! Tests for free-fall velocity and preshock density

use approx::assert_relative_eq;
use units::{Length, Mass, MassRate};

use crate::population::Population;
use crate::radius::radius_fit;
use crate::shock::{freefall_velocity, freefall_velocity_from_accretion, preshock_density};

// ========== Free-Fall Velocity ==========

#[test]
fn test_freefall_velocity_is_infall() {
    let v = freefall_velocity(Mass::from_jupiter_masses(10.0), Length::from_jupiter_radii(2.0));
    assert!(v.is_infall());
    assert!(v.to_cm_per_sec() < 0.0);
}

#[test]
fn test_freefall_velocity_escape_speed_formula() {
    // v = -sqrt(2 G M / R) with the fit's constants
    let v = freefall_velocity(Mass::from_jupiter_masses(1.0), Length::from_jupiter_radii(1.0));
    let expected = -(2.0 * 6.67e-8 * 1.898e30 / 7.15e9_f64).sqrt();
    assert_relative_eq!(v.to_cm_per_sec(), expected, max_relative = 1e-14);
}

#[test]
fn test_freefall_velocity_scaling() {
    let base = freefall_velocity(Mass::from_jupiter_masses(1.0), Length::from_jupiter_radii(1.0));
    let heavier = freefall_velocity(Mass::from_jupiter_masses(4.0), Length::from_jupiter_radii(1.0));
    let larger = freefall_velocity(Mass::from_jupiter_masses(1.0), Length::from_jupiter_radii(4.0));

    assert_relative_eq!(heavier.to_cm_per_sec(), 2.0 * base.to_cm_per_sec(), max_relative = 1e-12);
    assert_relative_eq!(larger.to_cm_per_sec(), 0.5 * base.to_cm_per_sec(), max_relative = 1e-12);
}

#[test]
fn test_freefall_velocity_from_accretion_reference() {
    let cases = [
        (1e-2, 1.0, Population::Warm, -3028468.753314917),
        (1e-3, 5.0, Population::Warm, -8398689.064257598),
        (1e-2, 1.0, Population::Cold, -3697627.1408088827),
        (1e-4, 10.0, Population::Cold, -15751319.62848145),
    ];
    for (mdot, mp, pop, expected) in cases {
        let v = freefall_velocity_from_accretion(
            MassRate::from_earth_masses_per_year(mdot),
            Mass::from_jupiter_masses(mp),
            pop,
        );
        assert_relative_eq!(v.to_cm_per_sec(), expected, max_relative = 1e-12);
    }
}

#[test]
fn test_freefall_velocity_from_accretion_uses_fitted_radius() {
    let mdot = MassRate::from_earth_masses_per_year(3e-4);
    let mass = Mass::from_jupiter_masses(7.0);
    let radius = radius_fit(mdot, mass, Population::Warm);

    assert_eq!(
        freefall_velocity_from_accretion(mdot, mass, Population::Warm),
        freefall_velocity(mass, radius)
    );
}

// ========== Preshock Density ==========

#[test]
fn test_preshock_density_reference() {
    let cases = [
        (1e-2, 1.0, Population::Warm, 28791638899980.61),
        (1e-3, 5.0, Population::Warm, 2456357622148.73),
        (1e-4, 10.0, Population::Warm, 268492136216.0973),
        (1e-2, 1.0, Population::Cold, 52404241954213.81),
        (1e-3, 5.0, Population::Cold, 4653634743568.604),
        (1e-4, 10.0, Population::Cold, 405086647875.3123),
    ];
    for (mdot, mp, pop, expected) in cases {
        let n = preshock_density(
            MassRate::from_earth_masses_per_year(mdot),
            Mass::from_jupiter_masses(mp),
            pop,
            1.0,
        );
        assert_relative_eq!(n.to_per_cm3(), expected, max_relative = 1e-10);
    }
}

#[test]
fn test_preshock_density_inverse_in_filling_factor() {
    let mdot = MassRate::from_earth_masses_per_year(1e-3);
    let mass = Mass::from_jupiter_masses(5.0);
    let full = preshock_density(mdot, mass, Population::Cold, 1.0);
    let tenth = preshock_density(mdot, mass, Population::Cold, 0.1);

    assert_relative_eq!(tenth.to_per_cm3(), 10.0 * full.to_per_cm3(), max_relative = 1e-12);
}

#[test]
fn test_preshock_density_zero_filling_factor_is_infinite() {
    let n = preshock_density(
        MassRate::from_earth_masses_per_year(1e-3),
        Mass::from_jupiter_masses(5.0),
        Population::Warm,
        0.0,
    );
    assert!(n.to_per_cm3().is_infinite());
}
