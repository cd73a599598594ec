//! Tabulate the radius and Teff fits for both populations
//!
//! Usage: cargo run -p accretion --example sweep_fit
//!
//! Output: test_RpTeff_fit_<Mdot|Mp>_<warm|cold>_ffill1.0.dat in the current
//! directory, four columns: Mdot (M⊕/yr), Mp (M_J), Rp (R_J), Teff (K)

use std::path::Path;

use accretion::sweep::save_sweep;
use accretion::{Population, SweepConfig, SweepMode};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("accretion=info".parse()?),
        )
        .init();

    for mode in [SweepMode::AccretionRate, SweepMode::PlanetMass] {
        for population in Population::ALL {
            let config = SweepConfig {
                mode,
                population,
                ..SweepConfig::default()
            };
            save_sweep(&config, Path::new("."))?;
        }
    }

    info!("wrote 4 sweep tables");
    Ok(())
}
