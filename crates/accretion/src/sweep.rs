//! Diagnostic sweep of the radius and Teff fits
//!
//! Holds either the planet mass or the accretion rate fixed, varies the other
//! over a grid, and tabulates Mdot, Mp, Rp and Teff for plotting. The table is
//! written as four whitespace-separated columns to
//! `test_RpTeff_fit_<mode>_<pop>_ffill<value>.dat`.

use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use ndarray::Array1;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use units::{Mass, MassRate};

use crate::array;
use crate::calibration::CalibrationRange;
use crate::error::AccretionResult;
use crate::population::Population;

/// Which variable the sweep varies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SweepMode {
    /// Vary the accretion rate on a logarithmic grid at fixed mass
    #[default]
    #[serde(rename = "Mdot")]
    AccretionRate,

    /// Vary the planet mass on a linear grid at fixed accretion rate
    #[serde(rename = "Mp")]
    PlanetMass,
}

impl SweepMode {
    pub fn name(&self) -> &'static str {
        match self {
            Self::AccretionRate => "Mdot",
            Self::PlanetMass => "Mp",
        }
    }
}

impl fmt::Display for SweepMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sweep parameters; every field has a default so partial JSON documents load
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    pub mode: SweepMode,
    pub population: Population,
    pub filling_factor: f64,
    /// Intrinsic temperature (K)
    pub intrinsic_temperature: f64,
    /// Number of grid points
    pub points: usize,
    /// Planet mass held fixed in an accretion-rate sweep (M_J)
    pub fixed_mass: f64,
    /// Accretion rate held fixed in a mass sweep (M⊕/yr)
    pub fixed_accretion_rate: f64,
    /// Decimal exponents bounding the accretion-rate grid
    pub log_accretion_rate_range: (f64, f64),
    /// Bounds of the mass grid (M_J)
    pub mass_range: (f64, f64),
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            mode: SweepMode::AccretionRate,
            population: Population::Warm,
            filling_factor: 1.0,
            intrinsic_temperature: 1000.0,
            points: 70,
            fixed_mass: 20.0,
            fixed_accretion_rate: 1e-3,
            log_accretion_rate_range: (-5.0, -1.0),
            mass_range: (0.5, 20.0),
        }
    }
}

impl SweepConfig {
    /// Load a configuration from JSON, filling missing fields with defaults
    ///
    /// # Examples
    /// ```
    /// use accretion::{Population, SweepConfig, SweepMode};
    ///
    /// let config = SweepConfig::from_json(r#"{"mode": "Mp", "population": "cold"}"#).unwrap();
    /// assert_eq!(config.mode, SweepMode::PlanetMass);
    /// assert_eq!(config.population, Population::Cold);
    /// assert_eq!(config.points, 70);
    /// ```
    pub fn from_json(json: &str) -> AccretionResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Accretion rates (M⊕/yr) and masses (M_J) at every grid point
    pub fn grid(&self) -> (Array1<f64>, Array1<f64>) {
        match self.mode {
            SweepMode::AccretionRate => {
                let (lo, hi) = self.log_accretion_rate_range;
                let mdot = logspace(lo, hi, self.points);
                let mass = Array1::from_elem(mdot.len(), self.fixed_mass);
                (mdot, mass)
            }
            SweepMode::PlanetMass => {
                let (lo, hi) = self.mass_range;
                let mass = linspace(lo, hi, self.points);
                let mdot = Array1::from_elem(mass.len(), self.fixed_accretion_rate);
                (mdot, mass)
            }
        }
    }
}

/// `n` evenly spaced values from `start` to `stop`, both included
pub fn linspace(start: f64, stop: f64, n: usize) -> Array1<f64> {
    match n {
        0 => Array1::zeros(0),
        1 => Array1::from_elem(1, start),
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut values = Array1::from_shape_fn(n, |i| start + i as f64 * step);
            values[n - 1] = stop;
            values
        }
    }
}

/// `n` values from `10^start` to `10^stop`, evenly spaced in the exponent
pub fn logspace(start: f64, stop: f64, n: usize) -> Array1<f64> {
    linspace(start, stop, n).mapv(|exponent| 10f64.powf(exponent))
}

/// One line of the sweep table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepRow {
    /// M⊕/yr
    pub accretion_rate: f64,
    /// M_J
    pub planet_mass: f64,
    /// R_J
    pub radius: f64,
    /// K
    pub effective_temperature: f64,
}

/// Evaluate the radius and effective temperature on the configured grid
pub fn run_sweep(config: &SweepConfig) -> AccretionResult<Vec<SweepRow>> {
    let (mdot, mass) = config.grid();
    match config.mode {
        SweepMode::AccretionRate => info!(mp = config.fixed_mass, "sweeping Mdot at fixed Mp (M_J)"),
        SweepMode::PlanetMass => info!(
            mdot = config.fixed_accretion_rate,
            "sweeping Mp at fixed Mdot (M⊕/yr)"
        ),
    }

    let intrinsic = Array1::from_elem(mdot.len(), config.intrinsic_temperature);
    let filling_factor = Array1::from_elem(mdot.len(), config.filling_factor);

    let radius = array::radius_fit(&mdot, &mass, config.population)?;
    let teff = array::effective_temperature(
        &mdot,
        &mass,
        &intrinsic,
        config.population,
        &filling_factor,
    )?;

    let range = CalibrationRange::PUBLISHED;
    let outside = mdot
        .iter()
        .zip(mass.iter())
        .filter(|&(&m, &p)| {
            !range.contains(
                MassRate::from_earth_masses_per_year(m),
                Mass::from_jupiter_masses(p),
            )
        })
        .count();
    if outside > 0 {
        warn!(
            outside,
            total = mdot.len(),
            "grid points lie outside the calibrated range of the fits"
        );
    }

    Ok((0..mdot.len())
        .map(|i| SweepRow {
            accretion_rate: mdot[i],
            planet_mass: mass[i],
            radius: radius[i],
            effective_temperature: teff[i],
        })
        .collect())
}

/// File name of the sweep table, e.g. `test_RpTeff_fit_Mdot_warm_ffill1.0.dat`
pub fn output_file_name(config: &SweepConfig) -> String {
    format!(
        "test_RpTeff_fit_{}_{}_ffill{:?}.dat",
        config.mode, config.population, config.filling_factor
    )
}

/// Write rows as whitespace-separated columns: Mdot Mp Rp Teff
pub fn write_table<W: Write>(mut writer: W, rows: &[SweepRow]) -> AccretionResult<()> {
    for row in rows {
        writeln!(
            writer,
            "{} {} {} {}",
            scientific(row.accretion_rate),
            scientific(row.planet_mass),
            scientific(row.radius),
            scientific(row.effective_temperature)
        )?;
    }
    writer.flush()?;
    Ok(())
}

/// `%.18e` formatting with a signed, at least two-digit exponent
fn scientific(value: f64) -> String {
    let formatted = format!("{value:.18e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        // inf and NaN have no exponent
        None => formatted,
    }
}

/// Run the sweep and write its table into `dir`, returning the file path
pub fn save_sweep(config: &SweepConfig, dir: &Path) -> AccretionResult<PathBuf> {
    let rows = run_sweep(config)?;
    let path = dir.join(output_file_name(config));
    write_table(BufWriter::new(File::create(&path)?), &rows)?;
    info!(path = %path.display(), rows = rows.len(), "wrote sweep table");
    Ok(path)
}
