//! Radius of an accreting gas giant
//!
//! Fit of Aoyama et al. (2020, Fig. 1) to the Bern planet structure model. With
//! `lm2 = log10(Mdot / 1e-2 M⊕/yr)` and `x = Mp/M_J - 1`,
//!
//! ```text
//! Rp / R_J = c0(lm2) + c1(lm2)·x + c2(lm2)·x²,   ck(lm2) = a + b·lm2 + c·exp(d·lm2)
//! ```
//!
//! The fit is calibrated for 1 < Mp < 30 M_J and 1e-5 < Mdot < 2e-2 M⊕/yr but
//! extrapolates silently outside that range.

use units::{Length, Mass, MassRate};

use crate::constants::{RADIUS_FIT_PIVOT_MASS, RADIUS_FIT_PIVOT_MDOT};
use crate::population::Population;

/// One coefficient of the mass polynomial: `a + b·lm2 + c·exp(d·lm2)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitTerm {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
}

impl FitTerm {
    pub const fn new(a: f64, b: f64, c: f64, d: f64) -> Self {
        Self { a, b, c, d }
    }

    /// Evaluate at `lm2 = log10(Mdot / 1e-2 M⊕/yr)`
    pub fn evaluate(&self, lm2: f64) -> f64 {
        self.a + self.b * lm2 + self.c * (self.d * lm2).exp()
    }
}

/// Constant, linear and quadratic coefficients of the radius polynomial in `Mp - 1 M_J`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusFitCoefficients {
    pub constant: FitTerm,
    pub linear: FitTerm,
    pub quadratic: FitTerm,
}

impl RadiusFitCoefficients {
    pub const WARM: RadiusFitCoefficients = RadiusFitCoefficients {
        constant: FitTerm::new(0.411, -0.244, 3.45, 0.762),
        linear: FitTerm::new(-0.489, -0.0961, 0.652, 0.353),
        quadratic: FitTerm::new(-0.228, -0.00106, 0.226, 0.000220),
    };

    pub const COLD: RadiusFitCoefficients = RadiusFitCoefficients {
        constant: FitTerm::new(1.53, 0.111, 1.06, 0.906),
        linear: FitTerm::new(-0.195, -0.0307, 0.0977, 0.000695),
        quadratic: FitTerm::new(-0.250, 0.000276, 0.254, 0.000214),
    };

    pub fn for_population(pop: Population) -> &'static RadiusFitCoefficients {
        match pop {
            Population::Warm => &Self::WARM,
            Population::Cold => &Self::COLD,
        }
    }

    /// Radius in Jupiter radii at the given pivot offsets
    pub fn evaluate(&self, lm2: f64, mass_offset: f64) -> f64 {
        self.constant.evaluate(lm2)
            + self.linear.evaluate(lm2) * mass_offset
            + self.quadratic.evaluate(lm2) * mass_offset.powi(2)
    }
}

/// Radius of an accreting planet
///
/// # Arguments
/// * `mdot` - Gas accretion rate
/// * `mass` - Planet mass
/// * `pop` - Population whose fit to use
///
/// # Examples
/// ```
/// use accretion::{radius_fit, Population};
/// use units::{Mass, MassRate};
///
/// let rp = radius_fit(
///     MassRate::from_earth_masses_per_year(1e-2),
///     Mass::from_jupiter_masses(1.0),
///     Population::Warm,
/// );
/// assert!((rp.to_jupiter_radii() - 3.861).abs() < 1e-12);
/// ```
pub fn radius_fit(mdot: MassRate, mass: Mass, pop: Population) -> Length {
    let lm2 = mdot.log10_relative_to(MassRate::from_earth_masses_per_year(RADIUS_FIT_PIVOT_MDOT));
    let mass_offset = mass.to_jupiter_masses() - RADIUS_FIT_PIVOT_MASS;

    Length::from_jupiter_radii(RadiusFitCoefficients::for_population(pop).evaluate(lm2, mass_offset))
}
