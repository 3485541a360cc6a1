//! Atmospheric conditions around the leaf.
//!
//! An [`Atmosphere`] is immutable for the duration of one energy-balance
//! solve: the solver reads it, never writes it. The constructor derives the
//! humidity, density and psychrometric quantities from the four measured
//! variables so that callers only need a standard meteorological record.

use crate::core_types::constants::PhysicalConstants;
use crate::physics::psychrometry::{
    air_density, atmosphere_emissivity, e_sat, latent_heat_vaporization, psychrometer_constant,
};
use serde::{Deserialize, Serialize};

/// State of the air surrounding the leaf for one evaluation.
///
/// Invariants (documented, not enforced): `p > 0`, `t` within a
/// Kelvin-convertible range. All fields are public so a fully known
/// atmosphere can be built as a literal; [`Atmosphere::new`] is the usual
/// entry point and fills the derived fields consistently.
///
/// # Example
/// ```
/// use leaf_sim_core::core_types::Atmosphere;
///
/// let atmosphere = Atmosphere::new(20.0, 1.0, 101.3, 0.65);
/// assert!(atmosphere.vpd > 0.0);
/// assert!((atmosphere.rho - 1.2).abs() < 0.05);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Atmosphere {
    /// Air temperature (°C).
    pub t: f64,

    /// Wind speed at leaf height (m s⁻¹).
    pub wind: f64,

    /// Air pressure (kPa).
    pub p: f64,

    /// Relative humidity (0-1).
    pub rh: f64,

    /// Ambient CO₂ concentration (µmol mol⁻¹).
    pub c_a: f64,

    /// Air vapour pressure (kPa).
    pub e: f64,

    /// Saturation vapour pressure at air temperature (kPa).
    pub e_sat: f64,

    /// Vapour pressure deficit of the air (kPa).
    pub vpd: f64,

    /// Longwave emissivity of the atmosphere (-).
    pub emissivity: f64,

    /// Air density (kg m⁻³).
    pub rho: f64,

    /// Psychrometer constant (kPa K⁻¹).
    pub gamma: f64,

    /// Latent heat of vaporization (J kg⁻¹).
    pub lambda: f64,

    /// Incident photosynthetically active radiation (W m⁻²).
    pub par: f64,
}

impl Atmosphere {
    /// Ambient CO₂ used when none is measured (µmol mol⁻¹).
    pub const DEFAULT_CO2: f64 = 400.0;

    /// Build an atmosphere from a standard meteorological record, deriving
    /// the humidity, density and psychrometric fields with the default
    /// [`PhysicalConstants`].
    ///
    /// # Arguments
    /// * `t` - Air temperature (°C)
    /// * `wind` - Wind speed (m s⁻¹)
    /// * `p` - Air pressure (kPa)
    /// * `rh` - Relative humidity (0-1)
    pub fn new(t: f64, wind: f64, p: f64, rh: f64) -> Self {
        Self::with_constants(t, wind, p, rh, &PhysicalConstants::default())
    }

    /// Same as [`Atmosphere::new`] with an explicit constants bundle.
    pub fn with_constants(t: f64, wind: f64, p: f64, rh: f64, constants: &PhysicalConstants) -> Self {
        let e_sat = e_sat(t);
        let e = e_sat * rh;
        let lambda = latent_heat_vaporization(t);

        Self {
            t,
            wind,
            p,
            rh,
            c_a: Self::DEFAULT_CO2,
            e,
            e_sat,
            vpd: e_sat - e,
            emissivity: atmosphere_emissivity(t, e, constants.k0),
            rho: air_density(t, p, constants.k0),
            gamma: psychrometer_constant(p, lambda, constants.cp, constants.epsilon),
            lambda,
            par: 0.0,
        }
    }

    /// Set the ambient CO₂ concentration (µmol mol⁻¹).
    pub fn with_co2(mut self, c_a: f64) -> Self {
        self.c_a = c_a;
        self
    }

    /// Set the incident PAR flux (W m⁻²).
    pub fn with_par(mut self, par: f64) -> Self {
        self.par = par;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn derived_fields_are_consistent() {
        let a = Atmosphere::new(20.0, 1.0, 101.3, 0.65);

        assert_relative_eq!(a.vpd, a.e_sat - a.e, max_relative = 1e-12);
        assert_relative_eq!(a.e, a.e_sat * 0.65, max_relative = 1e-12);
        assert!((a.e_sat - 2.34).abs() < 0.01, "e_sat was {}", a.e_sat);
        assert!((a.rho - 1.20).abs() < 0.02, "rho was {}", a.rho);
        assert!((a.gamma - 0.067).abs() < 0.001, "gamma was {}", a.gamma);
        assert!((0.7..0.9).contains(&a.emissivity), "emissivity was {}", a.emissivity);
        assert_eq!(a.c_a, Atmosphere::DEFAULT_CO2);
    }

    #[test]
    fn saturated_air_has_no_deficit() {
        let a = Atmosphere::new(25.0, 2.0, 101.3, 1.0);
        assert_relative_eq!(a.vpd, 0.0, epsilon = 1e-12);
    }

    #[test]
    fn builders_override_radiation_and_co2() {
        let a = Atmosphere::new(20.0, 1.0, 101.3, 0.65)
            .with_co2(380.0)
            .with_par(400.0);

        assert_eq!(a.c_a, 380.0);
        assert_eq!(a.par, 400.0);
    }
}
