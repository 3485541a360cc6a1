//! Physical constant bundle shared by every model in the crate.
//!
//! The solver and the pure physics functions never hard-code these values;
//! they receive the bundle as a read-only argument so that callers can run
//! sensitivity analyses on the constants themselves. The defaults are the
//! values commonly used in the leaf gas-exchange literature (Monteith &
//! Unsworth 2013, Leuning et al. 1995).

use serde::{Deserialize, Serialize};

/// Read-only physical constants used across the gas-exchange models.
///
/// Construct with [`PhysicalConstants::default`] for the standard values, or
/// build a literal to override individual entries. Nothing in the crate
/// mutates a bundle after construction; sharing one instance between many
/// leaves is safe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhysicalConstants {
    /// Ideal gas constant (J mol⁻¹ K⁻¹).
    pub r: f64,

    /// Absolute zero in Celsius (°C). Kelvin conversions use `t - k0`.
    pub k0: f64,

    /// Stefan-Boltzmann constant (W m⁻² K⁻⁴).
    pub sigma: f64,

    /// Specific heat of air at constant pressure (J K⁻¹ kg⁻¹).
    pub cp: f64,

    /// Ratio of molecular weights, water vapour over dry air (-).
    pub epsilon: f64,

    /// Molar mass of water (kg mol⁻¹).
    pub m_h2o: f64,

    /// Conversion from CO₂ to water vapour stomatal conductance (-).
    ///
    /// Ratio of the molecular diffusivities of H₂O and CO₂ in air.
    pub gsc_to_gsw: f64,

    /// Conversion from boundary-layer conductance for heat to CO₂ (-).
    pub gbc_to_gbh: f64,

    /// Conversion from boundary-layer conductance for heat to water vapour (-).
    pub gbh_to_gbw: f64,

    /// Molecular diffusivity for heat at 0 °C (m² s⁻¹).
    pub d_h0: f64,

    /// Photon content of shortwave PAR energy (µmol J⁻¹).
    pub j_to_umol: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            r: 8.314,
            k0: -273.15,
            sigma: 5.670373e-8,
            cp: 1013.0,
            epsilon: 0.622,
            m_h2o: 18.0e-3,
            gsc_to_gsw: 1.57,
            gbc_to_gbh: 1.32,
            gbh_to_gbw: 1.075,
            d_h0: 21.5e-6,
            j_to_umol: 4.57,
        }
    }
}
