//! Fixed-exchange assimilation model.

use crate::assimilation::AssimilationModel;
use crate::core_types::{Atmosphere, LeafStatus, PhysicalConstants};
use serde::{Deserialize, Serialize};

/// Prescribed net assimilation with a constant stomatal closure.
///
/// The net assimilation rate is held at `a` regardless of light,
/// temperature or CO₂; the stomatal conductance follows the closure
/// contract `Gₛ = g0 + k·A` floored at `gs_min`, and the intercellular CO₂
/// is back-computed from the diffusion gradient. Useful for flux-forcing
/// experiments and as the simplest collaborator of the energy-balance
/// solver.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstantAssimilation {
    /// Prescribed net assimilation (µmol m⁻² s⁻¹).
    pub a: f64,

    /// Residual stomatal conductance (mol m⁻² s⁻¹).
    pub g0: f64,

    /// Closure term (mol m⁻² s⁻¹ per µmol m⁻² s⁻¹).
    pub k: f64,

    /// Minimum stomatal conductance (mol m⁻² s⁻¹).
    pub gs_min: f64,
}

impl ConstantAssimilation {
    /// Prescribe a net assimilation rate with the default closure.
    pub fn new(a: f64) -> Self {
        Self {
            a,
            g0: 0.03,
            k: 0.025,
            gs_min: 1e-3,
        }
    }
}

impl AssimilationModel for ConstantAssimilation {
    fn assimilate(
        &self,
        status: &mut LeafStatus,
        _atmosphere: &Atmosphere,
        _constants: &PhysicalConstants,
    ) {
        status.a = self.a;
        status.g_s = (self.g0 + self.k * self.a).max(self.gs_min);
        status.c_i = status.c_s - status.a / status.g_s;
    }
}
