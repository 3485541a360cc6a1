//! Stomatal conductance closures.
//!
//! A closure relates stomatal conductance to net assimilation:
//!
//! ```text
//! Gₛ = g0 + closure · A
//! ```
//!
//! where the closure term depends on the model family. The closure is
//! evaluated against the leaf surface conditions (`c_s`, `d_l`), not the
//! ambient air, so it participates in the energy-balance fixed point.
//!
//! # Scientific References
//! - Medlyn, B.E. et al. (2011). "Reconciling the optimal and empirical
//!   approaches to modelling stomatal conductance", Global Change Biology, 17.

use crate::core_types::{Atmosphere, LeafStatus};
use serde::{Deserialize, Serialize};

/// Closure family plugged into a coupled assimilation model.
pub trait StomatalClosure {
    /// Residual stomatal conductance for CO₂ (mol m⁻² s⁻¹).
    fn g0(&self) -> f64;

    /// Lower bound on stomatal conductance (mol m⁻² s⁻¹).
    fn gs_min(&self) -> f64;

    /// Multiplier of net assimilation in the conductance equation
    /// (mol m⁻² s⁻¹ per µmol m⁻² s⁻¹).
    fn closure(&self, status: &LeafStatus, atmosphere: &Atmosphere) -> f64;
}

/// Medlyn et al. (2011) optimal stomatal closure.
///
/// ```text
/// closure = (1 + g1/√Dₗ) / Cₛ
/// ```
///
/// The closure grows as the leaf-to-air vapour pressure deficit shrinks;
/// `Dₗ ≤ 0` has no defined closure and propagates NaN, consistent with the
/// crate-wide permissive float semantics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Medlyn {
    /// Residual conductance (mol m⁻² s⁻¹).
    pub g0: f64,

    /// Slope parameter g1 (kPa^0.5).
    pub g1: f64,

    /// Minimum stomatal conductance (mol m⁻² s⁻¹).
    pub gs_min: f64,
}

impl Medlyn {
    /// Build a Medlyn closure from its two fitted parameters.
    pub fn new(g0: f64, g1: f64) -> Self {
        Self {
            g0,
            g1,
            gs_min: 1e-3,
        }
    }
}

impl StomatalClosure for Medlyn {
    fn g0(&self) -> f64 {
        self.g0
    }

    fn gs_min(&self) -> f64 {
        self.gs_min
    }

    fn closure(&self, status: &LeafStatus, _atmosphere: &Atmosphere) -> f64 {
        (1.0 + self.g1 / status.d_l.sqrt()) / status.c_s
    }
}

/// Fixed closure term, independent of surface conditions.
///
/// Useful for prescribed-conductance experiments and as the simplest
/// member of the closure family.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstantClosure {
    /// Residual conductance (mol m⁻² s⁻¹).
    pub g0: f64,

    /// Closure term (mol m⁻² s⁻¹ per µmol m⁻² s⁻¹).
    pub k: f64,

    /// Minimum stomatal conductance (mol m⁻² s⁻¹).
    pub gs_min: f64,
}

impl ConstantClosure {
    /// Build a constant closure.
    pub fn new(g0: f64, k: f64) -> Self {
        Self { g0, k, gs_min: 1e-3 }
    }
}

impl StomatalClosure for ConstantClosure {
    fn g0(&self) -> f64 {
        self.g0
    }

    fn gs_min(&self) -> f64 {
        self.gs_min
    }

    fn closure(&self, _status: &LeafStatus, _atmosphere: &Atmosphere) -> f64 {
        self.k
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::Atmosphere;

    fn surface_status(c_s: f64, d_l: f64) -> LeafStatus {
        LeafStatus {
            c_s,
            d_l,
            ..LeafStatus::default()
        }
    }

    #[test]
    fn medlyn_closure_decreases_with_vpd() {
        let atmosphere = Atmosphere::new(20.0, 1.0, 101.3, 0.65);
        let medlyn = Medlyn::new(0.03, 12.0);

        let humid = medlyn.closure(&surface_status(400.0, 0.5), &atmosphere);
        let dry = medlyn.closure(&surface_status(400.0, 2.5), &atmosphere);

        assert!(humid > dry, "closure should shrink as Dₗ grows");
    }

    #[test]
    fn medlyn_closure_reference_value() {
        let atmosphere = Atmosphere::new(20.0, 1.0, 101.3, 0.65);
        let medlyn = Medlyn::new(0.03, 12.0);

        // (1 + 12/√1) / 400
        let closure = medlyn.closure(&surface_status(400.0, 1.0), &atmosphere);
        assert!((closure - 0.0325).abs() < 1e-12, "closure was {closure}");
    }

    #[test]
    fn constant_closure_ignores_surface_state() {
        let atmosphere = Atmosphere::new(20.0, 1.0, 101.3, 0.65);
        let closure = ConstantClosure::new(0.03, 0.025);

        let a = closure.closure(&surface_status(400.0, 0.5), &atmosphere);
        let b = closure.closure(&surface_status(200.0, 3.0), &atmosphere);

        assert_eq!(a, b);
        assert_eq!(a, 0.025);
    }
}
