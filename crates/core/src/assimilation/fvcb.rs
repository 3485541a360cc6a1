//! Farquhar-von Caemmerer-Berry photosynthesis coupled to a stomatal
//! closure.
//!
//! The coupled system — biochemical demand, stomatal supply and the closure
//! `Gₛ = g0 + closure·A` — is solved analytically: for each limitation the
//! intercellular CO₂ is the positive root of a quadratic, and the tightest
//! limitation wins. No inner iteration is needed, which keeps the outer
//! energy-balance loop the only fixed point in the crate.
//!
//! # Scientific References
//! - Farquhar, G.D., von Caemmerer, S., Berry, J.A. (1980). "A biochemical
//!   model of photosynthetic CO₂ assimilation in leaves of C₃ species",
//!   Planta, 149.
//! - Medlyn, B.E. et al. (2002). "Temperature response of parameters of a
//!   biochemically based model of photosynthesis", Plant, Cell & Environment, 25.
//! - Duursma, R.A. (2015). "Plantecophys - an R package for analysing and
//!   modelling leaf gas exchange data", PLoS ONE, 10(11).

use crate::assimilation::stomata::StomatalClosure;
use crate::assimilation::AssimilationModel;
use crate::core_types::{Atmosphere, LeafStatus, PhysicalConstants};
use crate::physics::temperature_response::{
    arrhenius, arrhenius_peaked, co2_compensation_point, michaelis_menten_co2,
};
use serde::{Deserialize, Serialize};

/// FvCB biochemistry with temperature-corrected parameters and a pluggable
/// stomatal closure.
///
/// Reference-temperature values and activation parameters default to the
/// Medlyn et al. (2002) fits for a temperate broadleaf.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Fvcb<S> {
    /// Reference temperature of the parameter fits (°C).
    pub t_ref: f64,

    /// Maximum carboxylation rate at `t_ref` (µmol m⁻² s⁻¹).
    pub vc_max_ref: f64,

    /// Maximum electron transport rate at `t_ref` (µmol m⁻² s⁻¹).
    pub j_max_ref: f64,

    /// Day respiration at `t_ref` (µmol m⁻² s⁻¹).
    pub rd_ref: f64,

    /// Intercellular O₂ concentration (mmol mol⁻¹).
    pub o2: f64,

    /// Activation energy of day respiration (J mol⁻¹).
    pub ea_r: f64,

    /// Activation energy of JMax (J mol⁻¹).
    pub ea_j: f64,

    /// Deactivation energy of JMax (J mol⁻¹).
    pub hd_j: f64,

    /// Entropy term of JMax (J mol⁻¹ K⁻¹).
    pub ds_j: f64,

    /// Activation energy of VcMax (J mol⁻¹).
    pub ea_v: f64,

    /// Deactivation energy of VcMax (J mol⁻¹).
    pub hd_v: f64,

    /// Entropy term of VcMax (J mol⁻¹ K⁻¹).
    pub ds_v: f64,

    /// Apparent quantum yield of electron transport (mol mol⁻¹).
    pub alpha: f64,

    /// Curvature of the light response (-).
    pub theta: f64,

    /// Stomatal closure coupled to the biochemistry.
    pub stomata: S,
}

impl<S> Fvcb<S> {
    /// FvCB biochemistry with default parameter fits around the given
    /// stomatal closure.
    pub fn new(stomata: S) -> Self {
        Self {
            t_ref: 25.0,
            vc_max_ref: 200.0,
            j_max_ref: 250.0,
            rd_ref: 0.6,
            o2: 210.0,
            ea_r: 46390.0,
            ea_j: 29680.0,
            hd_j: 200000.0,
            ds_j: 631.88,
            ea_v: 58550.0,
            hd_v: 200000.0,
            ds_v: 629.26,
            alpha: 0.425,
            theta: 0.90,
            stomata,
        }
    }
}

/// Electron transport rate from absorbed PPFD (µmol m⁻² s⁻¹).
///
/// Non-rectangular hyperbola between the light-limited slope `alpha·appfd`
/// and the capacity `j_max`, with curvature `theta`.
fn electron_transport(appfd: f64, j_max: f64, alpha: f64, theta: f64) -> f64 {
    let light = alpha * appfd;

    (light + j_max - ((light + j_max).powi(2) - 4.0 * theta * light * j_max).sqrt()) / (2.0 * theta)
}

/// Positive root of the coupled supply/demand quadratic in Cᵢ.
///
/// The demand of one limitation is `W = v·(Cᵢ−Γ*)/(Cᵢ+k)` and the supply
/// under the closure contract is `A = g0·(Cₛ−Cᵢ)/(1 − closure·(Cₛ−Cᵢ))`;
/// equating `A = W − Rd` yields a quadratic whose larger root is the
/// physical intercellular CO₂ (the smaller root sits at the compensation
/// point).
fn ci_of_limitation(v: f64, k: f64, gamma_star: f64, rd: f64, c_s: f64, g0: f64, m: f64) -> f64 {
    let p = v - rd;
    let q = v * gamma_star + rd * k;

    let a = g0 + m * p;
    let b = (1.0 - m * c_s) * p - m * q + g0 * (k - c_s);
    let c = -(1.0 - m * c_s) * q - g0 * k * c_s;

    (-b + (b * b - 4.0 * a * c).sqrt()) / (2.0 * a)
}

impl<S: StomatalClosure> AssimilationModel for Fvcb<S> {
    fn assimilate(
        &self,
        status: &mut LeafStatus,
        atmosphere: &Atmosphere,
        constants: &PhysicalConstants,
    ) {
        let t_k = status.t_l - constants.k0;
        let t_r_k = self.t_ref - constants.k0;

        // Temperature correction of the biochemical parameters
        let gamma_star = co2_compensation_point(t_k, t_r_k, constants.r);
        let km = michaelis_menten_co2(t_k, t_r_k, self.o2, constants.r);
        let vc_max = arrhenius_peaked(
            self.vc_max_ref, self.ea_v, t_k, t_r_k, self.hd_v, self.ds_v, constants.r,
        );
        let j_max = arrhenius_peaked(
            self.j_max_ref, self.ea_j, t_k, t_r_k, self.hd_j, self.ds_j, constants.r,
        );
        let rd = arrhenius(self.rd_ref, self.ea_r, t_k, t_r_k, constants.r);

        let v_j = electron_transport(status.appfd, j_max, self.alpha, self.theta) / 4.0;

        let g0 = self.stomata.g0();
        let m = self.stomata.closure(status, atmosphere);

        // One quadratic per limitation; the tightest demand wins
        let ci_j = ci_of_limitation(v_j, 2.0 * gamma_star, gamma_star, rd, status.c_s, g0, m);
        let w_j = v_j * (ci_j - gamma_star) / (ci_j + 2.0 * gamma_star);

        let ci_v = ci_of_limitation(vc_max, km, gamma_star, rd, status.c_s, g0, m);
        let w_v = vc_max * (ci_v - gamma_star) / (ci_v + km);

        if w_j < w_v {
            status.c_i = ci_j;
            status.a = w_j - rd;
        } else {
            status.c_i = ci_v;
            status.a = w_v - rd;
        }

        status.g_s = (g0 + m * status.a).max(self.stomata.gs_min());
    }
}
