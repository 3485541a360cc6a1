//! Monteith & Unsworth leaf energy balance as a bounded fixed point.
//!
//! Each pass of the loop re-evaluates photosynthesis at the current
//! leaf-temperature estimate, corrects the net radiation with the longwave
//! term that estimate implies, rebuilds the boundary-layer and stomatal
//! resistances, partitions the energy into latent and sensible heat, and
//! proposes a new leaf temperature. The loop stops when the proposal moves
//! less than the configured tolerance or when the iteration budget runs
//! out; budget exhaustion is an accepted answer, not an error (callers can
//! inspect `status.iterations`).
//!
//! Two behaviours are part of the model definition and must not be
//! "simplified" away:
//!
//! - the longwave correction is **added** onto the running net radiation
//!   every pass, never recomputed from the isothermal value;
//! - on the converging pass the candidate temperature is discarded: the
//!   reported fluxes keep the temperature that produced them.
//!
//! # Scientific References
//! - Monteith, J.L., Unsworth, M.H. (2013). "Principles of Environmental
//!   Physics", 4th edition, chapter 13.
//! - Leuning, R. et al. (1995). "Leaf nitrogen, photosynthesis, conductance
//!   and transpiration: scaling from leaves to canopies", Plant, Cell &
//!   Environment, 18(10).

use crate::assimilation::AssimilationModel;
use crate::core_types::{Atmosphere, Leaf, PhysicalConstants};
use crate::physics::conductance::{gbh_forced, gbh_free, gbh_to_gbw, gsc_to_gsw, mol_to_ms, ms_to_mol};
use crate::physics::psychrometry::{
    apparent_psychrometer_constant, e_sat_slope, latent_heat, sensible_heat,
};
use crate::physics::radiation::net_longwave_radiation;
use tracing::{debug, trace};

/// Solve the leaf energy balance, mutating `leaf.status` in place.
///
/// On entry the caller must have set the isothermal net radiation
/// `status.rn`, the sky-view fraction and the absorbed PPFD. On return the
/// status holds the self-consistent leaf temperature, corrected net
/// radiation, surface and intercellular CO₂, leaf-to-air vapour pressure
/// deficit, boundary-layer conductance, latent and sensible heat fluxes,
/// assimilation and stomatal conductance. There is no return value: the
/// contract is entirely side-effecting.
///
/// Degenerate inputs (zero wind with no thermal gradient, zero
/// conductances) produce infinite resistances and non-finite fluxes that
/// propagate through IEEE arithmetic; the solver neither panics nor guards
/// against them.
pub fn compute_energy_balance<A: AssimilationModel>(
    leaf: &mut Leaf<A>,
    atmosphere: &Atmosphere,
    constants: &PhysicalConstants,
) {
    let Leaf {
        ref geometry,
        ref energy,
        ref assimilation,
        ref mut status,
    } = *leaf;

    // First-guess surface conditions equal ambient: the boundary layer has
    // not been resolved yet.
    status.t_l = atmosphere.t;
    status.c_s = atmosphere.c_a;
    status.d_l = atmosphere.vpd;
    status.iterations = 0;

    // Loop-carried terms needed by the post-loop sensible heat
    let mut gamma_s = 0.0;
    let mut rbh = 0.0;
    let mut delta = 0.0;

    for _ in 0..energy.max_iter {
        status.iterations += 1;

        assimilation.assimilate(status, atmosphere, constants);

        // Stomatal resistance to water vapour (s m⁻¹), from the CO₂-basis
        // molar conductance the closure works in
        let rsv = 1.0
            / gsc_to_gsw(
                mol_to_ms(status.g_s, atmosphere.t, atmosphere.p, constants.r, constants.k0),
                constants.gsc_to_gsw,
            );

        // Longwave correction at the current temperature estimate,
        // accumulated onto the running net radiation
        status.r_ll = net_longwave_radiation(
            status.t_l,
            atmosphere.t,
            energy.emissivity,
            atmosphere.emissivity,
            status.sky_fraction,
            constants.k0,
            constants.sigma,
        );
        status.rn += status.r_ll;

        // Boundary layer: free + forced convection for heat, then the
        // vapour and CO₂ pathways
        status.gb_h = gbh_free(atmosphere.t, status.t_l, geometry.d, constants.d_h0)
            + gbh_forced(atmosphere.wind, geometry.d);
        rbh = 1.0 / status.gb_h;
        let rbv = 1.0 / gbh_to_gbw(status.gb_h, constants.gbh_to_gbw);
        let gbc = ms_to_mol(status.gb_h, atmosphere.t, atmosphere.p, constants.r, constants.k0)
            / constants.gbc_to_gbh;

        status.c_s = atmosphere.c_a - status.a / gbc;

        gamma_s = apparent_psychrometer_constant(
            atmosphere.gamma,
            energy.a_sh,
            energy.a_sv,
            rbv,
            rsv,
            rbh,
        );
        delta = e_sat_slope(atmosphere.t);

        status.lambda_e = latent_heat(
            status.rn,
            atmosphere.vpd,
            gamma_s,
            rbh,
            delta,
            atmosphere.rho,
            energy.a_sh,
            constants.cp,
        );

        // Transpiration and the vapour pressure deficit it sustains at the
        // leaf surface: molar flux over the molar conductance of the series
        // vapour path, weighted by the face ratio
        let et = status.lambda_e / atmosphere.lambda / constants.m_h2o;
        let g_tot_v = ms_to_mol(
            1.0 / (rbv + rsv),
            atmosphere.t,
            atmosphere.p,
            constants.r,
            constants.k0,
        );
        status.d_l = et * atmosphere.p * (energy.a_sh / energy.a_sv) / g_tot_v;

        let t_l_new = atmosphere.t
            + (status.rn - status.lambda_e) / (atmosphere.rho * constants.cp * (energy.a_sh / rbh));

        trace!(
            iteration = status.iterations,
            t_l = status.t_l,
            t_l_new,
            rn = status.rn,
            lambda_e = status.lambda_e,
            "energy balance pass"
        );

        // The candidate is discarded on convergence: the reported fluxes
        // keep the temperature that produced them
        if (t_l_new - status.t_l).abs() <= energy.tolerance {
            break;
        }
        status.t_l = t_l_new;
    }

    status.h = sensible_heat(
        status.rn,
        atmosphere.vpd,
        gamma_s,
        rbh,
        delta,
        atmosphere.rho,
        energy.a_sh,
        constants.cp,
    );

    debug!(
        iterations = status.iterations,
        max_iter = energy.max_iter,
        t_l = status.t_l,
        lambda_e = status.lambda_e,
        h = status.h,
        "leaf energy balance finished"
    );
}

/// [`compute_energy_balance`] with the default physical constants bundle.
pub fn compute_energy_balance_default<A: AssimilationModel>(
    leaf: &mut Leaf<A>,
    atmosphere: &Atmosphere,
) {
    compute_energy_balance(leaf, atmosphere, &PhysicalConstants::default());
}
