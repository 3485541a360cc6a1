//! Photosynthesis and stomatal conductance models.
//!
//! The energy-balance solver consumes photosynthesis through the single
//! [`AssimilationModel`] capability: given the current leaf status and the
//! atmosphere, update the net assimilation `a`, the stomatal conductance
//! `g_s` and the intercellular CO₂ `c_i` in place. Which biochemical or
//! stomatal variant sits behind the capability is invisible to the solver.
//!
//! Two families are provided: a fixed-exchange model for prescribed fluxes
//! ([`ConstantAssimilation`]) and the Farquhar-von Caemmerer-Berry
//! biochemistry coupled to a pluggable stomatal closure ([`Fvcb`]).

pub mod constant;
pub mod fvcb;
pub mod stomata;

pub use constant::ConstantAssimilation;
pub use fvcb::Fvcb;
pub use stomata::{ConstantClosure, Medlyn, StomatalClosure};

use crate::core_types::{Atmosphere, LeafStatus, PhysicalConstants};

/// Capability consumed by the energy-balance solver.
///
/// Implementations must update `status.a`, `status.g_s` and `status.c_i`
/// from the current `status.{t_l, c_s, d_l, appfd}` and the atmosphere,
/// enforce their own minimum stomatal conductance, and keep the closure
/// contract `g_s = g0 + closure·a`. The solver never re-checks these
/// obligations.
pub trait AssimilationModel {
    /// Update assimilation, stomatal conductance and intercellular CO₂ in
    /// place.
    fn assimilate(
        &self,
        status: &mut LeafStatus,
        atmosphere: &Atmosphere,
        constants: &PhysicalConstants,
    );
}
