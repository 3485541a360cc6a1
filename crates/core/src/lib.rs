//! Leaf Gas Exchange Core Library
//!
//! Leaf-scale gas exchange and energy balance: light-driven CO₂
//! assimilation with temperature-dependent biochemistry, stomatal
//! conductance closures, convective and radiative exchange, and the
//! Monteith energy-balance solver that couples them into a self-consistent
//! leaf temperature, transpiration and assimilation rate.
//!
//! ## Model structure
//!
//! - Pure biophysical functions (Arrhenius temperature response, longwave
//!   radiation, boundary-layer conductance, psychrometrics) live in
//!   [`physics`] and carry no state.
//! - Photosynthesis is a capability ([`assimilation::AssimilationModel`]):
//!   the solver does not know which biochemical or stomatal variant is
//!   active.
//! - The [`solver`] runs a bounded fixed-point iteration over leaf
//!   temperature, mutating a [`core_types::LeafStatus`] in place.
//!
//! ## Numeric contract
//!
//! The crate is deliberately permissive: non-convergence within the
//! iteration budget is an accepted answer (check
//! [`core_types::LeafStatus::iterations`]), and degenerate inputs such as
//! zero conductances propagate as IEEE ±∞/NaN instead of raising errors.
//! Each solver call owns its `LeafStatus` exclusively; parameters,
//! geometry and constants are plain read-only data and can be shared
//! freely across threads.

// Core data model
pub mod core_types;

// Stateless biophysical functions
pub mod physics;

// Photosynthesis + stomatal conductance capability
pub mod assimilation;

// Energy balance fixed point
pub mod solver;

// Re-export the core surface
pub use assimilation::{AssimilationModel, ConstantAssimilation, Fvcb, Medlyn};
pub use core_types::{Atmosphere, Leaf, LeafGeometry, LeafStatus, Monteith, PhysicalConstants};
pub use solver::{compute_energy_balance, compute_energy_balance_default};
