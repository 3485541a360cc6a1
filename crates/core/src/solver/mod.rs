//! Leaf energy balance solver.
//!
//! The only component of the crate with nontrivial control flow: a bounded
//! fixed-point iteration over leaf temperature that couples photosynthesis,
//! boundary-layer exchange, longwave radiation and the Penman-Monteith
//! partitioning until the temperature estimate stabilises.

mod monteith;

pub use monteith::{compute_energy_balance, compute_energy_balance_default};
