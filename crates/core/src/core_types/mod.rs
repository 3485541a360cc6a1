//! Core data model: atmosphere, leaf state and physical constants.

pub mod atmosphere;
pub mod constants;
pub mod leaf;

pub use atmosphere::Atmosphere;
pub use constants::PhysicalConstants;
pub use leaf::{Leaf, LeafGeometry, LeafStatus, Monteith};
