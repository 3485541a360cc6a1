//! Leaf geometry, energy-balance parameters and the mutable leaf status.

use serde::{Deserialize, Serialize};

/// Geometry of the leaf, immutable during a solve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeafGeometry {
    /// Characteristic (minimal) dimension of the leaf (m).
    ///
    /// Drives the boundary-layer convection: the width of a broadleaf, the
    /// needle diameter of a conifer.
    pub d: f64,
}

impl Default for LeafGeometry {
    fn default() -> Self {
        // 3 cm broadleaf
        Self { d: 0.03 }
    }
}

/// Parameters of the Monteith & Unsworth energy balance model.
///
/// Immutable configuration: the solver never writes these.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Monteith {
    /// Number of faces exchanging sensible heat (2 for a planar leaf).
    pub a_sh: f64,

    /// Number of faces exchanging water vapour (1 for hypostomatous leaves).
    pub a_sv: f64,

    /// Longwave emissivity of the leaf (-).
    pub emissivity: f64,

    /// Iteration cap of the fixed-point loop.
    pub max_iter: usize,

    /// Convergence tolerance on leaf temperature (°C).
    pub tolerance: f64,
}

impl Default for Monteith {
    fn default() -> Self {
        Self {
            a_sh: 2.0,
            a_sv: 1.0,
            emissivity: 0.955,
            max_iter: 10,
            tolerance: 0.01,
        }
    }
}

/// Mutable working memory of one energy-balance solve.
///
/// Every iteration of the solver reads and overwrites these fields in
/// place; no history is retained across iterations apart from the leaf
/// temperature used by the convergence test. One `LeafStatus` belongs to
/// exactly one solver invocation at a time — callers running leaves in
/// parallel must give each its own copy.
///
/// Before a solve the caller supplies the isothermal net radiation in
/// [`rn`](Self::rn), the sky-view fraction and the absorbed PPFD; the
/// solver fills everything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeafStatus {
    /// Leaf temperature (°C).
    pub t_l: f64,

    /// Net radiation (W m⁻²). Supplied isothermal by the caller, corrected
    /// in place by the solver with the accumulated longwave term.
    pub rn: f64,

    /// Longwave radiation correction of the last iteration (W m⁻²).
    pub r_ll: f64,

    /// Sky-view fraction: 0 (fully shaded) to 2 (both faces exposed).
    pub sky_fraction: f64,

    /// Absorbed photosynthetic photon flux density (µmol m⁻² s⁻¹).
    pub appfd: f64,

    /// CO₂ concentration at the leaf surface (µmol mol⁻¹).
    pub c_s: f64,

    /// Intercellular CO₂ concentration (µmol mol⁻¹).
    pub c_i: f64,

    /// Leaf-to-air vapour pressure deficit (kPa).
    pub d_l: f64,

    /// Sensible heat flux (W m⁻²).
    pub h: f64,

    /// Latent heat flux (W m⁻²).
    pub lambda_e: f64,

    /// Net CO₂ assimilation rate (µmol m⁻² s⁻¹).
    pub a: f64,

    /// Stomatal conductance for CO₂ (mol m⁻² s⁻¹).
    pub g_s: f64,

    /// Boundary-layer conductance for heat (m s⁻¹).
    pub gb_h: f64,

    /// Loop passes performed by the last solve. Callers that need a
    /// convergence guarantee compare this against the iteration cap; the
    /// solver itself treats an exhausted budget as an accepted answer.
    pub iterations: usize,
}

impl Default for LeafStatus {
    fn default() -> Self {
        Self {
            t_l: 25.0,
            rn: 0.0,
            r_ll: 0.0,
            sky_fraction: 1.0,
            appfd: 0.0,
            c_s: 0.0,
            c_i: 0.0,
            d_l: 0.0,
            h: 0.0,
            lambda_e: 0.0,
            a: 0.0,
            g_s: 0.0,
            gb_h: 0.0,
            iterations: 0,
        }
    }
}

/// A leaf bundling geometry, energy-balance parameters, the assimilation
/// collaborator and the mutable status the solver works on.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Leaf<A> {
    /// Leaf geometry (immutable during a solve).
    pub geometry: LeafGeometry,

    /// Energy balance parameters (immutable during a solve).
    pub energy: Monteith,

    /// Photosynthesis + stomatal conductance model.
    pub assimilation: A,

    /// Working memory, mutated in place by the solver.
    pub status: LeafStatus,
}

impl<A> Leaf<A> {
    /// Assemble a leaf with default geometry and energy parameters.
    pub fn new(assimilation: A) -> Self {
        Self {
            geometry: LeafGeometry::default(),
            energy: Monteith::default(),
            assimilation,
            status: LeafStatus::default(),
        }
    }

    /// Replace the geometry.
    pub fn with_geometry(mut self, geometry: LeafGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Replace the energy-balance parameters.
    pub fn with_energy(mut self, energy: Monteith) -> Self {
        self.energy = energy;
        self
    }

    /// Set the caller-supplied radiative inputs: isothermal net radiation
    /// (W m⁻²), sky-view fraction (0-2) and absorbed PPFD (µmol m⁻² s⁻¹).
    pub fn with_radiation(mut self, rn: f64, sky_fraction: f64, appfd: f64) -> Self {
        self.status.rn = rn;
        self.status.sky_fraction = sky_fraction;
        self.status.appfd = appfd;
        self
    }
}
