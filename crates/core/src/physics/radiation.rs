//! Longwave radiative exchange between a leaf and its surroundings.
//!
//! # Scientific References
//! - Monteith, J.L., Unsworth, M.H. (2013). "Principles of Environmental
//!   Physics", 4th edition, chapter 5.

/// Net longwave radiation flux between two grey bodies (W m⁻²).
///
/// Stefan-Boltzmann difference between the emission received from the
/// surroundings (temperature `t2`, emissivity `eps2`) and the emission of
/// the object (temperature `t1`, emissivity `eps1`), scaled by the view
/// fraction `f1`:
///
/// ```text
/// Rₗₗ = σ · ((t2 − k0)⁴·eps2 − (t1 − k0)⁴·eps1) · f1
/// ```
///
/// For a leaf, `f1` is the sky-view fraction: 0 for a fully shaded leaf,
/// 2 for an isolated leaf exchanging on both faces.
///
/// Positive when the object gains energy (surroundings warmer or more
/// emissive), negative when it loses energy.
///
/// # Arguments
/// * `t1` - Object (leaf) temperature (°C)
/// * `t2` - Surroundings (air/sky) temperature (°C)
/// * `eps1` - Object emissivity (-)
/// * `eps2` - Surroundings emissivity (-)
/// * `f1` - View fraction of the object toward the surroundings (0-2)
/// * `k0` - Absolute zero (°C)
/// * `sigma` - Stefan-Boltzmann constant (W m⁻² K⁻⁴)
pub fn net_longwave_radiation(
    t1: f64,
    t2: f64,
    eps1: f64,
    eps2: f64,
    f1: f64,
    k0: f64,
    sigma: f64,
) -> f64 {
    sigma * ((t2 - k0).powi(4) * eps2 - (t1 - k0).powi(4) * eps1) * f1
}

/// Photosynthetic photon flux density from PAR energy flux (µmol m⁻² s⁻¹).
///
/// # Arguments
/// * `par` - Photosynthetically active radiation (W m⁻²)
/// * `j_to_umol` - Photon content of PAR energy (µmol J⁻¹)
pub fn par_to_ppfd(par: f64, j_to_umol: f64) -> f64 {
    par * j_to_umol
}
