//! Boundary-layer conductances and conductance unit bridges.
//!
//! Free and forced convective conductance for heat follow the flat-leaf
//! formulations of Leuning et al. (1995, appendix E); the unit bridges
//! convert between velocity (m s⁻¹) and molar (mol m⁻² s⁻¹) bases and
//! between the heat, water-vapour and CO₂ diffusion pathways.
//!
//! None of these functions guard against zero inputs: a zero conductance
//! turned into a resistance is `+∞` downstream, by design.
//!
//! # Scientific References
//! - Leuning, R. et al. (1995). "Leaf nitrogen, photosynthesis, conductance
//!   and transpiration: scaling from leaves to canopies", Plant, Cell &
//!   Environment, 18(10).
//! - Monteith, J.L., Unsworth, M.H. (2013). "Principles of Environmental
//!   Physics", 4th edition.

/// Free (buoyancy-driven) boundary-layer conductance for heat (m s⁻¹).
///
/// Grashof-number formulation for a horizontal flat leaf:
///
/// ```text
/// Gr   = 1.58e8 · d³ · |t_leaf − t_air|
/// Gbₕ  = 0.5 · Dₕ(t_air) · Gr^0.25 / d
/// ```
///
/// Zero when leaf and air are at the same temperature.
///
/// # Arguments
/// * `t_air` - Air temperature (°C)
/// * `t_leaf` - Leaf temperature (°C)
/// * `d` - Characteristic leaf dimension (m)
/// * `d_h0` - Molecular diffusivity for heat at 0 °C (m² s⁻¹)
pub fn gbh_free(t_air: f64, t_leaf: f64, d: f64, d_h0: f64) -> f64 {
    let grashof = 1.58e8 * d.powi(3) * (t_leaf - t_air).abs();

    0.5 * diffusivity_heat(t_air, d_h0) * grashof.powf(0.25) / d
}

/// Forced (wind-driven) boundary-layer conductance for heat (m s⁻¹).
///
/// ```text
/// Gbₕ = 0.003 · √(wind / d)
/// ```
///
/// # Arguments
/// * `wind` - Wind speed at leaf height (m s⁻¹)
/// * `d` - Characteristic leaf dimension (m)
pub fn gbh_forced(wind: f64, d: f64) -> f64 {
    0.003 * (wind / d).sqrt()
}

/// Molecular diffusivity for heat at air temperature (m² s⁻¹).
///
/// Linear temperature correction of the 0 °C value.
pub fn diffusivity_heat(t: f64, d_h0: f64) -> f64 {
    d_h0 * (1.0 + 0.007 * t)
}

/// Convert a conductance from velocity to molar basis (mol m⁻² s⁻¹).
///
/// Ideal-gas molar density of air at `t`, `p` scales the conversion.
///
/// # Arguments
/// * `g` - Conductance (m s⁻¹)
/// * `t` - Air temperature (°C)
/// * `p` - Air pressure (kPa)
/// * `r` - Ideal gas constant (J mol⁻¹ K⁻¹)
/// * `k0` - Absolute zero (°C)
pub fn ms_to_mol(g: f64, t: f64, p: f64, r: f64, k0: f64) -> f64 {
    g * p * 1000.0 / (r * (t - k0))
}

/// Convert a conductance from molar to velocity basis (m s⁻¹).
///
/// Inverse of [`ms_to_mol`].
pub fn mol_to_ms(g: f64, t: f64, p: f64, r: f64, k0: f64) -> f64 {
    g * r * (t - k0) / (p * 1000.0)
}

/// Stomatal conductance for CO₂ to stomatal conductance for water vapour.
///
/// # Arguments
/// * `gsc` - Stomatal conductance for CO₂ (any basis)
/// * `gsc_to_gsw` - Diffusivity ratio H₂O/CO₂ through stomata (-)
pub fn gsc_to_gsw(gsc: f64, gsc_to_gsw: f64) -> f64 {
    gsc * gsc_to_gsw
}

/// Boundary-layer conductance for heat to boundary-layer conductance for
/// water vapour.
///
/// # Arguments
/// * `gbh` - Boundary-layer conductance for heat (any basis)
/// * `gbh_to_gbw` - Diffusivity ratio H₂O/heat in the boundary layer (-)
pub fn gbh_to_gbw(gbh: f64, gbh_to_gbw: f64) -> f64 {
    gbh * gbh_to_gbw
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn forced_convection_reference_value() {
        // 1 m/s wind over a 3 cm leaf: 0.003·√(1/0.03) ≈ 0.0173 m/s
        let g = gbh_forced(1.0, 0.03);
        assert_relative_eq!(g, 0.017320508, max_relative = 1e-6);
    }

    #[test]
    fn forced_convection_scales_with_wind_and_size() {
        assert!(gbh_forced(4.0, 0.03) > gbh_forced(1.0, 0.03));
        // Larger leaves have thicker boundary layers, hence lower conductance
        assert!(gbh_forced(1.0, 0.10) < gbh_forced(1.0, 0.03));
    }

    #[test]
    fn free_convection_vanishes_without_temperature_gradient() {
        assert_eq!(gbh_free(20.0, 20.0, 0.03, 21.5e-6), 0.0);
    }

    #[test]
    fn free_convection_grows_with_temperature_gradient() {
        let small = gbh_free(20.0, 21.0, 0.03, 21.5e-6);
        let large = gbh_free(20.0, 25.0, 0.03, 21.5e-6);

        assert!(small > 0.0);
        assert!(large > small);
        // Buoyancy works for cooled leaves too (sign-symmetric)
        assert_eq!(gbh_free(20.0, 15.0, 0.03, 21.5e-6), large);
    }

    #[test]
    fn free_convection_magnitude_is_physical() {
        // A 5 K gradient over a 3 cm leaf gives a few mm/s
        let g = gbh_free(20.0, 25.0, 0.03, 21.5e-6);
        assert!((0.003..0.008).contains(&g), "gbh_free was {g}");
    }

    #[test]
    fn ms_to_mol_sea_level_value() {
        // 0.02 m/s at 20 °C and 101.3 kPa ≈ 0.831 mol m⁻² s⁻¹
        let g = ms_to_mol(0.02, 20.0, 101.3, 8.314, -273.15);
        assert_relative_eq!(g, 0.8312, max_relative = 1e-3);
    }

    #[test]
    fn molar_and_velocity_bases_are_inverse() {
        let g = 0.37;
        let back = mol_to_ms(ms_to_mol(g, 25.0, 99.0, 8.314, -273.15), 25.0, 99.0, 8.314, -273.15);
        assert_relative_eq!(back, g, max_relative = 1e-12);
    }

    #[test]
    fn pathway_bridges_are_linear() {
        assert_relative_eq!(gsc_to_gsw(0.5, 1.57), 0.785, max_relative = 1e-12);
        assert_relative_eq!(gbh_to_gbw(0.02, 1.075), 0.0215, max_relative = 1e-12);
    }
}
