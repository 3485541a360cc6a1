//! Psychrometric relationships for moist air and the Penman-Monteith
//! partitioning of net radiation into latent and sensible heat.
//!
//! All functions are pure and total over their physically valid domain.
//! Resistances are reciprocals of conductances; a zero conductance upstream
//! therefore produces infinite resistances here and the arithmetic is left
//! to IEEE float semantics (no zero-guards, see crate docs).
//!
//! # Scientific References
//! - Monteith, J.L., Unsworth, M.H. (2013). "Principles of Environmental
//!   Physics", 4th edition.
//! - Allen, R.G. et al. (1998). "Crop evapotranspiration", FAO 56.
//! - Brutsaert, W. (1975). "On a derivable formula for long-wave radiation
//!   from clear skies", Water Resources Research, 11(5).

/// Saturation vapour pressure over liquid water (kPa).
///
/// Magnus-type fit, valid for the -20..50 °C range covered by leaf
/// temperatures.
///
/// # Arguments
/// * `t` - Air or surface temperature (°C)
pub fn e_sat(t: f64) -> f64 {
    0.61078 * (17.269 * t / (t + 237.3)).exp()
}

/// Slope of the saturation vapour pressure curve (kPa K⁻¹).
///
/// Analytic derivative of [`e_sat`], evaluated at air temperature in the
/// Penman-Monteith partitioning.
pub fn e_sat_slope(t: f64) -> f64 {
    e_sat(t) * 17.269 * 237.3 / ((t + 237.3) * (t + 237.3))
}

/// Latent heat of vaporization of water (J kg⁻¹).
///
/// Linear fit decreasing with temperature (Monteith & Unsworth 2013).
pub fn latent_heat_vaporization(t: f64) -> f64 {
    (2.501 - 2.361e-3 * t) * 1.0e6
}

/// Density of moist air from the ideal gas law (kg m⁻³).
///
/// # Arguments
/// * `t` - Air temperature (°C)
/// * `p` - Air pressure (kPa)
/// * `k0` - Absolute zero (°C)
pub fn air_density(t: f64, p: f64, k0: f64) -> f64 {
    // Specific gas constant for dry air (J kg⁻¹ K⁻¹)
    const R_DRY_AIR: f64 = 287.0586;

    p * 1000.0 / (R_DRY_AIR * (t - k0))
}

/// Psychrometer "constant" γ (kPa K⁻¹).
///
/// γ = Cₚ·P / (ε·λ), where ε is the water/dry-air molecular weight ratio
/// and λ the latent heat of vaporization at air temperature.
///
/// # Arguments
/// * `p` - Air pressure (kPa)
/// * `lambda` - Latent heat of vaporization (J kg⁻¹)
/// * `cp` - Specific heat of air (J K⁻¹ kg⁻¹)
/// * `epsilon` - Molecular weight ratio water/dry air (-)
pub fn psychrometer_constant(p: f64, lambda: f64, cp: f64, epsilon: f64) -> f64 {
    cp * p / (epsilon * lambda)
}

/// Apparent (starred) psychrometer constant (kPa K⁻¹).
///
/// Combines boundary-layer and stomatal resistances to water vapour,
/// weighted by the number of faces exchanging heat (`a_sh`) and vapour
/// (`a_sv`):
///
/// ```text
/// γ* = γ · (a_sh/a_sv) · (Rbᵥ + Rsᵥ) / Rbₕ
/// ```
///
/// # Arguments
/// * `gamma` - Psychrometer constant (kPa K⁻¹)
/// * `a_sh` - Heat-exchange faces (1 or 2)
/// * `a_sv` - Vapour-exchange faces (1 for hypostomatous, 2 for amphistomatous)
/// * `rbv` - Boundary-layer resistance to water vapour (s m⁻¹)
/// * `rsv` - Stomatal resistance to water vapour (s m⁻¹)
/// * `rbh` - Boundary-layer resistance to heat (s m⁻¹)
pub fn apparent_psychrometer_constant(
    gamma: f64,
    a_sh: f64,
    a_sv: f64,
    rbv: f64,
    rsv: f64,
    rbh: f64,
) -> f64 {
    gamma * (a_sh / a_sv) * (rbv + rsv) / rbh
}

/// Emissivity of clear sky from vapour pressure, Brutsaert (1975).
///
/// # Arguments
/// * `t` - Air temperature (°C)
/// * `e` - Air vapour pressure (kPa)
/// * `k0` - Absolute zero (°C)
pub fn atmosphere_emissivity(t: f64, e: f64, k0: f64) -> f64 {
    // Brutsaert's fit takes vapour pressure in hPa
    1.24 * (e * 10.0 / (t - k0)).powf(1.0 / 7.0)
}

/// Latent heat flux λE of the Penman-Monteith partitioning (W m⁻²).
///
/// ```text
/// λE = (Δ·Rn + ρ·Cₚ·VPD·a_sh/Rbₕ) / (Δ + γ*)
/// ```
///
/// # Arguments
/// * `rn` - Net radiation (W m⁻²)
/// * `vpd` - Air vapour pressure deficit (kPa)
/// * `gamma_s` - Apparent psychrometer constant (kPa K⁻¹)
/// * `rbh` - Boundary-layer resistance to heat (s m⁻¹)
/// * `delta` - Saturation vapour pressure slope at air temperature (kPa K⁻¹)
/// * `rho` - Air density (kg m⁻³)
/// * `a_sh` - Heat-exchange faces (-)
/// * `cp` - Specific heat of air (J K⁻¹ kg⁻¹)
pub fn latent_heat(
    rn: f64,
    vpd: f64,
    gamma_s: f64,
    rbh: f64,
    delta: f64,
    rho: f64,
    a_sh: f64,
    cp: f64,
) -> f64 {
    (delta * rn + rho * cp * vpd * a_sh / rbh) / (delta + gamma_s)
}

/// Sensible heat flux H of the Penman-Monteith partitioning (W m⁻²).
///
/// Complement of [`latent_heat`]: the two fluxes sum to `rn` exactly.
///
/// ```text
/// H = (γ*·Rn − ρ·Cₚ·VPD·a_sh/Rbₕ) / (Δ + γ*)
/// ```
pub fn sensible_heat(
    rn: f64,
    vpd: f64,
    gamma_s: f64,
    rbh: f64,
    delta: f64,
    rho: f64,
    a_sh: f64,
    cp: f64,
) -> f64 {
    (gamma_s * rn - rho * cp * vpd * a_sh / rbh) / (delta + gamma_s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn e_sat_reference_values() {
        // Tabulated saturation vapour pressure: 0.611 kPa at 0 °C,
        // ~2.34 kPa at 20 °C, ~7.38 kPa at 40 °C.
        assert_relative_eq!(e_sat(0.0), 0.61078, max_relative = 1e-6);
        assert!((e_sat(20.0) - 2.34).abs() < 0.01, "e_sat(20) = {}", e_sat(20.0));
        assert!((e_sat(40.0) - 7.38).abs() < 0.05, "e_sat(40) = {}", e_sat(40.0));
    }

    #[test]
    fn e_sat_slope_matches_finite_difference() {
        for t in [0.0, 10.0, 20.0, 35.0] {
            let h = 1e-4;
            let numeric = (e_sat(t + h) - e_sat(t - h)) / (2.0 * h);
            assert_relative_eq!(e_sat_slope(t), numeric, max_relative = 1e-5);
        }
    }

    #[test]
    fn latent_heat_vaporization_decreases_with_temperature() {
        let cold = latent_heat_vaporization(0.0);
        let warm = latent_heat_vaporization(30.0);

        assert_relative_eq!(cold, 2.501e6, max_relative = 1e-9);
        assert!(warm < cold, "λ should decrease with temperature");
    }

    #[test]
    fn air_density_sea_level() {
        let rho = air_density(20.0, 101.3, -273.15);
        assert!((rho - 1.20).abs() < 0.02, "air density was {rho}");
    }

    #[test]
    fn psychrometer_constant_standard_conditions() {
        let lambda = latent_heat_vaporization(20.0);
        let gamma = psychrometer_constant(101.3, lambda, 1013.0, 0.622);

        // ~0.067 kPa/K at sea level and 20 °C
        assert!((gamma - 0.067).abs() < 0.001, "gamma was {gamma}");
    }

    #[test]
    fn apparent_gamma_weights_resistances() {
        // Doubling the stomatal+boundary vapour resistance doubles γ*
        let g1 = apparent_psychrometer_constant(0.067, 2.0, 1.0, 40.0, 60.0, 50.0);
        let g2 = apparent_psychrometer_constant(0.067, 2.0, 1.0, 80.0, 120.0, 50.0);

        assert_relative_eq!(g1, 0.067 * 2.0 * 100.0 / 50.0, max_relative = 1e-12);
        assert_relative_eq!(g2, 2.0 * g1, max_relative = 1e-12);
    }

    #[test]
    fn atmosphere_emissivity_clear_sky_range() {
        // Mid-latitude clear sky: ε between ~0.7 and ~0.9
        let eps = atmosphere_emissivity(20.0, 1.52, -273.15);
        assert!((0.7..0.9).contains(&eps), "emissivity was {eps}");

        // Moister air emits more
        let humid = atmosphere_emissivity(20.0, 2.2, -273.15);
        assert!(humid > eps);
    }

    #[test]
    fn latent_and_sensible_heat_close_the_balance() {
        let (rn, vpd, gamma_s, rbh, delta, rho, a_sh, cp) =
            (300.0, 1.0, 0.27, 50.0, 0.145, 1.2, 2.0, 1013.0);

        let le = latent_heat(rn, vpd, gamma_s, rbh, delta, rho, a_sh, cp);
        let h = sensible_heat(rn, vpd, gamma_s, rbh, delta, rho, a_sh, cp);

        assert_relative_eq!(le + h, rn, max_relative = 1e-12);
    }

    #[test]
    fn drier_air_shifts_partitioning_toward_latent_heat() {
        let le_dry = latent_heat(300.0, 2.0, 0.27, 50.0, 0.145, 1.2, 2.0, 1013.0);
        let le_moist = latent_heat(300.0, 0.5, 0.27, 50.0, 0.145, 1.2, 2.0, 1013.0);

        assert!(le_dry > le_moist, "higher VPD should increase λE");
    }
}
