//! Temperature response of biochemical rate constants.
//!
//! Arrhenius-type scaling of a rate from a reference temperature to the
//! current leaf temperature, with an optional high-temperature inhibition
//! term, plus the two derived CO₂ quantities used by the FvCB model.
//!
//! # Unit hazard
//!
//! Every function here takes temperatures **strictly in Kelvin**. Nothing
//! checks the unit: passing Celsius silently produces a wrong (but finite,
//! non-panicking) result. This permissive contract is deliberate and locked
//! in by tests.
//!
//! # Scientific References
//! - Medlyn, B.E. et al. (2002). "Temperature response of parameters of a
//!   biochemically based model of photosynthesis", Plant, Cell & Environment, 25.
//! - Bernacchi, C.J. et al. (2001). "Improved temperature response functions
//!   for models of Rubisco-limited photosynthesis", Plant, Cell & Environment, 24.

/// Arrhenius scaling of a rate constant (same unit as `a`).
///
/// ```text
/// rate = a · exp(ea·(t_k − t_r_k) / (r·t_k·t_r_k))
/// ```
///
/// # Arguments
/// * `a` - Rate value at the reference temperature
/// * `ea` - Activation energy (J mol⁻¹)
/// * `t_k` - Current temperature (K)
/// * `t_r_k` - Reference temperature (K)
/// * `r` - Ideal gas constant (J mol⁻¹ K⁻¹)
///
/// Total over its domain except `t_k == 0` or `t_r_k == 0`, which divide by
/// zero and propagate ±∞/NaN rather than raising.
pub fn arrhenius(a: f64, ea: f64, t_k: f64, t_r_k: f64, r: f64) -> f64 {
    a * (ea * (t_k - t_r_k) / (r * t_k * t_r_k)).exp()
}

/// Arrhenius scaling with high-temperature inhibition (peaked form).
///
/// Multiplies the standard [`arrhenius`] term by a deactivation factor so
/// the rate peaks and then declines above the thermal optimum:
///
/// ```text
/// rate = arrhenius(a, ea, ...) · (1 + exp((t_r_k·ds − hd)/(t_r_k·r)))
///                              / (1 + exp((t_k·ds − hd)/(t_k·r)))
/// ```
///
/// With `ds = 0` and a physiological `hd` the factor is exactly 1 and the
/// function collapses to the standard form bit-for-bit.
///
/// # Arguments
/// * `hd` - Deactivation energy (J mol⁻¹)
/// * `ds` - Entropy term (J mol⁻¹ K⁻¹)
///
/// Remaining arguments as in [`arrhenius`]; temperatures in Kelvin only.
pub fn arrhenius_peaked(a: f64, ea: f64, t_k: f64, t_r_k: f64, hd: f64, ds: f64, r: f64) -> f64 {
    arrhenius(a, ea, t_k, t_r_k, r) * (1.0 + ((t_r_k * ds - hd) / (t_r_k * r)).exp())
        / (1.0 + ((t_k * ds - hd) / (t_k * r)).exp())
}

/// CO₂ compensation point Γ* in the absence of day respiration (µmol mol⁻¹).
///
/// Arrhenius scaling of the Bernacchi et al. (2001) reference value; the
/// 42.75 µmol mol⁻¹ / 37830 J mol⁻¹ pair is part of the model definition
/// and not configurable.
pub fn co2_compensation_point(t_k: f64, t_r_k: f64, r: f64) -> f64 {
    arrhenius(42.75, 37830.0, t_k, t_r_k, r)
}

/// Effective Michaelis-Menten coefficient for CO₂ (µmol mol⁻¹).
///
/// ```text
/// Km = Kc · (1 + O₂/Ko)
/// ```
///
/// with `Kc` and `Ko` Arrhenius-scaled from the Bernacchi et al. (2001)
/// constants (404.9/79430 and 278.4/36380 respectively).
///
/// # Arguments
/// * `o2` - Intercellular O₂ concentration (mmol mol⁻¹, typically 210)
pub fn michaelis_menten_co2(t_k: f64, t_r_k: f64, o2: f64, r: f64) -> f64 {
    let kc = arrhenius(404.9, 79430.0, t_k, t_r_k, r);
    let ko = arrhenius(278.4, 36380.0, t_k, t_r_k, r);

    kc * (1.0 + o2 / ko)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn arrhenius_reference_value() {
        // 28 °C leaf, 25 °C reference, Γ* parameters
        let rate = arrhenius(42.75, 37830.0, 301.15, 298.15, 8.314);
        assert_relative_eq!(rate, 49.76935360399572, max_relative = 1e-8);
    }

    #[test]
    fn arrhenius_is_identity_at_reference_temperature() {
        assert_eq!(arrhenius(200.0, 58550.0, 298.15, 298.15, 8.314), 200.0);
    }

    #[test]
    fn arrhenius_increases_with_temperature_for_positive_ea() {
        let cool = arrhenius(100.0, 50000.0, 288.15, 298.15, 8.314);
        let warm = arrhenius(100.0, 50000.0, 308.15, 298.15, 8.314);

        assert!(cool < 100.0);
        assert!(warm > 100.0);
    }

    #[test]
    fn peaked_form_collapses_to_standard_when_ds_is_zero() {
        // Physiological deactivation energy: the exp terms underflow to 0
        // and the factor is exactly 1.
        for t_k in [278.15, 298.15, 313.15] {
            let standard = arrhenius(250.0, 29680.0, t_k, 298.15, 8.314);
            let peaked = arrhenius_peaked(250.0, 29680.0, t_k, 298.15, 200000.0, 0.0, 8.314);
            assert_eq!(peaked, standard, "mismatch at {t_k} K");
        }

        // hd = 0 makes both exp terms exactly 1; the ratio is still exactly 1.
        let standard = arrhenius(250.0, 29680.0, 303.15, 298.15, 8.314);
        let peaked = arrhenius_peaked(250.0, 29680.0, 303.15, 298.15, 0.0, 0.0, 8.314);
        assert_eq!(peaked, standard);
    }

    #[test]
    fn peaked_form_declines_above_thermal_optimum() {
        // JMax-type parameters peak near 30-35 °C; at 45 °C the rate must be
        // below its peak value.
        let params = |t_k: f64| arrhenius_peaked(250.0, 29680.0, t_k, 298.15, 200000.0, 631.88, 8.314);

        let at_30 = params(303.15);
        let at_45 = params(318.15);

        assert!(at_45 < at_30, "expected decline: {at_45} >= {at_30}");
    }

    #[test]
    fn celsius_misuse_is_wrong_but_defined() {
        // Passing Celsius where Kelvin is required is a documented hazard,
        // not a fault: the result is finite and different, never a panic.
        let kelvin = arrhenius(42.75, 37830.0, 301.15, 298.15, 8.314);
        let celsius = arrhenius(42.75, 37830.0, 28.0, 25.0, 8.314);

        assert!(celsius.is_finite());
        assert!((celsius - kelvin).abs() > 1.0);
    }

    #[test]
    fn compensation_point_at_reference_is_the_bernacchi_constant() {
        assert_eq!(co2_compensation_point(298.15, 298.15, 8.314), 42.75);
    }

    #[test]
    fn michaelis_menten_reference_value() {
        // At the reference temperature with O₂ = 210 mmol/mol:
        // Km = 404.9 · (1 + 210/278.4)
        let km = michaelis_menten_co2(298.15, 298.15, 210.0, 8.314);
        assert_relative_eq!(km, 710.3202586206896, max_relative = 1e-9);
    }

    #[test]
    fn michaelis_menten_increases_with_temperature() {
        let cool = michaelis_menten_co2(288.15, 298.15, 210.0, 8.314);
        let warm = michaelis_menten_co2(308.15, 298.15, 210.0, 8.314);

        assert!(warm > cool, "Km should increase with temperature");
    }
}
