//! Pure biophysical functions: temperature response of rate constants,
//! longwave radiation, boundary-layer conductances and psychrometrics.
//!
//! Everything here is stateless and total over its physically valid domain;
//! degenerate inputs (zero conductances, zero Kelvin temperatures) propagate
//! through IEEE float arithmetic instead of raising errors.

pub mod conductance;
pub mod psychrometry;
pub mod radiation;
pub mod temperature_response;

pub use conductance::{gbh_forced, gbh_free, gbh_to_gbw, gsc_to_gsw, mol_to_ms, ms_to_mol};
pub use psychrometry::{
    apparent_psychrometer_constant, e_sat, e_sat_slope, latent_heat, sensible_heat,
};
pub use radiation::net_longwave_radiation;
pub use temperature_response::{
    arrhenius, arrhenius_peaked, co2_compensation_point, michaelis_menten_co2,
};
