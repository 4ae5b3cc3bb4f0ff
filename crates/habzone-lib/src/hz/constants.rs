//! Constants shared across habitable-zone boundary calculations.

/// Solar effective temperature (K), the reference point of the Kopparapu
/// et al. 2014 polynomial fits. Boundary fluxes are evaluated over the
/// offset `t = T_eff - 5780`.
pub const SOLAR_EFFECTIVE_TEMP_K: f64 = 5780.0;

/// Lower edge of the published validity range of the fits (K).
pub const FIT_TEMP_MIN_K: f64 = 2600.0;

/// Upper edge of the published validity range of the fits (K).
pub const FIT_TEMP_MAX_K: f64 = 7200.0;
