//! Incident stellar flux and flux-to-distance conversions.
//!
//! This module provides the two halves of the insolation relation: the flux
//! an object receives at a given orbital distance, and the orbital distance
//! at which a given effective flux occurs. Both are normalized to Earth's
//! insolation (flux of 1.0 at 1 AU from a 1 Lsun star).

use crate::error::{Error, Result};

/// Calculate the incident stellar flux at an orbital distance.
///
/// The calculation follows the insolation flux formula:
/// ```text
/// flux = (1 / semi_major_axis_au)^2 * luminosity_lsun
/// ```
///
/// The result is dimensionless, relative to the flux Earth receives from
/// the Sun.
///
/// # Arguments
///
/// * `luminosity_lsun` - Stellar luminosity in solar units
/// * `semi_major_axis_au` - Orbital semi-major axis in astronomical units
///
/// # Errors
///
/// Returns an error if:
/// * `luminosity_lsun` is non-finite, negative, or zero
/// * `semi_major_axis_au` is non-finite, negative, or zero
///
/// # Examples
///
/// ```
/// use habzone_lib::insolation::incident_flux;
///
/// // Earth: 1 AU from a 1 Lsun star receives exactly one Earth flux.
/// let flux = incident_flux(1.0, 1.0).unwrap();
/// assert!((flux - 1.0).abs() < 1e-12);
/// ```
pub fn incident_flux(luminosity_lsun: f64, semi_major_axis_au: f64) -> Result<f64> {
    if !luminosity_lsun.is_finite() || luminosity_lsun <= 0.0 {
        return Err(Error::InsolationCalculation {
            message: format!(
                "luminosity must be finite and positive, got {}",
                luminosity_lsun
            ),
        });
    }
    if !semi_major_axis_au.is_finite() || semi_major_axis_au <= 0.0 {
        return Err(Error::InsolationCalculation {
            message: format!(
                "semi-major axis must be finite and positive, got {}",
                semi_major_axis_au
            ),
        });
    }

    Ok(luminosity_lsun / (semi_major_axis_au * semi_major_axis_au))
}

/// Calculate the orbital distance at which a given effective flux occurs.
///
/// Inverts the insolation relation (Kopparapu et al. 2014, Equation 5):
/// ```text
/// distance_au = sqrt(luminosity_lsun / seff)
/// ```
///
/// # Arguments
///
/// * `luminosity_lsun` - Stellar luminosity in solar units
/// * `seff` - Effective flux threshold, relative to Earth's insolation
///
/// # Errors
///
/// Returns an error if:
/// * `seff` is non-finite, negative, or zero
/// * `luminosity_lsun` is non-finite or negative
///
/// # Examples
///
/// ```
/// use habzone_lib::insolation::distance_for_flux;
///
/// // An effective flux of 1.0 around a 1 Lsun star occurs at 1 AU.
/// let distance = distance_for_flux(1.0, 1.0).unwrap();
/// assert!((distance - 1.0).abs() < 1e-12);
/// ```
pub fn distance_for_flux(luminosity_lsun: f64, seff: f64) -> Result<f64> {
    if !seff.is_finite() || seff <= 0.0 {
        return Err(Error::InsolationCalculation {
            message: format!("effective flux must be finite and positive, got {}", seff),
        });
    }
    if !luminosity_lsun.is_finite() || luminosity_lsun < 0.0 {
        return Err(Error::InsolationCalculation {
            message: format!(
                "luminosity must be finite and non-negative, got {}",
                luminosity_lsun
            ),
        });
    }

    Ok((luminosity_lsun / seff).sqrt())
}
