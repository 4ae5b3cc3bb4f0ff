//! End-to-end habitability assessment for a single star/object pair.
//!
//! [`assess_habitability`] is the parameterized entry point: it takes plain
//! parameter records, so callers (CLI, tests) stay free of any I/O concern.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::hz::{classify_flux, BoundaryDistances, BoundarySet, ZoneClassification};
use crate::insolation::incident_flux;

/// Stellar inputs for a habitability assessment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StellarParameters {
    /// Bolometric luminosity in solar units.
    pub luminosity_lsun: f64,
    /// Effective (photospheric) temperature in Kelvin.
    pub effective_temp_k: f64,
}

impl StellarParameters {
    /// Validate the stellar parameters.
    pub fn validate(&self) -> Result<()> {
        if !self.luminosity_lsun.is_finite() || self.luminosity_lsun <= 0.0 {
            return Err(Error::StellarInputValidation {
                message: format!(
                    "luminosity must be finite and positive, got {}",
                    self.luminosity_lsun
                ),
            });
        }

        if !self.effective_temp_k.is_finite() || self.effective_temp_k <= 0.0 {
            return Err(Error::StellarInputValidation {
                message: format!(
                    "effective temperature must be finite and positive, got {}",
                    self.effective_temp_k
                ),
            });
        }

        Ok(())
    }
}

/// Orbital inputs for a habitability assessment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalParameters {
    /// Semi-major axis of the object's orbit in astronomical units.
    pub semi_major_axis_au: f64,
}

impl OrbitalParameters {
    /// Validate the orbital parameters.
    pub fn validate(&self) -> Result<()> {
        if !self.semi_major_axis_au.is_finite() || self.semi_major_axis_au <= 0.0 {
            return Err(Error::StellarInputValidation {
                message: format!(
                    "semi-major axis must be finite and positive, got {}",
                    self.semi_major_axis_au
                ),
            });
        }

        Ok(())
    }
}

/// Full result of a habitability assessment.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HabitabilityReport {
    /// The object's incident flux, relative to Earth's insolation.
    pub object_flux: f64,
    /// The four boundary fluxes at the star's temperature.
    pub boundaries: BoundarySet,
    /// The four boundaries as orbital distances in AU.
    pub boundary_distances_au: BoundaryDistances,
    /// Zone membership of the object.
    pub classification: ZoneClassification,
}

/// Assess where an orbiting object falls relative to its star's habitable
/// zone.
///
/// Validates both parameter records, computes the object's incident flux,
/// evaluates the four Kopparapu-2014 boundaries in both flux and distance
/// units, and classifies the object.
///
/// # Errors
///
/// Returns an error if any input fails validation.
///
/// # Examples
///
/// ```
/// use habzone_lib::{assess_habitability, OrbitalParameters, StellarParameters, ZoneClassification};
///
/// let star = StellarParameters {
///     luminosity_lsun: 1.0,
///     effective_temp_k: 5780.0,
/// };
/// let orbit = OrbitalParameters {
///     semi_major_axis_au: 1.0,
/// };
///
/// let report = assess_habitability(&star, &orbit).unwrap();
/// assert_eq!(report.classification, ZoneClassification::Conservative);
/// ```
pub fn assess_habitability(
    star: &StellarParameters,
    orbit: &OrbitalParameters,
) -> Result<HabitabilityReport> {
    star.validate()?;
    orbit.validate()?;

    let object_flux = incident_flux(star.luminosity_lsun, orbit.semi_major_axis_au)?;
    let boundaries = BoundarySet::for_temperature(star.effective_temp_k)?;
    let boundary_distances_au = boundaries.distances_au(star.luminosity_lsun)?;
    let classification = classify_flux(object_flux, &boundaries)?;

    tracing::debug!(
        "classified flux {:.6} at {} K as {:?}",
        object_flux,
        star.effective_temp_k,
        classification
    );

    Ok(HabitabilityReport {
        object_flux,
        boundaries,
        boundary_distances_au,
        classification,
    })
}
