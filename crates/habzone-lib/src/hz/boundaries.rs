//! Habitable-zone boundary fluxes from Kopparapu et al. 2014.
//!
//! The four boundary fluxes (Recent Venus, Runaway Greenhouse, Maximum
//! Greenhouse, Early Mars) are closed-form quartic fits in the star's
//! effective temperature (Equation 4 and Table 1 of the paper, one
//! Earth-mass case).

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::insolation::distance_for_flux;

use super::constants::{FIT_TEMP_MAX_K, FIT_TEMP_MIN_K, SOLAR_EFFECTIVE_TEMP_K};

/// The four habitable-zone limits of the one-Earth-mass fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HzLimit {
    /// Inner edge of the optimistic zone.
    RecentVenus,
    /// Inner edge of the conservative zone.
    RunawayGreenhouse,
    /// Outer edge of the conservative zone.
    MaximumGreenhouse,
    /// Outer edge of the optimistic zone.
    EarlyMars,
}

impl HzLimit {
    /// All limits, ordered from highest boundary flux (closest to the star)
    /// to lowest.
    pub const ALL: [HzLimit; 4] = [
        HzLimit::RecentVenus,
        HzLimit::RunawayGreenhouse,
        HzLimit::MaximumGreenhouse,
        HzLimit::EarlyMars,
    ];

    /// Fit coefficients for this limit (Table 1, 1 Me case).
    pub fn coefficients(self) -> LimitCoefficients {
        match self {
            HzLimit::RecentVenus => LimitCoefficients {
                seff_sun: 1.766,
                a: 2.136e-4,
                b: 2.533e-8,
                c: -1.332e-11,
                d: -3.097e-15,
            },
            HzLimit::RunawayGreenhouse => LimitCoefficients {
                seff_sun: 1.107,
                a: 1.332e-4,
                b: 1.580e-8,
                c: -8.308e-12,
                d: -1.931e-15,
            },
            HzLimit::MaximumGreenhouse => LimitCoefficients {
                seff_sun: 0.356,
                a: 6.171e-5,
                b: 1.689e-9,
                c: -3.198e-12,
                d: -5.575e-16,
            },
            HzLimit::EarlyMars => LimitCoefficients {
                seff_sun: 0.320,
                a: 5.547e-5,
                b: 1.526e-9,
                c: -2.874e-12,
                d: -5.011e-16,
            },
        }
    }

    /// Human-readable label used in CLI output.
    pub fn label(self) -> &'static str {
        match self {
            HzLimit::RecentVenus => "Recent Venus",
            HzLimit::RunawayGreenhouse => "Runaway Greenhouse",
            HzLimit::MaximumGreenhouse => "Maximum Greenhouse",
            HzLimit::EarlyMars => "Early Mars",
        }
    }
}

/// Quartic fit coefficients for one habitable-zone limit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimitCoefficients {
    /// Boundary flux at solar effective temperature.
    pub seff_sun: f64,
    /// Linear term.
    pub a: f64,
    /// Quadratic term.
    pub b: f64,
    /// Cubic term.
    pub c: f64,
    /// Quartic term.
    pub d: f64,
}

impl LimitCoefficients {
    /// Evaluate the boundary flux at a temperature offset from the solar
    /// reference (Kopparapu et al. 2014, Equation 4):
    ///
    /// ```text
    /// seff = seff_sun + a*t + b*t^2 + c*t^3 + d*t^4
    /// ```
    ///
    /// where `t = T_eff - 5780` in Kelvin.
    pub fn effective_flux(&self, temp_delta_k: f64) -> f64 {
        let t = temp_delta_k;
        self.seff_sun + self.a * t + self.b * t * t + self.c * t * t * t + self.d * t * t * t * t
    }
}

/// Compute the boundary flux for one habitable-zone limit at a stellar
/// effective temperature.
///
/// # Errors
///
/// Returns an error if `effective_temp_k` is non-finite, negative, or zero.
///
/// # Examples
///
/// ```
/// use habzone_lib::hz::{seff_boundary, HzLimit};
///
/// // At solar temperature the offset is zero and the fit collapses to
/// // its constant term.
/// let seff = seff_boundary(5780.0, HzLimit::RunawayGreenhouse).unwrap();
/// assert!((seff - 1.107).abs() < 1e-12);
/// ```
pub fn seff_boundary(effective_temp_k: f64, limit: HzLimit) -> Result<f64> {
    if !effective_temp_k.is_finite() || effective_temp_k <= 0.0 {
        return Err(Error::StellarInputValidation {
            message: format!(
                "effective temperature must be finite and positive, got {}",
                effective_temp_k
            ),
        });
    }

    let temp_delta = effective_temp_k - SOLAR_EFFECTIVE_TEMP_K;
    Ok(limit.coefficients().effective_flux(temp_delta))
}

/// The four boundary fluxes evaluated at one stellar temperature.
///
/// For normal stellar temperatures the fields satisfy
/// `recent_venus >= runaway_greenhouse >= maximum_greenhouse >= early_mars`;
/// this ordering comes from the physics of the fits and is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundarySet {
    /// Recent Venus boundary flux.
    pub recent_venus: f64,
    /// Runaway Greenhouse boundary flux.
    pub runaway_greenhouse: f64,
    /// Maximum Greenhouse boundary flux.
    pub maximum_greenhouse: f64,
    /// Early Mars boundary flux.
    pub early_mars: f64,
}

impl BoundarySet {
    /// Evaluate all four limits at the given stellar effective temperature.
    ///
    /// Temperatures outside the published validity range of the fits
    /// (2600-7200 K) are still evaluated, matching the open-form polynomial,
    /// but logged as a warning.
    ///
    /// # Errors
    ///
    /// Returns an error if `effective_temp_k` is non-finite, negative, or
    /// zero.
    pub fn for_temperature(effective_temp_k: f64) -> Result<Self> {
        if effective_temp_k.is_finite()
            && !(FIT_TEMP_MIN_K..=FIT_TEMP_MAX_K).contains(&effective_temp_k)
        {
            tracing::warn!(
                "effective temperature {} K is outside the 2600-7200 K fit range; \
                 boundary fluxes are extrapolated",
                effective_temp_k
            );
        }

        Ok(Self {
            recent_venus: seff_boundary(effective_temp_k, HzLimit::RecentVenus)?,
            runaway_greenhouse: seff_boundary(effective_temp_k, HzLimit::RunawayGreenhouse)?,
            maximum_greenhouse: seff_boundary(effective_temp_k, HzLimit::MaximumGreenhouse)?,
            early_mars: seff_boundary(effective_temp_k, HzLimit::EarlyMars)?,
        })
    }

    /// Boundary flux for a single limit.
    pub fn flux_for(&self, limit: HzLimit) -> f64 {
        match limit {
            HzLimit::RecentVenus => self.recent_venus,
            HzLimit::RunawayGreenhouse => self.runaway_greenhouse,
            HzLimit::MaximumGreenhouse => self.maximum_greenhouse,
            HzLimit::EarlyMars => self.early_mars,
        }
    }

    /// Convert each boundary flux to the orbital distance (AU) at which it
    /// occurs around a star of the given luminosity.
    ///
    /// # Errors
    ///
    /// Returns an error if `luminosity_lsun` is non-finite or negative, or
    /// if any boundary flux is non-positive (possible only far outside the
    /// fit range).
    pub fn distances_au(&self, luminosity_lsun: f64) -> Result<BoundaryDistances> {
        Ok(BoundaryDistances {
            recent_venus: distance_for_flux(luminosity_lsun, self.recent_venus)?,
            runaway_greenhouse: distance_for_flux(luminosity_lsun, self.runaway_greenhouse)?,
            maximum_greenhouse: distance_for_flux(luminosity_lsun, self.maximum_greenhouse)?,
            early_mars: distance_for_flux(luminosity_lsun, self.early_mars)?,
        })
    }
}

/// The four habitable-zone boundaries as orbital distances in AU.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundaryDistances {
    /// Recent Venus boundary distance (AU).
    pub recent_venus: f64,
    /// Runaway Greenhouse boundary distance (AU).
    pub runaway_greenhouse: f64,
    /// Maximum Greenhouse boundary distance (AU).
    pub maximum_greenhouse: f64,
    /// Early Mars boundary distance (AU).
    pub early_mars: f64,
}

impl BoundaryDistances {
    /// Boundary distance for a single limit.
    pub fn distance_for(&self, limit: HzLimit) -> f64 {
        match limit {
            HzLimit::RecentVenus => self.recent_venus,
            HzLimit::RunawayGreenhouse => self.runaway_greenhouse,
            HzLimit::MaximumGreenhouse => self.maximum_greenhouse,
            HzLimit::EarlyMars => self.early_mars,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_coefficients_collapse_to_constant() {
        let coefficients = LimitCoefficients {
            seff_sun: 0.75,
            a: 0.0,
            b: 0.0,
            c: 0.0,
            d: 0.0,
        };
        assert_eq!(coefficients.effective_flux(-1234.0), 0.75);
        assert_eq!(coefficients.effective_flux(0.0), 0.75);
        assert_eq!(coefficients.effective_flux(987.0), 0.75);
    }

    #[test]
    fn solar_temperature_yields_table_constants() {
        let boundaries = BoundarySet::for_temperature(SOLAR_EFFECTIVE_TEMP_K).unwrap();
        assert!((boundaries.recent_venus - 1.766).abs() < 1e-12);
        assert!((boundaries.runaway_greenhouse - 1.107).abs() < 1e-12);
        assert!((boundaries.maximum_greenhouse - 0.356).abs() < 1e-12);
        assert!((boundaries.early_mars - 0.320).abs() < 1e-12);
    }

    #[test]
    fn boundary_ordering_holds_across_fit_range() {
        for temp in [3800.0, 4500.0, 5780.0, 6500.0, 7200.0] {
            let b = BoundarySet::for_temperature(temp).unwrap();
            assert!(b.recent_venus > b.runaway_greenhouse, "at {} K", temp);
            assert!(b.runaway_greenhouse > b.maximum_greenhouse, "at {} K", temp);
            assert!(b.maximum_greenhouse > b.early_mars, "at {} K", temp);
        }
    }

    #[test]
    fn cooler_stars_have_lower_boundary_fluxes() {
        let sun = BoundarySet::for_temperature(5780.0).unwrap();
        let m_dwarf = BoundarySet::for_temperature(3800.0).unwrap();
        for limit in HzLimit::ALL {
            assert!(m_dwarf.flux_for(limit) < sun.flux_for(limit));
        }
    }

    #[test]
    fn solar_distances_bracket_one_au() {
        let boundaries = BoundarySet::for_temperature(5780.0).unwrap();
        let distances = boundaries.distances_au(1.0).unwrap();

        // The Sun's conservative zone spans roughly 0.95-1.68 AU.
        assert!((distances.runaway_greenhouse - (1.0 / 1.107f64).sqrt()).abs() < 1e-12);
        assert!((distances.maximum_greenhouse - (1.0 / 0.356f64).sqrt()).abs() < 1e-12);
        assert!(distances.runaway_greenhouse < 1.0);
        assert!(distances.maximum_greenhouse > 1.0);
    }

    #[test]
    fn higher_boundary_flux_means_smaller_distance() {
        let boundaries = BoundarySet::for_temperature(5780.0).unwrap();
        let distances = boundaries.distances_au(1.0).unwrap();
        assert!(distances.recent_venus < distances.runaway_greenhouse);
        assert!(distances.runaway_greenhouse < distances.maximum_greenhouse);
        assert!(distances.maximum_greenhouse < distances.early_mars);
    }

    #[test]
    fn non_positive_temperature_errors() {
        assert!(BoundarySet::for_temperature(0.0).is_err());
        assert!(BoundarySet::for_temperature(-300.0).is_err());
        assert!(seff_boundary(f64::NAN, HzLimit::EarlyMars).is_err());
    }
}
