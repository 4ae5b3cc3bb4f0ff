//! Zone membership classification from an object's incident flux.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

use super::boundaries::BoundarySet;

/// Where an object's incident flux falls relative to the four habitable-zone
/// boundaries.
///
/// The variants cover the whole flux axis from coldest to hottest, so every
/// finite positive flux classifies to exactly one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoneClassification {
    /// Flux below the Early Mars limit; not habitable (too cold).
    BeyondEarlyMars,
    /// Between the Early Mars and Maximum Greenhouse limits; optimistic
    /// habitable zone, outer extension.
    OptimisticOuter,
    /// Between the Maximum Greenhouse and Runaway Greenhouse limits; the
    /// conservative habitable zone.
    Conservative,
    /// Between the Runaway Greenhouse and Recent Venus limits; optimistic
    /// habitable zone, inner extension.
    OptimisticInner,
    /// Flux above the Recent Venus limit; not habitable (too hot).
    WithinRecentVenus,
}

impl ZoneClassification {
    /// Whether the object lies in either the conservative or optimistic
    /// habitable zone.
    pub fn is_habitable(self) -> bool {
        matches!(
            self,
            ZoneClassification::OptimisticOuter
                | ZoneClassification::Conservative
                | ZoneClassification::OptimisticInner
        )
    }

    /// One-sentence description used in CLI output.
    pub fn description(self) -> &'static str {
        match self {
            ZoneClassification::BeyondEarlyMars => {
                "This object is NOT in the Habitable Zone (Beyond Early Mars)"
            }
            ZoneClassification::OptimisticOuter => {
                "This object is in the Optimistic Habitable Zone (Between Early Mars and Maximum Greenhouse)"
            }
            ZoneClassification::Conservative => {
                "This object is in the Conservative Habitable Zone (Between Runaway Greenhouse and Maximum Greenhouse)"
            }
            ZoneClassification::OptimisticInner => {
                "This object is in the Optimistic Habitable Zone (Between Recent Venus and Runaway Greenhouse)"
            }
            ZoneClassification::WithinRecentVenus => {
                "This object is NOT in the Habitable Zone (Closer than Recent Venus)"
            }
        }
    }
}

/// Classify an object's incident flux against a boundary set.
///
/// Bands are evaluated from the coldest outward, first match wins; a flux
/// exactly on a boundary lands in the adjacent habitable band (the bands are
/// closed intervals). Higher flux means closer to the star.
///
/// # Errors
///
/// Returns an error if `object_flux` is non-finite or not positive.
///
/// # Examples
///
/// ```
/// use habzone_lib::hz::{classify_flux, BoundarySet, ZoneClassification};
///
/// let boundaries = BoundarySet::for_temperature(5780.0).unwrap();
/// let class = classify_flux(1.0, &boundaries).unwrap();
/// assert_eq!(class, ZoneClassification::Conservative);
/// ```
pub fn classify_flux(object_flux: f64, boundaries: &BoundarySet) -> Result<ZoneClassification> {
    if !object_flux.is_finite() || object_flux <= 0.0 {
        return Err(Error::InsolationCalculation {
            message: format!(
                "object flux must be finite and positive, got {}",
                object_flux
            ),
        });
    }

    let class = if object_flux < boundaries.early_mars {
        ZoneClassification::BeyondEarlyMars
    } else if object_flux <= boundaries.maximum_greenhouse {
        ZoneClassification::OptimisticOuter
    } else if object_flux <= boundaries.runaway_greenhouse {
        ZoneClassification::Conservative
    } else if object_flux <= boundaries.recent_venus {
        ZoneClassification::OptimisticInner
    } else {
        ZoneClassification::WithinRecentVenus
    };

    Ok(class)
}
