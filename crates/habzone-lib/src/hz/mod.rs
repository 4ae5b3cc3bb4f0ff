//! Habitable-zone boundary fits and zone classification.
//!
//! This module is organized into focused submodules:
//!
//! - [`boundaries`] - Kopparapu et al. 2014 boundary fits and boundary sets
//! - [`classify`] - Zone membership classification from incident flux
//! - [`constants`] - Shared constants used across calculations
//!
//! # Example
//!
//! ```
//! use habzone_lib::hz::{classify_flux, BoundarySet, ZoneClassification};
//! use habzone_lib::insolation::incident_flux;
//!
//! // A 1 Lsun, 5780 K star with an object at 1 AU.
//! let boundaries = BoundarySet::for_temperature(5780.0).unwrap();
//! let flux = incident_flux(1.0, 1.0).unwrap();
//!
//! let class = classify_flux(flux, &boundaries).unwrap();
//! assert_eq!(class, ZoneClassification::Conservative);
//! ```

pub mod boundaries;
pub mod classify;
pub mod constants;

pub use boundaries::{seff_boundary, BoundaryDistances, BoundarySet, HzLimit, LimitCoefficients};
pub use classify::{classify_flux, ZoneClassification};
pub use constants::{FIT_TEMP_MAX_K, FIT_TEMP_MIN_K, SOLAR_EFFECTIVE_TEMP_K};
