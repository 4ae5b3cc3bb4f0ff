//! Habzone library entry points.
//!
//! This crate computes habitable-zone boundaries around a star using the
//! Kopparapu et al. 2014 empirical fits (ApJL 787, L29; one Earth-mass
//! case) and classifies an orbiting object against them. Higher-level
//! consumers (CLI, tests) should only depend on the items exported here
//! instead of reimplementing behavior.

#![deny(warnings)]

pub mod error;
pub mod hz;
pub mod insolation;
pub mod report;

pub use error::{Error, Result};
pub use hz::{
    classify_flux, seff_boundary, BoundaryDistances, BoundarySet, HzLimit, LimitCoefficients,
    ZoneClassification,
};
pub use insolation::{distance_for_flux, incident_flux};
pub use report::{assess_habitability, HabitabilityReport, OrbitalParameters, StellarParameters};
