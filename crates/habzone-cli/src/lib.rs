//! Habzone CLI library.
//!
//! This crate provides command-line interface utilities for the habzone
//! calculator, including report formatting and interactive input prompts.

pub mod output;
pub mod prompt;
