//! Tide model for the ABRA sailing simulation kernel.
//!
//! Single-constituent (M2) harmonic height model and the derived
//! surface-current field over the theater's named sample points.
//! Stateless: every query re-evaluates from the injected constants, so
//! repeated queries for the same instant are idempotent and
//! order-independent.

pub use abra_core as core;

pub mod currents;
pub mod harmonic;

// Re-export key types for convenience.
pub use currents::{CurrentVector, SamplePoint, ABRA_SAMPLE_POINTS};
pub use harmonic::{TideModel, TideState};
