//! Wind model for the ABRA sailing simulation kernel.
//!
//! Apparent-wind computation, point-of-sail classification, the polar
//! speed model, and the derived performance/trim guidance shown to
//! students. Everything here is a pure function over per-call inputs.

pub use abra_core as core;

pub mod apparent;
pub mod polar;
pub mod stats;
pub mod trim;

// Re-export key types for convenience.
pub use apparent::{apparent_wind, fold_angle_deg, relative_angle_deg, ApparentWind, TrueWind};
pub use polar::{classify, speed_factor};
pub use stats::{estimate, WindStats};
pub use trim::optimal_trim_angle;
