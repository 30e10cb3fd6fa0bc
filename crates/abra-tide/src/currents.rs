//! Tidal surface currents over the theater's sample grid.
//!
//! The whole estuary shares one of exactly two headings — flood
//! (inbound, filling the bay) or ebb (outbound) — scaled by a single
//! intensity. There is no per-point variation in this version; the
//! coarse two-heading model is a deliberate, documented simplification
//! carried over from the source data rather than an oversight to fix
//! silently.

use serde::Serialize;

use abra_core::constants::{EBB_HEADING_DEG, FLOOD_HEADING_DEG};
use abra_core::enums::{CurrentRegime, TideTrend};
use abra_core::types::GeoPoint;

use crate::harmonic::TideModel;

/// A named location where the UI draws a current arrow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SamplePoint {
    pub name: &'static str,
    pub position: GeoPoint,
}

/// The fixed current-arrow grid across the Abra.
pub const ABRA_SAMPLE_POINTS: [SamplePoint; 10] = [
    SamplePoint {
        name: "santurtzi-breakwater",
        position: GeoPoint::new(43.35, -3.04),
    },
    SamplePoint {
        name: "abra-center",
        position: GeoPoint::new(43.35, -3.02),
    },
    SamplePoint {
        name: "galea-approach",
        position: GeoPoint::new(43.35, -3.00),
    },
    SamplePoint {
        name: "santurtzi-harbor",
        position: GeoPoint::new(43.34, -3.04),
    },
    SamplePoint {
        name: "abra-south",
        position: GeoPoint::new(43.34, -3.02),
    },
    SamplePoint {
        name: "arriluze",
        position: GeoPoint::new(43.34, -3.00),
    },
    SamplePoint {
        name: "portugalete-channel",
        position: GeoPoint::new(43.33, -3.03),
    },
    SamplePoint {
        name: "nervion-mouth",
        position: GeoPoint::new(43.33, -3.01),
    },
    SamplePoint {
        name: "zierbena-roadstead",
        position: GeoPoint::new(43.36, -3.05),
    },
    SamplePoint {
        name: "abra-north",
        position: GeoPoint::new(43.36, -3.03),
    },
];

/// Current at one sample point, recomputed fresh per query.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct CurrentVector {
    /// Sample point name.
    pub name: &'static str,
    /// Sample point location.
    pub position: GeoPoint,
    /// Compass heading the water moves toward, degrees.
    pub heading_deg: f64,
    /// Normalized strength, [0, 1]. Zero at high/low water.
    pub intensity: f64,
    /// Flood (rising tide) or ebb (falling).
    pub regime: CurrentRegime,
}

/// Evaluate the current field at `t_hours` (hours since the Unix
/// epoch).
pub fn field(model: &TideModel, t_hours: f64) -> Vec<CurrentVector> {
    let intensity = model.current_intensity(t_hours);
    let (regime, heading_deg) = match model.trend(t_hours) {
        TideTrend::Rising => (CurrentRegime::Flooding, FLOOD_HEADING_DEG),
        TideTrend::Falling => (CurrentRegime::Ebbing, EBB_HEADING_DEG),
    };
    model
        .sample_points()
        .iter()
        .map(|point| CurrentVector {
            name: point.name,
            position: point.position,
            heading_deg,
            intensity,
            regime,
        })
        .collect()
}
