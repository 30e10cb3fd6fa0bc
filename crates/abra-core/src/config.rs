//! Immutable kernel configuration.
//!
//! These objects are constructed once at startup and injected into the
//! components that need them — never held as global state — so multiple
//! simulated sessions with different parameters can coexist in one
//! process.

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::types::GeoPoint;

/// Linear mapping between the local simulation plane and geographic
/// coordinates, anchored at a fixed reference point.
///
/// Valid within a few kilometers of the anchor; the small-angle planar
/// approximation degrades beyond that.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferenceFrame {
    /// Geographic point mapped to the local origin.
    pub anchor: GeoPoint,
    /// Degrees of latitude per meter.
    pub lat_scale: f64,
    /// Degrees of longitude per meter at the anchor's latitude.
    pub lon_scale: f64,
}

impl ReferenceFrame {
    pub fn new(anchor: GeoPoint, lat_scale: f64, lon_scale: f64) -> Self {
        Self {
            anchor,
            lat_scale,
            lon_scale,
        }
    }

    /// The default theater: Getxo harbor area, Abra de Bilbao.
    pub fn abra() -> Self {
        Self {
            anchor: GeoPoint::new(constants::ANCHOR_LAT, constants::ANCHOR_LON),
            lat_scale: constants::LAT_DEG_PER_METER,
            lon_scale: constants::LON_DEG_PER_METER,
        }
    }
}

/// Constants of the single-constituent harmonic tide model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TideConstants {
    /// Constituent period in hours.
    pub period_hours: f64,
    /// Mean water level above chart datum in meters.
    pub mean_level_m: f64,
    /// Amplitude in meters.
    pub amplitude_m: f64,
    /// A known high water instant, hours since the Unix epoch. Phase
    /// zero (peak height) occurs here and every period thereafter.
    pub reference_high_water_hours: f64,
}

impl TideConstants {
    /// M2 constituent fitted to the Abra de Bilbao.
    pub fn abra() -> Self {
        Self {
            period_hours: constants::M2_PERIOD_HOURS,
            mean_level_m: constants::TIDE_MEAN_LEVEL_M,
            amplitude_m: constants::TIDE_AMPLITUDE_M,
            reference_high_water_hours: constants::TIDE_REFERENCE_HIGH_WATER_HOURS,
        }
    }
}
