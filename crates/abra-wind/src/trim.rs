//! Reference sail-trim angles for the ghost/overlay boat.

use abra_core::enums::PointOfSail;

use crate::polar::classify;

/// Idealized boom angle for the current wind angle, in degrees off the
/// centerline. Band-based (one reference angle per point of sail — the
/// half-wind-angle rule evaluated at each band's midpoint), plus a
/// fixed per-sail offset so a jib can be shown trimmed a few degrees
/// wider than the main. Clamped to [0, 90].
pub fn optimal_trim_angle(relative_wind_angle_deg: f64, sail_offset_deg: f64) -> f64 {
    let base = match classify(relative_wind_angle_deg) {
        PointOfSail::NoGo => 0.0,
        PointOfSail::CloseHauled => 25.0,
        PointOfSail::CloseReach => 35.0,
        PointOfSail::BeamReach => 45.0,
        PointOfSail::BroadReach => 60.0,
        PointOfSail::Running => 85.0,
    };
    (base + sail_offset_deg).clamp(0.0, 90.0)
}
