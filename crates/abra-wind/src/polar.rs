//! Simplified polar model: point-of-sail bands and the dimensionless
//! speed factor.
//!
//! Both functions fold the input angle to [0, 180] first, so port and
//! starboard tacks are identical. The band boundaries are half-open
//! exactly as documented on [`PointOfSail`]; they drive the physics
//! and the UI labels and must not drift apart.

use abra_core::enums::PointOfSail;

use crate::apparent::fold_angle_deg;

/// Classify a relative wind angle (degrees off the bow, any range)
/// into a point of sail.
///
/// The no-go zone runs through [0, 45): the polar speed factor already
/// ramps up from 40°, but the boat is not close-hauled proper until
/// 45°.
pub fn classify(relative_wind_angle_deg: f64) -> PointOfSail {
    let angle = fold_angle_deg(relative_wind_angle_deg);
    if angle < 45.0 {
        PointOfSail::NoGo
    } else if angle < 60.0 {
        PointOfSail::CloseHauled
    } else if angle < 80.0 {
        PointOfSail::CloseReach
    } else if angle < 100.0 {
        PointOfSail::BeamReach
    } else if angle < 150.0 {
        PointOfSail::BroadReach
    } else {
        PointOfSail::Running
    }
}

/// Dimensionless fraction of the true wind speed the hull can convert
/// into boat speed at a given wind angle.
///
/// Piecewise-linear polar approximation for a small performance
/// cruiser:
///
/// ```text
/// [0, 40)    0.0          stalled
/// [40, 45)   0.0 -> 0.6   ramp out of the no-go zone
/// [45, 90)   0.6 -> 0.9
/// [90, 135)  0.9 -> 1.0   fastest slightly below a dead broad reach
/// [135, 180] 1.0 -> 0.7   slow dead downwind
/// ```
pub fn speed_factor(relative_wind_angle_deg: f64) -> f64 {
    let angle = fold_angle_deg(relative_wind_angle_deg);
    if angle < 40.0 {
        0.0
    } else if angle < 45.0 {
        (angle - 40.0) / 5.0 * 0.6
    } else if angle < 90.0 {
        0.6 + (angle - 45.0) / 45.0 * 0.3
    } else if angle < 135.0 {
        0.9 + (angle - 90.0) / 45.0 * 0.1
    } else {
        1.0 - (angle - 135.0) / 45.0 * 0.3
    }
}
