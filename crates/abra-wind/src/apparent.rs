//! Apparent wind: the wind experienced aboard a moving vessel.

use serde::{Deserialize, Serialize};

use abra_core::types::Vector2;

/// True wind as supplied by the environment per query. Never stored by
/// the kernel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrueWind {
    /// Scalar speed in knots. Negative inputs are clamped to 0 at use.
    pub speed_knots: f64,
    /// Compass direction the wind blows FROM, in degrees.
    pub direction_deg: f64,
}

impl TrueWind {
    pub fn new(speed_knots: f64, direction_deg: f64) -> Self {
        Self {
            speed_knots,
            direction_deg,
        }
    }

    /// Ground-frame velocity vector of the air mass, in knots. Wind
    /// FROM bearing `d` moves TOWARD `d + 180°`.
    pub fn velocity(&self) -> Vector2 {
        let speed = self.speed_knots.max(0.0);
        Vector2::from_compass_deg(self.direction_deg.rem_euclid(360.0)).scale(-speed)
    }
}

/// Apparent wind result: vector plus precomputed magnitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApparentWind {
    /// Ground-frame apparent wind velocity in knots.
    pub vector: Vector2,
    /// Magnitude of the vector, knots.
    pub speed_knots: f64,
}

impl ApparentWind {
    /// Compass direction the apparent wind blows FROM.
    pub fn direction_from_deg(&self) -> f64 {
        self.vector.scale(-1.0).compass_deg()
    }
}

/// Apparent wind = true wind minus vessel velocity (both ground frame,
/// knots). Standard vector subtraction; no frame rotation happens here.
pub fn apparent_wind(true_wind: &TrueWind, vessel_velocity: Vector2) -> ApparentWind {
    let vector = true_wind.velocity().sub(vessel_velocity);
    ApparentWind {
        vector,
        speed_knots: vector.length(),
    }
}

/// Signed smallest difference from heading to the wind-from bearing,
/// in (-180, 180]. Positive means the wind is on the starboard side.
pub fn relative_angle_deg(heading_deg: f64, wind_from_deg: f64) -> f64 {
    let diff = (wind_from_deg - heading_deg).rem_euclid(360.0);
    if diff > 180.0 {
        diff - 360.0
    } else {
        diff
    }
}

/// Fold any angle to [0, 180] so port and starboard are treated
/// identically by the polar model.
pub fn fold_angle_deg(angle_deg: f64) -> f64 {
    let normalized = angle_deg.rem_euclid(360.0);
    if normalized > 180.0 {
        360.0 - normalized
    } else {
        normalized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stationary_vessel_feels_true_wind() {
        let tw = TrueWind::new(10.0, 0.0);
        let aw = apparent_wind(&tw, Vector2::ZERO);
        assert!((aw.speed_knots - 10.0).abs() < 1e-10);
        assert!(
            (aw.direction_from_deg() - 0.0).abs() < 1e-9,
            "northerly stays northerly, got {}",
            aw.direction_from_deg()
        );
    }

    #[test]
    fn test_motoring_into_calm_makes_headwind() {
        // No true wind, vessel moving north at 5 kn: apparent wind is
        // a 5 kn headwind from the north.
        let tw = TrueWind::new(0.0, 0.0);
        let vessel = Vector2::from_compass_deg(0.0).scale(5.0);
        let aw = apparent_wind(&tw, vessel);
        assert!((aw.speed_knots - 5.0).abs() < 1e-10);
        assert!((aw.direction_from_deg() - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_running_dead_downwind_reduces_apparent() {
        // 10 kn from the north, vessel sailing south at 4 kn:
        // 6 kn apparent from the north.
        let tw = TrueWind::new(10.0, 0.0);
        let vessel = Vector2::from_compass_deg(180.0).scale(4.0);
        let aw = apparent_wind(&tw, vessel);
        assert!((aw.speed_knots - 6.0).abs() < 1e-10);
        assert!((aw.direction_from_deg() - 0.0).abs() < 1e-9);
    }

    #[test]
    fn test_beam_wind_shifts_forward() {
        // 10 kn from the east, vessel north at 10 kn: apparent 45° off
        // the starboard bow at 10√2 kn.
        let tw = TrueWind::new(10.0, 90.0);
        let vessel = Vector2::from_compass_deg(0.0).scale(10.0);
        let aw = apparent_wind(&tw, vessel);
        assert!((aw.speed_knots - 200.0_f64.sqrt()).abs() < 1e-9);
        assert!(
            (aw.direction_from_deg() - 45.0).abs() < 1e-9,
            "apparent from {}",
            aw.direction_from_deg()
        );
    }

    #[test]
    fn test_negative_speed_clamped() {
        let tw = TrueWind::new(-5.0, 90.0);
        let aw = apparent_wind(&tw, Vector2::ZERO);
        assert!(aw.speed_knots.abs() < 1e-10, "negative speed is calm");
    }

    #[test]
    fn test_relative_angle_sides() {
        // Heading north, wind from the east: 90° to starboard.
        assert!((relative_angle_deg(0.0, 90.0) - 90.0).abs() < 1e-10);
        // Wind from the west: 90° to port.
        assert!((relative_angle_deg(0.0, 270.0) + 90.0).abs() < 1e-10);
        // Dead ahead and dead astern.
        assert!(relative_angle_deg(45.0, 45.0).abs() < 1e-10);
        assert!((relative_angle_deg(0.0, 180.0) - 180.0).abs() < 1e-10);
    }

    #[test]
    fn test_fold_angle() {
        assert!((fold_angle_deg(0.0) - 0.0).abs() < 1e-10);
        assert!((fold_angle_deg(90.0) - 90.0).abs() < 1e-10);
        assert!((fold_angle_deg(180.0) - 180.0).abs() < 1e-10);
        assert!((fold_angle_deg(270.0) - 90.0).abs() < 1e-10);
        assert!((fold_angle_deg(-45.0) - 45.0).abs() < 1e-10);
        assert!((fold_angle_deg(725.0) - 5.0).abs() < 1e-10);
    }
}
