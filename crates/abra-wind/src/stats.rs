//! WindStats: the per-query performance estimate handed to the UI.

use serde::Serialize;

use abra_core::constants::{
    CALM_WIND_THRESHOLD_KNOTS, HEEL_BASE_DEG, HEEL_MAX_DEG, HEEL_REFERENCE_WIND_KNOTS,
    MAX_HULL_SPEED_KNOTS,
};
use abra_core::enums::PointOfSail;

use crate::apparent::fold_angle_deg;
use crate::polar::{classify, speed_factor};

/// Sailing-performance estimate for one wind angle / wind speed pair.
/// Recomputed fresh on every call; never cached.
#[derive(Debug, Clone, Serialize)]
pub struct WindStats {
    pub point_of_sail: PointOfSail,
    /// Display label for the point of sail.
    pub label: &'static str,
    /// Polar factor actually applied, for the UI's polar read-out.
    pub speed_factor: f64,
    /// Target boat speed in knots after the hull-speed cap.
    pub boat_speed_knots: f64,
    /// Velocity made good toward the wind source, knots. Positive
    /// upwind, negative downwind.
    pub vmg_knots: f64,
    /// Estimated heel angle in degrees, [0, 35].
    pub heel_angle_deg: f64,
    /// Sail-trim guidance for this point of sail.
    pub trim_advice: &'static [&'static str],
    /// One-line tactical note.
    pub strategy: &'static str,
}

/// Compute the full performance estimate.
///
/// `relative_wind_angle_deg` is the wind angle off the bow (any range;
/// folded to [0, 180]). `wind_speed_knots` below 0 is treated as calm.
/// Below 1 kn of wind the boat speed is forced to zero — a
/// no-power-in-near-calm policy so students see a becalmed boat rather
/// than a creeping artifact.
pub fn estimate(relative_wind_angle_deg: f64, wind_speed_knots: f64) -> WindStats {
    let angle = fold_angle_deg(relative_wind_angle_deg);
    let wind_speed = wind_speed_knots.max(0.0);

    let point_of_sail = classify(angle);
    let factor = speed_factor(angle);

    let boat_speed = if wind_speed < CALM_WIND_THRESHOLD_KNOTS {
        0.0
    } else {
        (wind_speed * factor).min(MAX_HULL_SPEED_KNOTS)
    };

    let vmg = boat_speed * angle.to_radians().cos();

    WindStats {
        point_of_sail,
        label: point_of_sail.label(),
        speed_factor: factor,
        boat_speed_knots: boat_speed,
        vmg_knots: vmg,
        heel_angle_deg: heel_angle(angle, wind_speed),
        trim_advice: trim_advice(point_of_sail),
        strategy: strategy(point_of_sail),
    }
}

/// Triangular heel approximation: flat zero head-to-wind and dead
/// downwind, a wind-scaled plateau through the reaching band, linear
/// decay past the beam. Always within [0, 35] degrees.
pub fn heel_angle(relative_wind_angle_deg: f64, wind_speed_knots: f64) -> f64 {
    let angle = fold_angle_deg(relative_wind_angle_deg);
    let wind_speed = wind_speed_knots.max(0.0);

    if angle <= 40.0 || angle >= 160.0 {
        return 0.0;
    }
    let base = HEEL_BASE_DEG * (wind_speed / HEEL_REFERENCE_WIND_KNOTS);
    let heel = if angle < 90.0 {
        base
    } else {
        base * (1.0 - (angle - 90.0) / 90.0)
    };
    heel.clamp(0.0, HEEL_MAX_DEG)
}

fn trim_advice(point_of_sail: PointOfSail) -> &'static [&'static str] {
    match point_of_sail {
        PointOfSail::NoGo => &["Sails luffing.", "No steerage way."],
        PointOfSail::CloseHauled => &[
            "Sheet the main hard, traveler to windward.",
            "Jib sheeted all the way in.",
        ],
        PointOfSail::CloseReach => &[
            "Ease the sheets slightly.",
            "Main traveler centered.",
        ],
        PointOfSail::BeamReach => &[
            "Sails out to roughly 45 degrees.",
            "Trim for clean flow along the whole sail.",
        ],
        PointOfSail::BroadReach => &[
            "Ease the sheets well out.",
            "Tension the vang to flatten the leech.",
        ],
        PointOfSail::Running => &[
            "Sails fully eased.",
            "Consider goosewinging the headsail.",
        ],
    }
}

fn strategy(point_of_sail: PointOfSail) -> &'static str {
    match point_of_sail {
        PointOfSail::NoGo => "Dead zone. Bear away to regain speed.",
        PointOfSail::CloseHauled => "Best VMG to windward. Watch the headsail telltales.",
        PointOfSail::CloseReach => "Fast, comfortable heading with a good speed/course trade.",
        PointOfSail::BeamReach => "Fastest point of sail. Luff up a touch in the gusts.",
        PointOfSail::BroadReach => "Top speed when planing in strong wind.",
        PointOfSail::Running => "Guard against an accidental gybe. Unstable course in waves.",
    }
}
