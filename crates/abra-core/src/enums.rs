//! Enumeration types used throughout the kernel.

use serde::{Deserialize, Serialize};

/// Point of sail: the vessel's heading classified relative to the wind.
///
/// Band boundaries (on the wind angle folded to [0, 180], half-open as
/// listed) drive both the polar speed factor and UI labeling:
/// `[0,45)` NoGo, `[45,60)` CloseHauled, `[60,80)` CloseReach,
/// `[80,100)` BeamReach, `[100,150)` BroadReach, `[150,180]` Running.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PointOfSail {
    /// Head to wind: sails stalled, no drive.
    #[default]
    NoGo,
    /// As close to the wind as the boat will point.
    CloseHauled,
    /// Between close-hauled and a beam reach.
    CloseReach,
    /// Wind abeam.
    BeamReach,
    /// Wind over the quarter.
    BroadReach,
    /// Dead downwind.
    Running,
}

impl PointOfSail {
    /// Human-readable label for HUD/overlay use.
    pub fn label(&self) -> &'static str {
        match self {
            PointOfSail::NoGo => "Head to Wind (No Go Zone)",
            PointOfSail::CloseHauled => "Close Hauled",
            PointOfSail::CloseReach => "Close Reach",
            PointOfSail::BeamReach => "Beam Reach",
            PointOfSail::BroadReach => "Broad Reach",
            PointOfSail::Running => "Running",
        }
    }
}

/// Direction the tide height is moving.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TideTrend {
    #[default]
    Rising,
    Falling,
}

/// Tidal current regime. Flood fills the bay (inbound), ebb empties it
/// (outbound).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CurrentRegime {
    #[default]
    Flooding,
    Ebbing,
}
