//! Fundamental geometric types.

use serde::{Deserialize, Serialize};

/// 2D vector in the simulation plane (meters for positions, knots for
/// velocities). Axis convention, matching the consuming renderer:
/// x = East, z = SOUTH. A vessel heading due north therefore has a
/// velocity with negative z.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub z: f64,
}

/// Geographic coordinate in decimal degrees (WGS84-like planar use).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl Vector2 {
    pub const ZERO: Vector2 = Vector2 { x: 0.0, z: 0.0 };

    pub const fn new(x: f64, z: f64) -> Self {
        Self { x, z }
    }

    /// Magnitude.
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.z * self.z).sqrt()
    }

    /// Squared magnitude (avoids the sqrt for comparisons).
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.z * self.z
    }

    pub fn dot(&self, other: Vector2) -> f64 {
        self.x * other.x + self.z * other.z
    }

    pub fn sub(&self, other: Vector2) -> Vector2 {
        Vector2::new(self.x - other.x, self.z - other.z)
    }

    pub fn add(&self, other: Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.z + other.z)
    }

    pub fn scale(&self, factor: f64) -> Vector2 {
        Vector2::new(self.x * factor, self.z * factor)
    }

    pub fn distance_to(&self, other: Vector2) -> f64 {
        self.sub(other).length()
    }

    /// Unit vector pointing toward a compass bearing (0° = North,
    /// clockwise). North is -z in the simulation plane.
    pub fn from_compass_deg(bearing_deg: f64) -> Vector2 {
        let rad = bearing_deg.to_radians();
        Vector2::new(rad.sin(), -rad.cos())
    }

    /// Compass bearing of this vector in degrees [0, 360).
    pub fn compass_deg(&self) -> f64 {
        self.x.atan2(-self.z).to_degrees().rem_euclid(360.0)
    }
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}
