//! CollisionQuery: the one integration point the physics loop needs.
//!
//! Thin composition of [`GeoProjection`] and [`WaterBoundaryIndex`],
//! called once per simulation tick (up to ~60 Hz). No allocation per
//! call beyond transient value types.

use abra_core::config::ReferenceFrame;
use abra_core::types::Vector2;

use crate::asset;
use crate::index::WaterBoundaryIndex;
use crate::projection::GeoProjection;

/// Per-tick water/land classification for a vessel position in the
/// local simulation plane.
#[derive(Debug)]
pub struct CollisionQuery {
    projection: GeoProjection,
    index: WaterBoundaryIndex,
}

impl CollisionQuery {
    pub fn new(projection: GeoProjection, index: WaterBoundaryIndex) -> Self {
        Self { projection, index }
    }

    /// Wire the packaged water geometry to a reference frame. If the
    /// asset fails to load this still succeeds, with `is_ready()` false
    /// and navigation permitted everywhere.
    pub fn packaged(frame: ReferenceFrame) -> Self {
        Self::new(GeoProjection::new(frame), asset::load_packaged())
    }

    /// True if the local position is over navigable water.
    pub fn check_water_collision(&self, local: Vector2) -> bool {
        self.index.is_water(self.projection.to_geo(local))
    }

    /// Whether real geometry backs the answers.
    pub fn is_ready(&self) -> bool {
        self.index.is_ready()
    }

    pub fn projection(&self) -> &GeoProjection {
        &self.projection
    }

    pub fn index(&self) -> &WaterBoundaryIndex {
        &self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_is_water() {
        // The local origin is the anchor, which sits in the outer bay.
        let query = CollisionQuery::packaged(ReferenceFrame::abra());
        assert!(query.is_ready());
        assert!(query.check_water_collision(Vector2::ZERO));
    }

    #[test]
    fn test_nearby_water_positions() {
        let query = CollisionQuery::packaged(ReferenceFrame::abra());
        // A few hundred meters around the anchor stays inside the bay.
        for local in [
            Vector2::new(300.0, 0.0),
            Vector2::new(-300.0, 0.0),
            Vector2::new(0.0, -400.0),
            Vector2::new(0.0, 400.0),
        ] {
            assert!(
                query.check_water_collision(local),
                "{local:?} should be water"
            );
        }
    }

    #[test]
    fn test_far_inland_is_land() {
        let query = CollisionQuery::packaged(ReferenceFrame::abra());
        // 40 km east of the anchor is far outside every zone bbox.
        assert!(!query.check_water_collision(Vector2::new(40_000.0, 0.0)));
        // 30 km south, deep inland up the valley.
        assert!(!query.check_water_collision(Vector2::new(0.0, 30_000.0)));
    }

    #[test]
    fn test_unready_query_permits_navigation() {
        let query = CollisionQuery::new(
            GeoProjection::abra(),
            WaterBoundaryIndex::unavailable(),
        );
        assert!(!query.is_ready());
        assert!(query.check_water_collision(Vector2::new(40_000.0, 0.0)));
    }
}
