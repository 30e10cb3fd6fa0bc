//! Geographic projection: converts between lat/lon and simulation-plane
//! coordinates.
//!
//! Linear small-angle approximation around a fixed anchor point.
//! Accurate to well under 0.1% within a few kilometers of the anchor,
//! which covers the whole theater.

use abra_core::config::ReferenceFrame;
use abra_core::types::{GeoPoint, Vector2};

/// Bidirectional mapping between the local simulation plane and
/// geographic coordinates.
///
/// The anchor maps to the local origin. Sign convention (a common
/// source of bugs — pinned here and in tests): local +x is east,
/// local +z is SOUTH, so latitude DECREASES as z grows:
///
/// ```text
/// lat = anchor.lat - z * lat_scale
/// lon = anchor.lon + x * lon_scale
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GeoProjection {
    frame: ReferenceFrame,
}

impl GeoProjection {
    pub fn new(frame: ReferenceFrame) -> Self {
        Self { frame }
    }

    /// Projection for the default Abra de Bilbao theater.
    pub fn abra() -> Self {
        Self::new(ReferenceFrame::abra())
    }

    /// Convert a simulation-plane position (meters) to lat/lon.
    pub fn to_geo(&self, local: Vector2) -> GeoPoint {
        GeoPoint::new(
            self.frame.anchor.lat - local.z * self.frame.lat_scale,
            self.frame.anchor.lon + local.x * self.frame.lon_scale,
        )
    }

    /// Convert lat/lon to a simulation-plane position (meters).
    pub fn to_local(&self, geo: GeoPoint) -> Vector2 {
        Vector2::new(
            (geo.lon - self.frame.anchor.lon) / self.frame.lon_scale,
            (self.frame.anchor.lat - geo.lat) / self.frame.lat_scale,
        )
    }

    /// The reference frame this projection was built from.
    pub fn frame(&self) -> &ReferenceFrame {
        &self.frame
    }

    /// The geographic anchor (maps to the local origin).
    pub fn anchor(&self) -> GeoPoint {
        self.frame.anchor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_roundtrip() {
        let proj = GeoProjection::abra();
        for local in [
            Vector2::new(0.0, 0.0),
            Vector2::new(250.0, -480.0),
            Vector2::new(-1200.0, 900.0),
            Vector2::new(3000.0, 3000.0),
        ] {
            let geo = proj.to_geo(local);
            let back = proj.to_local(geo);
            assert!(
                (back.x - local.x).abs() < 1e-6,
                "x roundtrip: {} vs {}",
                local.x,
                back.x
            );
            assert!(
                (back.z - local.z).abs() < 1e-6,
                "z roundtrip: {} vs {}",
                local.z,
                back.z
            );
        }
    }

    #[test]
    fn test_geo_roundtrip() {
        let proj = GeoProjection::abra();
        let geo = GeoPoint::new(43.352, -3.025);
        let back = proj.to_geo(proj.to_local(geo));
        assert!((back.lat - geo.lat).abs() < 1e-10, "lat roundtrip");
        assert!((back.lon - geo.lon).abs() < 1e-10, "lon roundtrip");
    }

    #[test]
    fn test_anchor_maps_to_origin() {
        let proj = GeoProjection::abra();
        let local = proj.to_local(proj.anchor());
        assert!(local.x.abs() < 1e-9);
        assert!(local.z.abs() < 1e-9);
    }

    #[test]
    fn test_positive_z_is_south() {
        let proj = GeoProjection::abra();
        let south = proj.to_geo(Vector2::new(0.0, 1000.0));
        assert!(
            south.lat < proj.anchor().lat,
            "+z must decrease latitude, got {} from {}",
            south.lat,
            proj.anchor().lat
        );
        assert!((south.lon - proj.anchor().lon).abs() < 1e-12, "no lon drift");
    }

    #[test]
    fn test_scale_factors() {
        let proj = GeoProjection::abra();
        let east = proj.to_geo(Vector2::new(81_000.0, 0.0));
        assert!(
            (east.lon - (proj.anchor().lon + 1.0)).abs() < 1e-9,
            "81 km east should be one degree of longitude at 43°N"
        );
        let north = proj.to_geo(Vector2::new(0.0, -111_320.0));
        assert!(
            (north.lat - (proj.anchor().lat + 1.0)).abs() < 1e-9,
            "111.32 km north should be one degree of latitude"
        );
    }

    #[test]
    fn test_total_over_out_of_range_input() {
        // No panics or NaNs for positions far outside the operative
        // range; bounding vessel position is the caller's concern.
        let proj = GeoProjection::abra();
        let geo = proj.to_geo(Vector2::new(-9e7, 4e7));
        assert!(geo.lat.is_finite());
        assert!(geo.lon.is_finite());
    }
}
