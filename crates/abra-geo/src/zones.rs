//! Water zones: named closed polygons of navigable water in
//! geographic coordinates.

use geo_types::{LineString, Polygon};

use abra_core::types::GeoPoint;

/// A named ring of geographic points enclosing navigable water.
///
/// The ring is stored explicitly closed (first point equals last).
/// Zones are loaded once from the packaged asset and never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct WaterZone {
    name: String,
    ring: Vec<GeoPoint>,
}

impl WaterZone {
    /// Build a zone from an ordered ring, closing it if the asset left
    /// it open.
    pub fn new(name: impl Into<String>, mut ring: Vec<GeoPoint>) -> Self {
        if let (Some(first), Some(last)) = (ring.first().copied(), ring.last().copied()) {
            if first != last {
                ring.push(first);
            }
        }
        Self {
            name: name.into(),
            ring,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The closed ring, first point equal to the last.
    pub fn ring(&self) -> &[GeoPoint] {
        &self.ring
    }

    /// Number of distinct vertices (closing point not counted twice).
    pub fn vertex_count(&self) -> usize {
        match self.ring.len() {
            0 => 0,
            n => n - 1,
        }
    }

    /// Convert to a `geo` polygon. Coordinate mapping: x = lon, y = lat.
    pub fn to_polygon(&self) -> Polygon<f64> {
        let coords: Vec<(f64, f64)> = self.ring.iter().map(|p| (p.lon, p.lat)).collect();
        Polygon::new(LineString::from(coords), vec![])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_ring_is_closed() {
        let zone = WaterZone::new(
            "triangle",
            vec![
                GeoPoint::new(43.0, -3.0),
                GeoPoint::new(43.0, -2.9),
                GeoPoint::new(43.1, -2.95),
            ],
        );
        assert_eq!(zone.ring().len(), 4, "closing point appended");
        assert_eq!(zone.ring().first(), zone.ring().last());
        assert_eq!(zone.vertex_count(), 3);
    }

    #[test]
    fn test_closed_ring_is_untouched() {
        let ring = vec![
            GeoPoint::new(43.0, -3.0),
            GeoPoint::new(43.0, -2.9),
            GeoPoint::new(43.1, -2.95),
            GeoPoint::new(43.0, -3.0),
        ];
        let zone = WaterZone::new("triangle", ring.clone());
        assert_eq!(zone.ring(), ring.as_slice());
        assert_eq!(zone.vertex_count(), 3);
    }

    #[test]
    fn test_polygon_coordinate_order() {
        // x must be longitude, y latitude — pinned because swapping
        // them silently breaks every containment test.
        let zone = WaterZone::new(
            "quad",
            vec![
                GeoPoint::new(10.0, 20.0),
                GeoPoint::new(10.0, 21.0),
                GeoPoint::new(11.0, 21.0),
                GeoPoint::new(11.0, 20.0),
            ],
        );
        let poly = zone.to_polygon();
        let first = poly.exterior().0[0];
        assert!((first.x - 20.0).abs() < 1e-12, "x is longitude");
        assert!((first.y - 10.0).abs() < 1e-12, "y is latitude");
    }
}
