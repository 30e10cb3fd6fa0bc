//! WaterBoundaryIndex: bounding-box R-tree over the water zones with
//! exact point-in-polygon confirmation.

use geo::{Area, BoundingRect, Intersects};
use geo_types::{Point, Polygon, Rect};
use rstar::{RTree, RTreeObject, AABB};
use tracing::debug;

use abra_core::types::GeoPoint;

use crate::zones::WaterZone;

/// One indexed zone: polygon plus its precomputed bounding rect.
#[derive(Debug, Clone)]
struct IndexedZone {
    name: String,
    polygon: Polygon<f64>,
    bbox: Rect<f64>,
}

impl RTreeObject for IndexedZone {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(
            [self.bbox.min().x, self.bbox.min().y],
            [self.bbox.max().x, self.bbox.max().y],
        )
    }
}

/// Static spatial index answering "is this geographic point navigable
/// water". Built once at startup; read-only and freely shareable across
/// threads afterwards.
#[derive(Debug)]
pub struct WaterBoundaryIndex {
    tree: RTree<IndexedZone>,
    ready: bool,
}

impl WaterBoundaryIndex {
    /// Build the index from a set of water zones.
    ///
    /// Degenerate zones (fewer than 3 distinct vertices, or zero area)
    /// are dropped here and therefore contain no point.
    pub fn build(zones: Vec<WaterZone>) -> Self {
        let mut entries = Vec::with_capacity(zones.len());
        for zone in zones {
            if zone.vertex_count() < 3 {
                debug!(zone = zone.name(), "skipping degenerate ring");
                continue;
            }
            let polygon = zone.to_polygon();
            if polygon.unsigned_area() == 0.0 {
                debug!(zone = zone.name(), "skipping zero-area ring");
                continue;
            }
            let Some(bbox) = polygon.bounding_rect() else {
                continue;
            };
            entries.push(IndexedZone {
                name: zone.name().to_string(),
                polygon,
                bbox,
            });
        }
        Self {
            tree: RTree::bulk_load(entries),
            ready: true,
        }
    }

    /// The permit-navigation fallback used when the geometry asset is
    /// missing or malformed: reports not-ready and classifies every
    /// point as water so the simulator never hard-blocks on a bad asset.
    pub fn unavailable() -> Self {
        Self {
            tree: RTree::new(),
            ready: false,
        }
    }

    /// Whether the index was built from real geometry. When false,
    /// `is_water` always answers true and the host should surface an
    /// "environmental data unavailable" style warning.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// Number of zones actually indexed.
    pub fn zone_count(&self) -> usize {
        self.tree.size()
    }

    /// True if the point lies in any water zone.
    ///
    /// The R-tree prunes by bounding box first: a point outside every
    /// candidate bbox cannot be inside any polygon, so zero candidates
    /// is a guaranteed land answer, not an approximation. Containment
    /// is boundary-inclusive: a point exactly on a zone edge or vertex
    /// counts as water (pinned by tests — this tie-break affects
    /// collision fairness right at the shoreline).
    pub fn is_water(&self, geo: GeoPoint) -> bool {
        if !self.ready {
            return true;
        }
        let query = AABB::from_point([geo.lon, geo.lat]);
        let point = Point::new(geo.lon, geo.lat);
        self.tree
            .locate_in_envelope_intersecting(&query)
            .any(|zone| zone.polygon.intersects(&point))
    }

    /// Name of the first zone containing the point, if any. Diagnostic
    /// helper for the host's debug overlay.
    pub fn containing_zone(&self, geo: GeoPoint) -> Option<&str> {
        if !self.ready {
            return None;
        }
        let query = AABB::from_point([geo.lon, geo.lat]);
        let point = Point::new(geo.lon, geo.lat);
        self.tree
            .locate_in_envelope_intersecting(&query)
            .find(|zone| zone.polygon.intersects(&point))
            .map(|zone| zone.name.as_str())
    }
}
