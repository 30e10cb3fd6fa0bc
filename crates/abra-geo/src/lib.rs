//! Geospatial subsystem for the ABRA sailing simulation kernel.
//!
//! Local-frame ↔ geographic projection, the water-boundary spatial
//! index over the theater's coastline polygons, and the collision
//! query the physics integrator calls every tick.

pub use abra_core as core;

pub mod asset;
pub mod collision;
pub mod index;
pub mod projection;
pub mod zones;

// Re-export key types for convenience.
pub use asset::{from_json, load_packaged, parse_zones, GeometryError};
pub use collision::CollisionQuery;
pub use index::WaterBoundaryIndex;
pub use projection::GeoProjection;
pub use zones::WaterZone;
