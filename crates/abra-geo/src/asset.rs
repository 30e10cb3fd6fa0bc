//! Packaged water-geometry asset and its loader.
//!
//! The asset is a JSON document of named rings in geographic
//! coordinates, embedded at compile time. Load failures are never
//! fatal: the loader degrades to the permit-navigation fallback and
//! leaves the readiness flag down for the host to surface.

use serde::Deserialize;
use thiserror::Error;
use tracing::{info, warn};

use abra_core::types::GeoPoint;

use crate::index::WaterBoundaryIndex;
use crate::zones::WaterZone;

/// The packaged water geometry for the Abra de Bilbao theater.
pub const PACKAGED_WATER_ZONES: &str = include_str!("../assets/water-zones.json");

/// Errors raised while parsing a water-zone asset.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("malformed water-zone asset: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("water-zone asset contains no zones")]
    Empty,
}

/// Raw asset schema. Ring coordinates are `[lon, lat]` pairs (GeoJSON
/// order, preserved from the upstream geometry export).
#[derive(Debug, Deserialize)]
struct RawAsset {
    #[allow(dead_code)]
    theater: String,
    zones: Vec<RawZone>,
}

#[derive(Debug, Deserialize)]
struct RawZone {
    name: String,
    ring: Vec<[f64; 2]>,
}

/// Parse an asset document into water zones.
pub fn parse_zones(json: &str) -> Result<Vec<WaterZone>, GeometryError> {
    let raw: RawAsset = serde_json::from_str(json)?;
    if raw.zones.is_empty() {
        return Err(GeometryError::Empty);
    }
    Ok(raw
        .zones
        .into_iter()
        .map(|zone| {
            let ring = zone
                .ring
                .iter()
                .map(|&[lon, lat]| GeoPoint::new(lat, lon))
                .collect();
            WaterZone::new(zone.name, ring)
        })
        .collect())
}

/// Build the water-boundary index from the packaged asset.
///
/// On any parse failure this returns `WaterBoundaryIndex::unavailable()`
/// (navigation permitted everywhere, `is_ready() == false`) instead of
/// propagating an error — a missing asset must degrade the simulator,
/// not stop it.
pub fn load_packaged() -> WaterBoundaryIndex {
    from_json(PACKAGED_WATER_ZONES)
}

/// Build the index from an arbitrary asset document with the same
/// degrade-on-failure contract as [`load_packaged`].
pub fn from_json(json: &str) -> WaterBoundaryIndex {
    match parse_zones(json) {
        Ok(zones) => {
            let index = WaterBoundaryIndex::build(zones);
            info!(zones = index.zone_count(), "water boundary index built");
            index
        }
        Err(err) => {
            warn!(%err, "water geometry unavailable, permitting navigation everywhere");
            WaterBoundaryIndex::unavailable()
        }
    }
}
