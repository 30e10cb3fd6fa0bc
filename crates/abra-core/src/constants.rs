//! Kernel constants and tuning parameters.

// --- Reference frame (Abra de Bilbao theater) ---

/// Anchor latitude: Getxo harbor area, Abra de Bilbao.
pub const ANCHOR_LAT: f64 = 43.3485;

/// Anchor longitude.
pub const ANCHOR_LON: f64 = -3.0185;

/// Degrees of latitude per meter (nearly constant across the globe).
pub const LAT_DEG_PER_METER: f64 = 1.0 / 111_320.0;

/// Degrees of longitude per meter at ~43°N.
pub const LON_DEG_PER_METER: f64 = 1.0 / 81_000.0;

// --- Polar model ---

/// Displacement hull speed cap in knots (~24–30 ft cruiser).
pub const MAX_HULL_SPEED_KNOTS: f64 = 8.0;

/// Below this true wind speed the boat is treated as powerless.
/// A no-power-in-near-calm policy, not a physical limit.
pub const CALM_WIND_THRESHOLD_KNOTS: f64 = 1.0;

// --- Heel model ---

/// Base heel in degrees at the 15 kn reference wind.
pub const HEEL_BASE_DEG: f64 = 20.0;

/// Wind speed in knots producing the base heel.
pub const HEEL_REFERENCE_WIND_KNOTS: f64 = 15.0;

/// Hard cap on the heel estimate in degrees.
pub const HEEL_MAX_DEG: f64 = 35.0;

// --- Tide (M2 constituent, Abra de Bilbao) ---

/// Period of the dominant semi-diurnal lunar constituent in hours.
pub const M2_PERIOD_HOURS: f64 = 12.42;

/// Mean sea level above chart datum in meters.
pub const TIDE_MEAN_LEVEL_M: f64 = 2.50;

/// Tidal amplitude in meters (half the mean range).
pub const TIDE_AMPLITUDE_M: f64 = 1.50;

/// A known high water at Bilbao, hours since the Unix epoch
/// (2024-03-10 04:30 UTC).
pub const TIDE_REFERENCE_HIGH_WATER_HOURS: f64 = 475_012.5;

// --- Tidal currents ---

/// Compass heading of the flood (inbound) current: the rising tide
/// fills the bay toward the southeast.
pub const FLOOD_HEADING_DEG: f64 = 135.0;

/// Compass heading of the ebb (outbound) current, toward the northwest.
pub const EBB_HEADING_DEG: f64 = 315.0;

/// Normalized current intensity below which the water is slack.
pub const SLACK_INTENSITY_THRESHOLD: f64 = 0.1;
