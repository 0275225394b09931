//! Library-wide constants.
//!
//! Collected here so the trajectory, projection and config code agree on
//! one value for each.

// ============================================================================
// Sampling
// ============================================================================

/// Samples in the vertical and slanted legs.
///
/// The build-up leg is not affected; it always carries `dip - 1` samples.
pub const SAMPLES_PER_LEG: usize = 50;

// ============================================================================
// Units
// ============================================================================

/// Meters per degree of latitude on the Earth's surface (approximate).
pub const METERS_PER_DEGREE: f64 = 111_000.0;

/// Build-up rates are quoted per 100 ft; one normalized unit is 30 m.
pub const BUILD_UP_NORMALIZATION: f64 = 30.0;

// ============================================================================
// Config Loading
// ============================================================================

/// Environment variable naming a TOML config file.
pub const CONFIG_ENV_VAR: &str = "GEOWELL_CONFIG";

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "geowell.toml";

// ============================================================================
// Default Well (Reykjanes)
// ============================================================================

/// Wellhead easting, ISN93 (m).
pub const DEFAULT_SURFACE_X: f64 = 317_000.0;

/// Wellhead northing, ISN93 (m).
pub const DEFAULT_SURFACE_Y: f64 = 374_000.0;

/// Wellhead elevation above sea level (m). Also the top of every
/// incumbent's synthetic depth axis unless configured otherwise.
pub const DEFAULT_SURFACE_ELEVATION_M: f64 = 20.0;

pub const DEFAULT_MEASURED_DEPTH_M: f64 = 2500.0;

pub const DEFAULT_KICK_OFF_POINT_M: f64 = 1000.0;

pub const DEFAULT_DIP_DEG: u32 = 20;

/// Degrees per 100 ft, before normalization.
pub const DEFAULT_BUILD_UP_DEG_PER_100FT: f64 = 1.5;

pub const DEFAULT_AZIMUTH_DEG: f64 = 30.0;

pub const DEFAULT_CASING_DEPTH_M: f64 = 800.0;
