//! Targeting Configuration - default drilling parameters and tuning as TOML
//!
//! Each section implements `Default` with the built-in Reykjanes well, so an
//! empty file (or no file at all) yields a complete, valid configuration.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

use super::defaults::{
    CONFIG_ENV_VAR, DEFAULT_AZIMUTH_DEG, DEFAULT_BUILD_UP_DEG_PER_100FT, DEFAULT_CASING_DEPTH_M,
    DEFAULT_DIP_DEG, DEFAULT_KICK_OFF_POINT_M, DEFAULT_MEASURED_DEPTH_M,
    DEFAULT_SURFACE_ELEVATION_M, DEFAULT_SURFACE_X, DEFAULT_SURFACE_Y, LOCAL_CONFIG_FILE,
};
use crate::distance::DistanceSettings;
use crate::types::{CoordinateSystem, DrillingParameters};

// ============================================================================
// Top-Level Config
// ============================================================================

/// Root configuration for a targeting run.
///
/// Load with `TargetingConfig::load()` which searches:
/// 1. `$GEOWELL_CONFIG` env var
/// 2. `./geowell.toml`
/// 3. Built-in defaults
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TargetingConfig {
    /// Proposed well identification
    #[serde(default)]
    pub well: WellInfo,

    /// Default drilling parameters
    #[serde(default)]
    pub trajectory: TrajectoryConfig,

    /// Wellhead coordinate handling
    #[serde(default)]
    pub projection: ProjectionConfig,

    /// Incumbent distance computation
    #[serde(default)]
    pub distance: DistanceConfig,
}

impl TargetingConfig {
    /// Load configuration using the standard search order, falling back to
    /// the next source whenever one is missing or invalid.
    pub fn load() -> Self {
        if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), well = %config.well.name, "Loaded targeting config from {CONFIG_ENV_VAR}");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from {CONFIG_ENV_VAR}, falling back");
                    }
                }
            } else {
                warn!(path = %path, "{CONFIG_ENV_VAR} points to non-existent file, falling back");
            }
        }

        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!(well = %config.well.name, "Loaded targeting config from ./{LOCAL_CONFIG_FILE}");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./{LOCAL_CONFIG_FILE}, using defaults");
                }
            }
        }

        info!("No {LOCAL_CONFIG_FILE} found, using built-in defaults");
        Self::default()
    }

    /// Load and validate a specific TOML file. No fallback.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        Self::from_toml_str(&contents).map_err(|e| match e {
            ConfigError::Parse(_, inner) => ConfigError::Parse(path.to_path_buf(), inner),
            other => other,
        })
    }

    /// Parse and validate TOML text. Unknown keys are logged, not rejected.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        for w in super::validation::validate_unknown_keys(contents) {
            warn!("{}", w);
        }

        let config: Self =
            toml::from_str(contents).map_err(|e| ConfigError::Parse(PathBuf::from("<inline>"), e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize the current config to a TOML string.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        let contents = self.to_toml()?;
        std::fs::write(path, contents).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        info!(path = %path.display(), "Targeting config saved");
        Ok(())
    }

    /// Validate every section, collecting all problems.
    ///
    /// Drilling parameters go through the same checks the trajectory builder
    /// applies, so a config that validates always builds.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors: Vec<String> = Vec::new();

        if let Err(e) = self.drilling_parameters().validate() {
            errors.extend(e.violations().iter().map(|v| format!("trajectory: {v}")));
        }

        if !self.distance.reference_elevation_m.is_finite() {
            errors.push(format!(
                "distance.reference_elevation_m must be finite (got {})",
                self.distance.reference_elevation_m
            ));
        }

        let (range_errors, range_warnings) = super::validation::validate_physical_ranges(self);
        errors.extend(range_errors);
        for w in &range_warnings {
            warn!("{}", w);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Drilling parameters with the build-up rate normalized from
    /// degrees per 100 ft.
    pub fn drilling_parameters(&self) -> DrillingParameters {
        let t = &self.trajectory;
        DrillingParameters {
            surface_x: t.surface_x,
            surface_y: t.surface_y,
            surface_elevation: t.surface_elevation_m,
            measured_depth: t.measured_depth_m,
            kick_off_point: Some(t.kick_off_point_m),
            dip: t.dip_deg,
            build_up_rate: 0.0,
            azimuth: t.azimuth_deg,
            casing_depth: t.casing_depth_m,
        }
        .with_build_up_per_100ft(t.build_up_deg_per_100ft)
    }

    pub fn distance_settings(&self) -> DistanceSettings {
        DistanceSettings {
            reference_elevation: self.distance.reference_elevation_m,
            parallel: self.distance.parallel,
        }
    }

    pub fn coordinate_system(&self) -> CoordinateSystem {
        self.projection.coordinate_system
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config I/O error ({}): {}", .0.display(), .1)]
    Io(PathBuf, #[source] std::io::Error),

    #[error("Config parse error ({}): {}", .0.display(), .1)]
    Parse(PathBuf, #[source] toml::de::Error),

    #[error("Config serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("Config validation failed:\n{}", format_errors(.0))]
    Validation(Vec<String>),
}

fn format_errors(errors: &[String]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {e}"))
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Well Info
// ============================================================================

/// Identification metadata. Appears in logs and reports only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WellInfo {
    #[serde(default = "default_well_name")]
    pub name: String,

    /// Geothermal field
    #[serde(default = "default_field")]
    pub field: String,
}

fn default_well_name() -> String {
    "PROPOSED".to_string()
}
fn default_field() -> String {
    "Reykjanes".to_string()
}

impl Default for WellInfo {
    fn default() -> Self {
        Self {
            name: default_well_name(),
            field: default_field(),
        }
    }
}

// ============================================================================
// Trajectory
// ============================================================================

/// Default drilling parameters, in operator units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrajectoryConfig {
    #[serde(default = "default_surface_x")]
    pub surface_x: f64,

    #[serde(default = "default_surface_y")]
    pub surface_y: f64,

    /// Wellhead elevation above sea level (m)
    #[serde(default = "default_surface_elevation")]
    pub surface_elevation_m: f64,

    /// Total along-hole length (m)
    #[serde(default = "default_measured_depth")]
    pub measured_depth_m: f64,

    /// Kick-off depth (m). 0 means a vertical well.
    #[serde(default = "default_kick_off_point")]
    pub kick_off_point_m: f64,

    /// Inclination from vertical after build-up (whole degrees)
    #[serde(default = "default_dip")]
    pub dip_deg: u32,

    /// Build-up rate (degrees per 100 ft)
    #[serde(default = "default_build_up")]
    pub build_up_deg_per_100ft: f64,

    /// Bearing, degrees clockwise from north
    #[serde(default = "default_azimuth")]
    pub azimuth_deg: f64,

    #[serde(default = "default_casing_depth")]
    pub casing_depth_m: f64,
}

fn default_surface_x() -> f64 { DEFAULT_SURFACE_X }
fn default_surface_y() -> f64 { DEFAULT_SURFACE_Y }
fn default_surface_elevation() -> f64 { DEFAULT_SURFACE_ELEVATION_M }
fn default_measured_depth() -> f64 { DEFAULT_MEASURED_DEPTH_M }
fn default_kick_off_point() -> f64 { DEFAULT_KICK_OFF_POINT_M }
fn default_dip() -> u32 { DEFAULT_DIP_DEG }
fn default_build_up() -> f64 { DEFAULT_BUILD_UP_DEG_PER_100FT }
fn default_azimuth() -> f64 { DEFAULT_AZIMUTH_DEG }
fn default_casing_depth() -> f64 { DEFAULT_CASING_DEPTH_M }

impl Default for TrajectoryConfig {
    fn default() -> Self {
        Self {
            surface_x: default_surface_x(),
            surface_y: default_surface_y(),
            surface_elevation_m: default_surface_elevation(),
            measured_depth_m: default_measured_depth(),
            kick_off_point_m: default_kick_off_point(),
            dip_deg: default_dip(),
            build_up_deg_per_100ft: default_build_up(),
            azimuth_deg: default_azimuth(),
            casing_depth_m: default_casing_depth(),
        }
    }
}

// ============================================================================
// Projection
// ============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// `"projected"` (meters, e.g. ISN93) or `"geodetic"` (lon/lat degrees)
    #[serde(default)]
    pub coordinate_system: CoordinateSystem,
}

// ============================================================================
// Distance
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DistanceConfig {
    /// Top of the incumbent wells' synthetic depth axis (m)
    #[serde(default = "default_surface_elevation")]
    pub reference_elevation_m: f64,

    /// Compute incumbent wells in parallel
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

fn default_parallel() -> bool { true }

impl Default for DistanceConfig {
    fn default() -> Self {
        Self {
            reference_elevation_m: default_surface_elevation(),
            parallel: default_parallel(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_validates() {
        let config = TargetingConfig::default();
        assert!(config.validate().is_ok(), "Default config must always validate");
    }

    #[test]
    fn test_empty_toml_produces_defaults() {
        let config: TargetingConfig = toml::from_str("").expect("empty TOML should parse");
        assert_eq!(config.trajectory.surface_x, 317_000.0);
        assert_eq!(config.trajectory.dip_deg, 20);
        assert_eq!(config.trajectory.kick_off_point_m, 1000.0);
        assert_eq!(config.distance.reference_elevation_m, 20.0);
        assert!(config.distance.parallel);
        assert_eq!(config.coordinate_system(), CoordinateSystem::Projected);
    }

    #[test]
    fn test_partial_toml_override() {
        let toml_str = r#"
[well]
name = "RN-40"

[trajectory]
azimuth_deg = 300.0
dip_deg = 30
"#;
        let config = TargetingConfig::from_toml_str(toml_str).expect("partial TOML should parse");
        assert_eq!(config.well.name, "RN-40");
        assert_eq!(config.trajectory.azimuth_deg, 300.0);
        assert_eq!(config.trajectory.dip_deg, 30);
        // Untouched values keep their defaults
        assert_eq!(config.trajectory.measured_depth_m, 2500.0);
        assert_eq!(config.well.field, "Reykjanes");
    }

    #[test]
    fn test_drilling_parameters_normalize_build_up() {
        let config = TargetingConfig::default();
        let params = config.drilling_parameters();
        assert!((params.build_up_rate - 0.05).abs() < 1e-12);
        assert_eq!(params.kick_off_point, Some(1000.0));
        assert_eq!(params.surface_elevation, 20.0);
    }

    #[test]
    fn test_validation_catches_bad_trajectory() {
        let mut config = TargetingConfig::default();
        config.trajectory.dip_deg = 1;
        config.trajectory.build_up_deg_per_100ft = 0.0;
        let result = config.validate();
        let Err(ConfigError::Validation(errors)) = result else {
            panic!("expected validation failure");
        };
        assert!(errors.iter().any(|e| e.starts_with("trajectory:") && e.contains("dip")));
        assert!(errors.iter().any(|e| e.contains("build_up_rate")));
    }

    #[test]
    fn test_vertical_well_config() {
        let toml_str = r#"
[trajectory]
kick_off_point_m = 0.0
dip_deg = 0
"#;
        let config = TargetingConfig::from_toml_str(toml_str).expect("vertical well is valid");
        assert!(!config.drilling_parameters().is_directional());
    }

    #[test]
    fn test_parse_error_reported() {
        let result = TargetingConfig::from_toml_str("[trajectory\nsurface_x = ");
        assert!(matches!(result, Err(ConfigError::Parse(_, _))));
    }

    #[test]
    fn test_roundtrip_toml() {
        let mut original = TargetingConfig::default();
        original.projection.coordinate_system = CoordinateSystem::Geodetic;
        original.trajectory.surface_x = -22.6;
        original.trajectory.surface_y = 63.8;
        let toml_str = original.to_toml().expect("serialization should work");
        let roundtripped = TargetingConfig::from_toml_str(&toml_str).expect("deserialization should work");
        assert_eq!(roundtripped.coordinate_system(), CoordinateSystem::Geodetic);
        assert_eq!(roundtripped.trajectory.surface_y, 63.8);
        assert_eq!(roundtripped.trajectory.dip_deg, original.trajectory.dip_deg);
    }

    #[test]
    fn test_all_sections_serialize() {
        let toml_str = TargetingConfig::default().to_toml().expect("serialization should work");
        assert!(toml_str.contains("[well]"), "Missing [well] section");
        assert!(toml_str.contains("[trajectory]"), "Missing [trajectory] section");
        assert!(toml_str.contains("[projection]"), "Missing [projection] section");
        assert!(toml_str.contains("[distance]"), "Missing [distance] section");
        assert!(toml_str.contains("build_up_deg_per_100ft"));
        assert!(toml_str.contains("coordinate_system = \"projected\""));
    }

    #[test]
    fn test_validation_error_display_lists_each_error() {
        let err = ConfigError::Validation(vec!["a is bad".to_string(), "b is bad".to_string()]);
        let msg = err.to_string();
        assert!(msg.contains("  - a is bad"));
        assert!(msg.contains("  - b is bad"));
    }
}
