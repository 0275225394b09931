//! Config Validation Tests
//!
//! Typo detection, range validation and file loading for `TargetingConfig`,
//! exercised independently from the geometry code.

use std::io::Write;

use geowell::config::validation::{
    known_config_keys, suggest_correction, validate_physical_ranges, validate_unknown_keys,
};
use geowell::config::{ConfigError, TargetingConfig};
use geowell::{build_trajectory, CoordinateSystem};

// ============================================================================
// Typo Detection
// ============================================================================

#[test]
fn typo_in_trajectory_section_warns_with_suggestion() {
    let toml_str = r#"
[trajectory]
casing_dept_m = 900.0
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert_eq!(warnings.len(), 1, "Expected exactly 1 warning");
    assert!(warnings[0].field.contains("casing_dept_m"));
    assert_eq!(
        warnings[0].suggestion.as_deref(),
        Some("trajectory.casing_depth_m")
    );
}

#[test]
fn typo_in_well_section_warns() {
    let toml_str = r#"
[well]
naem = "RN-40"
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert_eq!(warnings.len(), 1);
    // "naem" is distance 2 from "name"
    assert_eq!(warnings[0].suggestion.as_deref(), Some("well.name"));
}

#[test]
fn valid_config_produces_zero_warnings() {
    let toml_str = r#"
[well]
name = "RN-40"
field = "Reykjanes"

[trajectory]
surface_x = 317200.0
surface_y = 374100.0
surface_elevation_m = 18.0
measured_depth_m = 2800.0
kick_off_point_m = 900.0
dip_deg = 25
build_up_deg_per_100ft = 2.0
azimuth_deg = 210.0
casing_depth_m = 750.0

[projection]
coordinate_system = "projected"

[distance]
reference_elevation_m = 18.0
parallel = false
"#;
    let warnings = validate_unknown_keys(toml_str);
    assert!(warnings.is_empty(), "Expected 0 warnings, got: {warnings:?}");
}

#[test]
fn far_off_key_gets_no_suggestion() {
    let known = known_config_keys();
    assert!(suggest_correction("trajectory.raster_path", &known).is_none());
    assert_eq!(
        suggest_correction("distance.paralel", &known).as_deref(),
        Some("distance.parallel")
    );
}

#[test]
fn unknown_keys_do_not_reject_config() {
    let toml_str = r#"
[trajectory]
azimuth_dg = 120.0
"#;
    let config = TargetingConfig::from_toml_str(toml_str).expect("typos only warn");
    // The misspelled key is ignored, so the default stands
    assert_eq!(config.trajectory.azimuth_deg, 30.0);
}

// ============================================================================
// Range Validation
// ============================================================================

#[test]
fn default_config_passes_range_checks() {
    let (errors, warnings) = validate_physical_ranges(&TargetingConfig::default());
    assert!(errors.is_empty());
    assert!(warnings.is_empty());
}

#[test]
fn deep_well_warns_but_validates() {
    let mut config = TargetingConfig::default();
    config.trajectory.measured_depth_m = 7000.0;
    let (errors, warnings) = validate_physical_ranges(&config);
    assert!(errors.is_empty());
    assert!(warnings
        .iter()
        .any(|w| w.field == "trajectory.measured_depth_m"));
    assert!(config.validate().is_ok());
}

#[test]
fn aggressive_build_up_warns() {
    let mut config = TargetingConfig::default();
    config.trajectory.build_up_deg_per_100ft = 12.0;
    let (_, warnings) = validate_physical_ranges(&config);
    assert!(warnings
        .iter()
        .any(|w| w.field == "trajectory.build_up_deg_per_100ft"));
}

#[test]
fn short_well_fails_full_validation() {
    let toml_str = r#"
[trajectory]
measured_depth_m = 1200.0
dip_deg = 40
"#;
    // 1000 m kick-off plus a 40 degree build-up at 1.5/100ft already exceeds 1200 m
    let result = TargetingConfig::from_toml_str(toml_str);
    let errors = match result {
        Err(ConfigError::Validation(errors)) => errors,
        other => panic!("expected validation failure, got {other:?}"),
    };
    assert!(errors.iter().all(|e| e.starts_with("trajectory:")));
}

#[test]
fn multiple_errors_are_collected() {
    let mut config = TargetingConfig::default();
    config.trajectory.azimuth_deg = 400.0;
    config.trajectory.casing_depth_m = -1.0;
    config.distance.reference_elevation_m = f64::NAN;
    let Err(ConfigError::Validation(errors)) = config.validate() else {
        panic!("expected validation failure");
    };
    assert!(errors.len() >= 3, "got: {errors:?}");
    assert!(errors.iter().any(|e| e.contains("azimuth")));
    assert!(errors.iter().any(|e| e.contains("casing_depth_m")));
    assert!(errors.iter().any(|e| e.contains("reference_elevation_m")));
}

// ============================================================================
// File Loading
// ============================================================================

#[test]
fn load_from_file_reads_overrides() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[well]
name = "RN-41"

[trajectory]
azimuth_deg = 270.0

[distance]
parallel = false
"#
    )
    .unwrap();

    let config = TargetingConfig::load_from_file(file.path()).unwrap();
    assert_eq!(config.well.name, "RN-41");
    assert_eq!(config.trajectory.azimuth_deg, 270.0);
    assert!(!config.distance_settings().parallel);

    let path = build_trajectory(&config.drilling_parameters(), config.coordinate_system()).unwrap();
    assert!(path.x.last().unwrap() < &config.trajectory.surface_x);
}

#[test]
fn save_then_load_preserves_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("geowell.toml");

    let mut original = TargetingConfig::default();
    original.well.name = "RN-42".to_string();
    original.trajectory.dip_deg = 35;
    original.trajectory.kick_off_point_m = 600.0;
    original.projection.coordinate_system = CoordinateSystem::Geodetic;
    original.trajectory.surface_x = -22.7;
    original.trajectory.surface_y = 63.83;
    original.save_to_file(&path).unwrap();

    let loaded = TargetingConfig::load_from_file(&path).unwrap();
    assert_eq!(loaded.well.name, "RN-42");
    assert_eq!(loaded.trajectory.dip_deg, 35);
    assert_eq!(loaded.trajectory.kick_off_point_m, 600.0);
    assert_eq!(loaded.coordinate_system(), CoordinateSystem::Geodetic);
    assert_eq!(loaded.drilling_parameters(), original.drilling_parameters());
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");
    let result = TargetingConfig::load_from_file(&path);
    let reported = match result {
        Err(ConfigError::Io(reported, _)) => reported,
        other => panic!("expected Io error, got {other:?}"),
    };
    assert_eq!(reported, path);
}

#[test]
fn malformed_file_reports_its_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[trajectory\ndip_deg = ").unwrap();
    let result = TargetingConfig::load_from_file(file.path());
    let reported = match result {
        Err(ConfigError::Parse(reported, _)) => reported,
        other => panic!("expected Parse error, got {other:?}"),
    };
    assert_eq!(reported, file.path());
}
