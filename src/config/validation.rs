//! Config validation: unknown-key detection with "did you mean?"
//! suggestions, and physical range checks.
//!
//! The raw TOML is first walked as a `toml::Value` tree and compared against
//! the known field names; unknown keys only produce warnings. Range checks
//! run on the deserialized `TargetingConfig`.

use std::collections::HashSet;

use crate::types::CoordinateSystem;

/// A non-fatal config warning (typo, suspicious value).
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    pub field: String,
    pub message: String,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)?;
        if let Some(ref s) = self.suggestion {
            write!(f, " (did you mean '{s}'?)")?;
        }
        Ok(())
    }
}

// ============================================================================
// Known Config Keys
// ============================================================================

/// Every valid dotted key path of `TargetingConfig`.
///
/// Kept in step with the structs in `targeting_config.rs` by hand.
pub fn known_config_keys() -> HashSet<&'static str> {
    [
        // [well]
        "well",
        "well.name",
        "well.field",
        // [trajectory]
        "trajectory",
        "trajectory.surface_x",
        "trajectory.surface_y",
        "trajectory.surface_elevation_m",
        "trajectory.measured_depth_m",
        "trajectory.kick_off_point_m",
        "trajectory.dip_deg",
        "trajectory.build_up_deg_per_100ft",
        "trajectory.azimuth_deg",
        "trajectory.casing_depth_m",
        // [projection]
        "projection",
        "projection.coordinate_system",
        // [distance]
        "distance",
        "distance.reference_elevation_m",
        "distance.parallel",
    ]
    .into_iter()
    .collect()
}

// ============================================================================
// TOML Key Walking
// ============================================================================

/// Collect the dotted path of every key in a `toml::Value` tree.
///
/// `{ a = { b = 1, c = 2 } }` yields `["a", "a.b", "a.c"]`.
pub fn walk_toml_keys(value: &toml::Value, prefix: &str) -> Vec<String> {
    let Some(table) = value.as_table() else {
        return Vec::new();
    };
    let mut keys = Vec::new();
    for (k, v) in table {
        let path = if prefix.is_empty() {
            k.clone()
        } else {
            format!("{prefix}.{k}")
        };
        if v.is_table() {
            keys.push(path.clone());
            keys.extend(walk_toml_keys(v, &path));
        } else {
            keys.push(path);
        }
    }
    keys
}

// ============================================================================
// Suggestions
// ============================================================================

/// Levenshtein edit distance, by character.
fn levenshtein(a: &str, b: &str) -> usize {
    let b_chars: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0; b_chars.len() + 1];

    for (i, ca) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b_chars.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}

/// Closest known key within an edit distance of 3, if any.
///
/// Ties go to the alphabetically first key so suggestions are stable.
pub fn suggest_correction(unknown: &str, known: &HashSet<&str>) -> Option<String> {
    known
        .iter()
        .map(|&k| (levenshtein(unknown, k), k))
        .filter(|&(dist, _)| dist <= 3)
        .min()
        .map(|(_, k)| k.to_string())
}

/// Warnings for every key in `raw_toml` that `TargetingConfig` does not know.
///
/// Unparseable input yields no warnings; serde reports the parse error.
pub fn validate_unknown_keys(raw_toml: &str) -> Vec<ValidationWarning> {
    let Ok(value) = raw_toml.parse::<toml::Value>() else {
        return Vec::new();
    };

    let known = known_config_keys();
    walk_toml_keys(&value, "")
        .into_iter()
        .filter(|key| !known.contains(key.as_str()))
        .map(|key| ValidationWarning {
            suggestion: suggest_correction(&key, &known),
            message: format!("Unknown config key '{key}'"),
            field: key,
        })
        .collect()
}

// ============================================================================
// Physical Range Validation
// ============================================================================

/// Range checks beyond what the trajectory builder itself rejects.
///
/// Returns (errors, warnings). Errors are impossible values; warnings are
/// unusual for a geothermal well but still buildable.
pub fn validate_physical_ranges(
    config: &super::TargetingConfig,
) -> (Vec<String>, Vec<ValidationWarning>) {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();
    let t = &config.trajectory;

    if config.coordinate_system() == CoordinateSystem::Geodetic {
        if !(-90.0..=90.0).contains(&t.surface_y) {
            errors.push(format!(
                "trajectory.surface_y = {:.4} is not a latitude (geodetic coordinates need -90..90)",
                t.surface_y
            ));
        }
        if !(-180.0..=180.0).contains(&t.surface_x) {
            errors.push(format!(
                "trajectory.surface_x = {:.4} is not a longitude (geodetic coordinates need -180..180)",
                t.surface_x
            ));
        }
    }

    if t.casing_depth_m < 0.0 {
        errors.push(format!(
            "trajectory.casing_depth_m = {:.1} cannot be negative",
            t.casing_depth_m
        ));
    }

    // Deepest Icelandic geothermal wells reach ~5 km
    if t.measured_depth_m > 6000.0 {
        warnings.push(ValidationWarning {
            field: "trajectory.measured_depth_m".to_string(),
            message: format!(
                "measured_depth_m = {:.0} is outside the typical geothermal range (0-6000 m)",
                t.measured_depth_m
            ),
            suggestion: None,
        });
    }

    if t.casing_depth_m > t.measured_depth_m {
        warnings.push(ValidationWarning {
            field: "trajectory.casing_depth_m".to_string(),
            message: format!(
                "casing_depth_m = {:.0} lies below the well bottom ({:.0} m); the whole well is cased",
                t.casing_depth_m, t.measured_depth_m
            ),
            suggestion: None,
        });
    }

    if t.build_up_deg_per_100ft > 10.0 {
        warnings.push(ValidationWarning {
            field: "trajectory.build_up_deg_per_100ft".to_string(),
            message: format!(
                "build_up_deg_per_100ft = {:.1} is unusually aggressive (typical 1-5)",
                t.build_up_deg_per_100ft
            ),
            suggestion: None,
        });
    }

    (errors, warnings)
}

// ============================================================================
// Tests
// ============================================================================
