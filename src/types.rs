//! Shared data structures for well targeting
//!
//! - `DrillingParameters`: directional-drilling inputs for the proposed well
//! - `TrajectoryPath`: the synthesized 3D borehole path
//! - `IncumbentWell`: a pre-existing (vertical) well
//! - `DistanceResult`: per-well horizontal separation sequences

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::config::defaults::BUILD_UP_NORMALIZATION;
use crate::error::GeometryError;

// ============================================================================
// Drilling Parameters
// ============================================================================

/// Directional-drilling parameters for the proposed well.
///
/// All lengths are in meters. `z` runs positive downward from the datum,
/// so the wellhead sits at `-surface_elevation`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrillingParameters {
    /// Wellhead easting (or longitude when geodetic)
    pub surface_x: f64,
    /// Wellhead northing (or latitude when geodetic)
    pub surface_y: f64,
    /// Wellhead elevation above datum (`Z`)
    pub surface_elevation: f64,
    /// Total along-hole length (`mmd`)
    pub measured_depth: f64,
    /// Kick-off measured depth. `None` or `Some(0.0)` means fully vertical.
    pub kick_off_point: Option<f64>,
    /// Inclination after build-up in whole degrees. Also the build-up
    /// iteration count.
    pub dip: u32,
    /// Degrees of inclination gained per unit length, already normalized
    pub build_up_rate: f64,
    /// Bearing of the directional leg, degrees clockwise from north
    pub azimuth: f64,
    /// Depth at which casing ends. Only used for the casing split index.
    pub casing_depth: f64,
}

impl DrillingParameters {
    /// Set the build-up rate from degrees per 100 ft.
    ///
    /// One normalized unit is 30 m (≈ 100 ft), so the stored rate is
    /// `rate / 30`.
    #[must_use]
    pub fn with_build_up_per_100ft(mut self, rate: f64) -> Self {
        self.build_up_rate = rate / BUILD_UP_NORMALIZATION;
        self
    }

    /// Kick-off point as a plain number, `0.0` when absent.
    pub fn kop(&self) -> f64 {
        self.kick_off_point.unwrap_or(0.0)
    }

    /// Whether the well deviates from vertical at all.
    pub fn is_directional(&self) -> bool {
        self.kop() != 0.0
    }

    /// Measured length left for the slanted leg after build-up (`L2`).
    pub fn slanted_length(&self) -> f64 {
        self.measured_depth - self.kop() - f64::from(self.dip) / self.build_up_rate
    }

    /// Reject parameters that would produce degenerate geometry.
    ///
    /// Collects every violated rule instead of stopping at the first.
    pub fn validate(&self) -> Result<(), GeometryError> {
        let mut errors: Vec<String> = Vec::new();

        for (name, value) in [
            ("surface_x", self.surface_x),
            ("surface_y", self.surface_y),
            ("surface_elevation", self.surface_elevation),
            ("measured_depth", self.measured_depth),
            ("kick_off_point", self.kop()),
            ("build_up_rate", self.build_up_rate),
            ("azimuth", self.azimuth),
            ("casing_depth", self.casing_depth),
        ] {
            if !value.is_finite() {
                errors.push(format!("{name} must be finite (got {value})"));
            }
        }
        if !errors.is_empty() {
            return Err(GeometryError::InvalidParameters(errors));
        }

        if self.measured_depth <= 0.0 {
            errors.push(format!(
                "measured_depth ({:.1}) must be > 0",
                self.measured_depth
            ));
        }
        if self.kop() < 0.0 {
            errors.push(format!("kick_off_point ({:.1}) cannot be negative", self.kop()));
        }
        if !(0.0..=360.0).contains(&self.azimuth) {
            errors.push(format!(
                "azimuth ({:.1}) must lie within 0-360 degrees",
                self.azimuth
            ));
        }

        if self.is_directional() {
            if self.dip <= 1 {
                errors.push(format!("dip ({}) must be > 1 for a directional well", self.dip));
            }
            // cos(dip) divides the slanted-leg length
            if self.dip >= 90 {
                errors.push(format!("dip ({}) must be < 90 degrees", self.dip));
            }
            if self.build_up_rate <= 0.0 {
                errors.push(format!(
                    "build_up_rate ({}) must be > 0 for a directional well",
                    self.build_up_rate
                ));
            }
            if self.measured_depth <= self.kop() {
                errors.push(format!(
                    "measured_depth ({:.1}) must exceed kick_off_point ({:.1})",
                    self.measured_depth,
                    self.kop()
                ));
            } else if self.build_up_rate > 0.0 && self.slanted_length() <= 0.0 {
                errors.push(format!(
                    "measured_depth ({:.1}) is too short to finish build-up to {} degrees (slanted leg {:.1})",
                    self.measured_depth,
                    self.dip,
                    self.slanted_length()
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(GeometryError::InvalidParameters(errors))
        }
    }
}

// ============================================================================
// Coordinate System
// ============================================================================

/// How wellhead coordinates are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CoordinateSystem {
    /// Projected meters (e.g. ISN93). Offsets apply directly.
    #[default]
    Projected,
    /// Longitude/latitude degrees. Offsets are converted with a fixed
    /// meters-per-degree factor.
    Geodetic,
}

impl std::fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CoordinateSystem::Projected => write!(f, "projected"),
            CoordinateSystem::Geodetic => write!(f, "geodetic"),
        }
    }
}

// ============================================================================
// Trajectory
// ============================================================================

/// Where the casing ends along the sampled path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CasingSplit {
    /// Casing depth fell inside one of the legs
    Resolved { index: usize },
    /// Casing depth matched no leg; `fallback` is the boundary sample used
    /// instead
    Unresolved { fallback: usize },
}

impl CasingSplit {
    /// The split index, whichever way it was obtained.
    pub fn index(&self) -> usize {
        match *self {
            CasingSplit::Resolved { index } => index,
            CasingSplit::Unresolved { fallback } => fallback,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, CasingSplit::Resolved { .. })
    }
}

/// 2D radial/depth profile before azimuthal projection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Horizontal offset from the wellhead along the azimuth
    pub r: Vec<f64>,
    /// True vertical depth, positive down
    pub z: Vec<f64>,
    pub casing_split: CasingSplit,
}

/// The proposed well's sampled 3D path.
///
/// `x`, `y`, `z` and `r` always have the same length, and `z` is
/// non-decreasing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryPath {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub z: Vec<f64>,
    /// Radial offset from the 2D profile (used for 2D section plots)
    pub r: Vec<f64>,
    pub casing_split: CasingSplit,
}

impl TrajectoryPath {
    pub fn len(&self) -> usize {
        self.z.len()
    }

    pub fn is_empty(&self) -> bool {
        self.z.is_empty()
    }

    pub fn casing_split_index(&self) -> usize {
        self.casing_split.index()
    }

    /// Samples as `[x, y, z]` rows.
    pub fn points(&self) -> Vec<[f64; 3]> {
        self.x
            .iter()
            .zip(&self.y)
            .zip(&self.z)
            .map(|((&x, &y), &z)| [x, y, z])
            .collect()
    }
}

// ============================================================================
// Incumbent Wells & Distances
// ============================================================================

/// A pre-existing well, modelled as vertical from the reference elevation
/// down to `max_depth`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncumbentWell {
    pub name: String,
    pub x: f64,
    pub y: f64,
    pub max_depth: f64,
}

impl IncumbentWell {
    pub fn new(name: impl Into<String>, x: f64, y: f64, max_depth: f64) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            max_depth,
        }
    }
}

/// Horizontal distances from the proposed well, keyed by incumbent name.
///
/// Wells without a single depth-matched sample are absent, never present
/// with an empty sequence. Iteration order is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistanceResult {
    distances: HashMap<String, Vec<f64>>,
}

impl DistanceResult {
    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.distances.get(name).map(Vec::as_slice)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.distances.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.distances
            .iter()
            .map(|(name, d)| (name.as_str(), d.as_slice()))
    }

    pub fn into_inner(self) -> HashMap<String, Vec<f64>> {
        self.distances
    }
}

impl FromIterator<(String, Vec<f64>)> for DistanceResult {
    /// Empty sequences are dropped on the way in.
    fn from_iter<T: IntoIterator<Item = (String, Vec<f64>)>>(iter: T) -> Self {
        Self {
            distances: iter.into_iter().filter(|(_, d)| !d.is_empty()).collect(),
        }
    }
}

/// Closest approach of the proposed well to one incumbent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WellClearance {
    pub name: String,
    pub min_distance: f64,
    /// Position of the minimum within that well's distance sequence
    pub sample_index: usize,
}
