//! Targeting report handed to rendering code.

use serde::Serialize;
use tracing::info;

use crate::config::TargetingConfig;
use crate::distance::compute_distances;
use crate::error::GeometryError;
use crate::trajectory::build_trajectory;
use crate::types::{DistanceResult, IncumbentWell, TrajectoryPath, WellClearance};

/// Proposed trajectory plus its clearance to every incumbent in range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetingReport {
    pub well_name: String,
    pub trajectory: TrajectoryPath,
    pub distances: DistanceResult,
    /// Closest approach per incumbent, nearest first
    pub clearances: Vec<WellClearance>,
}

impl TargetingReport {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// The closest incumbent, if any is in range.
    pub fn nearest(&self) -> Option<&WellClearance> {
        self.clearances.first()
    }
}

/// Build the configured trajectory and measure it against `incumbents`.
pub fn assess_targeting(
    config: &TargetingConfig,
    incumbents: &[IncumbentWell],
) -> Result<TargetingReport, GeometryError> {
    let trajectory = build_trajectory(&config.drilling_parameters(), config.coordinate_system())?;
    let distances = compute_distances(&trajectory, incumbents, &config.distance_settings());
    let clearances = distances.nearest(distances.len());

    if let Some(closest) = clearances.first() {
        info!(
            well = %config.well.name,
            nearest = %closest.name,
            min_distance_m = closest.min_distance,
            in_range = clearances.len(),
            "Targeting assessment complete"
        );
    } else {
        info!(well = %config.well.name, "Targeting assessment complete, no incumbent wells in range");
    }

    Ok(TargetingReport {
        well_name: config.well.name.clone(),
        trajectory,
        distances,
        clearances,
    })
}
