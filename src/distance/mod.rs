//! Distance Module
//!
//! Horizontal separation between the proposed well and each incumbent well
//! at matching true vertical depths.
//!
//! Incumbents are modelled as vertical: only their wellhead and bottom depth
//! are known, so each one gets a synthetic depth axis running linearly from
//! the reference elevation to `max_depth` with as many samples as the
//! proposed well.

mod interpolate;

pub use interpolate::{interpolate, try_interpolate};

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::config::defaults::DEFAULT_SURFACE_ELEVATION_M;
use crate::numeric::linspace;
use crate::types::{DistanceResult, IncumbentWell, TrajectoryPath, WellClearance};

/// Tuning for the distance computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DistanceSettings {
    /// Top of every incumbent's synthetic depth axis (m)
    pub reference_elevation: f64,
    /// Fan the per-well work out over the rayon pool
    pub parallel: bool,
}

impl Default for DistanceSettings {
    fn default() -> Self {
        Self {
            reference_elevation: DEFAULT_SURFACE_ELEVATION_M,
            parallel: true,
        }
    }
}

/// Distances from the proposed well to every incumbent it shares depths
/// with.
///
/// Wells are independent of each other; with `settings.parallel` they are
/// processed on the rayon pool. The output is the same either way.
pub fn compute_distances(
    proposed: &TrajectoryPath,
    incumbents: &[IncumbentWell],
    settings: &DistanceSettings,
) -> DistanceResult {
    let per_well = |well: &IncumbentWell| {
        (
            well.name.clone(),
            well_distances(proposed, well, settings.reference_elevation),
        )
    };

    let result: DistanceResult = if settings.parallel {
        incumbents
            .par_iter()
            .map(per_well)
            .collect::<Vec<_>>()
            .into_iter()
            .collect()
    } else {
        incumbents.iter().map(per_well).collect()
    };

    debug!(
        incumbents = incumbents.len(),
        in_range = result.len(),
        samples = proposed.len(),
        "Computed incumbent well distances"
    );

    result
}

/// Distance sequence for one incumbent, one entry per interior proposed
/// sample whose depth lies strictly inside a bracket of the incumbent's
/// depth axis.
fn well_distances(
    proposed: &TrajectoryPath,
    well: &IncumbentWell,
    reference_elevation: f64,
) -> Vec<f64> {
    let z = &proposed.z;
    let n = z.len();
    let mut distances = Vec::new();
    if n < 3 {
        return distances;
    }

    let z_incumbent = linspace(reference_elevation, well.max_depth, n);

    for p in 1..n - 1 {
        let depth = z[p];
        let window = [z[p - 1], depth, z[p + 1]];
        for bracket in z_incumbent[1..].windows(2) {
            if bracket[0] < depth && depth < bracket[1] {
                let x_interp = synthesize(&window, well.x, &well.name);
                let y_interp = synthesize(&window, well.y, &well.name);
                let dx = x_interp - proposed.x[p];
                let dy = y_interp - proposed.y[p];
                distances.push((dx * dx + dy * dy).sqrt());
            }
        }
    }

    distances
}

/// Incumbent coordinate at the proposed well's depth window.
///
/// The incumbent is vertical, so the target pair is the same value twice.
fn synthesize(window: &[f64; 3], value: f64, well: &str) -> f64 {
    let target = [value, value];
    try_interpolate(window, &target).unwrap_or_else(|e| {
        trace!(well, error = %e, "Flat depth window, using incumbent coordinate");
        target[0]
    })
}

impl DistanceResult {
    /// Closest approach to every well in the result, unordered.
    pub fn clearances(&self) -> Vec<WellClearance> {
        self.iter()
            .filter_map(|(name, distances)| {
                distances
                    .iter()
                    .copied()
                    .enumerate()
                    .min_by(|a, b| a.1.total_cmp(&b.1))
                    .map(|(sample_index, min_distance)| WellClearance {
                        name: name.to_string(),
                        min_distance,
                        sample_index,
                    })
            })
            .collect()
    }

    /// The `n` closest wells, nearest first. Ties are ordered by name.
    pub fn nearest(&self, n: usize) -> Vec<WellClearance> {
        let mut clearances = self.clearances();
        clearances.sort_by(|a, b| {
            a.min_distance
                .total_cmp(&b.min_distance)
                .then_with(|| a.name.cmp(&b.name))
        });
        clearances.truncate(n);
        clearances
    }
}
