//! Trajectory Module
//!
//! Synthesizes the proposed well's 3D path from drilling parameters.
//!
//! - `build_profile()` - 2D radial/depth profile and casing split
//! - `fork_into_xy()` - azimuthal projection of the radial offsets
//! - `build_trajectory()` - both steps, producing a `TrajectoryPath`

mod profile;
mod projection;

pub use profile::build_profile;
pub use projection::fork_into_xy;

use tracing::debug;

use crate::error::GeometryError;
use crate::types::{CoordinateSystem, DrillingParameters, TrajectoryPath};

/// Build the proposed well's 3D path.
pub fn build_trajectory(
    params: &DrillingParameters,
    coordinates: CoordinateSystem,
) -> Result<TrajectoryPath, GeometryError> {
    let profile = build_profile(params)?;
    let (x, y) = fork_into_xy(
        &profile.r,
        params.azimuth,
        params.surface_x,
        params.surface_y,
        coordinates,
    );

    debug!(
        samples = profile.z.len(),
        azimuth = params.azimuth,
        coordinates = %coordinates,
        "Projected trajectory"
    );

    Ok(TrajectoryPath {
        x,
        y,
        z: profile.z,
        r: profile.r,
        casing_split: profile.casing_split,
    })
}
