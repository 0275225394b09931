//! geowell: Geothermal Well Targeting
//!
//! Computational core for planning a directional geothermal well next to
//! existing ones.
//!
//! ## Architecture
//!
//! - **Trajectory**: three-leg borehole path (vertical, build-up, slanted)
//!   projected onto the horizontal plane by azimuth
//! - **Distance**: horizontal separation from each incumbent well at
//!   matching vertical depths
//! - **Config**: TOML defaults for the drilling parameters and tuning
//! - **Report**: both results bundled for rendering code
//!
//! Everything is pure and synchronous; the only I/O is config loading.

pub mod config;
pub mod distance;
pub mod error;
pub mod numeric;
pub mod report;
pub mod trajectory;
pub mod types;

pub use config::{ConfigError, TargetingConfig};
pub use distance::{compute_distances, DistanceSettings};
pub use error::GeometryError;
pub use report::{assess_targeting, TargetingReport};
pub use trajectory::{build_profile, build_trajectory, fork_into_xy};
pub use types::{
    CasingSplit, CoordinateSystem, DistanceResult, DrillingParameters, IncumbentWell, Profile,
    TrajectoryPath, WellClearance,
};
