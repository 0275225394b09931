//! Targeting Configuration Module
//!
//! Default drilling parameters and tuning loaded from TOML.
//!
//! ## Loading Order
//!
//! 1. `GEOWELL_CONFIG` environment variable (path to TOML file)
//! 2. `geowell.toml` in the current working directory
//! 3. Built-in defaults (the Reykjanes reference well)
//!
//! ## Usage
//!
//! The config is an ordinary value: load it once and hand the pieces to the
//! trajectory and distance functions.
//!
//! ```ignore
//! let config = TargetingConfig::load();
//! let path = build_trajectory(&config.drilling_parameters(), config.coordinate_system())?;
//! let distances = compute_distances(&path, &wells, &config.distance_settings());
//! ```

mod targeting_config;
pub mod defaults;
pub mod validation;

pub use targeting_config::*;
