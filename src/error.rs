//! Error types for trajectory synthesis and distance computation.

use thiserror::Error;

/// Errors raised by the geometry core.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Drilling parameters that would produce degenerate geometry.
    /// Carries one message per violated rule.
    #[error("Invalid drilling parameters: {}", .0.join("; "))]
    InvalidParameters(Vec<String>),

    /// Interpolation window with a flat depth axis (`a[2] == a[0]`).
    #[error("Degenerate interpolation window: depth {lower} equals depth {upper}")]
    DegenerateInterpolation { lower: f64, upper: f64 },
}

impl GeometryError {
    /// Messages for `InvalidParameters`, empty for other variants.
    pub fn violations(&self) -> &[String] {
        match self {
            GeometryError::InvalidParameters(v) => v,
            GeometryError::DegenerateInterpolation { .. } => &[],
        }
    }
}
